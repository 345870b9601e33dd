use std::fs::File;
use std::io;
use std::io::Read;
use std::path::Path;

/// Reads a whole source file and returns its raw bytes.
///
/// - Reads the entire file into memory
/// - No decoding is done here: non-printable and non-ASCII bytes are
///   left for the sanitizer
pub fn load<P: AsRef<Path>>(filename: P) -> io::Result<Vec<u8>> {
	let mut contents = Vec::new();
	File::open(filename)?.read_to_end(&mut contents)?;
	Ok(contents)
}
