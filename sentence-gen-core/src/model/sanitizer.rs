/// Returns whether `byte` is printable ASCII (`0x20..=0x7E`).
pub fn is_printable(byte: u8) -> bool {
	byte == b' ' || byte.is_ascii_graphic()
}

/// Overwrites every non-printable byte of `buffer` with a space.
///
/// Non-printable bytes may lead to duplicates like `"\xefthe"` and `"the"`
/// even though both print `the`. Control characters (newlines included)
/// and every byte above `0x7E` are replaced.
pub fn sanitize_in_place(buffer: &mut [u8]) {
	for byte in buffer.iter_mut() {
		if !is_printable(*byte) {
			*byte = b' ';
		}
	}
}

/// Returns a sanitized copy of `raw` as a `String`.
///
/// The result has exactly `raw.len()` bytes, all of them printable ASCII.
pub fn sanitize(raw: &[u8]) -> String {
	raw.iter()
		.map(|&byte| if is_printable(byte) { byte as char } else { ' ' })
		.collect()
}
