/// Converts a byte buffer filled in by a C API into an owned string.
///
/// Stops at the first NUL, replaces invalid UTF-8 and trims trailing
/// whitespace, since drivers tend to pad their logs with both.
pub fn from_c_buffer(mut bytes: Vec<u8>) -> String {
    if let Some(nul) = bytes.iter().position(|&b| b == 0) {
        bytes.truncate(nul);
    }
    let mut text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => String::from_utf8_lossy(err.as_bytes()).into_owned(),
    };
    let trimmed_len = text.trim_end().len();
    text.truncate(trimmed_len);
    text
}

/// Prefixes every line with `" | "`, framing a multi-line log in output.
pub fn framed_lines(text: &str) -> String {
    let mut framed = String::from(" | ");
    for line in text.lines() {
        framed.push_str("\n | ");
        framed.push_str(line);
    }
    framed.push_str("\n | ");
    framed
}
