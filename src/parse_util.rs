/// Takes the next line from the slice, without its linebreak. Returns `None` once the slice is
/// exhausted.
///
/// A linebreak is any of
/// * `\n`
/// * `\r`
/// * `\r\n`
///
/// This function completely consumes the linebreak.
pub fn take_line(bytes: &[u8]) -> (Option<&[u8]>, &[u8]) {
    if bytes.is_empty() {
        return (None, bytes);
    }

    for (j, b) in bytes.iter().enumerate() {
        match b {
            b'\n' => return (Some(&bytes[..j]), &bytes[j + 1..]),
            b'\r' => {
                let rest = &bytes[j + 1..];
                let rest = rest.strip_prefix(b"\n").unwrap_or(rest);

                return (Some(&bytes[..j]), rest);
            }
            _ => {}
        }
    }

    (Some(bytes), &bytes[bytes.len()..])
}

/// Drops trailing ascii whitespace
pub fn trim_end_ws(bytes: &[u8]) -> &[u8] {
    let mut i = bytes.len();

    while i > 0 && bytes[i - 1].is_ascii_whitespace() {
        i -= 1;
    }

    &bytes[..i]
}

/// Splits `bytes` into lines, trimming trailing whitespace from each.
pub fn lines(mut bytes: &[u8]) -> Vec<&[u8]> {
    let mut lines = Vec::new();

    while let (Some(line), rest) = take_line(bytes) {
        lines.push(trim_end_ws(line));
        bytes = rest;
    }

    lines
}
