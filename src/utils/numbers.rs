use log::debug;

/// Length in bytes of the number literal at the start of `text`.
///
/// A literal is one or more ASCII digits, optionally followed by `.` and one or
/// more digits. A dot without a digit after it is left unconsumed.
pub fn number_prefix_len(text: &str) -> usize {
    let bytes = text.as_bytes();
    let int_len = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if int_len == 0 {
        return 0;
    }

    if bytes.get(int_len) == Some(&b'.') {
        let frac_len = bytes[int_len + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac_len > 0 {
            return int_len + 1 + frac_len;
        }
    }

    int_len
}

/// Convert a number literal to its floating-point value.
///
/// Literals too large for `f64` yield `None`, since their infinite value has no
/// literal form to render back to.
pub fn literal_to_number(literal: &str) -> Option<f64> {
    let value = literal.parse::<f64>().ok().filter(|v| v.is_finite());
    debug!("Converted '{}' to {:?}", literal, value);
    value
}
