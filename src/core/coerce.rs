use crate::core::CellValue;

/// Coerces a raw cell to a finite number, or `None` when it does not parse.
///
/// This is the single coercion rule shared by every aggregation path. Text is
/// parsed permissively: surrounding whitespace is ignored, an optional sign,
/// decimal point, and exponent are accepted, and trailing garbage after a
/// numeric prefix is discarded (`"12abc"` coerces to `12.0`). The parse is
/// invalid when it consumes zero digits or the result is non-finite, so every
/// coerced value downstream is a finite `f64`.
#[must_use]
pub fn coerce_number(cell: &CellValue) -> Option<f64> {
    match cell {
        CellValue::Null => None,
        CellValue::Number(value) => value.is_finite().then_some(*value),
        CellValue::Text(text) => parse_number_prefix(text),
    }
}

/// Parses the longest leading decimal literal of `text`, after trimming.
fn parse_number_prefix(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    let bytes = trimmed.as_bytes();

    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx += 1;
    }

    let mut digits = 0;
    while idx < bytes.len() && bytes[idx].is_ascii_digit() {
        idx += 1;
        digits += 1;
    }
    if idx < bytes.len() && bytes[idx] == b'.' {
        idx += 1;
        while idx < bytes.len() && bytes[idx].is_ascii_digit() {
            idx += 1;
            digits += 1;
        }
    }
    if digits == 0 {
        return None;
    }

    // An exponent only counts when it carries at least one digit; otherwise
    // the mantissa alone is the parsed prefix ("1e" parses as 1).
    let mut end = idx;
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut cursor = idx + 1;
        if matches!(bytes.get(cursor), Some(b'+' | b'-')) {
            cursor += 1;
        }
        let exponent_start = cursor;
        while cursor < bytes.len() && bytes[cursor].is_ascii_digit() {
            cursor += 1;
        }
        if cursor > exponent_start {
            end = cursor;
        }
    }

    let value: f64 = trimmed[..end].parse().ok()?;
    value.is_finite().then_some(value)
}
