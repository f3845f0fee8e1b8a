use tablechart::core::{CellValue, coerce_number};

#[test]
fn coerces_plain_integers_and_decimals() {
    assert_eq!(coerce_number(&CellValue::from("10")), Some(10.0));
    assert_eq!(coerce_number(&CellValue::from("3.25")), Some(3.25));
    assert_eq!(coerce_number(&CellValue::from("-7")), Some(-7.0));
    assert_eq!(coerce_number(&CellValue::from("+4.")), Some(4.0));
    assert_eq!(coerce_number(&CellValue::from(".5")), Some(0.5));
}

#[test]
fn coerces_with_surrounding_whitespace() {
    assert_eq!(coerce_number(&CellValue::from("  12.5  ")), Some(12.5));
    assert_eq!(coerce_number(&CellValue::from("\t-3\n")), Some(-3.0));
}

#[test]
fn coerces_numeric_prefix_and_discards_trailing_text() {
    assert_eq!(coerce_number(&CellValue::from("12abc")), Some(12.0));
    assert_eq!(coerce_number(&CellValue::from("3.5kg")), Some(3.5));
    assert_eq!(coerce_number(&CellValue::from("1e3")), Some(1000.0));
    assert_eq!(coerce_number(&CellValue::from("2e-2")), Some(0.02));
    // Exponent marker without digits is trailing garbage, not an exponent.
    assert_eq!(coerce_number(&CellValue::from("1e")), Some(1.0));
    assert_eq!(coerce_number(&CellValue::from("1e+")), Some(1.0));
}

#[test]
fn rejects_values_with_no_numeric_prefix() {
    assert_eq!(coerce_number(&CellValue::from("")), None);
    assert_eq!(coerce_number(&CellValue::from("   ")), None);
    assert_eq!(coerce_number(&CellValue::from("abc")), None);
    assert_eq!(coerce_number(&CellValue::from("x12")), None);
    assert_eq!(coerce_number(&CellValue::from(".")), None);
    assert_eq!(coerce_number(&CellValue::from("-")), None);
    assert_eq!(coerce_number(&CellValue::from("e5")), None);
    assert_eq!(coerce_number(&CellValue::Null), None);
}

#[test]
fn passes_finite_numbers_through_and_rejects_non_finite() {
    assert_eq!(coerce_number(&CellValue::Number(42.5)), Some(42.5));
    assert_eq!(coerce_number(&CellValue::Number(0.0)), Some(0.0));
    assert_eq!(coerce_number(&CellValue::Number(f64::NAN)), None);
    assert_eq!(coerce_number(&CellValue::Number(f64::INFINITY)), None);
}

#[test]
fn coercion_is_deterministic() {
    let cells = [
        CellValue::from("10.5"),
        CellValue::from("bad"),
        CellValue::Number(3.0),
        CellValue::Null,
    ];
    for cell in &cells {
        assert_eq!(coerce_number(cell), coerce_number(cell));
    }
}
