use super::*;
use serde_json::json;

#[test]
fn parses_hex_forms() {
    assert_eq!(Color::parse("#f00").unwrap(), Color::from_rgba8(255, 0, 0, 255));
    assert_eq!(Color::parse("#0f08").unwrap(), Color::from_rgba8(0, 255, 0, 136));
    assert_eq!(
        Color::parse("#3A5f7e").unwrap(),
        Color::from_rgba8(0x3a, 0x5f, 0x7e, 255)
    );
    assert_eq!(
        "  #01020380 ".parse::<Color>().unwrap(),
        Color::from_rgba8(1, 2, 3, 128)
    );
}

#[test]
fn parses_functional_forms() {
    assert_eq!(
        Color::parse("rgb(10, 20, 30)").unwrap(),
        Color::from_rgba8(10, 20, 30, 255)
    );
    assert_eq!(
        Color::parse("RGBA(10,20,30,0.5)").unwrap(),
        Color::from_rgba8(10, 20, 30, 127)
    );
}

#[test]
fn malformed_strings_fail_with_descriptive_error() {
    for bad in ["", "red", "#12", "#ggg", "rgb(1,2)", "rgba(1,2,3)", "rgb(a,b,c)"] {
        let err = Color::parse(bad).unwrap_err();
        assert!(
            matches!(err, TesseraError::ColorParse(_)),
            "{bad:?} gave {err:?}"
        );
        assert!(err.to_string().contains("color parse error:"));
    }
}

#[test]
fn hex_roundtrips_through_serde() {
    let c = Color::from_rgba8(0xde, 0xad, 0xbe, 0xef);
    let v = serde_json::to_value(c).unwrap();
    assert_eq!(v, json!("#deadbeef"));
    let back: Color = serde_json::from_value(v).unwrap();
    assert_eq!(back, c);
}

#[test]
fn deserializes_object_and_array() {
    let c: Color = serde_json::from_value(json!({"r": 1, "g": 2, "b": 3})).unwrap();
    assert_eq!(c, Color::from_rgba8(1, 2, 3, 255));
    let c: Color = serde_json::from_value(json!([4, 5, 6, 7])).unwrap();
    assert_eq!(c, Color::from_rgba8(4, 5, 6, 7));
    assert!(serde_json::from_value::<Color>(json!([1, 2])).is_err());
}
