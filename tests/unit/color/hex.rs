use super::*;

#[test]
fn parses_with_and_without_hash() {
    assert_eq!(parse_hex("#0a0B0c").unwrap(), Rgb8::new(10, 11, 12));
    assert_eq!(parse_hex("ffffff").unwrap(), Rgb8::new(255, 255, 255));
    assert_eq!(parse_hex("  #000000 ").unwrap(), Rgb8::BLACK);
}

#[test]
fn rejects_anything_but_six_hex_digits() {
    for bad in ["", "#", "#fff", "#ff00ff80", "#gg0000", "12345", "#12 456", "#ff00f\u{e9}"] {
        let err = parse_hex(bad).unwrap_err();
        assert!(
            matches!(err, RibbonError::InvalidColorFormat(_)),
            "expected InvalidColorFormat for {bad:?}"
        );
    }
}
