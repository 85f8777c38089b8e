use super::*;

#[test]
fn rgb8_hex_roundtrip_is_lowercase() {
    let c = Rgb8::from_hex("#FF8000").unwrap();
    assert_eq!(c, Rgb8::new(255, 128, 0));
    assert_eq!(c.to_hex(), "#ff8000");
}

#[test]
fn color_stops_from_hex_keeps_order_and_fails_fast() {
    let stops = ColorStops::from_hex(["#ff0000", "0000ff"]).unwrap();
    assert_eq!(
        stops.as_slice(),
        &[Rgb8::new(255, 0, 0), Rgb8::new(0, 0, 255)]
    );

    let err = ColorStops::from_hex(["#ff0000", "#nothex"]).unwrap_err();
    assert!(matches!(err, RibbonError::InvalidColorFormat(_)));
}

#[test]
fn canvas_empty_and_len() {
    assert!(Canvas::new(0, 4).is_empty());
    assert!(Canvas::new(4, 0).is_empty());
    assert_eq!(Canvas::new(3, 2).rgba_len().unwrap(), 24);
}

#[test]
fn new_frame_is_opaque_black() {
    let f = FrameRGBA::new_opaque(Canvas::new(2, 2)).unwrap();
    assert_eq!(f.data.len(), 16);
    assert!(f.data.chunks_exact(4).all(|px| px == [0, 0, 0, 255]));
    assert_eq!(f.pixel(1, 1), [0, 0, 0, 255]);
}

#[test]
fn rescaled_constant_frame_stays_constant() {
    let mut f = FrameRGBA::new_opaque(Canvas::new(4, 4)).unwrap();
    for px in f.data.chunks_exact_mut(4) {
        px.copy_from_slice(&[40, 80, 120, 255]);
    }
    let out = f.rescaled(7, 3).unwrap();
    assert_eq!((out.width, out.height), (7, 3));
    assert!(out.data.chunks_exact(4).all(|px| px == [40, 80, 120, 255]));
}

#[test]
fn encode_png_has_signature() {
    let f = FrameRGBA::new_opaque(Canvas::new(2, 3)).unwrap();
    let png = f.encode_png().unwrap();
    assert_eq!(&png[..8], b"\x89PNG\r\n\x1a\n");
}
