use super::*;

fn gray_frame(w: u32, h: u32, v: u8) -> FrameRGBA {
    let mut f = FrameRGBA::new_opaque(Canvas::new(w, h)).unwrap();
    for px in f.data.chunks_exact_mut(4) {
        px[..3].fill(v);
    }
    f
}

#[test]
fn zero_amount_is_byte_identical() {
    let canvas = Canvas::new(5, 3);
    let mut rng = GrainSource::Seeded(1).rng();
    let grain = GrainField::generate(canvas, 0.0, &mut rng).unwrap();
    assert!(grain.is_noop());

    let mut f = gray_frame(5, 3, 77);
    let before = f.clone();
    grain.apply(&mut f).unwrap();
    assert_eq!(f, before);
}

#[test]
fn seeded_grain_is_reproducible() {
    let canvas = Canvas::new(6, 4);
    let a = GrainField::generate(canvas, 0.7, &mut GrainSource::Seeded(9).rng()).unwrap();
    let b = GrainField::generate(canvas, 0.7, &mut GrainSource::Seeded(9).rng()).unwrap();
    let c = GrainField::generate(canvas, 0.7, &mut GrainSource::Seeded(10).rng()).unwrap();
    assert_eq!(a, b);
    assert_ne!(a, c);
}

#[test]
fn deltas_are_bounded_by_amount() {
    let canvas = Canvas::new(32, 32);
    let grain = GrainField::generate(canvas, 0.5, &mut GrainSource::Seeded(3).rng()).unwrap();
    for y in 0..32 {
        for x in 0..32 {
            assert!(grain.delta(x, y).abs() <= 12.5);
        }
    }
}

#[test]
fn grain_is_monochrome_and_keeps_alpha() {
    let canvas = Canvas::new(8, 8);
    let grain = GrainField::generate(canvas, 1.0, &mut GrainSource::Seeded(4).rng()).unwrap();
    let mut f = gray_frame(8, 8, 128);
    grain.apply(&mut f).unwrap();
    for px in f.data.chunks_exact(4) {
        assert_eq!(px[0], px[1]);
        assert_eq!(px[1], px[2]);
        assert_eq!(px[3], 255);
    }
    assert!(f.data.chunks_exact(4).any(|px| px[0] != 128));
}

#[test]
fn grain_saturates_instead_of_wrapping() {
    let canvas = Canvas::new(16, 16);
    let grain = GrainField::generate(canvas, 1.0, &mut GrainSource::Seeded(5).rng()).unwrap();
    let mut white = gray_frame(16, 16, 255);
    grain.apply(&mut white).unwrap();
    assert!(white.data.chunks_exact(4).all(|px| px[0] >= 230));

    let mut black = gray_frame(16, 16, 0);
    grain.apply(&mut black).unwrap();
    assert!(black.data.chunks_exact(4).all(|px| px[0] <= 25));
}

#[test]
fn mismatched_frame_is_rejected() {
    let grain =
        GrainField::generate(Canvas::new(2, 2), 0.3, &mut GrainSource::Seeded(0).rng()).unwrap();
    let mut f = gray_frame(3, 2, 0);
    assert!(grain.apply(&mut f).is_err());
}
