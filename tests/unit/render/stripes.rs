use super::*;
use crate::foundation::core::Canvas;

fn patterned_frame(w: u32, h: u32) -> FrameRGBA {
    let mut f = FrameRGBA::new_opaque(Canvas::new(w, h)).unwrap();
    for y in 0..h {
        for x in 0..w {
            let idx = ((y * w + x) * 4) as usize;
            f.data[idx] = ((x * 37 + y * 11) % 256) as u8;
            f.data[idx + 1] = ((x * x + 3 * y) % 256) as u8;
            f.data[idx + 2] = ((x * 5 + y * y * 7) % 256) as u8;
        }
    }
    f
}

fn tile_region(frame: &FrameRGBA, s: &StripeGeometry) -> Vec<u8> {
    let row_len = frame.width as usize * 4;
    frame
        .data
        .chunks_exact(row_len)
        .flat_map(|row| row[s.x_start as usize * 4..s.x_end as usize * 4].to_vec())
        .collect()
}

#[test]
fn layout_covers_every_column_once() {
    for width in [1u32, 10, 27, 28, 280, 301, 1920] {
        let stripes = StripeGeometry::layout(width);
        let mut next = 0;
        for s in &stripes {
            assert_eq!(s.x_start, next, "width {width}");
            assert!(!s.is_empty());
            next = s.x_end;
        }
        assert_eq!(next, width, "width {width}");
        assert!(stripes.len() <= STRIPE_COUNT as usize);
    }
}

#[test]
fn layout_gap_has_a_floor_of_two() {
    let narrow = StripeGeometry::layout(280);
    assert_eq!(narrow.len(), 28);
    assert!(narrow.iter().all(|s| s.gap == 2 && s.len() == 10));

    let wide = StripeGeometry::layout(2800);
    assert!(wide.iter().all(|s| s.gap == 18));
    assert_eq!(wide[3].gap_start(), wide[3].x_end - 18);
}

#[test]
fn constant_frame_is_unchanged() {
    let mut f = FrameRGBA::new_opaque(Canvas::new(120, 6)).unwrap();
    for px in f.data.chunks_exact_mut(4) {
        px.copy_from_slice(&[90, 140, 33, 255]);
    }
    let out = apply_glass_stripes(&f, false).unwrap();
    assert_eq!(out, f);
}

#[test]
fn stripe_output_depends_only_on_snapshot() {
    let snapshot = patterned_frame(140, 9);
    let out = apply_glass_stripes(&snapshot, false).unwrap();

    // Tiles rendered in reverse order, each straight from the snapshot, match the full pass.
    for s in StripeGeometry::layout(140).iter().rev() {
        let tile = render_stripe_tile(&snapshot, s).unwrap();
        assert_eq!(tile, tile_region(&out, s), "stripe {}", s.index);
    }
}

#[test]
fn parallel_matches_sequential() {
    let snapshot = patterned_frame(97, 13);
    let seq = apply_glass_stripes(&snapshot, false).unwrap();
    let par = apply_glass_stripes(&snapshot, true).unwrap();
    assert_eq!(seq, par);
}

#[test]
fn distortion_changes_a_patterned_frame_and_stays_opaque() {
    let snapshot = patterned_frame(280, 4);
    let out = apply_glass_stripes(&snapshot, false).unwrap();
    assert_ne!(out, snapshot);
    assert!(out.data.chunks_exact(4).all(|px| px[3] == 255));
}

#[test]
fn tile_outside_frame_is_rejected() {
    let snapshot = patterned_frame(10, 2);
    let s = StripeGeometry {
        index: 0,
        x_start: 5,
        x_end: 20,
        stripe_width: 15.0,
        gap: 2,
    };
    assert!(render_stripe_tile(&snapshot, &s).is_err());
}

// Interior columns only: no edge clamping needed.
fn box_mean(row: &[u8], x: usize, radius: usize) -> [f32; 3] {
    let taps = (2 * radius + 1) as f32;
    std::array::from_fn(|c| {
        let sum: u32 = (x - radius..=x + radius)
            .map(|sx| u32::from(row[sx * 4 + c]))
            .sum();
        (sum as f32 / taps).round()
    })
}

fn row_of(frame: &FrameRGBA, y: u32) -> &[u8] {
    let row_len = frame.width as usize * 4;
    &frame.data[y as usize * row_len..(y as usize + 1) * row_len]
}

#[test]
fn center_column_composites_shifted_sample_over_band_blur() {
    // width 280: sw = 10, gap = 2, stripe 5 spans [50, 60) with center 55
    let snapshot = patterned_frame(280, 3);
    let out = apply_glass_stripes(&snapshot, false).unwrap();

    let (x, y) = (55u32, 1u32);
    let bg = box_mean(row_of(&snapshot, y), x as usize, 2);
    // edgeAlpha = 1, shift = sin(pi / 2) * 0.22 * 10 = 2.2
    let s = snapshot.pixel(57, y);
    let b = (f32::from(s[0]) + f32::from(s[1]) + f32::from(s[2])) / (3.0 * 255.0);
    let alpha = 0.32 + 0.32 * (1.0 - b);

    let got = out.pixel(x, y);
    for c in 0..3 {
        let expected = (bg[c] + (f32::from(s[c]) - bg[c]) * alpha).round() as u8;
        assert_eq!(got[c], expected, "channel {c}");
    }
    assert_eq!(got[3], 255);
}

#[test]
fn gap_columns_mix_thirty_percent_source_with_blur() {
    // stripe 5 of a 280 wide frame: gap columns 58 and 59, edgeAlpha there is below 2e-5
    let snapshot = patterned_frame(280, 4);
    let out = apply_glass_stripes(&snapshot, false).unwrap();

    for y in 0..4 {
        for x in [58u32, 59] {
            let blur = box_mean(row_of(&snapshot, y), x as usize, 2);
            let orig = snapshot.pixel(x, y);
            let got = out.pixel(x, y);
            for c in 0..3 {
                let o = f32::from(orig[c]);
                let expected = (o + (blur[c] - o) * 0.7).round() as u8;
                assert_eq!(got[c], expected, "({x},{y}) channel {c}");
            }
        }
    }
}

#[test]
fn column_warps_follow_displacement_and_reflection() {
    let width = 560u32;
    for stripe in StripeGeometry::layout(width) {
        let sw = stripe.stripe_width;
        let softness = 0.09 * sw;
        let span = stripe.len() as f32;
        let clamp_col = |v: f32| v.round().clamp(0.0, (width - 1) as f32) as usize;

        for (i, warp) in stripe.column_warps(width).iter().enumerate() {
            let xf = (stripe.x_start + i as u32) as f32;
            let dist = (xf - stripe.center()).abs();
            let v = dist / softness;
            let edge = (-v * v).exp();
            let shift = (PI * (xf - stripe.x_start as f32) / span).sin() * 0.22 * sw * edge;

            assert!((warp.edge_alpha - edge).abs() < 1e-6);
            assert_eq!(warp.src_x, clamp_col(xf + shift), "stripe {} col {i}", stripe.index);

            let strength = (1.0 - dist / (0.5 * sw)).max(0.0) * edge * 0.55;
            let expected = if xf - (stripe.x_start as f32) < 0.18 * sw {
                Some(clamp_col(xf + 0.7 * sw))
            } else if (stripe.x_end as f32) - xf < 0.18 * sw {
                Some(clamp_col(xf - 0.7 * sw))
            } else {
                None
            };
            assert_eq!(warp.reflect.map(|(rx, _)| rx), expected);
            if let Some((_, got)) = warp.reflect {
                assert!((got - strength).abs() < 1e-6);
            }
        }
    }

    // stripe 3 spans [60, 80): sw = 20, center 70
    let stripe = StripeGeometry::layout(width)[3];
    let warps = stripe.column_warps(width);
    assert_eq!(warps[10].src_x, 74);
    assert_eq!(warps[3].reflect.map(|(rx, _)| rx), Some(77));
    assert_eq!(warps[17].reflect.map(|(rx, _)| rx), Some(63));
    assert!(warps[10].reflect.is_none());
}

#[test]
fn gap_sits_on_each_stripe_right_edge() {
    let stripes = StripeGeometry::layout(560);
    for s in &stripes {
        assert_eq!(s.gap_start(), s.x_end - s.gap);
        assert!(s.gap_start() > s.x_start);
    }
    let last = stripes.last().unwrap();
    assert_eq!(last.x_end, 560);
    assert_eq!(last.gap_start(), 560 - last.gap);
}
