use super::*;

#[test]
fn occupancy_is_within_unit_range() {
    let noise = NoiseField::from_seed(11);
    for yi in 0..=40 {
        for xi in 0..=40 {
            let (nx, ny) = (xi as f32 / 40.0, yi as f32 / 40.0);
            let s = ribbon_sample(&noise, nx, ny);
            assert!((0.0..=1.0).contains(&s.occupancy), "{s:?}");
            assert!(s.main_dist >= 0.0);
        }
    }
}

#[test]
fn diagonal_coordinate_matches_definition() {
    let noise = NoiseField::from_seed(0);
    let s = ribbon_sample(&noise, 0.2, 0.6);
    assert!((s.diag - 0.3).abs() < 1e-6);
    assert!((ribbon_sample(&noise, 1.0, 0.0).diag - 1.0).abs() < 1e-6);
}

#[test]
fn main_distance_is_the_curve_offset() {
    // diag cancels out of |diag - mainCurve|, leaving the sway and noise terms.
    let noise = NoiseField::from_seed(5);
    let (nx, ny) = (0.4f32, 0.3f32);
    let expected = (0.06 * (ny * PI * 1.2).sin() + 0.1 * noise.sample(nx * 2.0, ny * 2.0)).abs();
    let s = ribbon_sample(&noise, nx, ny);
    assert!((s.main_dist - expected).abs() < 1e-6);
}

#[test]
fn ribbon_is_visible_somewhere() {
    let noise = NoiseField::from_seed(21);
    let max = (0..=20)
        .flat_map(|y| (0..=20).map(move |x| (x as f32 / 20.0, y as f32 / 20.0)))
        .map(|(nx, ny)| ribbon_sample(&noise, nx, ny).occupancy)
        .fold(0.0f32, f32::max);
    assert!(max > 0.2);
}
