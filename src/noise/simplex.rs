use rand::SeedableRng as _;
use rand::rngs::StdRng;
use rand::seq::SliceRandom as _;

const GRAD2: [(f32, f32); 12] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

// (sqrt(3) - 1) / 2 and (3 - sqrt(3)) / 6
const F2: f32 = 0.366_025_42;
const G2: f32 = 0.211_324_87;

/// Seeded 2D simplex noise.
///
/// The permutation table is shuffled once from the seed and never changes afterwards, so a single
/// instance yields the same pattern for every pixel and every frame it is used for.
#[derive(Clone)]
pub struct NoiseField {
    seed: u64,
    perm: [u8; 512],
}

impl NoiseField {
    /// Build a field from a fixed seed.
    pub fn from_seed(seed: u64) -> Self {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut p: [u8; 256] = std::array::from_fn(|i| i as u8);
        p.shuffle(&mut rng);

        let perm = std::array::from_fn(|i| p[i & 255]);
        Self { seed, perm }
    }

    /// Build a field from an OS-provided random seed.
    pub fn from_entropy() -> Self {
        Self::from_seed(rand::random())
    }

    /// Seed this field was built from.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sample the field. Output is continuous and lies in `[-1, 1]`.
    pub fn sample(&self, x: f32, y: f32) -> f32 {
        let s = (x + y) * F2;
        let i = (x + s).floor();
        let j = (y + s).floor();
        let t = (i + j) * G2;
        let x0 = x - (i - t);
        let y0 = y - (j - t);

        let (i1, j1) = if x0 > y0 { (1, 0) } else { (0, 1) };

        let x1 = x0 - i1 as f32 + G2;
        let y1 = y0 - j1 as f32 + G2;
        let x2 = x0 - 1.0 + 2.0 * G2;
        let y2 = y0 - 1.0 + 2.0 * G2;

        let ii = (i as i64 & 255) as usize;
        let jj = (j as i64 & 255) as usize;

        let gi0 = self.perm[ii + self.perm[jj] as usize] as usize % 12;
        let gi1 = self.perm[ii + i1 + self.perm[jj + j1] as usize] as usize % 12;
        let gi2 = self.perm[ii + 1 + self.perm[jj + 1] as usize] as usize % 12;

        let n = corner(gi0, x0, y0) + corner(gi1, x1, y1) + corner(gi2, x2, y2);
        (70.0 * n).clamp(-1.0, 1.0)
    }
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

#[inline]
fn corner(gi: usize, x: f32, y: f32) -> f32 {
    let t = 0.5 - x * x - y * y;
    if t < 0.0 {
        return 0.0;
    }
    let t2 = t * t;
    let (gx, gy) = GRAD2[gi];
    t2 * t2 * (gx * x + gy * y)
}

#[cfg(test)]
#[path = "../../tests/unit/noise/simplex.rs"]
mod tests;
