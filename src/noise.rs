//! Seeded two-dimensional gradient noise.
//!
//! [`NoiseField`] is a pure function of its seed: two fields built from the
//! same seed return bit-identical samples for every input. Samples are
//! continuous across lattice boundaries thanks to the quintic fade curve and
//! stay within roughly `[-1, 1]`.

use crate::numeric::{lattice_cell, table_index};

/// Modulus of the Park–Miller generator driving the permutation shuffle.
const SHUFFLE_MODULUS: i64 = 2_147_483_647;
/// Multiplier of the Park–Miller generator.
const SHUFFLE_MULTIPLIER: i64 = 16_807;
/// Number of distinct lattice hashes.
const PERMUTATION_LEN: usize = 256;

/// Gradient directions indexed by `hash % 8`.
const GRADIENTS: [(f64, f64); 8] = [
    (1.0, 1.0),
    (-1.0, 1.0),
    (1.0, -1.0),
    (-1.0, -1.0),
    (1.0, 0.0),
    (-1.0, 0.0),
    (0.0, 1.0),
    (0.0, -1.0),
];

/// Quintic smoothstep `6t⁵ − 15t⁴ + 10t³`.
///
/// First and second derivatives vanish at `t = 0` and `t = 1`, so adjacent
/// cells meet without visible seams.
#[must_use]
pub fn fade(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

fn gradient_dot(hash: usize, x: f64, y: f64) -> f64 {
    GRADIENTS
        .get(hash % GRADIENTS.len())
        .map_or(0.0, |&(gx, gy)| gx * x + gy * y)
}

/// Deterministic smooth scalar field over the plane.
#[derive(Clone)]
pub struct NoiseField {
    seed: i32,
    permutation: [u8; PERMUTATION_LEN * 2],
}

impl std::fmt::Debug for NoiseField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoiseField")
            .field("seed", &self.seed)
            .finish_non_exhaustive()
    }
}

impl NoiseField {
    /// Build a field whose lattice hashes are shuffled by `seed`.
    ///
    /// # Examples
    ///
    /// ```
    /// use wander::noise::NoiseField;
    /// let a = NoiseField::new(42);
    /// let b = NoiseField::new(42);
    /// assert_eq!(a.sample(0.3, 0.5).to_bits(), b.sample(0.3, 0.5).to_bits());
    /// ```
    #[must_use]
    pub fn new(seed: i32) -> Self {
        let mut table = [0_u8; PERMUTATION_LEN];
        for (slot, value) in table.iter_mut().zip(0_u8..=u8::MAX) {
            *slot = value;
        }

        let mut state = (i64::from(seed) * SHUFFLE_MULTIPLIER).abs() % SHUFFLE_MODULUS;
        if state == 0 {
            state = 1;
        }
        for i in (1..PERMUTATION_LEN).rev() {
            state = (state * SHUFFLE_MULTIPLIER) % SHUFFLE_MODULUS;
            // `i + 1` is at most 256, so the remainder always indexes the table.
            let bound = i64::try_from(i + 1).unwrap_or(1);
            let j = usize::try_from(state % bound).unwrap_or(0);
            table.swap(i, j);
        }

        let mut permutation = [0_u8; PERMUTATION_LEN * 2];
        let (low, high) = permutation.split_at_mut(PERMUTATION_LEN);
        low.copy_from_slice(&table);
        high.copy_from_slice(&table);

        Self { seed, permutation }
    }

    /// Seed the field was built from.
    #[must_use]
    pub const fn seed(&self) -> i32 {
        self.seed
    }

    fn hash(&self, index: usize) -> usize {
        self.permutation.get(index).copied().map_or(0, table_index)
    }

    /// Sample the field at `(x, y)`.
    ///
    /// The result is continuous in both coordinates and bounded by `[-1, 1]`
    /// in practice.
    #[must_use]
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let cell_x = lattice_cell(x);
        let cell_y = lattice_cell(y);

        let xf = x - x.floor();
        let yf = y - y.floor();

        let u = fade(xf);
        let v = fade(yf);

        let left = self.hash(cell_x);
        let right = self.hash(cell_x + 1);
        let aa = self.hash(left + cell_y);
        let ab = self.hash(left + cell_y + 1);
        let ba = self.hash(right + cell_y);
        let bb = self.hash(right + cell_y + 1);

        let bottom = lerp(gradient_dot(aa, xf, yf), gradient_dot(ba, xf - 1.0, yf), u);
        let top = lerp(
            gradient_dot(ab, xf, yf - 1.0),
            gradient_dot(bb, xf - 1.0, yf - 1.0),
            u,
        );

        lerp(bottom, top, v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn permutation_is_a_duplicated_permutation() {
        let field = NoiseField::new(7);
        let mut seen = [false; PERMUTATION_LEN];
        for &value in &field.permutation[..PERMUTATION_LEN] {
            seen[usize::from(value)] = true;
        }
        assert!(seen.iter().all(|&s| s), "every lattice hash must appear once");
        assert_eq!(
            field.permutation[..PERMUTATION_LEN],
            field.permutation[PERMUTATION_LEN..]
        );
    }

    #[test]
    fn zero_seed_still_shuffles() {
        let field = NoiseField::new(0);
        let identity: Vec<u8> = (0_u8..=u8::MAX).collect();
        assert_ne!(field.permutation[..PERMUTATION_LEN], identity[..]);
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    #[case(0.5)]
    fn fade_hits_endpoints_and_midpoint(#[case] t: f64) {
        let expected = if t == 0.5 { 0.5 } else { t };
        assert!((fade(t) - expected).abs() < 1e-12);
    }

    #[test]
    fn lattice_points_sample_to_zero() {
        let field = NoiseField::new(42);
        for x in -3..3 {
            for y in -3..3 {
                let value = field.sample(f64::from(x), f64::from(y));
                assert!(value.abs() < 1e-12, "gradient noise vanishes on the lattice");
            }
        }
    }

    #[rstest]
    #[case::integer_edge(1.0)]
    #[case::negative_edge(-4.0)]
    #[case::wrap_edge(256.0)]
    fn continuous_across_cell_edges(#[case] edge: f64) {
        let field = NoiseField::new(1234);
        let y = 0.37;
        let before = field.sample(edge - 1e-9, y);
        let after = field.sample(edge + 1e-9, y);
        assert!((before - after).abs() < 1e-6, "{before} vs {after}");
    }

    #[test]
    fn debug_omits_the_table() {
        let rendered = format!("{:?}", NoiseField::new(3));
        assert!(rendered.contains("seed: 3"));
        assert!(!rendered.contains("permutation"));
    }
}
