//! Identity hashing for per-axis noise seeds and time offsets.
//!
//! Every entity derives three seeds and three time offsets from its
//! identity, so distinct entities never share a trajectory and entities with
//! identical tuning never move in lockstep.

use crate::numeric::hash_time_offset;

/// Spatial axis of a wander trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Horizontal axis.
    X,
    /// Vertical axis.
    Y,
    /// Depth axis.
    Z,
}

impl Axis {
    /// All axes in X, Y, Z order.
    pub const ALL: [Self; 3] = [Self::X, Self::Y, Self::Z];

    /// Suffix appended to an identity to derive this axis's noise seed.
    #[must_use]
    pub const fn seed_label(self) -> &'static str {
        match self {
            Self::X => "x",
            Self::Y => "y",
            Self::Z => "z",
        }
    }

    /// Suffix appended to an identity to derive this axis's time offset.
    #[must_use]
    pub const fn offset_label(self) -> &'static str {
        match self {
            Self::X => "ox",
            Self::Y => "oy",
            Self::Z => "oz",
        }
    }
}

/// Hash a string with the `djb2` xor variant over its UTF-16 code units.
///
/// Arithmetic wraps at 32 bits so the result matches across platforms.
///
/// # Examples
///
/// ```
/// use wander::seed::hash_identity;
/// assert_eq!(hash_identity(""), 5381);
/// assert_eq!(hash_identity("a"), (5381 * 33) ^ 97);
/// ```
#[must_use]
pub fn hash_identity(text: &str) -> i32 {
    text.encode_utf16().fold(5381_i32, |hash, unit| {
        (hash << 5).wrapping_add(hash) ^ i32::from(unit)
    })
}

/// Seeds and time offsets for the three axes of one entity.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisSeeds {
    seeds: [i32; 3],
    offsets: [f64; 3],
}

impl AxisSeeds {
    /// Derive the per-axis seeds and offsets for `identity`.
    #[must_use]
    pub fn for_identity(identity: &str) -> Self {
        let hash_with = |suffix: &str| hash_identity(&format!("{identity}{suffix}"));
        let [x, y, z] = Axis::ALL;
        Self {
            seeds: [
                hash_with(x.seed_label()),
                hash_with(y.seed_label()),
                hash_with(z.seed_label()),
            ],
            offsets: [
                hash_time_offset(hash_with(x.offset_label())),
                hash_time_offset(hash_with(y.offset_label())),
                hash_time_offset(hash_with(z.offset_label())),
            ],
        }
    }

    /// Noise seed for `axis`.
    #[must_use]
    pub const fn seed(&self, axis: Axis) -> i32 {
        match axis {
            Axis::X => self.seeds[0],
            Axis::Y => self.seeds[1],
            Axis::Z => self.seeds[2],
        }
    }

    /// Time offset for `axis`.
    #[must_use]
    pub const fn offset(&self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.offsets[0],
            Axis::Y => self.offsets[1],
            Axis::Z => self.offsets[2],
        }
    }
}
