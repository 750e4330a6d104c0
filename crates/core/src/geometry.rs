//! Integer geometry and the six axis-aligned box orientations.

pub use nalgebra::Vector3;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Integer 3D vector used for sizes and positions.
pub type Vec3 = Vector3<i64>;

/// Volume of an axis-aligned extent.
#[inline]
pub fn volume(size: &Vec3) -> i64 {
    size.x * size.y * size.z
}

/// Volume of an axis-aligned extent, or `None` if it does not fit in `i64`.
#[inline]
pub fn checked_volume(size: &Vec3) -> Option<i64> {
    size.x.checked_mul(size.y)?.checked_mul(size.z)
}

/// Footprint (x-y projection) area of an axis-aligned extent.
#[inline]
pub fn footprint(size: &Vec3) -> i64 {
    size.x * size.y
}

/// How a box type's intrinsic dimensions (lx, ly, lz) are assigned to the
/// spatial axes (x, y, z).
///
/// The variant name lists which intrinsic dimension lies along x, y and z in
/// that order, so `Yxz` places the intrinsic width along x and the intrinsic
/// length along y while keeping the height vertical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// As-is: (lx, ly, lz).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "XYZ"))]
    Xyz,
    /// Footprint rotated 90° around z: (ly, lx, lz).
    #[cfg_attr(feature = "serde", serde(rename = "YXZ"))]
    Yxz,
    /// Laid on its side: (lx, lz, ly).
    #[cfg_attr(feature = "serde", serde(rename = "XZY"))]
    Xzy,
    /// (lz, lx, ly).
    #[cfg_attr(feature = "serde", serde(rename = "ZXY"))]
    Zxy,
    /// (ly, lz, lx).
    #[cfg_attr(feature = "serde", serde(rename = "YZX"))]
    Yzx,
    /// Standing on its end: (lz, ly, lx).
    #[cfg_attr(feature = "serde", serde(rename = "ZYX"))]
    Zyx,
}

impl Orientation {
    /// All six orientations, in the order they are tried for unconstrained boxes.
    pub const ALL: [Orientation; 6] = [
        Orientation::Xyz,
        Orientation::Yxz,
        Orientation::Xzy,
        Orientation::Zxy,
        Orientation::Yzx,
        Orientation::Zyx,
    ];

    /// The two orientations that keep the intrinsic height vertical.
    pub const UPRIGHT: [Orientation; 2] = [Orientation::Xyz, Orientation::Yxz];

    /// The as-is orientation only.
    pub const FIXED: [Orientation; 1] = [Orientation::Xyz];

    /// Permutation table: intrinsic axis index placed along (x, y, z).
    pub const fn axes(self) -> [usize; 3] {
        match self {
            Orientation::Xyz => [0, 1, 2],
            Orientation::Yxz => [1, 0, 2],
            Orientation::Xzy => [0, 2, 1],
            Orientation::Zxy => [2, 0, 1],
            Orientation::Yzx => [1, 2, 0],
            Orientation::Zyx => [2, 1, 0],
        }
    }

    /// Applies the permutation to intrinsic dimensions, yielding the
    /// effective (x, y, z) extent.
    pub fn apply(self, dimensions: &Vec3) -> Vec3 {
        let [ix, iy, iz] = self.axes();
        Vec3::new(dimensions[ix], dimensions[iy], dimensions[iz])
    }

    /// Returns true if the intrinsic height stays on the z axis.
    pub fn is_upright(self) -> bool {
        self.axes()[2] == 2
    }

    /// Canonical three-letter name ("XYZ", "YXZ", ...).
    pub fn as_str(self) -> &'static str {
        match self {
            Orientation::Xyz => "XYZ",
            Orientation::Yxz => "YXZ",
            Orientation::Xzy => "XZY",
            Orientation::Zxy => "ZXY",
            Orientation::Yzx => "YZX",
            Orientation::Zyx => "ZYX",
        }
    }
}

impl std::fmt::Display for Orientation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Orientation {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        Orientation::ALL
            .into_iter()
            .find(|o| o.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| crate::Error::InvalidBoxType(format!("unknown orientation '{}'", s)))
    }
}

/// Orientation presets for box types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OrientationConstraint {
    /// Any of the six axis-aligned orientations.
    Any,
    /// Only upright orientations (as-is and rotated 90° around z).
    #[default]
    Upright,
    /// Fixed orientation (no rotation allowed).
    Fixed,
}

impl OrientationConstraint {
    /// Returns the orientations permitted by this preset, in trial order.
    pub fn orientations(self) -> &'static [Orientation] {
        match self {
            OrientationConstraint::Any => &Orientation::ALL,
            OrientationConstraint::Upright => &Orientation::UPRIGHT,
            OrientationConstraint::Fixed => &Orientation::FIXED,
        }
    }
}
