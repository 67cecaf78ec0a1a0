//! Rotation planes in 4D space
//!
//! In 4D, rotations happen in planes rather than around axes.
//! There are 6 rotation planes: XY, XZ, YZ, XW, YW, ZW.
//!
//! A plane is an *unordered* pair of axes: "x-w" and "w-x" name the same
//! plane. The enum variant fixes the canonical axis order, which in turn
//! fixes the sign convention of rotation operators built from the plane.

use std::fmt;
use std::str::FromStr;

/// The 6 rotation planes in 4D space
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RotationPlane {
    /// XY plane - standard yaw (rotation around Z axis in 3D)
    XY,
    /// XZ plane - standard pitch (rotation around Y axis in 3D)
    XZ,
    /// YZ plane - standard roll (rotation around X axis in 3D)
    YZ,
    /// XW plane - ana-kata rotation affecting X
    XW,
    /// YW plane - ana-kata rotation affecting Y
    YW,
    /// ZW plane - ana-kata rotation affecting Z
    ZW,
}

impl RotationPlane {
    /// All six planes, in canonical order
    pub const ALL: [Self; 6] = [
        Self::XY,
        Self::XZ,
        Self::YZ,
        Self::XW,
        Self::YW,
        Self::ZW,
    ];

    /// The canonical axis index pair for this plane (0=X, 1=Y, 2=Z, 3=W)
    #[inline]
    pub fn axes(self) -> (usize, usize) {
        match self {
            Self::XY => (0, 1),
            Self::XZ => (0, 2),
            Self::YZ => (1, 2),
            Self::XW => (0, 3),
            Self::YW => (1, 3),
            Self::ZW => (2, 3),
        }
    }
}

impl fmt::Display for RotationPlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::XY => "xy",
            Self::XZ => "xz",
            Self::YZ => "yz",
            Self::XW => "xw",
            Self::YW => "yw",
            Self::ZW => "zw",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for RotationPlane {
    type Err = PlaneParseError;

    /// Parse a plane label such as `"xy"`, `"x-y"` or `"Y-X"`.
    ///
    /// Labels are order-insensitive: both spellings of a pair resolve to
    /// the same plane (and therefore the same operator sign convention).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut axes = [0usize; 2];
        let mut count = 0;

        for c in s.chars() {
            if c == '-' {
                continue;
            }
            let axis = match c.to_ascii_lowercase() {
                'x' => 0,
                'y' => 1,
                'z' => 2,
                'w' => 3,
                _ => return Err(PlaneParseError::UnknownAxis(c)),
            };
            if count == 2 {
                return Err(PlaneParseError::BadLabel(s.to_string()));
            }
            axes[count] = axis;
            count += 1;
        }

        if count != 2 {
            return Err(PlaneParseError::BadLabel(s.to_string()));
        }
        axes.sort_unstable();

        match (axes[0], axes[1]) {
            (0, 1) => Ok(Self::XY),
            (0, 2) => Ok(Self::XZ),
            (1, 2) => Ok(Self::YZ),
            (0, 3) => Ok(Self::XW),
            (1, 3) => Ok(Self::YW),
            (2, 3) => Ok(Self::ZW),
            // Both axes were the same letter
            _ => Err(PlaneParseError::BadLabel(s.to_string())),
        }
    }
}

/// Error parsing a rotation plane label
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlaneParseError {
    /// A character that is not one of x, y, z, w (or a separator)
    UnknownAxis(char),
    /// The label does not name a pair of two distinct axes
    BadLabel(String),
}

impl fmt::Display for PlaneParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaneParseError::UnknownAxis(c) => write!(f, "unknown axis '{}'", c),
            PlaneParseError::BadLabel(s) => {
                write!(f, "'{}' does not name a pair of distinct axes", s)
            }
        }
    }
}

impl std::error::Error for PlaneParseError {}
