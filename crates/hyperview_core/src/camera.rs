//! 4D Camera with an orthonormal frame
//!
//! The camera holds a position and four mutually orthonormal basis vectors
//! (`right`, `up`, `forward`, `w`), plus the distance from the eye to the
//! viewport. Translation slides the position along a basis vector and never
//! touches the frame; rotation turns a pair of basis vectors into each
//! other, which preserves orthonormality in exact arithmetic.
//!
//! Repeated incremental rotation accumulates floating-point drift in the
//! frame. The frame is deliberately not re-orthonormalized; over very long
//! sessions the basis may degrade slightly. This is a known limitation.

use std::fmt;

use hyperview_math::{RotationPlane, Vec4};

/// Camera-local translation axes
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Axis {
    /// The camera's `right` basis vector
    Right,
    /// The camera's `up` basis vector
    Up,
    /// The camera's `forward` basis vector (view depth)
    Forward,
    /// The camera's `w` basis vector (ana/kata)
    W,
}

/// The rotation planes wired to camera control
///
/// Only four of the six coordinate planes rotate the camera: XW, YW, ZW
/// and XY. The XZ and YZ planes are not wired; converting them from
/// [`RotationPlane`] fails with [`CameraError::UnsupportedPlane`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CameraPlane {
    /// Rotates `right` and `w` into each other
    XW,
    /// Rotates `up` and `w` into each other
    YW,
    /// Rotates `forward` and `w` into each other
    ZW,
    /// Rotates `right` and `up` into each other
    XY,
}

impl TryFrom<RotationPlane> for CameraPlane {
    type Error = CameraError;

    fn try_from(plane: RotationPlane) -> Result<Self, Self::Error> {
        match plane {
            RotationPlane::XW => Ok(Self::XW),
            RotationPlane::YW => Ok(Self::YW),
            RotationPlane::ZW => Ok(Self::ZW),
            RotationPlane::XY => Ok(Self::XY),
            RotationPlane::XZ | RotationPlane::YZ => Err(CameraError::UnsupportedPlane(plane)),
        }
    }
}

impl From<CameraPlane> for RotationPlane {
    fn from(plane: CameraPlane) -> Self {
        match plane {
            CameraPlane::XW => Self::XW,
            CameraPlane::YW => Self::YW,
            CameraPlane::ZW => Self::ZW,
            CameraPlane::XY => Self::XY,
        }
    }
}

/// Camera usage errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CameraError {
    /// The requested rotation plane is not wired to camera control
    UnsupportedPlane(RotationPlane),
}

impl fmt::Display for CameraError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraError::UnsupportedPlane(plane) => {
                write!(f, "rotation plane '{}' is not wired to the camera", plane)
            }
        }
    }
}

impl std::error::Error for CameraError {}

/// Per-frame camera input as a plain value
///
/// Translation components are signed rates along the camera's own basis
/// vectors; rotation components are signed angular rates in the four wired
/// planes. All rates are per second; [`Camera::apply_input`] scales them by
/// the frame's elapsed time. The host owns raw keyboard/mouse protocol and
/// hands the core only this value.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputDelta {
    /// Translation rate along `right`
    pub move_right: f32,
    /// Translation rate along `up`
    pub move_up: f32,
    /// Translation rate along `forward`
    pub move_forward: f32,
    /// Translation rate along `w`
    pub move_w: f32,
    /// Angular rate in the XW plane (radians/s)
    pub rotate_xw: f32,
    /// Angular rate in the YW plane (radians/s)
    pub rotate_yw: f32,
    /// Angular rate in the ZW plane (radians/s)
    pub rotate_zw: f32,
    /// Angular rate in the XY plane (radians/s)
    pub rotate_xy: f32,
}

impl InputDelta {
    /// True if every component is zero
    pub fn is_zero(&self) -> bool {
        *self == Self::default()
    }
}

/// 4D camera: position, orthonormal frame, viewport distance
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Camera {
    /// Position in 4D space
    pub position: Vec4,
    right: Vec4,
    up: Vec4,
    forward: Vec4,
    w: Vec4,
    view_distance: f32,
}

impl Default for Camera {
    /// The default pose: on the negative z axis looking toward +z, with the
    /// canonical frame and a viewport distance of 1000.
    fn default() -> Self {
        Self::new(
            Vec4::new(0.0, 0.0, -1000.0, 0.0),
            Vec4::new(0.0, 0.0, 1.0, 0.0),
            Vec4::Y,
            Vec4::X,
            Vec4::W,
            1000.0,
        )
    }
}

impl Camera {
    /// Create a camera.
    ///
    /// `facing` is the world point the camera looks at; `forward` is derived
    /// as the unit vector from `position` toward it. `up`, `right` and `w`
    /// are normalized regardless of the caller's scale. The caller is
    /// responsible for supplying mutually orthogonal directions; this is not
    /// verified. A zero-length direction divides by zero and yields a
    /// non-finite frame rather than an error.
    pub fn new(
        position: Vec4,
        facing: Vec4,
        up: Vec4,
        right: Vec4,
        w: Vec4,
        view_distance: f32,
    ) -> Self {
        let forward = facing - position;
        Self {
            position,
            right: right / right.length(),
            up: up / up.length(),
            forward: forward / forward.length(),
            w: w / w.length(),
            view_distance,
        }
    }

    /// The `right` basis vector
    #[inline]
    pub fn right(&self) -> Vec4 {
        self.right
    }

    /// The `up` basis vector
    #[inline]
    pub fn up(&self) -> Vec4 {
        self.up
    }

    /// The `forward` basis vector (view depth direction)
    #[inline]
    pub fn forward(&self) -> Vec4 {
        self.forward
    }

    /// The `w` basis vector (ana/kata)
    #[inline]
    pub fn w(&self) -> Vec4 {
        self.w
    }

    /// Distance from the eye to the viewport
    #[inline]
    pub fn view_distance(&self) -> f32 {
        self.view_distance
    }

    /// Slide the position along one of the camera's own basis vectors.
    ///
    /// The frame is untouched; basis vectors stay unit length by
    /// construction, so no renormalization happens here.
    pub fn translate(&mut self, axis: Axis, distance: f32) {
        let direction = match axis {
            Axis::Right => self.right,
            Axis::Up => self.up,
            Axis::Forward => self.forward,
            Axis::W => self.w,
        };
        self.position += direction * distance;
    }

    /// Rotate a pair of basis vectors into each other by `angle`.
    ///
    /// For the plane's pair (A, B): `A' = A·cos + B·sin`,
    /// `B' = B·cos − A·sin`. Both new vectors are computed from a snapshot
    /// of the pre-rotation pair, then assigned together; the other two
    /// basis vectors and the position are untouched.
    pub fn rotate(&mut self, plane: CameraPlane, angle: f32) {
        let (sin, cos) = angle.sin_cos();
        let (a, b) = match plane {
            CameraPlane::XW => (&mut self.right, &mut self.w),
            CameraPlane::YW => (&mut self.up, &mut self.w),
            CameraPlane::ZW => (&mut self.forward, &mut self.w),
            CameraPlane::XY => (&mut self.right, &mut self.up),
        };
        let (a0, b0) = (*a, *b);
        *a = a0 * cos + b0 * sin;
        *b = b0 * cos - a0 * sin;
    }

    /// Apply one frame's input: translations, then rotations, each scaled
    /// by the elapsed time `dt` in seconds.
    pub fn apply_input(&mut self, input: &InputDelta, dt: f32) {
        self.translate(Axis::Forward, input.move_forward * dt);
        self.translate(Axis::Right, input.move_right * dt);
        self.translate(Axis::Up, input.move_up * dt);
        self.translate(Axis::W, input.move_w * dt);

        let rotations = [
            (CameraPlane::XW, input.rotate_xw),
            (CameraPlane::YW, input.rotate_yw),
            (CameraPlane::ZW, input.rotate_zw),
            (CameraPlane::XY, input.rotate_xy),
        ];
        for (plane, rate) in rotations {
            if rate != 0.0 {
                self.rotate(plane, rate * dt);
            }
        }
    }
}
