//! Scene: one camera plus a collection of drawable primitives

use std::fmt;

use crate::{Camera, Color, Line, Point, Primitive};
use hyperview_math::{hypercube, Hypercube, Vec4};

/// A 4D scene: exactly one camera and an ordered list of primitives
///
/// The camera is installed at construction and never replaced. Primitives
/// are painted in insertion order; no depth sorting is performed, so
/// nearer primitives do not reliably occlude farther ones.
#[derive(Clone, Debug)]
pub struct Scene {
    camera: Camera,
    primitives: Vec<Primitive>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new()
    }
}

impl Scene {
    /// Create an empty scene with the default camera
    pub fn new() -> Self {
        Self::with_camera(Camera::default())
    }

    /// Create an empty scene with the given camera
    pub fn with_camera(camera: Camera) -> Self {
        Self {
            camera,
            primitives: Vec::new(),
        }
    }

    /// Install a camera into the scene.
    ///
    /// A scene always has a camera, so this is a configuration error: the
    /// call fails with [`SceneError::CameraExists`] and the existing camera
    /// is left untouched.
    pub fn add_camera(&mut self, _camera: Camera) -> Result<(), SceneError> {
        Err(SceneError::CameraExists)
    }

    /// The scene's camera
    #[inline]
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the camera, for the per-frame update step
    #[inline]
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// All primitives, in insertion (paint) order
    pub fn primitives(&self) -> &[Primitive] {
        &self.primitives
    }

    /// Number of primitives in the scene
    #[inline]
    pub fn primitive_count(&self) -> usize {
        self.primitives.len()
    }

    /// Append a primitive
    pub fn add_primitive(&mut self, primitive: Primitive) {
        self.primitives.push(primitive);
    }

    /// Append a point
    pub fn add_point(&mut self, position: Vec4, color: Color) {
        self.add_primitive(Primitive::Point(Point::new(position, color)));
    }

    /// Append a line segment
    pub fn add_line(&mut self, start: Vec4, end: Vec4, color: Color) {
        self.add_primitive(Primitive::Line(Line::new(start, end, color)));
    }

    /// Add the 16 corners of a hypercube as points.
    ///
    /// The hypercube spans `{0, edge_length}` along each axis, translated
    /// by `offset`.
    pub fn add_hypercube_points(&mut self, edge_length: f32, offset: Vec4, color: Color) {
        let cube = Hypercube::new(edge_length, offset);
        for &vertex in cube.vertices() {
            self.add_point(vertex, color);
        }
        log::debug!("added hypercube point cloud ({} points)", hypercube::VERTEX_COUNT);
    }

    /// Add the 32 edges of a hypercube as line segments.
    pub fn add_hypercube_outline(&mut self, edge_length: f32, offset: Vec4, color: Color) {
        let cube = Hypercube::new(edge_length, offset);
        for (start, end) in cube.edges() {
            self.add_line(start, end, color);
        }
        log::debug!("added hypercube outline ({} edges)", hypercube::EDGE_COUNT);
    }
}

/// Scene configuration errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SceneError {
    /// The scene already has a camera
    CameraExists,
}

impl fmt::Display for SceneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SceneError::CameraExists => write!(f, "a scene cannot have more than one camera"),
        }
    }
}

impl std::error::Error for SceneError {}
