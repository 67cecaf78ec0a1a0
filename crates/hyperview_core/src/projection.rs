//! Projection pipeline: world space -> camera space -> screen space
//!
//! [`to_view_space`] re-expresses a world point in the camera's orthonormal
//! frame; [`project`] performs the perspective divide and visibility test;
//! [`render_frame`] runs the whole scene through both and emits the 2D
//! primitives the host paints.
//!
//! Screen coordinates are in viewport units with the origin at the center
//! of the screen, x to the right, y up.

use crate::{Camera, Color, Primitive, Scene};
use hyperview_math::Vec4;

/// Half the side of the square painted for a projected point, in screen
/// units
pub const POINT_HALF_SIZE: f32 = 2.0;

/// A 2D primitive ready for the host's paint step
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScreenPrimitive {
    /// An axis-aligned filled square centered on a projected point
    FilledSquare {
        x: f32,
        y: f32,
        half_size: f32,
        color: Color,
    },
    /// A straight line segment between two projected endpoints
    Segment {
        x1: f32,
        y1: f32,
        x2: f32,
        y2: f32,
        color: Color,
    },
}

/// Re-express a world point in the camera's frame.
///
/// Components of the result are the coordinates along `right`, `up`,
/// `forward` and `w` respectively; `z` is therefore the view depth. The
/// `w` component keeps the frame fully 4-dimensional but plays no part in
/// the 2D screen mapping.
pub fn to_view_space(world: Vec4, camera: &Camera) -> Vec4 {
    let relative = world - camera.position;
    Vec4::new(
        relative.dot(camera.right()),
        relative.dot(camera.up()),
        relative.dot(camera.forward()),
        relative.dot(camera.w()),
    )
}

/// Perspective-project a view-space point onto the screen.
///
/// A point is visible only when strictly in front of the camera
/// (`view.z > 0`); the screen position scales its transverse coordinates
/// by `view_distance / depth`. Returns `None` for invisible points.
pub fn project(view: Vec4, camera: &Camera) -> Option<[f32; 2]> {
    if view.z > 0.0 {
        let scale = camera.view_distance() / view.z;
        Some([view.x * scale, view.y * scale])
    } else {
        None
    }
}

/// Project every primitive of the scene into screen primitives.
///
/// Pure: neither the scene nor the camera is mutated. Points become
/// filled squares of [`POINT_HALF_SIZE`] when visible. A line segment is
/// emitted only when *both* endpoints are independently visible, each
/// projected with its own depth scale; a segment with one endpoint behind
/// the camera is dropped whole rather than clipped to the near plane.
pub fn render_frame(scene: &Scene) -> Vec<ScreenPrimitive> {
    let camera = scene.camera();

    scene
        .primitives()
        .iter()
        .filter_map(|primitive| match *primitive {
            Primitive::Point(point) => {
                let view = to_view_space(point.position, camera);
                let [x, y] = project(view, camera)?;
                Some(ScreenPrimitive::FilledSquare {
                    x,
                    y,
                    half_size: POINT_HALF_SIZE,
                    color: point.color,
                })
            }
            Primitive::Line(line) => {
                let [x1, y1] = project(to_view_space(line.start, camera), camera)?;
                let [x2, y2] = project(to_view_space(line.end, camera), camera)?;
                Some(ScreenPrimitive::Segment {
                    x1,
                    y1,
                    x2,
                    y2,
                    color: line.color,
                })
            }
        })
        .collect()
}
