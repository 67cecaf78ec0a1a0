//! Integration tests for the scene + projection pipeline
//!
//! End-to-end scenarios: build a scene the way the host does, move the
//! camera, and check the screen primitives that come out.

use hyperview_core::{
    render_frame, Axis, Camera, CameraPlane, Color, InputDelta, Primitive, Scene, ScreenPrimitive,
    SceneError, Vec4,
};
use hyperview_math::Hypercube;

const EPSILON: f32 = 0.001;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

#[test]
fn world_origin_projects_to_screen_center() {
    // Default camera at (0,0,-1000,0) facing (0,0,1,0) with d = 1000:
    // the world origin is exactly 1000 units along forward.
    let mut scene = Scene::new();
    scene.add_point(Vec4::ZERO, Color::BLACK);

    let primitives = render_frame(&scene);
    assert_eq!(primitives.len(), 1);
    match primitives[0] {
        ScreenPrimitive::FilledSquare { x, y, .. } => {
            assert!(approx_eq(x, 0.0));
            assert!(approx_eq(y, 0.0));
        }
        ref other => panic!("expected a filled square, got {:?}", other),
    }
}

#[test]
fn hypercube_outline_has_32_unit_edges() {
    let r = 1.0;
    let mut scene = Scene::new();
    scene.add_hypercube_outline(r, Vec4::ZERO, Color::BLACK);

    let lines: Vec<_> = scene
        .primitives()
        .iter()
        .filter_map(|p| match p {
            Primitive::Line(line) => Some(line),
            _ => None,
        })
        .collect();
    assert_eq!(lines.len(), 32);

    let corners = Hypercube::new(r, Vec4::ZERO);
    for line in lines {
        // Both endpoints are hypercube corners...
        assert!(corners.vertices().contains(&line.start));
        assert!(corners.vertices().contains(&line.end));

        // ...differing in exactly one coordinate, by exactly r.
        let d = line.end - line.start;
        let nonzero: Vec<f32> = [d.x, d.y, d.z, d.w]
            .into_iter()
            .filter(|c| *c != 0.0)
            .collect();
        assert_eq!(nonzero.len(), 1);
        assert_eq!(nonzero[0].abs(), r);
    }
}

#[test]
fn hypercube_in_front_of_camera_renders_fully() {
    // The demo scene of the original program: a 100-unit hypercube
    // centered on the camera axis, well in front of the eye.
    let mut scene = Scene::new();
    scene.add_hypercube_outline(100.0, Vec4::new(-50.0, -50.0, 50.0, 0.0), Color::BLACK);

    let primitives = render_frame(&scene);
    assert_eq!(primitives.len(), 32);
    assert!(primitives
        .iter()
        .all(|p| matches!(p, ScreenPrimitive::Segment { .. })));
}

#[test]
fn walking_behind_the_scene_hides_it() {
    let mut scene = Scene::new();
    scene.add_hypercube_points(100.0, Vec4::new(-50.0, -50.0, 50.0, 0.0), Color::BLACK);
    assert_eq!(render_frame(&scene).len(), 16);

    // Walk forward past the hypercube: everything ends up behind the eye.
    scene.camera_mut().translate(Axis::Forward, 5000.0);
    assert!(render_frame(&scene).is_empty());
}

#[test]
fn quarter_turn_keeps_projection_consistent() {
    // After a 90° XY roll the frame has turned but the scene is still in
    // front of the camera; a point on the old `right` axis now lands on
    // the screen's y axis.
    let mut scene = Scene::new();
    scene.add_point(Vec4::new(100.0, 0.0, 0.0, 0.0), Color::BLACK);

    scene
        .camera_mut()
        .rotate(CameraPlane::XY, std::f32::consts::FRAC_PI_2);

    let primitives = render_frame(&scene);
    assert_eq!(primitives.len(), 1);
    match primitives[0] {
        ScreenPrimitive::FilledSquare { x, y, .. } => {
            // right' = +y, up' = -x: the point reads as -100 along up'
            assert!(approx_eq(x, 0.0));
            assert!(approx_eq(y, -100.0));
        }
        ref other => panic!("expected a filled square, got {:?}", other),
    }
}

#[test]
fn input_driven_flight_matches_direct_translation() {
    let mut by_input = Scene::new();
    let mut direct = Scene::new();

    let input = InputDelta {
        move_forward: 200.0,
        move_right: -40.0,
        ..InputDelta::default()
    };
    by_input.camera_mut().apply_input(&input, 0.25);

    direct.camera_mut().translate(Axis::Forward, 50.0);
    direct.camera_mut().translate(Axis::Right, -10.0);

    assert_eq!(by_input.camera().position, direct.camera().position);
}

#[test]
fn second_camera_is_rejected_and_first_kept() {
    let mut scene = Scene::new();
    scene.add_hypercube_outline(100.0, Vec4::ZERO, Color::BLACK);
    let original = *scene.camera();

    let result = scene.add_camera(Camera::new(
        Vec4::new(5.0, 5.0, 5.0, 5.0),
        Vec4::ZERO,
        Vec4::Y,
        Vec4::X,
        Vec4::W,
        250.0,
    ));

    assert_eq!(result, Err(SceneError::CameraExists));
    assert_eq!(*scene.camera(), original);
    assert_eq!(scene.primitive_count(), 32);
}
