//! Startup scene construction
//!
//! Builds the demo scene from configuration: a camera and a hypercube,
//! optionally pre-rotated about its own center so something more
//! interesting than a cube-in-a-cube silhouette appears on screen.

use hyperview_core::{Camera, Color, Mat4, RotationPlane, Scene, Vec4};
use hyperview_math::Hypercube;

use crate::config::{CameraConfig, SceneConfig};

fn vec4_from(components: [f32; 4]) -> Vec4 {
    Vec4::new(components[0], components[1], components[2], components[3])
}

/// Build the camera described by the configuration
pub fn build_camera(config: &CameraConfig) -> Camera {
    Camera::new(
        vec4_from(config.start_position),
        vec4_from(config.facing),
        Vec4::Y,
        Vec4::X,
        Vec4::W,
        config.view_distance,
    )
}

/// Build the startup scene described by the configuration
///
/// An invalid `rotation_plane` label is a configuration error and is
/// reported, not ignored.
pub fn build_scene(
    scene_config: &SceneConfig,
    camera_config: &CameraConfig,
) -> Result<Scene, hyperview_math::PlaneParseError> {
    let mut scene = Scene::with_camera(build_camera(camera_config));

    let size = scene_config.hypercube_size;
    let offset = vec4_from(scene_config.hypercube_offset);
    let color = Color {
        rgba: scene_config.color,
    };

    let orientation = match &scene_config.rotation_plane {
        Some(label) => {
            let plane: RotationPlane = label.parse()?;
            let center = offset + Vec4::new(size, size, size, size) * 0.5;
            Some(Mat4::rotation_about(
                plane,
                scene_config.rotation_angle,
                center,
            ))
        }
        None => None,
    };

    let cube = Hypercube::new(size, offset);
    let place = |v: Vec4| match &orientation {
        Some(m) => m.apply(v),
        None => v,
    };

    if scene_config.outline {
        for (start, end) in cube.edges() {
            scene.add_line(place(start), place(end), color);
        }
    } else {
        for &vertex in cube.vertices() {
            scene.add_point(place(vertex), color);
        }
    }

    log::info!(
        "built scene: hypercube size {} at {:?}, {} primitives",
        size,
        scene_config.hypercube_offset,
        scene.primitive_count()
    );

    Ok(scene)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CameraConfig, SceneConfig};

    #[test]
    fn test_build_scene_outline() {
        let scene = build_scene(&SceneConfig::default(), &CameraConfig::default()).unwrap();
        assert_eq!(scene.primitive_count(), 32);
    }

    #[test]
    fn test_build_scene_points() {
        let config = SceneConfig {
            outline: false,
            ..SceneConfig::default()
        };
        let scene = build_scene(&config, &CameraConfig::default()).unwrap();
        assert_eq!(scene.primitive_count(), 16);
    }

    #[test]
    fn test_build_scene_rejects_bad_plane_label() {
        let config = SceneConfig {
            rotation_plane: Some("xq".to_string()),
            ..SceneConfig::default()
        };
        assert!(build_scene(&config, &CameraConfig::default()).is_err());
    }

    #[test]
    fn test_initial_rotation_keeps_center_fixed() {
        // Rotating about the hypercube center must not move the center of
        // mass of the vertex cloud.
        let plain = SceneConfig {
            outline: false,
            ..SceneConfig::default()
        };
        let rotated = SceneConfig {
            outline: false,
            rotation_plane: Some("zw".to_string()),
            rotation_angle: 0.7,
            ..SceneConfig::default()
        };

        let centroid = |scene: &Scene| {
            let mut sum = Vec4::ZERO;
            for p in scene.primitives() {
                if let hyperview_core::Primitive::Point(point) = p {
                    sum += point.position;
                }
            }
            sum * (1.0 / scene.primitive_count() as f32)
        };

        let a = centroid(&build_scene(&plain, &CameraConfig::default()).unwrap());
        let b = centroid(&build_scene(&rotated, &CameraConfig::default()).unwrap());

        assert!((a - b).length() < 0.001);
    }

    #[test]
    fn test_build_camera_uses_config() {
        let config = CameraConfig {
            start_position: [0.0, 0.0, -500.0, 0.0],
            facing: [0.0, 0.0, 0.0, 0.0],
            view_distance: 500.0,
        };
        let camera = build_camera(&config);
        assert_eq!(camera.position, Vec4::new(0.0, 0.0, -500.0, 0.0));
        assert_eq!(camera.view_distance(), 500.0);
        assert!((camera.forward() - Vec4::Z).length() < 0.001);
    }
}
