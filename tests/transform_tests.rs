use glam::{Mat4, Vec4};
use std::f32::consts::PI;
use triangle_demos::camera::OrbitCamera;
use triangle_demos::transform::{model_matrix, mvp_matrix, view_matrix, Projection};

const TOLERANCE: f32 = 1e-6;

#[cfg(test)]
mod model_matrix_tests {
    use super::*;

    #[test]
    fn test_zero_angle_is_identity() {
        assert_eq!(model_matrix(0.0), Mat4::IDENTITY);
    }

    #[test]
    fn test_half_turn_flips_x_axis() {
        let rotated = model_matrix(PI) * Vec4::new(1.0, 0.0, 0.0, 1.0);

        assert!(
            (rotated.x - -1.0).abs() < TOLERANCE,
            "Expected x ~ -1.0, got {}",
            rotated.x
        );
        assert!(rotated.y.abs() < TOLERANCE);
        assert!(rotated.z.abs() < TOLERANCE);
    }

    #[test]
    fn test_rotation_leaves_y_axis_fixed() {
        for angle in [0.3, 1.0, PI, 5.0] {
            let rotated = model_matrix(angle) * Vec4::new(0.0, 1.0, 0.0, 1.0);
            assert!((rotated.y - 1.0).abs() < TOLERANCE);
            assert!(rotated.x.abs() < TOLERANCE);
            assert!(rotated.z.abs() < TOLERANCE);
        }
    }

    #[test]
    fn test_quarter_turn_maps_x_to_minus_z() {
        // Row layout (c,0,s / 0,1,0 / -s,0,c): +X heads towards -Z.
        let rotated = model_matrix(PI / 2.0) * Vec4::new(1.0, 0.0, 0.0, 1.0);
        assert!(rotated.x.abs() < TOLERANCE);
        assert!((rotated.z - -1.0).abs() < TOLERANCE);
    }
}

#[cfg(test)]
mod projection_tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        // fov 45 deg, aspect 1.25, near 0.1, far 100.
        let m = Projection::new(45.0, 1.25, 0.1, 100.0).matrix();

        // m.col(c).row using glam axes; spec indices are [row][col].
        assert!((m.x_axis.x - 1.9314).abs() < 1e-3, "[0][0] = {}", m.x_axis.x);
        assert!((m.y_axis.y - 2.4142).abs() < 1e-3, "[1][1] = {}", m.y_axis.y);
        assert!((m.z_axis.z - -1.002).abs() < 1e-3, "[2][2] = {}", m.z_axis.z);
        assert!((m.w_axis.z - -0.2002).abs() < 1e-3, "[2][3] = {}", m.w_axis.z);
        assert_eq!(m.z_axis.w, -1.0, "[3][2] must be exactly -1");
    }

    #[test]
    fn test_off_diagonal_is_zero() {
        let m = Projection::new(45.0, 1.25, 0.1, 100.0).matrix();

        assert_eq!(m.x_axis.y, 0.0);
        assert_eq!(m.x_axis.z, 0.0);
        assert_eq!(m.y_axis.x, 0.0);
        assert_eq!(m.w_axis.x, 0.0);
        assert_eq!(m.w_axis.y, 0.0);
        assert_eq!(m.w_axis.w, 0.0);
    }

    #[test]
    fn test_square_aspect_makes_symmetric_frustum() {
        let m = Projection::new(45.0, 1.0, 0.1, 100.0).matrix();
        assert!((m.x_axis.x - m.y_axis.y).abs() < TOLERANCE);
    }
}

#[cfg(test)]
mod view_matrix_tests {
    use super::*;

    #[test]
    fn test_rest_view_is_pure_translation() {
        let view = view_matrix(0.0, 0.0, 5.0);

        assert_eq!(view.w_axis, Vec4::new(0.0, 0.0, -5.0, 1.0));
        assert_eq!(view.x_axis, Vec4::X);
        assert_eq!(view.y_axis, Vec4::Y);
        assert_eq!(view.z_axis, Vec4::Z);
    }

    #[test]
    fn test_translation_ignores_orbit_rotation() {
        // Setting the translation after composing the rotations keeps the
        // camera on the Z axis regardless of yaw/pitch.
        let view = view_matrix(1.1, -0.4, 7.5);
        assert_eq!(view.w_axis, Vec4::new(0.0, 0.0, -7.5, 1.0));
    }

    #[test]
    fn test_yaw_is_applied_after_pitch() {
        let yaw = 0.8;
        let pitch = 0.3;

        let expected = Mat4::from_translation(glam::Vec3::new(0.0, 0.0, -2.0))
            * Mat4::from_rotation_y(-yaw)
            * Mat4::from_rotation_x(-pitch);
        assert_eq!(view_matrix(yaw, pitch, 2.0), expected);
    }
}

#[cfg(test)]
mod mvp_tests {
    use super::*;

    #[test]
    fn test_rest_state_end_to_end() {
        // time = 0, no drag, zoom = 1, base distance 5.
        let camera = OrbitCamera::new(0.3, 5.0);
        let projection = Projection::new(45.0, 1.25, 0.1, 100.0);

        let view = view_matrix(camera.yaw, camera.pitch, camera.distance());
        assert_eq!(view.w_axis.z, -5.0);
        assert_eq!(model_matrix(camera.rotation_angle), Mat4::IDENTITY);

        let mvp = mvp_matrix(&camera, &projection);
        assert_eq!(mvp, projection.matrix() * view);
    }

    #[test]
    fn test_composition_order_is_projection_view_model() {
        let mut camera = OrbitCamera::new(0.5, 5.0);
        camera.advance(3.0);
        camera.drag(40.0, 25.0);
        camera.scroll(-1.0);
        let projection = Projection::new(45.0, 1.25, 0.1, 100.0);

        let expected = projection.matrix()
            * view_matrix(camera.yaw, camera.pitch, camera.distance())
            * model_matrix(camera.rotation_angle);
        assert_eq!(mvp_matrix(&camera, &projection), expected);
    }

    #[test]
    fn test_identical_state_gives_bit_identical_mvp() {
        let mut camera = OrbitCamera::new(0.3, 5.0);
        camera.advance(123.456);
        camera.drag(-87.0, 31.0);
        camera.scroll(0.5);
        let projection = Projection::new(45.0, 1000.0 / 800.0, 0.1, 100.0);

        let first = mvp_matrix(&camera, &projection).to_cols_array();
        let second = mvp_matrix(&camera, &projection).to_cols_array();
        assert_eq!(first, second, "pipeline must be pure in its inputs");
    }

    #[test]
    fn test_replayed_input_sequence_gives_bit_identical_mvp() {
        let projection = Projection::new(45.0, 1.25, 0.1, 100.0);

        let run = || {
            let mut camera = OrbitCamera::new(0.3, 5.0);
            for step in 0..50 {
                camera.drag(step as f32, -(step as f32) * 0.5);
                camera.scroll(if step % 2 == 0 { 1.0 } else { -1.0 });
                camera.advance(step as f32 * 0.016);
            }
            mvp_matrix(&camera, &projection).to_cols_array()
        };

        assert_eq!(run(), run());
    }
}
