use std::f32::consts::FRAC_PI_2;
use triangle_demos::camera::{OrbitCamera, ZOOM_MAX, ZOOM_MIN};

#[cfg(test)]
mod clamp_tests {
    use super::*;

    #[test]
    fn test_zoom_stays_in_range_for_any_scroll_sequence() {
        let mut camera = OrbitCamera::new(0.3, 5.0);

        // A hostile mix of large and small scroll deltas.
        let deltas = [30.0, -30.0, 1.0, -0.5, 100.0, -100.0, 0.1, 7.3, -2.2];
        for _ in 0..50 {
            for delta in deltas {
                camera.scroll(delta);
                assert!(
                    (ZOOM_MIN..=ZOOM_MAX).contains(&camera.zoom),
                    "zoom escaped range: {}",
                    camera.zoom
                );
            }
        }
    }

    #[test]
    fn test_pitch_stays_in_range_for_any_drag_sequence() {
        let mut camera = OrbitCamera::new(0.3, 5.0);

        let deltas = [500.0, -1200.0, 3.0, -3.0, 10_000.0, -10_000.0];
        for _ in 0..20 {
            for delta in deltas {
                camera.drag(0.0, delta);
                assert!(
                    camera.pitch >= -FRAC_PI_2 && camera.pitch <= FRAC_PI_2,
                    "pitch escaped range: {}",
                    camera.pitch
                );
            }
        }
    }

    #[test]
    fn test_negative_scroll_cannot_invert_zoom() {
        let mut camera = OrbitCamera::new(0.3, 5.0);
        // A single -10 line scroll would zero the multiplier without the clamp.
        camera.scroll(-10.0);
        assert_eq!(camera.zoom, ZOOM_MIN);
        assert!(camera.distance().is_finite());
    }
}

#[cfg(test)]
mod accumulation_tests {
    use super::*;

    #[test]
    fn test_drag_splits_do_not_change_the_result() {
        let mut one_go = OrbitCamera::new(0.3, 5.0);
        one_go.drag(90.0, 0.0);

        let mut stepwise = OrbitCamera::new(0.3, 5.0);
        for _ in 0..9 {
            stepwise.drag(10.0, 0.0);
        }

        assert!((one_go.yaw - stepwise.yaw).abs() < 1e-5);
    }

    #[test]
    fn test_untouched_camera_keeps_front_view() {
        let mut camera = OrbitCamera::new(0.5, 3.0);
        camera.advance(42.0);

        // Spin changes the model angle only; orbit state stays at rest.
        assert_eq!(camera.yaw, 0.0);
        assert_eq!(camera.pitch, 0.0);
        assert_eq!(camera.zoom, 1.0);
        assert_eq!(camera.distance(), 3.0);
    }

    #[test]
    fn test_advance_overwrites_rather_than_accumulates() {
        let mut camera = OrbitCamera::new(0.5, 3.0);
        camera.advance(10.0);
        camera.advance(10.0);
        assert!((camera.rotation_angle - 5.0).abs() < 1e-6);
    }
}
