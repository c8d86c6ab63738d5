//! End-to-end gesture sequences against the controller surface.

use gimbal::prelude::*;
use rand::Rng;

fn assert_mat4_approx_eq(a: Mat4, b: Mat4) {
    for (x, y) in a.to_cols_array().iter().zip(b.to_cols_array().iter()) {
        assert!((x - y).abs() < 1.0e-5, "{} != {}", a, b);
    }
}

#[test]
fn long_random_sessions_keep_the_rotation_orthonormal() {
    let mut rng = rand::rng();
    let mut arcball = Arcball::new(3.0).unwrap();

    for _ in 0..500 {
        arcball.begin_drag(
            rng.random_range(0.0f32..800.0),
            rng.random_range(0.0f32..600.0),
        );
        for _ in 0..10 {
            // Deliberately overshoots the viewport on both sides.
            arcball.continue_drag(
                rng.random_range(-200.0f32..1000.0),
                rng.random_range(-200.0f32..800.0),
            );
        }
        arcball.end_drag();
    }

    let m = FrameTransforms::for_mode(InteractionMode::Object, &arcball).model;
    let cols = [m.x_axis.xyz(), m.y_axis.xyz(), m.z_axis.xyz()];
    for i in 0..3 {
        for j in 0..3 {
            let expected = if i == j { 1.0 } else { 0.0 };
            let d: f32 = cols[i].dot(cols[j]);
            assert!(
                (d - expected).abs() < 1.0e-4,
                "columns {} and {} drifted: dot = {}",
                i,
                j,
                d
            );
        }
    }
}

#[test]
fn horizontal_drag_rotation_grows_with_the_delta() {
    let mut arcball = Arcball::with_config(
        3.0,
        ArcballConfig {
            rotation_sensitivity: 2.0,
            zoom_sensitivity: 0.0005,
            ..ArcballConfig::default()
        },
    )
    .unwrap();
    arcball.set_viewport_size(700, 700);

    arcball.begin_drag(100.0, 100.0);

    let mut last_angle = 0.0f32;
    for &x in &[150.0f32, 190.0, 230.0, 270.0] {
        arcball.continue_drag(x, 100.0);
        let angle = arcball.model_transform().angle_between(Rot3::IDENTITY);
        assert!(
            angle > last_angle,
            "angle {} did not grow past {} at x = {}",
            angle,
            last_angle,
            x
        );
        last_angle = angle;
    }
    arcball.end_drag();

    // A horizontal drag must turn the scene about an axis with a vertical
    // component: the world X axis cannot stay put.
    let turned_x = arcball.model_transform() * Vec3::X;
    assert!((turned_x - Vec3::X).length() > 1.0e-3);
}

#[test]
fn repeated_extreme_zoom_out_pins_the_distance_above_zero() {
    let mut arcball = Arcball::new(3.0).unwrap();
    let min = arcball.config().min_distance;

    let mut last = arcball.distance();
    for _ in 0..100 {
        arcball.zoom(-1000.0);
        let d = arcball.distance();
        assert!(d <= last, "distance must not grow while zooming out");
        assert!(d >= min, "distance crossed the minimum bound");
        assert!(d > 0.0, "distance reached zero");
        last = d;
    }
    assert_eq!(last, min, "large negative deltas must saturate at the bound");
}

#[test]
fn reset_restores_the_view_produced_at_construction() {
    let mut arcball = Arcball::new(3.0).unwrap();
    let fresh_view = arcball.view_transform().to_mat4();

    let mut rng = rand::rng();
    for _ in 0..50 {
        arcball.begin_drag(rng.random_range(0.0f32..800.0), rng.random_range(0.0f32..600.0));
        arcball.continue_drag(rng.random_range(0.0f32..800.0), rng.random_range(0.0f32..600.0));
        arcball.end_drag();
        arcball.zoom(rng.random_range(-5000.0f32..5000.0));
    }

    arcball.reset();
    assert_mat4_approx_eq(arcball.view_transform().to_mat4(), fresh_view);
    assert!(arcball.model_transform().angle_between(Rot3::IDENTITY) < 1.0e-6);
}

#[test]
fn dragging_back_to_the_start_restores_the_baseline() {
    let mut arcball = Arcball::new(3.0).unwrap();

    arcball.begin_drag(200.0, 300.0);
    arcball.continue_drag(500.0, 150.0);
    arcball.end_drag();
    let baseline = FrameTransforms::for_mode(InteractionMode::Object, &arcball).model;

    arcball.begin_drag(250.0, 250.0);
    arcball.continue_drag(600.0, 400.0);
    arcball.continue_drag(250.0, 250.0);
    arcball.end_drag();

    let back = FrameTransforms::for_mode(InteractionMode::Object, &arcball).model;
    assert_mat4_approx_eq(back, baseline);
}

#[test]
fn both_mode_pairs_agree_right_after_construction() {
    let arcball = Arcball::new(3.0).unwrap();

    let view_pair = FrameTransforms::for_mode(InteractionMode::View, &arcball);
    let object_pair = FrameTransforms::for_mode(InteractionMode::Object, &arcball);

    // With the identity orientation and no zoom yet, both modes describe the
    // same scene.
    assert_mat4_approx_eq(view_pair.model, object_pair.model);
    assert_mat4_approx_eq(view_pair.view, object_pair.view);

    let eye = eye_from_view(&view_pair.view);
    assert!((eye - Vec3::new(0.0, 0.0, 3.0)).length() < 1.0e-5);
}
