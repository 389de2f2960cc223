use std::f32::consts::PI;

use polyspin::{BufferGeometry, Geometry, Motion, Options, Scene, Shape};

const FRAME_TIMES: [f64; 8] = [0.0, 16.7, 33.3, 50.1, 66.6, 83.4, 100.0, 250.0];

#[test]
fn every_shape_forms_whole_triangles_within_range() {
    for shape in Shape::ALL {
        let vertex_count = shape.vertices().len() / 3;
        let indices = shape.indices();

        assert_eq!(indices.len() % 3, 0, "{}", shape.name());
        assert!(
            indices.iter().all(|&index| usize::from(index) < vertex_count),
            "{} has an index past its last vertex",
            shape.name()
        );
    }
}

#[test]
fn every_shape_has_one_color_per_vertex() {
    for shape in Shape::ALL {
        let geometry = BufferGeometry::from_geometry(&shape);
        assert_eq!(geometry.color.len(), geometry.vertex_count() * 4, "{}", shape.name());
    }
}

#[test]
fn one_revolution_restores_orientation() {
    let options = Options::default();
    let mut scene = Scene::from_options(&options, 0.0).unwrap();

    let before: Vec<_> = scene.drawables.iter().map(|d| d.model_matrix).collect();
    scene.update(options.revolution_ms);

    for (drawable, before) in scene.drawables.iter().zip(before) {
        if matches!(drawable.motion, Motion::Spin) {
            assert!(
                drawable.model_matrix.abs_diff_eq(before, 1e-4),
                "{} did not come back around",
                drawable.label
            );
        }
    }
}

#[test]
fn bobbing_accumulator_stays_within_bounds() {
    let options = Options::default();
    let [lower, upper] = options.oscillation_bounds;
    let mut scene = Scene::from_options(&options, 0.0).unwrap();

    for tick in 0..20_000 {
        scene.update(f64::from(tick) * 16.0);

        for drawable in &scene.drawables {
            if let Motion::SpinAndBob(oscillator) = drawable.motion {
                assert!(oscillator.offset() <= upper, "tick {tick}");
                assert!(oscillator.offset() >= lower, "tick {tick}");
            }
        }
    }
}

#[test]
fn same_frame_times_give_same_matrices() {
    let options = Options::default();
    let mut first = Scene::from_options(&options, 0.0).unwrap();
    let mut second = Scene::from_options(&options, 0.0).unwrap();

    for now in FRAME_TIMES {
        first.update(now);
        second.update(now);
    }

    for (a, b) in first.drawables.iter().zip(&second.drawables) {
        assert_eq!(a.model_matrix, b.model_matrix);
    }
}

#[test]
fn projection_focal_term_for_four_by_three() {
    let options = Options::default();
    let aspect = 4.0 / 3.0;
    let fov = PI / 4.0;

    let matrix = options.perspective(aspect).matrix();

    assert!((matrix.x_axis.x - 1.0 / (fov / 2.0).tan() / aspect).abs() < 1e-5);
}

#[test]
fn options_override_the_scene() {
    let toml = r#"
        revolution_ms = 1000.0

        [[objects]]
        shape = "octahedron"
        translation = [0.0, 2.0, -10.0]
        rotation_axis = [0.0, 0.0, 1.0]
        bob = true
    "#;

    let options = Options::from_toml_str(toml).unwrap();
    let scene = Scene::from_options(&options, 0.0).unwrap();

    assert_eq!(scene.drawables.len(), 1);
    let drawable = &scene.drawables[0];
    assert_eq!(drawable.revolution_ms, 1000.0);
    match drawable.motion {
        Motion::SpinAndBob(oscillator) => assert_eq!(oscillator.offset(), 2.0),
        Motion::Spin => panic!("octahedron should bob"),
    }
}
