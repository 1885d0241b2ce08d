use keyplate_core::{CutoutModel, PathPrimitive, Point};
use keyplate_cutouts::{CutoutError, GenerationOptions, Housing, KeyDescriptor};
use rust_decimal_macros::dec;

const STABILIZERS: [Housing; 2] = [
    Housing::EcTopreDeskeysStabilizer,
    Housing::DynacapClassicStabilizer,
];

fn generate(
    housing: Housing,
    key: KeyDescriptor,
    options: GenerationOptions,
) -> Option<CutoutModel> {
    housing.generator().generate(&key, &options).unwrap()
}

fn child_center(model: &CutoutModel, name: &str) -> Point {
    model
        .child(name)
        .and_then(|c| c.extents().unwrap())
        .map(|e| e.center())
        .unwrap()
}

fn line(model: &CutoutModel, name: &str) -> (Point, Point) {
    match model.get(name) {
        Some(PathPrimitive::Line(l)) => (l.start, l.end),
        other => panic!("expected line {}, got {:?}", name, other),
    }
}

#[test]
fn test_spacebar_with_kerf() {
    let key = KeyDescriptor::new(dec!(6.25), dec!(1));
    let options = GenerationOptions::new().with_kerf(dec!(0.1));
    let model = generate(Housing::EcTopreDeskeysStabilizer, key, options).unwrap();

    assert!(model.paths.is_empty());
    assert_eq!(
        model.models.keys().map(String::as_str).collect::<Vec<_>>(),
        vec!["left", "right"]
    );
    assert!(child_center(&model, "left").approx_eq(&Point::new(-50.0, 0.0), 1e-9));
    assert!(child_center(&model, "right").approx_eq(&Point::new(50.0, 0.0), 1e-9));

    // 13.4 x 13.53 pulled in by 0.1 on every side
    let (start, end) = line(&model, "left/lineTop");
    assert!(start.approx_eq(&Point::new(-56.6, 6.665), 1e-9));
    assert!(end.approx_eq(&Point::new(-43.4, 6.665), 1e-9));
    let (start, end) = line(&model, "right/lineRight");
    assert!(start.approx_eq(&Point::new(56.6, 6.665), 1e-9));
    assert!(end.approx_eq(&Point::new(56.6, -6.665), 1e-9));
}

#[test]
fn test_vertical_spacebar_is_rotated() {
    let options = GenerationOptions::new().with_kerf(dec!(0.1));
    let wide = generate(
        Housing::EcTopreDeskeysStabilizer,
        KeyDescriptor::new(dec!(6.25), dec!(1)),
        options,
    )
    .unwrap();
    let tall = generate(
        Housing::EcTopreDeskeysStabilizer,
        KeyDescriptor::new(dec!(1), dec!(6.25)),
        options,
    )
    .unwrap();

    assert_eq!(tall, wide.clone().rotated(-90.0));
    assert!(child_center(&tall, "left").approx_eq(&Point::new(0.0, 50.0), 1e-9));
    assert!(child_center(&tall, "right").approx_eq(&Point::new(0.0, -50.0), 1e-9));
}

#[test]
fn test_left_and_right_are_congruent() {
    for housing in STABILIZERS {
        for size in [dec!(6), dec!(6.25), dec!(7), dec!(8)] {
            let options = GenerationOptions::new()
                .with_kerf(dec!(0.05))
                .with_stabilizer_fillet_radius(dec!(0.5));
            let model = generate(housing, KeyDescriptor::new(size, dec!(1)), options).unwrap();
            let left = model.child("left").unwrap();
            let right = model.child("right").unwrap();
            let offset = child_center(&model, "right").x - child_center(&model, "left").x;
            assert!(left.clone().moved(offset, 0.0).approx_eq(right, 1e-9));
        }
    }
}

#[test]
fn test_spacing_per_class() {
    for (size, spacing) in [
        (dec!(6), 47.625),
        (dec!(6.25), 50.0),
        (dec!(7), 57.15),
        (dec!(8), 66.675),
        (dec!(10), 66.675),
    ] {
        let model = generate(
            Housing::DynacapClassicStabilizer,
            KeyDescriptor::new(size, dec!(1)),
            GenerationOptions::new(),
        )
        .unwrap();
        assert!(child_center(&model, "right").approx_eq(&Point::new(spacing, 0.0), 1e-9));
        assert!(child_center(&model, "left").approx_eq(&Point::new(-spacing, 0.0), 1e-9));
    }
}

#[test]
fn test_short_keys_have_no_stabilizer() {
    for housing in STABILIZERS {
        for (w, h) in [
            (dec!(1), dec!(1)),
            (dec!(2), dec!(1)),
            (dec!(5.99), dec!(1)),
            (dec!(1), dec!(2.75)),
        ] {
            assert!(generate(housing, KeyDescriptor::new(w, h), GenerationOptions::new()).is_none());
        }
    }
}

#[test]
fn test_pinned_vertical_key_measures_width() {
    let key = KeyDescriptor::new(dec!(1), dec!(6.25)).with_skip_orientation_fix(true);
    for housing in STABILIZERS {
        assert!(generate(housing, key, GenerationOptions::new()).is_none());
    }
}

#[test]
fn test_dynacap_stabilizer_is_centred_on_its_spacing() {
    let model = generate(
        Housing::DynacapClassicStabilizer,
        KeyDescriptor::new(dec!(7), dec!(1)),
        GenerationOptions::new(),
    )
    .unwrap();
    let e = model.child("left").unwrap().extents().unwrap().unwrap();
    assert!((e.width() - 13.6).abs() < 1e-9);
    assert!((e.height() - 13.9).abs() < 1e-9);
    assert!(e.center().approx_eq(&Point::new(-57.15, 0.0), 1e-9));
}

#[test]
fn test_fillet_radius_zero_keeps_sharp_corners() {
    let model = generate(
        Housing::EcTopreDeskeysStabilizer,
        KeyDescriptor::new(dec!(6.25), dec!(1)),
        GenerationOptions::new(),
    )
    .unwrap();
    assert_eq!(model.path_count(), 8);
    assert!(model.get("left/filletTopLeft").is_none());
}

#[test]
fn test_filleted_corners_trim_lines() {
    let options = GenerationOptions::new().with_stabilizer_fillet_radius(dec!(1));
    let model = generate(
        Housing::EcTopreDeskeysStabilizer,
        KeyDescriptor::new(dec!(6.25), dec!(1)),
        options,
    )
    .unwrap();
    assert_eq!(model.path_count(), 16);
    let (start, end) = line(&model, "right/lineTop");
    assert!(start.approx_eq(&Point::new(50.0 - 5.7, 6.765), 1e-9));
    assert!(end.approx_eq(&Point::new(50.0 + 5.7, 6.765), 1e-9));
    match model.get("right/filletTopRight") {
        Some(PathPrimitive::Arc(arc)) => {
            assert_eq!(arc.radius, 1.0);
            assert!(arc.clockwise);
            assert!(arc
                .center()
                .unwrap()
                .approx_eq(&Point::new(55.7, 5.765), 1e-9));
        }
        other => panic!("expected arc, got {:?}", other),
    }
}

#[test]
fn test_oversized_fillet_is_rejected() {
    let options = GenerationOptions::new().with_stabilizer_fillet_radius(dec!(6.8));
    let err = Housing::EcTopreDeskeysStabilizer
        .generator()
        .generate(&KeyDescriptor::new(dec!(6.25), dec!(1)), &options)
        .unwrap_err();
    assert!(matches!(err, CutoutError::Parameter(_)));
}

#[test]
fn test_negative_fillet_is_rejected() {
    let options = GenerationOptions::new().with_stabilizer_fillet_radius(dec!(-1));
    let result = Housing::EcTopreDeskeysStabilizer
        .generator()
        .generate(&KeyDescriptor::new(dec!(6.25), dec!(1)), &options);
    assert!(matches!(result, Err(CutoutError::Parameter(_))));
}
