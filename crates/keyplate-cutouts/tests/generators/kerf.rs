use keyplate_core::{enclosed_area, find_chains, CutoutModel, Point};
use keyplate_cutouts::{CutoutError, GenerationOptions, Housing, KeyDescriptor};
use proptest::prelude::*;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn generate(housing: Housing, key: KeyDescriptor, kerf: Decimal) -> CutoutModel {
    let options = GenerationOptions::new()
        .with_kerf(kerf)
        .with_stabilizer_fillet_radius(dec!(0.5));
    housing.generator().generate(&key, &options).unwrap().unwrap()
}

/// Area of the largest closed loop, ignoring mounting holes.
fn outline_area(model: &CutoutModel) -> f64 {
    find_chains(model)
        .iter()
        .filter(|c| c.len() > 1)
        .map(enclosed_area)
        .fold(0.0, f64::max)
}

#[test]
fn test_zero_kerf_is_nominal() {
    let model = generate(Housing::EcTopreOem, KeyDescriptor::new(dec!(1), dec!(1)), dec!(0));
    let e = model.extents().unwrap().unwrap();
    assert!(e.min.approx_eq(&Point::new(-7.3, -7.0), 1e-12));
    assert!(e.max.approx_eq(&Point::new(7.3, 7.0), 1e-12));
    // 14.6 x 14 less four 1x1 corner triangles
    assert!((outline_area(&model) - (14.6 * 14.0 - 2.0)).abs() < 1e-9);
}

#[test]
fn test_kerf_moves_opposite_edges_equally() {
    let model = generate(
        Housing::EcTopreDeskeys,
        KeyDescriptor::new(dec!(2), dec!(1)),
        dec!(0.15),
    );
    let e = model.extents().unwrap().unwrap();
    assert!((e.min.x + e.max.x).abs() < 1e-12);
    assert!((e.min.y + e.max.y).abs() < 1e-12);
    assert!((e.width() - (32.1 - 0.3)).abs() < 1e-9);
    assert!((e.height() - (14.1 - 0.3)).abs() < 1e-9);
}

#[test]
fn test_rounded_housings_ignore_kerf() {
    let key = KeyDescriptor::new(dec!(1), dec!(1));
    assert_eq!(
        generate(Housing::DynacapClassic, key, dec!(0)),
        generate(Housing::DynacapClassic, key, dec!(0.3))
    );
    let key = KeyDescriptor::new(dec!(6.25), dec!(1));
    assert_eq!(
        generate(Housing::DynacapClassicStabilizer, key, dec!(0)),
        generate(Housing::DynacapClassicStabilizer, key, dec!(0.3))
    );
}

#[test]
fn test_kerf_that_inverts_an_edge_fails() {
    let options = GenerationOptions::new().with_kerf(dec!(6.7));
    let result = Housing::EcTopreDeskeysStabilizer
        .generator()
        .generate(&KeyDescriptor::new(dec!(6.25), dec!(1)), &options);
    assert!(matches!(result, Err(CutoutError::Parameter(_))));
}

#[test]
fn test_kerf_that_swallows_chamfers_fails() {
    // Leaves a 1mm tall box, too short for two 1mm chamfers.
    let options = GenerationOptions::new().with_kerf(dec!(6.5));
    let result = Housing::EcTopreOem
        .generator()
        .generate(&KeyDescriptor::new(dec!(1), dec!(1)), &options);
    assert!(matches!(result, Err(CutoutError::Parameter(_))));
}

#[test]
fn test_extreme_allowances_fail_for_every_housing() {
    let key = KeyDescriptor::new(dec!(6.25), dec!(1));
    let extremes = [
        GenerationOptions::new().with_kerf(Decimal::MIN),
        GenerationOptions::new().with_kerf(Decimal::MAX),
        GenerationOptions::new().with_stabilizer_fillet_radius(Decimal::MAX),
    ];
    for options in extremes {
        for housing in Housing::ALL {
            let result = housing.generator().generate(&key, &options);
            assert!(
                matches!(result, Err(CutoutError::Parameter(_))),
                "{} accepted {:?}",
                housing,
                options
            );
        }
    }
}

proptest! {
    #[test]
    fn prop_kerf_shrinks_switch_outline(a in 0i64..300, b in 0i64..300) {
        prop_assume!(a != b);
        let (small, large) = if a < b { (a, b) } else { (b, a) };
        for housing in [Housing::EcTopreOem, Housing::EcTopreDeskeys] {
            for width in [dec!(1), dec!(2)] {
                let key = KeyDescriptor::new(width, dec!(1));
                let loose = outline_area(&generate(housing, key, Decimal::new(small, 3)));
                let tight = outline_area(&generate(housing, key, Decimal::new(large, 3)));
                prop_assert!(tight < loose);
            }
        }
    }

    #[test]
    fn prop_kerf_shrinks_stabilizer_outline(a in 0i64..300, b in 0i64..300) {
        prop_assume!(a != b);
        let (small, large) = if a < b { (a, b) } else { (b, a) };
        let key = KeyDescriptor::new(dec!(6.25), dec!(1));
        let loose = generate(Housing::EcTopreDeskeysStabilizer, key, Decimal::new(small, 3));
        let tight = generate(Housing::EcTopreDeskeysStabilizer, key, Decimal::new(large, 3));
        let loose = outline_area(loose.child("left").unwrap());
        let tight = outline_area(tight.child("left").unwrap());
        prop_assert!(tight < loose);
    }
}
