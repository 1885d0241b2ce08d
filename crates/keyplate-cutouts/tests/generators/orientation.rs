use keyplate_core::CutoutModel;
use keyplate_cutouts::{GenerationOptions, Housing, KeyDescriptor, QuarterTurn};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

fn generate(housing: Housing, width: Decimal, height: Decimal, skip: bool) -> CutoutModel {
    let key = KeyDescriptor::new(width, height).with_skip_orientation_fix(skip);
    housing
        .generator()
        .generate(&key, &GenerationOptions::new().with_kerf(dec!(0.05)))
        .unwrap()
        .unwrap()
}

#[test]
fn test_all_flag_combinations() {
    let housing = Housing::EcTopreDeskeys;
    let authored = generate(housing, dec!(1.5), dec!(1), false);

    // (height > width, skip) -> rotated?
    for (tall, skip, rotated) in [
        (false, false, false),
        (false, true, false),
        (true, false, true),
        (true, true, false),
    ] {
        let (w, h) = if tall {
            (dec!(1), dec!(1.5))
        } else {
            (dec!(1.5), dec!(1))
        };
        let model = generate(housing, w, h, skip);
        let expected = if rotated {
            authored.clone().rotated(QuarterTurn::Clockwise.degrees())
        } else {
            authored.clone()
        };
        assert_eq!(model, expected, "tall={} skip={}", tall, skip);
    }
}

#[test]
fn test_square_key_is_never_rotated() {
    let model = generate(Housing::EcTopreOem, dec!(2), dec!(2), false);
    let pinned = generate(Housing::EcTopreOem, dec!(2), dec!(2), true);
    assert_eq!(model, pinned);
}

#[test]
fn test_housing_rotation_directions() {
    for (housing, turn) in [
        (Housing::EcTopreOem, QuarterTurn::CounterClockwise),
        (Housing::EcTopreDeskeys, QuarterTurn::Clockwise),
        (Housing::DynacapClassic, QuarterTurn::CounterClockwise),
    ] {
        let wide = generate(housing, dec!(2.5), dec!(1), false);
        let tall = generate(housing, dec!(1), dec!(2.5), false);
        assert_eq!(tall, wide.rotated(turn.degrees()), "{}", housing);
    }
}
