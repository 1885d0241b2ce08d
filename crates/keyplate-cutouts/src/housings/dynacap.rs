//! DynaCap classic housings
//!
//! The 1u switch and the stabilizer are plain rounded rectangles. The 2u
//! switch housing is not rectangular: its outline is a hand-fitted
//! contour whose vertices and radii are used exactly as measured.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::Housing;
use crate::classifier::STABILIZER_SPACING;
use crate::generator::{StabilizerCutout, SwitchCutout};
use crate::orientation::QuarterTurn;
use crate::outline::{ContourOutline, ContourSegment, MountingHoles, Outline, RoundRectOutline};

const FILLET_MAIN: Decimal = dec!(1.425);
const FILLET_TOP_1: Decimal = dec!(0.92841);
const FILLET_TOP_2: Decimal = dec!(1.07499);
const FILLET_BOTTOM_1: Decimal = dec!(1.72493);
const FILLET_BOTTOM_2: Decimal = dec!(1.87495);

const fn cw(radius: Decimal) -> ContourSegment {
    ContourSegment::Arc {
        radius,
        clockwise: true,
    }
}

const fn ccw(radius: Decimal) -> ContourSegment {
    ContourSegment::Arc {
        radius,
        clockwise: false,
    }
}

/// 2u contour vertices, clockwise from the left end of the top-left fillet
pub static DYNACAP_CONTOUR_VERTICES: [[Decimal; 2]; 20] = [
    [dec!(-16.07544), dec!(4.35044)],
    [dec!(-14.65044), dec!(5.77544)],
    [dec!(-13.78483), dec!(5.77544)],
    [dec!(-12.92416), dec!(6.35572)],
    [dec!(-11.92762), dec!(7.02760)],
    [dec!(11.92762), dec!(7.02760)],
    [dec!(12.92416), dec!(6.35572)],
    [dec!(13.78483), dec!(5.77544)],
    [dec!(14.65044), dec!(5.77544)],
    [dec!(16.07544), dec!(4.35044)],
    [dec!(16.07544), dec!(-3.25044)],
    [dec!(14.65044), dec!(-4.67544)],
    [dec!(14.24640), dec!(-4.67544)],
    [dec!(12.63119), dec!(-5.79500)],
    [dec!(10.87550), dec!(-7.01191)],
    [dec!(-10.87550), dec!(-7.01191)],
    [dec!(-12.63118), dec!(-5.79499)],
    [dec!(-14.24640), dec!(-4.67544)],
    [dec!(-14.65044), dec!(-4.67544)],
    [dec!(-16.07544), dec!(-3.25044)],
];

/// Segment `i` joins vertex `i` to vertex `i + 1`
pub static DYNACAP_CONTOUR_SEGMENTS: [ContourSegment; 20] = [
    cw(FILLET_MAIN),
    ContourSegment::Line,
    ccw(FILLET_TOP_1),
    cw(FILLET_TOP_2),
    ContourSegment::Line,
    cw(FILLET_TOP_2),
    ccw(FILLET_TOP_1),
    ContourSegment::Line,
    cw(FILLET_MAIN),
    ContourSegment::Line,
    cw(FILLET_MAIN),
    ContourSegment::Line,
    ccw(FILLET_BOTTOM_1),
    cw(FILLET_BOTTOM_2),
    ContourSegment::Line,
    cw(FILLET_BOTTOM_2),
    ccw(FILLET_BOTTOM_1),
    ContourSegment::Line,
    cw(FILLET_MAIN),
    ContourSegment::Line,
];

pub static DYNACAP_CLASSIC: SwitchCutout = SwitchCutout {
    housing: Housing::DynacapClassic,
    one_unit: Outline::RoundRect(RoundRectOutline {
        width: dec!(14.7),
        height: dec!(14.1),
        radius: dec!(2.075),
    }),
    two_unit: Outline::Contour(ContourOutline {
        vertices: &DYNACAP_CONTOUR_VERTICES,
        segments: &DYNACAP_CONTOUR_SEGMENTS,
        holes: Some(MountingHoles {
            x: dec!(16.5),
            y: dec!(-7.25),
            radius: dec!(0.8),
        }),
    }),
    turn: QuarterTurn::CounterClockwise,
};

pub static DYNACAP_CLASSIC_STABILIZER: StabilizerCutout = StabilizerCutout {
    housing: Housing::DynacapClassicStabilizer,
    outline: Outline::RoundRect(RoundRectOutline {
        width: dec!(13.6),
        height: dec!(13.9),
        radius: dec!(1.07544),
    }),
    spacing: STABILIZER_SPACING,
    turn: QuarterTurn::Clockwise,
};
