//! EC (Topre) housings
//!
//! EC switch cutouts are chamfered rather than rounded. Housing sizes
//! (width x height):
//!
//! - OEM 1u: 14.6 x 14, 2u: 32 x 13.95
//! - Deskeys 1u: 14.7 x 14.1, 2u: 32.1 x 14.1 (Deskeys housings measure
//!   14.6 x 14 and 32 x 13.9; the plate cutout is made slightly larger)
//! - Deskeys spacebar stabilizer: 13.4 x 13.53

use rust_decimal_macros::dec;

use super::Housing;
use crate::classifier::STABILIZER_SPACING;
use crate::generator::{StabilizerCutout, SwitchCutout};
use crate::orientation::QuarterTurn;
use crate::outline::{CornerTreatment, Corners, MountingHoles, Outline, QuadOutline};

const CHAMFER_1U: CornerTreatment = CornerTreatment::chamfer(dec!(1));

/// 2u corners: small top chamfer, long shallow bottom chamfer
const CORNERS_2U: Corners = Corners::top_bottom(
    CornerTreatment::chamfer(dec!(1)),
    CornerTreatment::Chamfer {
        x: dec!(3),
        y: dec!(2),
    },
);

pub static EC_TOPRE_OEM: SwitchCutout = SwitchCutout {
    housing: Housing::EcTopreOem,
    one_unit: Outline::Quad(QuadOutline {
        width: dec!(14.6),
        height: dec!(14),
        corners: Corners::uniform(CHAMFER_1U),
        holes: None,
    }),
    two_unit: Outline::Quad(QuadOutline {
        width: dec!(32),
        height: dec!(13.95),
        corners: CORNERS_2U,
        // 0.1512 and 0.1469 beyond the nominal bottom corners
        holes: Some(MountingHoles {
            x: dec!(16.1512),
            y: dec!(-7.1219),
            radius: dec!(0.8),
        }),
    }),
    turn: QuarterTurn::CounterClockwise,
};

pub static EC_TOPRE_DESKEYS: SwitchCutout = SwitchCutout {
    housing: Housing::EcTopreDeskeys,
    one_unit: Outline::Quad(QuadOutline {
        width: dec!(14.7),
        height: dec!(14.1),
        corners: Corners::uniform(CHAMFER_1U),
        holes: None,
    }),
    two_unit: Outline::Quad(QuadOutline {
        width: dec!(32.1),
        height: dec!(14.1),
        corners: CORNERS_2U,
        holes: None,
    }),
    turn: QuarterTurn::Clockwise,
};

pub static EC_TOPRE_DESKEYS_STABILIZER: StabilizerCutout = StabilizerCutout {
    housing: Housing::EcTopreDeskeysStabilizer,
    outline: Outline::Quad(QuadOutline {
        width: dec!(13.4),
        height: dec!(13.53),
        corners: Corners::uniform(CornerTreatment::StabilizerFillet),
        holes: None,
    }),
    spacing: STABILIZER_SPACING,
    turn: QuarterTurn::Clockwise,
};
