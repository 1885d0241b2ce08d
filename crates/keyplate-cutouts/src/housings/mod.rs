//! Housing registry
//!
//! Each housing is a constant table interpreted by one of the shared
//! generators. [`generator_for`] maps a [`Housing`] to its table.

mod dynacap;
mod ec_topre;

pub use dynacap::{
    DYNACAP_CLASSIC, DYNACAP_CLASSIC_STABILIZER, DYNACAP_CONTOUR_SEGMENTS,
    DYNACAP_CONTOUR_VERTICES,
};
pub use ec_topre::{EC_TOPRE_DESKEYS, EC_TOPRE_DESKEYS_STABILIZER, EC_TOPRE_OEM};

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::CutoutError;
use crate::generator::CutoutGenerator;

/// Supported switch and stabilizer housings
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Housing {
    /// EC (Topre) switch, OEM housing; also fits Densus and KLC housings
    EcTopreOem,
    /// EC (Topre) switch, Deskeys housing
    EcTopreDeskeys,
    /// DynaCap classic switch housing
    DynacapClassic,
    /// EC (Topre) stabilizer, Deskeys housing
    EcTopreDeskeysStabilizer,
    /// DynaCap classic stabilizer housing
    DynacapClassicStabilizer,
}

impl Housing {
    pub const ALL: [Housing; 5] = [
        Housing::EcTopreOem,
        Housing::EcTopreDeskeys,
        Housing::DynacapClassic,
        Housing::EcTopreDeskeysStabilizer,
        Housing::DynacapClassicStabilizer,
    ];

    pub fn id(&self) -> &'static str {
        match self {
            Housing::EcTopreOem => "ec-topre-oem",
            Housing::EcTopreDeskeys => "ec-topre-deskeys",
            Housing::DynacapClassic => "dynacap-classic",
            Housing::EcTopreDeskeysStabilizer => "ec-topre-deskeys-stabilizer",
            Housing::DynacapClassicStabilizer => "dynacap-classic-stabilizer",
        }
    }

    pub fn is_stabilizer(&self) -> bool {
        matches!(
            self,
            Housing::EcTopreDeskeysStabilizer | Housing::DynacapClassicStabilizer
        )
    }

    pub fn generator(&self) -> &'static dyn CutoutGenerator {
        generator_for(*self)
    }
}

impl fmt::Display for Housing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.id())
    }
}

impl FromStr for Housing {
    type Err = CutoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Housing::ALL
            .into_iter()
            .find(|h| h.id() == wanted)
            .ok_or_else(|| CutoutError::UnknownHousing(s.to_string()))
    }
}

/// The generator registered for `housing`.
pub fn generator_for(housing: Housing) -> &'static dyn CutoutGenerator {
    match housing {
        Housing::EcTopreOem => &EC_TOPRE_OEM,
        Housing::EcTopreDeskeys => &EC_TOPRE_DESKEYS,
        Housing::DynacapClassic => &DYNACAP_CLASSIC,
        Housing::EcTopreDeskeysStabilizer => &EC_TOPRE_DESKEYS_STABILIZER,
        Housing::DynacapClassicStabilizer => &DYNACAP_CLASSIC_STABILIZER,
    }
}
