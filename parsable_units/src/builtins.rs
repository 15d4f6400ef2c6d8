//! Built-in units and the namespace that binds them.
//!
//! The built-in namespace binds every unit below under the identifier a parser of the
//! unit grammar recognises. Most units are bound under their abbreviation. The ones
//! whose abbreviation is not a valid identifier (`%`) are bound under a spelled-out
//! name only, so resolving them exercises the namespace scan. Common prefixed units
//! (`km`, `kg`, `ms`, ...) are bound as well; they name prefixed atoms and therefore
//! never stand in for the bare unit.

use std::sync::Arc;

use once_cell::sync::Lazy;

use crate::model::{LogUnitId, Prefix, UnitId};
use crate::namespace::{Binding, Namespace};

// ─────────────────────────────────────────────────────────────────────────────
// SI base units
// ─────────────────────────────────────────────────────────────────────────────

pub const METER: UnitId = UnitId::from_static("Meter", "m");
pub const SECOND: UnitId = UnitId::from_static("Second", "s");
pub const GRAM: UnitId = UnitId::from_static("Gram", "g");
pub const AMPERE: UnitId = UnitId::from_static("Ampere", "A");
pub const KELVIN: UnitId = UnitId::from_static("Kelvin", "K");
pub const MOLE: UnitId = UnitId::from_static("Mole", "mol");
pub const CANDELA: UnitId = UnitId::from_static("Candela", "cd");

// ─────────────────────────────────────────────────────────────────────────────
// Derived and common units
// ─────────────────────────────────────────────────────────────────────────────

pub const HERTZ: UnitId = UnitId::from_static("Hertz", "Hz");
pub const NEWTON: UnitId = UnitId::from_static("Newton", "N");
pub const PASCAL: UnitId = UnitId::from_static("Pascal", "Pa");
pub const JOULE: UnitId = UnitId::from_static("Joule", "J");
pub const WATT: UnitId = UnitId::from_static("Watt", "W");
pub const COULOMB: UnitId = UnitId::from_static("Coulomb", "C");
pub const VOLT: UnitId = UnitId::from_static("Volt", "V");
pub const OHM: UnitId = UnitId::from_static("Ohm", "Ω");
pub const RADIAN: UnitId = UnitId::from_static("Radian", "rad");
pub const LITER: UnitId = UnitId::from_static("Liter", "L");
pub const MINUTE: UnitId = UnitId::from_static("Minute", "minute");
pub const HOUR: UnitId = UnitId::from_static("Hour", "hr");
pub const DEGREE: UnitId = UnitId::from_static("Degree", "°");
pub const ANGSTROM: UnitId = UnitId::from_static("Angstrom", "Å");
pub const PERCENT: UnitId = UnitId::from_static("Percent", "%");

// ─────────────────────────────────────────────────────────────────────────────
// Logarithmic units
// ─────────────────────────────────────────────────────────────────────────────

pub const DECIBEL: LogUnitId = LogUnitId::from_static("Decibel", "dB");
pub const BEL: LogUnitId = LogUnitId::from_static("Bel", "B");
pub const NEPER: LogUnitId = LogUnitId::from_static("Neper", "Np");
pub const DECIBEL_MILLIWATT: LogUnitId = LogUnitId::from_static("DecibelMilliwatt", "dBm");
pub const DECIBEL_VOLT: LogUnitId = LogUnitId::from_static("DecibelVolt", "dBV");
pub const DECIBEL_WATT: LogUnitId = LogUnitId::from_static("DecibelWatt", "dBW");

/// Units bound under their own abbreviation.
const ABBREVIATED: [UnitId; 21] = [
    METER, SECOND, GRAM, AMPERE, KELVIN, MOLE, CANDELA, HERTZ, NEWTON, PASCAL, JOULE, WATT,
    COULOMB, VOLT, OHM, RADIAN, LITER, MINUTE, HOUR, DEGREE, ANGSTROM,
];

const LOGARITHMIC: [LogUnitId; 6] = [
    DECIBEL,
    BEL,
    NEPER,
    DECIBEL_MILLIWATT,
    DECIBEL_VOLT,
    DECIBEL_WATT,
];

static BUILTIN_NAMESPACE: Lazy<Arc<Namespace>> = Lazy::new(|| build().into_shared());

/// The shared built-in namespace. Every call returns the same namespace identity.
pub fn namespace() -> Arc<Namespace> {
    Arc::clone(&BUILTIN_NAMESPACE)
}

fn build() -> Namespace {
    let mut ns = Namespace::new("builtin");

    for unit in ABBREVIATED {
        let identifier = unit.abbreviation().to_string();
        ns = ns.with_unit(identifier, unit);
    }

    ns = ns
        .with_prefixed("km", Prefix::Kilo, METER)
        .with_prefixed("cm", Prefix::Centi, METER)
        .with_prefixed("mm", Prefix::Milli, METER)
        .with_prefixed("kg", Prefix::Kilo, GRAM)
        .with_prefixed("ms", Prefix::Milli, SECOND)
        .with_prefixed("μs", Prefix::Micro, SECOND)
        .with_prefixed("kHz", Prefix::Kilo, HERTZ)
        .with_prefixed("kW", Prefix::Kilo, WATT)
        .with_unit("percent", PERCENT)
        .with_unit("deg", DEGREE)
        .with_unit("angstrom", ANGSTROM)
        .with_binding("c0", Binding::Other)
        .with_binding("ħ", Binding::Other);

    for unit in LOGARITHMIC {
        let identifier = unit.abbreviation().to_string();
        ns = ns.with_log(identifier, unit);
    }

    ns
}
