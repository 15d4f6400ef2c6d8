//! Unit identity tokens, exponents and unit atoms.

use num_rational::{Rational32, Rational64};

use super::prefix::Prefix;
use crate::error::ModelError;
use crate::macros::identity_token;

/// Rational exponent of a unit atom, always stored in lowest terms with a
/// positive denominator.
pub type Exponent = Rational32;

/// Builds the exponent `numer/denom`.
///
/// Fails when `denom` is zero or when the reduced fraction with a positive
/// denominator does not fit in `i32` (`1/i32::MIN`, `i32::MIN/-1`).
///
/// ```rust
/// use parsable_units::exponent;
///
/// let half = exponent(2, 4).unwrap();
/// assert_eq!((*half.numer(), *half.denom()), (1, 2));
/// assert!(exponent(1, 0).is_err());
/// assert!(exponent(1, i32::MIN).is_err());
/// ```
pub fn exponent(numer: i32, denom: i32) -> Result<Exponent, ModelError> {
    let malformed = ModelError::MalformedExponent { numer, denom };
    if denom == 0 {
        return Err(malformed);
    }

    let reduced = Rational64::new(i64::from(numer), i64::from(denom));
    match (
        i32::try_from(*reduced.numer()),
        i32::try_from(*reduced.denom()),
    ) {
        (Ok(n), Ok(d)) => Ok(Exponent::new_raw(n, d)),
        _ => Err(malformed),
    }
}

identity_token! {
    /// Identity of a primitive (unprefixed) unit such as the metre.
    pub struct UnitId;
}

identity_token! {
    /// Identity of a logarithmic unit such as the decibel.
    ///
    /// Logarithmic units are atomic: they never decompose into unit atoms and never
    /// carry an exponent.
    pub struct LogUnitId;
}

/// One primitive unit, possibly prefixed, raised to a rational power.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct UnitAtom {
    prefix: Prefix,
    unit: UnitId,
    exponent: Exponent,
}

impl UnitAtom {
    pub fn new(prefix: Prefix, unit: UnitId, exponent: Exponent) -> Self {
        Self {
            prefix,
            unit,
            exponent,
        }
    }

    /// The unprefixed unit to the first power.
    pub fn base(unit: UnitId) -> Self {
        Self::new(Prefix::None, unit, Exponent::from_integer(1))
    }

    /// The unprefixed unit to an integer power.
    pub fn powi(unit: UnitId, power: i32) -> Self {
        Self::new(Prefix::None, unit, Exponent::from_integer(power))
    }

    pub fn prefix(&self) -> Prefix {
        self.prefix
    }

    pub fn unit(&self) -> &UnitId {
        &self.unit
    }

    pub fn exponent(&self) -> Exponent {
        self.exponent
    }

    /// Same unit and prefix with a different exponent.
    pub fn with_exponent(&self, exponent: Exponent) -> Self {
        Self::new(self.prefix, self.unit.clone(), exponent)
    }

    /// Whether this atom is the plain unit: no prefix, exponent one.
    pub fn is_bare(&self) -> bool {
        self.prefix == Prefix::None && self.exponent == Exponent::from_integer(1)
    }

    pub(crate) fn same_base(&self, other: &Self) -> bool {
        self.prefix == other.prefix && self.unit == other.unit
    }
}
