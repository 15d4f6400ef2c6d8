//! Values that can be rendered: quantities, logarithmic quantities and ranges.

use core::fmt::{Debug, Display};
use std::sync::Arc;

use num_complex::{Complex, Complex64};
use num_rational::Rational64;

use super::expression::UnitExpression;
use super::unit::LogUnitId;

/// Extension point for numeric kinds outside the built-in set.
///
/// The value is printed through its [`Display`] impl.
pub trait CustomNumber: Display + Debug + Send + Sync {
    /// Whether the printed form has to be parenthesised before a unit is attached.
    ///
    /// The default brackets anything whose printed form contains a character that is
    /// not an ASCII decimal digit.
    fn needs_bracket(&self) -> bool {
        !self.to_string().chars().all(|c| c.is_ascii_digit())
    }

    /// Whether the value equals one, used to elide the step of a range.
    fn is_one(&self) -> bool {
        self.to_string() == "1"
    }
}

/// The numeric part of a quantity.
#[derive(Clone, Debug)]
pub enum NumericValue {
    Integer(i64),
    Float(f64),
    Rational(Rational64),
    Complex(Complex64),
    ComplexInt(Complex<i64>),
    Logarithmic(Box<LogQuantity>),
    Custom(Arc<dyn CustomNumber>),
}

impl NumericValue {
    pub fn custom(value: impl CustomNumber + 'static) -> Self {
        NumericValue::Custom(Arc::new(value))
    }

    /// Whether this value is exactly one.
    pub fn is_one(&self) -> bool {
        match self {
            NumericValue::Integer(v) => *v == 1,
            NumericValue::Float(v) => *v == 1.0,
            NumericValue::Rational(v) => *v == Rational64::from_integer(1),
            NumericValue::Complex(v) => v.re == 1.0 && v.im == 0.0,
            NumericValue::ComplexInt(v) => v.re == 1 && v.im == 0,
            NumericValue::Logarithmic(_) => false,
            NumericValue::Custom(v) => v.is_one(),
        }
    }
}

impl From<i64> for NumericValue {
    fn from(value: i64) -> Self {
        NumericValue::Integer(value)
    }
}

impl From<i32> for NumericValue {
    fn from(value: i32) -> Self {
        NumericValue::Integer(i64::from(value))
    }
}

impl From<f64> for NumericValue {
    fn from(value: f64) -> Self {
        NumericValue::Float(value)
    }
}

impl From<Rational64> for NumericValue {
    fn from(value: Rational64) -> Self {
        NumericValue::Rational(value)
    }
}

impl From<Complex64> for NumericValue {
    fn from(value: Complex64) -> Self {
        NumericValue::Complex(value)
    }
}

impl From<Complex<i64>> for NumericValue {
    fn from(value: Complex<i64>) -> Self {
        NumericValue::ComplexInt(value)
    }
}

impl From<LogQuantity> for NumericValue {
    fn from(value: LogQuantity) -> Self {
        NumericValue::Logarithmic(Box::new(value))
    }
}

/// A number tagged with a unit expression.
#[derive(Clone, Debug)]
pub struct QuantityValue {
    value: NumericValue,
    unit: UnitExpression,
}

impl QuantityValue {
    pub fn new(value: impl Into<NumericValue>, unit: UnitExpression) -> Self {
        Self {
            value: value.into(),
            unit,
        }
    }

    pub fn value(&self) -> &NumericValue {
        &self.value
    }

    pub fn unit(&self) -> &UnitExpression {
        &self.unit
    }
}

/// Whether a logarithmic quantity is a ratio or a level against a reference.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogKind {
    /// A ratio of two quantities, e.g. `3 dB`.
    Gain,
    /// A value relative to a fixed reference, e.g. `20 dBm`.
    Level,
}

/// A number expressed in a logarithmic unit.
#[derive(Clone, Debug)]
pub struct LogQuantity {
    kind: LogKind,
    value: NumericValue,
    unit: LogUnitId,
}

impl LogQuantity {
    pub fn gain(value: impl Into<NumericValue>, unit: LogUnitId) -> Self {
        Self {
            kind: LogKind::Gain,
            value: value.into(),
            unit,
        }
    }

    pub fn level(value: impl Into<NumericValue>, unit: LogUnitId) -> Self {
        Self {
            kind: LogKind::Level,
            value: value.into(),
            unit,
        }
    }

    pub fn kind(&self) -> LogKind {
        self.kind
    }

    pub fn value(&self) -> &NumericValue {
        &self.value
    }

    pub fn unit(&self) -> &LogUnitId {
        &self.unit
    }
}

/// An arithmetic range of quantities sharing one unit.
///
/// The bounds and step are stored with the unit stripped.
#[derive(Clone, Debug)]
pub struct QuantityRange {
    start: NumericValue,
    step: NumericValue,
    stop: NumericValue,
    unit: UnitExpression,
}

impl QuantityRange {
    pub fn new(
        start: impl Into<NumericValue>,
        step: impl Into<NumericValue>,
        stop: impl Into<NumericValue>,
        unit: UnitExpression,
    ) -> Self {
        Self {
            start: start.into(),
            step: step.into(),
            stop: stop.into(),
            unit,
        }
    }

    /// A range stepping by exactly one unit.
    pub fn unit_step(
        start: impl Into<NumericValue>,
        stop: impl Into<NumericValue>,
        unit: UnitExpression,
    ) -> Self {
        Self::new(start, 1_i64, stop, unit)
    }

    pub fn start(&self) -> &NumericValue {
        &self.start
    }

    pub fn step(&self) -> &NumericValue {
        &self.step
    }

    pub fn stop(&self) -> &NumericValue {
        &self.stop
    }

    pub fn unit(&self) -> &UnitExpression {
        &self.unit
    }

    pub fn has_unit_step(&self) -> bool {
        self.step.is_one()
    }
}

/// Everything the formatting entry points accept.
#[derive(Clone, Debug)]
pub enum Formattable {
    Quantity(QuantityValue),
    Log(LogQuantity),
    Range(QuantityRange),
    Units(UnitExpression),
    /// The dimensionless unit marker.
    NoUnits,
}

impl From<QuantityValue> for Formattable {
    fn from(value: QuantityValue) -> Self {
        Formattable::Quantity(value)
    }
}

impl From<LogQuantity> for Formattable {
    fn from(value: LogQuantity) -> Self {
        Formattable::Log(value)
    }
}

impl From<QuantityRange> for Formattable {
    fn from(value: QuantityRange) -> Self {
        Formattable::Range(value)
    }
}

impl From<UnitExpression> for Formattable {
    fn from(value: UnitExpression) -> Self {
        Formattable::Units(value)
    }
}
