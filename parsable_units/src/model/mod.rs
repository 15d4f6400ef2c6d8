//! In-memory unit and quantity model.
//!
//! The model is deliberately small: it records what a unit expression *is* (which
//! atoms, which prefixes, which exponents) and nothing about dimensional analysis or
//! conversion.

mod expression;
mod prefix;
mod unit;
mod value;

pub use expression::UnitExpression;
pub use prefix::Prefix;
pub use unit::{exponent, Exponent, LogUnitId, UnitAtom, UnitId};
pub use value::{
    CustomNumber, Formattable, LogKind, LogQuantity, NumericValue, QuantityRange, QuantityValue,
};
