//! Serde helper that writes a field as its parsable string.
//!
//! # Example
//!
//! ```rust
//! use parsable_units::builtins::{METER, SECOND};
//! use parsable_units::{QuantityValue, UnitExpression};
//! use serde::Serialize;
//!
//! #[derive(Serialize)]
//! struct Probe {
//!     #[serde(serialize_with = "parsable_units::serde_parsable::serialize")]
//!     speed: QuantityValue,
//! }
//!
//! let speed = QuantityValue::new(3, UnitExpression::unit(METER) / UnitExpression::unit(SECOND));
//! let probe = Probe { speed };
//! // Serializes as {"speed": "3(m/s)"} (or `3u"m/s"` in literal-wrap mode).
//! # let _ = probe;
//! ```

use serde::Serializer;

use crate::format::ParsableString;

/// Serializes `value` as the string [`ParsableString::parsable_string`] returns.
pub fn serialize<T, S>(value: &T, serializer: S) -> Result<S::Ok, S::Error>
where
    T: ParsableString,
    S: Serializer,
{
    serializer.serialize_str(&value.parsable_string())
}
