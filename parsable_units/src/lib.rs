//! Round-trip text for physical units and quantities.
//!
//! `parsable-units` turns an in-memory unit expression, quantity, logarithmic quantity
//! or quantity range into a string that a unit-aware parser reads back into the same
//! value. Unit identifiers are looked up in an ordered context of namespaces so the
//! text uses names the parser will actually find.
//!
//! # Quick start
//!
//! ```rust
//! use num_complex::Complex;
//! use parsable_units::builtins::{METER, SECOND};
//! use parsable_units::{FormatOptions, ParsableString, QuantityValue, UnitExpression};
//!
//! let velocity = UnitExpression::unit(METER) / UnitExpression::unit(SECOND);
//! let context = parsable_units::default_context();
//!
//! let q = QuantityValue::new(Complex::new(1_i64, 2), velocity.clone());
//! assert_eq!(q.parsable_string_with(&context, FormatOptions::default()), "(1 + 2i)*(m/s)");
//! assert_eq!(q.parsable_string_with(&context, FormatOptions::literal()), "(1 + 2i)u\"m/s\"");
//!
//! let q = QuantityValue::new(2, velocity);
//! assert_eq!(q.parsable_string_with(&context, FormatOptions::default()), "2(m/s)");
//! ```
//!
//! # Literal-wrap mode
//!
//! With `PARSABLE_UNITS_LITERAL=true` in the environment, unit text is written as a
//! unit literal (`u"m/s"`) instead of a bare expression. The variable is read on every
//! call that does not take explicit [`FormatOptions`]. A `parsable_units.toml` file can
//! pin the setting; see [`config`].
//!
//! # Logging
//!
//! Diagnostics go through the [`log`] facade. A unit symbol that no namespace resolves
//! is logged at `warn` once per distinct symbol and context.

pub mod builtins;
pub mod config;
pub mod error;
pub mod format;
mod macros;
pub mod model;
pub mod namespace;
pub mod resolver;
pub mod serde_parsable;

pub use config::{FormatConfig, FormatOptions, LITERAL_ENV_VAR};
pub use error::{ConfigError, ConfigResult, ModelError, UnresolvedSymbol};
pub use format::{
    BracketPolicy, Parsable, ParsableString, QuantityFormatter, UnitExpressionFormatter, NO_UNITS,
};
pub use model::{
    exponent, CustomNumber, Exponent, Formattable, LogKind, LogQuantity, LogUnitId,
    NumericValue, Prefix, QuantityRange, QuantityValue, UnitAtom, UnitExpression, UnitId,
};
pub use namespace::{add_context, default_context, remove_context, Binding, Context, Namespace};
pub use resolver::{Resolution, SymbolResolver};
