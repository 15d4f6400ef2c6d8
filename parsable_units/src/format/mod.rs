//! Parsable strings for units and quantities.
//!
//! The entry point is the [`ParsableString`] trait. Its convenience methods use the
//! process-wide [`SymbolResolver`] and read literal-wrap mode from the environment
//! each time they are called; [`ParsableString::format_with`] takes both explicitly.

mod bracket;
mod quantity;
mod unit_expr;
mod value_text;

use core::fmt;

pub use bracket::BracketPolicy;
pub use quantity::QuantityFormatter;
pub use unit_expr::UnitExpressionFormatter;

use crate::config::FormatOptions;
use crate::model::{Formattable, LogQuantity, QuantityRange, QuantityValue, UnitExpression};
use crate::namespace::{default_context, Context};
use crate::resolver::SymbolResolver;

/// Text written for the dimensionless unit.
pub const NO_UNITS: &str = "NoUnits";

pub(crate) fn wrap_literal(units: &str) -> String {
    format!("u\"{}\"", units)
}

/// Types that render to a string the unit-aware parser reads back.
pub trait ParsableString {
    /// Renders against an explicit resolver, context and options.
    fn format_with(&self, formatter: &QuantityFormatter<'_>) -> String;

    /// Renders against the default context.
    fn parsable_string(&self) -> String {
        self.parsable_string_in(&default_context())
    }

    /// Renders against `context`.
    fn parsable_string_in(&self, context: &Context) -> String {
        self.parsable_string_with(context, FormatOptions::from_env())
    }

    fn parsable_string_with(&self, context: &Context, options: FormatOptions) -> String {
        let formatter = QuantityFormatter::new(SymbolResolver::global(), context, options);
        self.format_with(&formatter)
    }

    /// A [`Display`](fmt::Display) adapter that renders against the default context.
    fn parsable(&self) -> Parsable<'_, Self>
    where
        Self: Sized,
    {
        Parsable(self)
    }
}

impl ParsableString for UnitExpression {
    fn format_with(&self, formatter: &QuantityFormatter<'_>) -> String {
        formatter.format_units(self)
    }
}

impl ParsableString for QuantityValue {
    fn format_with(&self, formatter: &QuantityFormatter<'_>) -> String {
        formatter.format_quantity(self)
    }
}

impl ParsableString for LogQuantity {
    fn format_with(&self, formatter: &QuantityFormatter<'_>) -> String {
        formatter.format_log(self)
    }
}

impl ParsableString for QuantityRange {
    fn format_with(&self, formatter: &QuantityFormatter<'_>) -> String {
        formatter.format_range(self)
    }
}

impl ParsableString for Formattable {
    fn format_with(&self, formatter: &QuantityFormatter<'_>) -> String {
        formatter.format(self)
    }
}

/// Displays the wrapped value as its parsable string.
#[derive(Debug, Clone, Copy)]
pub struct Parsable<'a, T>(pub &'a T);

impl<T: ParsableString> fmt::Display for Parsable<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0.parsable_string())
    }
}
