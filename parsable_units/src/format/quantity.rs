//! Rendering of quantities, logarithmic quantities and ranges.

use super::bracket::BracketPolicy;
use super::unit_expr::UnitExpressionFormatter;
use super::value_text::{complex_int_text, complex_text, float_text, rational_text};
use super::{wrap_literal, NO_UNITS};
use crate::config::FormatOptions;
use crate::model::{
    Formattable, LogQuantity, NumericValue, QuantityRange, QuantityValue, UnitExpression,
};
use crate::namespace::Context;
use crate::resolver::SymbolResolver;

/// Composes value text and unit text into one parsable string.
///
/// Each half is parenthesised according to [`BracketPolicy`]; a `*` goes between them
/// only when both halves are parenthesised. `(1 + 2i)m` and `2(m/s)` need no
/// operator, `(1 + 2i)*(m/s)` does.
pub struct QuantityFormatter<'a> {
    units: UnitExpressionFormatter<'a>,
    policy: BracketPolicy,
    resolver: &'a SymbolResolver,
    context: &'a Context,
    options: FormatOptions,
}

impl<'a> QuantityFormatter<'a> {
    pub fn new(resolver: &'a SymbolResolver, context: &'a Context, options: FormatOptions) -> Self {
        Self {
            units: UnitExpressionFormatter::new(resolver, context, options),
            policy: BracketPolicy::new(options),
            resolver,
            context,
            options,
        }
    }

    pub fn format(&self, item: &Formattable) -> String {
        match item {
            Formattable::Quantity(q) => self.format_quantity(q),
            Formattable::Log(q) => self.format_log(q),
            Formattable::Range(r) => self.format_range(r),
            Formattable::Units(u) => self.format_units(u),
            Formattable::NoUnits => NO_UNITS.to_string(),
        }
    }

    /// Unit text on its own; the dimensionless unit becomes the `NoUnits` marker.
    pub fn format_units(&self, expr: &UnitExpression) -> String {
        if expr.is_dimensionless() {
            NO_UNITS.to_string()
        } else {
            self.units.format(expr)
        }
    }

    /// A quantity with a dimensionless unit renders as its bare value.
    pub fn format_quantity(&self, quantity: &QuantityValue) -> String {
        let value = self.value_text(quantity.value());
        if quantity.unit().is_dimensionless() {
            return value;
        }

        join(
            value,
            BracketPolicy::needs_value_bracket(quantity.value()),
            self.units.format(quantity.unit()),
            self.policy.needs_unit_bracket(quantity.unit()),
        )
    }

    pub fn format_log(&self, quantity: &LogQuantity) -> String {
        let identifier = self
            .resolver
            .resolve_log(quantity.unit(), self.context)
            .identifier;
        let unit = if self.options.literal_wrap {
            wrap_literal(&identifier)
        } else {
            identifier
        };

        join(
            self.value_text(quantity.value()),
            BracketPolicy::needs_value_bracket(quantity.value()),
            unit,
            self.policy.needs_log_unit_bracket(),
        )
    }

    /// `(start:stop)unit` for a unit step, `(start:step:stop)unit` otherwise. The
    /// numeric part is always parenthesised; a grouped unit is joined with `*`.
    pub fn format_range(&self, range: &QuantityRange) -> String {
        let bounds = if range.has_unit_step() {
            format!(
                "({}:{})",
                self.value_text(range.start()),
                self.value_text(range.stop())
            )
        } else {
            format!(
                "({}:{}:{})",
                self.value_text(range.start()),
                self.value_text(range.step()),
                self.value_text(range.stop())
            )
        };

        if range.unit().is_dimensionless() {
            return bounds;
        }

        let unit = self.units.format(range.unit());
        if self.policy.needs_unit_bracket(range.unit()) {
            format!("{}*({})", bounds, unit)
        } else {
            format!("{}{}", bounds, unit)
        }
    }

    fn value_text(&self, value: &NumericValue) -> String {
        match value {
            NumericValue::Integer(v) => v.to_string(),
            NumericValue::Float(v) => float_text(*v),
            NumericValue::Rational(v) => rational_text(v),
            NumericValue::Complex(v) => complex_text(v),
            NumericValue::ComplexInt(v) => complex_int_text(v),
            NumericValue::Logarithmic(log) => self.format_log(log),
            NumericValue::Custom(v) => v.to_string(),
        }
    }
}

fn join(value: String, value_bracket: bool, unit: String, unit_bracket: bool) -> String {
    let operator = if value_bracket && unit_bracket { "*" } else { "" };
    let value = if value_bracket {
        format!("({})", value)
    } else {
        value
    };
    let unit = if unit_bracket {
        format!("({})", unit)
    } else {
        unit
    };
    format!("{}{}{}", value, operator, unit)
}
