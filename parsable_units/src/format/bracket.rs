//! When value and unit text need parentheses.

use crate::config::FormatOptions;
use crate::model::{NumericValue, UnitExpression};

/// Decides the grouping of the two halves of a quantity string.
#[derive(Debug, Clone, Copy)]
pub struct BracketPolicy {
    literal_wrap: bool,
}

impl BracketPolicy {
    pub const fn new(options: FormatOptions) -> Self {
        Self {
            literal_wrap: options.literal_wrap,
        }
    }

    /// Complex, rational and logarithmic values are always grouped; integers and
    /// floats never are. Custom kinds decide through
    /// [`CustomNumber::needs_bracket`](crate::model::CustomNumber::needs_bracket).
    pub fn needs_value_bracket(value: &NumericValue) -> bool {
        match value {
            NumericValue::Integer(_) | NumericValue::Float(_) => false,
            NumericValue::Rational(_)
            | NumericValue::Complex(_)
            | NumericValue::ComplexInt(_)
            | NumericValue::Logarithmic(_) => true,
            NumericValue::Custom(custom) => custom.needs_bracket(),
        }
    }

    /// Multi-atom units are grouped unless they are written as a literal, which
    /// delimits itself.
    pub fn needs_unit_bracket(&self, expr: &UnitExpression) -> bool {
        expr.len() > 1 && !self.literal_wrap
    }

    /// Logarithmic units are atomic, so only literal-wrap mode matters.
    pub const fn needs_log_unit_bracket(&self) -> bool {
        !self.literal_wrap
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{DECIBEL, METER, SECOND};
    use crate::model::{CustomNumber, LogQuantity};
    use num_complex::{Complex, Complex64};
    use num_rational::Rational64;

    #[derive(Debug)]
    struct Money(&'static str);

    impl core::fmt::Display for Money {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str(self.0)
        }
    }

    impl CustomNumber for Money {}

    #[derive(Debug)]
    struct Always;

    impl core::fmt::Display for Always {
        fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
            f.write_str("7")
        }
    }

    impl CustomNumber for Always {
        fn needs_bracket(&self) -> bool {
            true
        }
    }

    #[test]
    fn value_brackets_by_kind() {
        assert!(!BracketPolicy::needs_value_bracket(&NumericValue::from(-3_i64)));
        assert!(!BracketPolicy::needs_value_bracket(&NumericValue::from(-2.5e-3)));
        assert!(BracketPolicy::needs_value_bracket(&NumericValue::from(Rational64::new(1, 2))));
        assert!(BracketPolicy::needs_value_bracket(&NumericValue::from(Complex64::new(1.0, 2.0))));
        assert!(BracketPolicy::needs_value_bracket(&NumericValue::from(Complex::new(1_i64, 2))));
        assert!(BracketPolicy::needs_value_bracket(&NumericValue::from(LogQuantity::gain(3, DECIBEL))));
    }

    #[test]
    fn custom_values_use_their_capability() {
        assert!(!BracketPolicy::needs_value_bracket(&NumericValue::custom(Money("100"))));
        assert!(BracketPolicy::needs_value_bracket(&NumericValue::custom(Money("1.00"))));
        assert!(BracketPolicy::needs_value_bracket(&NumericValue::custom(Always)));
    }

    #[test]
    fn unit_bracket_needs_several_atoms() {
        let policy = BracketPolicy::new(FormatOptions::default());
        assert!(!policy.needs_unit_bracket(&UnitExpression::unit(METER)));
        assert!(policy.needs_unit_bracket(&(UnitExpression::unit(METER) / UnitExpression::unit(SECOND))));
        assert!(policy.needs_log_unit_bracket());
    }

    #[test]
    fn literal_units_never_need_brackets() {
        let policy = BracketPolicy::new(FormatOptions::literal());
        assert!(!policy.needs_unit_bracket(&(UnitExpression::unit(METER) / UnitExpression::unit(SECOND))));
        assert!(!policy.needs_log_unit_bracket());
    }
}
