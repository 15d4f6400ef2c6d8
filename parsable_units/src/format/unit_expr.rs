//! Rendering of composite unit expressions.
//!
//! Atoms with positive exponents come first, then atoms with negative exponents; within
//! each group the expression's own order is kept. When there is at least one positive
//! atom and every exponent is an integer, negative atoms are written after `/` with
//! their exponent negated (`m/s^2`). Otherwise every separator is `*` and negative
//! exponents carry their sign (`m^(1/2)*s^-2`).

use super::wrap_literal;
use crate::config::FormatOptions;
use crate::model::{Exponent, UnitAtom, UnitExpression};
use crate::namespace::Context;
use crate::resolver::SymbolResolver;

pub struct UnitExpressionFormatter<'a> {
    resolver: &'a SymbolResolver,
    context: &'a Context,
    options: FormatOptions,
}

impl<'a> UnitExpressionFormatter<'a> {
    pub fn new(resolver: &'a SymbolResolver, context: &'a Context, options: FormatOptions) -> Self {
        Self {
            resolver,
            context,
            options,
        }
    }

    /// Renders `expr`, wrapped as a unit literal when literal-wrap mode is on.
    ///
    /// An empty expression renders as the empty string and is never wrapped; callers
    /// route dimensionless units to the `NoUnits` marker before getting here.
    pub fn format(&self, expr: &UnitExpression) -> String {
        let raw = self.format_bare(expr);
        if self.options.literal_wrap && !raw.is_empty() {
            wrap_literal(&raw)
        } else {
            raw
        }
    }

    /// Renders `expr` without literal wrapping.
    pub fn format_bare(&self, expr: &UnitExpression) -> String {
        let atoms = expr.atoms();
        let use_division = uses_division(atoms);

        let mut out = String::new();
        for (position, atom) in ordered(atoms).into_iter().enumerate() {
            let divided = use_division && is_negative(atom.exponent());
            if position > 0 {
                out.push(if divided { '/' } else { '*' });
            }
            let suffix = if divided {
                divisor_suffix(atom.exponent())
            } else {
                exponent_suffix(atom.exponent())
            };

            let resolved = self.resolver.resolve_unit(atom.unit(), self.context);
            out.push_str(atom.prefix().symbol());
            out.push_str(&resolved.identifier);
            out.push_str(&suffix);
        }
        out
    }
}

fn is_negative(exponent: Exponent) -> bool {
    *exponent.numer() < 0
}

/// Stable partition: positive exponents first, negative exponents after.
pub(crate) fn ordered(atoms: &[UnitAtom]) -> Vec<&UnitAtom> {
    let (positive, negative): (Vec<&UnitAtom>, Vec<&UnitAtom>) =
        atoms.iter().partition(|a| !is_negative(a.exponent()));
    positive.into_iter().chain(negative).collect()
}

pub(crate) fn uses_division(atoms: &[UnitAtom]) -> bool {
    atoms.iter().any(|a| !is_negative(a.exponent()))
        && atoms.iter().all(|a| a.exponent().is_integer())
}

/// Suffix of an atom written after `/`: the magnitude of its integer exponent.
///
/// Taken unsigned so that `i32::MIN` has a magnitude.
pub(crate) fn divisor_suffix(exponent: Exponent) -> String {
    match exponent.numer().unsigned_abs() {
        1 => String::new(),
        magnitude => format!("^{}", magnitude),
    }
}

/// Exponent text appended to an atom.
///
/// A fraction whose reduced denominator is a power of two has a finite binary
/// expansion, so `n/d` evaluates to it exactly in floating point and is written with
/// plain division. Any other fraction would be rounded by that division and is written
/// with the exact-rational operator `//` instead.
pub(crate) fn exponent_suffix(exponent: Exponent) -> String {
    let (numer, denom) = (*exponent.numer(), *exponent.denom());
    if denom == 1 {
        if numer == 1 {
            String::new()
        } else {
            format!("^{}", numer)
        }
    } else if denom.unsigned_abs().is_power_of_two() {
        format!("^({}/{})", numer, denom)
    } else {
        format!("^({}//{})", numer, denom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::{self, METER, SECOND};
    use crate::model::Prefix;

    fn render(expr: &UnitExpression) -> String {
        let resolver = SymbolResolver::new();
        let context = Context::from_scopes([builtins::namespace()]);
        UnitExpressionFormatter::new(&resolver, &context, FormatOptions::default()).format(expr)
    }

    fn atom(unit: crate::model::UnitId, numer: i32, denom: i32) -> UnitAtom {
        UnitAtom::new(Prefix::None, unit, Exponent::new(numer, denom))
    }

    #[test]
    fn exponent_suffixes() {
        assert_eq!(exponent_suffix(Exponent::from_integer(1)), "");
        assert_eq!(exponent_suffix(Exponent::from_integer(3)), "^3");
        assert_eq!(exponent_suffix(Exponent::from_integer(-1)), "^-1");
        assert_eq!(exponent_suffix(Exponent::new(1, 2)), "^(1/2)");
        assert_eq!(exponent_suffix(Exponent::new(-3, 4)), "^(-3/4)");
        assert_eq!(exponent_suffix(Exponent::new(1, 3)), "^(1//3)");
        assert_eq!(exponent_suffix(Exponent::new(-2, 5)), "^(-2//5)");
    }

    #[test]
    fn divisor_suffixes() {
        assert_eq!(divisor_suffix(Exponent::from_integer(-1)), "");
        assert_eq!(divisor_suffix(Exponent::from_integer(-3)), "^3");
        assert_eq!(divisor_suffix(Exponent::from_integer(i32::MIN)), "^2147483648");
    }

    #[test]
    fn most_negative_exponent_is_divided() {
        let expr = UnitExpression::from_atoms([
            UnitAtom::base(METER),
            UnitAtom::new(Prefix::None, SECOND, Exponent::from_integer(i32::MIN)),
        ]);
        assert_eq!(render(&expr), "m/s^2147483648");

        let expr = UnitExpression::from_atoms([
            UnitAtom::new(Prefix::None, SECOND, Exponent::from_integer(i32::MIN)),
        ]);
        assert_eq!(render(&expr), "s^-2147483648");
    }

    #[test]
    fn division_needs_a_positive_atom_and_integer_exponents() {
        assert!(uses_division(&[atom(METER, 1, 1), atom(SECOND, -2, 1)]));
        assert!(!uses_division(&[atom(METER, -1, 1), atom(SECOND, -1, 1)]));
        assert!(!uses_division(&[atom(METER, 1, 2), atom(SECOND, -2, 1)]));
    }

    #[test]
    fn negative_atoms_move_after_positive_ones() {
        let atoms = [
            atom(SECOND, -1, 1),
            atom(METER, 1, 1),
            atom(builtins::GRAM, -2, 1),
            atom(builtins::KELVIN, 2, 1),
        ];
        let names: Vec<&str> = ordered(&atoms)
            .into_iter()
            .map(|a| a.unit().abbreviation())
            .collect();
        assert_eq!(names, vec!["m", "K", "s", "g"]);
    }

    #[test]
    fn square_meter() {
        let expr = UnitExpression::from_atoms([atom(METER, 2, 1)]);
        assert_eq!(render(&expr), "m^2");
    }

    #[test]
    fn product_of_positive_powers() {
        let expr = UnitExpression::from_atoms([atom(METER, 1, 1), atom(SECOND, 2, 1)]);
        assert_eq!(render(&expr), "m*s^2");
    }

    #[test]
    fn all_negative_keeps_signs() {
        let expr = UnitExpression::from_atoms([atom(METER, -1, 1), atom(SECOND, -1, 1)]);
        assert_eq!(render(&expr), "m^-1*s^-1");
    }

    #[test]
    fn rational_exponent_disables_division() {
        let expr = UnitExpression::from_atoms([atom(METER, 1, 2), atom(SECOND, -2, 1)]);
        assert_eq!(render(&expr), "m^(1/2)*s^-2");
    }

    #[test]
    fn mixed_integer_exponents_use_division() {
        let expr = UnitExpression::from_atoms([atom(METER, 1, 1), atom(SECOND, -2, 1)]);
        assert_eq!(render(&expr), "m/s^2");

        let expr = UnitExpression::from_atoms([atom(SECOND, -1, 1), atom(METER, 1, 1)]);
        assert_eq!(render(&expr), "m/s");
    }

    #[test]
    fn prefixes_precede_identifier() {
        let expr = UnitExpression::from_atoms([
            UnitAtom::new(Prefix::Kilo, METER, Exponent::from_integer(1)),
            UnitAtom::new(Prefix::Micro, SECOND, Exponent::from_integer(-1)),
        ]);
        assert_eq!(render(&expr), "km/μs");
    }

    #[test]
    fn scanned_identifier_is_used() {
        let expr = UnitExpression::unit(builtins::PERCENT);
        assert_eq!(render(&expr), "percent");
    }

    #[test]
    fn literal_wrap() {
        let resolver = SymbolResolver::new();
        let context = Context::from_scopes([builtins::namespace()]);
        let formatter = UnitExpressionFormatter::new(&resolver, &context, FormatOptions::literal());
        let expr = UnitExpression::from_atoms([atom(METER, 1, 1), atom(SECOND, -1, 1)]);
        assert_eq!(formatter.format(&expr), "u\"m/s\"");
        assert_eq!(formatter.format_bare(&expr), "m/s");
        assert_eq!(formatter.format(&UnitExpression::dimensionless()), "");
    }

    #[test]
    fn empty_expression_is_empty_string() {
        assert_eq!(render(&UnitExpression::dimensionless()), "");
    }
}
