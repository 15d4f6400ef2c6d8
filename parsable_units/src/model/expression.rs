//! Composite unit expressions.

use core::ops::{Div, Mul};

use super::unit::{Exponent, UnitAtom, UnitId};

/// Product of unit atoms, e.g. `m·s⁻²`.
///
/// Atoms keep the order in which they were first added. Adding an atom whose unit and
/// prefix are already present folds the exponents together, and an atom whose exponent
/// reaches zero is dropped, so a stored exponent is never zero. The empty expression is
/// the dimensionless unit.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UnitExpression {
    atoms: Vec<UnitAtom>,
}

impl UnitExpression {
    /// The dimensionless unit.
    pub const fn dimensionless() -> Self {
        Self { atoms: Vec::new() }
    }

    /// A single unprefixed unit to the first power.
    pub fn unit(unit: UnitId) -> Self {
        Self::dimensionless().with(UnitAtom::base(unit))
    }

    pub fn from_atoms<I: IntoIterator<Item = UnitAtom>>(atoms: I) -> Self {
        let mut expr = Self::dimensionless();
        for atom in atoms {
            expr.push(atom);
        }
        expr
    }

    /// Builder form of [`UnitExpression::push`].
    pub fn with(mut self, atom: UnitAtom) -> Self {
        self.push(atom);
        self
    }

    pub fn push(&mut self, atom: UnitAtom) {
        let zero = Exponent::from_integer(0);
        match self.atoms.iter().position(|a| a.same_base(&atom)) {
            Some(index) => {
                let folded = self.atoms[index].exponent() + atom.exponent();
                if folded == zero {
                    self.atoms.remove(index);
                } else {
                    self.atoms[index] = atom.with_exponent(folded);
                }
            }
            None if atom.exponent() != zero => self.atoms.push(atom),
            None => {}
        }
    }

    pub fn atoms(&self) -> &[UnitAtom] {
        &self.atoms
    }

    pub fn len(&self) -> usize {
        self.atoms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.atoms.is_empty()
    }

    pub fn is_dimensionless(&self) -> bool {
        self.is_empty()
    }

    /// The unit this expression stands for when it is exactly one bare atom.
    pub fn as_bare_unit(&self) -> Option<&UnitId> {
        match self.atoms.as_slice() {
            [atom] if atom.is_bare() => Some(atom.unit()),
            _ => None,
        }
    }

    /// Raises every atom to `power`.
    pub fn pow(&self, power: Exponent) -> Self {
        Self::from_atoms(
            self.atoms
                .iter()
                .map(|a| a.with_exponent(a.exponent() * power)),
        )
    }

    pub fn inv(&self) -> Self {
        self.pow(Exponent::from_integer(-1))
    }
}

impl FromIterator<UnitAtom> for UnitExpression {
    fn from_iter<I: IntoIterator<Item = UnitAtom>>(iter: I) -> Self {
        Self::from_atoms(iter)
    }
}

impl Mul for UnitExpression {
    type Output = UnitExpression;

    fn mul(mut self, rhs: UnitExpression) -> UnitExpression {
        for atom in rhs.atoms {
            self.push(atom);
        }
        self
    }
}

impl Div for UnitExpression {
    type Output = UnitExpression;

    fn div(self, rhs: UnitExpression) -> UnitExpression {
        self * rhs.inv()
    }
}
