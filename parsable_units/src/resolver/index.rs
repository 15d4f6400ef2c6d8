//! Reverse index from unit identity to identifier for one namespace.

use std::collections::HashMap;

use crate::model::{LogUnitId, UnitId};
use crate::namespace::{Binding, Namespace};

/// Identifiers bound to bare units and logarithmic units in a namespace.
///
/// When several identifiers name the same unit the first one in the namespace's
/// enumeration order wins.
#[derive(Debug, Default)]
pub(crate) struct NamespaceIndex {
    units: HashMap<UnitId, String>,
    logs: HashMap<LogUnitId, String>,
}

impl NamespaceIndex {
    pub(crate) fn build(namespace: &Namespace) -> Self {
        let mut index = Self::default();
        for (identifier, binding) in namespace.iter() {
            match binding {
                Binding::Unit(expr) => {
                    if let Some(unit) = expr.as_bare_unit() {
                        index
                            .units
                            .entry(unit.clone())
                            .or_insert_with(|| identifier.to_string());
                    }
                }
                Binding::Log(unit) => {
                    index
                        .logs
                        .entry(unit.clone())
                        .or_insert_with(|| identifier.to_string());
                }
                Binding::Other => {}
            }
        }
        index
    }

    pub(crate) fn unit(&self, unit: &UnitId) -> Option<&str> {
        self.units.get(unit).map(String::as_str)
    }

    pub(crate) fn log(&self, unit: &LogUnitId) -> Option<&str> {
        self.logs.get(unit).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Prefix;

    const METER: UnitId = UnitId::from_static("Meter", "m");
    const DECIBEL: LogUnitId = LogUnitId::from_static("Decibel", "dB");

    #[test]
    fn first_binding_wins() {
        let ns = Namespace::new("test")
            .with_unit("meter", METER)
            .with_unit("metre", METER);
        let index = NamespaceIndex::build(&ns);
        assert_eq!(index.unit(&METER), Some("meter"));
    }

    #[test]
    fn prefixed_bindings_are_skipped() {
        let ns = Namespace::new("test").with_prefixed("km", Prefix::Kilo, METER);
        let index = NamespaceIndex::build(&ns);
        assert_eq!(index.unit(&METER), None);
    }

    #[test]
    fn log_bindings_are_indexed_separately() {
        let ns = Namespace::new("test").with_log("decibel", DECIBEL);
        let index = NamespaceIndex::build(&ns);
        assert_eq!(index.log(&DECIBEL), Some("decibel"));
        assert_eq!(index.unit(&METER), None);
    }
}
