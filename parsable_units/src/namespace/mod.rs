//! Lookup scopes for parser-facing identifiers.
//!
//! A [`Namespace`] maps identifiers to the values a parser would bind them to. The
//! resolver searches an ordered [`Context`] of namespaces for the identifier that names
//! a given unit.

mod context;

pub use context::{add_context, default_context, remove_context, Context};

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use indexmap::IndexMap;

use crate::model::{Exponent, LogUnitId, Prefix, UnitAtom, UnitExpression, UnitId};

static NEXT_NAMESPACE_ID: AtomicU64 = AtomicU64::new(1);

/// Process-unique identity of a namespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NamespaceId(u64);

/// What an identifier is bound to.
#[derive(Clone, Debug, PartialEq)]
pub enum Binding {
    Unit(UnitExpression),
    Log(LogUnitId),
    /// Anything that is not a unit (constants, functions, ...).
    Other,
}

/// An ordered set of identifier bindings.
///
/// Bindings enumerate in insertion order. A namespace is mutable while it is being
/// built and frozen once shared through [`Namespace::into_shared`]; identity is
/// carried by its [`NamespaceId`], never by its contents.
#[derive(Debug)]
pub struct Namespace {
    id: NamespaceId,
    name: String,
    bindings: IndexMap<String, Binding>,
}

impl Namespace {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: NamespaceId(NEXT_NAMESPACE_ID.fetch_add(1, Ordering::Relaxed)),
            name: name.into(),
            bindings: IndexMap::new(),
        }
    }

    pub fn id(&self) -> NamespaceId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Binds `identifier`, returning the previous binding.
    ///
    /// Rebinding keeps the identifier's original enumeration position.
    pub fn bind(&mut self, identifier: impl Into<String>, binding: Binding) -> Option<Binding> {
        self.bindings.insert(identifier.into(), binding)
    }

    pub fn with_binding(mut self, identifier: impl Into<String>, binding: Binding) -> Self {
        self.bind(identifier, binding);
        self
    }

    /// Binds `identifier` to the bare unit.
    pub fn with_unit(self, identifier: impl Into<String>, unit: UnitId) -> Self {
        self.with_binding(identifier, Binding::Unit(UnitExpression::unit(unit)))
    }

    /// Binds `identifier` to a prefixed unit, e.g. `km`.
    pub fn with_prefixed(self, identifier: impl Into<String>, prefix: Prefix, unit: UnitId) -> Self {
        let atom = UnitAtom::new(prefix, unit, Exponent::from_integer(1));
        self.with_binding(identifier, Binding::Unit(UnitExpression::dimensionless().with(atom)))
    }

    pub fn with_log(self, identifier: impl Into<String>, unit: LogUnitId) -> Self {
        self.with_binding(identifier, Binding::Log(unit))
    }

    pub fn get(&self, identifier: &str) -> Option<&Binding> {
        self.bindings.get(identifier)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Binding)> {
        self.bindings.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn into_shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
