//! Mapping unit identities back to parser-facing identifiers.
//!
//! For each namespace in a [`Context`], in order, the resolver first tries the unit's
//! own abbreviation: if the namespace binds it to exactly that unit, it is returned
//! immediately. Otherwise it consults a reverse index of the namespace, built on first
//! use and cached for the life of the resolver. Logarithmic units skip the
//! abbreviation check and go straight to the index.
//!
//! When no namespace knows the unit, the abbreviation is returned anyway and a warning
//! is logged once per distinct (abbreviation, namespace list) pair. Resolution never
//! fails.

mod index;

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use log::{debug, warn};
use once_cell::sync::Lazy;
use parking_lot::{Mutex, RwLock};

use crate::error::UnresolvedSymbol;
use crate::model::{LogUnitId, UnitId};
use crate::namespace::{Binding, Context, Namespace, NamespaceId};

use index::NamespaceIndex;

/// Outcome of resolving one unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Resolution {
    pub identifier: String,
    /// `false` when no namespace binds the identifier to the unit and the
    /// abbreviation was used as a fallback.
    pub verified: bool,
}

impl Resolution {
    fn found(identifier: &str) -> Self {
        Self {
            identifier: identifier.to_string(),
            verified: true,
        }
    }
}

/// Resolves units against namespaces, caching one reverse index per namespace.
///
/// The resolver is `Sync`; concurrent callers share the cache. Two threads missing on
/// the same namespace at once may both build its index, and whichever lands first is
/// kept.
#[derive(Debug, Default)]
pub struct SymbolResolver {
    indices: RwLock<HashMap<NamespaceId, Arc<NamespaceIndex>>>,
    warned: Mutex<HashSet<(String, Vec<NamespaceId>)>>,
}

static GLOBAL_RESOLVER: Lazy<SymbolResolver> = Lazy::new(SymbolResolver::new);

impl SymbolResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide resolver used by the convenience API.
    pub fn global() -> &'static Self {
        &GLOBAL_RESOLVER
    }

    pub fn resolve_unit(&self, unit: &UnitId, context: &Context) -> Resolution {
        let candidate = unit.abbreviation();
        for scope in context.iter() {
            if let Some(Binding::Unit(expr)) = scope.get(candidate) {
                if expr.as_bare_unit() == Some(unit) {
                    return Resolution::found(candidate);
                }
            }
            if let Some(identifier) = self.index(scope).unit(unit) {
                return Resolution::found(identifier);
            }
        }
        self.unresolved(candidate, context)
    }

    pub fn resolve_log(&self, unit: &LogUnitId, context: &Context) -> Resolution {
        for scope in context.iter() {
            if let Some(identifier) = self.index(scope).log(unit) {
                return Resolution::found(identifier);
            }
        }
        self.unresolved(unit.abbreviation(), context)
    }

    /// Number of namespaces with a cached index.
    pub fn indexed_namespaces(&self) -> usize {
        self.indices.read().len()
    }

    fn index(&self, scope: &Namespace) -> Arc<NamespaceIndex> {
        if let Some(index) = self.indices.read().get(&scope.id()) {
            return Arc::clone(index);
        }

        let built = Arc::new(NamespaceIndex::build(scope));
        debug!(
            "indexed namespace `{}` ({} bindings)",
            scope.name(),
            scope.len()
        );
        Arc::clone(self.indices.write().entry(scope.id()).or_insert(built))
    }

    fn unresolved(&self, abbreviation: &str, context: &Context) -> Resolution {
        let key = (
            abbreviation.to_string(),
            context.iter().map(Namespace::id).collect::<Vec<_>>(),
        );
        if self.warned.lock().insert(key) {
            let diagnostic = UnresolvedSymbol {
                abbreviation: abbreviation.to_string(),
                namespaces: context.names(),
            };
            warn!("{}", diagnostic);
        }

        Resolution {
            identifier: abbreviation.to_string(),
            verified: false,
        }
    }
}
