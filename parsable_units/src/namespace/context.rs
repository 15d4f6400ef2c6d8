//! Ordered namespace lists and the process-wide default.

use std::sync::Arc;

use log::debug;
use once_cell::sync::Lazy;
use parking_lot::RwLock;

use super::Namespace;
use crate::builtins;

/// Ordered list of namespaces searched when resolving unit identifiers.
///
/// Earlier namespaces win. Cloning is cheap and yields an independent snapshot.
#[derive(Clone, Debug, Default)]
pub struct Context {
    scopes: Vec<Arc<Namespace>>,
}

impl Context {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_scopes<I: IntoIterator<Item = Arc<Namespace>>>(scopes: I) -> Self {
        let mut context = Self::new();
        for scope in scopes {
            context.add(scope);
        }
        context
    }

    /// Appends `scope` unless a namespace with the same identity is already present.
    pub fn add(&mut self, scope: Arc<Namespace>) {
        if !self.contains(&scope) {
            self.scopes.push(scope);
        }
    }

    /// Removes every occurrence of `scope` (by identity), keeping the order of the rest.
    ///
    /// Returns whether anything was removed.
    pub fn remove(&mut self, scope: &Namespace) -> bool {
        let before = self.scopes.len();
        self.scopes.retain(|s| s.id() != scope.id());
        self.scopes.len() != before
    }

    pub fn contains(&self, scope: &Namespace) -> bool {
        self.scopes.iter().any(|s| s.id() == scope.id())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Namespace> {
        self.scopes.iter().map(|s| s.as_ref())
    }

    pub fn len(&self) -> usize {
        self.scopes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Namespace names in search order, for diagnostics.
    pub fn names(&self) -> Vec<String> {
        self.iter().map(|s| s.name().to_string()).collect()
    }
}

static DEFAULT_CONTEXT: Lazy<RwLock<Context>> =
    Lazy::new(|| RwLock::new(Context::from_scopes([builtins::namespace()])));

/// Snapshot of the process-wide default context.
///
/// The default starts out holding only the built-in namespace.
pub fn default_context() -> Context {
    DEFAULT_CONTEXT.read().clone()
}

/// Appends namespaces to the process-wide default context.
///
/// Namespaces added earlier are searched first; a namespace already present is not
/// added twice.
pub fn add_context(scopes: &[Arc<Namespace>]) {
    let mut context = DEFAULT_CONTEXT.write();
    for scope in scopes {
        context.add(Arc::clone(scope));
    }
    debug!("default context is now [{}]", context.names().join(", "));
}

/// Removes namespaces from the process-wide default context by identity.
pub fn remove_context(scopes: &[Arc<Namespace>]) {
    let mut context = DEFAULT_CONTEXT.write();
    for scope in scopes {
        context.remove(scope);
    }
    debug!("default context is now [{}]", context.names().join(", "));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scope(name: &str) -> Arc<Namespace> {
        Namespace::new(name).into_shared()
    }

    #[test]
    fn add_appends_in_order() {
        let (a, b) = (scope("a"), scope("b"));
        let ctx = Context::from_scopes([Arc::clone(&a), Arc::clone(&b)]);
        assert_eq!(ctx.names(), vec!["a", "b"]);
    }

    #[test]
    fn add_skips_duplicates() {
        let a = scope("a");
        let mut ctx = Context::new();
        ctx.add(Arc::clone(&a));
        ctx.add(Arc::clone(&a));
        assert_eq!(ctx.len(), 1);
    }

    #[test]
    fn remove_is_by_identity() {
        let (a, b, c) = (scope("a"), scope("b"), scope("c"));
        let twin = scope("b");
        let mut ctx = Context::from_scopes([Arc::clone(&a), Arc::clone(&b), Arc::clone(&c)]);

        assert!(!ctx.remove(&twin));
        assert_eq!(ctx.len(), 3);

        assert!(ctx.remove(&b));
        assert_eq!(ctx.names(), vec!["a", "c"]);
    }

    #[test]
    fn snapshots_are_independent() {
        let mut ctx = Context::from_scopes([scope("a")]);
        let snapshot = ctx.clone();
        ctx.add(scope("b"));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(ctx.len(), 2);
    }

    #[test]
    fn default_context_starts_with_builtins() {
        let ctx = default_context();
        assert!(ctx.contains(&builtins::namespace()));
    }
}
