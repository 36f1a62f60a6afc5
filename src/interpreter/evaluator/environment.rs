use rustc_hash::FxHashMap;

use crate::interpreter::value::Value;

/// Handle of one scope inside an [`Environment`] arena.
///
/// Handles are plain indexes: cheap to copy, impossible to dangle while the
/// arena is alive. Closures capture their defining scope as a `ScopeId`, so
/// the cycle a recursive function forms with its own environment is just a
/// pair of indexes and needs no reference counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScopeId(usize);

#[derive(Debug, Default)]
struct Scope {
    bindings: FxHashMap<String, Value>,
    parent:   Option<ScopeId>,
}

/// Arena of every lexical scope created during a session.
///
/// A scope maps names to values and optionally links to the enclosing
/// scope. Lookup walks the parent chain outward; declaration writes to the
/// named scope; assignment updates the scope that owns the binding. Scopes
/// are never reclaimed individually: everything drops with the arena,
/// which lives as long as the evaluation context.
#[derive(Debug)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Environment {
    /// Creates an arena holding only the global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::default()], }
    }

    /// Handle of the global scope.
    #[must_use]
    pub const fn global(&self) -> ScopeId {
        ScopeId(0)
    }

    /// Creates a fresh scope enclosed by `parent` and returns its handle.
    pub fn enclosed(&mut self, parent: ScopeId) -> ScopeId {
        self.scopes.push(Scope { bindings: FxHashMap::default(),
                                 parent:   Some(parent), });
        ScopeId(self.scopes.len() - 1)
    }

    /// Binds `name` in `scope` itself, shadowing any outer binding.
    pub fn define(&mut self, scope: ScopeId, name: &str, value: Value) {
        self.scopes[scope.0].bindings.insert(name.to_string(), value);
    }

    /// Looks `name` up through `scope` and its ancestors.
    #[must_use]
    pub fn get(&self, scope: ScopeId, name: &str) -> Option<Value> {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &self.scopes[id.0];
            if let Some(value) = scope.bindings.get(name) {
                return Some(value.clone());
            }
            current = scope.parent;
        }
        None
    }

    /// Updates `name` in the nearest scope that already binds it.
    ///
    /// Returns `false` when no scope on the chain binds the name; the
    /// caller turns that into a reassignment error.
    pub fn assign(&mut self, scope: ScopeId, name: &str, value: Value) -> bool {
        let mut current = Some(scope);
        while let Some(id) = current {
            let scope = &mut self.scopes[id.0];
            if let Some(slot) = scope.bindings.get_mut(name) {
                *slot = value;
                return true;
            }
            current = scope.parent;
        }
        false
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}
