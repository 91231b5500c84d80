//! Handler registry keyed by (operation type, node kind).
//!
//! Resolution looks at two runtime identities: the [`TypeId`] of the
//! operation and the [`NodeKind`] of the node. Handlers are found by that
//! composite key only. An operation type that wraps or derefs to another
//! operation type does not inherit its handlers.
//!
//! Registration happens on a [`RegistryBuilder`]. Once built, a [`Registry`]
//! is read-only.

use std::any::{Any, TypeId};
use std::cmp::Ordering;
use std::collections::hash_map::Entry;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::LazyLock;

use rustc_hash::FxHashMap;
use strum::IntoEnumIterator;

use crate::error::DispatchError;
use crate::expr::{Expr, NodeKind};
use crate::ops;

/// A family of handlers implementing one traversal concern.
///
/// The implementing type owns the traversal state.
pub trait Operation: Any {}

/// Handler bound to one (operation, node kind) pair.
///
/// The registry is passed in so that handlers can dispatch on children.
pub type Handler<O> = fn(&mut O, &Expr, &Registry) -> Result<(), DispatchError>;

/// Identity of an operation category.
#[derive(Debug, Clone, Copy)]
pub struct OperationId {
    type_id: TypeId,
    name: &'static str,
}

impl OperationId {
    pub fn of<O: Operation>() -> Self {
        Self {
            type_id: TypeId::of::<O>(),
            name: std::any::type_name::<O>(),
        }
    }

    /// Fully qualified type name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Type name without its module path.
    pub fn short_name(&self) -> &'static str {
        let path = self.name.split('<').next().unwrap_or(self.name);
        match path.rfind("::") {
            Some(i) => &self.name[i + 2..],
            None => self.name,
        }
    }
}

impl PartialEq for OperationId {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for OperationId {}

impl Hash for OperationId {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl PartialOrd for OperationId {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for OperationId {
    fn cmp(&self, other: &Self) -> Ordering {
        self.short_name()
            .cmp(other.short_name())
            .then_with(|| self.name.cmp(other.name))
            .then_with(|| self.type_id.cmp(&other.type_id))
    }
}

impl fmt::Display for OperationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.short_name())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HandlerKey {
    pub operation: OperationId,
    pub node: NodeKind,
}

impl HandlerKey {
    pub fn new(operation: OperationId, node: NodeKind) -> Self {
        Self { operation, node }
    }

    pub fn of<O: Operation>(node: NodeKind) -> Self {
        Self::new(OperationId::of::<O>(), node)
    }
}

impl fmt::Display for HandlerKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.operation, self.node)
    }
}

/// A registered handler with its key.
///
/// The handler is stored as the `Handler<O>` function pointer itself and
/// recovered by downcasting when invoked.
pub struct HandlerEntry {
    key: HandlerKey,
    func: Box<dyn Any + Send + Sync>,
}

impl HandlerEntry {
    fn new<O: Operation>(node: NodeKind, handler: Handler<O>) -> Self {
        Self {
            key: HandlerKey::of::<O>(node),
            func: Box::new(handler),
        }
    }

    pub fn key(&self) -> HandlerKey {
        self.key
    }

    pub fn invoke<O: Operation>(
        &self,
        op: &mut O,
        node: &Expr,
        registry: &Registry,
    ) -> Result<(), DispatchError> {
        match self.func.downcast_ref::<Handler<O>>() {
            Some(handler) => handler(op, node, registry),
            None => Err(DispatchError::OperationMismatch {
                expected: self.key.operation.short_name(),
                found: OperationId::of::<O>().short_name(),
            }),
        }
    }
}

impl fmt::Debug for HandlerEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HandlerEntry")
            .field("key", &self.key)
            .finish_non_exhaustive()
    }
}

/// Registration phase of a [`Registry`].
///
/// Duplicate keys are rejected; the first registration stays in place.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    handlers: FxHashMap<HandlerKey, HandlerEntry>,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from the handlers of the built-in operations.
    pub fn with_builtins() -> Result<Self, DispatchError> {
        let mut builder = Self::new();
        ops::register_builtins(&mut builder)?;
        Ok(builder)
    }

    pub fn register<O: Operation>(
        &mut self,
        node: NodeKind,
        handler: Handler<O>,
    ) -> Result<&mut Self, DispatchError> {
        let entry = HandlerEntry::new(node, handler);
        let key = entry.key();

        match self.handlers.entry(key) {
            Entry::Occupied(_) => Err(DispatchError::DuplicateRegistration {
                operation: key.operation.short_name(),
                node,
            }),
            Entry::Vacant(slot) => {
                tracing::debug!(operation = key.operation.name(), %node, "registered handler");
                slot.insert(entry);
                Ok(self)
            }
        }
    }

    pub fn build(self) -> Registry {
        tracing::debug!(handlers = self.handlers.len(), "registry built");
        Registry {
            handlers: self.handlers,
        }
    }
}

/// Read-only handler table.
pub struct Registry {
    handlers: FxHashMap<HandlerKey, HandlerEntry>,
}

impl Registry {
    pub fn builder() -> RegistryBuilder {
        RegistryBuilder::new()
    }

    /// Registry holding exactly the built-in operations.
    pub fn builtin() -> Result<Self, DispatchError> {
        RegistryBuilder::with_builtins().map(RegistryBuilder::build)
    }

    /// Finds the handler for the runtime types of `op` and `node`.
    pub fn resolve<O: Operation>(
        &self,
        _op: &O,
        node: &Expr,
    ) -> Result<&HandlerEntry, DispatchError> {
        let key = HandlerKey::of::<O>(node.kind());
        self.handlers
            .get(&key)
            .ok_or(DispatchError::NoHandlerFound {
                operation: key.operation.short_name(),
                node: key.node,
            })
    }

    /// Resolves and invokes the handler for `op` on `node`.
    pub fn dispatch<O: Operation>(&self, op: &mut O, node: &Expr) -> Result<(), DispatchError> {
        let entry = self.resolve(op, node).inspect_err(|err| {
            tracing::warn!(node = ?err.node(), "{err}");
        })?;
        tracing::trace!(handler = %entry.key(), "dispatch");
        entry.invoke(op, node, self)
    }

    pub fn contains(&self, key: &HandlerKey) -> bool {
        self.handlers.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.handlers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }

    /// All registered keys, ordered by operation short name then node kind.
    pub fn keys(&self) -> Vec<HandlerKey> {
        let mut keys = self.handlers.keys().copied().collect::<Vec<_>>();
        keys.sort();
        keys
    }

    /// Node kinds `O` has no handler for.
    pub fn missing<O: Operation>(&self) -> Vec<NodeKind> {
        NodeKind::iter()
            .filter(|node| !self.contains(&HandlerKey::of::<O>(*node)))
            .collect()
    }
}

impl fmt::Debug for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registry")
            .field("keys", &self.keys())
            .finish()
    }
}

/// Process-wide registry of the built-in operations.
pub static BUILTIN_REGISTRY: LazyLock<Registry> = LazyLock::new(|| {
    Registry::builtin().unwrap_or_else(|err| panic!("built-in handlers conflict: {err}"))
});

/// Dispatches `op` on `node` through [`BUILTIN_REGISTRY`].
pub fn visit<O: Operation>(op: &mut O, node: &Expr) -> Result<(), DispatchError> {
    BUILTIN_REGISTRY.dispatch(op, node)
}
