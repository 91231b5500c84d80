use crate::dispatch::{Operation, Registry, RegistryBuilder};
use crate::error::DispatchError;
use crate::expr::{Expr, NodeKind};

/// Records the kind of every visited node in visit order.
///
/// Parents are recorded before their children and left children before
/// right ones.
#[derive(Debug, Clone, Default)]
pub struct VisitCounter {
    visits: Vec<NodeKind>,
}

impl Operation for VisitCounter {}

impl VisitCounter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn count(&self) -> usize {
        self.visits.len()
    }

    pub fn count_of(&self, kind: NodeKind) -> usize {
        self.visits.iter().filter(|k| **k == kind).count()
    }

    pub fn visits(&self) -> &[NodeKind] {
        &self.visits
    }

    pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), DispatchError> {
        builder
            .register(NodeKind::Number, count_node)?
            .register(NodeKind::Sum, count_node)?
            .register(NodeKind::Product, count_node)?;
        Ok(())
    }
}

fn count_node(
    counter: &mut VisitCounter,
    expr: &Expr,
    registry: &Registry,
) -> Result<(), DispatchError> {
    counter.visits.push(expr.kind());
    match expr {
        Expr::Number(_) => Ok(()),
        Expr::Sum { left, right } | Expr::Product { left, right } => {
            registry.dispatch(counter, left)?;
            registry.dispatch(counter, right)
        }
    }
}
