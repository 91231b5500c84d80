use std::fmt;
use std::ops::{Add, Mul};

use crate::dispatch::{Operation, Registry, RegistryBuilder};
use crate::error::DispatchError;
use crate::expr::{Expr, NodeKind};
use crate::number::Number;

/// Computes the numeric value of a tree, left operand first.
#[derive(Debug, Clone, Default)]
pub struct Evaluator {
    result: Option<Number>,
}

impl Operation for Evaluator {}

impl Evaluator {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` until a traversal has completed.
    pub fn result(&self) -> Option<Number> {
        self.result
    }

    pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), DispatchError> {
        builder
            .register(NodeKind::Number, eval_number)?
            .register(NodeKind::Sum, eval_sum)?
            .register(NodeKind::Product, eval_product)?;
        Ok(())
    }

    fn binary(
        &mut self,
        left: &Expr,
        right: &Expr,
        registry: &Registry,
        apply: fn(Number, Number) -> Number,
    ) -> Result<(), DispatchError> {
        registry.dispatch(self, left)?;
        let saved = self.result;
        registry.dispatch(self, right)?;
        self.result = saved.zip(self.result).map(|(l, r)| apply(l, r));
        Ok(())
    }
}

impl fmt::Display for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Some(n) => write!(f, "{n}"),
            None => write!(f, "None"),
        }
    }
}

fn eval_number(evaluator: &mut Evaluator, expr: &Expr, _: &Registry) -> Result<(), DispatchError> {
    match expr {
        Expr::Number(n) => {
            evaluator.result = Some(*n);
            Ok(())
        }
        _ => unreachable!(),
    }
}

fn eval_sum(
    evaluator: &mut Evaluator,
    expr: &Expr,
    registry: &Registry,
) -> Result<(), DispatchError> {
    match expr {
        Expr::Sum { left, right } => evaluator.binary(left, right, registry, Number::add),
        _ => unreachable!(),
    }
}

fn eval_product(
    evaluator: &mut Evaluator,
    expr: &Expr,
    registry: &Registry,
) -> Result<(), DispatchError> {
    match expr {
        Expr::Product { left, right } => evaluator.binary(left, right, registry, Number::mul),
        _ => unreachable!(),
    }
}
