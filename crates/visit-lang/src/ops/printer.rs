use std::fmt;

use crate::dispatch::{Operation, Registry, RegistryBuilder};
use crate::error::DispatchError;
use crate::expr::{Expr, NodeKind};

/// Renders a tree as fully parenthesized infix text.
///
/// ```
/// use visit_lang::{Expr, Printer, visit};
///
/// let mut printer = Printer::new();
/// visit(&mut printer, &Expr::product(0, 5)).unwrap();
/// assert_eq!(printer.as_str(), "(0 × 5)");
/// ```
#[derive(Debug, Clone, Default)]
pub struct Printer {
    buffer: String,
}

impl Operation for Printer {}

impl Printer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.buffer
    }

    pub fn into_string(self) -> String {
        self.buffer
    }

    pub(crate) fn register(builder: &mut RegistryBuilder) -> Result<(), DispatchError> {
        builder
            .register(NodeKind::Number, print_number)?
            .register(NodeKind::Sum, print_sum)?
            .register(NodeKind::Product, print_product)?;
        Ok(())
    }

    fn infix(
        &mut self,
        left: &Expr,
        op: &str,
        right: &Expr,
        registry: &Registry,
    ) -> Result<(), DispatchError> {
        self.buffer.push('(');
        registry.dispatch(self, left)?;
        self.buffer.push_str(op);
        registry.dispatch(self, right)?;
        self.buffer.push(')');
        Ok(())
    }
}

impl fmt::Display for Printer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.buffer)
    }
}

fn print_number(printer: &mut Printer, expr: &Expr, _: &Registry) -> Result<(), DispatchError> {
    match expr {
        Expr::Number(n) => {
            printer.buffer.push_str(&n.to_string());
            Ok(())
        }
        _ => unreachable!(),
    }
}

fn print_sum(printer: &mut Printer, expr: &Expr, registry: &Registry) -> Result<(), DispatchError> {
    match expr {
        Expr::Sum { left, right } => printer.infix(left, " + ", right, registry),
        _ => unreachable!(),
    }
}

fn print_product(
    printer: &mut Printer,
    expr: &Expr,
    registry: &Registry,
) -> Result<(), DispatchError> {
    match expr {
        Expr::Product { left, right } => printer.infix(left, " × ", right, registry),
        _ => unreachable!(),
    }
}
