//! `visit-lang` routes operations over arithmetic expression trees through a
//! handler registry keyed by (operation type, node kind).
//!
//! Nodes carry no behaviour. New operations are added by registering one
//! handler per node kind; the node types are never touched.
//!
//! ## Examples
//!
//! ```rust
//! use visit_lang::{Evaluator, Expr, Number, Printer, visit};
//!
//! let expr = Expr::sum(1, Expr::product(2, Expr::sum(3, 4)));
//!
//! let mut printer = Printer::new();
//! visit(&mut printer, &expr).unwrap();
//! assert_eq!(printer.as_str(), "(1 + (2 × (3 + 4)))");
//!
//! let mut evaluator = Evaluator::new();
//! visit(&mut evaluator, &expr).unwrap();
//! assert_eq!(evaluator.result(), Some(Number::new(15.0)));
//! ```
//!
//! Custom operations register their handlers on a [`RegistryBuilder`]:
//!
//! ```rust
//! use visit_lang::{DispatchError, Expr, NodeKind, Operation, Registry, RegistryBuilder};
//!
//! #[derive(Default)]
//! struct Depth {
//!     current: usize,
//!     max: usize,
//! }
//!
//! impl Operation for Depth {}
//!
//! fn leaf(op: &mut Depth, _: &Expr, _: &Registry) -> Result<(), DispatchError> {
//!     op.max = op.max.max(op.current + 1);
//!     Ok(())
//! }
//!
//! fn binary(op: &mut Depth, expr: &Expr, registry: &Registry) -> Result<(), DispatchError> {
//!     if let Expr::Sum { left, right } | Expr::Product { left, right } = expr {
//!         op.current += 1;
//!         registry.dispatch(op, left)?;
//!         registry.dispatch(op, right)?;
//!         op.current -= 1;
//!     }
//!     Ok(())
//! }
//!
//! let mut builder = RegistryBuilder::with_builtins()?;
//! builder
//!     .register(NodeKind::Number, leaf)?
//!     .register(NodeKind::Sum, binary)?
//!     .register(NodeKind::Product, binary)?;
//! let registry = builder.build();
//!
//! let mut depth = Depth::default();
//! registry.dispatch(&mut depth, &Expr::sum(1, Expr::product(2, 3)))?;
//! assert_eq!(depth.max, 3);
//! # Ok::<(), DispatchError>(())
//! ```
mod dispatch;
pub mod direct;
mod error;
mod expr;
mod number;
mod ops;

pub use dispatch::{
    BUILTIN_REGISTRY, Handler, HandlerEntry, HandlerKey, Operation, OperationId, Registry,
    RegistryBuilder, visit,
};
pub use error::DispatchError;
pub use expr::{Expr, NodeKind};
pub use number::Number;
pub use ops::{Evaluator, Printer, VisitCounter};
