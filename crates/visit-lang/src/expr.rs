//! Expression tree model.
//!
//! The variant set is closed. Nodes carry no behaviour; operations live
//! outside the tree and are routed to by [`NodeKind`].

use crate::number::Number;

/// Runtime identity of an [`Expr`] variant.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::EnumIter,
)]
#[strum(serialize_all = "snake_case")]
pub enum NodeKind {
    Number,
    Sum,
    Product,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    Number(Number),
    Sum { left: Box<Expr>, right: Box<Expr> },
    Product { left: Box<Expr>, right: Box<Expr> },
}

impl Expr {
    pub fn number(value: impl Into<Number>) -> Self {
        Expr::Number(value.into())
    }

    pub fn sum(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Sum {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    pub fn product(left: impl Into<Expr>, right: impl Into<Expr>) -> Self {
        Expr::Product {
            left: Box::new(left.into()),
            right: Box::new(right.into()),
        }
    }

    #[inline(always)]
    pub fn kind(&self) -> NodeKind {
        match self {
            Expr::Number(_) => NodeKind::Number,
            Expr::Sum { .. } => NodeKind::Sum,
            Expr::Product { .. } => NodeKind::Product,
        }
    }
}

impl From<Number> for Expr {
    fn from(value: Number) -> Self {
        Expr::Number(value)
    }
}

impl From<i32> for Expr {
    fn from(value: i32) -> Self {
        Expr::Number(value.into())
    }
}

impl From<f64> for Expr {
    fn from(value: f64) -> Self {
        Expr::Number(value.into())
    }
}
