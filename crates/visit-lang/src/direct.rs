//! Printing and evaluation by matching on the node variant directly.
//!
//! No registry is involved, so adding an operation here means adding a
//! function and adding a node variant means touching every function.

use crate::expr::Expr;
use crate::number::Number;

pub fn print(expr: &Expr) -> String {
    match expr {
        Expr::Number(n) => n.to_string(),
        Expr::Sum { left, right } => format!("({} + {})", print(left), print(right)),
        Expr::Product { left, right } => format!("({} × {})", print(left), print(right)),
    }
}

pub fn eval(expr: &Expr) -> Number {
    match expr {
        Expr::Number(n) => *n,
        Expr::Sum { left, right } => eval(left) + eval(right),
        Expr::Product { left, right } => eval(left) * eval(right),
    }
}
