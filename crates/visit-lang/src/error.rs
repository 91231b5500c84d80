use miette::Diagnostic;
use thiserror::Error;

use crate::expr::NodeKind;

type OperationName = &'static str;

#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum DispatchError {
    #[error("Handler for \"{operation}\" on {node} node is already registered")]
    #[diagnostic(
        code(visit::duplicate_registration),
        help("register each (operation, node) pair exactly once")
    )]
    DuplicateRegistration {
        operation: OperationName,
        node: NodeKind,
    },
    #[error("No handler registered for \"{operation}\" on {node} node")]
    #[diagnostic(
        code(visit::no_handler_found),
        help("register a handler for every node kind the operation can reach")
    )]
    NoHandlerFound {
        operation: OperationName,
        node: NodeKind,
    },
    #[error("Handler for \"{expected}\" was invoked with \"{found}\"")]
    #[diagnostic(code(visit::operation_mismatch))]
    OperationMismatch {
        expected: OperationName,
        found: OperationName,
    },
}

impl DispatchError {
    #[cold]
    pub fn node(&self) -> Option<NodeKind> {
        match self {
            DispatchError::DuplicateRegistration { node, .. } => Some(*node),
            DispatchError::NoHandlerFound { node, .. } => Some(*node),
            DispatchError::OperationMismatch { .. } => None,
        }
    }
}
