//! Built-in operations.

mod counter;
mod evaluator;
mod printer;

pub use counter::VisitCounter;
pub use evaluator::Evaluator;
pub use printer::Printer;

use crate::dispatch::RegistryBuilder;
use crate::error::DispatchError;

pub(crate) fn register_builtins(builder: &mut RegistryBuilder) -> Result<(), DispatchError> {
    Printer::register(builder)?;
    Evaluator::register(builder)?;
    VisitCounter::register(builder)?;
    Ok(())
}
