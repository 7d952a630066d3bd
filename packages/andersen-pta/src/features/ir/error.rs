//! IR construction errors

use super::stmt::VarId;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IrError {
    /// A statement referenced a variable the function never declared
    #[error("unknown variable {var} in function '{function}'")]
    UnknownVariable { var: VarId, function: String },
}

pub type IrResult<T> = std::result::Result<T, IrError>;
