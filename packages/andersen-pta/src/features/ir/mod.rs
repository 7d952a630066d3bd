//! Pointer IR
//!
//! Minimal statement model the points-to analysis runs over:
//! - Stmt: closed sum type over the six pointer statements
//! - Function: ordered statement container with load/store indexes
//! - IrError: operand validation at construction time

pub mod error;
pub mod function;
pub mod stmt;

pub use error::{IrError, IrResult};
pub use function::Function;
pub use stmt::{AllocSiteId, Load, Stmt, StmtId, StmtKind, Store, VarId};
