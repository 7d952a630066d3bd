//! Ports (Interfaces) for Points-to Analysis
//!
//! The analysis only needs read access to a statement container. Any IR
//! can be analyzed by implementing [`StatementSource`]; the in-crate
//! [`Function`] is one such implementation.

use crate::features::ir::{AllocSiteId, Function, Load, Stmt, Store, VarId};

/// Read-only view of one function's statements
///
/// # Example (Generic - Zero-cost)
/// ```ignore
/// fn count_loads<S: StatementSource>(source: &S, var: VarId) -> usize {
///     source.loads_from(var).len()
/// }
/// ```
pub trait StatementSource {
    /// All statements, in stable program order
    fn statements(&self) -> &[Stmt];

    /// Loads `t = *var`
    fn loads_from(&self, var: VarId) -> &[Load];

    /// Stores `*var = s`
    fn stores_into(&self, var: VarId) -> &[Store];

    /// Display name of a variable
    ///
    /// Panics if `var` does not belong to this source.
    fn var_name(&self, var: VarId) -> &str;

    /// Display name of an allocation site
    fn alloc_name(&self, site: AllocSiteId) -> String {
        format!("alloc:{}", site.index())
    }
}

impl StatementSource for Function {
    #[inline]
    fn statements(&self) -> &[Stmt] {
        self.stmts()
    }

    #[inline]
    fn loads_from(&self, var: VarId) -> &[Load] {
        Function::loads_from(self, var)
    }

    #[inline]
    fn stores_into(&self, var: VarId) -> &[Store] {
        Function::stores_into(self, var)
    }

    fn var_name(&self, var: VarId) -> &str {
        match Function::var_name(self, var) {
            Some(name) => name,
            None => panic!("{} is not a variable of function '{}'", var, self.name()),
        }
    }
}
