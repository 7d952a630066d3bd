//! Function: the statement container consumed by the analysis
//!
//! Owns variables, allocation sites and the ordered statement list.
//! Load/store statements are indexed by their dereferenced variable on
//! insertion so the solver never rescans the statement list.

use super::error::{IrError, IrResult};
use super::stmt::{AllocSiteId, Load, Stmt, StmtId, Store, VarId};
use rustc_hash::FxHashMap;

#[derive(Debug, Clone, Default)]
pub struct Function {
    name: String,

    /// Variable names, indexed by `VarId`
    variables: Vec<String>,

    /// Target variable of each allocation site, indexed by `AllocSiteId`
    alloc_targets: Vec<VarId>,

    stmts: Vec<Stmt>,

    /// source var → loads `t = *source`
    loads: FxHashMap<VarId, Vec<Load>>,

    /// target var → stores `*target = s`
    stores: FxHashMap<VarId, Vec<Store>>,
}

impl Function {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Declare a variable: `var name`
    pub fn create_var(&mut self, name: impl Into<String>) -> VarId {
        let var = VarId::new(self.variables.len() as u32);
        self.variables.push(name.into());
        self.push(Stmt::Declare { var });
        var
    }

    /// `target = alloc`
    pub fn create_alloc(&mut self, target: VarId) -> IrResult<AllocSiteId> {
        self.check(target)?;
        let site = AllocSiteId::new(self.alloc_targets.len() as u32);
        self.alloc_targets.push(target);
        self.push(Stmt::Alloc { target, site });
        Ok(site)
    }

    /// `target = &operand`
    pub fn create_addr_of(&mut self, target: VarId, operand: VarId) -> IrResult<StmtId> {
        self.check(target)?;
        self.check(operand)?;
        Ok(self.push(Stmt::AddrOf { target, operand }))
    }

    /// `target = operand`
    pub fn create_copy(&mut self, target: VarId, operand: VarId) -> IrResult<StmtId> {
        self.check(target)?;
        self.check(operand)?;
        Ok(self.push(Stmt::Copy { target, operand }))
    }

    /// `target = *source`
    pub fn create_load(&mut self, target: VarId, source: VarId) -> IrResult<StmtId> {
        self.check(target)?;
        self.check(source)?;
        self.loads
            .entry(source)
            .or_default()
            .push(Load { target, source });
        Ok(self.push(Stmt::Load { target, source }))
    }

    /// `*target = source`
    pub fn create_store(&mut self, target: VarId, source: VarId) -> IrResult<StmtId> {
        self.check(target)?;
        self.check(source)?;
        self.stores
            .entry(target)
            .or_default()
            .push(Store { target, source });
        Ok(self.push(Stmt::Store { target, source }))
    }

    #[inline]
    pub fn stmts(&self) -> &[Stmt] {
        &self.stmts
    }

    /// Loads whose source operand is `var`
    #[inline]
    pub fn loads_from(&self, var: VarId) -> &[Load] {
        self.loads.get(&var).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Stores whose destination operand is `var`
    #[inline]
    pub fn stores_into(&self, var: VarId) -> &[Store] {
        self.stores.get(&var).map(Vec::as_slice).unwrap_or(&[])
    }

    #[inline]
    pub fn var_name(&self, var: VarId) -> Option<&str> {
        self.variables.get(var.index()).map(String::as_str)
    }

    #[inline]
    pub fn var_count(&self) -> usize {
        self.variables.len()
    }

    #[inline]
    pub fn alloc_count(&self) -> usize {
        self.alloc_targets.len()
    }

    /// Variable receiving the allocation at `site`
    #[inline]
    pub fn alloc_target(&self, site: AllocSiteId) -> Option<VarId> {
        self.alloc_targets.get(site.index()).copied()
    }

    /// Look up a variable by name (first declaration wins)
    pub fn var_by_name(&self, name: &str) -> Option<VarId> {
        self.variables
            .iter()
            .position(|n| n == name)
            .map(|i| VarId::new(i as u32))
    }

    fn check(&self, var: VarId) -> IrResult<()> {
        if var.index() < self.variables.len() {
            Ok(())
        } else {
            Err(IrError::UnknownVariable {
                var,
                function: self.name.clone(),
            })
        }
    }

    fn push(&mut self, stmt: Stmt) -> StmtId {
        let id = StmtId::new(self.stmts.len() as u32);
        self.stmts.push(stmt);
        id
    }
}
