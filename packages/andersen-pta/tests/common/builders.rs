//! Test data builders
//!
//! - `program`: build a `Function` from one-line statements
//! - `Op` + `arb_ops`: random programs over numbered variables

use andersen_pta::{Function, VarId};
use proptest::prelude::*;
use std::collections::HashMap;

/// Build a function from statements such as `p = alloc`, `q = &x`,
/// `x = y`, `x = *p`, `*p = x` or `var x`
///
/// Variables are declared in order of first appearance.
pub fn program(name: &str, stmts: &[&str]) -> Function {
    let mut f = Function::new(name);
    let mut vars: HashMap<String, VarId> = HashMap::new();

    let mut var = |f: &mut Function, name: &str| -> VarId {
        let name = name.trim();
        *vars
            .entry(name.to_string())
            .or_insert_with(|| f.create_var(name))
    };

    for stmt in stmts {
        let stmt = stmt.trim();
        if let Some(name) = stmt.strip_prefix("var ") {
            var(&mut f, name);
            continue;
        }

        let (lhs, rhs) = stmt
            .split_once('=')
            .unwrap_or_else(|| panic!("malformed statement '{stmt}'"));
        let (lhs, rhs) = (lhs.trim(), rhs.trim());

        if let Some(target) = lhs.strip_prefix('*') {
            let t = var(&mut f, target);
            let s = var(&mut f, rhs);
            f.create_store(t, s).unwrap();
        } else if rhs == "alloc" {
            let t = var(&mut f, lhs);
            f.create_alloc(t).unwrap();
        } else if let Some(operand) = rhs.strip_prefix('&') {
            let t = var(&mut f, lhs);
            let o = var(&mut f, operand);
            f.create_addr_of(t, o).unwrap();
        } else if let Some(source) = rhs.strip_prefix('*') {
            let t = var(&mut f, lhs);
            let s = var(&mut f, source);
            f.create_load(t, s).unwrap();
        } else {
            let t = var(&mut f, lhs);
            let o = var(&mut f, rhs);
            f.create_copy(t, o).unwrap();
        }
    }
    f
}

/// One pointer statement over variables `v0..vN`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    Alloc(usize),
    AddrOf(usize, usize),
    Copy(usize, usize),
    Load(usize, usize),
    Store(usize, usize),
}

/// Random program with `vars` variables and up to `max_ops` statements
pub fn arb_ops(vars: usize, max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    let v = 0..vars;
    let op = prop_oneof![
        1 => v.clone().prop_map(Op::Alloc),
        2 => (v.clone(), v.clone()).prop_map(|(t, o)| Op::AddrOf(t, o)),
        3 => (v.clone(), v.clone()).prop_map(|(t, o)| Op::Copy(t, o)),
        2 => (v.clone(), v.clone()).prop_map(|(t, s)| Op::Load(t, s)),
        2 => (v.clone(), v).prop_map(|(t, s)| Op::Store(t, s)),
    ];
    prop::collection::vec(op, 0..=max_ops)
}

/// Declare `v0..v{vars}` and append `ops`
pub fn build_ops(vars: usize, ops: &[Op]) -> Function {
    let mut f = Function::new("generated");
    let ids: Vec<VarId> = (0..vars).map(|i| f.create_var(format!("v{i}"))).collect();
    for &op in ops {
        match op {
            Op::Alloc(t) => {
                f.create_alloc(ids[t]).unwrap();
            }
            Op::AddrOf(t, o) => {
                f.create_addr_of(ids[t], ids[o]).unwrap();
            }
            Op::Copy(t, o) => {
                f.create_copy(ids[t], ids[o]).unwrap();
            }
            Op::Load(t, s) => {
                f.create_load(ids[t], ids[s]).unwrap();
            }
            Op::Store(t, s) => {
                f.create_store(ids[t], ids[s]).unwrap();
            }
        }
    }
    f
}
