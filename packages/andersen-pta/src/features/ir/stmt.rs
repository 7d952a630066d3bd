//! Pointer IR statements
//!
//! Six statement kinds, one per pointer operation:
//! - Declare: `var x`
//! - Alloc:   `x = alloc`
//! - AddrOf:  `x = &y`
//! - Copy:    `x = y`
//! - Load:    `x = *y`
//! - Store:   `*x = y`

use serde::{Deserialize, Serialize};
use std::fmt;

macro_rules! define_id {
    ($(#[$meta:meta])* $name:ident, $prefix:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
        )]
        pub struct $name(u32);

        impl $name {
            #[inline]
            pub fn new(index: u32) -> Self {
                Self(index)
            }

            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}{}", $prefix, self.0)
            }
        }
    };
}

define_id!(
    /// Identity of a declared variable (names are not required to be unique)
    VarId,
    "%"
);
define_id!(
    /// Identity of one allocation instruction
    AllocSiteId,
    "alloc#"
);
define_id!(
    /// Position of a statement in its function
    StmtId,
    "stmt#"
);

/// Statement kind tag
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StmtKind {
    Var,
    Alloc,
    AddrOf,
    Copy,
    Load,
    Store,
}

impl StmtKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            StmtKind::Var => "Var",
            StmtKind::Alloc => "Alloc",
            StmtKind::AddrOf => "AddrOf",
            StmtKind::Copy => "Copy",
            StmtKind::Load => "Load",
            StmtKind::Store => "Store",
        }
    }
}

/// A single pointer statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stmt {
    /// `var x`
    Declare { var: VarId },

    /// `target = alloc`
    /// Semantics: pts(target) ⊇ {site}
    Alloc { target: VarId, site: AllocSiteId },

    /// `target = &operand`
    /// Semantics: pts(target) ⊇ {operand}
    AddrOf { target: VarId, operand: VarId },

    /// `target = operand`
    /// Semantics: pts(target) ⊇ pts(operand)
    Copy { target: VarId, operand: VarId },

    /// `target = *source`
    /// Semantics: ∀a ∈ pts(source): pts(target) ⊇ pts(a)
    Load { target: VarId, source: VarId },

    /// `*target = source`
    /// Semantics: ∀a ∈ pts(target): pts(a) ⊇ pts(source)
    Store { target: VarId, source: VarId },
}

impl Stmt {
    pub fn kind(&self) -> StmtKind {
        match self {
            Stmt::Declare { .. } => StmtKind::Var,
            Stmt::Alloc { .. } => StmtKind::Alloc,
            Stmt::AddrOf { .. } => StmtKind::AddrOf,
            Stmt::Copy { .. } => StmtKind::Copy,
            Stmt::Load { .. } => StmtKind::Load,
            Stmt::Store { .. } => StmtKind::Store,
        }
    }

    /// All variables referenced by this statement
    pub fn variables(&self) -> impl Iterator<Item = VarId> {
        let (first, second) = match *self {
            Stmt::Declare { var } => (var, None),
            Stmt::Alloc { target, .. } => (target, None),
            Stmt::AddrOf { target, operand } | Stmt::Copy { target, operand } => {
                (target, Some(operand))
            }
            Stmt::Load { target, source } | Stmt::Store { target, source } => {
                (target, Some(source))
            }
        };
        std::iter::once(first).chain(second)
    }
}

/// `target = *source`, as returned by the load index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Load {
    pub target: VarId,
    pub source: VarId,
}

/// `*target = source`, as returned by the store index
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Store {
    pub target: VarId,
    pub source: VarId,
}
