//! Domain model for points-to analysis

pub mod constraint_graph;
pub mod node;
pub mod points_to_set;
pub mod worklist;

pub use constraint_graph::ConstraintGraph;
pub use node::{Node, NodeId, NodeKey, NodeRole, Subject};
pub use points_to_set::{NodeSet, PointsToSet};
pub use worklist::Worklist;
