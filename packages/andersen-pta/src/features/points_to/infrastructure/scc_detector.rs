//! Strongly Connected Component Detection
//!
//! Tarjan's index/low-link algorithm, formulated with an explicit call
//! stack so arbitrarily long copy chains cannot overflow the thread stack.
//!
//! The core routine is generic over a successor function, which lets the
//! optimizer run it both on a whole graph and on a restricted subgraph.
//!
//! # References
//! - Tarjan, R. "Depth-First Search and Linear Graph Algorithms" (1972)
//! - Nuutila, E. "On Finding the Strongly Connected Components" (1994)

use crate::features::points_to::domain::{ConstraintGraph, NodeId};
use rustc_hash::{FxHashMap, FxHashSet};

/// Members of one component, in the order they left the Tarjan stack
pub type Scc = Vec<NodeId>;

#[derive(Debug, Clone)]
pub struct SccResult {
    /// Every component, trivial ones included, in reverse topological order
    pub sccs: Vec<Scc>,

    pub stats: SccStats,
}

#[derive(Debug, Clone, Default)]
pub struct SccStats {
    pub total_nodes: usize,
    pub total_edges: usize,
    pub scc_count: usize,
    /// Components with more than one member
    pub cyclic_count: usize,
    pub largest_scc: usize,
}

impl SccResult {
    /// Components with more than one member
    pub fn cyclic(&self) -> impl Iterator<Item = &Scc> {
        self.sccs.iter().filter(|scc| scc.len() > 1)
    }
}

/// Decompose the whole graph over its current successor edges
pub fn find_sccs(graph: &ConstraintGraph) -> SccResult {
    let sccs = tarjan_scc(graph.node_ids(), |n| {
        graph.node(n).successors.as_slice().to_vec()
    });

    let stats = SccStats {
        total_nodes: graph.len(),
        total_edges: graph.edge_count(),
        scc_count: sccs.len(),
        cyclic_count: sccs.iter().filter(|s| s.len() > 1).count(),
        largest_scc: sccs.iter().map(Vec::len).max().unwrap_or(0),
    };
    SccResult { sccs, stats }
}

/// Tarjan's SCC algorithm over every node reachable from `roots`
///
/// Time: O(V + E)
/// Space: O(V)
pub fn tarjan_scc<R, F, I>(roots: R, mut successors: F) -> Vec<Scc>
where
    R: IntoIterator<Item = NodeId>,
    F: FnMut(NodeId) -> I,
    I: IntoIterator<Item = NodeId>,
{
    let mut state = TarjanState::default();
    let mut call_stack: Vec<Frame> = Vec::new();

    for root in roots {
        if state.index.contains_key(&root) {
            continue;
        }
        call_stack.push(state.enter(root, &mut successors));

        while let Some(frame) = call_stack.last_mut() {
            let v = frame.node;
            if let Some(&w) = frame.successors.get(frame.next) {
                frame.next += 1;
                if let Some(&w_index) = state.index.get(&w) {
                    if state.on_stack.contains(&w) {
                        state.lower(v, w_index);
                    }
                } else {
                    call_stack.push(state.enter(w, &mut successors));
                }
            } else {
                call_stack.pop();
                let low = state.lowlink[&v];
                if let Some(parent) = call_stack.last() {
                    state.lower(parent.node, low);
                }
                if low == state.index[&v] {
                    state.emit(v);
                }
            }
        }
    }

    state.sccs
}

/// Suspended visit of one node
struct Frame {
    node: NodeId,
    successors: Vec<NodeId>,
    next: usize,
}

#[derive(Default)]
struct TarjanState {
    index: FxHashMap<NodeId, usize>,
    lowlink: FxHashMap<NodeId, usize>,
    on_stack: FxHashSet<NodeId>,
    stack: Vec<NodeId>,
    current_index: usize,
    sccs: Vec<Scc>,
}

impl TarjanState {
    fn enter<F, I>(&mut self, v: NodeId, successors: &mut F) -> Frame
    where
        F: FnMut(NodeId) -> I,
        I: IntoIterator<Item = NodeId>,
    {
        self.index.insert(v, self.current_index);
        self.lowlink.insert(v, self.current_index);
        self.current_index += 1;
        self.stack.push(v);
        self.on_stack.insert(v);
        Frame {
            node: v,
            successors: successors(v).into_iter().collect(),
            next: 0,
        }
    }

    #[inline]
    fn lower(&mut self, v: NodeId, candidate: usize) {
        if let Some(low) = self.lowlink.get_mut(&v) {
            *low = (*low).min(candidate);
        }
    }

    /// Pop the stack down to `root` as one component
    fn emit(&mut self, root: NodeId) {
        let mut scc = Vec::new();
        while let Some(w) = self.stack.pop() {
            self.on_stack.remove(&w);
            scc.push(w);
            if w == root {
                break;
            }
        }
        self.sccs.push(scc);
    }
}
