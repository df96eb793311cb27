//! Generic best-first search driving every [GridSolver](crate::solver::GridSolver).
//!
//! The frontier is a [BinaryHeap] without decrease-key: improved nodes are pushed again and
//! outdated entries are skipped when popped. Best costs and predecessors live together in one
//! insertion-ordered map so that heap entries only need to carry an index into it.
use fxhash::FxBuildHasher;
use indexmap::map::Entry::{Occupied, Vacant};
use indexmap::IndexMap;
use log::{debug, warn};
use num_traits::Zero;
use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::hash::Hash;

type FxIndexMap<K, V> = IndexMap<K, V, FxBuildHasher>;

/// Parent index stored for the start node.
const NO_PARENT: usize = usize::MAX;

struct SmallestCostHolder<K> {
    estimated_cost: K,
    cost: K,
    index: usize,
}

impl<K: PartialEq> Eq for SmallestCostHolder<K> {}

impl<K: PartialEq> PartialEq for SmallestCostHolder<K> {
    fn eq(&self, other: &Self) -> bool {
        self.estimated_cost.eq(&other.estimated_cost) && self.cost.eq(&other.cost)
    }
}

impl<K: Ord> PartialOrd for SmallestCostHolder<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<K: Ord> Ord for SmallestCostHolder<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Smallest estimated cost on top; among equal estimates the node that is
        // furthest along (largest cost so far) is expanded first.
        match other.estimated_cost.cmp(&self.estimated_cost) {
            Ordering::Equal => self.cost.cmp(&other.cost),
            s => s,
        }
    }
}

/// Walks the parent links from `goal_index` back to `start`. Returns [None] if the chain breaks
/// before reaching the start, which means the table was corrupted.
fn reverse_path<N, C>(
    parents: &FxIndexMap<N, (usize, C)>,
    start: &N,
    goal_index: usize,
) -> Option<Vec<N>>
where
    N: Eq + Hash + Clone,
{
    let mut path: Vec<N> = itertools::unfold(goal_index, |i| {
        parents.get_index(*i).map(|(node, &(parent, _))| {
            *i = parent;
            node.clone()
        })
    })
    .collect();
    path.reverse();
    match path.first() {
        Some(first) if first == start => Some(path),
        _ => None,
    }
}

/// Runs A* from `start` until `success` holds for a popped node.
///
/// `successors` yields each neighbour together with the cost of moving onto it and `heuristic`
/// must never overestimate the remaining cost. Returns the path including both endpoints and its
/// total cost, or [None] if the frontier runs dry first.
pub fn astar_search<N, C, FN, IN, FH, FS>(
    start: &N,
    mut successors: FN,
    mut heuristic: FH,
    mut success: FS,
) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone,
    C: Zero + Ord + Copy,
    FN: FnMut(&N) -> IN,
    IN: IntoIterator<Item = (N, C)>,
    FH: FnMut(&N) -> C,
    FS: FnMut(&N) -> bool,
{
    let mut to_see = BinaryHeap::new();
    to_see.push(SmallestCostHolder {
        estimated_cost: heuristic(start),
        cost: Zero::zero(),
        index: 0,
    });
    let mut parents: FxIndexMap<N, (usize, C)> = FxIndexMap::default();
    parents.insert(start.clone(), (NO_PARENT, Zero::zero()));
    let mut expanded = 0usize;
    let mut stale = 0usize;

    while let Some(SmallestCostHolder { cost, index, .. }) = to_see.pop() {
        let successors = {
            let Some((node, &(_, best))) = parents.get_index(index) else {
                continue;
            };
            // A cheaper route to this node was recorded after this entry was pushed.
            if best < cost {
                stale += 1;
                continue;
            }
            if success(node) {
                debug!(
                    "Search finished after {} expansions ({} stale entries skipped)",
                    expanded, stale
                );
                return match reverse_path(&parents, start, index) {
                    Some(path) => Some((path, cost)),
                    None => {
                        warn!("Predecessor chain broken while reconstructing path");
                        debug_assert!(false, "predecessor chain does not reach the start");
                        None
                    }
                };
            }
            expanded += 1;
            successors(node)
        };
        for (successor, move_cost) in successors {
            let new_cost = cost + move_cost;
            let h;
            let n;
            match parents.entry(successor) {
                Vacant(e) => {
                    h = heuristic(e.key());
                    n = e.index();
                    e.insert((index, new_cost));
                }
                Occupied(mut e) => {
                    if new_cost < e.get().1 {
                        h = heuristic(e.key());
                        n = e.index();
                        e.insert((index, new_cost));
                    } else {
                        continue;
                    }
                }
            }

            to_see.push(SmallestCostHolder {
                estimated_cost: new_cost + h,
                cost: new_cost,
                index: n,
            });
        }
    }
    debug!(
        "Frontier exhausted after {} expansions ({} stale entries skipped)",
        expanded, stale
    );
    None
}
