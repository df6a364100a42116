//! Search state types.

use crate::matrix::Cost;

/// Location every tour starts from and returns to.
pub const ORIGIN: usize = 0;

/// A partial tour awaiting expansion.
///
/// `path` starts at [`ORIGIN`] and never repeats a location; `remaining`
/// holds every other location in ascending order, so
/// `path.len() + remaining.len()` is always the instance size.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrontierState {
    /// Visited locations in order.
    pub path: Vec<usize>,
    /// Unvisited locations, ascending.
    pub remaining: Vec<usize>,
    /// Exact cost of the edges along `path`, without the closing edge.
    pub distance: Cost,
    /// Lower bound computed when the state was created.
    pub bound: Cost,
}

impl FrontierState {
    /// The state containing only the origin.
    pub fn root(n: usize) -> Self {
        Self {
            path: vec![ORIGIN],
            remaining: (ORIGIN + 1..n).collect(),
            distance: 0,
            bound: 0,
        }
    }

    /// Last visited location.
    #[inline]
    pub fn last(&self) -> usize {
        self.path[self.path.len() - 1]
    }

    /// Whether every location has been visited.
    #[inline]
    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Path and remaining set after moving to `remaining[index]`.
    pub(crate) fn extend(&self, index: usize) -> (Vec<usize>, Vec<usize>) {
        let next = self.remaining[index];

        let mut path = Vec::with_capacity(self.path.len() + 1);
        path.extend_from_slice(&self.path);
        path.push(next);

        let mut remaining = Vec::with_capacity(self.remaining.len() - 1);
        remaining.extend_from_slice(&self.remaining[..index]);
        remaining.extend_from_slice(&self.remaining[index + 1..]);

        (path, remaining)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// States taken off the frontier (re-visits of a recursive frame excluded).
    pub states_popped: u64,
    /// States whose children were generated.
    pub states_expanded: u64,
    /// States dropped on pop because their distance already exceeded the incumbent.
    pub states_discarded: u64,
    /// Candidate children rejected before becoming frontier states.
    pub children_pruned: u64,
    /// Complete permutations reached.
    pub tours_completed: u64,
    /// Number of times the incumbent improved.
    pub incumbent_updates: u64,
    /// Largest number of states held by the frontier at once.
    pub peak_frontier: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_root() {
        let root = FrontierState::root(4);
        assert_eq!(root.path, vec![0]);
        assert_eq!(root.remaining, vec![1, 2, 3]);
        assert_eq!(root.last(), 0);
        assert!(!root.is_complete());
    }

    #[test]
    fn test_extend_keeps_order_and_partition() {
        let root = FrontierState::root(5);
        let (path, remaining) = root.extend(1);
        assert_eq!(path, vec![0, 2]);
        assert_eq!(remaining, vec![1, 3, 4]);
        assert_eq!(path.len() + remaining.len(), 5);
    }

    #[test]
    fn test_root_of_single_location_is_complete() {
        assert!(FrontierState::root(1).is_complete());
    }
}
