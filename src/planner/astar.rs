//! Search Engine — A* over the implicit code hypercube.
//!
//! Frontier entries are ordered by `(priority, accumulated cost, code,
//! path)`. The path only decides between two entries for the same code
//! reached at the same cost through different parents; the lexicographically
//! smaller route wins.

use std::cmp::Ordering;
use std::collections::BinaryHeap;

use hashbrown::HashMap;
use serde::Serialize;
use smallvec::{SmallVec, smallvec};
use tracing::{debug, error, trace};

use super::transition::{Neighbors, neighbors};
use super::CostMode;
use crate::model::{ALL_CODES, Code};
use crate::{Error, Result};

// ============================================================================
// Result
// ============================================================================

/// Outcome of one successful search.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Codes from start to goal inclusive, no repeats.
    pub path: Vec<Code>,
    /// Accumulated edge cost along `path`.
    pub cost: u32,
    /// Codes in the order they were popped and expanded. Stale pops excluded.
    pub expanded: Vec<Code>,
    /// `path.len() / expanded.len()`, always in `(0, 1]`.
    pub efficiency: f64,
}

impl SearchResult {
    /// Number of flips in the plan.
    pub fn steps(&self) -> usize {
        self.path.len() - 1
    }

    pub fn start(&self) -> Code {
        self.path[0]
    }

    pub fn goal(&self) -> Code {
        self.path[self.path.len() - 1]
    }
}

// ============================================================================
// Frontier entry
// ============================================================================

struct FrontierEntry {
    priority: u32,
    cost: u32,
    code: Code,
    path: SmallVec<[Code; 5]>,
}

impl FrontierEntry {
    fn key(&self) -> (u32, u32, Code, &[Code]) {
        (self.priority, self.cost, self.code, self.path.as_slice())
    }
}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.key() == other.key()
    }
}

impl Eq for FrontierEntry {}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // BinaryHeap pops the max; reversed so the lowest key pops first.
        other.key().cmp(&self.key())
    }
}

// ============================================================================
// Entry points
// ============================================================================

/// Plan the cheapest flip sequence from `start` to `goal` under `mode`.
///
/// Inputs are validated in order (start, goal, mode) and the first failure
/// is returned; no search runs on invalid input.
///
/// ```rust
/// let plan = typeflip::search("INTP", "ENFP", "unit").unwrap();
/// assert_eq!(plan.cost, 2);
/// assert_eq!(plan.path.len(), 3);
/// ```
pub fn search(start: &str, goal: &str, mode: &str) -> Result<SearchResult> {
    let start = Code::parse(start)?;
    let goal = Code::parse(goal)?;
    let mode: CostMode = mode.parse()?;
    search_codes(start, goal, mode)
}

/// Typed variant of [`search`] for already-validated inputs.
///
/// Returns `Error::NoPlanFound` if the frontier empties before reaching
/// `goal`. That cannot happen on the connected hypercube and is logged as a
/// consistency failure.
pub fn search_codes(start: Code, goal: Code, mode: CostMode) -> Result<SearchResult> {
    astar_with(start, goal, mode, neighbors)
}

// ============================================================================
// Core loop
// ============================================================================

fn astar_with<F>(start: Code, goal: Code, mode: CostMode, expand: F) -> Result<SearchResult>
where
    F: Fn(Code, CostMode) -> Neighbors,
{
    debug!(%start, %goal, %mode, "flip search started");

    let mut frontier: BinaryHeap<FrontierEntry> = BinaryHeap::new();
    let mut best: HashMap<Code, u32> = HashMap::with_capacity(ALL_CODES.len());
    let mut expanded: Vec<Code> = Vec::with_capacity(ALL_CODES.len());

    frontier.push(FrontierEntry {
        priority: mode.heuristic(start, goal),
        cost: 0,
        code: start,
        path: smallvec![start],
    });

    while let Some(entry) = frontier.pop() {
        if best.get(&entry.code).is_some_and(|&b| b <= entry.cost) {
            trace!(code = %entry.code, cost = entry.cost, "stale frontier entry");
            continue;
        }

        expanded.push(entry.code);

        if entry.code == goal {
            let path = entry.path.into_vec();
            let efficiency = path.len() as f64 / expanded.len() as f64;
            debug!(
                %start, %goal, %mode,
                cost = entry.cost,
                steps = path.len() - 1,
                expanded = expanded.len(),
                "flip search reached goal"
            );
            return Ok(SearchResult { path, cost: entry.cost, expanded, efficiency });
        }

        best.insert(entry.code, entry.cost);

        for (next, step) in expand(entry.code, mode) {
            let cost = entry.cost + step;
            if best.get(&next).is_some_and(|&b| b <= cost) {
                continue;
            }
            let mut path = entry.path.clone();
            path.push(next);
            frontier.push(FrontierEntry {
                priority: cost + mode.heuristic(next, goal),
                cost,
                code: next,
                path,
            });
        }
    }

    error!(
        %start, %goal, %mode,
        expanded = expanded.len(),
        "frontier exhausted without reaching goal; hypercube connectivity violated"
    );
    Err(Error::NoPlanFound { start, goal })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{hamming, weighted_mismatch};
    use pretty_assertions::assert_eq;

    fn code(s: &str) -> Code {
        Code::parse(s).unwrap()
    }

    fn names(codes: &[Code]) -> Vec<&'static str> {
        codes.iter().map(Code::as_str).collect()
    }

    #[test]
    fn test_unit_scenario_expansion_order() {
        let r = search("INTP", "ENFP", "unit").unwrap();
        assert_eq!(names(&r.path), vec!["INTP", "ENTP", "ENFP"]);
        assert_eq!(r.cost, 2);
        // INFP ties ENTP on priority and cost; "ENTP" sorts first, and INFP
        // (cost 1) still beats ENFP (cost 2) on the second key.
        assert_eq!(names(&r.expanded), vec!["INTP", "ENTP", "INFP", "ENFP"]);
        assert!((r.efficiency - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_weighted_scenario_expansion_order() {
        let r = search("ISFP", "ENFP", "weighted").unwrap();
        assert_eq!(names(&r.path), vec!["ISFP", "ESFP", "ENFP"]);
        assert_eq!(r.cost, 5);
        assert_eq!(names(&r.expanded), vec!["ISFP", "ESFP", "INFP", "ENFP"]);
    }

    #[test]
    fn test_trivial_search() {
        let c = code("ISTJ");
        for mode in [CostMode::Unit, CostMode::Weighted] {
            let r = search_codes(c, c, mode).unwrap();
            assert_eq!(r.path, vec![c]);
            assert_eq!(r.expanded, vec![c]);
            assert_eq!(r.cost, 0);
            assert_eq!(r.steps(), 0);
            assert!((r.efficiency - 1.0).abs() < f64::EPSILON);
        }
    }

    #[test]
    fn test_opposite_corner() {
        let r = search("ESTJ", "INFP", "weighted").unwrap();
        assert_eq!(r.cost, 9);
        assert_eq!(r.steps(), 4);
        assert_eq!(r.start(), code("ESTJ"));
        assert_eq!(r.goal(), code("INFP"));
    }

    #[test]
    fn test_cost_matches_heuristic_for_all_pairs() {
        for a in ALL_CODES {
            for b in ALL_CODES {
                let unit = search_codes(a, b, CostMode::Unit).unwrap();
                let weighted = search_codes(a, b, CostMode::Weighted).unwrap();
                assert_eq!(unit.cost, hamming(a, b), "{a}->{b} unit");
                assert_eq!(weighted.cost, weighted_mismatch(a, b), "{a}->{b} weighted");
            }
        }
    }

    #[test]
    fn test_validation_order() {
        assert!(matches!(search("ZZZZ", "QQQQ", "bogus"), Err(Error::InvalidCode(c)) if c == "ZZZZ"));
        assert!(matches!(search("INTJ", "QQQQ", "bogus"), Err(Error::InvalidCode(c)) if c == "QQQQ"));
        assert!(matches!(search("INTJ", "ENFP", "bogus"), Err(Error::InvalidMode(m)) if m == "bogus"));
    }

    #[test]
    fn test_exhausted_frontier_reports_no_plan() {
        let result = astar_with(code("INTJ"), code("ENFP"), CostMode::Unit, |_, _| Neighbors::new());
        match result {
            Err(Error::NoPlanFound { start, goal }) => {
                assert_eq!(start, code("INTJ"));
                assert_eq!(goal, code("ENFP"));
            }
            other => panic!("expected NoPlanFound, got {other:?}"),
        }
    }

    #[test]
    fn test_weighted_tie_prefers_smaller_path() {
        // ISFJ is pushed twice at f = g = 5, via ISTJ (expanded first) and via ESFJ.
        let r = search("ESTJ", "ISFJ", "weighted").unwrap();
        assert_eq!(names(&r.path), vec!["ESTJ", "ESFJ", "ISFJ"]);
        assert_eq!(r.cost, 5);
        assert_eq!(names(&r.expanded), vec!["ESTJ", "ISTJ", "ESFJ", "ISFJ"]);

        let r = search("ENTJ", "ENFP", "weighted").unwrap();
        assert_eq!(names(&r.path), vec!["ENTJ", "ENFJ", "ENFP"]);
        assert_eq!(r.cost, 4);
    }

    #[test]
    fn test_frontier_pops_lowest_key_first() {
        let mut heap = BinaryHeap::new();
        let entry = |priority, cost, route: &[&str]| {
            let path: SmallVec<[Code; 5]> = route.iter().map(|s| code(s)).collect();
            FrontierEntry { priority, cost, code: path[path.len() - 1], path }
        };
        heap.push(entry(3, 0, &["ENFP"]));
        heap.push(entry(2, 2, &["INTP", "INFP", "ENFP"]));
        heap.push(entry(2, 1, &["INTP", "INFP"]));
        heap.push(entry(2, 1, &["INTP", "ENTP"]));
        heap.push(entry(2, 2, &["INTP", "ENTP", "ENFP"]));

        let order: Vec<(u32, u32, Vec<&str>)> = std::iter::from_fn(|| heap.pop())
            .map(|e| (e.priority, e.cost, names(&e.path)))
            .collect();
        assert_eq!(
            order,
            vec![
                (2, 1, vec!["INTP", "ENTP"]),
                (2, 1, vec!["INTP", "INFP"]),
                (2, 2, vec!["INTP", "ENTP", "ENFP"]),
                (2, 2, vec!["INTP", "INFP", "ENFP"]),
                (3, 0, vec!["ENFP"]),
            ]
        );
    }
}
