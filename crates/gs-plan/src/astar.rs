//! Pose-space A* shortest path.
//!
//! # State space
//!
//! States are full poses `(row, col, heading)` — turns cost a move, so two
//! visits to the same cell with different headings are different states and
//! the closed set must key on the full pose.  Actions are the three
//! primitives at unit cost; turning is always valid, stepping forward needs
//! an in-bounds traversable destination.
//!
//! # Heuristic
//!
//! Manhattan distance from position to target, ignoring heading.  A forward
//! move changes one coordinate by 1 and turns move nothing, so the heuristic
//! never overestimates — the returned path has minimum action count among
//! all action sequences reaching the target position (any heading).

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use rustc_hash::{FxHashMap, FxHashSet};

use gs_core::{Move, Pos, Pose};
use gs_grid::Grid;

/// The move sequence from `start` to any pose positioned at `target`, or an
/// empty sequence when the open set drains without reaching it.
///
/// `start.pos == target` returns an empty sequence immediately.
pub fn shortest_path(grid: &Grid, start: Pose, target: Pos) -> Vec<Move> {
    // Min-heap entries: (f, seq, g, pose).  Reverse makes BinaryHeap (max)
    // behave as min-heap; seq is a monotone insertion counter so ties on f
    // break in insertion order, deterministically.
    let mut open: BinaryHeap<Reverse<(u32, u64, u32, Pose)>> = BinaryHeap::new();
    let mut seq: u64 = 0;

    // best_g[pose] = cheapest known action count to reach pose.
    let mut best_g: FxHashMap<Pose, u32> = FxHashMap::default();
    // came_from[pose] = (predecessor, action that produced pose).
    let mut came_from: FxHashMap<Pose, (Pose, Move)> = FxHashMap::default();
    let mut closed: FxHashSet<Pose> = FxHashSet::default();

    best_g.insert(start, 0);
    open.push(Reverse((start.pos.manhattan(target), seq, 0, start)));

    while let Some(Reverse((_f, _order, g, pose))) = open.pop() {
        if pose.pos == target {
            return reconstruct(&came_from, start, pose);
        }
        if !closed.insert(pose) {
            continue; // stale heap entry
        }

        for action in Move::ALL {
            let Some(next) = apply(grid, pose, action) else {
                continue;
            };
            if closed.contains(&next) {
                continue;
            }
            let next_g = g + 1;
            if best_g.get(&next).is_none_or(|&known| next_g < known) {
                best_g.insert(next, next_g);
                came_from.insert(next, (pose, action));
                seq += 1;
                open.push(Reverse((
                    next_g + next.pos.manhattan(target),
                    seq,
                    next_g,
                    next,
                )));
            }
        }
    }

    Vec::new()
}

/// The pose after `action`, or `None` when a forward step is off-grid or
/// blocked.  Turns are always valid.
fn apply(grid: &Grid, pose: Pose, action: Move) -> Option<Pose> {
    match action {
        Move::TurnLeft => Some(pose.turned_left()),
        Move::TurnRight => Some(pose.turned_right()),
        Move::Forward => {
            let next = pose.forward_pos()?;
            (grid.contains(next) && grid.is_traversable(next.row, next.col))
                .then(|| pose.at(next))
        }
    }
}

/// Walk the parent map from `goal` back to `start` and return the actions in
/// forward order.
fn reconstruct(came_from: &FxHashMap<Pose, (Pose, Move)>, start: Pose, goal: Pose) -> Vec<Move> {
    let mut actions = Vec::new();
    let mut cursor = goal;
    while cursor != start {
        let (prev, action) = came_from[&cursor];
        actions.push(action);
        cursor = prev;
    }
    actions.reverse();
    actions
}
