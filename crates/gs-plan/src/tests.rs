//! Unit tests for gs-plan.

#[cfg(test)]
mod helpers {
    use std::io::Cursor;

    use gs_grid::Grid;

    pub fn grid_from(csv: &str, width: u32) -> Grid {
        gs_grid::load_reader(Cursor::new(csv), width).unwrap()
    }

    /// Fully open n×n field.
    pub fn open_field(n: u32) -> Grid {
        let mut row = vec!["1"; n as usize].join(",");
        row.push('\n');
        grid_from(&row.repeat(n as usize), n)
    }

    /// Two open rows joined by single-cell gaps at alternating ends — the
    /// greedy sweep stalls at each row end and must reroute.
    pub const CORRIDOR: &str = "\
        1,1,1,1,1,1,1\n\
        0,0,0,0,0,0,1\n\
        1,1,1,1,1,1,1\n\
        1,0,0,0,0,0,0\n\
        1,1,1,1,1,1,1\n";
}

// ── A* shortest path ──────────────────────────────────────────────────────────

#[cfg(test)]
mod astar {
    use gs_core::{Heading, Move, Pos, Pose};

    use crate::astar::shortest_path;

    /// Execute `path` from `start` on paper, asserting each forward step is
    /// legal, and return the final position.
    fn replay(grid: &gs_grid::Grid, start: Pose, path: &[Move]) -> Pos {
        let mut pose = start;
        for mv in path {
            pose = match mv {
                Move::TurnLeft => pose.turned_left(),
                Move::TurnRight => pose.turned_right(),
                Move::Forward => {
                    let next = pose.forward_pos().unwrap();
                    assert!(grid.contains(next) && grid.is_traversable(next.row, next.col));
                    pose.at(next)
                }
            };
        }
        pose.pos
    }

    #[test]
    fn straight_run_with_one_turn() {
        let grid = super::helpers::open_field(5);
        let start = Pose::new(0, 0, Heading::East);
        let target = Pos::new(2, 3);

        let path = shortest_path(&grid, start, target);
        // Manhattan distance 5 plus exactly one turn.
        assert_eq!(path.len(), 6);
        assert_eq!(replay(&grid, start, &path), target);
    }

    #[test]
    fn initial_heading_costs_a_turn() {
        let grid = super::helpers::open_field(5);
        let start = Pose::new(0, 0, Heading::North);
        let target = Pos::new(0, 3);

        let path = shortest_path(&grid, start, target);
        assert_eq!(path.len(), 4); // turn right + 3 forward
        assert_eq!(replay(&grid, start, &path), target);
    }

    #[test]
    fn same_cell_is_empty_path() {
        let grid = super::helpers::open_field(3);
        let start = Pose::new(1, 1, Heading::West);
        assert!(shortest_path(&grid, start, Pos::new(1, 1)).is_empty());
    }

    #[test]
    fn detours_around_a_wall() {
        // A 3-cell wall splits row 2; the shortest route climbs over it.
        let grid = super::helpers::grid_from(
            "1,1,1,1,1\n\
             1,1,0,1,1\n\
             1,1,0,1,1\n\
             1,1,0,1,1\n\
             1,1,1,1,1\n",
            5,
        );
        let start = Pose::new(2, 1, Heading::East);
        let target = Pos::new(2, 3);

        let path = shortest_path(&grid, start, target);
        assert_eq!(path.len(), 9);
        assert_eq!(replay(&grid, start, &path), target);
    }

    #[test]
    fn unreachable_target_drains_to_empty() {
        // A full-height wall — no route across.
        let grid = super::helpers::grid_from(
            "1,1,0,1,1\n\
             1,1,0,1,1\n\
             1,1,0,1,1\n",
            5,
        );
        let path = shortest_path(&grid, Pose::new(1, 0, Heading::East), Pos::new(1, 4));
        assert!(path.is_empty());
    }

    #[test]
    fn deterministic_between_runs() {
        let grid = super::helpers::open_field(7);
        let start = Pose::new(6, 0, Heading::North);
        let target = Pos::new(0, 6);
        let first = shortest_path(&grid, start, target);
        let second = shortest_path(&grid, start, target);
        assert_eq!(first, second);
    }
}

// ── Construction & clamping ───────────────────────────────────────────────────

#[cfg(test)]
mod clamping {
    use gs_core::{Heading, Pose};
    use gs_agent::Agent;

    use crate::Planner;

    #[test]
    fn negative_fraction_clamps_up() {
        let mut grid = super::helpers::open_field(5);
        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let planner = Planner::new(agent, -1.0, 4000);
        assert_eq!(planner.search_fraction(), 0.01);
    }

    #[test]
    fn oversized_fraction_clamps_down() {
        let mut grid = super::helpers::open_field(5);
        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let planner = Planner::new(agent, 2.0, 4000);
        assert_eq!(planner.search_fraction(), 1.0);
    }

    #[test]
    fn zero_move_limit_clamps_up() {
        let mut grid = super::helpers::open_field(5);
        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let planner = Planner::new(agent, 0.5, 0);
        assert_eq!(planner.move_limit(), 1);
    }

    #[test]
    fn target_is_ceiling_of_fraction() {
        let mut grid = super::helpers::open_field(5); // 25 traversable
        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let planner = Planner::new(agent, 0.5, 100);
        assert_eq!(planner.summary().target_scans, 13); // ⌈12.5⌉
    }
}

// ── Nearest-unscanned queries ─────────────────────────────────────────────────

#[cfg(test)]
mod nearest {
    use gs_core::{Heading, Pos, Pose};
    use gs_agent::Agent;

    use crate::Planner;

    #[test]
    fn picks_closest_with_row_major_tie_break() {
        let mut grid = super::helpers::open_field(3);
        // Pre-observe the 2×2 block around the start.
        grid.mark_scanned(0, 0);
        grid.mark_scanned(0, 1);
        grid.mark_scanned(1, 0);
        grid.mark_scanned(1, 1);

        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let planner = Planner::new(agent, 1.0, 100);

        // (0, 2) and (2, 0) are both at distance 2; row-major order wins.
        assert_eq!(planner.nearest_unscanned(), Some(Pos::new(0, 2)));
        assert_eq!(planner.nearest_unscanned_row(), Some(0));
        assert_eq!(planner.nearest_unscanned_col(), Some(2));
    }

    #[test]
    fn none_when_everything_is_scanned() {
        let mut grid = super::helpers::grid_from("1,1\n", 2);
        grid.mark_scanned(0, 0);
        grid.mark_scanned(0, 1);

        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let planner = Planner::new(agent, 1.0, 100);
        assert_eq!(planner.nearest_unscanned(), None);
    }
}

// ── End-to-end planning ───────────────────────────────────────────────────────

#[cfg(test)]
mod planning {
    use gs_core::{Heading, Move, Pos, Pose};
    use gs_agent::Agent;

    use crate::observer::PlanObserver;
    use crate::{Planner, PlanSummary};

    #[test]
    fn full_coverage_on_open_field() {
        let mut grid = super::helpers::open_field(25);
        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let mut planner = Planner::new(agent, 1.0, 4000);

        let log = planner.find_route().unwrap();
        let summary = planner.summary();

        // Every cell is traversable, so the scan count cannot overshoot:
        // the plan ends exactly at full coverage.
        assert_eq!(summary.scanned_count, 625);
        assert_eq!(summary.scanned_count, summary.traversable_count);
        assert!(summary.target_met());
        assert_eq!(summary.total_moves as usize, log.len());
        assert!(summary.total_moves <= 4000);
    }

    #[test]
    fn move_budget_is_never_exceeded() {
        let mut grid = super::helpers::open_field(25);
        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let mut planner = Planner::new(agent, 1.0, 10);

        let log = planner.find_route().unwrap();
        let summary = planner.summary();

        assert_eq!(log.len(), 10);
        assert_eq!(summary.total_moves, 10);
        assert!(!summary.target_met());
    }

    #[test]
    fn partial_fraction_stops_at_target() {
        let mut grid = super::helpers::open_field(25);
        let agent = Agent::new(&mut grid, Pose::new(12, 12, Heading::North)).unwrap();
        let mut planner = Planner::new(agent, 0.5, 4000);

        planner.find_route().unwrap();
        let summary = planner.summary();

        assert_eq!(summary.target_scans, 313); // ⌈0.5 · 625⌉
        assert!(summary.target_met());
        // The final scan may overshoot by at most one cone minus one cell.
        assert!(summary.scanned_count < summary.target_scans + 6);
    }

    #[test]
    fn corridor_requires_reroute() {
        #[derive(Default)]
        struct Counting {
            starts: u32,
            moves: u32,
            reroutes: u32,
            finished: Option<PlanSummary>,
        }
        impl PlanObserver for Counting {
            fn on_start(&mut self, _pose: Pose, _initial: usize) {
                self.starts += 1;
            }
            fn on_move(&mut self, _step: u32, _action: Move, _pose: Pose, _new: usize) {
                self.moves += 1;
            }
            fn on_reroute(&mut self, _target: Pos, path_len: usize) {
                assert!(path_len > 0);
                self.reroutes += 1;
            }
            fn on_finish(&mut self, summary: &PlanSummary) {
                self.finished = Some(*summary);
            }
        }

        let mut grid = super::helpers::grid_from(super::helpers::CORRIDOR, 7);
        gs_grid::normalize(&mut grid).unwrap();
        assert_eq!(grid.traversable_count(), 23);

        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::East)).unwrap();
        let mut planner = Planner::new(agent, 1.0, 500);

        let mut obs = Counting::default();
        let log = planner.find_route_with(&mut obs).unwrap();

        assert_eq!(obs.starts, 1);
        assert_eq!(obs.moves as usize, log.len());
        assert!(obs.reroutes >= 1, "sweep should stall at the row end");

        let summary = obs.finished.expect("on_finish fired");
        assert!(summary.target_met());
        // The cone observes blocked cells too, so the scan count may pass
        // the traversable count.
        assert!(summary.scanned_count >= summary.target_scans);
    }

    #[test]
    fn single_cell_grid_is_infeasible() {
        // The cone never covers the agent's own cell, so a 1×1 grid can
        // never be scanned: the reroute comes back empty and the planner
        // returns the (empty) partial log.
        let mut grid = super::helpers::grid_from("1\n", 1);
        let agent = Agent::new(&mut grid, Pose::new(0, 0, Heading::North)).unwrap();
        let mut planner = Planner::new(agent, 1.0, 100);

        let log = planner.find_route().unwrap();
        let summary = planner.summary();

        assert!(log.is_empty());
        assert_eq!(summary.total_moves, 0);
        assert_eq!(summary.scanned_count, 0);
        assert!(!summary.target_met());
    }

    #[test]
    fn observed_blocked_space_counts_toward_target() {
        // Normalization leaves one traversable cell; its north cone covers
        // three blocked cells, which satisfies the 1-cell target without a
        // single move.
        let mut grid = super::helpers::grid_from("1,0,1\n0,1,0\n", 3);
        gs_grid::normalize(&mut grid).unwrap();
        assert_eq!(grid.traversable_count(), 1);

        let agent = Agent::new(&mut grid, Pose::new(1, 1, Heading::North)).unwrap();
        let mut planner = Planner::new(agent, 1.0, 50);

        let log = planner.find_route().unwrap();
        let summary = planner.summary();

        assert!(log.is_empty());
        assert_eq!(summary.scanned_count, 3);
        assert!(summary.target_met());
    }

    #[test]
    fn replaying_the_log_reproduces_the_run() {
        let run = |grid: &mut gs_grid::Grid| -> (Vec<Move>, Pose, usize) {
            let agent = Agent::new(grid, Pose::new(0, 0, Heading::East)).unwrap();
            let mut planner = Planner::new(agent, 1.0, 500);
            let log = planner.find_route().unwrap();
            let pose = planner.agent().pose();
            let scanned = planner.summary().scanned_count;
            (log, pose, scanned)
        };

        let mut grid = super::helpers::grid_from(super::helpers::CORRIDOR, 7);
        gs_grid::normalize(&mut grid).unwrap();
        let (log, final_pose, scanned_count) = run(&mut grid);

        // Replay on a second, identically-prepared grid: initial scan, then
        // each logged move followed by a scan.
        let mut replay_grid = super::helpers::grid_from(super::helpers::CORRIDOR, 7);
        gs_grid::normalize(&mut replay_grid).unwrap();
        {
            let mut agent =
                Agent::new(&mut replay_grid, Pose::new(0, 0, Heading::East)).unwrap();
            let mut scanned = agent.scan();
            for action in &log {
                match action {
                    Move::Forward => agent.move_forward().unwrap(),
                    Move::TurnLeft => agent.turn_left(),
                    Move::TurnRight => agent.turn_right(),
                }
                scanned += agent.scan();
            }
            assert_eq!(agent.pose(), final_pose);
            assert_eq!(scanned, scanned_count);
        }

        for row in 0..grid.row_count() {
            for col in 0..grid.col_count() {
                assert_eq!(
                    grid.is_scanned(row, col),
                    replay_grid.is_scanned(row, col),
                    "scan sets diverge at ({row}, {col})"
                );
            }
        }
    }
}
