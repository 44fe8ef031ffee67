//! Unit tests for gc-grid.
//!
//! All tests use small hand-written layouts.

#[cfg(test)]
mod helpers {
    use gc_core::Coord;

    use crate::{Grid, Tile};

    /// Open `h × w` floor with goals at the given tiles.
    pub fn open_grid(h: usize, w: usize, goals: &[Coord]) -> Grid {
        let mut g = Grid::new(h, w);
        for &c in goals {
            g.set_tile(c, Tile::GOAL);
        }
        g
    }

    pub fn c(row: i32, col: i32) -> Coord {
        Coord::new(row, col)
    }
}

// ── Grid ──────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid {
    use super::helpers::{c, open_grid};
    use crate::{Grid, Tile};

    #[test]
    fn new_grid_is_open_floor() {
        let g = Grid::new(3, 4);
        assert_eq!(g.len(), 12);
        assert_eq!(g.walkable_coords().len(), 12);
        assert_eq!(g.goal_count(), 0);
    }

    #[test]
    fn out_of_bounds_fails_closed() {
        let g = Grid::new(2, 2);
        assert!(g.tile(c(-1, 0)).is_none());
        assert!(g.tile(c(0, 2)).is_none());
        assert!(g.tile(c(2, 0)).is_none());
        assert!(!g.is_walkable(c(0, -1)));
        assert!(g.is_walkable(c(1, 1)));
    }

    #[test]
    fn set_tile_out_of_bounds_is_ignored() {
        let mut g = Grid::new(2, 2);
        assert!(!g.set_tile(c(5, 5), Tile::WALL));
        assert!(g.set_tile(c(0, 1), Tile::WALL));
        assert!(!g.is_walkable(c(0, 1)));
    }

    #[test]
    fn consume_goal_clears_once() {
        let mut g = open_grid(2, 2, &[c(1, 1)]);
        assert_eq!(g.goal_count(), 1);
        assert!(g.consume_goal(c(1, 1)));
        assert!(!g.consume_goal(c(1, 1)));
        assert!(!g.consume_goal(c(9, 9)));
        assert_eq!(g.goal_count(), 0);
    }

    #[test]
    fn index_and_coord_are_inverse() {
        let g = Grid::new(3, 5);
        for coord in g.coords() {
            let i = g.index_of(coord).unwrap();
            assert_eq!(g.coord_of(i), coord);
        }
    }

    #[test]
    fn walkable_neighbors_order_and_filtering() {
        let mut g = Grid::new(3, 3);
        g.set_tile(c(0, 1), Tile::WALL);
        let n: Vec<_> = g.walkable_neighbors(c(1, 1)).collect();
        // up is a wall: right, down, left remain in that order.
        assert_eq!(n, [c(1, 2), c(2, 1), c(1, 0)]);
        let corner: Vec<_> = g.walkable_neighbors(c(0, 0)).collect();
        assert_eq!(corner, [c(1, 0)]);
    }
}

// ── Layout ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use super::helpers::c;
    use crate::{Grid, GridError};

    const MAP: &str = "\
#####
#..-#
#.# #
#####
";

    #[test]
    fn from_layout_infers_size() {
        let g = Grid::from_layout(MAP).unwrap();
        assert_eq!((g.height(), g.width()), (4, 5));
        assert!(!g.is_walkable(c(0, 0)));
        assert!(g.tile(c(1, 1)).unwrap().has_goal);
        assert!(g.is_walkable(c(1, 3)));
        assert!(!g.tile(c(1, 3)).unwrap().has_goal);
        assert!(g.is_walkable(c(2, 3)));
        assert_eq!(g.goal_count(), 3);
    }

    #[test]
    fn load_layout_checks_dimensions() {
        let mut g = Grid::new(4, 6);
        let err = g.load_layout(MAP).unwrap_err();
        assert!(matches!(err, GridError::DimensionMismatch { rows: 4, cols: 5, .. }));
        // Unchanged on error.
        assert_eq!(g.walkable_coords().len(), 24);

        let mut ok = Grid::new(4, 5);
        ok.load_layout(MAP).unwrap();
        assert_eq!(ok, Grid::from_layout(MAP).unwrap());
    }

    #[test]
    fn unknown_symbol_reports_position() {
        let err = Grid::from_layout("##\n#x\n").unwrap_err();
        assert!(matches!(err, GridError::UnknownTile { line: 2, column: 2, symbol: 'x' }));
    }

    #[test]
    fn ragged_rows_rejected() {
        let err = Grid::from_layout("###\n##\n").unwrap_err();
        assert!(matches!(err, GridError::RaggedRow { line: 2, expected: 3, got: 2 }));
    }

    #[test]
    fn empty_layout_rejected() {
        assert!(matches!(Grid::from_layout("\n\n").unwrap_err(), GridError::EmptyLayout));
    }

    #[test]
    fn trailing_row_of_spaces_is_floor() {
        let source = "#.#\n- -\n   \n";
        let g = Grid::from_layout(source).unwrap();
        assert_eq!((g.height(), g.width()), (3, 3));
        assert!((0..3).all(|col| g.is_walkable(c(2, col))));

        let mut sized = Grid::new(3, 3);
        sized.load_layout(source).unwrap();
        assert_eq!(sized, g);
    }

    #[test]
    fn windows_line_endings_accepted() {
        let g = Grid::from_layout("#.#\r\n.-.\r\n").unwrap();
        assert_eq!((g.height(), g.width()), (2, 3));
        assert_eq!(g.goal_count(), 3);
    }
}

// ── Threat field ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod threat {
    use super::helpers::{c, open_grid};
    use crate::{GraphSnapshot, Grid, ThreatParams, Tile};

    #[test]
    fn blocked_tiles_are_absent() {
        let g = Grid::from_layout("#-\n-#\n").unwrap();
        let s = GraphSnapshot::build(&g, &[], ThreatParams::new(5.0, 1.0));
        assert_eq!(s.len(), 2);
        assert!(!s.contains(c(0, 0)));
        assert!(s.contains(c(0, 1)));
        assert!(s.get(c(1, 1)).is_none());
        assert!(s.nodes().all(|n| g.is_walkable(n.coord)));
    }

    #[test]
    fn adjacency_is_up_right_down_left() {
        let g = Grid::new(3, 3);
        let s = GraphSnapshot::build(&g, &[], ThreatParams::new(0.0, 0.0));
        let node = s.get(c(1, 1)).unwrap();
        assert_eq!(node.adjacent, [c(0, 1), c(1, 2), c(2, 1), c(1, 0)]);
    }

    #[test]
    fn danger_decays_linearly_and_stops_at_zero() {
        let g = Grid::new(1, 7);
        let s = GraphSnapshot::build(&g, &[c(0, 0)], ThreatParams::new(6.0, 2.0));
        let row: Vec<f32> = (0..7).map(|col| s.danger(c(0, col))).collect();
        assert_eq!(row, [6.0, 4.0, 2.0, 0.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn overlapping_sources_take_the_max() {
        let g = Grid::new(1, 7);
        let s = GraphSnapshot::build(&g, &[c(0, 0), c(0, 6)], ThreatParams::new(10.0, 3.0));
        let row: Vec<f32> = (0..7).map(|col| s.danger(c(0, col))).collect();
        // Summing would give 1 + 1 at the middle; max keeps it at 1.
        assert_eq!(row, [10.0, 7.0, 4.0, 1.0, 4.0, 7.0, 10.0]);
    }

    #[test]
    fn danger_propagates_around_walls_not_through_them() {
        let g = Grid::from_layout("---\n##-\n---\n").unwrap();
        let s = GraphSnapshot::build(&g, &[c(0, 0)], ThreatParams::new(10.0, 1.0));
        // (2,0) is 2 rows below but 6 hops away around the wall.
        assert_eq!(s.danger(c(2, 0)), 4.0);
        assert_eq!(s.danger(c(1, 0)), 0.0, "walls carry no danger");
    }

    #[test]
    fn degenerate_params_give_zero_field() {
        let g = Grid::new(3, 3);
        for params in [
            ThreatParams::new(0.0, 1.0),
            ThreatParams::new(-4.0, 1.0),
            ThreatParams::new(5.0, 0.0),
            ThreatParams::new(5.0, -2.0),
        ] {
            assert!(params.is_degenerate());
            let s = GraphSnapshot::build(&g, &[c(1, 1)], params);
            assert!(s.nodes().all(|n| n.danger == 0.0), "{params:?}");
        }
    }

    #[test]
    fn danger_is_bounded_for_any_decay() {
        let g = Grid::from_layout("------\n-##---\n----#-\n------\n").unwrap();
        let pursuers = [c(0, 0), c(3, 5), c(2, 2), c(1, 1)];
        for max in [0.5_f32, 1.0, 7.0, 100.0] {
            for decay in [0.0_f32, 0.25, 1.0, 3.5, 50.0] {
                let s = GraphSnapshot::build(&g, &pursuers, ThreatParams::new(max, decay));
                for n in s.nodes() {
                    assert!(n.danger >= 0.0 && n.danger <= max, "max={max} decay={decay} {n:?}");
                }
            }
        }
    }

    #[test]
    fn build_is_deterministic() {
        let g = open_grid(6, 6, &[c(5, 5), c(0, 3)]);
        let params = ThreatParams::new(9.0, 1.5);
        let a = GraphSnapshot::build(&g, &[c(2, 2), c(4, 1)], params);
        let b = GraphSnapshot::build(&g, &[c(2, 2), c(4, 1)], params);
        assert_eq!(a, b);
    }

    #[test]
    fn goals_are_mirrored_from_grid() {
        let mut g = open_grid(3, 3, &[c(0, 2), c(2, 0)]);
        let s = GraphSnapshot::build(&g, &[], ThreatParams::new(1.0, 1.0));
        assert_eq!(s.goals(), [c(0, 2), c(2, 0)]);
        assert!(s.get(c(0, 2)).unwrap().has_goal);

        g.consume_goal(c(0, 2));
        let later = GraphSnapshot::build(&g, &[], ThreatParams::new(1.0, 1.0));
        assert_eq!(later.goals(), [c(2, 0)]);
        // Earlier snapshot is unaffected.
        assert!(s.get(c(0, 2)).unwrap().has_goal);
    }

    #[test]
    fn pursuer_on_wall_or_outside_seeds_nothing() {
        let mut g = Grid::new(2, 2);
        g.set_tile(c(0, 0), Tile::WALL);
        let s = GraphSnapshot::build(&g, &[c(0, 0), c(-3, 7)], ThreatParams::new(5.0, 1.0));
        assert!(s.nodes().all(|n| n.danger == 0.0));
    }
}

// ── Planner ───────────────────────────────────────────────────────────────────

#[cfg(test)]
mod planner {
    use super::helpers::{c, open_grid};
    use crate::{search, GoalSeeking, GraphSnapshot, Grid, PlanError, Pursuit, ThreatParams};

    fn calm(g: &Grid) -> GraphSnapshot {
        GraphSnapshot::build(g, &[], ThreatParams::new(0.0, 0.0))
    }

    #[test]
    fn open_5x5_first_step_is_right() {
        let g = open_grid(5, 5, &[c(4, 4)]);
        let s = calm(&g);
        let step = search(&s, c(0, 0), &GoalSeeking::default()).unwrap();
        assert_eq!(step, c(0, 1));
    }

    #[test]
    fn standing_on_goal_stays_put() {
        let g = open_grid(3, 3, &[c(1, 1)]);
        let s = calm(&g);
        assert_eq!(search(&s, c(1, 1), &GoalSeeking::default()), Ok(c(1, 1)));
    }

    #[test]
    fn dangerless_step_is_on_a_shortest_path() {
        let goals = [c(6, 1), c(0, 6), c(3, 3)];
        let g = open_grid(7, 7, &goals);
        let s = calm(&g);
        let nearest = |p: gc_core::Coord| goals.iter().map(|&q| p.manhattan(q)).min().unwrap();
        for start in g.coords() {
            let step = search(&s, start, &GoalSeeking::default()).unwrap();
            if nearest(start) == 0 {
                assert_eq!(step, start);
            } else {
                assert_eq!(start.manhattan(step), 1, "from {start}");
                assert_eq!(nearest(step) + 1, nearest(start), "from {start} via {step}");
            }
        }
    }

    #[test]
    fn danger_makes_longer_route_preferred() {
        // Short route along row 0, long detour via row 2.
        let g = Grid::from_layout("----.\n-###-\n-----\n").unwrap();

        let baseline = calm(&g);
        assert_eq!(search(&baseline, c(0, 0), &GoalSeeking::default()), Ok(c(0, 1)));

        // A pursuer parked in the middle of the short route.
        let threatened = GraphSnapshot::build(&g, &[c(0, 2)], ThreatParams::new(3.0, 1.0));
        assert!(threatened.danger(c(0, 1)) > 0.0);
        assert_eq!(threatened.danger(c(1, 0)), 0.0);
        assert_eq!(search(&threatened, c(0, 0), &GoalSeeking::default()), Ok(c(1, 0)));
    }

    #[test]
    fn zero_penalty_ignores_danger() {
        let g = Grid::from_layout("----.\n-###-\n-----\n").unwrap();
        let threatened = GraphSnapshot::build(&g, &[c(0, 2)], ThreatParams::new(3.0, 1.0));
        let blind = GoalSeeking { danger_penalty: 0.0 };
        assert_eq!(search(&threatened, c(0, 0), &blind), Ok(c(0, 1)));
    }

    #[test]
    fn pursuit_closes_k_hops_in_k_steps() {
        let g = Grid::new(8, 8);
        let s = calm(&g);
        let target = c(6, 5);
        let mut pos = c(1, 0);
        let k = pos.manhattan(target);
        for tick in 1..=k {
            let next = search(&s, pos, &Pursuit { target }).unwrap();
            assert_eq!(next.manhattan(target) + 1, pos.manhattan(target), "tick {tick}");
            pos = next;
        }
        assert_eq!(pos, target);
        assert_eq!(search(&s, pos, &Pursuit { target }), Ok(target));
    }

    #[test]
    fn pursuit_ignores_danger() {
        let g = Grid::from_layout("-----\n-###-\n-----\n").unwrap();
        let s = GraphSnapshot::build(&g, &[c(0, 2)], ThreatParams::new(50.0, 1.0));
        assert_eq!(search(&s, c(0, 0), &Pursuit { target: c(0, 4) }), Ok(c(0, 1)));
    }

    #[test]
    fn pursuit_routes_around_walls() {
        let g = Grid::from_layout("-#-\n-#-\n---\n").unwrap();
        let s = calm(&g);
        let mut pos = c(0, 0);
        let mut steps = 0;
        while pos != c(0, 2) {
            pos = search(&s, pos, &Pursuit { target: c(0, 2) }).unwrap();
            assert!(g.is_walkable(pos));
            steps += 1;
        }
        assert_eq!(steps, 6);
    }

    #[test]
    fn unreachable_goal_is_no_path() {
        let g = Grid::from_layout("-#.\n-#-\n").unwrap();
        let s = calm(&g);
        assert_eq!(
            search(&s, c(0, 0), &GoalSeeking::default()),
            Err(PlanError::NoPath { from: c(0, 0) })
        );
        assert_eq!(
            search(&s, c(1, 0), &Pursuit { target: c(1, 2) }),
            Err(PlanError::NoPath { from: c(1, 0) })
        );
    }

    #[test]
    fn no_goals_left_is_no_path() {
        let g = Grid::new(3, 3);
        let s = calm(&g);
        assert!(matches!(search(&s, c(1, 1), &GoalSeeking::default()), Err(PlanError::NoPath { .. })));
    }

    #[test]
    fn blocked_start_is_reported() {
        let g = Grid::from_layout("#.\n--\n").unwrap();
        let s = calm(&g);
        assert_eq!(
            search(&s, c(0, 0), &GoalSeeking::default()),
            Err(PlanError::StartNotInGraph(c(0, 0)))
        );
        assert_eq!(
            search(&s, c(5, 5), &GoalSeeking::default()),
            Err(PlanError::StartNotInGraph(c(5, 5)))
        );
    }
}
