//! Unit tests for mz-maze.
//!
//! All tests use hand-crafted layouts small enough to check by eye.

#[cfg(test)]
mod helpers {
    use crate::{Layout, parse_layout};

    /// A 12-cell ring with one power pill in the top-left corner.
    ///
    /// ```text
    ///   x: 1 2 3 4 5
    /// y=1  o . . . P      ids  0  1  2  3  4
    /// y=2  .       .           5           6
    /// y=3  . . . . .           7  8  9 10 11
    /// ```
    pub const RING: &str = "\
#######
#o...P#
#.###.#
#.....#
#######
";

    pub fn ring() -> Layout {
        parse_layout(RING).unwrap()
    }
}

// ── Layout parsing ────────────────────────────────────────────────────────────

#[cfg(test)]
mod layout {
    use mz_core::{GridPoint, NodeId};

    use crate::{MazeError, parse_layout};

    #[test]
    fn ring_counts() {
        let layout = super::helpers::ring();
        assert_eq!(layout.maze.node_count(), 12);
        assert_eq!(layout.maze.pill_nodes().len(), 10);
        assert_eq!(layout.maze.power_pill_nodes(), &[NodeId(0)]);
        assert_eq!(layout.attacker_start, Some(NodeId(4)));
        assert_eq!(layout.lair, None);
    }

    #[test]
    fn node_positions_are_row_major() {
        let layout = super::helpers::ring();
        let maze = &layout.maze;
        assert_eq!(maze.node(NodeId(0)).unwrap().pos, GridPoint::new(1, 1));
        assert_eq!(maze.node(NodeId(6)).unwrap().pos, GridPoint::new(5, 2));
        assert_eq!(maze.node_at(GridPoint::new(3, 3)), Some(NodeId(9)));
        assert_eq!(maze.node_at(GridPoint::new(0, 0)), None);
    }

    #[test]
    fn ring_has_no_junctions() {
        let layout = super::helpers::ring();
        assert_eq!(layout.maze.junctions().count(), 0);
        assert!(layout.maze.nodes().iter().all(|n| n.neighbor_count() == 2));
    }

    #[test]
    fn tunnel_wraps_row() {
        let layout = parse_layout("###\n. .\n###\n").unwrap();
        let maze = &layout.maze;
        assert_eq!(maze.node_count(), 3);
        assert_eq!(maze.distances().get(NodeId(0), NodeId(2)), Some(1));
    }

    #[test]
    fn leading_blank_lines_are_ignored() {
        let layout = parse_layout("\n\n#P.#\n\n").unwrap();
        assert_eq!(layout.maze.node_count(), 2);
        assert_eq!(layout.attacker_start, Some(NodeId(0)));
    }

    #[test]
    fn unknown_character_errors() {
        let result = parse_layout("#P?#");
        assert!(matches!(result, Err(MazeError::Parse(_))));
    }
}

// ── Builder validation ────────────────────────────────────────────────────────

#[cfg(test)]
mod builder {
    use mz_core::{Direction, GridPoint, NodeId};

    use crate::{MazeBuilder, MazeError};

    #[test]
    fn empty_build() {
        let maze = MazeBuilder::new().build().unwrap();
        assert!(maze.is_empty());
        assert_eq!(maze.distances().node_count(), 0);
    }

    #[test]
    fn one_way_link_is_rejected() {
        let mut b = MazeBuilder::new();
        let a = b.add_node(GridPoint::new(0, 0));
        let c = b.add_node(GridPoint::new(1, 0));
        b.set_neighbor(a, Direction::Right, c).unwrap();
        let result = b.build();
        assert!(matches!(result, Err(MazeError::AsymmetricPassage { .. })));
    }

    #[test]
    fn neutral_link_is_rejected() {
        let mut b = MazeBuilder::new();
        let a = b.add_node(GridPoint::new(0, 0));
        let result = b.set_neighbor(a, Direction::Neutral, a);
        assert!(matches!(result, Err(MazeError::NotCardinal(Direction::Neutral))));
    }

    #[test]
    fn oversized_maze_is_rejected() {
        let mut b = MazeBuilder::with_capacity(crate::MAX_NODES + 1);
        for x in 0..=crate::MAX_NODES as i32 {
            b.add_node(GridPoint::new(x, 0));
        }
        let result = b.build();
        assert!(matches!(
            result,
            Err(MazeError::TooLarge { nodes, max }) if nodes == max + 1
        ));
    }

    #[test]
    fn unknown_node_is_rejected() {
        let mut b = MazeBuilder::new();
        let a = b.add_node(GridPoint::new(0, 0));
        assert!(b.connect(a, Direction::Up, NodeId(9)).is_err());
        assert!(b.set_pill(NodeId(9)).is_err());
    }

    #[test]
    fn pills_are_indexed_once() {
        let mut b = MazeBuilder::new();
        let a = b.add_node(GridPoint::new(0, 0));
        let c = b.add_node(GridPoint::new(1, 0));
        b.set_pill(c).unwrap();
        b.set_pill(a).unwrap();
        b.set_pill(c).unwrap();
        let maze = b.build().unwrap();
        assert_eq!(maze.pill_nodes(), &[c, a]);
        assert_eq!(maze.node(c).unwrap().pill_index, Some(0));
        assert_eq!(maze.node(a).unwrap().pill_index, Some(1));
    }

    #[test]
    fn plus_center_is_junction() {
        let mut b = MazeBuilder::new();
        let center = b.add_node(GridPoint::new(1, 1));
        for dir in Direction::CARDINAL {
            let (dx, dy) = dir.offset();
            let arm = b.add_node(GridPoint::new(1 + dx, 1 + dy));
            b.connect(center, dir, arm).unwrap();
        }
        let maze = b.build().unwrap();
        assert_eq!(maze.junctions().collect::<Vec<_>>(), vec![center]);
    }
}

// ── Distances and step selection ──────────────────────────────────────────────

#[cfg(test)]
mod oracle {
    use mz_core::{Direction, GridPoint, NodeId, StepMode};

    use crate::{DistanceOracle, MazeBuilder};

    #[test]
    fn ring_distances() {
        let maze = super::helpers::ring().maze;
        assert_eq!(maze.path_distance(NodeId(0), NodeId(0)), Some(0));
        assert_eq!(maze.path_distance(NodeId(0), NodeId(4)), Some(4));
        assert_eq!(maze.path_distance(NodeId(4), NodeId(0)), Some(4));
        assert_eq!(maze.path_distance(NodeId(0), NodeId(11)), Some(6));
        assert_eq!(maze.path_distance(NodeId(0), NodeId(99)), None);
    }

    #[test]
    fn approach_follows_shortest_path() {
        let maze = super::helpers::ring().maze;
        assert_eq!(maze.next_step(NodeId(4), NodeId(0), StepMode::Approach), Some(Direction::Left));
        assert_eq!(maze.next_step(NodeId(4), NodeId(11), StepMode::Approach), Some(Direction::Down));
    }

    #[test]
    fn evade_picks_farthest_exit() {
        let maze = super::helpers::ring().maze;
        // From 4, Left leads to 3 (3 from node 0), Down to 6 (5 from node 0).
        assert_eq!(maze.next_step(NodeId(4), NodeId(0), StepMode::Evade), Some(Direction::Down));
    }

    #[test]
    fn approach_at_target_is_none() {
        let maze = super::helpers::ring().maze;
        assert_eq!(maze.next_step(NodeId(3), NodeId(3), StepMode::Approach), None);
    }

    #[test]
    fn evade_at_target_breaks_ties_by_direction_order() {
        let maze = super::helpers::ring().maze;
        // Node 0 exits Right (1) and Down (5), both one step away.
        assert_eq!(maze.next_step(NodeId(0), NodeId(0), StepMode::Evade), Some(Direction::Right));
    }

    #[test]
    fn unreachable_target_has_no_step() {
        let mut b = MazeBuilder::new();
        let a = b.add_node(GridPoint::new(0, 0));
        let c = b.add_node(GridPoint::new(1, 0));
        let island = b.add_node(GridPoint::new(5, 5));
        b.connect(a, Direction::Right, c).unwrap();
        let maze = b.build().unwrap();

        assert_eq!(maze.path_distance(a, island), None);
        assert_eq!(maze.next_step(a, island, StepMode::Approach), None);
        assert_eq!(maze.next_step(a, island, StepMode::Evade), None);
    }

    #[test]
    fn neighbor_lookup() {
        let maze = super::helpers::ring().maze;
        assert_eq!(maze.neighbor(NodeId(0), Direction::Right), Some(NodeId(1)));
        assert_eq!(maze.neighbor(NodeId(0), Direction::Down), Some(NodeId(5)));
        assert_eq!(maze.neighbor(NodeId(0), Direction::Up), None);
        assert_eq!(maze.neighbor(NodeId(0), Direction::Neutral), Some(NodeId(0)));
        assert_eq!(maze.neighbor(NodeId(99), Direction::Neutral), None);
    }

    #[test]
    fn coordinate_metrics() {
        let maze = super::helpers::ring().maze;
        // (1,1) → (5,3)
        assert_eq!(maze.manhattan_distance(NodeId(0), NodeId(11)), Some(6));
        let e = maze.euclidean_distance(NodeId(0), NodeId(11)).unwrap();
        assert!((e - 20f64.sqrt()).abs() < 1e-9);
    }
}

// ── CSV loader ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod csv_loader {
    use std::io::{Cursor, Write};

    use mz_core::NodeId;

    use crate::{DistanceOracle, MazeError, load_nodes_csv, load_nodes_reader};

    const LINE: &str = "\
node,x,y,up,right,down,left,pill,power_pill
0,0,0,-1,1,-1,-1,0,-1
1,1,0,-1,2,-1,0,-1,-1
2,2,0,-1,-1,-1,1,-1,0
";

    #[test]
    fn loads_line_from_reader() {
        let maze = load_nodes_reader(Cursor::new(LINE)).unwrap();
        assert_eq!(maze.node_count(), 3);
        assert_eq!(maze.pill_nodes(), &[NodeId(0)]);
        assert_eq!(maze.power_pill_nodes(), &[NodeId(2)]);
        assert_eq!(maze.path_distance(NodeId(0), NodeId(2)), Some(2));
    }

    #[test]
    fn loads_line_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(LINE.as_bytes()).unwrap();
        let maze = load_nodes_csv(file.path()).unwrap();
        assert_eq!(maze.node_count(), 3);
    }

    #[test]
    fn out_of_order_ids_error() {
        let csv = "node,x,y,up,right,down,left,pill,power_pill\n1,0,0,-1,-1,-1,-1,-1,-1\n";
        let result = load_nodes_reader(Cursor::new(csv));
        assert!(matches!(result, Err(MazeError::Parse(_))));
    }

    #[test]
    fn dangling_neighbor_errors() {
        let csv = "node,x,y,up,right,down,left,pill,power_pill\n0,0,0,-1,7,-1,-1,-1,-1\n";
        let result = load_nodes_reader(Cursor::new(csv));
        assert!(matches!(result, Err(MazeError::NodeNotFound(NodeId(7)))));
    }

    #[test]
    fn missing_file_is_io_error() {
        let result = load_nodes_csv(std::path::Path::new("/nonexistent/maze.csv"));
        assert!(matches!(result, Err(MazeError::Io(_))));
    }
}
