//! Movement directions and the step-selection policy flag.
//!
//! The four cardinal directions double as indices into a maze node's
//! neighbor array (`Up = 0, Right = 1, Down = 2, Left = 3`).  `Neutral`
//! means "stay put" and never indexes anything.

/// A single-tick movement order.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Direction {
    Up,
    Right,
    Down,
    Left,
    /// No movement this tick.
    #[default]
    Neutral,
}

impl Direction {
    /// The four cardinal directions in neighbor-array order.  Iteration in
    /// this order is the tie-break for every step selection.
    pub const CARDINAL: [Direction; 4] =
        [Direction::Up, Direction::Right, Direction::Down, Direction::Left];

    /// Neighbor-array slot for a cardinal direction; `None` for `Neutral`.
    #[inline]
    pub fn slot(self) -> Option<usize> {
        match self {
            Direction::Up      => Some(0),
            Direction::Right   => Some(1),
            Direction::Down    => Some(2),
            Direction::Left    => Some(3),
            Direction::Neutral => None,
        }
    }

    /// The direction pointing back the way this one came.
    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up      => Direction::Down,
            Direction::Right   => Direction::Left,
            Direction::Down    => Direction::Up,
            Direction::Left    => Direction::Right,
            Direction::Neutral => Direction::Neutral,
        }
    }

    /// `(dx, dy)` unit offset on the grid (`y` grows downward).
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::Up      => (0, -1),
            Direction::Right   => (1, 0),
            Direction::Down    => (0, 1),
            Direction::Left    => (-1, 0),
            Direction::Neutral => (0, 0),
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::Up      => "up",
            Direction::Right   => "right",
            Direction::Down    => "down",
            Direction::Left    => "left",
            Direction::Neutral => "neutral",
        }
    }
}

impl std::fmt::Display for Direction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Policy flag for choosing the next step relative to a target node.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StepMode {
    /// Advance along the globally shortest path to the target.
    Approach,
    /// Move to the neighbor that is farthest (by path) from the target.
    Evade,
}

impl StepMode {
    /// `Approach` when `toward` is true, `Evade` otherwise.
    #[inline]
    pub fn toward(toward: bool) -> Self {
        if toward { StepMode::Approach } else { StepMode::Evade }
    }
}
