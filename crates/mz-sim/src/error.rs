use mz_behavior::BehaviorError;
use mz_core::MzError;
use mz_maze::MazeError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("game configuration error: {0}")]
    Config(String),

    #[error(transparent)]
    Core(#[from] MzError),

    #[error("maze error: {0}")]
    Maze(#[from] MazeError),

    /// The controller broke its own contract; the run cannot continue.
    #[error("controller failed: {0}")]
    Controller(#[from] BehaviorError),
}

pub type SimResult<T> = Result<T, SimError>;
