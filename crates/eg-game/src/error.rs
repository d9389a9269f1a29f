use thiserror::Error;

#[derive(Debug, Error)]
pub enum GameError {
    #[error("game configuration error: {0}")]
    Config(String),

    /// A raw strategy code outside the strategy set.  Means corrupted state,
    /// never a transient condition.
    #[error("invalid strategy code {0}")]
    InvalidStrategy(u8),

    #[error("population has {got} agents but the game was built for {expected}")]
    PopulationMismatch {
        expected: usize,
        got:      usize,
    },

    #[error("time step must be finite and non-negative, got {0}")]
    InvalidTimeStep(f64),

    #[error("{what} must be finite, got {value}")]
    NonFiniteTime {
        what:  &'static str,
        value: f64,
    },
}

pub type GameResult<T> = Result<T, GameError>;
