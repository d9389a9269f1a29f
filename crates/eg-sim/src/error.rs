use eg_core::EgError;
use eg_game::GameError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(String),

    #[error("{what} length {got} does not match agent count {expected}")]
    AgentCountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error(transparent)]
    Core(#[from] EgError),

    #[error("game update failed: {0}")]
    Game(#[from] GameError),
}

pub type SimResult<T> = Result<T, SimError>;
