use eg_core::AgentId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum AgentError {
    #[error("{what} length {got} does not match agent count {expected}")]
    CountMismatch {
        expected: usize,
        got:      usize,
        what:     &'static str,
    },

    #[error("{0} is not in a population of {1}")]
    UnknownAgent(AgentId, usize),

    /// A neighbour row entry that is neither the sentinel nor another agent
    /// of the population.
    #[error("{neighbor} is not a valid neighbour of {agent}")]
    InvalidNeighbor {
        agent:    AgentId,
        neighbor: AgentId,
    },
}

pub type AgentResult<T> = Result<T, AgentError>;
