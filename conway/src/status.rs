// status.rs - Human readable status derived from a snapshot

use std::fmt;

use crate::simulation::SimulationState;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Status {
    StillLife,
    Progressing,
    /// Paused at generation 0 with nothing alive.
    Empty,
    /// Paused at generation 0 with a seeded population.
    Ready,
    Extinct,
    Paused,
}

impl Status {
    pub fn message(self) -> &'static str {
        match self {
            Status::StillLife => "Reached Still Life.",
            Status::Progressing => "Progressing...",
            Status::Empty => "Ready. Tap to add some life.",
            Status::Ready => "Ready to go.",
            Status::Extinct => "Everyone died.",
            Status::Paused => "Paused",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

pub fn population(state: &SimulationState) -> usize {
    state.grid.count_where(|alive| alive)
}

/// First matching rule wins; the still-life flag outranks the pause flag.
pub fn status(state: &SimulationState) -> Status {
    if state.is_still_life {
        return Status::StillLife;
    }
    if !state.is_paused {
        return Status::Progressing;
    }

    match (state.generation == 0, population(state) == 0) {
        (true, true) => Status::Empty,
        (true, false) => Status::Ready,
        (false, true) => Status::Extinct,
        (false, false) => Status::Paused,
    }
}
