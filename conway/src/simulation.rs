// simulation.rs - Generation counter, pause state and snapshot replacement
//
// Every operation builds a new SimulationState and swaps it in with a single
// assignment. Readers holding an older Arc keep seeing that snapshot intact.

use std::sync::Arc;

use tracing::{debug, trace};

use crate::error::{GridError, Result};
use crate::grid::Grid;
use crate::rule;
use crate::status::{self, Status};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Paused,
    Running,
}

/// One immutable snapshot of a running session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimulationState {
    pub grid: Grid,
    pub generation: u64,
    pub is_paused: bool,
    pub is_still_life: bool,
}

impl SimulationState {
    fn initial(rows: usize, cols: usize) -> Result<Self> {
        Ok(Self {
            grid: Grid::dead(rows, cols)?,
            generation: 0,
            is_paused: true,
            is_still_life: false,
        })
    }

    pub fn population(&self) -> usize {
        status::population(self)
    }

    pub fn status(&self) -> Status {
        status::status(self)
    }

    pub fn phase(&self) -> Phase {
        if self.is_paused { Phase::Paused } else { Phase::Running }
    }
}

pub struct Simulation {
    max_rows: usize,
    max_cols: usize,
    /// All-dead grid of the fixed size, cloned on every reset.
    blank: Grid,
    state: Arc<SimulationState>,
}

impl Simulation {
    pub fn new(max_rows: usize, max_cols: usize) -> Result<Self> {
        let state = SimulationState::initial(max_rows, max_cols)?;
        debug!(rows = max_rows, cols = max_cols, "simulation created");
        Ok(Self {
            max_rows,
            max_cols,
            blank: state.grid.clone(),
            state: Arc::new(state),
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        (self.max_rows, self.max_cols)
    }

    /// The current snapshot. Cheap to clone and safe to hold across updates.
    pub fn state(&self) -> Arc<SimulationState> {
        Arc::clone(&self.state)
    }

    pub fn reset(&mut self) {
        self.replace(SimulationState {
            grid: self.blank.clone(),
            generation: 0,
            is_paused: true,
            is_still_life: false,
        });
        debug!("simulation reset");
    }

    /// Flips one cell. The still-life flag is left as it was; only `advance`
    /// recomputes it.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        let alive = self.state.grid.get(row, col)?;
        let grid = self.state.grid.with_cell(row, col, !alive)?;
        self.replace(SimulationState {
            grid,
            ..(*self.state).clone()
        });
        trace!(row, col, alive = !alive, "cell toggled");
        Ok(())
    }

    /// `Some(p)` sets the flag, `None` flips it.
    pub fn set_paused(&mut self, paused: Option<bool>) {
        let is_paused = paused.unwrap_or(!self.state.is_paused);
        if is_paused != self.state.is_paused {
            debug!(is_paused, "pause state changed");
        }
        self.replace(SimulationState {
            is_paused,
            ..(*self.state).clone()
        });
    }

    pub fn advance(&mut self) {
        let current = &self.state;
        let grid = rule::next_generation(&current.grid);

        let new_population = grid.population();
        let old_population = current.grid.population();
        let is_still_life = new_population == old_population && grid == current.grid;
        let is_paused = current.is_paused || new_population == 0 || is_still_life;
        let generation = current.generation + 1;

        trace!(generation, population = new_population, "advanced");
        if is_paused && !current.is_paused {
            debug!(generation, population = new_population, is_still_life, "auto-paused");
        }

        self.replace(SimulationState {
            grid,
            generation,
            is_paused,
            is_still_life,
        });
    }

    /// Single step: pause, then advance once.
    pub fn step(&mut self) {
        self.set_paused(Some(true));
        self.advance();
    }

    /// Loads a prepared grid as a fresh generation 0.
    pub fn seed(&mut self, grid: Grid) -> Result<()> {
        if grid.dimensions() != self.dimensions() {
            return Err(GridError::DimensionMismatch {
                expected: self.dimensions(),
                found: grid.dimensions(),
            });
        }
        debug!(population = grid.population(), "grid seeded");
        self.replace(SimulationState {
            grid,
            generation: 0,
            is_paused: true,
            is_still_life: false,
        });
        Ok(())
    }

    fn replace(&mut self, next: SimulationState) {
        self.state = Arc::new(next);
    }
}
