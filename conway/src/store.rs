// store.rs - Unidirectional store over a Simulation
//
// The UI hands intents to `dispatch`; every successful intent publishes the
// resulting snapshot on a watch channel. Subscribers always receive a whole
// `Arc<SimulationState>`, never a half-applied one.

use std::sync::Arc;

use tokio::sync::watch;
use tracing::warn;

use crate::error::Result;
use crate::grid::Grid;
use crate::simulation::{Simulation, SimulationState};

/// User actions forwarded by a front-end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    ToggleCell { row: usize, col: usize },
    SetPaused(Option<bool>),
    Advance,
    Step,
    Reset,
    Seed(Grid),
}

pub struct Store {
    simulation: Simulation,
    publisher: watch::Sender<Arc<SimulationState>>,
}

impl Store {
    pub fn new(simulation: Simulation) -> Self {
        let (publisher, _) = watch::channel(simulation.state());
        Self { simulation, publisher }
    }

    pub fn subscribe(&self) -> watch::Receiver<Arc<SimulationState>> {
        self.publisher.subscribe()
    }

    pub fn snapshot(&self) -> Arc<SimulationState> {
        self.simulation.state()
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.simulation.dimensions()
    }

    /// Applies one intent and publishes the new snapshot. Nothing is
    /// published when the intent is rejected.
    pub fn dispatch(&mut self, intent: Intent) -> Result<Arc<SimulationState>> {
        let applied = match intent {
            Intent::ToggleCell { row, col } => self.simulation.toggle_cell(row, col),
            Intent::SetPaused(paused) => {
                self.simulation.set_paused(paused);
                Ok(())
            }
            Intent::Advance => {
                self.simulation.advance();
                Ok(())
            }
            Intent::Step => {
                self.simulation.step();
                Ok(())
            }
            Intent::Reset => {
                self.simulation.reset();
                Ok(())
            }
            Intent::Seed(grid) => self.simulation.seed(grid),
        };

        if let Err(err) = applied {
            warn!(%err, "intent rejected");
            return Err(err);
        }

        let snapshot = self.simulation.state();
        self.publisher.send_replace(Arc::clone(&snapshot));
        Ok(snapshot)
    }
}
