//! Conway's Game of Life on a fixed-size torus.
//!
//! The crate has no UI dependency. A front-end drives it through [`Store`]:
//! it dispatches [`Intent`]s and re-renders from the [`SimulationState`]
//! snapshots the store publishes.
//!
//! ```
//! use conway::{Intent, Simulation, Status, Store};
//!
//! let mut store = Store::new(Simulation::new(5, 5)?);
//! for col in 1..4 {
//!     store.dispatch(Intent::ToggleCell { row: 2, col })?;
//! }
//! let state = store.dispatch(Intent::Step)?;
//! assert_eq!(state.generation, 1);
//! assert_eq!(state.status(), Status::Paused);
//! # Ok::<(), conway::GridError>(())
//! ```

pub mod error;
pub mod grid;
pub mod patterns;
pub mod rule;
pub mod simulation;
pub mod status;
pub mod store;

pub use error::{GridError, Result};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use simulation::{Phase, Simulation, SimulationState};
pub use status::Status;
pub use store::{Intent, Store};
