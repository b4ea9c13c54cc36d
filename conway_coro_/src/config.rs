// config.rs - Front-end settings: defaults, environment overrides, grid sizing

use std::time::Duration;

use tracing::warn;

pub const CELL_SIZE: f32 = 15.0;
pub const STEP_INTERVAL: Duration = Duration::from_millis(150);

/// Rows per column when the grid is sized from the window width.
const ROWS_PER_COL: f32 = 1.25;

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub window_width: f32,
    pub window_height: f32,
    pub cell_size: f32,
    pub step_interval: Duration,
    /// Explicit grid size; derived from the window when unset.
    pub rows: Option<usize>,
    pub cols: Option<usize>,
    pub random_seed: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            window_width: 800.0,
            window_height: 950.0,
            cell_size: CELL_SIZE,
            step_interval: STEP_INTERVAL,
            rows: None,
            cols: None,
            random_seed: 0,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        let mut config = Self::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Applies `CONWAY_*` overrides read through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        if let Some(rows) = parse::<usize>(&lookup, "CONWAY_ROWS") {
            self.rows = Some(rows);
        }
        if let Some(cols) = parse::<usize>(&lookup, "CONWAY_COLS") {
            self.cols = Some(cols);
        }
        if let Some(size) = parse::<f32>(&lookup, "CONWAY_CELL_SIZE") {
            if size > 0.0 {
                self.cell_size = size;
            } else {
                warn!(size, "ignoring non-positive CONWAY_CELL_SIZE");
            }
        }
        if let Some(ms) = parse::<u64>(&lookup, "CONWAY_STEP_MS") {
            self.step_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(seed) = parse::<u64>(&lookup, "CONWAY_SEED") {
            self.random_seed = seed;
        }
    }

    /// Grid size as (rows, cols). Explicit values win; otherwise the column
    /// count comes from how many cells fit across the window and the grid is
    /// a quarter taller than it is wide.
    pub fn grid_dimensions(&self) -> (usize, usize) {
        let (derived_rows, derived_cols) = dimensions_for_width(self.window_width, self.cell_size);
        (self.rows.unwrap_or(derived_rows), self.cols.unwrap_or(derived_cols))
    }
}

pub fn dimensions_for_width(width: f32, cell_size: f32) -> (usize, usize) {
    let cols = ((width / cell_size).floor() as usize).max(1);
    let rows = ((cols as f32 * ROWS_PER_COL).floor() as usize).max(1);
    (rows, cols)
}

fn parse<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    let raw = lookup(key)?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "ignoring unparseable override");
            None
        }
    }
}
