// app.rs - Front-end state: store subscription, step timer, view settings

use std::sync::Arc;
use std::time::Duration;

use conway::{Intent, Phase, Simulation, SimulationState, Store, patterns};
use egui::Color32;
use tokio::runtime::Runtime;
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::config::AppConfig;
use crate::timer::StepTimer;

pub struct GameOfLife {
    store: Store,
    subscription: watch::Receiver<Arc<SimulationState>>,

    /// Last snapshot received from the store; everything on screen comes from here.
    pub snapshot: Arc<SimulationState>,

    pub cell_size: f32,
    pub live_color: Color32,
    pub dead_color: Color32,
    pub selected_pattern: usize,
    random_seed: u64,

    timer: StepTimer,
    runtime: Runtime,
}

impl GameOfLife {
    pub fn new(config: &AppConfig, runtime: Runtime) -> conway::Result<Self> {
        let (rows, cols) = config.grid_dimensions();
        let store = Store::new(Simulation::new(rows, cols)?);
        let subscription = store.subscribe();
        let snapshot = store.snapshot();
        info!(rows, cols, step_ms = config.step_interval.as_millis() as u64, "game board ready");

        Ok(Self {
            store,
            subscription,
            snapshot,
            cell_size: config.cell_size,
            live_color: Color32::BLACK,
            dead_color: Color32::WHITE,
            selected_pattern: 0,
            random_seed: config.random_seed,
            timer: StepTimer::new(config.step_interval),
            runtime,
        })
    }

    pub fn dimensions(&self) -> (usize, usize) {
        self.store.dimensions()
    }

    pub fn step_interval(&self) -> Duration {
        self.timer.interval()
    }

    /// Forwards one intent to the store and brings the timer in line with
    /// the resulting phase.
    pub fn dispatch(&mut self, ctx: &egui::Context, intent: Intent) {
        if let Err(err) = self.store.dispatch(intent) {
            warn!(%err, "ignored intent");
        }
        self.refresh();
        self.sync_timer(ctx);
    }

    pub fn apply_selected_pattern(&mut self, ctx: &egui::Context) {
        let Some(pattern) = patterns::PATTERNS.get(self.selected_pattern) else {
            return;
        };
        let (rows, cols) = self.dimensions();
        match pattern.place(rows, cols) {
            Ok(grid) => {
                debug!(pattern = pattern.name, "applying pattern");
                self.dispatch(ctx, Intent::Seed(grid));
            }
            Err(err) => warn!(%err, pattern = pattern.name, "pattern could not be placed"),
        }
    }

    pub fn apply_random_pattern(&mut self, ctx: &egui::Context) {
        let (rows, cols) = self.dimensions();
        match patterns::random_grid(rows, cols, self.random_seed) {
            Ok(grid) => {
                self.random_seed = self.random_seed.wrapping_add(1);
                self.dispatch(ctx, Intent::Seed(grid));
            }
            Err(err) => warn!(%err, "random fill failed"),
        }
    }

    pub fn set_step_interval(&mut self, ctx: &egui::Context, interval: Duration) {
        let ctx = ctx.clone();
        self.timer
            .set_interval(self.runtime.handle(), interval, move || ctx.request_repaint());
    }

    /// Consumes pending timer ticks, advancing once per tick while running.
    pub fn drive(&mut self, ctx: &egui::Context) {
        while self.timer.poll_tick() {
            if self.snapshot.phase() != Phase::Running {
                break;
            }
            self.dispatch(ctx, Intent::Advance);
        }
    }

    fn refresh(&mut self) {
        if self.subscription.has_changed().unwrap_or(false) {
            self.snapshot = self.subscription.borrow_and_update().clone();
        }
    }

    /// Running snapshots need a live timer; paused ones (including the
    /// auto-pause on extinction or still life) must not have one.
    fn sync_timer(&mut self, ctx: &egui::Context) {
        match (self.snapshot.phase(), self.timer.is_running()) {
            (Phase::Running, false) => {
                let ctx = ctx.clone();
                self.timer
                    .start(self.runtime.handle(), move || ctx.request_repaint());
            }
            (Phase::Paused, true) => {
                self.timer.stop();
                debug!(
                    generation = self.snapshot.generation,
                    status = %self.snapshot.status(),
                    "run loop halted"
                );
            }
            _ => {}
        }
    }
}
