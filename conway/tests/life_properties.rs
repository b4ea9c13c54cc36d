// Behavioural tests for the grid, the rule and the pause state machine.

use conway::{Grid, Intent, Phase, Simulation, Status, Store, rule};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn simulation_with(rows: usize, cols: usize, live: &[(usize, usize)]) -> Simulation {
    let mut sim = Simulation::new(rows, cols).unwrap();
    for &(r, c) in live {
        sim.toggle_cell(r, c).unwrap();
    }
    sim
}

proptest! {
    #[test]
    fn population_matches_initializer(rows in 1usize..24, cols in 1usize..24, salt in any::<u64>()) {
        let init = |r: usize, c: usize| (r as u64 * 31 + c as u64 * 17).wrapping_add(salt) % 5 == 0;

        let expected = (0..rows)
            .flat_map(|r| (0..cols).map(move |c| (r, c)))
            .filter(|&(r, c)| init(r, c))
            .count();

        let grid = Grid::new(rows, cols, init).unwrap();
        prop_assert_eq!(grid.count_where(|v| v), expected);
    }

    #[test]
    fn with_cell_changes_exactly_one_cell(
        rows in 1usize..16,
        cols in 1usize..16,
        pick in any::<(usize, usize)>(),
        value in any::<bool>(),
    ) {
        let original = Grid::new(rows, cols, |r, c| (r + c) % 2 == 0).unwrap();
        let snapshot = original.clone();
        let (row, col) = (pick.0 % rows, pick.1 % cols);

        let updated = original.with_cell(row, col, value).unwrap();

        prop_assert_eq!(&original, &snapshot);
        for (r, c, alive) in updated.iter() {
            if (r, c) == (row, col) {
                prop_assert_eq!(alive, value);
            } else {
                prop_assert_eq!(alive, original.get(r, c).unwrap());
            }
        }
    }
}

#[test]
fn opposite_corners_are_neighbours() {
    for (rows, cols) in [(3, 3), (5, 8), (10, 4)] {
        let grid = Grid::with_live_cells(rows, cols, &[(0, 0)]).unwrap();
        assert_eq!(rule::live_neighbors(&grid, rows - 1, cols - 1), 1);

        let grid = Grid::with_live_cells(rows, cols, &[(rows - 1, cols - 1)]).unwrap();
        assert_eq!(rule::live_neighbors(&grid, 0, 0), 1);
    }
}

#[test]
fn single_cell_torus_overcrowds_itself() {
    let mut sim = simulation_with(1, 1, &[(0, 0)]);
    sim.set_paused(Some(false));
    sim.advance();

    let state = sim.state();
    assert_eq!(state.population(), 0);
    assert_eq!(state.phase(), Phase::Paused);
    assert_eq!(state.status(), Status::Extinct);
}

#[test]
fn toggling_mid_run_keeps_the_loop_going() {
    let mut store = Store::new(Simulation::new(6, 6).unwrap());
    store.dispatch(Intent::SetPaused(Some(false))).unwrap();

    let state = store.dispatch(Intent::ToggleCell { row: 2, col: 2 }).unwrap();
    assert_eq!(state.phase(), Phase::Running);
    assert_eq!(state.generation, 0);
    assert_eq!(state.status(), Status::Progressing);
}

#[test]
fn blinker_oscillates() {
    let horizontal = [(3, 2), (3, 3), (3, 4)];
    let vertical = [(2, 3), (3, 3), (4, 3)];

    let mut sim = simulation_with(7, 7, &horizontal);
    sim.set_paused(Some(false));

    sim.advance();
    let state = sim.state();
    assert_eq!(state.grid, Grid::with_live_cells(7, 7, &vertical).unwrap());
    assert_eq!(state.population(), 3);
    assert!(!state.is_still_life);
    assert_eq!(state.phase(), Phase::Running);

    sim.advance();
    let state = sim.state();
    assert_eq!(state.grid, Grid::with_live_cells(7, 7, &horizontal).unwrap());
    assert_eq!(state.population(), 3);
    assert!(!state.is_still_life);
    assert_eq!(state.generation, 2);
}

#[test]
fn blinker_across_the_seam() {
    // Horizontal line straddling the left/right edge of a 5x5 torus.
    let mut sim = simulation_with(5, 5, &[(2, 4), (2, 0), (2, 1)]);
    sim.advance();
    assert_eq!(
        sim.state().grid,
        Grid::with_live_cells(5, 5, &[(1, 0), (2, 0), (3, 0)]).unwrap()
    );
}

#[test]
fn lone_cell_dies_out() {
    let mut sim = simulation_with(6, 6, &[(2, 3)]);
    sim.set_paused(Some(false));
    sim.advance();

    let state = sim.state();
    assert_eq!(state.population(), 0);
    assert!(state.is_paused);
    assert!(!state.is_still_life);
    assert_eq!(state.status(), Status::Extinct);
    assert_eq!(state.status().message(), "Everyone died.");
}

#[test]
fn block_is_a_still_life() {
    let block = [(2, 2), (2, 3), (3, 2), (3, 3)];
    let mut sim = simulation_with(6, 6, &block);
    sim.set_paused(Some(false));
    sim.advance();

    let state = sim.state();
    assert_eq!(state.grid, Grid::with_live_cells(6, 6, &block).unwrap());
    assert!(state.is_still_life);
    assert!(state.is_paused);
    assert_eq!(state.status().to_string(), "Reached Still Life.");
}

#[test]
fn still_life_flag_survives_toggles_until_next_advance() {
    let mut sim = simulation_with(6, 6, &[(2, 2), (2, 3), (3, 2), (3, 3)]);
    sim.advance();
    assert!(sim.state().is_still_life);

    // Breaking the block does not clear the flag.
    sim.toggle_cell(2, 2).unwrap();
    assert!(sim.state().is_still_life);

    sim.advance();
    assert!(!sim.state().is_still_life);
}

#[test]
fn reset_from_any_state() {
    let mut sim = simulation_with(8, 8, &[(0, 0), (0, 1), (1, 0), (4, 4)]);
    sim.set_paused(Some(false));
    sim.advance();
    sim.advance();
    sim.reset();

    let state = sim.state();
    assert_eq!(state.generation, 0);
    assert!(state.is_paused);
    assert!(!state.is_still_life);
    assert_eq!(state.population(), 0);
    assert_eq!(state.status(), Status::Empty);
}

#[test]
fn pausing_twice_changes_nothing() {
    let mut sim = simulation_with(5, 5, &[(1, 1)]);
    sim.set_paused(Some(true));
    let first = sim.state();
    sim.set_paused(Some(true));
    assert_eq!(*first, *sim.state());
}

#[test]
fn glider_returns_after_a_full_lap() {
    // A glider moves one cell diagonally every 4 generations, so on an
    // 8x8 torus it is back where it started after 32.
    let glider = conway::patterns::find("Glider").unwrap();
    let start = glider.place(8, 8).unwrap();

    let mut store = Store::new(Simulation::new(8, 8).unwrap());
    store.dispatch(Intent::Seed(start.clone())).unwrap();
    store.dispatch(Intent::SetPaused(Some(false))).unwrap();
    for _ in 0..32 {
        store.dispatch(Intent::Advance).unwrap();
    }

    let state = store.snapshot();
    assert_eq!(state.generation, 32);
    assert_eq!(state.grid, start);
    assert_eq!(state.phase(), Phase::Running);
}

#[test]
fn ui_flow_ready_to_progressing() {
    let mut store = Store::new(Simulation::new(10, 10).unwrap());
    assert_eq!(store.snapshot().status(), Status::Empty);

    for col in 4..7 {
        store.dispatch(Intent::ToggleCell { row: 5, col }).unwrap();
    }
    assert_eq!(store.snapshot().status(), Status::Ready);

    let state = store.dispatch(Intent::SetPaused(None)).unwrap();
    assert_eq!(state.status(), Status::Progressing);

    let state = store.dispatch(Intent::Step).unwrap();
    assert_eq!(state.status(), Status::Paused);
    assert_eq!(state.generation, 1);
}
