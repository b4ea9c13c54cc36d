// patterns.rs - Named starting configurations and a seeded random fill

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use crate::error::{GridError, Result};
use crate::grid::Grid;

/// Offsets are relative to the pattern's top-left corner.
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
    Pattern {
        name: "Block",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1)],
    },
    Pattern {
        name: "Pulsar",
        cells: &[
            // Top section
            (0, 2), (0, 3), (0, 4), (0, 8), (0, 9), (0, 10),
            (2, 0), (2, 5), (2, 7), (2, 12),
            (3, 0), (3, 5), (3, 7), (3, 12),
            (4, 0), (4, 5), (4, 7), (4, 12),
            (5, 2), (5, 3), (5, 4), (5, 8), (5, 9), (5, 10),
            // Bottom section (mirrored)
            (7, 2), (7, 3), (7, 4), (7, 8), (7, 9), (7, 10),
            (8, 0), (8, 5), (8, 7), (8, 12),
            (9, 0), (9, 5), (9, 7), (9, 12),
            (10, 0), (10, 5), (10, 7), (10, 12),
            (12, 2), (12, 3), (12, 4), (12, 8), (12, 9), (12, 10),
        ],
    },
    Pattern {
        name: "R-pentomino",
        cells: &[(0, 1), (0, 2), (1, 0), (1, 1), (2, 1)],
    },
    Pattern {
        name: "Gosper Glider Gun",
        cells: &[
            (4, 0), (4, 1), (5, 0), (5, 1),
            (4, 10), (5, 10), (6, 10), (3, 11), (7, 11), (2, 12), (8, 12),
            (2, 13), (8, 13), (5, 14), (3, 15), (7, 15), (4, 16), (5, 16),
            (6, 16), (5, 17), (2, 20), (3, 20), (4, 20), (2, 21), (3, 21),
            (4, 21), (1, 22), (5, 22), (0, 24), (1, 24), (5, 24), (6, 24),
            (2, 34), (3, 34), (2, 35), (3, 35),
        ],
    },
];

pub fn find(name: &str) -> Option<&'static Pattern> {
    PATTERNS.iter().find(|p| p.name.eq_ignore_ascii_case(name))
}

impl Pattern {
    /// Bounding box as (height, width).
    pub fn size(&self) -> (usize, usize) {
        self.cells
            .iter()
            .fold((0, 0), |(h, w), &(r, c)| (h.max(r + 1), w.max(c + 1)))
    }

    /// Centres the pattern on a fresh `rows` x `cols` grid. Offsets wrap
    /// around the edges when the pattern does not fit.
    pub fn place(&self, rows: usize, cols: usize) -> Result<Grid> {
        let (height, width) = self.size();
        let top = rows.saturating_sub(height) / 2;
        let left = cols.saturating_sub(width) / 2;

        if rows == 0 || cols == 0 {
            return Err(GridError::InvalidDimension { rows, cols });
        }

        let live: Vec<_> = self
            .cells
            .iter()
            .map(|&(r, c)| ((top + r) % rows, (left + c) % cols))
            .collect();
        Grid::with_live_cells(rows, cols, &live)
    }
}

/// Deterministic fill with roughly a third of the cells alive.
pub fn random_grid(rows: usize, cols: usize, seed_value: u64) -> Result<Grid> {
    let mut hasher = DefaultHasher::new();
    seed_value.hash(&mut hasher);
    let mut seed = hasher.finish();

    Grid::new(rows, cols, |_, _| {
        seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        (seed >> 33) % 3 == 0
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rule::next_generation;
    use pretty_assertions::assert_eq;

    #[test]
    fn names_are_unique() {
        for (i, a) in PATTERNS.iter().enumerate() {
            for b in &PATTERNS[i + 1..] {
                assert_ne!(a.name, b.name);
            }
        }
    }

    #[test]
    fn find_ignores_case() {
        assert_eq!(find("gosper glider gun").map(|p| p.cells.len()), Some(36));
        assert!(find("nope").is_none());
    }

    #[test]
    fn sizes() {
        assert_eq!(find("Pulsar").unwrap().size(), (13, 13));
        assert_eq!(find("Gosper Glider Gun").unwrap().size(), (9, 36));
        assert_eq!(find("Blinker").unwrap().size(), (1, 3));
    }

    #[test]
    fn place_centres_pattern() {
        let grid = find("Block").unwrap().place(6, 6).unwrap();
        assert_eq!(grid.to_string(), "......\n......\n..##..\n..##..\n......\n......");
    }

    #[test]
    fn place_wraps_oversized_pattern() {
        let grid = find("Gosper Glider Gun").unwrap().place(10, 20).unwrap();
        assert_eq!(grid.dimensions(), (10, 20));
        assert!(grid.population() > 0);
    }

    #[test]
    fn place_rejects_empty_grid() {
        assert!(find("Glider").unwrap().place(0, 5).is_err());
    }

    #[test]
    fn pulsar_has_period_three() {
        let start = find("Pulsar").unwrap().place(25, 25).unwrap();
        let one = next_generation(&start);
        let three = next_generation(&next_generation(&one));
        assert_ne!(start, one);
        assert_eq!(start, three);
    }

    #[test]
    fn random_grid_is_deterministic() {
        let a = random_grid(20, 30, 7).unwrap();
        let b = random_grid(20, 30, 7).unwrap();
        assert_eq!(a, b);
        assert_ne!(a, random_grid(20, 30, 8).unwrap());

        let population = a.population();
        assert!(population > 100 && population < 300, "population {population}");
    }
}
