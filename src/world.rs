use crate::config::*;
use bevy::log::info;
use bevy::prelude::*;
use rand::Rng;
use std::collections::HashMap;
use std::ops::{BitAnd, BitOr, BitOrAssign};

/// Terrain and overlay flags stored for one grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Cell(pub u8);

impl Cell {
    pub const EMPTY: Cell = Cell(0);
    pub const GRASS: Cell = Cell(1 << 0);
    pub const WATER: Cell = Cell(1 << 1);
    pub const SNOW: Cell = Cell(1 << 2);
    pub const FOOD: Cell = Cell(1 << 3);
    pub const HAZARD: Cell = Cell(1 << 4);

    /// Permanent ground types; everything else is a perishable overlay
    pub const TERRAIN_MASK: Cell = Cell(Self::GRASS.0 | Self::WATER.0 | Self::SNOW.0);

    /// Value of every cell without a stored entry
    pub const DEFAULT: Cell = Self::GRASS;

    pub fn contains(self, other: Cell) -> bool {
        other.0 != 0 && self.0 & other.0 == other.0
    }

    pub fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Only the ground-type bits of this cell
    pub fn terrain(self) -> Cell {
        self & Self::TERRAIN_MASK
    }

    pub fn has_overlay(self) -> bool {
        self.terrain() != self
    }
}

impl BitOr for Cell {
    type Output = Cell;

    fn bitor(self, rhs: Cell) -> Cell {
        Cell(self.0 | rhs.0)
    }
}

impl BitOrAssign for Cell {
    fn bitor_assign(&mut self, rhs: Cell) {
        self.0 |= rhs.0;
    }
}

impl BitAnd for Cell {
    type Output = Cell;

    fn bitand(self, rhs: Cell) -> Cell {
        Cell(self.0 & rhs.0)
    }
}

/// Map any coordinate pair onto the canonical tile in [0, W) x [0, H)
pub fn wrap(x: i32, y: i32) -> (i32, i32) {
    (x.rem_euclid(WORLD_WIDTH), y.rem_euclid(WORLD_HEIGHT))
}

/// Sparse toroidal grid: stored overrides on top of a grass default
#[derive(Resource, Debug, Clone, Default)]
pub struct WorldGrid {
    cells: HashMap<(i32, i32), Cell>,
}

impl WorldGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, x: i32, y: i32) -> Cell {
        self.cells.get(&wrap(x, y)).copied().unwrap_or(Cell::DEFAULT)
    }

    /// Overwrite a cell. Grass and empty values drop the entry instead.
    pub fn put(&mut self, x: i32, y: i32, cell: Cell) {
        let key = wrap(x, y);
        if cell.is_empty() || cell == Cell::DEFAULT {
            self.cells.remove(&key);
        } else {
            self.cells.insert(key, cell);
        }
    }

    /// OR flags into a cell, starting from the default if it has no entry
    pub fn add_flags(&mut self, x: i32, y: i32, flags: Cell) {
        let key = wrap(x, y);
        let entry = self.cells.entry(key).or_insert(Cell::DEFAULT);
        *entry |= flags;
    }

    /// Remove every perishable overlay from a cell, keeping its terrain
    pub fn strip_overlays(&mut self, x: i32, y: i32) {
        let cell = self.get(x, y);
        if cell.has_overlay() {
            self.put(x, y, cell.terrain());
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    /// Clear the grid and scatter hazards, then food, on uniformly random cells.
    /// Draws may land on the same cell; flags are simply ORed together.
    pub fn randomize<R: Rng + ?Sized>(&mut self, rng: &mut R, hazard_count: usize, food_count: usize) {
        self.clear();

        for _ in 0..hazard_count {
            let x = rng.gen_range(0..WORLD_WIDTH);
            let y = rng.gen_range(0..WORLD_HEIGHT);
            self.add_flags(x, y, Cell::HAZARD);
        }

        for _ in 0..food_count {
            let x = rng.gen_range(0..WORLD_WIDTH);
            let y = rng.gen_range(0..WORLD_HEIGHT);
            self.add_flags(x, y, Cell::FOOD);
        }

        info!(
            "World populated: {} hazard draws, {} food draws, {} flagged cells",
            hazard_count,
            food_count,
            self.cells.len()
        );
    }

    /// Cells that differ from the default, in no particular order
    pub fn stored(&self) -> impl Iterator<Item = ((i32, i32), Cell)> + '_ {
        self.cells.iter().map(|(&pos, &cell)| (pos, cell))
    }

    /// Every tile of the grid, row by row, with its effective flags
    pub fn iter(&self) -> impl Iterator<Item = ((i32, i32), Cell)> + '_ {
        (0..WORLD_HEIGHT)
            .flat_map(|y| (0..WORLD_WIDTH).map(move |x| (x, y)))
            .map(|(x, y)| ((x, y), self.get(x, y)))
    }

    pub fn stored_len(&self) -> usize {
        self.cells.len()
    }

    pub fn count_with(&self, flags: Cell) -> usize {
        self.cells.values().filter(|cell| cell.contains(flags)).count()
    }
}
