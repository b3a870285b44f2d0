//! Tile grid and world queries
//!
//! The world is a grid of solid/empty tiles, row 0 at the bottom (y-up).
//! Rows may be appended as the level grows upward between ticks; existing
//! cells never change mid-tick. Every query treats out-of-range coordinates
//! as solid, which keeps bodies inside the playable area and keeps the
//! collision resolver total even against not-yet-generated regions.

use glam::{IVec2, Vec2};

use crate::sim::BodyRect;
use crate::{consts::TILE_SIZE, from_grid, to_grid};

/// One grid cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tile {
    #[default]
    Empty,
    Wall,
}

/// Static-per-segment map of solid/empty cells
#[derive(Debug, Clone, Default)]
pub struct TileWorld {
    /// Rows from bottom to top; each row is `width` cells wide
    rows: Vec<Vec<Tile>>,
    width: usize,
}

impl TileWorld {
    /// Create an empty world of the given width in tiles
    pub fn new(width: usize) -> Self {
        Self {
            rows: Vec::new(),
            width,
        }
    }

    /// Build a world from an ascii sketch: `#` wall, anything else empty.
    /// The first line is the topmost row.
    pub fn from_ascii(map: &str) -> Self {
        let rows: Vec<Vec<Tile>> = map
            .lines()
            .rev()
            .map(|line| {
                line.chars()
                    .map(|c| if c == '#' { Tile::Wall } else { Tile::Empty })
                    .collect()
            })
            .collect();
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        Self { rows, width }
    }

    /// Width in tiles
    pub fn width(&self) -> usize {
        self.width
    }

    /// Height in tiles
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Height of the allocated grid in world units
    pub fn height_world(&self) -> i32 {
        self.rows.len() as i32 * TILE_SIZE
    }

    /// Append rows on top of the grid (the level growing upward).
    /// Each row is truncated or padded with walls to the world width.
    pub fn push_rows<I>(&mut self, rows: I)
    where
        I: IntoIterator<Item = Vec<Tile>>,
    {
        let before = self.rows.len();
        for mut row in rows {
            row.resize(self.width, Tile::Wall);
            self.rows.push(row);
        }
        log::debug!("grid grew from {} to {} rows", before, self.rows.len());
    }

    /// Tile at a grid cell; out-of-range cells are walls
    pub fn tile(&self, cell: IVec2) -> Tile {
        if cell.x < 0 || cell.y < 0 {
            return Tile::Wall;
        }
        match self.rows.get(cell.y as usize) {
            Some(row) => *row.get(cell.x as usize).unwrap_or(&Tile::Wall),
            None => Tile::Wall,
        }
    }

    /// Is the world point inside a wall? Out-of-range in any direction
    /// counts as a wall.
    pub fn is_wall(&self, p: IVec2) -> bool {
        self.tile(to_grid(p)) == Tile::Wall
    }

    /// Is there a wall directly beneath either bottom corner of the box?
    pub fn is_on_ground(&self, rect: &BodyRect) -> bool {
        let [left, right] = rect.bottom_corners();
        self.is_wall(left + IVec2::NEG_Y) || self.is_wall(right + IVec2::NEG_Y)
    }

    /// Walk the grid cells a ray visits, stopping before the first wall.
    ///
    /// `origin` and `direction` are in grid (tile) coordinates;
    /// `max_distance` bounds the walk in grid units. Used by AI for
    /// line-of-sight checks.
    pub fn raycast(&self, origin: Vec2, direction: Vec2, max_distance: f32) -> Raycast<'_> {
        let delta = direction.abs().as_dvec2();
        let curr = origin.floor().as_ivec2();
        let target = (origin + direction * max_distance).floor().as_ivec2();

        let mut inc = IVec2::ZERO;
        let mut remaining: i64 = 1;
        let mut error: f64;

        if direction.x == 0.0 {
            error = f64::INFINITY;
        } else if direction.x > 0.0 {
            inc.x = 1;
            remaining += (target.x - curr.x) as i64;
            error = (origin.x.ceil() - origin.x) as f64 * delta.y;
        } else {
            inc.x = -1;
            remaining += (curr.x - target.x) as i64;
            error = (origin.x - origin.x.floor()) as f64 * delta.y;
        }

        if direction.y == 0.0 {
            error -= f64::INFINITY;
        } else if direction.y > 0.0 {
            inc.y = 1;
            remaining += (target.y - curr.y) as i64;
            error -= (origin.y.ceil() - origin.y) as f64 * delta.x;
        } else {
            inc.y = -1;
            remaining += (curr.y - target.y) as i64;
            error -= (origin.y - origin.y.floor()) as f64 * delta.x;
        }

        Raycast {
            world: self,
            curr,
            inc,
            delta,
            error,
            remaining,
        }
    }
}

/// Iterator over the grid cells visited by [`TileWorld::raycast`]
pub struct Raycast<'a> {
    world: &'a TileWorld,
    curr: IVec2,
    inc: IVec2,
    delta: glam::DVec2,
    error: f64,
    remaining: i64,
}

impl Iterator for Raycast<'_> {
    type Item = IVec2;

    fn next(&mut self) -> Option<IVec2> {
        if self.remaining <= 0 || self.world.is_wall(from_grid(self.curr)) {
            return None;
        }
        let cell = self.curr;
        if self.error > 0.0 {
            self.curr.y += self.inc.y;
            self.error -= self.delta.x;
        } else {
            self.curr.x += self.inc.x;
            self.error += self.delta.y;
        }
        self.remaining -= 1;
        Some(cell)
    }
}
