//! Dense row-major 2D storage for per-cell generation results.

/// A fixed-size 2D array indexed by tile coordinates.
///
/// Lookups outside the grid clamp to the nearest edge cell. The biome map
/// relies on this for rows above the world width; cave and ore masks are
/// built tall enough that they never clamp vertically.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid<T> {
    width: u32,
    height: u32,
    cells: Vec<T>,
}

impl<T> Grid<T> {
    /// Build a grid by evaluating `f(x, y)` for every cell, row by row.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(i32, i32) -> T) -> Self {
        let mut cells = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height as i32 {
            for x in 0..width as i32 {
                cells.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Grid width in cells.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the cell at `(x, y)`, clamping out-of-range coordinates.
    ///
    /// # Panics
    ///
    /// Panics if the grid is empty.
    pub fn get(&self, x: i32, y: i32) -> &T {
        let cx = x.clamp(0, self.width as i32 - 1) as usize;
        let cy = y.clamp(0, self.height as i32 - 1) as usize;
        &self.cells[cy * self.width as usize + cx]
    }

    /// Iterate all cells in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }
}
