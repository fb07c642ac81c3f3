//! Binary pixel grid for one rasterized drawing

use super::{HEIGHT, WIDTH};

/// Fixed 256x256 binary canvas, row-major (row = y, column = x).
///
/// Cells start at 0 and only ever transition to 1, so drawing the same
/// strokes twice yields the same canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    cells: Vec<u8>,
}

impl Canvas {
    pub fn new() -> Self {
        Self {
            cells: vec![0; WIDTH * HEIGHT],
        }
    }

    /// Mark the cell at (x, y). Out-of-bounds writes are silent no-ops;
    /// the candidate-row policy in the rasterizer routinely overshoots.
    pub fn set(&mut self, x: i32, y: i32) {
        if x >= 0 && x < WIDTH as i32 && y >= 0 && y < HEIGHT as i32 {
            self.cells[y as usize * WIDTH + x as usize] = 1;
        }
    }

    pub fn get(&self, x: usize, y: usize) -> u8 {
        self.cells[y * WIDTH + x]
    }

    /// Row-major view of all 65536 cells.
    pub fn pixels(&self) -> &[u8] {
        &self.cells
    }

    /// One row of 256 cells.
    pub fn row(&self, y: usize) -> &[u8] {
        &self.cells[y * WIDTH..(y + 1) * WIDTH]
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new()
    }
}
