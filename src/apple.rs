use crate::grid::{Cell, GridState, Pos};
use rand::Rng;
use tracing::debug;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ApplePlacement {
    Placed(Pos),
    /// No empty cell is left; the board is untouched.
    GridFull,
}

impl<R: Rng> GridState<R> {
    /// Drops an apple on a uniformly random empty cell.
    ///
    /// Samples positions until one is empty. The empty count is checked
    /// first so a full board returns instead of spinning forever.
    pub fn place_apple(&mut self) -> ApplePlacement {
        if !self.cells.contains(&Cell::Empty) {
            return ApplePlacement::GridFull;
        }
        loop {
            let x = self.rng.gen_range(0..self.width as i32);
            let y = self.rng.gen_range(0..self.height as i32);
            if self.cell_at(x, y) == Some(Cell::Empty) {
                let p = Pos::new(x, y);
                self.set(p, Cell::Apple);
                debug!(x, y, "apple placed");
                return ApplePlacement::Placed(p);
            }
        }
    }
}
