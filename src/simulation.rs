use crate::apple::ApplePlacement;
use crate::direction::Turn;
use crate::grid::{Cell, DeathCause, GridState, Status};
use rand::Rng;
use tracing::info;

/// What a single tick did to the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The snake was not alive, nothing changed.
    Idle,
    Moved,
    Ate,
    Died(DeathCause),
    Won,
}

impl<R: Rng> GridState<R> {
    /// Advances the game by one tick.
    ///
    /// The body has no explicit list: every snake cell ages by one and cells
    /// that reach the target length are cleared, then the head moves into a
    /// fresh age-0 cell. On death the board keeps its aged state and the
    /// head stays where it was.
    pub fn step(&mut self, turn: Option<Turn>) -> StepOutcome {
        if !self.is_alive() {
            return StepOutcome::Idle;
        }

        let target = self.target_length;
        for cell in self.cells.iter_mut() {
            if let Cell::SnakeBody(age) = cell {
                *age += 1;
                if *age >= target {
                    *cell = Cell::Empty;
                }
            }
        }

        if let Some(turn) = turn {
            self.dir = self.dir.turned(turn);
        }

        let next = self.head.offset(self.dir);
        let Some(cell) = self.cell_at(next.x, next.y) else {
            return self.die(DeathCause::Wall);
        };
        if cell.is_snake() {
            return self.die(DeathCause::SelfCollision);
        }

        let mut outcome = StepOutcome::Moved;
        if cell == Cell::Apple {
            self.target_length += 1;
            outcome = match self.place_apple() {
                ApplePlacement::Placed(_) => StepOutcome::Ate,
                ApplePlacement::GridFull => StepOutcome::Won,
            };
        }

        self.set(next, Cell::SnakeBody(0));
        self.head = next;

        if outcome == StepOutcome::Won {
            self.status = Status::Won;
            info!(length = self.target_length, "board filled");
        }
        outcome
    }

    fn die(&mut self, cause: DeathCause) -> StepOutcome {
        self.status = Status::Dead(cause);
        info!(?cause, length = self.target_length, "snake died");
        StepOutcome::Died(cause)
    }
}
