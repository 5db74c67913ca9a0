use crate::direction::Turn;
use crate::grid::{DeathCause, GridError, GridState, Status};
use crate::input::Intent;
use crate::simulation::StepOutcome;
use rand::Rng;
use rand::rngs::SmallRng;
use tracing::info;

/// Everything the driver loop owns between frames: the board, the turn
/// latched since the last tick, and whether the player asked to quit.
pub struct Session<R = SmallRng> {
    grid: GridState<R>,
    pending_turn: Option<Turn>,
    quit: bool,
}

impl Session<SmallRng> {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Ok(Self::from_grid(GridState::new(width, height)?))
    }
}

impl<R: Rng> Session<R> {
    pub fn from_grid(grid: GridState<R>) -> Self {
        Self {
            grid,
            pending_turn: None,
            quit: false,
        }
    }

    pub fn grid(&self) -> &GridState<R> {
        &self.grid
    }

    pub fn pending_turn(&self) -> Option<Turn> {
        self.pending_turn
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::AnyKeyRelease => {
                if !self.grid.is_alive() {
                    info!(status = ?self.grid.status(), "restarting");
                    self.grid.reset();
                    self.pending_turn = None;
                }
            }
            Intent::TurnLeft => self.pending_turn = Some(Turn::Left),
            Intent::TurnRight => self.pending_turn = Some(Turn::Right),
            Intent::Quit => self.quit = true,
        }
    }

    /// Runs one simulation step with the latched turn, then clears it.
    pub fn tick(&mut self) -> StepOutcome {
        let turn = self.pending_turn.take();
        self.grid.step(turn)
    }

    pub fn title(&self, base: &str) -> String {
        match self.grid.status() {
            Status::Alive => format!("{base} - length {}", self.grid.snake_length()),
            Status::Dead(DeathCause::Wall) => format!("{base} - hit the wall, press any key"),
            Status::Dead(DeathCause::SelfCollision) => {
                format!("{base} - bit yourself, press any key")
            }
            Status::Won => format!("{base} - board cleared! press any key"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::direction::Dir;
    use crate::grid::Pos;
    use rand::SeedableRng;

    fn session(seed: u64) -> Session {
        Session::from_grid(GridState::with_rng(5, 5, SmallRng::seed_from_u64(seed)).unwrap())
    }

    fn run_into_wall(s: &mut Session) {
        for _ in 0..10 {
            if !s.grid().is_alive() {
                return;
            }
            s.tick();
        }
    }

    #[test]
    fn most_recent_turn_wins_and_is_consumed() {
        let mut s = session(1);
        s.handle(Intent::TurnLeft);
        s.handle(Intent::TurnRight);
        assert_eq!(s.pending_turn(), Some(Turn::Right));

        s.tick();
        assert_eq!(s.grid().direction(), Dir::Right);
        assert_eq!(s.pending_turn(), None);

        s.tick();
        assert_eq!(s.grid().direction(), Dir::Right);
    }

    #[test]
    fn release_while_alive_does_not_reset() {
        let mut s = session(2);
        s.tick();
        let head = s.grid().head();
        s.handle(Intent::AnyKeyRelease);
        assert_eq!(s.grid().head(), head);
        assert_ne!(head, Pos::new(2, 2));
    }

    #[test]
    fn release_after_death_resets() {
        let mut s = session(3);
        run_into_wall(&mut s);
        assert!(!s.grid().is_alive());
        assert!(s.title("Snake").contains("press any key"));

        s.handle(Intent::AnyKeyRelease);
        assert!(s.grid().is_alive());
        assert_eq!(s.grid().head(), Pos::new(2, 2));
        assert_eq!(s.grid().snake_length(), 2);
        assert_eq!(s.title("Snake"), "Snake - length 2");
    }

    #[test]
    fn turn_released_on_death_screen_applies_after_reset() {
        let mut s = session(4);
        run_into_wall(&mut s);

        for intent in [Intent::AnyKeyRelease, Intent::TurnLeft] {
            s.handle(intent);
        }
        assert_eq!(s.pending_turn(), Some(Turn::Left));
        s.tick();
        assert_eq!(s.grid().direction(), Dir::Left);
    }

    #[test]
    fn quit_is_sticky() {
        let mut s = session(5);
        assert!(!s.should_quit());
        s.handle(Intent::Quit);
        s.handle(Intent::AnyKeyRelease);
        assert!(s.should_quit());
    }
}
