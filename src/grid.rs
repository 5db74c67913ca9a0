use crate::direction::Dir;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use thiserror::Error;
use tracing::info;

pub const INITIAL_LENGTH: u32 = 2;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pos {
    pub x: i32,
    pub y: i32,
}

impl Pos {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    pub fn offset(self, dir: Dir) -> Self {
        let (dx, dy) = dir.offset();
        Self::new(self.x + dx, self.y + dy)
    }
}

/// Contents of one grid square.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Cell {
    Empty,
    Apple,
    /// Part of the snake; the age is the number of ticks since the head
    /// was here, so the tail is the oldest cell.
    SnakeBody(u32),
}

impl Cell {
    pub fn is_snake(self) -> bool {
        matches!(self, Cell::SnakeBody(_))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DeathCause {
    Wall,
    SelfCollision,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Alive,
    Dead(DeathCause),
    /// The snake covers every cell and no apple can be placed.
    Won,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum GridError {
    #[error("grid of {width}x{height} cells cannot hold a snake and an apple")]
    TooSmall { width: u32, height: u32 },
}

/// The whole game board: cells plus the snake's head, heading and length.
pub struct GridState<R = SmallRng> {
    pub(crate) width: u32,
    pub(crate) height: u32,
    pub(crate) cells: Vec<Cell>,
    pub(crate) head: Pos,
    pub(crate) dir: Dir,
    pub(crate) target_length: u32,
    pub(crate) status: Status,
    pub(crate) rng: R,
}

impl GridState<SmallRng> {
    pub fn new(width: u32, height: u32) -> Result<Self, GridError> {
        Self::with_rng(width, height, SmallRng::from_entropy())
    }
}

impl<R: Rng> GridState<R> {
    /// Builds a board and resets it, so it is ready to play.
    pub fn with_rng(width: u32, height: u32, rng: R) -> Result<Self, GridError> {
        if width == 0 || height == 0 || (width as u64 * height as u64) < 2 {
            return Err(GridError::TooSmall { width, height });
        }
        let mut grid = Self {
            width,
            height,
            cells: vec![Cell::Empty; width as usize * height as usize],
            head: Pos::new(0, 0),
            dir: Dir::Up,
            target_length: INITIAL_LENGTH,
            status: Status::Alive,
            rng,
        };
        grid.reset();
        Ok(grid)
    }

    pub fn reset(&mut self) {
        self.cells.fill(Cell::Empty);
        self.head = Pos::new((self.width / 2) as i32, (self.height / 2) as i32);
        self.set(self.head, Cell::SnakeBody(0));
        self.dir = Dir::Up;
        self.target_length = INITIAL_LENGTH;
        self.status = Status::Alive;
        self.place_apple();
        info!(width = self.width, height = self.height, "board reset");
    }
}

impl<R> GridState<R> {
    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn in_bounds(&self, p: Pos) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as u32) < self.width && (p.y as u32) < self.height
    }

    fn index(&self, p: Pos) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.width as usize + p.x as usize)
    }

    pub fn cell_at(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(Pos::new(x, y)).map(|i| self.cells[i])
    }

    pub(crate) fn set(&mut self, p: Pos, cell: Cell) {
        if let Some(i) = self.index(p) {
            self.cells[i] = cell;
        }
    }

    pub fn is_alive(&self) -> bool {
        self.status == Status::Alive
    }

    pub fn status(&self) -> Status {
        self.status
    }

    /// Target length: how many cells the body grows to.
    pub fn snake_length(&self) -> u32 {
        self.target_length
    }

    pub fn head(&self) -> Pos {
        self.head
    }

    pub fn direction(&self) -> Dir {
        self.dir
    }

    /// Number of cells currently occupied by the snake.
    pub fn body_len(&self) -> usize {
        self.cells.iter().filter(|c| c.is_snake()).count()
    }

    pub fn apple(&self) -> Option<Pos> {
        self.cells().find(|&(_, c)| c == Cell::Apple).map(|(p, _)| p)
    }

    /// Every cell in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Pos, Cell)> + '_ {
        let w = self.width as usize;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Pos::new((i % w) as i32, (i / w) as i32), c))
    }
}
