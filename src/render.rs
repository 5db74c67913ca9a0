use crate::config::GameConfig;
use crate::grid::{Cell, GridState};

pub type Rgba = [u8; 4];

pub const BACKGROUND: Rgba = [0x00, 0x00, 0x00, 0xFF];
pub const GRID_LINE: Rgba = [0x70, 0x70, 0x70, 0xFF];
pub const APPLE: Rgba = [0xF0, 0x10, 0x00, 0xFF];
pub const SNAKE: Rgba = [0x10, 0xF0, 0x00, 0xFF];

/// RGBA8 pixel buffer of a fixed size, as handed out by `Pixels::frame_mut`.
pub struct Canvas<'a> {
    frame: &'a mut [u8],
    width: u32,
    height: u32,
}

impl<'a> Canvas<'a> {
    pub fn new(frame: &'a mut [u8], width: u32, height: u32) -> Self {
        Self { frame, width, height }
    }

    pub fn clear(&mut self, color: Rgba) {
        for px in self.frame.chunks_exact_mut(4) {
            px.copy_from_slice(&color);
        }
    }

    fn put_pixel(&mut self, x: u32, y: u32, color: Rgba) {
        if x >= self.width || y >= self.height {
            return;
        }
        let idx = ((y * self.width + x) * 4) as usize;
        if let Some(px) = self.frame.get_mut(idx..idx + 4) {
            px.copy_from_slice(&color);
        }
    }

    pub fn fill_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        let x2 = (x + w).min(self.width);
        let y2 = (y + h).min(self.height);
        for py in y..y2 {
            for px in x..x2 {
                self.put_pixel(px, py, color);
            }
        }
    }

    /// One-pixel outline, clipped to the canvas.
    pub fn stroke_rect(&mut self, x: u32, y: u32, w: u32, h: u32, color: Rgba) {
        if w == 0 || h == 0 {
            return;
        }
        let x2 = x + w - 1;
        let y2 = y + h - 1;
        for px in x..=x2 {
            self.put_pixel(px, y, color);
            self.put_pixel(px, y2, color);
        }
        for py in y..=y2 {
            self.put_pixel(x, py, color);
            self.put_pixel(x2, py, color);
        }
    }
}

/// Draws the board: empty cells outlined, apple and snake cells filled.
pub fn draw_grid<R>(frame: &mut [u8], grid: &GridState<R>, config: &GameConfig) {
    let (cw, ch) = (config.cell_width, config.cell_height);
    let mut canvas = Canvas::new(frame, config.screen_width, config.screen_height);
    canvas.clear(BACKGROUND);

    for (pos, cell) in grid.cells() {
        let x = pos.x as u32 * cw;
        let y = pos.y as u32 * ch;
        match cell {
            Cell::Empty => canvas.stroke_rect(x, y, cw, ch, GRID_LINE),
            Cell::Apple => canvas.fill_rect(x, y, cw, ch, APPLE),
            Cell::SnakeBody(_) => canvas.fill_rect(x, y, cw, ch, SNAKE),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::SmallRng;

    fn pixel(frame: &[u8], width: u32, x: u32, y: u32) -> Rgba {
        let i = ((y * width + x) * 4) as usize;
        [frame[i], frame[i + 1], frame[i + 2], frame[i + 3]]
    }

    fn small_config() -> GameConfig {
        GameConfig {
            screen_width: 40,
            screen_height: 40,
            cell_width: 10,
            cell_height: 10,
            ..GameConfig::default()
        }
    }

    #[test]
    fn cells_are_drawn_by_kind() {
        let config = small_config();
        let grid = GridState::with_rng(4, 4, SmallRng::seed_from_u64(9)).unwrap();
        let mut frame = vec![0xAA; 40 * 40 * 4];
        draw_grid(&mut frame, &grid, &config);

        let head = grid.head();
        let (hx, hy) = (head.x as u32 * 10, head.y as u32 * 10);
        assert_eq!(pixel(&frame, 40, hx, hy), SNAKE);
        assert_eq!(pixel(&frame, 40, hx + 5, hy + 5), SNAKE);

        let apple = grid.apple().unwrap();
        let (ax, ay) = (apple.x as u32 * 10, apple.y as u32 * 10);
        assert_eq!(pixel(&frame, 40, ax + 5, ay + 5), APPLE);

        let empty = grid
            .cells()
            .find(|&(_, c)| c == Cell::Empty)
            .map(|(p, _)| p)
            .unwrap();
        let (ex, ey) = (empty.x as u32 * 10, empty.y as u32 * 10);
        assert_eq!(pixel(&frame, 40, ex, ey), GRID_LINE);
        assert_eq!(pixel(&frame, 40, ex + 9, ey + 9), GRID_LINE);
        assert_eq!(pixel(&frame, 40, ex + 5, ey + 5), BACKGROUND);
    }

    #[test]
    fn drawing_is_clipped_to_canvas() {
        let mut frame = vec![0; 8 * 8 * 4];
        let mut canvas = Canvas::new(&mut frame, 8, 8);
        canvas.fill_rect(6, 6, 10, 10, APPLE);
        canvas.stroke_rect(4, 4, 10, 10, SNAKE);
        assert_eq!(pixel(&frame, 8, 7, 7), APPLE);
        assert_eq!(pixel(&frame, 8, 4, 7), SNAKE);
        assert_eq!(pixel(&frame, 8, 0, 0), [0, 0, 0, 0]);
    }
}
