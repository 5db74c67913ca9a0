/// Heading of the snake. The discriminants give the cyclic order used for
/// turning: turning left steps backwards, turning right steps forwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Dir {
    Left = 0,
    Up = 1,
    Right = 2,
    Down = 3,
}

/// A relative turn requested by the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Turn {
    Left,
    Right,
}

impl Dir {
    pub const ALL: [Dir; 4] = [Dir::Left, Dir::Up, Dir::Right, Dir::Down];

    fn from_index(i: u8) -> Self {
        Self::ALL[(i % 4) as usize]
    }

    /// Predecessor in the cycle.
    pub fn turn_left(self) -> Self {
        Self::from_index(self as u8 + 3)
    }

    /// Successor in the cycle.
    pub fn turn_right(self) -> Self {
        Self::from_index(self as u8 + 1)
    }

    pub fn turned(self, turn: Turn) -> Self {
        match turn {
            Turn::Left => self.turn_left(),
            Turn::Right => self.turn_right(),
        }
    }

    /// Grid offset of one cell in this direction; y grows downwards.
    pub fn offset(self) -> (i32, i32) {
        match self {
            Dir::Left => (-1, 0),
            Dir::Up => (0, -1),
            Dir::Right => (1, 0),
            Dir::Down => (0, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn turns_are_inverse() {
        for d in Dir::ALL {
            assert_eq!(d.turn_left().turn_right(), d);
            assert_eq!(d.turn_right().turn_left(), d);
        }
    }

    #[test]
    fn four_turns_make_a_full_circle() {
        for d in Dir::ALL {
            let mut left = d;
            let mut right = d;
            for _ in 0..4 {
                left = left.turn_left();
                right = right.turn_right();
            }
            assert_eq!(left, d);
            assert_eq!(right, d);
        }
    }

    #[test]
    fn cyclic_order_matches_discriminants() {
        assert_eq!(Dir::Left.turn_left(), Dir::Down);
        assert_eq!(Dir::Down.turn_right(), Dir::Left);
        assert_eq!(Dir::Up.turned(Turn::Right), Dir::Right);
        assert_eq!(Dir::Up.turned(Turn::Left), Dir::Left);
    }

    #[test]
    fn opposite_offsets_cancel() {
        for d in Dir::ALL {
            let (dx, dy) = d.offset();
            let (ox, oy) = d.turn_right().turn_right().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }
}
