use macroquad::prelude::{ivec2, IVec2};

/// One grid step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// Row - 1
    Up,
    /// Row + 1
    Down,
    /// Column - 1
    Left,
    /// Column + 1
    Right,
}

impl Direction {
    /// Picks at most one direction from the held keys.
    ///
    /// When several are held the precedence is down, left, right, up; a held
    /// pair such as up+down therefore always moves down.
    pub fn from_held(down: bool, left: bool, right: bool, up: bool) -> Option<Direction> {
        if down {
            Some(Direction::Down)
        } else if left {
            Some(Direction::Left)
        } else if right {
            Some(Direction::Right)
        } else if up {
            Some(Direction::Up)
        } else {
            None
        }
    }
}

/// Grid position the camera follows. Never clamped to the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    /// Column
    pub x: i32,
    /// Row
    pub y: i32,
}

impl Cursor {
    /// Cursor at column `x`, row `y`.
    pub fn new(x: i32, y: i32) -> Self {
        Cursor { x, y }
    }

    /// Moves one cell.
    pub fn step(&mut self, direction: Direction) {
        match direction {
            Direction::Up => self.y -= 1,
            Direction::Down => self.y += 1,
            Direction::Left => self.x -= 1,
            Direction::Right => self.x += 1,
        }
    }

    /// Back to (0, 0).
    pub fn reset(&mut self) {
        *self = Cursor::default();
    }

    /// As a grid coordinate, x = column.
    pub fn position(&self) -> IVec2 {
        ivec2(self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn precedence_is_down_left_right_up() {
        assert_eq!(Direction::from_held(true, true, true, true), Some(Direction::Down));
        assert_eq!(Direction::from_held(false, true, true, true), Some(Direction::Left));
        assert_eq!(Direction::from_held(false, false, true, true), Some(Direction::Right));
        assert_eq!(Direction::from_held(false, false, false, true), Some(Direction::Up));
        assert_eq!(Direction::from_held(false, false, false, false), None);
    }

    #[test]
    fn cursor_walks_past_the_origin() {
        let mut c = Cursor::default();
        c.step(Direction::Left);
        c.step(Direction::Up);
        c.step(Direction::Up);
        assert_eq!(c, Cursor::new(-1, -2));
        c.reset();
        assert_eq!(c.position(), IVec2::ZERO);
    }
}
