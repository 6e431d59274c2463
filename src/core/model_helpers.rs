use std::ops::Add;

use crate::core::{Cell, Direction, Vec2};

impl Cell {
    /// Floor or goal with nothing on it.
    pub fn is_walkable(&self) -> bool {
        matches!(self, Cell::Floor | Cell::Goal)
    }

    pub fn is_crate(&self) -> bool {
        matches!(self, Cell::CrateOnFloor | Cell::CrateOnGoal)
    }

    /// Goal marker, with or without a crate resting on it.
    pub fn is_goal(&self) -> bool {
        matches!(self, Cell::Goal | Cell::CrateOnGoal)
    }

    pub fn with_crate(&self) -> Cell {
        if self.is_goal() { Cell::CrateOnGoal } else { Cell::CrateOnFloor }
    }

    pub fn without_crate(&self) -> Cell {
        if self.is_goal() { Cell::Goal } else { Cell::Floor }
    }
}

impl Direction {
    pub fn offset(&self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 { i: self.i + rhs.i, j: self.j + rhs.j }
    }
}

impl Add<Direction> for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Direction) -> Vec2 {
        self + rhs.offset()
    }
}
