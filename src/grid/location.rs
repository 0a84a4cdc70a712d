//! Map locations on the square grid

use serde::{Deserialize, Serialize};

use super::direction::Direction;

/// A cell on the map
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct MapLocation {
    pub x: i32,
    pub y: i32,
}

impl MapLocation {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Squared euclidean distance; ranges throughout the crate are squared
    pub fn distance_squared(&self, other: &Self) -> i32 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        dx * dx + dy * dy
    }

    /// The location one step away in the given direction
    pub fn shifted(&self, dir: Direction) -> Self {
        self.shifted_by(dir, 1)
    }

    /// The location `cells` steps away in the given direction
    pub fn shifted_by(&self, dir: Direction, cells: i32) -> Self {
        let (dx, dy) = dir.offset();
        Self {
            x: self.x + dx * cells,
            y: self.y + dy * cells,
        }
    }

    /// Compass direction pointing from self toward the target, or None
    /// when the two locations coincide
    pub fn direction_to(&self, other: &Self) -> Option<Direction> {
        let dx = (other.x - self.x).signum();
        let dy = (other.y - self.y).signum();
        match (dx, dy) {
            (0, 0) => None,
            (0, 1) => Some(Direction::North),
            (1, 1) => Some(Direction::NorthEast),
            (1, 0) => Some(Direction::East),
            (1, -1) => Some(Direction::SouthEast),
            (0, -1) => Some(Direction::South),
            (-1, -1) => Some(Direction::SouthWest),
            (-1, 0) => Some(Direction::West),
            (-1, 1) => Some(Direction::NorthWest),
            _ => unreachable!("signum outputs are -1, 0, 1"),
        }
    }

    /// Whether the target sits in one of the 8 surrounding cells
    pub fn is_adjacent_to(&self, other: &Self) -> bool {
        let d = self.distance_squared(other);
        d > 0 && d <= 2
    }
}
