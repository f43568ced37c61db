use crate::error::GeoHashError;
use crate::index::bits::GeoHashBits;
use crate::index::constants::{LAT_MASK, LON_MASK, window};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// One of the eight compass directions around a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    North,
    South,
    East,
    West,
    NorthEast,
    NorthWest,
    SouthEast,
    SouthWest,
}

impl Direction {
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
        Direction::NorthEast,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::SouthWest,
    ];

    /// Unit steps `(east-west, north-south)` for this direction.
    pub fn deltas(self) -> (i8, i8) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
            Direction::NorthEast => (1, 1),
            Direction::NorthWest => (-1, 1),
            Direction::SouthEast => (1, -1),
            Direction::SouthWest => (-1, -1),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
            Direction::NorthEast => Direction::SouthWest,
            Direction::NorthWest => Direction::SouthEast,
            Direction::SouthEast => Direction::NorthWest,
            Direction::SouthWest => Direction::NorthEast,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::South => "south",
            Direction::East => "east",
            Direction::West => "west",
            Direction::NorthEast => "north_east",
            Direction::NorthWest => "north_west",
            Direction::SouthEast => "south_east",
            Direction::SouthWest => "south_west",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Direction {
    type Err = GeoHashError;

    /// Accepts `north_east`, `north-east`, `northeast` and the short `ne` forms.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .flat_map(char::to_lowercase)
            .collect();
        match normalized.as_str() {
            "north" | "n" => Ok(Direction::North),
            "south" | "s" => Ok(Direction::South),
            "east" | "e" => Ok(Direction::East),
            "west" | "w" => Ok(Direction::West),
            "northeast" | "ne" => Ok(Direction::NorthEast),
            "northwest" | "nw" => Ok(Direction::NorthWest),
            "southeast" | "se" => Ok(Direction::SouthEast),
            "southwest" | "sw" => Ok(Direction::SouthWest),
            _ => Err(GeoHashError::InvalidDirection(s.to_string())),
        }
    }
}

impl TryFrom<u8> for Direction {
    type Error = GeoHashError;

    /// Decodes the position of the direction in [`Direction::ALL`].
    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Direction::ALL
            .get(usize::from(value))
            .copied()
            .ok_or_else(|| GeoHashError::InvalidDirection(value.to_string()))
    }
}

/// Shifts the longitude axis (odd bit positions) by one cell.
///
/// The latitude slots are filled with ones so a carry or borrow ripples
/// straight through them; the final mask drops the filler and anything that
/// escaped the `2 * step` window.
fn move_x(code: GeoHashBits, d: i8) -> GeoHashBits {
    if d == 0 {
        return code;
    }
    let mut x = code.bits & LON_MASK;
    let y = code.bits & LAT_MASK;
    let zz = window(LAT_MASK, code.step);

    if d > 0 {
        x = x.wrapping_add(zz + 1);
    } else {
        x = (x | zz).wrapping_sub(zz + 1);
    }
    x &= window(LON_MASK, code.step);

    GeoHashBits {
        bits: x | y,
        step: code.step,
    }
}

/// Shifts the latitude axis (even bit positions) by one cell.
fn move_y(code: GeoHashBits, d: i8) -> GeoHashBits {
    if d == 0 {
        return code;
    }
    let x = code.bits & LON_MASK;
    let mut y = code.bits & LAT_MASK;
    let zz = window(LON_MASK, code.step);

    if d > 0 {
        y = y.wrapping_add(zz + 1);
    } else {
        y = (y | zz).wrapping_sub(zz + 1);
    }
    y &= window(LAT_MASK, code.step);

    GeoHashBits {
        bits: x | y,
        step: code.step,
    }
}

/// Returns the adjacent cell in `direction` at the same step.
///
/// Walking off the edge of the bit window wraps to the opposite edge; it is
/// up to the caller to decide whether that cell is meaningful.
pub fn get_neighbor(code: &GeoHashBits, direction: Direction) -> GeoHashBits {
    let (dx, dy) = direction.deltas();
    move_y(move_x(*code, dx), dy)
}

/// All eight neighbours of a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors {
    pub north: GeoHashBits,
    pub south: GeoHashBits,
    pub east: GeoHashBits,
    pub west: GeoHashBits,
    pub north_east: GeoHashBits,
    pub north_west: GeoHashBits,
    pub south_east: GeoHashBits,
    pub south_west: GeoHashBits,
}

impl Neighbors {
    pub fn get(&self, direction: Direction) -> GeoHashBits {
        match direction {
            Direction::North => self.north,
            Direction::South => self.south,
            Direction::East => self.east,
            Direction::West => self.west,
            Direction::NorthEast => self.north_east,
            Direction::NorthWest => self.north_west,
            Direction::SouthEast => self.south_east,
            Direction::SouthWest => self.south_west,
        }
    }

    /// Iterates `(direction, code)` pairs in [`Direction::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = (Direction, GeoHashBits)> + '_ {
        Direction::ALL.into_iter().map(|d| (d, self.get(d)))
    }
}

pub fn get_neighbors(code: &GeoHashBits) -> Neighbors {
    Neighbors {
        north: get_neighbor(code, Direction::North),
        south: get_neighbor(code, Direction::South),
        east: get_neighbor(code, Direction::East),
        west: get_neighbor(code, Direction::West),
        north_east: get_neighbor(code, Direction::NorthEast),
        north_west: get_neighbor(code, Direction::NorthWest),
        south_east: get_neighbor(code, Direction::SouthEast),
        south_west: get_neighbor(code, Direction::SouthWest),
    }
}
