use crate::facing::DirectionTo;
use crate::space::{ProjectVec, SubTileSpace, SubTileVector, WorldSpace, WorldVector};
use euclid::vec2;
use log::{debug, error};
use serde::{Deserialize, Serialize};
use std::convert::TryFrom;
use std::error::Error;
use std::fmt;
use std::ops::{Deref, DerefMut};

/// How many sub-tile steps there are along one axis of a map tile.
pub const SUB_TILES_PER_TILE: f64 = 5.0;

/// Error for a coordinate pair that can't be stored in a `Position`.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum InvalidCoordinate {
    NaN(f64, f64),
    Infinite(f64, f64),
}

impl InvalidCoordinate {
    fn check(vec: WorldVector) -> Result<WorldVector, InvalidCoordinate> {
        if vec.x.is_nan() || vec.y.is_nan() {
            Err(InvalidCoordinate::NaN(vec.x, vec.y))
        } else if vec.x.is_infinite() || vec.y.is_infinite() {
            Err(InvalidCoordinate::Infinite(vec.x, vec.y))
        } else {
            Ok(vec)
        }
    }
}

impl Error for InvalidCoordinate {}

impl fmt::Display for InvalidCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            InvalidCoordinate::NaN(x, y) => write!(f, "float value is NaN: ({}, {})", x, y),
            InvalidCoordinate::Infinite(x, y) => write!(f, "float value is Inf: ({}, {})", x, y),
        }
    }
}

/// A location on the tile map.
///
/// The stored value is the world space vector returned by `world`, where one unit is one map
/// tile. The coordinates are always finite. Constructors and setters panic if given NaN or
/// infinite values, since those can only come from a broken computation upstream.
#[derive(Copy, Clone, PartialEq, Debug, Serialize, Deserialize)]
#[serde(try_from = "WorldVector", into = "WorldVector")]
pub struct Position(WorldVector);

impl Position {
    /// Create a position at world coordinates.
    pub fn new(x: f64, y: f64) -> Position { Position(valid_or_die(vec2(x, y))) }

    /// Create a position from an entity spawn point given in sub-tile coordinates.
    ///
    /// Map stamps place entities at `tile_offset * 5 + object_offset`, so the values are divided
    /// by `SUB_TILES_PER_TILE` to get world coordinates.
    pub fn from_sub_tile(x: f64, y: f64) -> Position {
        Position(valid_or_die(SubTileVector::new(x, y).project::<WorldSpace>()))
    }

    /// Like `new`, but return an error instead of panicking on invalid coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Position, InvalidCoordinate> {
        InvalidCoordinate::check(vec2(x, y)).map(Position)
    }

    /// Like `from_sub_tile`, but return an error instead of panicking on invalid coordinates.
    pub fn try_from_sub_tile(x: f64, y: f64) -> Result<Position, InvalidCoordinate> {
        InvalidCoordinate::check(SubTileVector::new(x, y).project::<WorldSpace>()).map(Position)
    }

    /// Move to world coordinates.
    pub fn set(&mut self, x: f64, y: f64) { self.0 = valid_or_die(vec2(x, y)); }

    /// Move to sub-tile coordinates.
    pub fn set_sub_world(&mut self, x: f64, y: f64) {
        self.0 = valid_or_die(SubTileVector::new(x, y).project::<WorldSpace>());
    }

    /// The position in world space, where 1 is one map tile.
    ///
    /// This borrows the stored value. Copy it out with `*pos.world()` to get a vector that can
    /// be changed independently.
    pub fn world(&self) -> &WorldVector { &self.0 }

    /// Mutable view to the stored world vector.
    ///
    /// The coordinates are validated when the view is dropped.
    pub fn world_mut(&mut self) -> WorldMut<'_> { WorldMut(self) }

    /// Tile position, always a whole number.
    pub fn tile(&self) -> WorldVector { self.0.floor() }

    /// Offset from the tile position, in [0, 1) along both axes for non-negative coordinates.
    ///
    /// Tiny negative coordinates can round up to exactly 1.
    pub fn tile_offset(&self) -> WorldVector { self.0 - self.tile() }

    /// The position in sub-tile space, where 5 is one map tile.
    pub fn world_sub_tile(&self) -> SubTileVector { self.0.project::<SubTileSpace>() }

    /// Tile position in sub-tiles, always a multiple of 5.
    pub fn tile_sub_tile(&self) -> SubTileVector { self.tile().project::<SubTileSpace>() }

    /// Offset from the tile position in sub-tiles, in [0, 5) along both axes for non-negative
    /// coordinates.
    pub fn sub_tile_offset(&self) -> SubTileVector {
        self.world_sub_tile() - self.tile_sub_tile()
    }

    /// Extra entity offset. Nothing ever assigns it, so it is always zero.
    pub fn offset(&self) -> WorldVector { WorldVector::zero() }

    /// `sub_tile_offset` plus one along both axes.
    ///
    /// This moves the vector to the bottom vertex of the isometric diamond that draws the sub
    /// tile. Sub-tile indices grow towards the lower right ('down') and the lower left ('left')
    /// on screen, so the raw offset would draw the target one index above, which is one tile
    /// lower visually.
    pub fn render_offset(&self) -> SubTileVector { self.sub_tile_offset() + vec2(1.0, 1.0) }

    /// Entity facing code from this position towards the target.
    ///
    /// See `DirectionTo`.
    pub fn direction_to(&self, target: &Position) -> u8 { self.0.direction_to(&target.0) }
}

fn valid_or_die(vec: WorldVector) -> WorldVector {
    match InvalidCoordinate::check(vec) {
        Ok(vec) => vec,
        Err(e) => {
            error!("Invalid position coordinates {:?}", vec);
            panic!("{}", e);
        }
    }
}

impl Default for Position {
    fn default() -> Position { Position(WorldVector::zero()) }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.0.x, self.0.y)
    }
}

impl TryFrom<WorldVector> for Position {
    type Error = InvalidCoordinate;

    fn try_from(vec: WorldVector) -> Result<Self, Self::Error> {
        InvalidCoordinate::check(vec).map(Position).map_err(|e| {
            debug!("Rejecting position: {}", e);
            e
        })
    }
}

impl From<Position> for WorldVector {
    fn from(pos: Position) -> WorldVector { pos.0 }
}

/// Live mutable access to the world vector of a `Position`.
///
/// Returned by `Position::world_mut`. Checks the coordinates again when dropped and panics if
/// they are no longer finite.
pub struct WorldMut<'a>(&'a mut Position);

impl<'a> Deref for WorldMut<'a> {
    type Target = WorldVector;

    fn deref(&self) -> &WorldVector { &(self.0).0 }
}

impl<'a> DerefMut for WorldMut<'a> {
    fn deref_mut(&mut self) -> &mut WorldVector { &mut (self.0).0 }
}

impl<'a> Drop for WorldMut<'a> {
    fn drop(&mut self) {
        // Don't turn an unwinding panic into an abort.
        if !std::thread::panicking() {
            valid_or_die((self.0).0);
        }
    }
}
