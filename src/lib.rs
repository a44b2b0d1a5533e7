//! Map coordinates, entity facing and mouse input values for isometric tile games.

mod facing;
mod input;
mod position;
pub mod project;
mod space;

pub use facing::{DirectionTo, ENTITY_DIRECTION_COUNT, ENTITY_DIRECTION_INCREMENT};
pub use input::{MouseButton, MouseButtonMod};
pub use position::{InvalidCoordinate, Position, WorldMut, SUB_TILES_PER_TILE};
pub use space::{ProjectVec, Space, SubTileSpace, SubTileVector, WorldSpace, WorldVector};
