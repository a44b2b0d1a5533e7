use crate::project;
use euclid::Vector2D;

/// Trait for defining the associated element for a geometrical space.
pub trait Space: Sized {
    /// Type of the elements of the space.
    type T: Copy;
}

/// Map space where one unit is one map tile.
///
/// The fractional part of a coordinate is the offset within the tile.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct WorldSpace;

impl Space for WorldSpace {
    type T = f64;
}

/// Finer grid space where `SUB_TILES_PER_TILE` units make up one map tile.
///
/// Map entity spawn points and render offsets are expressed in this space.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct SubTileSpace;

impl Space for SubTileSpace {
    type T = f64;
}

pub type WorldVector = Vector2D<f64, WorldSpace>;
pub type SubTileVector = Vector2D<f64, SubTileSpace>;

/// Convenience trait for projecting vectors into a target space.
pub trait ProjectVec<U: Space> {
    fn project<Dst: project::From<U>>(self) -> Vector2D<Dst::T, Dst>;
}

impl<U: Space> ProjectVec<U> for Vector2D<U::T, U> {
    fn project<Dst: project::From<U>>(self) -> Vector2D<Dst::T, Dst> { Dst::vec_from(self) }
}

#[cfg(test)]
mod test {
    use super::*;
    use euclid::vec2;

    #[test]
    fn test_projection() {
        let world: WorldVector = vec2(1.5, -2.0);
        assert_eq!(world.project::<SubTileSpace>(), vec2(7.5, -10.0));
        assert_eq!(world.project::<WorldSpace>(), world);

        let sub: SubTileVector = vec2(12.0, 3.0);
        assert_eq!(sub.project::<WorldSpace>(), vec2(12.0 / 5.0, 3.0 / 5.0));
        assert_eq!(
            sub.project::<WorldSpace>().project::<SubTileSpace>(),
            vec2(12.0, 3.0)
        );
    }
}
