use crate::space::{Space, SubTileSpace, WorldSpace};
use crate::SUB_TILES_PER_TILE;
use euclid::{vec2, Vector2D};

/// Transformation between different geometries, eg. the tile map and its sub-tile grid.
///
/// The sub-tile grid divides every map tile into `SUB_TILES_PER_TILE` steps along both axes, so
/// the projection from `WorldSpace` to `SubTileSpace` is the matrix
///
/// ```notrust
/// | 5  0 |
/// | 0  5 |
/// ```
///
/// and the inverse projection divides by the same factor.
///
/// ```
/// use euclid::vec2;
/// use subtile::{ProjectVec, SubTileSpace, WorldSpace, WorldVector};
///
/// let spawn_point = WorldVector::new(2.0, 3.4).project::<SubTileSpace>();
/// assert_eq!(spawn_point, vec2(10.0, 17.0));
/// assert_eq!(spawn_point.project::<WorldSpace>(), vec2(2.0, 3.4));
/// ```
pub trait From<U: Space>: Sized + Space {
    fn vec_from(vec: Vector2D<U::T, U>) -> Vector2D<Self::T, Self>;
}

// Identity projection
impl<U: Space> From<U> for U {
    fn vec_from(vec: Vector2D<U::T, U>) -> Vector2D<Self::T, Self> { vec }
}

impl From<WorldSpace> for SubTileSpace {
    fn vec_from(vec: Vector2D<f64, WorldSpace>) -> Vector2D<f64, SubTileSpace> {
        vec2(vec.x * SUB_TILES_PER_TILE, vec.y * SUB_TILES_PER_TILE)
    }
}

impl From<SubTileSpace> for WorldSpace {
    fn vec_from(vec: Vector2D<f64, SubTileSpace>) -> Vector2D<f64, WorldSpace> {
        vec2(vec.x / SUB_TILES_PER_TILE, vec.y / SUB_TILES_PER_TILE)
    }
}
