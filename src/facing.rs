use euclid::Vector2D;
use log::trace;
use std::f64::consts::TAU;

/// Number of entity facing slots in a full circle.
///
/// Only every `ENTITY_DIRECTION_INCREMENT`th slot is used by moving entities, giving 8 facings.
pub const ENTITY_DIRECTION_COUNT: i32 = 64;

/// Distance between the 8 usable facing slots.
pub const ENTITY_DIRECTION_INCREMENT: i32 = 8;

/// Quantize the direction between two vectors into an entity facing code.
pub trait DirectionTo {
    /// Return the facing code in `[0, ENTITY_DIRECTION_COUNT)` from `self` towards `target`.
    ///
    /// ```notrust
    ///                  40
    ///                  -Y
    ///                   |
    ///        24  -X ----O---- +X  56
    ///                   |
    ///                  +Y
    ///                   8
    /// ```
    ///
    /// The angle of `target - self` is measured from the +X axis towards +Y and split into
    /// `ENTITY_DIRECTION_COUNT` equal slices. The slice index is then shifted back by one
    /// `ENTITY_DIRECTION_INCREMENT`, since the facing codes start one increment ahead of the
    /// angle origin.
    ///
    /// When `self == target` there is no direction. The angle is taken to be zero and the
    /// result, 56, has no meaning.
    fn direction_to(&self, target: &Self) -> u8;
}

impl<U> DirectionTo for Vector2D<f64, U> {
    fn direction_to(&self, target: &Self) -> u8 {
        let direction = *target - *self;
        let angle = angle_from_x_axis(direction);
        let radians_per_direction = TAU / ENTITY_DIRECTION_COUNT as f64;

        // XXX: Will need revisiting if entities ever use all 16 directions.
        let slot = (angle / radians_per_direction).floor() as i32 - ENTITY_DIRECTION_INCREMENT;
        let code = if slot >= ENTITY_DIRECTION_COUNT {
            slot - ENTITY_DIRECTION_COUNT
        } else if slot < 0 {
            slot + ENTITY_DIRECTION_COUNT
        } else {
            slot
        };

        trace!(
            "direction_to {:?} -> {:?}: angle {} gives code {}",
            self,
            target,
            angle,
            code
        );
        code as u8
    }
}

/// Angle from the +X axis to the vector, in [0, 2π).
fn angle_from_x_axis<U>(v: Vector2D<f64, U>) -> f64 {
    if v.x == 0.0 && v.y == 0.0 {
        return 0.0;
    }

    let radian = v.y.atan2(v.x);
    if radian < 0.0 {
        radian + TAU
    } else {
        radian
    }
}
