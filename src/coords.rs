use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{Error, Result};
pub use crate::table::NEOPIXEL_COUNT;
use crate::table::NEOPIXEL_COORDS;

/// Fixed-point units per millimetre for `x`, `y` and `r` (0.01 mm resolution).
pub const COORDINATE_SCALE: f64 = 100.0;

/// Fixed-point units per degree for `theta_deg` (0.1 degree resolution).
pub const ROTATION_SCALE: f64 = 10.0;

/// Position of one NeoPixel on the panel, in fixed-point units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NeoPixelCoord {
    /// Position of this record in the table.
    pub id: i16,
    /// Horizontal position, 0.01 mm.
    pub x: i16,
    /// Vertical position, 0.01 mm. Grows downwards like board coordinates.
    pub y: i16,
    /// Distance from the panel centre, 0.01 mm.
    pub r: i16,
    /// Angle around the panel centre, 0.1 degree.
    pub theta_deg: i16,
}

impl NeoPixelCoord {
    pub fn x_mm(&self) -> f64 {
        to_physical_units(self.x, COORDINATE_SCALE)
    }

    pub fn y_mm(&self) -> f64 {
        to_physical_units(self.y, COORDINATE_SCALE)
    }

    pub fn r_mm(&self) -> f64 {
        to_physical_units(self.r, COORDINATE_SCALE)
    }

    pub fn theta_degrees(&self) -> f64 {
        to_physical_units(self.theta_deg, ROTATION_SCALE)
    }
}

impl fmt::Display for NeoPixelCoord {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "NeoPixel {}: x={}, y={}, r={}, theta={}",
            self.id, self.x, self.y, self.r, self.theta_deg
        )
    }
}

/// Returns the coordinate of the pixel with this id.
///
/// Ids outside `0..NEOPIXEL_COUNT` are not an error, they just have no pixel.
///
/// ```
/// use neopixel_panel::{lookup, NEOPIXEL_COUNT};
/// assert_eq!(0, lookup(0).unwrap().id);
/// assert!(lookup(-1).is_none());
/// assert!(lookup(NEOPIXEL_COUNT).is_none());
/// ```
pub fn lookup(id: i16) -> Option<&'static NeoPixelCoord> {
    if !(0..NEOPIXEL_COUNT).contains(&id) {
        return None;
    }
    NEOPIXEL_COORDS.get(id as usize)
}

/// Number of pixels on the panel.
pub fn count() -> i16 {
    NEOPIXEL_COUNT
}

/// The whole table, ordered by id.
pub fn all() -> &'static [NeoPixelCoord] {
    &NEOPIXEL_COORDS
}

/// Converts a fixed-point value to millimetres or degrees.
///
/// `scale` must be positive and finite, like [COORDINATE_SCALE] and [ROTATION_SCALE].
///
/// ```
/// use neopixel_panel::{to_physical_units, COORDINATE_SCALE, ROTATION_SCALE};
/// assert_eq!(12.34, to_physical_units(1234, COORDINATE_SCALE));
/// assert_eq!(52.5, to_physical_units(525, ROTATION_SCALE));
/// ```
pub fn to_physical_units(value: i16, scale: f64) -> f64 {
    debug_assert!(scale > 0.0 && scale.is_finite(), "bad scale {}", scale);
    f64::from(value) / scale
}

/// Converts millimetres or degrees to a fixed-point value, rounding half to even.
///
/// Returns an error if the scale isn't positive and finite, or if the scaled
/// value can't be represented as an i16.
pub fn to_fixed_point(value: f64, scale: f64) -> Result<i16> {
    if !(scale > 0.0 && scale.is_finite()) {
        return Err(Error::InvalidScale(scale));
    }
    let n = (value * scale).round_ties_even();
    if !n.is_finite() || n > f64::from(i16::MAX) || n < f64::from(i16::MIN) {
        return Err(Error::FixedPointOverflow { value, scale });
    }
    Ok(n as i16)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_id_maps_to_its_own_record() {
        for id in 0..count() {
            assert_eq!(id, lookup(id).unwrap().id);
        }
    }

    #[test]
    fn boundary_misses() {
        assert!(lookup(-1).is_none());
        assert!(lookup(NEOPIXEL_COUNT).is_none());
        assert!(lookup(i16::MIN).is_none());
        assert!(lookup(i16::MAX).is_none());
    }

    #[test]
    fn count_matches_table() {
        assert_eq!(NEOPIXEL_COUNT, count());
        assert_eq!(count() as usize, all().len());
    }

    #[test]
    fn first_pixel() {
        let coord = lookup(0).unwrap();
        assert_eq!(
            NeoPixelCoord {
                id: 0,
                x: 263,
                y: -343,
                r: 432,
                theta_deg: 525
            },
            *coord
        );
        assert_eq!(4.32, coord.r_mm());
        assert_eq!(52.5, coord.theta_degrees());
    }

    #[test]
    fn physical_units_are_linear() {
        for v in [-8000i16, -343, 0, 1, 263, 4000] {
            assert_eq!(
                2. * to_physical_units(v, COORDINATE_SCALE),
                to_physical_units(2 * v, COORDINATE_SCALE)
            );
            assert_eq!(
                2. * to_physical_units(v, ROTATION_SCALE),
                to_physical_units(2 * v, ROTATION_SCALE)
            );
        }
    }

    #[test]
    fn fixed_point_round_trip() {
        for coord in all() {
            assert_eq!(coord.x, to_fixed_point(coord.x_mm(), COORDINATE_SCALE).unwrap());
            assert_eq!(
                coord.theta_deg,
                to_fixed_point(coord.theta_degrees(), ROTATION_SCALE).unwrap()
            );
        }
    }

    #[test]
    fn fixed_point_rounds_half_to_even() {
        assert_eq!(2, to_fixed_point(0.25, 10.).unwrap());
        assert_eq!(2, to_fixed_point(1.5, 1.).unwrap());
        assert_eq!(-2, to_fixed_point(-0.25, 10.).unwrap());
    }

    #[test]
    fn fixed_point_overflow() {
        assert!(to_fixed_point(400., COORDINATE_SCALE).is_err());
        assert!(to_fixed_point(-400., COORDINATE_SCALE).is_err());
        assert!(to_fixed_point(f64::NAN, COORDINATE_SCALE).is_err());
        assert_eq!(i16::MAX, to_fixed_point(327.67, COORDINATE_SCALE).unwrap());
    }

    #[test]
    fn fixed_point_rejects_bad_scales() {
        for scale in [0.0, -10.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                to_fixed_point(1.0, scale),
                Err(Error::InvalidScale(_))
            ));
        }
    }

    #[test]
    fn panel_fits_the_board() {
        for coord in all() {
            assert!(coord.r_mm() <= 173. / 2. + 0.01);
            assert!((0..3600).contains(&coord.theta_deg));
        }
    }
}
