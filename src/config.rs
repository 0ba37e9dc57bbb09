use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{Error, Result};

/// Dimensions and drawing colours of one kind of component placed at every point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnitSpec {
    /// Size across the radial direction, mm.
    pub width: f64,
    /// Size along the radial direction, mm.
    pub height: f64,
    /// Radial shift of the component centre from the point, mm.
    pub offset: f64,
    /// `#rrggbb` fill of the four quadrants, counter-clockwise from the upper right.
    pub quad_colors: [String; 4],
}

impl UnitSpec {
    pub fn neopixel() -> UnitSpec {
        UnitSpec {
            width: 2.2,
            height: 3.2,
            offset: 0.0,
            quad_colors: ["#33eeee", "#ff3333", "#eeee33", "#333333"].map(String::from),
        }
    }

    pub fn mlcc() -> UnitSpec {
        UnitSpec {
            width: 1.1,
            height: 2.0,
            offset: -1.6,
            quad_colors: ["#ff9999", "#ff9999", "#9999ff", "#9999ff"].map(String::from),
        }
    }

    /// Parses the quadrant colours into rgb triples.
    pub fn quad_rgb(&self) -> Result<[[u8; 3]; 4]> {
        let mut rgb = [[0; 3]; 4];
        for (slot, hex) in rgb.iter_mut().zip(&self.quad_colors) {
            *slot = parse_hex_color(hex)?;
        }
        Ok(rgb)
    }
}

fn parse_hex_color(hex: &str) -> Result<[u8; 3]> {
    let digits = hex.trim_start_matches('#');
    let invalid = || Error::InvalidConfig(format!("'{}' is not a #rrggbb colour", hex));
    if digits.len() != 6 || !digits.is_ascii() {
        return Err(invalid());
    }
    let mut rgb = [0; 3];
    for (i, channel) in rgb.iter_mut().enumerate() {
        *channel = u8::from_str_radix(&digits[2 * i..2 * i + 2], 16).map_err(|_| invalid())?;
    }
    Ok(rgb)
}

/// Parameters of the panel layout.
///
/// The defaults reproduce the table compiled into this crate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Number of pixels.
    pub count: usize,
    /// Diameter of the circle the pixels are spread over, mm.
    pub component_diameter: f64,
    /// Diameter of the board outline, mm.
    pub board_diameter: f64,
    /// Angle between consecutive points, radians.
    pub alpha: f64,
    /// Number of wiring chains.
    pub sectors: usize,
    /// Width of one wiring ring, mm.
    pub unit_const: f64,
    /// Increment of the sector offset search, radians. At least [MIN_OFFSET_STEP].
    pub offset_step: f64,
    pub neopixel: UnitSpec,
    pub mlcc: UnitSpec,
}

impl Default for LayoutConfig {
    fn default() -> LayoutConfig {
        LayoutConfig {
            count: 1200,
            component_diameter: 173.0,
            board_diameter: 176.0,
            alpha: golden_angle(),
            sectors: 6,
            unit_const: 3.8,
            offset_step: 0.01,
            neopixel: UnitSpec::neopixel(),
            mlcc: UnitSpec::mlcc(),
        }
    }
}

/// Smallest accepted `offset_step`, radians.
pub const MIN_OFFSET_STEP: f64 = 1e-4;

/// `π (3 - √5)`, the angle that spreads phyllotaxis points most evenly.
pub fn golden_angle() -> f64 {
    PI * (3.0 - 5f64.sqrt())
}

impl LayoutConfig {
    /// Reads a JSON config; missing fields keep their defaults.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<LayoutConfig> {
        let file = File::open(path)?;
        let config: LayoutConfig = serde_json::from_reader(BufReader::new(file))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidConfig("count must be positive".to_string()));
        }
        if self.count > i16::MAX as usize {
            return Err(Error::InvalidConfig(format!(
                "count {} does not fit 16-bit ids",
                self.count
            )));
        }
        if self.sectors == 0 {
            return Err(Error::InvalidConfig("sectors must be positive".to_string()));
        }
        let positive = [
            ("component_diameter", self.component_diameter),
            ("board_diameter", self.board_diameter),
            ("unit_const", self.unit_const),
            ("offset_step", self.offset_step),
            ("neopixel.width", self.neopixel.width),
            ("neopixel.height", self.neopixel.height),
            ("mlcc.width", self.mlcc.width),
            ("mlcc.height", self.mlcc.height),
        ];
        for (name, value) in positive {
            if !(value > 0.0 && value.is_finite()) {
                return Err(Error::InvalidConfig(format!(
                    "{} must be positive, got {}",
                    name, value
                )));
            }
        }
        if self.offset_step < MIN_OFFSET_STEP {
            return Err(Error::InvalidConfig(format!(
                "offset_step must be at least {}, got {}",
                MIN_OFFSET_STEP, self.offset_step
            )));
        }
        self.neopixel.quad_rgb()?;
        self.mlcc.quad_rgb()?;
        Ok(())
    }

    /// Radius of the circle the pixels are spread over, mm.
    pub fn radius(&self) -> f64 {
        self.component_diameter / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn default_is_valid() {
        LayoutConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_sectors() {
        let config = LayoutConfig {
            sectors: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn negative_ring_width() {
        let config = LayoutConfig {
            unit_const: -3.8,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn tiny_offset_step() {
        let config = LayoutConfig {
            offset_step: 1e-20,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn bad_colour() {
        let mut config = LayoutConfig::default();
        config.mlcc.quad_colors[2] = "#12345".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn parse_colours() {
        assert_eq!(
            [[0x33, 0xee, 0xee], [0xff, 0x33, 0x33], [0xee, 0xee, 0x33], [0x33, 0x33, 0x33]],
            UnitSpec::neopixel().quad_rgb().unwrap()
        );
    }

    #[test]
    fn partial_json_keeps_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "count": 600, "sectors": 3 }}"#).unwrap();
        let config = LayoutConfig::from_path(file.path()).unwrap();
        assert_eq!(600, config.count);
        assert_eq!(3, config.sectors);
        assert_eq!(3.8, config.unit_const);
        assert_eq!(UnitSpec::neopixel(), config.neopixel);
    }

    #[test]
    fn missing_file() {
        assert!(matches!(
            LayoutConfig::from_path("does/not/exist.json"),
            Err(Error::Io(_))
        ));
    }
}
