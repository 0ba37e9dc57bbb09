//! Generates the pixel layout of the round panel.
//!
//! Points are spread over a disc with a phyllotaxis spiral, split into angular
//! sectors (one wiring chain each), and every sector is wired ring by ring in a
//! serpentine order. The sector boundaries are rotated until every chain holds
//! the same number of pixels.

use log::{debug, info, warn};
use std::collections::BTreeMap;
use std::f64::consts::{PI, TAU};

use crate::config::{LayoutConfig, UnitSpec, MIN_OFFSET_STEP};
use crate::coords::{to_fixed_point, NeoPixelCoord, COORDINATE_SCALE, ROTATION_SCALE};
use crate::error::{Error, Result};

/// A point in polar coordinates around the panel centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PolarPoint {
    /// Distance from the centre, mm.
    pub r: f64,
    /// Angle, radians in `[0, 2π)`.
    pub theta: f64,
}

impl PolarPoint {
    pub fn to_cartesian(&self) -> [f64; 2] {
        [self.r * self.theta.cos(), self.r * self.theta.sin()]
    }
}

/// Direction a ring is walked in, by increasing or decreasing angle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// A point on a sector path, with the direction of its ring.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PathPoint {
    pub point: PolarPoint,
    pub order: Order,
}

/// The wiring path of every sector.
#[derive(Debug, Clone, PartialEq)]
pub struct SectorPaths {
    /// Rotation applied to the angles before sectors were assigned, radians.
    pub theta_offset: f64,
    /// One path per sector, from the centre outwards.
    pub paths: Vec<Vec<PathPoint>>,
}

impl SectorPaths {
    /// Number of points in each sector.
    pub fn counts(&self) -> Vec<usize> {
        self.paths.iter().map(Vec::len).collect()
    }

    /// Returns true if every sector holds the same number of points.
    pub fn is_balanced(&self) -> bool {
        let counts = self.counts();
        counts.windows(2).all(|pair| pair[0] == pair[1])
    }

    /// All path points in wiring order, with their sector index.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &PathPoint)> {
        self.paths
            .iter()
            .enumerate()
            .flat_map(|(sector, path)| path.iter().map(move |point| (sector, point)))
    }
}

/// A generated panel.
#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    /// The raw points, in generation order.
    pub points: Vec<PolarPoint>,
    pub paths: SectorPaths,
    /// False if no offset gave equally sized sectors.
    pub balanced: bool,
}

/// Floor division through the remainder, so points sitting on a sector or ring
/// boundary fall on the same side as in the shipped table.
fn floor_div(a: f64, b: f64) -> f64 {
    let rem = a % b;
    let div = (a - rem) / b;
    let floor = div.floor();
    if div - floor > 0.5 {
        floor + 1.0
    } else {
        floor
    }
}

/// Spreads `count` points over a disc of `radius` with a phyllotaxis spiral.
///
/// Point `i` (from 1) sits at `radius * sqrt(i / count)`, turned `i * alpha` from the x axis.
pub fn generate_polar_points(count: usize, radius: f64, alpha: f64) -> Vec<PolarPoint> {
    (1..=count)
        .map(|i| PolarPoint {
            r: radius * (i as f64 / count as f64).sqrt(),
            theta: (i as f64 * alpha).rem_euclid(TAU),
        })
        .collect()
}

/// Splits the points into sectors and orders each sector in a serpentine path.
///
/// Within a sector, points are grouped into rings `unit_const` wide. The innermost
/// ring runs by increasing angle unless that would start further out than it ends;
/// every following ring runs in the opposite direction to the previous one.
///
/// # Panics
///
/// Panics if `sectors` is zero.
pub fn sector_paths(
    points: &[PolarPoint],
    sectors: usize,
    unit_const: f64,
    theta_offset: f64,
) -> SectorPaths {
    let sector_angle = TAU / sectors as f64;
    let mut buckets: Vec<Vec<(PolarPoint, f64)>> = vec![Vec::new(); sectors];
    for point in points {
        let adjusted = (point.theta + theta_offset).rem_euclid(TAU);
        let index = (floor_div(adjusted, sector_angle) as usize).min(sectors - 1);
        buckets[index].push((*point, adjusted));
    }

    let paths = buckets
        .into_iter()
        .map(|mut bucket| {
            bucket.sort_by(|a, b| a.0.r.total_cmp(&b.0.r));
            let mut rings: BTreeMap<i64, Vec<(PolarPoint, f64)>> = BTreeMap::new();
            for entry in bucket {
                let key = floor_div(entry.0.r, unit_const) as i64;
                rings.entry(key).or_default().push(entry);
            }

            let mut path = Vec::new();
            let mut previous: Option<Order> = None;
            for mut ring in rings.into_values() {
                ring.sort_by(|a, b| a.1.total_cmp(&b.1));
                let order = match previous {
                    None => {
                        let first = ring[0].0.r;
                        let last = ring[ring.len() - 1].0.r;
                        if first > last {
                            ring.reverse();
                            Order::Descending
                        } else {
                            Order::Ascending
                        }
                    }
                    Some(Order::Ascending) => {
                        ring.reverse();
                        Order::Descending
                    }
                    Some(Order::Descending) => Order::Ascending,
                };
                path.extend(ring.into_iter().map(|(point, _)| PathPoint { point, order }));
                previous = Some(order);
            }
            path
        })
        .collect();

    SectorPaths {
        theta_offset,
        paths,
    }
}

/// Rotates the sector boundaries by `offset_step` until all sectors are equally full.
///
/// Gives up once the offset passes a full turn, or after as many attempts as
/// the smallest valid step would need, and keeps the last attempt.
pub fn balance(points: Vec<PolarPoint>, config: &LayoutConfig) -> Layout {
    let max_attempts = (TAU / MIN_OFFSET_STEP).ceil() as usize + 1;
    let mut attempts = 0;
    let mut theta_offset = 0.0;
    loop {
        let paths = sector_paths(&points, config.sectors, config.unit_const, theta_offset);
        attempts += 1;
        debug!("theta offset {:.2}: {:?}", theta_offset, paths.counts());
        if paths.is_balanced() {
            info!(
                "balanced {} sectors at theta offset {:.2}",
                config.sectors, theta_offset
            );
            return Layout {
                points,
                paths,
                balanced: true,
            };
        }
        theta_offset += config.offset_step;
        if theta_offset > TAU || attempts >= max_attempts {
            warn!(
                "no theta offset balances {} points over {} sectors, keeping {:?}",
                points.len(),
                config.sectors,
                paths.counts()
            );
            return Layout {
                points,
                paths,
                balanced: false,
            };
        }
    }
}

/// Builds the balanced layout described by `config`.
pub fn generate(config: &LayoutConfig) -> Result<Layout> {
    config.validate()?;
    let points = generate_polar_points(config.count, config.radius(), config.alpha);
    Ok(balance(points, config))
}

/// The kind of component placed at a layout point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnitKind {
    NeoPixel,
    Mlcc,
}

impl UnitKind {
    /// Prefix of the part numbers, e.g. `D1`.
    pub fn part_prefix(&self) -> char {
        match self {
            UnitKind::NeoPixel => 'D',
            UnitKind::Mlcc => 'C',
        }
    }

    /// Rotation of the footprint relative to its ring direction, degrees.
    fn rotation_offset(&self) -> f64 {
        match self {
            UnitKind::NeoPixel => 90.0,
            UnitKind::Mlcc => 270.0,
        }
    }
}

/// Where one component goes on the board.
#[derive(Debug, Clone, PartialEq)]
pub struct Placement {
    /// 1-based position in wiring order.
    pub id: usize,
    pub kind: UnitKind,
    pub sector: usize,
    /// Sector letter plus position within the sector, e.g. `B12`.
    pub label: String,
    /// Centre in layout coordinates (y up), mm.
    pub center: [f64; 2],
    /// Rotation of the footprint in layout coordinates, radians.
    pub angle: f64,
    pub width: f64,
    pub height: f64,
}

impl Placement {
    /// Board x coordinate, mm.
    pub fn x(&self) -> f64 {
        self.center[0]
    }

    /// Board y coordinate (y down), mm.
    pub fn y(&self) -> f64 {
        -self.center[1]
    }

    /// Pick-and-place rotation, degrees.
    pub fn rotation(&self) -> f64 {
        self.angle.to_degrees() + self.kind.rotation_offset()
    }

    /// The footprint split into four quadrants, each as a polygon in layout coordinates.
    ///
    /// Quadrants run counter-clockwise starting with the upper right one,
    /// before rotation.
    pub fn quadrants(&self) -> [[[f64; 2]; 4]; 4] {
        let (w, h) = (self.width / 2.0, self.height / 2.0);
        let local = [
            [[0.0, 0.0], [w, 0.0], [w, h], [0.0, h]],
            [[-w, 0.0], [0.0, 0.0], [0.0, h], [-w, h]],
            [[-w, -h], [0.0, -h], [0.0, 0.0], [-w, 0.0]],
            [[0.0, -h], [w, -h], [w, 0.0], [0.0, 0.0]],
        ];
        let (sin, cos) = self.angle.sin_cos();
        local.map(|quad| {
            quad.map(|[x, y]| {
                [
                    cos * x - sin * y + self.center[0],
                    sin * x + cos * y + self.center[1],
                ]
            })
        })
    }
}

fn sector_label(sector: usize, index: usize) -> String {
    let letter = char::from_u32('A' as u32 + sector as u32).unwrap_or('?');
    format!("{}{}", letter, index)
}

/// Places one component of `kind` at every layout point, in wiring order.
pub fn place(layout: &Layout, spec: &UnitSpec, kind: UnitKind) -> Vec<Placement> {
    let mut placements = Vec::with_capacity(layout.points.len());
    for (sector, path) in layout.paths.paths.iter().enumerate() {
        for (index, path_point) in path.iter().enumerate() {
            let PolarPoint { r, theta } = path_point.point;
            let angle = match path_point.order {
                Order::Ascending => theta + PI,
                Order::Descending => theta,
            };
            placements.push(Placement {
                id: placements.len() + 1,
                kind,
                sector,
                label: sector_label(sector, index),
                center: [(r + spec.offset) * theta.cos(), (r + spec.offset) * theta.sin()],
                angle,
                width: spec.width,
                height: spec.height,
            });
        }
    }
    placements
}

/// Converts the NeoPixel positions into fixed-point records, ids in wiring order.
pub fn fixed_point_table(layout: &Layout, spec: &UnitSpec) -> Result<Vec<NeoPixelCoord>> {
    layout
        .paths
        .iter()
        .enumerate()
        .map(|(index, (_, path_point))| {
            let PolarPoint { r, theta } = path_point.point;
            let id = i16::try_from(index).map_err(|_| {
                Error::InvalidConfig(format!("pixel {} does not fit a 16-bit id", index))
            })?;
            Ok(NeoPixelCoord {
                id,
                x: to_fixed_point((r + spec.offset) * theta.cos(), COORDINATE_SCALE)?,
                y: to_fixed_point(-(r + spec.offset) * theta.sin(), COORDINATE_SCALE)?,
                r: to_fixed_point(r, COORDINATE_SCALE)?,
                theta_deg: to_fixed_point(theta.to_degrees(), ROTATION_SCALE)?,
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn default_layout() -> Layout {
        generate(&LayoutConfig::default()).unwrap()
    }

    #[test]
    fn polar_points() {
        let points = generate_polar_points(4, 2.0, 1.0);
        assert_eq!(4, points.len());
        assert_eq!(1.0, points[0].r);
        assert_eq!(2.0, points[3].r);
        assert_eq!(1.0, points[0].theta);
        assert_eq!(4.0, points[3].theta);
    }

    #[test]
    fn floor_div_matches_floor_for_plain_values() {
        assert_eq!(2.0, floor_div(7.9, 3.8));
        assert_eq!(0.0, floor_div(0.0, 3.8));
        assert_eq!(3.0, floor_div(3.0, 1.0));
    }

    #[test]
    fn default_layout_is_balanced() {
        let layout = default_layout();
        assert!(layout.balanced);
        assert_eq!(vec![200; 6], layout.paths.counts());
        assert!((layout.paths.theta_offset - 0.09).abs() < 1e-9);
    }

    #[test]
    fn rings_alternate_direction() {
        let config = LayoutConfig::default();
        let layout = default_layout();
        for path in &layout.paths.paths {
            let mut previous: Option<(i64, Order)> = None;
            for path_point in path {
                let ring = floor_div(path_point.point.r, config.unit_const) as i64;
                match previous {
                    Some((prev_ring, prev_order)) if prev_ring == ring => {
                        assert_eq!(prev_order, path_point.order)
                    }
                    Some((prev_ring, prev_order)) => {
                        assert!(ring > prev_ring);
                        assert_ne!(prev_order, path_point.order);
                    }
                    None => {}
                }
                previous = Some((ring, path_point.order));
            }
        }
    }

    #[test]
    fn one_sector_keeps_every_point() {
        let points = generate_polar_points(50, 10.0, crate::config::golden_angle());
        let paths = sector_paths(&points, 1, 2.0, 0.0);
        assert_eq!(vec![50], paths.counts());
        assert!(paths.is_balanced());
    }

    #[test]
    fn unbalanced_layout_is_kept() {
        let config = LayoutConfig {
            count: 7,
            sectors: 2,
            offset_step: 1.0,
            ..Default::default()
        };
        let layout = generate(&config).unwrap();
        assert!(!layout.balanced);
        assert_eq!(7, layout.paths.counts().iter().sum::<usize>());
    }

    #[test]
    fn tiny_step_gives_up() {
        let config = LayoutConfig {
            count: 7,
            sectors: 2,
            offset_step: 1e-20,
            ..Default::default()
        };
        assert!(generate(&config).is_err());
        let points = generate_polar_points(config.count, config.radius(), config.alpha);
        let layout = balance(points, &config);
        assert!(!layout.balanced);
        assert_eq!(7, layout.paths.counts().iter().sum::<usize>());
    }

    #[test]
    fn placements() {
        let config = LayoutConfig::default();
        let layout = default_layout();
        let neopixels = place(&layout, &config.neopixel, UnitKind::NeoPixel);
        let mlccs = place(&layout, &config.mlcc, UnitKind::Mlcc);
        assert_eq!(1200, neopixels.len());
        assert_eq!(1, neopixels[0].id);
        assert_eq!("A0", neopixels[0].label);
        assert_eq!("B0", neopixels[200].label);
        assert_eq!("F199", neopixels[1199].label);
        for (neopixel, mlcc) in neopixels.iter().zip(&mlccs) {
            assert_eq!(neopixel.label, mlcc.label);
            assert!((mlcc.rotation() - neopixel.rotation() - 180.0).abs() < 1e-9);
            let r_np = neopixel.center[0].hypot(neopixel.center[1]);
            let r_ml = mlcc.center[0].hypot(mlcc.center[1]);
            assert!((r_np - r_ml - 1.6).abs() < 1e-9);
        }
    }

    #[test]
    fn quadrants_cover_the_footprint() {
        let placement = Placement {
            id: 1,
            kind: UnitKind::NeoPixel,
            sector: 0,
            label: "A0".to_string(),
            center: [10.0, 0.0],
            angle: PI / 2.0,
            width: 2.0,
            height: 4.0,
        };
        let quads = placement.quadrants();
        // rotated a quarter turn, the upper right quadrant ends up upper left
        let corner = quads[0][2];
        assert!((corner[0] - 8.0).abs() < 1e-12);
        assert!((corner[1] - 1.0).abs() < 1e-12);
        for quad in quads {
            assert!(quad.iter().any(|p| (p[0] - 10.0).abs() < 1e-12 && p[1].abs() < 1e-12));
        }
    }

    #[test]
    fn fixed_point_matches_first_pixel() {
        let layout = default_layout();
        let table = fixed_point_table(&layout, &UnitSpec::neopixel()).unwrap();
        assert_eq!(
            NeoPixelCoord {
                id: 0,
                x: 263,
                y: -343,
                r: 432,
                theta_deg: 525
            },
            table[0]
        );
        assert_eq!(199, table[199].id);
    }
}
