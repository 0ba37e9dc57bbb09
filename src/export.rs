//! Writes the files the board and firmware are built from.

use log::info;
use serde::Serialize;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::config::LayoutConfig;
use crate::coords::{to_physical_units, NeoPixelCoord, COORDINATE_SCALE, ROTATION_SCALE};
use crate::error::{Error, Result};
use crate::layout::{fixed_point_table, place, Layout, Placement, UnitKind};

pub const NEOPIXEL_CSV: &str = "units_neopixel.csv";
pub const MLCC_CSV: &str = "units_mlcc.csv";
pub const TABLE_SOURCE: &str = "neopixel_table.rs";

#[derive(Debug, Serialize)]
struct PlacementRow<'a> {
    #[serde(rename = "ID")]
    id: usize,
    #[serde(rename = "Part Number")]
    part_number: String,
    x: f64,
    y: f64,
    rotation: f64,
    sector: &'a str,
}

/// Writes a pick-and-place CSV, one row per placement.
pub fn write_placements_csv<W: Write>(write: W, placements: &[Placement]) -> Result<()> {
    let mut writer = csv::Writer::from_writer(write);
    for placement in placements {
        writer.serialize(PlacementRow {
            id: placement.id,
            part_number: format!("{}{}", placement.kind.part_prefix(), placement.id),
            x: placement.x(),
            y: placement.y(),
            rotation: placement.rotation(),
            sector: &placement.label,
        })?;
    }
    writer.flush()?;
    Ok(())
}

fn range<F: Fn(&NeoPixelCoord) -> i16>(records: &[NeoPixelCoord], field: F) -> (i16, i16) {
    records
        .iter()
        .map(field)
        .fold((i16::MAX, i16::MIN), |(min, max), v| (min.min(v), max.max(v)))
}

/// Writes the Rust source of the constant coordinate table.
///
/// `labels` are written as a trailing comment on each record, and must be as
/// long as `records`.
pub fn write_table_source<W: Write>(
    mut write: W,
    records: &[NeoPixelCoord],
    labels: &[String],
) -> Result<()> {
    if records.is_empty() || records.len() != labels.len() {
        return Err(Error::InvalidConfig(format!(
            "cannot write a table of {} records with {} labels",
            records.len(),
            labels.len()
        )));
    }
    let count = records.len();
    writeln!(write, "//! Fixed-point coordinates of every NeoPixel on the round panel.")?;
    writeln!(write, "//!")?;
    writeln!(
        write,
        "//! Generated by `panel-layout`. Regenerate the layout instead of editing this file."
    )?;
    writeln!(write, "//!")?;
    writeln!(
        write,
        "//! Linear values are stored in 0.01 mm units, angles in 0.1 degree units."
    )?;
    writeln!(write, "//!")?;
    writeln!(write, "//! - id: 0 to {} ({} pixels)", count - 1, count)?;
    let linear = [
        ("x", range(records, |c| c.x)),
        ("y", range(records, |c| c.y)),
        ("r", range(records, |c| c.r)),
    ];
    for (name, (min, max)) in linear {
        writeln!(
            write,
            "//! - {}: {} to {} ({:.2} mm to {:.2} mm)",
            name,
            min,
            max,
            to_physical_units(min, COORDINATE_SCALE),
            to_physical_units(max, COORDINATE_SCALE)
        )?;
    }
    let (min, max) = range(records, |c| c.theta_deg);
    writeln!(
        write,
        "//! - theta_deg: {} to {} ({:.1} deg to {:.1} deg)",
        min,
        max,
        to_physical_units(min, ROTATION_SCALE),
        to_physical_units(max, ROTATION_SCALE)
    )?;
    writeln!(write)?;
    writeln!(write, "use crate::coords::NeoPixelCoord;")?;
    writeln!(write)?;
    writeln!(write, "/// Number of pixels in [`NEOPIXEL_COORDS`].")?;
    writeln!(write, "pub const NEOPIXEL_COUNT: i16 = {};", count)?;
    writeln!(write)?;
    writeln!(
        write,
        "pub(crate) static NEOPIXEL_COORDS: [NeoPixelCoord; NEOPIXEL_COUNT as usize] = ["
    )?;
    for (record, label) in records.iter().zip(labels) {
        writeln!(
            write,
            "    NeoPixelCoord {{ id: {}, x: {}, y: {}, r: {}, theta_deg: {} }}, // {}",
            record.id, record.x, record.y, record.r, record.theta_deg, label
        )?;
    }
    writeln!(write, "];")?;
    Ok(())
}

/// Paths of the files written by [export_all].
#[derive(Debug, Clone, PartialEq)]
pub struct ExportSummary {
    pub neopixel_csv: PathBuf,
    pub mlcc_csv: PathBuf,
    pub table_source: PathBuf,
    pub pixels: usize,
}

/// Writes both placement CSVs and the table source into `dir`.
pub fn export_all<P: AsRef<Path>>(
    dir: P,
    layout: &Layout,
    config: &LayoutConfig,
) -> Result<ExportSummary> {
    let dir = dir.as_ref();
    std::fs::create_dir_all(dir)?;
    let neopixels = place(layout, &config.neopixel, UnitKind::NeoPixel);
    let mlccs = place(layout, &config.mlcc, UnitKind::Mlcc);

    let summary = ExportSummary {
        neopixel_csv: dir.join(NEOPIXEL_CSV),
        mlcc_csv: dir.join(MLCC_CSV),
        table_source: dir.join(TABLE_SOURCE),
        pixels: neopixels.len(),
    };

    write_placements_csv(File::create(&summary.neopixel_csv)?, &neopixels)?;
    info!("wrote {}", summary.neopixel_csv.display());
    write_placements_csv(File::create(&summary.mlcc_csv)?, &mlccs)?;
    info!("wrote {}", summary.mlcc_csv.display());

    let records = fixed_point_table(layout, &config.neopixel)?;
    let labels: Vec<String> = neopixels.into_iter().map(|p| p.label).collect();
    let mut write = BufWriter::new(File::create(&summary.table_source)?);
    write_table_source(&mut write, &records, &labels)?;
    write.flush()?;
    info!("wrote {}", summary.table_source.display());

    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::generate;

    fn small_config() -> LayoutConfig {
        LayoutConfig {
            count: 60,
            sectors: 3,
            ..Default::default()
        }
    }

    #[test]
    fn csv_header_and_part_numbers() {
        let config = small_config();
        let layout = generate(&config).unwrap();
        let placements = place(&layout, &config.mlcc, UnitKind::Mlcc);
        let mut buf = Vec::new();
        write_placements_csv(&mut buf, &placements).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let mut lines = text.lines();
        assert_eq!(Some("ID,Part Number,x,y,rotation,sector"), lines.next());
        let first = lines.next().unwrap();
        assert!(first.starts_with("1,C1,"));
        assert!(first.ends_with(",A0"));
        assert_eq!(59, lines.count());
    }

    #[test]
    fn csv_rows_mirror_y_and_turn_footprints() {
        let config = small_config();
        let layout = generate(&config).unwrap();
        let placements = place(&layout, &config.neopixel, UnitKind::NeoPixel);
        let mut buf = Vec::new();
        write_placements_csv(&mut buf, &placements).unwrap();

        let mut reader = csv::Reader::from_reader(buf.as_slice());
        let record = reader.records().next().unwrap().unwrap();
        let field = |i: usize| record[i].parse::<f64>().unwrap();
        let first = &placements[0];
        assert_eq!("1", &record[0]);
        assert_eq!("D1", &record[1]);
        assert_eq!(first.center[0], field(2));
        assert_eq!(-first.center[1], field(3));
        assert_eq!(first.angle.to_degrees() + 90.0, field(4));
        assert_eq!("A0", &record[5]);
        assert_ne!(0.0, first.center[1]);
    }

    #[test]
    fn table_source_lists_every_record() {
        let records = vec![
            NeoPixelCoord {
                id: 0,
                x: 263,
                y: -343,
                r: 432,
                theta_deg: 525,
            },
            NeoPixelCoord {
                id: 1,
                x: -100,
                y: 50,
                r: 112,
                theta_deg: 1534,
            },
        ];
        let labels = vec!["A0".to_string(), "B0".to_string()];
        let mut buf = Vec::new();
        write_table_source(&mut buf, &records, &labels).unwrap();
        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("pub const NEOPIXEL_COUNT: i16 = 2;"));
        assert!(text.contains("//! - x: -100 to 263 (-1.00 mm to 2.63 mm)"));
        assert!(text.contains("//! - theta_deg: 525 to 1534 (52.5 deg to 153.4 deg)"));
        assert!(text.contains(
            "    NeoPixelCoord { id: 1, x: -100, y: 50, r: 112, theta_deg: 1534 }, // B0\n"
        ));
        assert!(text.ends_with("];\n"));
    }

    #[test]
    fn table_source_needs_labels() {
        let records = vec![NeoPixelCoord {
            id: 0,
            x: 0,
            y: 0,
            r: 0,
            theta_deg: 0,
        }];
        assert!(write_table_source(Vec::new(), &records, &[]).is_err());
    }

    #[test]
    fn export_all_writes_three_files() {
        let dir = tempfile::tempdir().unwrap();
        let config = small_config();
        let layout = generate(&config).unwrap();
        let summary = export_all(dir.path().join("out"), &layout, &config).unwrap();
        assert_eq!(60, summary.pixels);
        for path in [&summary.neopixel_csv, &summary.mlcc_csv, &summary.table_source] {
            assert!(path.exists(), "{} was not written", path.display());
        }
        let source = std::fs::read_to_string(&summary.table_source).unwrap();
        assert_eq!(60, source.lines().filter(|l| l.contains("NeoPixelCoord {")).count());
    }
}
