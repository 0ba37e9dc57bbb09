use eframe::{egui, App, Frame};
use egui::{Color32, Stroke};
use egui_plot::{Legend, Line, LineStyle, Plot, PlotPoints, PlotUi, Points, Polygon};
use std::f64::consts::TAU;

use crate::config::{LayoutConfig, UnitSpec};
use crate::error::{Error, Result};
use crate::layout::{place, Layout, Placement, UnitKind};

const PATH_COLORS: [Color32; 6] = [
    Color32::from_rgb(0, 128, 0),
    Color32::from_rgb(255, 165, 0),
    Color32::from_rgb(128, 0, 128),
    Color32::from_rgb(0, 255, 255),
    Color32::from_rgb(255, 0, 255),
    Color32::from_rgb(255, 255, 0),
];

fn circle(radius: f64) -> PlotPoints {
    (0..=180)
        .map(|i| {
            let angle = TAU * i as f64 / 180.0;
            [radius * angle.cos(), radius * angle.sin()]
        })
        .collect()
}

fn quad_colors(spec: &UnitSpec) -> Result<[Color32; 4]> {
    Ok(spec.quad_rgb()?.map(|[r, g, b]| Color32::from_rgb(r, g, b)))
}

/// Window showing a generated panel: outlines, wiring paths and every footprint.
pub struct PanelApp {
    config: LayoutConfig,
    layout: Layout,
    neopixels: Vec<Placement>,
    mlccs: Vec<Placement>,
    neopixel_colors: [Color32; 4],
    mlcc_colors: [Color32; 4],
    show_guides: bool,
    show_units: bool,
    show_points: bool,
    show_paths: bool,
}

impl PanelApp {
    pub fn new(layout: Layout, config: LayoutConfig) -> Result<PanelApp> {
        Ok(PanelApp {
            neopixels: place(&layout, &config.neopixel, UnitKind::NeoPixel),
            mlccs: place(&layout, &config.mlcc, UnitKind::Mlcc),
            neopixel_colors: quad_colors(&config.neopixel)?,
            mlcc_colors: quad_colors(&config.mlcc)?,
            config,
            layout,
            show_guides: true,
            show_units: true,
            show_points: true,
            show_paths: true,
        })
    }

    fn draw_guides(&self, plot_ui: &mut PlotUi) {
        let component_radius = self.config.component_diameter / 2.0;
        let board_radius = self.config.board_diameter / 2.0;
        plot_ui.line(
            Line::new(circle(component_radius))
                .color(Color32::BLUE)
                .style(LineStyle::dashed_loose())
                .name("Component area"),
        );
        plot_ui.line(
            Line::new(circle(board_radius))
                .color(Color32::LIGHT_BLUE)
                .style(LineStyle::dashed_loose())
                .name("Board outline"),
        );

        let mut k = 1.0;
        while k * self.config.unit_const < board_radius {
            plot_ui.line(
                Line::new(circle(k * self.config.unit_const))
                    .color(Color32::GRAY)
                    .width(0.5)
                    .style(LineStyle::dotted_loose()),
            );
            k += 1.0;
        }

        // sector i starts where theta + offset crosses i * sector_angle
        let sector_angle = TAU / self.config.sectors as f64;
        for i in 0..self.config.sectors {
            let angle = i as f64 * sector_angle - self.layout.paths.theta_offset;
            plot_ui.line(
                Line::new(PlotPoints::from(vec![
                    [0.0, 0.0],
                    [board_radius * angle.cos(), board_radius * angle.sin()],
                ]))
                .color(Color32::BLACK)
                .width(0.5)
                .style(LineStyle::dashed_dense()),
            );
        }
    }

    fn draw_units(plot_ui: &mut PlotUi, placements: &[Placement], colors: &[Color32; 4]) {
        for placement in placements {
            for (quad, color) in placement.quadrants().into_iter().zip(colors) {
                plot_ui.polygon(
                    Polygon::new(PlotPoints::from(quad.to_vec()))
                        .fill_color(*color)
                        .stroke(Stroke::NONE),
                );
            }
        }
    }

    fn draw_paths(&self, plot_ui: &mut PlotUi) {
        for (sector, path) in self.layout.paths.paths.iter().enumerate() {
            if path.len() < 2 {
                continue;
            }
            let points: PlotPoints = path.iter().map(|p| p.point.to_cartesian()).collect();
            plot_ui.line(
                Line::new(points)
                    .color(PATH_COLORS[sector % PATH_COLORS.len()])
                    .width(2.0)
                    .name(format!("Sector {} path", sector)),
            );
        }
    }
}

impl App for PanelApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!(
                    "{} points, theta offset {:.2}",
                    self.layout.points.len(),
                    self.layout.paths.theta_offset
                ));
                ui.separator();
                ui.label(format!("Sector counts: {:?}", self.layout.paths.counts()));
                if !self.layout.balanced {
                    ui.colored_label(Color32::RED, "unbalanced");
                }
                ui.separator();
                ui.checkbox(&mut self.show_guides, "Guides");
                ui.checkbox(&mut self.show_units, "Units");
                ui.checkbox(&mut self.show_points, "Points");
                ui.checkbox(&mut self.show_paths, "Paths");
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            Plot::new("panel")
                .data_aspect(1.0)
                .legend(Legend::default())
                .show(ui, |plot_ui| {
                    if self.show_guides {
                        self.draw_guides(plot_ui);
                    }
                    if self.show_units {
                        Self::draw_units(plot_ui, &self.neopixels, &self.neopixel_colors);
                        Self::draw_units(plot_ui, &self.mlccs, &self.mlcc_colors);
                    }
                    if self.show_points {
                        let points: PlotPoints =
                            self.layout.points.iter().map(|p| p.to_cartesian()).collect();
                        plot_ui.points(Points::new(points).color(Color32::RED).radius(1.0));
                    }
                    if self.show_paths {
                        self.draw_paths(plot_ui);
                    }
                });
        });
    }
}

/// Opens the viewer and blocks until the window is closed.
pub fn run(layout: Layout, config: LayoutConfig) -> Result<()> {
    let title = format!("{} points and paths for each sector", layout.points.len());
    let app = PanelApp::new(layout, config)?;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([800.0, 800.0]),
        ..Default::default()
    };
    eframe::run_native(&title, native_options, Box::new(|_cc| Box::new(app)))
        .map_err(|err| Error::Viewer(err.to_string()))
}
