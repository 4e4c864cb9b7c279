//! PNG rendering of a solved shot's fitted arc.

use std::fs;
use std::path::Path;

use plotters::prelude::*;
use thiserror::Error;

use crate::core::physics::meters_to_feet;
use crate::core::window::ArcWindow;
use crate::core::{PhysicalConfig, ShotSolution};

const ARC_SAMPLES: usize = 200;

#[derive(Debug, Error)]
pub enum PlotError {
    #[error("failed to prepare output: {0}")]
    Io(#[from] std::io::Error),
    #[error("output path contains invalid UTF-8")]
    Path,
    #[error("drawing failed: {0}")]
    Draw(String),
}

/// Everything drawn for one shot, in feet above the floor.
#[derive(Clone, Debug, PartialEq)]
pub struct ArcSeries {
    pub curve: Vec<(f64, f64)>,
    pub control_points: [(f64, f64); 3],
    pub apex: (f64, f64),
}

impl ArcSeries {
    pub fn from_solution(solution: &ShotSolution, config: &PhysicalConfig) -> Self {
        let fit = &solution.fit;
        let lift = config.launch_height;
        let to_ft = |(x, y): (f64, f64)| (meters_to_feet(x), meters_to_feet(y + lift));

        let (vertex_x, _) = fit.vertex();
        Self {
            curve: fit.sample(ARC_SAMPLES).into_iter().map(to_ft).collect(),
            control_points: [
                to_ft((fit.x1, fit.y1)),
                to_ft((fit.x2, fit.y2)),
                to_ft((fit.x3, fit.y3)),
            ],
            apex: (
                meters_to_feet(vertex_x),
                meters_to_feet(solution.result.apex_height),
            ),
        }
    }
}

fn draw_err<E: std::error::Error>(err: E) -> PlotError {
    PlotError::Draw(err.to_string())
}

fn select_font_family() -> FontFamily<'static> {
    if cfg!(target_os = "macos") {
        FontFamily::Name("Helvetica")
    } else if cfg!(target_os = "windows") {
        FontFamily::Name("Arial")
    } else {
        FontFamily::Name("DejaVu Sans")
    }
}

/// Draws the fitted arc, its control points and the apex to a PNG file.
pub fn render_arc(
    path: &Path,
    solution: &ShotSolution,
    config: &PhysicalConfig,
    size: (u32, u32),
) -> Result<(), PlotError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let output = path.to_str().ok_or(PlotError::Path)?;

    let series = ArcSeries::from_solution(solution, config);
    let window = ArcWindow::for_solution(solution, config.launch_height);
    let result = &solution.result;

    let font_family = select_font_family();
    let caption_font = FontDesc::new(font_family, 24.0, FontStyle::Bold);
    let label_font = FontDesc::new(font_family, 16.0, FontStyle::Normal);

    let root = BitMapBackend::new(output, size).into_drawing_area();
    root.fill(&WHITE).map_err(draw_err)?;

    let caption = format!(
        "{:.0} rpm at {:.1} deg (landing {:.1} deg, {:.2} s)",
        result.rpm, result.launch_angle_deg, result.landing_angle_deg, result.total_time
    );
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(caption, caption_font)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d(0.0..window.max_x, 0.0..window.max_y)
        .map_err(draw_err)?;

    chart
        .configure_mesh()
        .x_desc("Distance (ft)")
        .y_desc("Height (ft)")
        .label_style(label_font.clone())
        .draw()
        .map_err(draw_err)?;

    let arc_color = RGBColor(54, 123, 245);
    chart
        .draw_series(LineSeries::new(
            series.curve.iter().copied().filter(|(_, y)| y.is_finite()),
            ShapeStyle::from(&arc_color).stroke_width(3),
        ))
        .map_err(draw_err)?;

    chart
        .draw_series(
            series
                .control_points
                .iter()
                .map(|&point| Circle::new(point, 6, RED.filled())),
        )
        .map_err(draw_err)?;

    let apex_color = RGBColor(210, 100, 20);
    chart
        .draw_series(std::iter::once(TriangleMarker::new(
            series.apex,
            8,
            apex_color.filled(),
        )))
        .map_err(draw_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            format!("apex {:.2} ft", series.apex.1),
            (series.apex.0, series.apex.1 + window.max_y * 0.03),
            label_font.color(&apex_color),
        )))
        .map_err(draw_err)?;

    root.present().map_err(draw_err)?;
    Ok(())
}
