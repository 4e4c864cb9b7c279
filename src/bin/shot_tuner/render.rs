use flywheel_ballistics::core::ShotSolution;
use flywheel_ballistics::core::physics::meters_to_feet;
use flywheel_ballistics::core::window::ArcWindow;
use macroquad::prelude::*;

use crate::constants::{ARC_SAMPLES, CONTROL_POINT_RADIUS, X_GRID_LINES, Y_GRID_LINES};

/// Screen rectangle the arc is drawn into.
#[derive(Clone, Copy)]
pub(crate) struct PlotRect {
    pub(crate) left: f32,
    pub(crate) right: f32,
    pub(crate) top: f32,
    pub(crate) bottom: f32,
}

impl PlotRect {
    /// Maps a point in feet above the shooter's floor position to the screen.
    pub(crate) fn to_screen(&self, window: &ArcWindow, x_ft: f64, y_ft: f64) -> Vec2 {
        let (nx, ny) = window.normalized(x_ft, y_ft);
        let plot_w = (self.right - self.left).max(1.0);
        let plot_h = (self.bottom - self.top).max(1.0);
        vec2(
            self.left + nx as f32 * plot_w,
            self.bottom - ny as f32 * plot_h,
        )
    }
}

fn format_axis_value(value: f64) -> String {
    if value >= 100.0 {
        format!("{value:.0}")
    } else {
        format!("{value:.1}")
    }
}

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

pub(crate) fn draw_grid(rect: PlotRect, color: Color) {
    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        draw_line(x, rect.top, x, rect.bottom, 1.0, color);
    }
    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        draw_line(rect.left, y, rect.right, y, 1.0, color);
    }
    draw_line(rect.left, rect.bottom, rect.right, rect.bottom, 2.0, DARKGRAY);
    draw_line(rect.left, rect.top, rect.left, rect.bottom, 2.0, DARKGRAY);
}

pub(crate) fn draw_axis_tick_labels(rect: PlotRect, window: &ArcWindow, font: Option<&Font>) {
    let label_color = Color::from_rgba(105, 113, 124, 255);
    let tick_font_size: u16 = 16;

    for i in 0..=X_GRID_LINES {
        let t = i as f32 / X_GRID_LINES as f32;
        let x = rect.left + t * (rect.right - rect.left);
        let label = format_axis_value(t as f64 * window.max_x);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            x - (size.width * 0.5),
            rect.bottom + 22.0,
            tick_font_size,
            label_color,
            font,
        );
    }

    for i in 0..=Y_GRID_LINES {
        let t = i as f32 / Y_GRID_LINES as f32;
        let y = rect.bottom - t * (rect.bottom - rect.top);
        let label = format_axis_value(t as f64 * window.max_y);
        let size = measure_text(&label, font, tick_font_size, 1.0);
        draw_ui_text(
            &label,
            (rect.left - 8.0) - size.width,
            y + (size.height * 0.35),
            tick_font_size,
            label_color,
            font,
        );
    }

    draw_ui_text(
        "Distance (ft)",
        rect.right - 130.0,
        rect.bottom + 48.0,
        18,
        label_color,
        font,
    );
    draw_ui_text("Height (ft)", rect.left + 10.0, rect.top - 8.0, 18, label_color, font);
}

/// Near edge post and landing zone of the target.
pub(crate) fn draw_target(rect: PlotRect, window: &ArcWindow, solution: &ShotSolution) {
    let geometry = &solution.geometry;
    let edge_x = meters_to_feet(geometry.floor_distance);
    let landing_x = meters_to_feet(geometry.total_distance());
    let target_y = meters_to_feet(geometry.target_height);

    let post_base = rect.to_screen(window, edge_x, 0.0);
    let post_top = rect.to_screen(window, edge_x, target_y);
    draw_line(
        post_base.x,
        post_base.y,
        post_top.x,
        post_top.y,
        4.0,
        Color::from_rgba(120, 124, 132, 255),
    );

    let landing = rect.to_screen(window, landing_x, target_y);
    draw_line(
        post_top.x,
        post_top.y,
        landing.x,
        landing.y,
        3.0,
        Color::from_rgba(81, 201, 122, 220),
    );
}

/// Fitted arc plus its three control points, heights lifted by the launch height.
pub(crate) fn draw_fitted_arc(
    rect: PlotRect,
    window: &ArcWindow,
    solution: &ShotSolution,
    launch_height: f64,
) {
    let fit = &solution.fit;
    let to_screen =
        |(x, y): (f64, f64)| rect.to_screen(window, meters_to_feet(x), meters_to_feet(y + launch_height));

    let points: Vec<Vec2> = fit
        .sample(ARC_SAMPLES)
        .into_iter()
        .filter(|(_, y)| y.is_finite())
        .map(to_screen)
        .collect();
    for pair in points.windows(2) {
        draw_line(
            pair[0].x,
            pair[0].y,
            pair[1].x,
            pair[1].y,
            3.0,
            Color::from_rgba(54, 123, 245, 255),
        );
    }

    for point in [(fit.x1, fit.y1), (fit.x2, fit.y2), (fit.x3, fit.y3)] {
        let p = to_screen(point);
        draw_circle(p.x, p.y, CONTROL_POINT_RADIUS, RED);
        draw_circle_lines(p.x, p.y, CONTROL_POINT_RADIUS, 2.0, MAROON);
    }
}
