use flywheel_ballistics::core::physics::meters_to_feet;
use macroquad::prelude::*;

use crate::constants::{CONTROLS_Y, TITLE_Y};
use crate::render::draw_ui_text;
use crate::state::TunerState;

pub(crate) fn draw_hud(state: &TunerState, left: f32, right: f32, screen_h: f32, font: Option<&Font>) {
    draw_header_block(left, font);
    draw_result_block(state, left, screen_h, font);
    draw_clamp_badge(state, right, font);
}

fn draw_header_block(left: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    draw_ui_text("Flywheel Shot Tuner", left, TITLE_Y, 30, header_color, font);
    draw_ui_text(
        "Controls: A/D floor distance | W/S edge height | C toggle clamp | L log shot | R reset",
        left,
        CONTROLS_Y,
        20,
        DARKGRAY,
        font,
    );
}

fn draw_result_block(state: &TunerState, left: f32, screen_h: f32, font: Option<&Font>) {
    let header_color = Color::from_rgba(30, 30, 35, 255);
    let r = state.tracker.result();

    draw_ui_text(
        &format!(
            "Flywheel: {:.0} rpm | Launch: {:.1} deg | Landing: {:.1} deg | Exit: {:.2} m/s",
            r.rpm, r.launch_angle_deg, r.landing_angle_deg, r.exit_velocity
        ),
        left,
        screen_h - 76.0,
        24,
        if r.is_finite() { header_color } else { RED },
        font,
    );
    draw_ui_text(
        &format!(
            "Apex: {:.2} ft | Flight: {:.2} s (up {:.2} s, down {:.2} s) | vx {:.2} vy {:.2} m/s | ideal angle {:.1} deg",
            meters_to_feet(r.apex_height),
            r.total_time,
            r.ascent_time,
            r.descent_time,
            r.horizontal_velocity,
            r.vertical_velocity,
            r.unclamped_launch_angle_deg
        ),
        left,
        screen_h - 45.0,
        20,
        BLUE,
        font,
    );

    let status = state.status.borrow();
    draw_ui_text(
        &format!("{} | {}", status.solve, status.config),
        left,
        screen_h - 14.0,
        18,
        DARKGRAY,
        font,
    );
}

fn draw_clamp_badge(state: &TunerState, right: f32, font: Option<&Font>) {
    let r = state.tracker.result();
    if r.launch_angle_deg == r.unclamped_launch_angle_deg {
        return;
    }
    let label = format!(
        "Angle clamped: {:.1} -> {:.1} deg",
        r.unclamped_launch_angle_deg, r.launch_angle_deg
    );
    let size = measure_text(&label, font, 20, 1.0);
    draw_ui_text(&label, right - size.width, TITLE_Y, 20, ORANGE, font);
}
