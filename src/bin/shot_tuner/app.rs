use flywheel_ballistics::core::window::ArcWindow;
use macroquad::prelude::*;
use tracing::warn;

use crate::constants::{
    BOTTOM_MARGIN, INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, LEFT_MARGIN, MSAA_SAMPLES,
    RIGHT_MARGIN, TOP_MARGIN, UI_FONT_PATH,
};
use crate::controls::{apply_actions, apply_keyboard_adjustments, draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{PlotRect, draw_axis_tick_labels, draw_fitted_arc, draw_grid, draw_target};
use crate::state::TunerState;

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Flywheel Shot Tuner".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

pub(crate) async fn run() {
    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = TunerState::new();

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let rect = PlotRect {
            left: LEFT_MARGIN,
            right: screen_w - RIGHT_MARGIN,
            top: TOP_MARGIN,
            bottom: screen_h - BOTTOM_MARGIN,
        };

        let actions = hotkey_actions().merge(draw_control_panel(&mut state));
        apply_actions(&mut state, actions);
        apply_keyboard_adjustments(&mut state, frame_dt);
        state.refresh();

        let launch_height = state.tracker.config().launch_height;
        let solution = *state.tracker.solution();
        let window = ArcWindow::for_solution(&solution, launch_height);

        clear_background(Color::from_rgba(250, 251, 253, 255));
        draw_grid(rect, Color::from_rgba(227, 231, 236, 255));
        draw_axis_tick_labels(rect, &window, ui_font.as_ref());
        draw_target(rect, &window, &solution);
        draw_fitted_arc(rect, &window, &solution, launch_height);
        draw_hud(&state, rect.left, rect.right, screen_h, ui_font.as_ref());

        next_frame().await;
    }
}
