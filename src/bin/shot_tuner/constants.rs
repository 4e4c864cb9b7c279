pub const INITIAL_WINDOW_WIDTH: i32 = 1600;
pub const INITIAL_WINDOW_HEIGHT: i32 = 900;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_WIDTH: f32 = 380.0;
pub const LEFT_MARGIN: f32 = PANEL_WIDTH + 90.0;
pub const RIGHT_MARGIN: f32 = 30.0;
pub const TOP_MARGIN: f32 = 140.0;
pub const BOTTOM_MARGIN: f32 = 130.0;

pub const TITLE_Y: f32 = 46.0;
pub const CONTROLS_Y: f32 = 92.0;
pub const ARC_SAMPLES: usize = 240;
pub const X_GRID_LINES: usize = 10;
pub const Y_GRID_LINES: usize = 8;
pub const CONTROL_POINT_RADIUS: f32 = 7.0;
pub const DISTANCE_KEY_RATE_FT: f32 = 4.0;
pub const HEIGHT_KEY_RATE_FT: f32 = 1.5;
