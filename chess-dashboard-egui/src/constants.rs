pub const INIT_WINDOW_SIZE: [u32; 2] = [900, 760]; // [width, height]

pub const BACKGROUND_COLOR: egui::Color32 = egui::Color32::from_rgb(32, 35, 38);

pub const CONTROL_WIDTH: f32 = 320.0;

pub const CHART_COLORS: [egui::Color32; 8] = [
    egui::Color32::from_rgb(59, 102, 140),
    egui::Color32::from_rgb(140, 107, 54),
    egui::Color32::from_rgb(104, 140, 56),
    egui::Color32::from_rgb(140, 51, 51),
    egui::Color32::from_rgb(77, 58, 140),
    egui::Color32::from_rgb(59, 140, 106),
    egui::Color32::from_rgb(140, 60, 140),
    egui::Color32::from_rgb(140, 82, 99),
];

pub const NOT_FOUND_COLOR: egui::Color32 = egui::Color32::LIGHT_YELLOW;
pub const ERROR_COLOR: egui::Color32 = egui::Color32::LIGHT_RED;

pub const BAR_WIDTH: f64 = 0.6;
pub const PIE_RADIUS: f64 = 1.0;
pub const PIE_SEGMENTS: usize = 100;
