use egui::Color32;

pub const MARGIN_SM: f32 = 8.0;
pub const MARGIN_MD: f32 = 12.0;
pub const MARGIN_LG: f32 = 16.0;

pub const AVATAR_SIZE: f32 = 24.0;

pub const FONT_SIZE_SM: f32 = 16.0;
pub const FONT_SIZE_MD: f32 = 24.0;

/// Tint for the archer colors the game knows about.
pub fn archer_color(name: &str) -> Option<Color32> {
    match name {
        "green" => Some(Color32::from_rgb(0x4c, 0xaf, 0x50)),
        "blue" => Some(Color32::from_rgb(0x42, 0xa5, 0xf5)),
        "pink" => Some(Color32::from_rgb(0xf0, 0x62, 0x92)),
        "orange" => Some(Color32::from_rgb(0xff, 0x98, 0x00)),
        "white" => Some(Color32::from_rgb(0xec, 0xef, 0xf1)),
        "yellow" => Some(Color32::from_rgb(0xfd, 0xd8, 0x35)),
        "cyan" => Some(Color32::from_rgb(0x26, 0xc6, 0xda)),
        "red" => Some(Color32::from_rgb(0xef, 0x53, 0x50)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_known_archer_colors_tint() {
        assert!(archer_color("green").is_some());
        assert!(archer_color("mauve").is_none());
    }
}
