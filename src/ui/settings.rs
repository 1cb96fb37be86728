use egui::Color32;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Serialize, Deserialize, Clone)]
pub struct UiSettings {
    pub ui_scale: f32,

    // Stat → bar color mapping (extensible)
    pub stat_colors: HashMap<String, [u8; 4]>,
}

impl Default for UiSettings {
    fn default() -> Self {
        let mut stat_colors = HashMap::new();

        stat_colors.insert("happiness".into(), [220, 160, 40, 255]);
        stat_colors.insert("energy".into(), [60, 140, 200, 255]);
        stat_colors.insert("coins".into(), [200, 170, 50, 255]);
        stat_colors.insert("credits".into(), [140, 90, 200, 255]);

        Self {
            ui_scale: 1.0,
            stat_colors,
        }
    }
}

impl UiSettings {
    pub fn color(&self, key: &str) -> Color32 {
        self.stat_colors
            .get(key)
            .map(|c| Color32::from_rgba_unmultiplied(c[0], c[1], c[2], c[3]))
            .unwrap_or(Color32::WHITE)
    }

    pub fn set_color(&mut self, key: &str, color: Color32) {
        self.stat_colors.insert(
            key.to_string(),
            [color.r(), color.g(), color.b(), color.a()],
        );
    }
}
