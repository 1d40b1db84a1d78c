// src/ui/helpers.rs
use egui::{Button, Color32, RichText, Ui, Vec2};

use crate::summary::PassStatus;

pub fn big_button(ui: &mut Ui, label: &str, width: f32, height: f32, enabled: bool) -> bool {
    ui.add_enabled(enabled, Button::new(label).min_size(Vec2::new(width, height)))
        .clicked()
}

/// Color del marcador según si aún se puede aprobar.
pub fn status_text(status: PassStatus) -> RichText {
    match status {
        PassStatus::Passed => RichText::new("✅ Passing score reached").color(Color32::GREEN),
        PassStatus::OnTrack => RichText::new("🟡 Still possible to pass").color(Color32::YELLOW),
        PassStatus::CannotPass => {
            RichText::new("❌ Passing score no longer reachable").color(Color32::LIGHT_RED)
        }
    }
}
