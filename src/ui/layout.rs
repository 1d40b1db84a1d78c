use egui::{Button, CentralPanel, Context, Frame, ScrollArea, Ui, Visuals};

use crate::QuizApp;

pub fn top_panel(app: &mut QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            let (mastered, total) = app.mastery();
            ui.label(format!("📚 Mastered {mastered} of {total} questions"));

            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if ui.button("🔄 Reset progress").clicked() {
                    app.confirm_reset = true;
                }
            });
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            if ui.button("🌙 Dark mode").clicked() {
                ctx.set_visuals(Visuals::dark());
            }
            if ui.button("☀ Light mode").clicked() {
                ctx.set_visuals(Visuals::light());
            }
        });
    });
}

pub fn history_panel(app: &QuizApp, ctx: &Context) {
    egui::SidePanel::right("history_panel")
        .resizable(false)
        .default_width(200.0)
        .show(ctx, |ui| {
            ui.heading("Past attempts");
            ui.add_space(6.0);
            ScrollArea::vertical().show(ui, |ui| {
                for row in app.history_rows() {
                    ui.label(row.label());
                }
            });
        });
}

/// Tarjeta centrada en horizontal, con scroll si el contenido no cabe.
pub fn card_panel(ctx: &Context, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
        let top = (ui.available_height() * 0.15).min(120.0);
        ui.add_space(top);
        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                Frame::group(ui.style())
                    .fill(ui.visuals().window_fill())
                    .inner_margin(egui::Margin::same(20))
                    .show(ui, |ui| {
                        ui.set_width(ui.available_width().min(max_width));
                        inner(ui);
                    });
            });
        });
    });
}

/// Pareja de botones del mismo ancho, cada uno con su etiqueta y si está activo.
/// Devuelve qué botón se ha pulsado.
pub fn button_pair(ui: &mut Ui, width: f32, buttons: [(&str, bool); 2]) -> [bool; 2] {
    let size = egui::vec2((width - ui.spacing().item_spacing.x) / 2.0, 36.0);
    let mut clicked = [false; 2];
    ui.horizontal(|ui| {
        for ((label, enabled), hit) in buttons.into_iter().zip(clicked.iter_mut()) {
            *hit = ui
                .add_enabled(enabled, Button::new(label).min_size(size))
                .clicked();
        }
    });
    clicked
}
