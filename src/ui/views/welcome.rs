use crate::QuizApp;
use crate::ui::helpers::big_button;
use crate::ui::layout::card_panel;
use egui::{Align, Context, RichText};

pub fn ui_welcome(app: &mut QuizApp, ctx: &Context) {
    let bank_size = app.bank_size();
    let count = app.config.question_count;
    let pass = app.config.pass_percentage;

    card_panel(ctx, 540.0, |ui| {
        ui.with_layout(egui::Layout::top_down(Align::Center), |ui| {
            ui.heading("🚗 Minnesota Driving License Quiz");
            ui.add_space(12.0);
            ui.label(format!("{count} questions drawn from a bank of {bank_size}."));
            ui.label(format!("You need {pass:.0}% to pass."));
            ui.add_space(18.0);

            let btn_w = (ui.available_width() * 0.9).clamp(120.0, 400.0);
            if big_button(ui, "▶ Start quiz", btn_w, 40.0, true) {
                app.start_quiz();
            }

            if !app.message.is_empty() {
                ui.add_space(10.0);
                ui.label(RichText::new(&app.message).color(egui::Color32::YELLOW));
            }
        });
    });
}
