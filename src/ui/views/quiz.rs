use crate::QuizApp;
use crate::app::Verdict;
use crate::ui::helpers::status_text;
use crate::ui::layout::button_pair;
use egui::{CentralPanel, Color32, Context, ProgressBar, RichText, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let Some(view) = app.question_view() else {
        return;
    };
    let board = app.score_board();

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(40, 20))
            .show(ui, |ui| {
                ui.set_width(panel_width);

                // Marcador en vivo
                ui.horizontal(|ui| {
                    ui.label(format!(
                        "Score: {}/{}  |  Required to pass: {}",
                        board.score, board.total, board.required
                    ));
                    ui.label(status_text(board.status));
                });
                ui.add(ProgressBar::new(view.progress_fraction()).text(view.progress_label()));
                ui.add_space(10.0);

                ui.label(RichText::new(format!("Topic: {}", view.topic)).italics());
                ScrollArea::vertical().max_height(150.0).show(ui, |ui| {
                    ui.heading(&view.text);
                });
                ui.add_space(8.0);

                // Opciones en el orden barajado de esta sesión
                ui.add_enabled_ui(!view.is_submitted(), |ui| {
                    for option in &view.options.shuffled_options {
                        ui.radio_value(&mut app.selected, Some(option.clone()), option.as_str());
                    }
                });
                ui.add_space(8.0);

                // El veredicto sale de la sesión, no del último mensaje
                match &view.verdict {
                    Verdict::Pending => {
                        if !app.message.is_empty() {
                            ui.label(RichText::new(&app.message).color(Color32::YELLOW));
                        }
                    }
                    Verdict::Correct => {
                        ui.label(RichText::new("✅ Correct!").color(Color32::GREEN));
                        ui.label(format!("💡 {}", view.explanation));
                    }
                    Verdict::Incorrect { user_answer } => {
                        ui.label(
                            RichText::new(format!(
                                "❌ Incorrect! The correct answer is: {}",
                                view.options.correct_answer
                            ))
                            .color(Color32::LIGHT_RED),
                        );
                        ui.label(format!("Your answer: {user_answer}"));
                        ui.label(format!("💡 {}", view.explanation));
                    }
                }
                if !app.notice.is_empty() {
                    ui.label(RichText::new(&app.notice).italics());
                }
                ui.add_space(8.0);

                let submitted = view.is_submitted();
                let [check, next] = button_pair(
                    ui,
                    panel_width,
                    [
                        ("✔ Check answer", !submitted && app.selected.is_some()),
                        ("Next question ➡", submitted),
                    ],
                );
                if check {
                    app.submit_selected();
                }
                if next {
                    app.next_question();
                }

                let [bookmark, report] = button_pair(
                    ui,
                    panel_width,
                    [(view.bookmark_label(), true), ("⚠ Report an issue", true)],
                );
                if bookmark {
                    app.toggle_bookmark(view.index);
                }
                if report {
                    app.open_report(view.index);
                }

                ui.add_space(8.0);
                if ui.button("🔙 Quit to start").clicked() {
                    app.back_to_start();
                }
            });
    });
}
