use crate::QuizApp;
use crate::model::QuizMode;
use crate::summary::ReviewKind;
use egui::{Button, CentralPanel, CollapsingHeader, Color32, Context, RichText, ScrollArea};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    let summary = app.summary();
    let can_practice = app.can_practice();
    let practice = app.session.mode() == QuizMode::Practice;

    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let button_size = [panel_width / 3.0, 36.0];

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 30))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading(if practice { "Practice complete" } else { "Quiz complete" });
                    ui.add_space(10.0);
                    ui.label(format!(
                        "Final score: {}/{} ({:.1}%)",
                        summary.score, summary.total, summary.percentage
                    ));
                    if summary.passed {
                        ui.label(RichText::new("🎉 You passed!").color(Color32::GREEN).strong());
                    } else {
                        ui.label(
                            RichText::new("Keep studying and try again.")
                                .color(Color32::LIGHT_RED)
                                .strong(),
                        );
                    }
                    ui.add_space(10.0);

                    ScrollArea::vertical().max_height(420.0).show(ui, |ui| {
                        if summary.review().next().is_none() {
                            ui.label("No bookmarked or incorrect questions to review.");
                        }
                        for entry in summary.review() {
                            let tag = match entry.kind {
                                ReviewKind::Bookmarked => "🔖",
                                ReviewKind::Incorrect => "❌",
                            };
                            let title = format!("{tag} Q{}: {}", entry.number, entry.question);
                            CollapsingHeader::new(title)
                                .id_salt((entry.kind as u8, entry.number))
                                .show(ui, |ui| {
                                    if let Some(answer) = &entry.user_answer {
                                        ui.label(format!("Your answer: {answer}"));
                                    }
                                    ui.label(format!("Correct answer: {}", entry.correct_answer));
                                    ui.label(format!("💡 {}", entry.explanation));
                                    if entry.kind == ReviewKind::Incorrect {
                                        ui.label(RichText::new(entry.study_tip()).italics());
                                    }
                                    if ui.small_button("⚠ Report an issue").clicked() {
                                        app.open_report(entry.number - 1);
                                    }
                                });
                        }
                    });

                    for line in [&app.message, &app.notice] {
                        if !line.is_empty() {
                            ui.add_space(6.0);
                            ui.label(line.as_str());
                        }
                    }

                    ui.add_space(10.0);
                    ui.horizontal(|ui| {
                        if can_practice
                            && ui
                                .add_sized(button_size, Button::new("🔖 Practice bookmarked"))
                                .clicked()
                        {
                            app.practice_bookmarked();
                        }
                        if ui
                            .add_sized(button_size, Button::new("🔄 New quiz"))
                            .clicked()
                        {
                            app.start_quiz();
                        }
                        if ui
                            .add_sized(button_size, Button::new("🔙 Back to start"))
                            .clicked()
                        {
                            app.back_to_start();
                        }
                    });
                });
        });
    });
}
