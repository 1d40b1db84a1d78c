use crate::QuizApp;
use egui::{Context, TextEdit};

pub fn ui_report_window(app: &mut QuizApp, ctx: &Context) {
    let question = app
        .report
        .question_index
        .and_then(|i| app.session.questions().get(i))
        .map(|q| q.text.clone())
        .unwrap_or_default();

    egui::Window::new("Report an issue")
        .collapsible(false)
        .resizable(false)
        .show(ctx, |ui| {
            ui.label(format!("Question: {question}"));
            ui.add_space(6.0);
            ui.label("What is wrong with this question?");
            ui.add(TextEdit::multiline(&mut app.report.message).desired_rows(4));
            ui.label("Contact email (optional)");
            ui.add(TextEdit::singleline(&mut app.report.contact_email));
            if !app.notice.is_empty() {
                ui.label(&app.notice);
            }
            ui.add_space(6.0);
            ui.horizontal(|ui| {
                if ui.button("Submit").clicked() {
                    app.send_report();
                }
                if ui.button("Cancel").clicked() {
                    app.close_report();
                }
            });
        });
}
