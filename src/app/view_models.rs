use super::*;
use crate::summary::{self, QuizSummary, ScoreBoard};

impl QuizApp {
    /// Datos de la pregunta actual para pintarla. `None` si no hay quiz en curso.
    pub fn question_view(&mut self) -> Option<QuestionView> {
        let (index, question) = self.session.current()?;
        let text = question.text.clone();
        let topic = question.topic.clone();
        let explanation = question.explanation.clone();
        let total = self.session.len();
        let bookmarked = self.session.is_bookmarked(index);

        let verdict = match self.session.response(index) {
            None => Verdict::Pending,
            Some(_) if self.session.answered().contains(&index) => Verdict::Correct,
            Some(answer) => Verdict::Incorrect {
                user_answer: answer.to_string(),
            },
        };
        let options = self.session.presented_options(index).ok()?.clone();

        Some(QuestionView {
            index,
            number: index + 1,
            total,
            text,
            topic,
            explanation,
            options,
            bookmarked,
            verdict,
        })
    }

    pub fn score_board(&self) -> ScoreBoard {
        summary::score_board(&self.session, self.config.pass_percentage)
    }

    pub fn summary(&self) -> QuizSummary {
        summary::summarize(&self.session, self.config.pass_percentage)
    }

    /// Historial de intentos, del más reciente al más antiguo.
    pub fn history_rows(&self) -> Vec<HistoryRow> {
        let pass = self.config.pass_percentage;
        self.history
            .iter()
            .enumerate()
            .rev()
            .map(|(i, record)| HistoryRow {
                number: i + 1,
                score: record.score,
                total: record.total,
                percentage: record.percentage,
                passed: record.total > 0
                    && record.score >= summary::required_to_pass(record.total, pass),
                mode: record.mode,
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Question, QuizMode};
    use crate::summary::PassStatus;

    fn app(n: usize) -> QuizApp {
        let questions = (0..n)
            .map(|i| Question {
                text: format!("Question {i}?"),
                options: vec!["right".into(), "wrong".into(), "other".into()],
                correct_answer: "right".into(),
                topic: "Traffic Laws".into(),
                explanation: "Explained.".into(),
            })
            .collect();
        let config = QuizConfig {
            question_count: n,
            shuffle_questions: false,
            ..QuizConfig::default()
        };
        QuizApp::in_memory(config, QuestionStore::from_questions(questions), 11)
    }

    #[test]
    fn view_tracks_verdict_and_keeps_option_order() {
        let mut app = app(2);
        app.start_quiz();
        let before = app.question_view().expect("view");
        assert_eq!(before.verdict, Verdict::Pending);
        assert_eq!(before.progress_label(), "Question 1 of 2");

        app.selected = Some("wrong".into());
        app.submit_selected();
        let after = app.question_view().expect("view");
        assert_eq!(after.options, before.options);
        assert_eq!(
            after.verdict,
            Verdict::Incorrect {
                user_answer: "wrong".into()
            }
        );
    }

    #[test]
    fn no_view_once_completed() {
        let mut app = app(1);
        app.start_quiz();
        app.selected = Some("right".into());
        app.submit_selected();
        assert_eq!(app.question_view().expect("view").verdict, Verdict::Correct);
        app.next_question();
        assert!(app.question_view().is_none());
        assert!(app.summary().passed);
        assert_eq!(app.score_board().status, PassStatus::Passed);
    }

    fn record(score: usize, total: usize, mode: QuizMode) -> AttemptRecord {
        AttemptRecord {
            score,
            total,
            percentage: summary::percentage(score, total),
            mode,
        }
    }

    #[test]
    fn history_pass_matches_required_count() {
        let mut app = app(1);
        app.config.pass_percentage = 58.0;
        app.history.push(record(29, 50, QuizMode::Normal));
        app.history.push(record(28, 50, QuizMode::Normal));
        let rows = app.history_rows();
        assert!(!rows[0].passed);
        assert!(rows[1].passed);
    }

    #[test]
    fn history_is_newest_first() {
        let mut app = app(1);
        app.history.push(record(0, 1, QuizMode::Normal));
        app.history.push(record(1, 1, QuizMode::Practice));
        let rows = app.history_rows();
        assert_eq!(rows[0].number, 2);
        assert!(rows[0].passed);
        assert!(!rows[1].passed);
    }
}
