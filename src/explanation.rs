// src/explanation.rs
//
// Explicaciones "de cortesía" para la revisión final. No pretende ser correcto,
// solo rellenar una plantilla por tema con la respuesta y el contexto de la pregunta.

use regex::Regex;
use std::sync::LazyLock;

type Template = fn(&str, &str) -> String;

struct TopicTemplate {
    topic: &'static str,
    pattern: Regex,
    template: Template,
}

static TEMPLATES: LazyLock<Vec<TopicTemplate>> = LazyLock::new(|| {
    let table: [(&'static str, &str, Template); 6] = [
        ("Licensing", r"(minimum|required|valid|fee)", |answer, context| {
            format!(
                "According to Minnesota Driver's Manual, {answer} is the correct requirement \
                 for {context}."
            )
        }),
        ("Rules and Regulations", r"(must|required|legal|law)", |answer, context| {
            format!("Minnesota law states that {answer} regarding {context}.")
        }),
        ("Road Signs", r"sign|signal", |answer, context| {
            format!(
                "This traffic control device indicates {answer}. \
                 It's important to {context} for road safety."
            )
        }),
        ("Safety", r"safety|emergency|caution", |answer, context| {
            format!("For safety reasons, {answer} is the correct action when {context}.")
        }),
        ("Traffic Laws", r"speed|right.of.way|lane|merge|stop", |answer, context| {
            format!("The traffic law states that {answer} when {context}.")
        }),
        ("Vehicle Operation", r"drive|driving|vehicle|operate|control", |answer, context| {
            format!("When operating a vehicle, {answer} is the correct procedure for {context}.")
        }),
    ];
    table
        .into_iter()
        .filter_map(|(topic, pattern, template)| match Regex::new(pattern) {
            Ok(pattern) => Some(TopicTemplate { topic, pattern, template }),
            Err(e) => {
                log::error!("invalid explanation pattern for {topic}: {e}");
                None
            }
        })
        .collect()
});

static CONTEXT_STRIP: LazyLock<Option<Regex>> =
    LazyLock::new(|| Regex::new(r"^what (is|should|must|does)|[?]").ok());

/// Texto genérico cuando el tema no tiene plantilla o el patrón no encaja.
pub fn generic_explanation(correct_answer: &str) -> String {
    format!(
        "The correct answer is {correct_answer}. \
         This is based on Minnesota driving regulations and safety guidelines."
    )
}

/// Contexto extraído de la pregunta: en minúsculas, sin "what is/should/..." inicial ni '?'.
fn extract_context(lowered_question: &str) -> String {
    match CONTEXT_STRIP.as_ref() {
        Some(strip) => strip.replace_all(lowered_question, "").trim().to_string(),
        None => lowered_question.trim().to_string(),
    }
}

pub fn generate(question: &str, correct_answer: &str, topic: &str) -> String {
    let lowered = question.to_lowercase();
    TEMPLATES
        .iter()
        .find(|t| t.topic == topic)
        .filter(|t| t.pattern.is_match(&lowered))
        .map(|t| (t.template)(correct_answer, &extract_context(&lowered)))
        .unwrap_or_else(|| generic_explanation(correct_answer))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn topic_template_is_filled_with_answer_and_context() {
        let text = generate(
            "What is the minimum age for a learner's permit?",
            "15 years",
            "Licensing",
        );
        assert_eq!(
            text,
            "According to Minnesota Driver's Manual, 15 years is the correct requirement \
             for the minimum age for a learner's permit."
        );
    }

    #[test]
    fn pattern_miss_falls_back_to_generic_text() {
        let text = generate("How old must you be?", "16", "Licensing");
        assert_eq!(text, generic_explanation("16"));
    }

    #[test]
    fn topic_without_template_falls_back() {
        let text = generate("What does no-fault insurance cover?", "Medical costs", "Insurance");
        assert!(text.starts_with("The correct answer is Medical costs."));
    }

    #[test]
    fn context_strips_leading_question_word_and_marks() {
        assert_eq!(extract_context("what should you do at a stop sign?"), "you do at a stop sign");
    }
}
