// src/options.rs

use crate::model::Question;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

/// Orden en que se muestran las opciones de una pregunta dentro de una sesión.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedOptions {
    pub shuffled_options: Vec<String>,
    pub correct_answer: String,
}

/// Semilla propia de cada pregunta, derivada de la semilla de la sesión.
fn question_seed(session_seed: u64, question_index: usize) -> u64 {
    session_seed ^ (question_index as u64 + 1).wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Baraja las opciones con Fisher–Yates. Misma sesión y mismo índice dan el mismo orden.
pub fn present(question: &Question, session_seed: u64, question_index: usize) -> PresentedOptions {
    let mut rng = StdRng::seed_from_u64(question_seed(session_seed, question_index));
    let mut shuffled_options = question.options.clone();
    shuffled_options.shuffle(&mut rng);
    PresentedOptions {
        shuffled_options,
        correct_answer: question.correct_answer.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question() -> Question {
        Question {
            text: "What does a red octagon mean?".into(),
            options: vec!["Stop".into(), "Yield".into(), "Merge".into(), "School zone".into()],
            correct_answer: "Stop".into(),
            topic: "Road Signs".into(),
            explanation: String::new(),
        }
    }

    #[test]
    fn same_seed_and_index_give_identical_order() {
        let q = question();
        assert_eq!(present(&q, 1234, 3), present(&q, 1234, 3));
    }

    #[test]
    fn presentation_is_a_permutation_of_the_options() {
        let q = question();
        let presented = present(&q, 99, 0);
        let mut sorted = presented.shuffled_options.clone();
        sorted.sort();
        let mut expected = q.options.clone();
        expected.sort();
        assert_eq!(sorted, expected);
        assert_eq!(presented.correct_answer, "Stop");
    }

    #[test]
    fn different_indices_do_not_always_share_an_order() {
        let q = question();
        let orders: std::collections::HashSet<_> = (0..20)
            .map(|i| present(&q, 7, i).shuffled_options)
            .collect();
        assert!(orders.len() > 1);
    }
}
