// src/topics.rs

pub const DEFAULT_TOPIC: &str = "General Knowledge";

/// Tabla tema → palabras clave. Gana el primer tema con coincidencia,
/// así que el orden de las filas decide los empates.
const TOPIC_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Licensing",
        &[
            "license", "permit", "renewal", "application", "fee", "valid", "provisional",
            "duplicate",
        ],
    ),
    (
        "Rules and Regulations",
        &["law", "legal", "requirement", "required", "must", "penalty", "consequence"],
    ),
    (
        "Road Signs",
        &["sign", "signal", "yield", "turn", "crossing", "arrow", "warning", "regulatory"],
    ),
    (
        "Safety",
        &["safety", "accident", "crash", "emergency", "caution", "danger", "hazard", "defensive"],
    ),
    (
        "Traffic Laws",
        &["traffic", "speed", "right of way", "lane", "merge", "stop", "yield", "passing"],
    ),
    (
        "Insurance",
        &["insurance", "coverage", "liability", "no-fault", "policy", "premium"],
    ),
    (
        "Violations",
        &["DUI", "violation", "suspended", "revoked", "ticket", "offense", "penalty", "fine"],
    ),
    (
        "Vehicle Operation",
        &["drive", "driving", "vehicle", "operation", "operate", "steering", "brake", "accelerate"],
    ),
];

/// Asigna un tema buscando las palabras clave como subcadena, sin distinguir mayúsculas.
pub fn categorize(question: &str) -> &'static str {
    let lowered = question.to_lowercase();
    TOPIC_KEYWORDS
        .iter()
        .find(|(_, keywords)| {
            keywords
                .iter()
                .any(|keyword| lowered.contains(&keyword.to_lowercase()))
        })
        .map(|(topic, _)| *topic)
        .unwrap_or(DEFAULT_TOPIC)
}

/// Todos los temas en el orden de la tabla, con el tema por defecto al final.
pub fn all_topics() -> Vec<&'static str> {
    TOPIC_KEYWORDS
        .iter()
        .map(|(topic, _)| *topic)
        .chain(std::iter::once(DEFAULT_TOPIC))
        .collect()
}
