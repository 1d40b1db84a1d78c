// src/text.rs

use unicode_normalization::UnicodeNormalization;

/// Secuencias mal decodificadas (UTF-8 leído como cp1252) y comillas tipográficas.
/// El orden importa: "â€" a secas tiene que ir después de las secuencias largas.
const REPAIRS: &[(&str, &str)] = &[
    ("\u{e2}\u{20ac}\u{2122}", "'"),
    ("\u{e2}\u{20ac}\u{2dc}", "'"),
    ("\u{e2}\u{20ac}\u{153}", "\""),
    ("\u{e2}\u{20ac}\u{9d}", "\""),
    ("\u{e2}\u{20ac}\u{201d}", "\u{2014}"),
    ("\u{e2}\u{20ac}\u{201c}", "\u{2013}"),
    ("\u{e2}\u{20ac}\"", "\u{2013}"),
    ("\u{e2}\u{20ac}", "\""),
    ("\u{2019}", "'"),
    ("\u{2018}", "'"),
    ("\u{201c}", "\""),
    ("\u{201d}", "\""),
];

/// Limpia un campo del banco: recorta, repara la puntuación rota y aplica NFKC.
pub fn clean_text(raw: &str) -> String {
    let mut text = raw.trim().to_string();
    for (broken, fixed) in REPAIRS {
        if text.contains(broken) {
            text = text.replace(broken, fixed);
        }
    }
    text.nfkc().collect::<String>().trim().to_string()
}
