//! Small built-in bilingual dictionary used when the translation service is unreachable.

/// Whether the built-in dictionary has a table for the `from` → `to` pair.
pub fn has_pair(from: &str, to: &str) -> bool {
    table(from, to).is_some()
}

/// Look up `word` in the built-in dictionary for the `from` → `to` pair.
pub fn lookup(word: &str, from: &str, to: &str) -> Option<&'static str> {
    table(from, to)?
        .iter()
        .find(|(source, _)| *source == word)
        .map(|(_, target)| *target)
}

fn table(from: &str, to: &str) -> Option<&'static [(&'static str, &'static str)]> {
    match (from, to) {
        ("spanish", "french") => Some(SPANISH_TO_FRENCH),
        ("french", "spanish") => Some(FRENCH_TO_SPANISH),
        ("spanish", "italian") => Some(SPANISH_TO_ITALIAN),
        ("italian", "spanish") => Some(ITALIAN_TO_SPANISH),
        ("german", "french") => Some(GERMAN_TO_FRENCH),
        ("french", "german") => Some(FRENCH_TO_GERMAN),
        _ => None,
    }
}

const SPANISH_TO_FRENCH: &[(&str, &str)] = &[
    ("casa", "maison"),
    ("agua", "eau"),
    ("fuego", "feu"),
    ("árbol", "arbre"),
    ("libro", "livre"),
    ("amigo", "ami"),
    ("perro", "chien"),
    ("gato", "chat"),
    ("rojo", "rouge"),
    ("azul", "bleu"),
    ("verde", "vert"),
    ("grande", "grand"),
];

const FRENCH_TO_SPANISH: &[(&str, &str)] = &[
    ("maison", "casa"),
    ("eau", "agua"),
    ("feu", "fuego"),
    ("arbre", "árbol"),
    ("livre", "libro"),
    ("ami", "amigo"),
    ("chien", "perro"),
    ("chat", "gato"),
    ("rouge", "rojo"),
    ("bleu", "azul"),
    ("vert", "verde"),
    ("grand", "grande"),
];

const SPANISH_TO_ITALIAN: &[(&str, &str)] = &[
    ("casa", "casa"),
    ("agua", "acqua"),
    ("fuego", "fuoco"),
    ("árbol", "albero"),
    ("libro", "libro"),
    ("amigo", "amico"),
    ("perro", "cane"),
    ("gato", "gatto"),
    ("rojo", "rosso"),
    ("azul", "blu"),
    ("verde", "verde"),
    ("grande", "grande"),
];

const ITALIAN_TO_SPANISH: &[(&str, &str)] = &[
    ("casa", "casa"),
    ("acqua", "agua"),
    ("fuoco", "fuego"),
    ("albero", "árbol"),
    ("libro", "libro"),
    ("amico", "amigo"),
    ("cane", "perro"),
    ("gatto", "gato"),
    ("rosso", "rojo"),
    ("blu", "azul"),
    ("verde", "verde"),
    ("grande", "grande"),
];

const GERMAN_TO_FRENCH: &[(&str, &str)] = &[
    ("haus", "maison"),
    ("wasser", "eau"),
    ("feuer", "feu"),
    ("baum", "arbre"),
    ("buch", "livre"),
    ("freund", "ami"),
    ("hund", "chien"),
    ("katze", "chat"),
    ("rot", "rouge"),
    ("blau", "bleu"),
    ("grün", "vert"),
    ("groß", "grand"),
];

const FRENCH_TO_GERMAN: &[(&str, &str)] = &[
    ("maison", "haus"),
    ("eau", "wasser"),
    ("feu", "feuer"),
    ("arbre", "baum"),
    ("livre", "buch"),
    ("ami", "freund"),
    ("chien", "hund"),
    ("chat", "katze"),
    ("rouge", "rot"),
    ("bleu", "blau"),
    ("vert", "grün"),
    ("grand", "groß"),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_word() {
        assert_eq!(lookup("perro", "spanish", "french"), Some("chien"));
        assert_eq!(lookup("grün", "german", "french"), Some("vert"));
    }

    #[test]
    fn test_lookup_missing_word() {
        assert_eq!(lookup("xyz123", "spanish", "french"), None);
    }

    #[test]
    fn test_lookup_unknown_pair() {
        assert!(!has_pair("english", "spanish"));
        assert_eq!(lookup("hola", "spanish", "english"), None);
    }

    #[test]
    fn test_pairs_are_directional() {
        assert!(has_pair("german", "french"));
        assert!(has_pair("french", "german"));
        assert!(!has_pair("german", "spanish"));
    }
}
