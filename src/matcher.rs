//! Nearest-phonetic-match search over a vocabulary.

use serde::Serialize;

use crate::phonetic::phonetic_distance;

/// Best vocabulary entry for a target word.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NearestMatch {
    pub word: String,
    /// `1 - distance`; not clamped to `[0, 1]`.
    pub similarity: f64,
}

/// Find the vocabulary entry with the smallest phonetic distance to `target`.
///
/// Scans in vocabulary order and keeps the first candidate on ties, so the
/// vocabulary order acts as the tie-break. With `exclude_exact`, entries equal
/// to `target` (ignoring case) are skipped.
///
/// Returns `None` when the vocabulary is empty or every entry was excluded.
pub fn find_nearest<S: AsRef<str>>(
    target: &str,
    vocabulary: &[S],
    exclude_exact: bool,
) -> Option<NearestMatch> {
    let target_lower = target.to_lowercase();
    let mut best: Option<(&str, f64)> = None;

    for candidate in vocabulary.iter().map(AsRef::as_ref) {
        if exclude_exact && candidate.to_lowercase() == target_lower {
            continue;
        }

        let distance = phonetic_distance(target, candidate);
        match best {
            Some((_, best_distance)) if distance >= best_distance => {}
            _ => best = Some((candidate, distance)),
        }
    }

    best.map(|(word, distance)| NearestMatch {
        word: word.to_string(),
        similarity: 1.0 - distance,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_closest_word() {
        let vocabulary = ["strawberry", "hola", "mountain"];
        let found = find_nearest("hello", &vocabulary, true).expect("match");

        assert_eq!(found.word, "hola");
        assert!((found.similarity - 0.868_888_888_888_888_9).abs() < 1e-9);
    }

    #[test]
    fn test_excludes_exact_match() {
        let vocabulary = ["hola", "hello", "halo"];
        let found = find_nearest("hello", &vocabulary, true).expect("match");

        assert_eq!(found.word, "halo");
    }

    #[test]
    fn test_exclusion_ignores_case() {
        let vocabulary = ["Hello", "hola"];
        let found = find_nearest("hELLO", &vocabulary, true).expect("match");

        assert_eq!(found.word, "hola");
    }

    #[test]
    fn test_keeps_exact_match_when_not_excluded() {
        let vocabulary = ["hola", "hello", "halo"];
        let found = find_nearest("hello", &vocabulary, false).expect("match");

        assert_eq!(found.word, "hello");
        assert!((found.similarity - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_ties_keep_first_seen() {
        // Identical candidates score identically; the first one wins
        let vocabulary = ["pato", "pato", "dato"];
        let found = find_nearest("gato", &vocabulary, true).expect("match");
        assert_eq!(found.word, "pato");

        let reversed = ["dato", "pato"];
        let found = find_nearest("gato", &reversed, true).expect("match");
        assert_eq!(found.word, "dato");
    }

    #[test]
    fn test_empty_vocabulary_has_no_match() {
        let vocabulary: Vec<String> = vec![];
        assert!(find_nearest("hello", &vocabulary, true).is_none());
    }

    #[test]
    fn test_fully_excluded_vocabulary_has_no_match() {
        let vocabulary = vec!["hello".to_string(), "HELLO".to_string()];
        assert!(find_nearest("hello", &vocabulary, true).is_none());
    }

    #[test]
    fn test_never_returns_target_when_alternatives_exist() {
        let vocabulary = ["hello", "world", "yellow", "hollow"];
        for target in vocabulary {
            let found = find_nearest(target, &vocabulary, true).expect("match");
            assert_ne!(found.word, target);
        }
    }
}
