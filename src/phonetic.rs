//! Phonetic encoding and word similarity scoring.
//!
//! Two coarse encoders reduce a word to a short code: a Soundex-style
//! consonant-class code and a simplified articulatory (Metaphone-like) code.
//! [`phonetic_distance`] blends both codes with raw string similarity into a
//! single score where lower means more alike.

const CONSONANT_CODE_LEN: usize = 4;
const ARTICULATORY_CODE_MAX_LEN: usize = 6;

const CONSONANT_WEIGHT: f64 = 0.4;
const ARTICULATORY_WEIGHT: f64 = 0.4;
const STRING_WEIGHT: f64 = 0.2;
const LENGTH_PENALTY_WEIGHT: f64 = 0.1;

/// Digit class for a consonant, `None` for vowels and unmapped letters.
fn consonant_class(c: char) -> Option<char> {
    match c {
        'B' | 'F' | 'P' | 'V' => Some('1'),
        'C' | 'G' | 'J' | 'K' | 'Q' | 'S' | 'X' | 'Z' => Some('2'),
        'D' | 'T' => Some('3'),
        'L' => Some('4'),
        'M' | 'N' => Some('5'),
        'R' => Some('6'),
        _ => None,
    }
}

/// Soundex-style consonant-class code, always exactly four characters.
///
/// The first letter is kept as-is (uppercased); following letters map to
/// their digit class, skipping vowels and unmapped letters, and a digit equal
/// to the last emitted character is collapsed. Empty input yields `"0000"`.
pub fn consonant_class_code(word: &str) -> String {
    let upper = word.to_uppercase();
    let mut chars = upper.chars();

    let first = match chars.next() {
        Some(c) => c,
        None => return "0".repeat(CONSONANT_CODE_LEN),
    };

    let mut code = vec![first];
    for c in chars {
        if let Some(digit) = consonant_class(c) {
            if code.last() != Some(&digit) {
                code.push(digit);
            }
        }
    }

    code.resize(CONSONANT_CODE_LEN.max(code.len()), '0');
    code.into_iter().take(CONSONANT_CODE_LEN).collect()
}

/// Simplified articulatory code, at most six characters.
///
/// Common digraphs are normalised first (`PH`/`GH` → `F`, `CK` → `K`,
/// `SCH` → `SK`). A vowel is emitted only when nothing has been emitted yet;
/// any other character is emitted unless it repeats the last emitted one.
/// Repeats are judged against the emitted code, not the previous input
/// letter, so skipped vowels do not separate two equal consonants:
/// `papier` encodes as `PR`.
pub fn articulatory_code(word: &str) -> String {
    let normalized = word
        .to_uppercase()
        .replace("PH", "F")
        .replace("GH", "F")
        .replace("CK", "K")
        .replace("SCH", "SK");

    let mut code: Vec<char> = Vec::with_capacity(ARTICULATORY_CODE_MAX_LEN);
    for c in normalized.chars() {
        if matches!(c, 'A' | 'E' | 'I' | 'O' | 'U') {
            if code.is_empty() {
                code.push(c);
            }
        } else if code.last() != Some(&c) {
            code.push(c);
        }
    }

    code.into_iter().take(ARTICULATORY_CODE_MAX_LEN).collect()
}

/// Longest common block of `a[alo..ahi]` and `b[blo..bhi]` as `(i, j, len)`.
///
/// Ties resolve to the earliest start in `a`, then the earliest in `b`.
fn longest_match(
    a: &[char],
    b: &[char],
    (alo, ahi): (usize, usize),
    (blo, bhi): (usize, usize),
) -> (usize, usize, usize) {
    let (mut best_i, mut best_j, mut best_len) = (alo, blo, 0);
    // run[j + 1] = length of the match ending at a[i - 1], b[j]
    let mut run = vec![0usize; b.len() + 1];

    for i in alo..ahi {
        let mut next = vec![0usize; b.len() + 1];
        for j in blo..bhi {
            if a[i] == b[j] {
                let len = run[j] + 1;
                next[j + 1] = len;
                if len > best_len {
                    best_i = i + 1 - len;
                    best_j = j + 1 - len;
                    best_len = len;
                }
            }
        }
        run = next;
    }

    (best_i, best_j, best_len)
}

/// Matching-block similarity ratio in `[0, 1]`.
///
/// Ratcliff/Obershelp: find the longest common block, recurse on both
/// sides of it, and score `2 * matched / (len(a) + len(b))`. Two empty
/// strings are identical (ratio 1.0).
pub fn sequence_ratio(a: &str, b: &str) -> f64 {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();

    let total = a.len() + b.len();
    if total == 0 {
        return 1.0;
    }

    let mut matched = 0usize;
    let mut pending = vec![((0, a.len()), (0, b.len()))];
    while let Some(((alo, ahi), (blo, bhi))) = pending.pop() {
        let (i, j, len) = longest_match(&a, &b, (alo, ahi), (blo, bhi));
        if len == 0 {
            continue;
        }
        matched += len;
        if alo < i && blo < j {
            pending.push(((alo, i), (blo, j)));
        }
        if i + len < ahi && j + len < bhi {
            pending.push(((i + len, ahi), (j + len, bhi)));
        }
    }

    2.0 * matched as f64 / total as f64
}

/// Phonetic distance between two words; lower means more similar.
///
/// Combines consonant-class, articulatory and raw string similarity
/// (weights 0.4 / 0.4 / 0.2) minus a 0.1-weighted length penalty, and
/// returns `1 - combined`. The result is not clamped: it can dip slightly
/// below 0 or rise above 1 at the extremes of the length penalty.
pub fn phonetic_distance(word_a: &str, word_b: &str) -> f64 {
    let a = word_a.to_lowercase();
    let b = word_b.to_lowercase();

    let consonant_sim = sequence_ratio(&consonant_class_code(&a), &consonant_class_code(&b));
    let articulatory_sim = sequence_ratio(&articulatory_code(&a), &articulatory_code(&b));
    let string_sim = sequence_ratio(&a, &b);

    let len_a = a.chars().count();
    let len_b = b.chars().count();
    let length_penalty = len_a.abs_diff(len_b) as f64 / len_a.max(len_b).max(1) as f64;

    let combined = consonant_sim * CONSONANT_WEIGHT
        + articulatory_sim * ARTICULATORY_WEIGHT
        + string_sim * STRING_WEIGHT
        - length_penalty * LENGTH_PENALTY_WEIGHT;

    1.0 - combined
}
