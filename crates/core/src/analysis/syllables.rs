//! Vowel-group syllable estimation.

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'y')
}

/// Estimates the syllable count of a single word.
///
/// The word is lowercased and reduced to its `a-z` letters. A trailing
/// silent "e" is dropped when the word is longer than two letters and has a
/// vowel before it. Each maximal run of vowels (`y` included) counts as one
/// syllable, with a floor of 1.
///
/// Returns 0 when no ASCII letter survives, which tokenization never
/// produces.
///
/// ```rust
/// use readmetrics_core::count_syllables;
///
/// assert_eq!(count_syllables("cake"), 1);
/// assert_eq!(count_syllables("beautiful"), 3);
/// assert_eq!(count_syllables("rhythm"), 1);
/// assert_eq!(count_syllables("42"), 0);
/// ```
pub fn count_syllables(word: &str) -> usize {
    let mut letters: Vec<char> = word.to_lowercase().chars().filter(char::is_ascii_lowercase).collect();
    if letters.is_empty() {
        return 0;
    }

    let last = letters.len() - 1;
    if letters.len() > 2 && letters[last] == 'e' && letters[..last].iter().copied().any(is_vowel) {
        letters.pop();
    }

    let mut groups = 0;
    let mut in_group = false;
    for &c in &letters {
        let vowel = is_vowel(c);
        if vowel && !in_group {
            groups += 1;
        }
        in_group = vowel;
    }

    groups.max(1)
}
