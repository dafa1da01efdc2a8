use crate::error::{ClueError, Result};
use crate::letters::upper_char;
use crate::shuffle::{salt, Shuffler};

/// Retries before accepting a scramble that left the letters in order.
pub const MAX_SHUFFLE_ATTEMPTS: usize = 10;

/// Permute `letters`, retrying while the result still reads the same.
///
/// Words with fewer than two distinct letters cannot change order, so the
/// first attempt is returned as is.
pub fn scramble(letters: &[char], shuffler: &dyn Shuffler) -> String {
    let key: String = letters.iter().collect();
    let can_change = letters.windows(2).any(|pair| pair[0] != pair[1]);
    let mut attempt = letters.to_vec();
    for n in 0..MAX_SHUFFLE_ATTEMPTS {
        attempt.copy_from_slice(letters);
        shuffler.shuffle(&mut attempt, salt(&key, n));
        if !can_change || attempt != letters {
            break;
        }
    }
    attempt.into_iter().collect()
}

/// Uppercase `word` without its first `letter`, scrambled.
pub fn scramble_without(word: &str, letter: char, shuffler: &dyn Shuffler) -> Result<String> {
    let mut letters: Vec<char> = word.chars().map(upper_char).collect();
    let letter = upper_char(letter);
    let position = letters
        .iter()
        .position(|&c| c == letter)
        .ok_or_else(|| ClueError::MissingLetter {
            letter,
            word: letters.iter().collect(),
        })?;
    letters.remove(position);
    Ok(scramble(&letters, shuffler))
}

/// Blank per letter with the clue letter's slot bracketed: `_ [_] _`.
pub fn position_template(length: usize, position: usize) -> String {
    (0..length)
        .map(|idx| if idx == position { "[_]" } else { "_" })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Two-line clue: the blank template, then the whole word scrambled.
pub fn position_clue(word: &str, position: usize, shuffler: &dyn Shuffler) -> String {
    let letters: Vec<char> = word.chars().map(upper_char).collect();
    let template = position_template(letters.len(), position);
    format!("{template}\n{}", scramble(&letters, shuffler))
}
