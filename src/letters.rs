use smallvec::SmallVec;

/// Remove every whitespace character, keeping the original case.
pub fn strip_whitespace(raw: &str) -> String {
    raw.chars().filter(|c| !c.is_whitespace()).collect()
}

/// Lower-case a word one char at a time, so char positions still line up.
pub fn lower_word(word: &str) -> String {
    word.chars().map(lower_char).collect()
}

/// Normalized corpus form: no whitespace, lower case.
pub fn clean_word(raw: &str) -> String {
    lower_word(&strip_whitespace(raw))
}

/// Single-char lower case; chars that expand (`İ` -> `i̇`) keep the base letter.
pub fn lower_char(c: char) -> char {
    c.to_lowercase().next().unwrap_or(c)
}

pub fn upper_char(c: char) -> char {
    c.to_uppercase().next().unwrap_or(c)
}

/// Sorted-letter signature shared by exact anagrams.
pub fn anagram_root(word: &str) -> String {
    let mut chars: Vec<char> = word.chars().collect();
    chars.sort_unstable();
    chars.into_iter().collect()
}

/// Capitalize the first occurrence of `letter`, leaving the rest untouched.
pub fn highlight_first(word: &str, letter: char) -> String {
    match word.chars().position(|c| c == letter) {
        Some(position) => highlight_at(word, position),
        None => word.to_string(),
    }
}

/// Capitalize the character at `position` (counted in chars).
pub fn highlight_at(word: &str, position: usize) -> String {
    let mut out = String::with_capacity(word.len());
    for (idx, c) in word.chars().enumerate() {
        if idx == position {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// Drop the character at `position` (counted in chars).
pub fn remove_at(word: &str, position: usize) -> String {
    word.chars()
        .enumerate()
        .filter(|&(idx, _)| idx != position)
        .map(|(_, c)| c)
        .collect()
}

pub fn upper_letter(letter: char) -> String {
    letter.to_uppercase().collect()
}

/// Letter multiset, kept sorted by letter so two counts can be merged in one pass.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct LetterCounts {
    counts: SmallVec<[(char, u32); 12]>,
}

impl LetterCounts {
    pub fn from_word(word: &str) -> Self {
        let mut chars: SmallVec<[char; 16]> = word.chars().collect();
        chars.sort_unstable();
        let mut counts: SmallVec<[(char, u32); 12]> = SmallVec::new();
        for c in chars {
            match counts.last_mut() {
                Some((last, n)) if *last == c => *n += 1,
                _ => counts.push((c, 1)),
            }
        }
        LetterCounts { counts }
    }

    pub fn count(&self, letter: char) -> u32 {
        self.counts
            .binary_search_by(|(c, _)| c.cmp(&letter))
            .map(|idx| self.counts[idx].1)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, n)| n).sum()
    }

    /// Take one unit of `letter` out of the multiset. Returns false if it was absent.
    pub fn remove_one(&mut self, letter: char) -> bool {
        match self.counts.binary_search_by(|(c, _)| c.cmp(&letter)) {
            Ok(idx) => {
                self.counts[idx].1 -= 1;
                if self.counts[idx].1 == 0 {
                    self.counts.remove(idx);
                }
                true
            }
            Err(_) => false,
        }
    }

    /// If `self` contains all of `base` plus exactly one more letter, return that letter.
    pub fn single_surplus(&self, base: &LetterCounts) -> Option<char> {
        let mut surplus = None;
        let mut mine = self.counts.iter().peekable();
        let mut theirs = base.counts.iter().peekable();
        loop {
            match (mine.peek(), theirs.peek()) {
                (None, None) => return surplus,
                // base has a letter we lack
                (None, Some(_)) => return None,
                (Some(&&(c, n)), None) => {
                    if surplus.is_some() || n > 1 {
                        return None;
                    }
                    surplus = Some(c);
                    mine.next();
                }
                (Some(&&(c, n)), Some(&&(d, m))) => {
                    if c < d {
                        if surplus.is_some() || n > 1 {
                            return None;
                        }
                        surplus = Some(c);
                        mine.next();
                    } else if c > d {
                        return None;
                    } else {
                        if n < m {
                            return None;
                        }
                        if n > m {
                            if surplus.is_some() || n - m > 1 {
                                return None;
                            }
                            surplus = Some(c);
                        }
                        mine.next();
                        theirs.next();
                    }
                }
            }
        }
    }
}
