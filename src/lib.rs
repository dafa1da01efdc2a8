//! Clue engine for the sliced-art drawing puzzle.
//!
//! Each grid cell has a letter label and a target word. The engine indexes a
//! word list and answers two questions per label: a display string that helps
//! the author judge the word (its clue letter highlighted next to neighbouring
//! corpus words), and the clue string the solver sees.

pub mod assignments;
pub mod clue;
pub mod config;
pub mod corpus;
pub mod engine;
pub mod error;
pub mod letters;
pub mod shuffle;
#[cfg(target_arch = "wasm32")]
pub mod wasm;

pub use assignments::{Assignment, Assignments, Label};
pub use config::{build_engine, build_engine_from_corpus, EngineConfig, Variant};
pub use corpus::Corpus;
pub use engine::{AnagramPositionEngine, ClueEngine, LengthDiffEngine, SubstitutionEngine};
pub use error::ClueError;
pub use shuffle::{SeededShuffler, Shuffler};

#[cfg(test)]
mod tests {
    use std::collections::BTreeMap;

    use super::*;

    fn reverse(letters: &mut [char]) {
        letters.reverse();
    }

    fn words(list: &str) -> Vec<&str> {
        list.split(' ').collect()
    }

    fn clues(pairs: &[(char, &str)]) -> BTreeMap<char, String> {
        pairs.iter().map(|&(c, s)| (c, s.to_string())).collect()
    }

    fn target_segment(display: &str) -> &str {
        display.split(" - ").next().unwrap_or(display)
    }

    #[test]
    fn substitution_single_neighbor() {
        let mut engine = SubstitutionEngine::new(words("the big bag of words"), 0);
        engine.set("a", "bag").unwrap();
        assert_eq!(engine.make_display("a"), "bAg - bIg");
    }

    #[test]
    fn substitution_unknown_word_still_matches() {
        let mut engine = SubstitutionEngine::new(words("the big bag of gob words"), 0);
        engine.set("o", "bog").unwrap();
        assert_eq!(engine.make_display("o"), "bOg (unknown word) - bIg, bAg");
    }

    #[test]
    fn substitution_keeps_anagram_with_other_letter() {
        let mut engine = SubstitutionEngine::new(words("the big bag of gob words"), 0);
        engine.set("a", "bag").unwrap();
        assert_eq!(engine.make_display("a"), "bAg - bIg, gOb");
    }

    #[test]
    fn substitution_display_without_neighbors() {
        let mut engine = SubstitutionEngine::new(words("the big bag of words"), 0);
        engine.set("e", "the").unwrap();
        assert_eq!(engine.make_display("e"), "thE");
    }

    #[test]
    fn substitution_display_mixed_case() {
        let mut engine = SubstitutionEngine::new(words("THE big bag of words"), 0);
        engine.set("E", "tHe").unwrap();
        assert_eq!(engine.make_display("e"), "thE");
        assert_eq!(engine.get("E"), "the");
    }

    #[test]
    fn substitution_display_repeated_letter() {
        let mut engine = SubstitutionEngine::new(words("the big book of words"), 0);
        engine.set("o", "book").unwrap();
        assert_eq!(engine.make_display("o"), "bOok");
        engine.set("o", "boOk").unwrap();
        assert_eq!(engine.make_display("o"), "boOk");
    }

    #[test]
    fn substitution_display_ignores_spaces() {
        let mut engine = SubstitutionEngine::new(words("towards a roasted dinner"), 0);
        engine.set("w", "to wards").unwrap();
        assert_eq!(engine.make_display("w"), "toWards - roastEd");
    }

    #[test]
    fn substitution_display_missing_letter() {
        let mut engine = SubstitutionEngine::new(words("towards a roasted dinner"), 0);
        engine.set("w", "roasted").unwrap();
        assert_eq!(engine.make_display("w"), "W word needed.");
        assert_eq!(engine.make_clue("w"), "W");
    }

    #[test]
    fn substitution_clue_drops_clue_letter() {
        let mut engine = SubstitutionEngine::with_shuffler(Vec::<String>::new(), 0, reverse);
        engine.set("w", "towards").unwrap();
        assert_eq!(engine.make_clue("w"), "SDRAOT");
        engine.set("o", "book").unwrap();
        assert_eq!(engine.make_clue("o"), "KOB");
    }

    #[test]
    fn substitution_position_survives_expanding_lowercase() {
        let mut engine = SubstitutionEngine::with_shuffler(Vec::<String>::new(), 0, reverse);
        engine.set("i", "\u{130}i").unwrap();
        assert_eq!(engine.make_display("i"), "iI (unknown word)");
        assert_eq!(engine.make_clue("i"), "I");
    }

    #[test]
    fn clues_wait_for_min_words() {
        let mut engine = SubstitutionEngine::with_shuffler(Vec::<String>::new(), 2, reverse);
        engine.set("b", "blue").unwrap();
        assert_eq!(engine.make_clue("b"), "B");
        engine.set("r", "red").unwrap();
        assert_eq!(engine.make_clues(), clues(&[('b', "EUL"), ('r', "DE")]));
    }

    #[test]
    fn one_missing_letter_blocks_every_clue() {
        let mut engine = SubstitutionEngine::with_shuffler(Vec::<String>::new(), 0, reverse);
        engine.set("b", "blue").unwrap();
        engine.set("r", "lime").unwrap();
        assert_eq!(engine.make_clues(), clues(&[('b', "B"), ('r', "R")]));
    }

    #[test]
    fn unassigned_labels_need_words() {
        let engines: Vec<Box<dyn ClueEngine>> = vec![
            Box::new(SubstitutionEngine::new(words("the big bag"), 0)),
            Box::new(AnagramPositionEngine::new(words("the big bag"), 0)),
            Box::new(LengthDiffEngine::new(words("the big bag"), 0)),
        ];
        for engine in &engines {
            for letter in 'a'..='z' {
                let label = letter.to_string();
                let upper = letter.to_ascii_uppercase().to_string();
                assert_eq!(engine.make_display(&label), format!("{upper} word needed."));
                assert_eq!(engine.make_clue(&label), upper);
                assert_eq!(engine.get(&label), "");
            }
        }
    }

    #[test]
    fn target_segment_highlights_one_occurrence() {
        let corpus = words("banana bandana cabana nab ban bananas");
        let mut engine = SubstitutionEngine::new(corpus.clone(), 0);
        let mut anagram = AnagramPositionEngine::new(corpus, 0);
        let cells = [("a", "banana"), ("n", "bandana"), ("b", "cabana"), ("s", "bananas")];
        for (label, word) in cells {
            engine.set(label, word).unwrap();
            anagram.set(label, word).unwrap();
            for display in [engine.make_display(label), anagram.make_display(label)] {
                let segment = target_segment(&display);
                assert_eq!(segment.chars().filter(|c| c.is_uppercase()).count(), 1, "{display}");
                assert!(segment.contains(&label.to_uppercase()), "{display}");
            }
        }
    }

    #[test]
    fn make_clues_repeats_for_a_fixed_seed() {
        let mut engine = SubstitutionEngine::with_shuffler(
            words("the big bag of words"),
            0,
            SeededShuffler::new(Some(2024)),
        );
        engine.set("a", "bag").unwrap();
        engine.set("w", "towards").unwrap();
        engine.set("d", "dinner").unwrap();
        let first = engine.make_clues();
        assert_eq!(first, engine.make_clues());

        let mut letters: Vec<char> = first[&'w'].chars().collect();
        letters.sort_unstable();
        assert_eq!(letters, vec!['A', 'D', 'O', 'R', 'S', 'T']);
    }

    #[test]
    fn substitution_engine_rejects_subtraction_label() {
        let mut engine = SubstitutionEngine::new(words("the big bag"), 0);
        assert_eq!(
            engine.set("", "bag"),
            Err(ClueError::InvalidLabel(String::new()))
        );
        assert_eq!(
            engine.set("ab", "bag"),
            Err(ClueError::InvalidLabel("ab".to_string()))
        );
    }

    #[test]
    fn anagram_matches_highlight_same_position() {
        let mut engine = AnagramPositionEngine::new(words("tale late teal tail"), 0);
        engine.set("a", "tale").unwrap();
        assert_eq!(engine.make_display("a"), "tAle - lAte, tEal");
    }

    #[test]
    fn anagram_unknown_word_still_matches() {
        let mut engine = AnagramPositionEngine::new(words("tale late teal tail"), 0);
        engine.set("a", "leat").unwrap();
        assert_eq!(
            engine.make_display("a"),
            "leAt (unknown word) - taLe, laTe, teAl"
        );
        engine.set("i", "tail").unwrap();
        assert_eq!(engine.make_display("i"), "taIl");
    }

    #[test]
    fn anagram_position_survives_expanding_lowercase() {
        let mut engine = AnagramPositionEngine::new(words("tale late"), 0);
        engine.set("k", "\u{130}k").unwrap();
        assert_eq!(engine.get("k"), "ik");
        assert_eq!(engine.make_display("k"), "iK (unknown word)");
    }

    #[test]
    fn anagram_clue_has_template_and_scramble() {
        let mut engine = AnagramPositionEngine::with_shuffler(words("tale late"), 0, reverse);
        engine.set("a", "tale").unwrap();
        assert_eq!(engine.make_clue("a"), "_ [_] _ _\nELAT");
        engine.set("e", "latE").unwrap();
        assert_eq!(engine.make_clue("e"), "_ _ _ [_]\nETAL");
    }

    const STRIPPER_WORDS: &str = "lots of words rail the liar sail lairs of lira rails";
    const TALE_WORDS: &str = "let me tell a tale of a bland land";

    #[test]
    fn length_diff_goal_and_other_matches() {
        let mut engine = LengthDiffEngine::new(words(STRIPPER_WORDS), 0);
        engine.set("r", "rails").unwrap();
        assert_eq!(engine.make_display("r"), "sail+R -- rail+S, liar+S, lira+S");
    }

    #[test]
    fn length_diff_without_goal_match() {
        let mut engine = LengthDiffEngine::new(words(STRIPPER_WORDS), 0);
        engine.set("i", "rails").unwrap();
        assert_eq!(
            engine.make_display("i"),
            "rals?I -- rail+S, liar+S, sail+R, lira+S"
        );
    }

    #[test]
    fn length_diff_word_needed() {
        let mut engine = LengthDiffEngine::new(words(STRIPPER_WORDS), 0);
        engine.set("i", "").unwrap();
        assert_eq!(engine.make_display("i"), "I word needed.");
        engine.set("i", "food").unwrap();
        assert_eq!(engine.make_display("i"), "I word needed.");
    }

    #[test]
    fn length_diff_case_insensitive() {
        let mut engine = LengthDiffEngine::new(words("no glib content big man"), 0);
        engine.set("l", "GLIB").unwrap();
        assert_eq!(engine.make_display("l"), "big+L");
        engine.set("L", "glib").unwrap();
        assert_eq!(engine.make_display("l"), "big+L");

        let text = "no\nglib\ncontent\nbig\nman\n";
        let mut lines = LengthDiffEngine::new(text.split_inclusive('\n'), 0);
        lines.set("l", "glib").unwrap();
        assert_eq!(lines.make_display("l"), "big+L");
    }

    #[test]
    fn length_diff_clues() {
        let mut engine = LengthDiffEngine::new(words(TALE_WORDS), 2);
        engine.set("a", "tale").unwrap();
        assert_eq!(engine.make_clues(), clues(&[('a', "A"), ('b', "B")]));
        assert_eq!(engine.make_display("b"), "B word needed.");
        assert_eq!(engine.get("b"), "");
        engine.set("b", "bland").unwrap();
        assert_eq!(engine.make_clues(), clues(&[('a', "TALE"), ('b', "BLAND")]));
    }

    #[test]
    fn length_diff_lists_every_grid_cell() {
        let engine = LengthDiffEngine::new(words(TALE_WORDS), 3);
        assert_eq!(
            engine.make_clues(),
            clues(&[('a', "A"), ('b', "B"), ('c', "C")])
        );
        assert_eq!(engine.make_display(""), "Subtraction word needed.");
    }

    #[test]
    fn length_diff_upper_case_labels() {
        let mut engine = LengthDiffEngine::new(words(TALE_WORDS), 2);
        engine.set("A", "tale").unwrap();
        engine.set("B", "bland").unwrap();
        assert_eq!(engine.make_clues(), clues(&[('a', "TALE"), ('b', "BLAND")]));
    }

    #[test]
    fn length_diff_change_word() {
        let mut engine = LengthDiffEngine::new(words(TALE_WORDS), 2);
        engine.set("a", "late").unwrap();
        engine.set("a", "tale").unwrap();
        assert_eq!(engine.make_display("a"), "let+A");
    }

    #[test]
    fn length_diff_subtraction_cell() {
        let mut engine = LengthDiffEngine::new(words(TALE_WORDS), 2);
        assert_eq!(engine.make_display(""), "Subtraction word needed.");
        engine.set("", "let").unwrap();
        assert_eq!(engine.make_display(""), "tell-L, tale-A");
        assert_eq!(engine.get(""), "let");

        engine.set("a", "tale").unwrap();
        engine.set("b", "bland").unwrap();
        assert_eq!(engine.make_clues(), clues(&[('a', "TALE"), ('b', "BLAND")]));
        assert_eq!(engine.make_clue(""), "");
    }
}
