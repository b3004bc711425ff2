//! Property-based tests for the catalog tokenizer
//!
//! These check that tokenizing never panics, that module-code shaped words are
//! always classified as module codes, that whitespace is never significant and
//! that re-tokenizing the joined literals gives back the same kinds.

use modscrape::modscrape::lexer::{join_literals, tokenize, tokenize_line};
use modscrape::{Token, TokenKind};
use proptest::prelude::*;

fn kinds(tokens: &[Token]) -> Vec<TokenKind> {
    tokens.iter().map(|t| t.kind).collect()
}

/// Words drawn from the catalog vocabulary plus arbitrary letter and digit runs
fn word_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("Prerequisite".to_string()),
        Just("AU".to_string()),
        Just("OR".to_string()),
        Just("&".to_string()),
        Just("Mutually".to_string()),
        Just("standing".to_string()),
        Just(":".to_string()),
        Just("(".to_string()),
        Just(")".to_string()),
        "[A-Z]{2}[0-9]{4}",
        "[0-9]{1,4}",
        "[a-zA-Z]{1,10}",
    ]
}

fn whitespace_strategy() -> impl Strategy<Value = String> {
    "[ \t]{1,4}"
}

proptest! {
    #[test]
    fn test_tokenize_never_panics(input in "\\PC*") {
        let output = tokenize([input.as_str()]);
        prop_assert_eq!(output.paragraphs.len(), 1);
    }

    #[test]
    fn test_module_code_shape_is_one_token(code in "[A-Za-z]{2}[0-9]{4}") {
        let tokens = tokenize_line(&code);
        prop_assert_eq!(tokens, vec![Token::new(TokenKind::ModuleCode, code.clone())]);
    }

    #[test]
    fn test_longer_codes_are_not_module_codes(code in "[A-Z]{2}[0-9]{5,7}") {
        let tokens = tokenize_line(&code);
        prop_assert_eq!(kinds(&tokens), vec![TokenKind::Identifier]);
    }

    #[test]
    fn test_whitespace_is_never_significant(
        words in prop::collection::vec(word_strategy(), 1..12),
        gaps in prop::collection::vec(whitespace_strategy(), 12),
    ) {
        let single_spaced = words.join(" ");
        let mut irregular = String::new();
        for (word, gap) in words.iter().zip(gaps.iter()) {
            irregular.push_str(word);
            irregular.push_str(gap);
        }
        prop_assert_eq!(tokenize_line(&single_spaced), tokenize_line(&irregular));
    }

    #[test]
    fn test_retokenizing_joined_literals_keeps_kinds(input in "\\PC*") {
        let tokens = tokenize_line(&input);
        let rejoined = tokenize_line(&join_literals(&tokens, " "));
        prop_assert_eq!(kinds(&rejoined), kinds(&tokens));
    }

    #[test]
    fn test_every_ascii_character_is_accounted_for(input in "[ -~\t]*") {
        let output = tokenize([input.as_str()]);
        let literal_bytes: usize = output.paragraphs[0].iter().map(|t| t.literal.len()).sum();
        let whitespace = input.bytes().filter(|b| *b == b' ' || *b == b'\t').count();
        prop_assert_eq!(
            literal_bytes + whitespace + output.unsupported.len(),
            input.len()
        );
    }

    #[test]
    fn test_one_token_sequence_per_paragraph(lines in prop::collection::vec("[a-zA-Z0-9 .,:()&]*", 0..8)) {
        let output = tokenize(&lines);
        prop_assert_eq!(output.paragraphs.len(), lines.len());
    }
}
