//! Implementation of the catalog tokenizer
//!
//! logos does the raw scanning; word runs are then classified through the
//! vocabulary. See the [lexer module](super) for the overall flow.

use logos::Logos;

use crate::modscrape::ast::LexError;
use crate::modscrape::lexer::tokens::{Token, TokenKind};
use crate::modscrape::lexer::vocabulary::Vocabulary;

/// Raw scanner output before vocabulary classification
#[derive(Logos, Debug, Clone, Copy, PartialEq)]
#[logos(skip r"[ \t\r\n]+")]
enum RawToken {
    #[token(".")]
    Dot,
    #[token(",")]
    Comma,
    #[token(":")]
    Colon,
    #[token(";")]
    Semicolon,
    #[token("(")]
    LParen,
    #[token(")")]
    RParen,
    #[token("{")]
    LBrace,
    #[token("}")]
    RBrace,
    #[token("[")]
    LBracket,
    #[token("]")]
    RBracket,
    #[token("-")]
    Dash,
    #[token("&")]
    Ampersand,
    #[token("'")]
    SingleQuote,
    #[token("\"")]
    DoubleQuote,
    #[token("+")]
    Plus,
    #[token("/")]
    Slash,
    #[token("`")]
    Backtick,
    #[token("?")]
    QuestionMark,

    // Maximal run of letters and digits, classified afterwards
    #[regex(r"[\p{L}\p{N}]+")]
    Word,
}

impl RawToken {
    fn punctuation(self) -> Option<TokenKind> {
        let kind = match self {
            RawToken::Dot => TokenKind::Dot,
            RawToken::Comma => TokenKind::Comma,
            RawToken::Colon => TokenKind::Colon,
            RawToken::Semicolon => TokenKind::Semicolon,
            RawToken::LParen => TokenKind::LParen,
            RawToken::RParen => TokenKind::RParen,
            RawToken::LBrace => TokenKind::LBrace,
            RawToken::RBrace => TokenKind::RBrace,
            RawToken::LBracket => TokenKind::LBracket,
            RawToken::RBracket => TokenKind::RBracket,
            RawToken::Dash => TokenKind::Dash,
            RawToken::Ampersand => TokenKind::And,
            RawToken::SingleQuote => TokenKind::SingleQuote,
            RawToken::DoubleQuote => TokenKind::DoubleQuote,
            RawToken::Plus => TokenKind::Plus,
            RawToken::Slash => TokenKind::Slash,
            RawToken::Backtick => TokenKind::Backtick,
            RawToken::QuestionMark => TokenKind::QuestionMark,
            RawToken::Word => return None,
        };
        Some(kind)
    }
}

/// Token sequences for a batch of paragraphs plus the anomalies met on the way
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LexOutput {
    /// One token sequence per input line, in input order
    pub paragraphs: Vec<Vec<Token>>,
    pub unsupported: Vec<LexError>,
}

/// Stateless tokenizer bound to a vocabulary
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'v> {
    vocabulary: &'v Vocabulary,
}

impl<'v> Tokenizer<'v> {
    pub fn new(vocabulary: &'v Vocabulary) -> Self {
        Self { vocabulary }
    }

    /// Tokenize one paragraph
    ///
    /// `paragraph` is only used to label unsupported-character errors.
    pub fn tokenize_paragraph(&self, paragraph: usize, line: &str) -> (Vec<Token>, Vec<LexError>) {
        let mut lexer = RawToken::lexer(line);
        let mut tokens = Vec::new();
        let mut unsupported = Vec::new();

        while let Some(result) = lexer.next() {
            let span = lexer.span();
            match result {
                Ok(raw) => {
                    let literal = lexer.slice();
                    let kind = raw
                        .punctuation()
                        .unwrap_or_else(|| self.vocabulary.classify(literal));
                    tokens.push(Token::new(kind, literal));
                }
                Err(()) => {
                    let skipped = line.get(span.clone()).unwrap_or_default();
                    for (index, character) in skipped.char_indices() {
                        let offset = span.start + index;
                        unsupported.push(LexError::UnsupportedCharacter {
                            paragraph,
                            offset,
                            character,
                        });
                    }
                }
            }
        }

        (tokens, unsupported)
    }

    /// Tokenize a batch of paragraphs, one per line
    pub fn tokenize<I, S>(&self, lines: I) -> LexOutput
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut output = LexOutput::default();
        for (paragraph, line) in lines.into_iter().enumerate() {
            let (tokens, unsupported) = self.tokenize_paragraph(paragraph, line.as_ref());
            output.paragraphs.push(tokens);
            output.unsupported.extend(unsupported);
        }
        output
    }
}

/// Tokenize a batch of paragraphs with the global vocabulary
pub fn tokenize<I, S>(lines: I) -> LexOutput
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    Tokenizer::new(Vocabulary::global()).tokenize(lines)
}

/// Convenience function to tokenize a single line, dropping diagnostics
pub fn tokenize_line(line: &str) -> Vec<Token> {
    Tokenizer::new(Vocabulary::global())
        .tokenize_paragraph(0, line)
        .0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(line: &str) -> Vec<TokenKind> {
        tokenize_line(line).into_iter().map(|t| t.kind).collect()
    }

    #[test]
    fn test_module_header_tokenization() {
        let tokens = tokenize_line("SC1005 DIGITAL LOGIC 3.0 AU");
        assert_eq!(
            tokens,
            vec![
                Token::new(TokenKind::ModuleCode, "SC1005"),
                Token::new(TokenKind::Identifier, "DIGITAL"),
                Token::new(TokenKind::Identifier, "LOGIC"),
                Token::new(TokenKind::Number, "3"),
                Token::new(TokenKind::Dot, "."),
                Token::new(TokenKind::Number, "0"),
                Token::new(TokenKind::Au, "AU"),
            ]
        );
    }

    #[test]
    fn test_whitespace_never_produces_tokens() {
        assert_eq!(kinds(" \t\n "), vec![]);
        assert_eq!(kinds(""), vec![]);
        assert_eq!(kinds("a \t b"), kinds("a b"));
    }

    #[test]
    fn test_punctuation_maps_one_to_one() {
        assert_eq!(
            kinds(".,:;(){}[]-&'\"+/`?"),
            vec![
                TokenKind::Dot,
                TokenKind::Comma,
                TokenKind::Colon,
                TokenKind::Semicolon,
                TokenKind::LParen,
                TokenKind::RParen,
                TokenKind::LBrace,
                TokenKind::RBrace,
                TokenKind::LBracket,
                TokenKind::RBracket,
                TokenKind::Dash,
                TokenKind::And,
                TokenKind::SingleQuote,
                TokenKind::DoubleQuote,
                TokenKind::Plus,
                TokenKind::Slash,
                TokenKind::Backtick,
                TokenKind::QuestionMark,
            ]
        );
    }

    #[test]
    fn test_multi_word_keywords_split_into_words() {
        assert_eq!(
            kinds("Grade Type: Pass/Fail"),
            vec![
                TokenKind::Grade,
                TokenKind::Type,
                TokenKind::Colon,
                TokenKind::Pass,
                TokenKind::Slash,
                TokenKind::Fail,
            ]
        );
        assert_eq!(
            kinds("Mutually exclusive with:"),
            vec![
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Identifier,
                TokenKind::Colon,
            ]
        );
    }

    #[test]
    fn test_module_code_followed_by_parenthetical() {
        assert_eq!(
            kinds("MH1812(Corequisite)"),
            vec![
                TokenKind::ModuleCode,
                TokenKind::LParen,
                TokenKind::Corequisite,
                TokenKind::RParen,
            ]
        );
    }

    #[test]
    fn test_unsupported_characters_are_skipped_and_reported() {
        let output = tokenize(["50% of AU", "fine"]);
        assert_eq!(
            output.paragraphs[0]
                .iter()
                .map(|t| t.literal.as_str())
                .collect::<Vec<_>>(),
            vec!["50", "of", "AU"]
        );
        assert_eq!(
            output.unsupported,
            vec![LexError::UnsupportedCharacter {
                paragraph: 0,
                offset: 2,
                character: '%',
            }]
        );
        assert_eq!(output.paragraphs[1].len(), 1);
    }

    #[test]
    fn test_paragraphs_are_independent() {
        let output = tokenize(["SC1005 DIGITAL", "", "MH1812"]);
        assert_eq!(output.paragraphs.len(), 3);
        assert!(output.paragraphs[1].is_empty());
        assert_eq!(output.paragraphs[2], vec![Token::new(TokenKind::ModuleCode, "MH1812")]);
    }

    #[test]
    fn test_unicode_letters_form_words() {
        let tokens = tokenize_line("Café 2.0");
        assert_eq!(tokens[0], Token::new(TokenKind::Identifier, "Café"));
        assert_eq!(tokens.len(), 4);
    }
}
