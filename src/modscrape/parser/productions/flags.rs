//! Elective exclusions and the trailing description

use crate::modscrape::lexer::{join_literals, Phrase};
use crate::modscrape::parser::Parser;

impl Parser<'_> {
    /// `Not offered as Broadening and Deepening Elective`
    pub fn not_offered_as_bde(&mut self) -> bool {
        self.cursor.match_words(Phrase::NotOfferedAsBde.words())
    }

    /// `Not offered as Unrestricted Elective`
    pub fn not_offered_as_ue(&mut self) -> bool {
        self.cursor.match_words(Phrase::NotOfferedAsUe.words())
    }

    /// Whatever is left of the paragraph, joined with single spaces
    pub fn description(&mut self) -> String {
        let start = self.cursor.position().token;
        while self.cursor.advance().is_some() {}
        let end = self.cursor.position().token;
        join_literals(self.cursor.paragraph_slice(start, end), " ")
    }
}

#[cfg(test)]
mod tests {
    use crate::modscrape::lexer::tokenize;
    use crate::modscrape::parser::Parser;

    #[test]
    fn test_elective_flags() {
        let tokens = tokenize([
            "",
            "Not offered as Broadening and Deepening Elective",
            "Not offered as Unrestricted Elective",
        ])
        .paragraphs;
        let mut parser = Parser::new(&tokens);
        assert!(!parser.not_offered_as_bde());
        assert!(!parser.not_offered_as_ue());

        parser.cursor.next_paragraph();
        assert!(!parser.not_offered_as_ue());
        assert!(parser.not_offered_as_bde());
        assert_eq!(parser.position().token, 7);

        parser.cursor.next_paragraph();
        assert!(!parser.not_offered_as_bde());
        assert!(parser.not_offered_as_ue());
    }

    #[test]
    fn test_description_takes_the_rest() {
        let tokens = tokenize(["Learn (a lot) of things."]).paragraphs;
        let mut parser = Parser::new(&tokens);
        assert_eq!(parser.description(), "Learn ( a lot ) of things .");
        assert!(parser.cursor().is_at_end());
        assert_eq!(parser.description(), "");
    }
}
