//! Programme restrictions and course references

use crate::modscrape::ast::{Course, Expected, ParseError, OPEN_ENDED_YEAR};
use crate::modscrape::lexer::{Phrase, TokenKind};
use crate::modscrape::parser::assemble::parse_number;
use crate::modscrape::parser::Parser;

const COURSE_RULE: &str = "course";

/// The kinds of parenthesised qualifier a course takes, each at most once
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CourseGroup {
    EntryRoute,
    Years,
    AltName,
}

impl CourseGroup {
    fn repeated(self) -> Expected {
        Expected::Shape(match self {
            CourseGroup::EntryRoute => "no second entry route",
            CourseGroup::Years => "no second year range",
            CourseGroup::AltName => "no second alternate name",
        })
    }
}

impl Parser<'_> {
    /// `Not available to Programme: EEE(2018-onwards)(Non Direct Entry), IEM`
    pub fn not_available_to_programme(&mut self) -> Result<Vec<Course>, ParseError> {
        self.course_list(Phrase::NotAvailableToProgramme, "not available to programme", false)
    }

    /// `Not available to all Programme with: (Admyr 2011-2019), (Admyr 2021-onwards)`
    pub fn not_available_to_programme_with(&mut self) -> Result<Vec<Course>, ParseError> {
        self.course_list(
            Phrase::NotAvailableToAllProgrammeWith,
            "not available to programme with",
            true,
        )
    }

    /// `Not available as PE to Programme: ...`
    pub fn not_available_as_pe(&mut self) -> Result<Vec<Course>, ParseError> {
        self.course_list(Phrase::NotAvailableAsPeToProgramme, "not available as PE", false)
    }

    fn course_list(
        &mut self,
        phrase: Phrase,
        rule: &'static str,
        admission: bool,
    ) -> Result<Vec<Course>, ParseError> {
        let courses = self.attempt(|parser| {
            if !parser.field_header(phrase, rule)? {
                return Ok(None);
            }
            let mut courses = Vec::new();
            if !parser.starts_course(admission) {
                return Ok(Some(courses));
            }
            courses.push(parser.course(admission)?);
            loop {
                let before_comma = parser.cursor.snapshot();
                if !parser.cursor.match_kind(TokenKind::Comma) {
                    break;
                }
                if !parser.starts_course(admission) {
                    parser.cursor.restore(before_comma);
                    break;
                }
                courses.push(parser.course(admission)?);
            }
            Ok(Some(courses))
        })?;
        Ok(courses.unwrap_or_default())
    }

    fn starts_course(&self, admission: bool) -> bool {
        (self.cursor.check(TokenKind::Identifier) && !self.at_field_start())
            || (admission && self.cursor.check(TokenKind::LParen))
    }

    /// A programme name followed by up to three parenthesised qualifiers
    ///
    /// Each qualifier kind (entry route, year range, alternate name) may
    /// appear once; a repeated kind is an error at its opening parenthesis.
    /// In the admission-year form the name may be left out, in which case the
    /// `Admyr` keyword of the year group names the course.
    pub fn course(&mut self, admission: bool) -> Result<Course, ParseError> {
        self.require(|parser| {
            let mut course = match parser.cursor.current() {
                Some(token) if token.kind == TokenKind::Identifier => {
                    parser.cursor.advance();
                    Course::new(token.literal.clone())
                }
                Some(token) if admission && token.kind == TokenKind::LParen => Course::default(),
                _ => return Err(parser.cursor.error(COURSE_RULE, Expected::Shape("programme name"))),
            };

            let mut filled: Vec<CourseGroup> = Vec::with_capacity(3);
            while parser.cursor.check(TokenKind::LParen) {
                let group_start = parser.cursor.snapshot();
                let group = parser.course_group(&mut course, admission)?;
                if filled.contains(&group) {
                    parser.cursor.restore(group_start);
                    return Err(parser.cursor.error(COURSE_RULE, group.repeated()));
                }
                filled.push(group);
            }

            if course.name.is_empty() {
                return Err(parser.cursor.error(COURSE_RULE, Expected::Kind(TokenKind::Admyr)));
            }
            Ok(course)
        })
    }

    /// One `( ... )` qualifier: entry route, year range or alternate name
    fn course_group(
        &mut self,
        course: &mut Course,
        admission: bool,
    ) -> Result<CourseGroup, ParseError> {
        self.cursor.consume(TokenKind::LParen, COURSE_RULE)?;

        let group = if self.cursor.match_words(&["Direct", "Entry"]) {
            course.is_direct_entry = Some(true);
            CourseGroup::EntryRoute
        } else if self.cursor.match_words(&["Non", "Direct", "Entry"]) {
            course.is_direct_entry = Some(false);
            CourseGroup::EntryRoute
        } else if admission && self.cursor.check(TokenKind::Admyr) {
            if let Some(token) = self.cursor.advance() {
                if course.name.is_empty() {
                    course.name = token.literal.clone();
                }
            }
            let (from, to) = self.year_range()?;
            course.from_year = Some(from);
            course.to_year = to;
            CourseGroup::Years
        } else if self.cursor.check(TokenKind::Number) {
            let (from, to) = self.year_range()?;
            course.from_year = Some(from);
            course.to_year = to;
            CourseGroup::Years
        } else if let Some(token) = self
            .cursor
            .current()
            .filter(|token| token.kind == TokenKind::Identifier)
        {
            self.cursor.advance();
            course.alt_name = Some(token.literal.clone());
            CourseGroup::AltName
        } else {
            return Err(self.cursor.error(
                COURSE_RULE,
                Expected::Shape("entry route, alternate name or year range"),
            ));
        };

        self.cursor.consume(TokenKind::RParen, COURSE_RULE)?;
        Ok(group)
    }

    /// `2018`, `2011-2019` or `2018-onwards`
    fn year_range(&mut self) -> Result<(u32, Option<u32>), ParseError> {
        let position = self.cursor.position();
        let from_token = self.cursor.consume(TokenKind::Number, "year range")?;
        let from: u32 = parse_number(&from_token.literal, position, "year range")?;

        if !self.cursor.match_kind(TokenKind::Dash) {
            return Ok((from, None));
        }
        let to = if self.cursor.match_word("onwards") {
            OPEN_ENDED_YEAR
        } else {
            let to_position = self.cursor.position();
            let to_token = self.cursor.consume(TokenKind::Number, "year range")?;
            parse_number(&to_token.literal, to_position, "year range")?
        };

        if to < from {
            return Err(ParseError::InvalidYearRange {
                paragraph: position.paragraph,
                position: position.token,
                from,
                to,
            });
        }
        Ok((from, Some(to)))
    }
}

#[cfg(test)]
mod tests {
    use crate::modscrape::ast::{Course, Expected, ParseError, OPEN_ENDED_YEAR};
    use crate::modscrape::lexer::tokenize;
    use crate::modscrape::parser::Parser;

    fn with_parser<T>(text: &str, run: impl FnOnce(&mut Parser) -> T) -> (T, usize) {
        let tokens = tokenize([text]).paragraphs;
        let mut parser = Parser::new(&tokens);
        let value = run(&mut parser);
        (value, parser.position().token)
    }

    fn programmes(text: &str) -> Result<Vec<Course>, ParseError> {
        with_parser(text, |p| p.not_available_to_programme()).0
    }

    #[test]
    fn test_programme_header() {
        assert_eq!(programmes("").unwrap(), vec![]);
        assert!(programmes("Not available to Programme").is_err());
        assert_eq!(programmes("Not available to Programme:").unwrap(), vec![]);
        assert_eq!(
            programmes("Not available to Programme: CE").unwrap(),
            vec![Course::new("CE")]
        );
    }

    #[test]
    fn test_programme_alternate_names() {
        assert_eq!(
            programmes("Not available to Programme: REP(CSC), REP(CE)").unwrap(),
            vec![Course::new("REP").alt_name("CSC"), Course::new("REP").alt_name("CE")]
        );
    }

    #[test]
    fn test_programme_entry_routes_and_years() {
        assert_eq!(
            programmes("Not available to Programme: EEE(Direct Entry)").unwrap(),
            vec![Course::new("EEE").direct_entry(true)]
        );
        assert_eq!(
            programmes(
                "Not available to Programme: EEE(2018-onwards)(Non Direct Entry), \
                 IEM(2019-onwards)(Direct Entry), MEEC(RMS)(2020-onwards)(Direct Entry)"
            )
            .unwrap(),
            vec![
                Course::new("EEE")
                    .direct_entry(false)
                    .years(2018, Some(OPEN_ENDED_YEAR)),
                Course::new("IEM")
                    .direct_entry(true)
                    .years(2019, Some(OPEN_ENDED_YEAR)),
                Course::new("MEEC")
                    .direct_entry(true)
                    .years(2020, Some(OPEN_ENDED_YEAR))
                    .alt_name("RMS"),
            ]
        );
    }

    #[test]
    fn test_programme_list_stops_before_next_field() {
        let text = "Not available to Programme: CE, Not offered as Unrestricted Elective";
        let (courses, position) = with_parser(text, |p| p.not_available_to_programme());
        assert_eq!(courses.unwrap(), vec![Course::new("CE")]);
        assert_eq!(position, 6);
    }

    #[test]
    fn test_unrecognised_group_is_an_error() {
        let (courses, position) =
            with_parser("Not available to Programme: EEE(, )", |p| p.not_available_to_programme());
        assert!(courses.is_err());
        assert_eq!(position, 0);
    }

    #[test]
    fn test_repeated_qualifier_is_an_error() {
        let (courses, position) = with_parser("Not available to Programme: EEE(2018)(2020)", |p| {
            p.not_available_to_programme()
        });
        match courses.unwrap_err() {
            ParseError::UnexpectedToken { position, expected, .. } => {
                assert_eq!(position, 9);
                assert_eq!(expected, Expected::Shape("no second year range"));
            }
            other => panic!("expected a repeated year range, got {:?}", other),
        }
        assert_eq!(position, 0);

        let text = "Not available to Programme: EEE(2018)(2020)(CSC)(CE)(Direct Entry)(Non Direct Entry)";
        assert!(programmes(text).is_err());
    }

    #[test]
    fn test_fourth_qualifier_is_an_error() {
        let text = "Not available to Programme: MEEC(RMS)(2020-onwards)(Direct Entry)(CE)";
        let (courses, position) = with_parser(text, |p| p.not_available_to_programme());
        match courses.unwrap_err() {
            ParseError::UnexpectedToken { expected, .. } => {
                assert_eq!(expected, Expected::Shape("no second alternate name"));
            }
            other => panic!("expected a repeated alternate name, got {:?}", other),
        }
        assert_eq!(position, 0);
    }

    #[test]
    fn test_admission_year_form() {
        let (courses, _) = with_parser("", |p| p.not_available_to_programme_with());
        assert_eq!(courses.unwrap(), vec![]);

        let (courses, _) = with_parser("Not available to all Programme with", |p| {
            p.not_available_to_programme_with()
        });
        assert!(courses.is_err());

        let (courses, _) = with_parser("Not available to all Programme with:", |p| {
            p.not_available_to_programme_with()
        });
        assert_eq!(courses.unwrap(), vec![]);

        let (courses, _) = with_parser(
            "Not available to all Programme with: (Admyr 2011-2019), (Admyr 2021-onwards)",
            |p| p.not_available_to_programme_with(),
        );
        assert_eq!(
            courses.unwrap(),
            vec![
                Course::new("Admyr").years(2011, Some(2019)),
                Course::new("Admyr").years(2021, Some(OPEN_ENDED_YEAR)),
            ]
        );
    }

    #[test]
    fn test_reversed_year_range() {
        let (courses, position) = with_parser(
            "Not available to all Programme with: (Admyr 2019-2011)",
            |p| p.not_available_to_programme_with(),
        );
        assert_eq!(
            courses.unwrap_err(),
            ParseError::InvalidYearRange {
                paragraph: 0,
                position: 9,
                from: 2019,
                to: 2011,
            }
        );
        assert_eq!(position, 0);
    }

    #[test]
    fn test_prescribed_elective_form() {
        let (courses, _) = with_parser("Not available as PE to Programme: CSC(2020)", |p| {
            p.not_available_as_pe()
        });
        assert_eq!(courses.unwrap(), vec![Course::new("CSC").years(2020, None)]);
    }
}
