use crate::parser::QueryParser;

/// Case-insensitive keyword matcher anchored at a cursor position.
#[derive(Debug, Default)]
pub struct WordComparer {
    pub length: usize,
    pub word: Vec<char>,
    whitespace_postfix: bool,
    eof: bool,
    optional_postfix: Vec<char>,
}

impl WordComparer {
    pub fn new(word: &str) -> Self {
        let word: Vec<char> = word.to_uppercase().chars().collect();
        Self {
            length: word.len(),
            word,
            whitespace_postfix: false,
            eof: false,
            optional_postfix: vec![],
        }
    }

    pub fn is_block_delimiter(ch: char) -> bool {
        ch.is_whitespace()
    }

    pub fn compare(&self, parser: &QueryParser) -> bool {
        self.compare_at(parser, parser.position)
    }

    pub fn compare_at(&self, parser: &QueryParser, start: usize) -> bool {
        for (offset, expected) in self.word.iter().enumerate() {
            match parser.char_at(start + offset) {
                Some(ch) if ch.to_ascii_uppercase() == *expected => {},
                _ => return false,
            }
        }

        let Some(next) = parser.char_at(start + self.length) else {
            return self.eof;
        };

        if !self.whitespace_postfix && self.optional_postfix.is_empty() {
            return true;
        }

        if self.whitespace_postfix && Self::is_block_delimiter(next) {
            return true;
        }

        self.optional_postfix.contains(&next)
    }

    pub fn with_eof(mut self) -> Self { self.eof = true; self }
    pub fn with_whitespace_postfix(mut self) -> Self { self.whitespace_postfix = true; self }
    pub fn with_optional_postfix(mut self, value: char) -> Self { self.optional_postfix.push(value); self }
}

#[cfg(test)]
mod tests {
    use crate::parser::{QueryParser, WordComparer};

    #[test]
    fn matches_case_insensitively_with_whitespace_postfix() {
        let comparer = WordComparer::new("FROM").with_whitespace_postfix();
        assert!(comparer.compare(&QueryParser::new("from student")));
        assert!(comparer.compare(&QueryParser::new("FrOm\tstudent")));
        assert!(!comparer.compare(&QueryParser::new("fromage x")));
        assert!(!comparer.compare(&QueryParser::new("FROM")));
    }

    #[test]
    fn eof_and_optional_postfix() {
        let asc = WordComparer::new("ASC").with_whitespace_postfix().with_eof().with_optional_postfix(',');
        assert!(asc.compare(&QueryParser::new("ASC")));
        assert!(asc.compare(&QueryParser::new("asc, name")));
        assert!(asc.compare(&QueryParser::new("ASC LIMIT 1")));
        assert!(!asc.compare(&QueryParser::new("ASCII")));
    }

    #[test]
    fn compare_at_offset() {
        let join = WordComparer::new("JOIN").with_whitespace_postfix();
        let parser = QueryParser::new("LEFT JOIN enrollment");
        assert!(!join.compare(&parser));
        assert!(join.compare_at(&parser, 5));
    }
}
