use crate::parser::{ParseError, Phase, QueryComparers};

/// Character cursor over a statement, tracking which clause is being read.
#[derive(Debug, Default)]
pub struct QueryParser {
    pub position: usize,
    pub length: usize,
    pub text_v: Vec<char>,
    pub phase: Phase,
    pub comparers: QueryComparers,
}

impl QueryParser {
    pub fn new(query: &str) -> Self {
        let text_v: Vec<char> = query.chars().collect();
        Self {
            position: 0,
            length: text_v.len(),
            text_v,
            comparers: QueryComparers::new(),
            ..Default::default()
        }
    }

    pub fn eof(&self) -> bool {
        self.position >= self.length
    }

    pub fn current(&self) -> char {
        self.char_at(self.position).unwrap_or('\0')
    }

    pub fn char_at(&self, position: usize) -> Option<char> {
        self.text_v.get(position).copied()
    }

    pub fn next(&mut self) {
        if !self.eof() {
            self.position += 1;
        }
    }

    pub fn next_non_whitespace(&mut self) {
        while !self.eof() && self.current().is_whitespace() {
            self.next();
        }
    }

    pub fn jump(&mut self, ahead: usize) {
        self.position = (self.position + ahead).min(self.length);
    }

    pub fn text_from_range(&self, start: usize, end: usize) -> String {
        let end = end.min(self.length);
        let start = start.min(end);
        self.text_v[start..end].iter().collect()
    }

    pub fn text_from_pivot(&self, pivot: usize) -> String {
        self.text_from_range(pivot, self.position)
    }

    /// Skips whitespace and, when a clause keyword follows, moves to that
    /// clause's phase. Clauses may only appear in statement order.
    pub fn check_next_phase(&mut self) -> bool {
        self.next_non_whitespace();

        if self.current() == ';' {
            let pivot = self.position;
            self.next();
            self.next_non_whitespace();
            if !self.eof() {
                self.position = pivot;
                return false;
            }
        }

        if self.eof() {
            self.phase = Phase::EOF;
            return true;
        }

        if self.phase < Phase::Limit && self.comparers.limit.compare(self) {
            self.phase = Phase::Limit;
            return true;
        }

        if self.phase < Phase::OrderBy && self.comparers.order_by.compare(self) {
            self.phase = Phase::OrderBy;
            return true;
        }

        if self.phase < Phase::Aggregates && self.comparers.group_by.compare(self) {
            self.phase = Phase::Aggregates;
            return true;
        }

        if self.phase < Phase::Criteria && self.comparers.r#where.compare(self) {
            self.phase = Phase::Criteria;
            return true;
        }

        if self.phase == Phase::Collections && self.join_keyword_length().is_some() {
            self.phase = Phase::Joins;
            return true;
        }

        if self.phase < Phase::Collections && self.comparers.from.compare(self) {
            self.phase = Phase::Collections;
            return true;
        }

        false
    }

    /// Length of `JOIN` or `<word> JOIN` at the cursor, if present.
    pub fn join_keyword_length(&self) -> Option<usize> {
        if self.comparers.join.compare(self) {
            return Some(self.comparers.join.length);
        }

        let mut cursor = self.position;
        while self.char_at(cursor).is_some_and(|c| c.is_alphanumeric() || c == '_') {
            cursor += 1;
        }
        if cursor == self.position {
            return None;
        }
        while self.char_at(cursor).is_some_and(char::is_whitespace) {
            cursor += 1;
        }
        if !self.comparers.join.compare_at(self, cursor) {
            return None;
        }
        Some(cursor + self.comparers.join.length - self.position)
    }

    /// Reads until whitespace, `,` or `;`.
    pub fn read_word(&mut self) -> String {
        self.read_while(|c| !c.is_whitespace() && c != ',' && c != ';')
    }

    /// Reads a projection item; text inside parentheses is kept together and
    /// whitespace is dropped, so `COUNT( * )` reads as `COUNT(*)`.
    pub fn read_item(&mut self) -> Result<String, ParseError> {
        let pivot = self.position;
        let mut depth = 0usize;
        let mut item = String::new();
        while !self.eof() {
            let ch = self.current();
            if depth == 0 && (ch.is_whitespace() || ch == ',' || ch == ';') {
                break;
            }
            match ch {
                '(' => depth += 1,
                ')' if depth == 0 => return ParseError::new("Unbalanced parentheses", pivot, self).err(),
                ')' => depth -= 1,
                _ => {},
            }
            if !ch.is_whitespace() {
                item.push(ch);
            }
            self.next();
        }
        if depth > 0 {
            return ParseError::new("Unbalanced parentheses", pivot, self).err();
        }
        Ok(item)
    }

    /// Reads a comparison operand up to whitespace or an operator character.
    pub fn read_operand(&mut self) -> String {
        self.read_while(|c| !c.is_whitespace() && !Self::is_operator_char(c) && c != ';')
    }

    pub fn read_operator(&mut self) -> String {
        self.read_while(Self::is_operator_char)
    }

    /// Reads a literal. A quoted literal is returned with its quotes and may
    /// contain whitespace.
    pub fn read_value(&mut self) -> Result<String, ParseError> {
        let quote = self.current();
        if quote != '\'' && quote != '"' {
            return Ok(self.read_while(|c| !c.is_whitespace() && c != ';'));
        }

        let pivot = self.position;
        self.next();
        while !self.eof() && self.current() != quote {
            self.next();
        }
        if self.eof() {
            return ParseError::new("Unterminated string literal", pivot, self).err();
        }
        self.next();
        Ok(self.text_from_pivot(pivot))
    }

    pub fn is_operator_char(c: char) -> bool {
        matches!(c, '=' | '!' | '<' | '>')
    }

    fn read_while(&mut self, keep: impl Fn(char) -> bool) -> String {
        let pivot = self.position;
        while !self.eof() && keep(self.current()) {
            self.next();
        }
        self.text_from_pivot(pivot)
    }
}
