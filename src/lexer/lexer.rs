use std::sync::Arc;

use lazy_static::lazy_static;
use regex::Regex;

use crate::{Position, Span, MK_SPAN, MK_TOKEN};

use super::tokens::{Token, TokenKind};

lazy_static! {
    static ref SYMBOL_PATTERN: Regex = Regex::new("^[a-zA-Z_][a-zA-Z0-9_]*").unwrap();
    static ref INTEGER_PATTERN: Regex = Regex::new("^[0-9]+").unwrap();
    static ref WHITESPACE_PATTERN: Regex = Regex::new("^[ \t\n\r]+").unwrap();
}

/// Pull-based scanner over a single source string.
///
/// Each call to [`Lexer::next_token`] yields one token. Once the input is
/// exhausted the lexer keeps returning `EOF`.
#[derive(Debug, Clone)]
pub struct Lexer {
    source: String,
    pos: usize,
    file: Arc<String>,
}

impl Lexer {
    pub fn new(source: impl Into<String>, file: Option<String>) -> Lexer {
        let file_name = if let Some(file) = file {
            Arc::new(file)
        } else {
            Arc::new(String::from("shell"))
        };

        Lexer {
            source: source.into(),
            pos: 0,
            file: file_name,
        }
    }

    pub fn next_token(&mut self) -> Token {
        self.skip_whitespace();

        let Some(ch) = self.at() else {
            let span = MK_SPAN!(self.pos, self.pos, self.file);
            return MK_TOKEN!(TokenKind::EOF, String::new(), span);
        };

        match ch {
            'a'..='z' | 'A'..='Z' | '_' => self.symbol_token(),
            '0'..='9' => self.integer_token(),
            '=' => self.one_or_two(TokenKind::Assignment, TokenKind::Equals),
            '!' => self.one_or_two(TokenKind::Not, TokenKind::NotEquals),
            '<' => self.one_or_two(TokenKind::Less, TokenKind::LessEquals),
            '>' => self.one_or_two(TokenKind::Greater, TokenKind::GreaterEquals),
            '+' => self.one_or_two(TokenKind::Plus, TokenKind::PlusEquals),
            '-' => self.one_or_two(TokenKind::Dash, TokenKind::MinusEquals),
            '*' => self.one_or_two(TokenKind::Star, TokenKind::StarEquals),
            '/' => self.one_or_two(TokenKind::Slash, TokenKind::SlashEquals),
            ',' => self.single(TokenKind::Comma, ch),
            ';' => self.single(TokenKind::Semicolon, ch),
            '(' => self.single(TokenKind::OpenParen, ch),
            ')' => self.single(TokenKind::CloseParen, ch),
            '{' => self.single(TokenKind::OpenCurly, ch),
            '}' => self.single(TokenKind::CloseCurly, ch),
            _ => self.single(TokenKind::Illegal, ch),
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.pos += n;
    }

    pub fn at(&self) -> Option<char> {
        self.remainder().chars().next()
    }

    pub fn peek(&self) -> Option<char> {
        self.remainder().chars().nth(1)
    }

    pub fn remainder(&self) -> &str {
        &self.source[self.pos..]
    }

    fn skip_whitespace(&mut self) {
        if let Some(matched) = WHITESPACE_PATTERN.find(self.remainder()) {
            self.advance_n(matched.end());
        }
    }

    fn single(&mut self, kind: TokenKind, ch: char) -> Token {
        let start = self.pos;
        self.advance_n(ch.len_utf8());
        MK_TOKEN!(kind, ch.to_string(), MK_SPAN!(start, self.pos, self.file))
    }

    // Every two-character lexeme is its one-character form followed by `=`.
    fn one_or_two(&mut self, single: TokenKind, double: TokenKind) -> Token {
        let start = self.pos;
        let kind = if self.peek() == Some('=') {
            self.advance_n(2);
            double
        } else {
            self.advance_n(1);
            single
        };

        let literal = self.source[start..self.pos].to_string();
        MK_TOKEN!(kind, literal, MK_SPAN!(start, self.pos, self.file))
    }

    fn symbol_token(&mut self) -> Token {
        let start = self.pos;
        let value = SYMBOL_PATTERN
            .find(self.remainder())
            .map(|matched| matched.as_str().to_string())
            .unwrap_or_default();

        self.advance_n(value.len());
        let kind = TokenKind::lookup_identifier(&value);
        MK_TOKEN!(kind, value, MK_SPAN!(start, self.pos, self.file))
    }

    fn integer_token(&mut self) -> Token {
        let start = self.pos;
        let value = INTEGER_PATTERN
            .find(self.remainder())
            .map(|matched| matched.as_str().to_string())
            .unwrap_or_default();

        self.advance_n(value.len());
        MK_TOKEN!(TokenKind::Integer, value, MK_SPAN!(start, self.pos, self.file))
    }
}

/// Scans the whole source, returning every token up to and including `EOF`.
pub fn tokenize(source: impl Into<String>, file: Option<String>) -> Vec<Token> {
    let mut lex = Lexer::new(source, file);
    let mut tokens = vec![];

    loop {
        let token = lex.next_token();
        let done = token.kind == TokenKind::EOF;
        tokens.push(token);

        if done {
            break;
        }
    }

    tokens
}
