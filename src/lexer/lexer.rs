use lazy_static::lazy_static;
use regex::Regex;
use tracing::trace;

use crate::{MK_DEFAULT_HANDLER, MK_TOKEN};

use super::tokens::{Token, TokenKind, RESERVED_LOOKUP};

/// Called with the length of the match at the lexer's current offset.
/// Returns `None` when the match produced no token (whitespace, comments).
pub type RegexHandler = for<'src> fn(&mut Lexer<'src>, usize) -> Option<Token<'src>>;

pub struct RegexPattern {
    regex: Regex,
    handler: RegexHandler,
}

// Order matters: the first pattern that matches at the current offset wins.
lazy_static! {
    static ref PATTERNS: Vec<RegexPattern> = vec![
        RegexPattern { regex: Regex::new("^[ \t\r\n]+").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^#[^\n]*").unwrap(), handler: skip_handler },
        RegexPattern { regex: Regex::new("^[0-9]+(\\.[0-9]+)?").unwrap(), handler: number_handler },
        RegexPattern { regex: Regex::new("^[a-zA-Z]+").unwrap(), handler: symbol_handler },
        RegexPattern { regex: Regex::new("^>=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::GreaterEquals) },
        RegexPattern { regex: Regex::new("^>").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Greater) },
        RegexPattern { regex: Regex::new("^<=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::LessEquals) },
        RegexPattern { regex: Regex::new("^<").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Less) },
        RegexPattern { regex: Regex::new("^\\+").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Plus) },
        RegexPattern { regex: Regex::new("^-").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Dash) },
        RegexPattern { regex: Regex::new("^\\*").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Star) },
        RegexPattern { regex: Regex::new("^/").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Slash) },
        RegexPattern { regex: Regex::new("^=").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Assignment) },
        RegexPattern { regex: Regex::new("^,").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Comma) },
        RegexPattern { regex: Regex::new("^;").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::Semicolon) },
        RegexPattern { regex: Regex::new("^\\(").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenParen) },
        RegexPattern { regex: Regex::new("^\\)").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseParen) },
        RegexPattern { regex: Regex::new("^\\[").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenBracket) },
        RegexPattern { regex: Regex::new("^\\]").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseBracket) },
        RegexPattern { regex: Regex::new("^\\{").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::OpenCurly) },
        RegexPattern { regex: Regex::new("^\\}").unwrap(), handler: MK_DEFAULT_HANDLER!(TokenKind::CloseCurly) },
    ];
}

/// On-demand tokenizer over a borrowed source buffer.
#[derive(Debug, Clone)]
pub struct Lexer<'src> {
    source: &'src str,
    start: usize,
    current: usize,
    line: u32,
    finished: bool,
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src str) -> Lexer<'src> {
        Lexer {
            source,
            start: 0,
            current: 0,
            line: 1,
            finished: false,
        }
    }

    pub fn advance_n(&mut self, n: usize) {
        self.current += n;
    }

    /// Consumes `length` bytes and wraps everything since the token start.
    pub fn make_token(&mut self, kind: TokenKind, length: usize) -> Token<'src> {
        self.advance_n(length);
        let source = self.source;
        MK_TOKEN!(kind, self.line, &source[self.start..self.current])
    }

    pub fn remainder(&self) -> &'src str {
        let source = self.source;
        &source[self.current..]
    }

    pub fn at_eof(&self) -> bool {
        self.current >= self.source.len()
    }

    pub fn next_token(&mut self) -> Token<'src> {
        loop {
            self.start = self.current;

            if self.at_eof() {
                return self.make_token(TokenKind::EOF, 0);
            }

            let remaining = self.remainder();
            let matched = PATTERNS
                .iter()
                .find_map(|pattern| pattern.regex.find(remaining).map(|m| (pattern.handler, m.end())));

            match matched {
                Some((handler, length)) => {
                    if let Some(token) = handler(self, length) {
                        trace!(kind = %token.kind, line = token.line, lexeme = token.lexeme, "token");
                        return token;
                    }
                }
                None => {
                    let length = remaining.chars().next().map_or(1, char::len_utf8);
                    let token = self.make_token(TokenKind::Error, length);
                    trace!(line = token.line, lexeme = token.lexeme, "unrecognised character");
                    return token;
                }
            }
        }
    }
}

impl<'src> Iterator for Lexer<'src> {
    type Item = Token<'src>;

    /// Yields the EOF token once, then stops.
    fn next(&mut self) -> Option<Token<'src>> {
        if self.finished {
            return None;
        }

        let token = self.next_token();
        if token.kind == TokenKind::EOF {
            self.finished = true;
        }

        Some(token)
    }
}

fn skip_handler<'src>(lexer: &mut Lexer<'src>, length: usize) -> Option<Token<'src>> {
    let skipped = &lexer.remainder()[..length];
    lexer.line += skipped.matches('\n').count() as u32;
    lexer.advance_n(length);
    None
}

fn number_handler<'src>(lexer: &mut Lexer<'src>, length: usize) -> Option<Token<'src>> {
    let kind = if lexer.remainder()[..length].contains('.') {
        TokenKind::FloatingLiteral
    } else {
        TokenKind::IntegerLiteral
    };

    Some(lexer.make_token(kind, length))
}

fn symbol_handler<'src>(lexer: &mut Lexer<'src>, length: usize) -> Option<Token<'src>> {
    let value = &lexer.remainder()[..length];
    let kind = RESERVED_LOOKUP
        .get(value)
        .copied()
        .unwrap_or(TokenKind::Identifier);

    Some(lexer.make_token(kind, length))
}

/// Lexes the whole buffer. The last token is always EOF.
pub fn tokenize(source: &str) -> Vec<Token<'_>> {
    Lexer::new(source).collect()
}
