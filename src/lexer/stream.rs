use super::rules::LexRuleSet;
use super::{is_blank_or_comment, Lexer, RawLex, Source, SourceLocation, Token, TokenProperty, TokenType};
use crate::util::Log;
use once_cell::unsync::OnceCell;

impl<'s> Lexer<'s> {
    pub fn new() -> Self {
        Self {
            rules: LexRuleSet::new(),
            sources: &[],
            source: 0,
            line: 0,
            column: 0,
            pos: 0,
            cur: RawLex {
                ty: TokenType::Eos,
                start: 0,
                size: 0,
            },
            line_pos: Vec::new(),
            window: [Token::default(), Token::default()],
            log: OnceCell::new(),
        }
    }

    /// Set a log label to debug the produced token stream.
    pub fn set_log(&self, log: Log<&'static str>) -> Result<(), String> {
        self.log
            .set(log)
            .map_err(|err| format!("Log label {} is already assigned.", err))
    }

    /// Bind a slice of sources and prime the two-token window with the first
    /// two structural tokens.
    pub fn reset(&mut self, sources: &'s [Source]) {
        self.sources = sources;
        self.source = 0;
        self.line = 0;
        self.column = 0;
        self.pos = 0;
        self.line_pos.clear();
        if !sources.is_empty() {
            self.line_pos.push(vec![0]);
        }
        self.window = [Token::default(), Token::default()];

        self.read_raw();
        self.skip_blank_and_shift();
        self.advance_raw();
        self.skip_blank_and_shift();
    }

    /// Shift the peek token into the current slot and refill the peek.
    pub fn advance(&mut self) {
        self.advance_raw();
        self.skip_blank_and_shift();
    }

    /// The current token (`k = 0`) or the one-token lookahead (`k = 1`).
    pub fn token(&self, k: usize) -> &Token {
        debug_assert!(k <= 1);
        &self.window[k]
    }

    /// Byte offset of a 0-based line of a source, recorded while scanning.
    pub fn line_pos(&self, file: usize, line: usize) -> Option<usize> {
        self.line_pos.get(file).and_then(|lines| lines.get(line)).copied()
    }

    pub fn sources(&self) -> &'s [Source] {
        self.sources
    }

    fn read_raw(&mut self) {
        if self.source >= self.sources.len() {
            self.cur = RawLex {
                ty: TokenType::Eos,
                start: self.pos,
                size: 0,
            };
            return;
        }
        let content = self.sources[self.source].content.as_bytes();
        if self.pos >= content.len() {
            self.cur = RawLex {
                ty: TokenType::Eof,
                start: self.pos,
                size: 0,
            };
            return;
        }
        self.cur = match self.rules.scan(&content[self.pos..]) {
            Some((ty, size)) => RawLex {
                ty,
                start: self.pos,
                size,
            },
            None => RawLex {
                ty: TokenType::Unknown,
                start: self.pos,
                size: 1,
            },
        };
    }

    fn advance_raw(&mut self) {
        match self.cur.ty {
            TokenType::Eos => return,
            TokenType::Eof => {
                self.next_source();
                return;
            }
            TokenType::Eol => {
                self.line += 1;
                self.column = 0;
                self.line_pos[self.source].push(self.cur.start + self.cur.size);
            }
            _ => self.column += self.cur.size,
        }
        self.pos = self.cur.start + self.cur.size;
        self.read_raw();
    }

    fn next_source(&mut self) {
        self.source += 1;
        self.line = 0;
        self.column = 0;
        self.pos = 0;
        if self.source < self.sources.len() {
            self.line_pos.push(vec![0]);
        }
        self.read_raw();
    }

    fn skip_blank_and_shift(&mut self) {
        while is_blank_or_comment(self.cur.ty) {
            self.advance_raw();
        }

        self.window.swap(0, 1);
        self.window[1] = self.token_from_cur();

        #[cfg(debug_assertions)]
        if let Some(log) = self.log.get() {
            if log.order() >= Log::Success(()).order() {
                let token = &self.window[1];
                println!(
                    "[{}; LexerToken]: {:?} at {}:{}:{}",
                    log,
                    token.ty,
                    token.location.file,
                    token.location.line,
                    token.location.column
                );
            }
        }
    }

    fn token_from_cur(&self) -> Token {
        let ty = self.cur.ty;
        if ty == TokenType::Unknown {
            return Token::default();
        }

        let location = SourceLocation {
            file: self.source,
            line: self.line,
            column: self.column,
            size: self.cur.size,
        };

        let property = match ty {
            TokenType::Identifier => {
                TokenProperty::Identifier(String::from_utf8_lossy(self.cur_text()).into_owned())
            }
            TokenType::Bool => TokenProperty::Bool(self.cur_text() == b"true"),
            TokenType::Integer => integer_property(self.cur_text()),
            TokenType::Float => float_property(self.cur_text()),
            TokenType::StringLiteral => {
                let text = self.cur_text();
                let inner = if text.len() >= 2 {
                    &text[1..text.len() - 1]
                } else {
                    &[] as &[u8]
                };
                TokenProperty::String(String::from_utf8_lossy(inner).into_owned())
            }
            _ => TokenProperty::None,
        };

        Token {
            ty,
            location,
            property,
        }
    }

    fn cur_text(&self) -> &[u8] {
        let content = self.sources[self.source].content.as_bytes();
        &content[self.cur.start..self.cur.start + self.cur.size]
    }
}

impl<'s> Default for Lexer<'s> {
    fn default() -> Self {
        Self::new()
    }
}

fn integer_property(text: &[u8]) -> TokenProperty {
    let value = if text.first() == Some(&b'\'') {
        match (text.get(1), text.get(2)) {
            (Some(&b'\\'), Some(&escaped)) => match escaped {
                b'n' => b'\n' as i64,
                b't' => b'\t' as i64,
                b'r' => b'\r' as i64,
                b'0' => 0,
                other => other as i64,
            },
            (Some(&byte), _) => byte as i64,
            _ => 0,
        }
    } else {
        std::str::from_utf8(text)
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default()
    };
    TokenProperty::Integer {
        signed: true,
        precision: 4,
        value,
    }
}

fn float_property(text: &[u8]) -> TokenProperty {
    let value = std::str::from_utf8(text)
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_default();
    TokenProperty::Float {
        precision: 8,
        value,
    }
}
