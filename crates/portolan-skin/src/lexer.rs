use crate::error::ParseError;

// ── Token ─────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    // Literals
    Ident(String),
    Number(f32),
    // Punctuation
    Colon,
    LBrace,
    RBrace,
    // Sentinel
    Eof,
}

/// A token plus the 1-based source position where it starts.
#[derive(Debug, Clone, PartialEq)]
pub struct TokenWithPos {
    pub token: Token,
    pub line: usize,
    pub col: usize,
}

// ── Lexer ─────────────────────────────────────────────────────────────────

pub struct Lexer<'s> {
    src: &'s str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'s> Lexer<'s> {
    pub fn new(src: &'s str) -> Self {
        Self { src, pos: 0, line: 1, col: 1 }
    }

    pub fn tokenize(mut self) -> Result<Vec<TokenWithPos>, ParseError> {
        let mut tokens = Vec::new();
        loop {
            let tok = self.next_token()?;
            let eof = tok.token == Token::Eof;
            tokens.push(tok);
            if eof {
                break;
            }
        }
        Ok(tokens)
    }

    fn peek(&self) -> Option<char> {
        self.src[self.pos..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let ch = self.src[self.pos..].chars().next()?;
        self.pos += ch.len_utf8();
        if ch == '\n' {
            self.line += 1;
            self.col = 1;
        } else {
            self.col += 1;
        }
        Some(ch)
    }

    fn skip_whitespace_and_comments(&mut self) -> Result<(), ParseError> {
        loop {
            while matches!(self.peek(), Some(c) if c.is_whitespace()) {
                self.advance();
            }
            // skip `//` line comments
            if self.src[self.pos..].starts_with("//") {
                while !matches!(self.peek(), None | Some('\n')) {
                    self.advance();
                }
            // skip `/* */` block comments
            } else if self.src[self.pos..].starts_with("/*") {
                let (line, col) = (self.line, self.col);
                self.advance(); self.advance(); // consume `/*`
                loop {
                    if self.src[self.pos..].starts_with("*/") {
                        self.advance(); self.advance(); // consume `*/`
                        break;
                    }
                    if self.advance().is_none() {
                        return Err(ParseError::new("unterminated block comment", line, col));
                    }
                }
            } else {
                return Ok(());
            }
        }
    }

    fn next_token(&mut self) -> Result<TokenWithPos, ParseError> {
        self.skip_whitespace_and_comments()?;
        let (line, col) = (self.line, self.col);
        let at = |token| TokenWithPos { token, line, col };

        let ch = match self.peek() {
            None => return Ok(at(Token::Eof)),
            Some(c) => c,
        };

        match ch {
            ':' => { self.advance(); Ok(at(Token::Colon)) }
            '{' => { self.advance(); Ok(at(Token::LBrace)) }
            '}' => { self.advance(); Ok(at(Token::RBrace)) }
            c if c.is_ascii_digit() || c == '-' => self.lex_number(line, col).map(at),
            c if c.is_alphabetic() || c == '_' => Ok(at(self.lex_ident())),
            other => Err(ParseError::new(
                format!("unexpected character {:?}", other),
                line,
                col,
            )),
        }
    }

    fn lex_number(&mut self, line: usize, col: usize) -> Result<Token, ParseError> {
        let start = self.pos;
        if self.peek() == Some('-') {
            self.advance();
        }
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.advance();
        }
        if self.peek() == Some('.') {
            self.advance();
            while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
                self.advance();
            }
        }
        let s = &self.src[start..self.pos];
        s.parse::<f32>()
            .map(Token::Number)
            .map_err(|_| ParseError::new(format!("invalid number {:?}", s), line, col))
    }

    fn lex_ident(&mut self) -> Token {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_alphanumeric() || c == '_') {
            self.advance();
        }
        Token::Ident(self.src[start..self.pos].to_string())
    }
}
