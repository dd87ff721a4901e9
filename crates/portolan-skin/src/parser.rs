use crate::ast::{Placement, Prop, SkinDocument, Value};
use crate::error::ParseError;
use crate::lexer::{Lexer, Token, TokenWithPos};

// ── Parser ────────────────────────────────────────────────────────────────

pub struct Parser {
    tokens: Vec<TokenWithPos>,
    pos: usize,
}

impl Parser {
    pub fn new(tokens: Vec<TokenWithPos>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current_pos(&self) -> (usize, usize) {
        self.tokens
            .get(self.pos)
            .map(|t| (t.line, t.col))
            .or_else(|| self.tokens.last().map(|t| (t.line, t.col)))
            .unwrap_or((1, 1))
    }

    fn peek(&self) -> &Token {
        self.tokens.get(self.pos).map(|t| &t.token).unwrap_or(&Token::Eof)
    }

    fn advance(&mut self) -> Token {
        let tok = self.tokens.get(self.pos)
            .map(|t| t.token.clone())
            .unwrap_or(Token::Eof);
        if self.pos < self.tokens.len() {
            self.pos += 1;
        }
        tok
    }

    fn err(&self, msg: impl Into<String>) -> ParseError {
        let (line, col) = self.current_pos();
        ParseError::new(msg, line, col)
    }

    fn expect_ident(&mut self) -> Result<String, ParseError> {
        let (line, col) = self.current_pos();
        match self.advance() {
            Token::Ident(s) => Ok(s),
            tok => Err(ParseError::new(
                format!("expected identifier, got {:?}", tok),
                line,
                col,
            )),
        }
    }

    fn expect_token(&mut self, expected: &Token) -> Result<(), ParseError> {
        let (line, col) = self.current_pos();
        let got = self.advance();
        if &got == expected {
            Ok(())
        } else {
            Err(ParseError::new(
                format!("expected {:?}, got {:?}", expected, got),
                line,
                col,
            ))
        }
    }

    // ── Document ──────────────────────────────────────────────────────────

    /// Parse `section*` until end of input. A section repeated later in the
    /// document appends to the earlier one rather than replacing it.
    pub fn parse_document(&mut self) -> Result<SkinDocument, ParseError> {
        let mut doc = SkinDocument::default();

        loop {
            match self.peek() {
                Token::Eof => break,
                Token::Ident(_) => {
                    let (line, col) = self.current_pos();
                    let name = self.expect_ident()?;
                    if name != "portrait" && name != "landscape" {
                        return Err(ParseError::new(
                            format!("unknown section {:?}, expected portrait or landscape", name),
                            line,
                            col,
                        ));
                    }
                    let placements = self
                        .parse_section_body()
                        .map_err(|e| e.in_section(&name))?;
                    if name == "portrait" {
                        doc.portrait.extend(placements);
                    } else {
                        doc.landscape.extend(placements);
                    }
                }
                tok => return Err(self.err(format!("expected a section name, got {:?}", tok))),
            }
        }

        Ok(doc)
    }

    // ── Section ───────────────────────────────────────────────────────────

    fn parse_section_body(&mut self) -> Result<Vec<Placement>, ParseError> {
        self.expect_token(&Token::LBrace)?;
        let mut placements = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => { self.advance(); break; }
                Token::Eof    => return Err(self.err("unclosed '{' section")),
                Token::Ident(_) => placements.push(self.parse_placement()?),
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside section, expected a widget name",
                        tok
                    )));
                }
            }
        }

        Ok(placements)
    }

    // ── Placement ─────────────────────────────────────────────────────────

    fn parse_placement(&mut self) -> Result<Placement, ParseError> {
        let widget = self.expect_ident()?;
        self.expect_token(&Token::LBrace)?;
        let mut props = Vec::new();

        loop {
            match self.peek() {
                Token::RBrace => { self.advance(); break; }
                Token::Eof    => return Err(self.err("unclosed '{' placement")),
                Token::Ident(_) => props.push(self.parse_prop()?),
                tok => {
                    return Err(self.err(format!(
                        "unexpected {:?} inside placement, expected a property (key: value)",
                        tok
                    )));
                }
            }
        }

        Ok(Placement { widget, props })
    }

    // ── Prop ──────────────────────────────────────────────────────────────

    fn parse_prop(&mut self) -> Result<Prop, ParseError> {
        let key = self.expect_ident()?;
        self.expect_token(&Token::Colon)?;
        let value = self.parse_value()?;
        Ok(Prop { key, value })
    }

    // ── Value ─────────────────────────────────────────────────────────────

    /// A value is a bare identifier, a number, or two numbers forming a pair.
    /// Pair detection is greedy: a number directly followed by another number
    /// always joins into a pair.
    fn parse_value(&mut self) -> Result<Value, ParseError> {
        let (line, col) = self.current_pos();
        match self.advance() {
            Token::Ident(s)  => Ok(Value::Ident(s)),
            Token::Number(x) => {
                if let Token::Number(y) = *self.peek() {
                    self.advance();
                    Ok(Value::Pair(x, y))
                } else {
                    Ok(Value::Number(x))
                }
            }
            tok => Err(ParseError::new(
                format!("expected a value, got {:?}", tok),
                line,
                col,
            )),
        }
    }
}

// ── Public parse entry point ──────────────────────────────────────────────

/// Parse a `.skin` source string into a [`SkinDocument`].
pub fn parse_str(src: &str) -> Result<SkinDocument, ParseError> {
    let tokens = Lexer::new(src).tokenize()?;
    Parser::new(tokens).parse_document()
}
