use super::lexer::{tokenize, Token, TokenKind};
use crate::shared::error::SbomError;
use crate::shared::Result;

/// A parsed expression from the restricted BUILD-syntax grammar.
///
/// Only the constructs the query output actually contains are supported:
/// scalar literals, identifiers (True/False plus opaque references),
/// lists, and dicts. Anything else is a parse failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    Str(String),
    Int(i64),
    Bool(bool),
    Ident(String),
    List(Vec<Expr>),
    Dict(Vec<(Expr, Expr)>),
}

impl Expr {
    /// Renders a non-string expression as its textual form.
    ///
    /// Used when a list element or dict key/value is not a plain literal;
    /// the value is carried through stringified rather than dropped.
    pub fn stringify(&self) -> String {
        match self {
            Expr::Str(s) => s.clone(),
            Expr::Int(value) => value.to_string(),
            Expr::Bool(true) => "True".to_string(),
            Expr::Bool(false) => "False".to_string(),
            Expr::Ident(name) => name.clone(),
            Expr::List(items) => {
                let rendered: Vec<String> = items.iter().map(Expr::stringify).collect();
                format!("[{}]", rendered.join(", "))
            }
            Expr::Dict(pairs) => {
                let rendered: Vec<String> = pairs
                    .iter()
                    .map(|(k, v)| format!("{}: {}", k.stringify(), v.stringify()))
                    .collect();
                format!("{{{}}}", rendered.join(", "))
            }
        }
    }
}

/// One top-level call parsed from the query output, e.g. an
/// `http_archive(...)` repository declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchCall {
    pub function: String,
    pub line: usize,
    pub kwargs: Vec<(String, Expr)>,
}

/// Parses the full query output into its sequence of top-level calls.
///
/// # Errors
/// Any syntax outside the restricted grammar is a fatal parse failure;
/// there is no partial recovery.
pub fn parse(input: &str) -> Result<Vec<FetchCall>> {
    let tokens = tokenize(input)?;
    Parser::new(tokens).parse_program()
}

struct Parser {
    tokens: Vec<Token>,
    pos: usize,
}

impl Parser {
    fn new(tokens: Vec<Token>) -> Self {
        Self { tokens, pos: 0 }
    }

    fn parse_program(mut self) -> Result<Vec<FetchCall>> {
        let mut calls = Vec::new();
        while self.peek().is_some() {
            calls.push(self.parse_call()?);
        }
        Ok(calls)
    }

    fn parse_call(&mut self) -> Result<FetchCall> {
        let (function, line) = match self.next() {
            Some(Token {
                kind: TokenKind::Ident(name),
                line,
            }) => (name, line),
            Some(token) => {
                return Err(self.error_at(
                    token.line,
                    format!("expected a call, found {}", token.kind.describe()),
                ))
            }
            None => return Err(self.error_at_end("expected a call")),
        };

        self.expect(&TokenKind::LParen)?;

        let mut kwargs = Vec::new();
        loop {
            if self.peek_kind() == Some(&TokenKind::RParen) {
                self.next();
                break;
            }

            // Keyword argument: IDENT '=' expr. A bare identifier not
            // followed by '=' is a positional expression instead.
            if let (Some(TokenKind::Ident(_)), Some(TokenKind::Equals)) =
                (self.peek_kind(), self.peek_kind_ahead(1))
            {
                let key = match self.next() {
                    Some(Token {
                        kind: TokenKind::Ident(name),
                        ..
                    }) => name,
                    _ => unreachable!("peeked identifier"),
                };
                self.next(); // consume '='
                let value = self.parse_expr()?;
                kwargs.push((key, value));
            } else {
                // Positional arguments are grammatical but carry no
                // metadata for an http_archive declaration
                self.parse_expr()?;
            }

            match self.peek_kind() {
                Some(TokenKind::Comma) => {
                    self.next();
                }
                Some(TokenKind::RParen) => {}
                Some(_) => {
                    let token = self.next().unwrap_or(Token {
                        kind: TokenKind::RParen,
                        line: 0,
                    });
                    return Err(self.error_at(
                        token.line,
                        format!(
                            "expected ',' or ')' in argument list, found {}",
                            token.kind.describe()
                        ),
                    ));
                }
                None => return Err(self.error_at_end("unclosed argument list")),
            }
        }

        Ok(FetchCall {
            function,
            line,
            kwargs,
        })
    }

    fn parse_expr(&mut self) -> Result<Expr> {
        match self.next() {
            Some(Token {
                kind: TokenKind::Str(s),
                ..
            }) => Ok(Expr::Str(s)),
            Some(Token {
                kind: TokenKind::Int(value),
                ..
            }) => Ok(Expr::Int(value)),
            Some(Token {
                kind: TokenKind::Ident(name),
                ..
            }) => match name.as_str() {
                "True" => Ok(Expr::Bool(true)),
                "False" => Ok(Expr::Bool(false)),
                _ => Ok(Expr::Ident(name)),
            },
            Some(Token {
                kind: TokenKind::LBracket,
                ..
            }) => self.parse_list(),
            Some(Token {
                kind: TokenKind::LBrace,
                ..
            }) => self.parse_dict(),
            Some(token) => Err(self.error_at(
                token.line,
                format!("expected an expression, found {}", token.kind.describe()),
            )),
            None => Err(self.error_at_end("expected an expression")),
        }
    }

    fn parse_list(&mut self) -> Result<Expr> {
        let mut items = Vec::new();
        loop {
            if self.peek_kind() == Some(&TokenKind::RBracket) {
                self.next();
                return Ok(Expr::List(items));
            }
            items.push(self.parse_expr()?);
            match self.peek_kind() {
                Some(TokenKind::Comma) => {
                    self.next();
                }
                Some(TokenKind::RBracket) => {}
                Some(_) => {
                    let token = self.next().expect("peeked token");
                    return Err(self.error_at(
                        token.line,
                        format!(
                            "expected ',' or ']' in list, found {}",
                            token.kind.describe()
                        ),
                    ));
                }
                None => return Err(self.error_at_end("unclosed list")),
            }
        }
    }

    fn parse_dict(&mut self) -> Result<Expr> {
        let mut pairs = Vec::new();
        loop {
            if self.peek_kind() == Some(&TokenKind::RBrace) {
                self.next();
                return Ok(Expr::Dict(pairs));
            }
            let key = self.parse_expr()?;
            self.expect(&TokenKind::Colon)?;
            let value = self.parse_expr()?;
            pairs.push((key, value));
            match self.peek_kind() {
                Some(TokenKind::Comma) => {
                    self.next();
                }
                Some(TokenKind::RBrace) => {}
                Some(_) => {
                    let token = self.next().expect("peeked token");
                    return Err(self.error_at(
                        token.line,
                        format!(
                            "expected ',' or '}}' in dict, found {}",
                            token.kind.describe()
                        ),
                    ));
                }
                None => return Err(self.error_at_end("unclosed dict")),
            }
        }
    }

    fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    fn peek_kind(&self) -> Option<&TokenKind> {
        self.peek().map(|t| &t.kind)
    }

    fn peek_kind_ahead(&self, offset: usize) -> Option<&TokenKind> {
        self.tokens.get(self.pos + offset).map(|t| &t.kind)
    }

    fn next(&mut self) -> Option<Token> {
        let token = self.tokens.get(self.pos).cloned();
        if token.is_some() {
            self.pos += 1;
        }
        token
    }

    fn expect(&mut self, kind: &TokenKind) -> Result<()> {
        match self.next() {
            Some(token) if &token.kind == kind => Ok(()),
            Some(token) => Err(self.error_at(
                token.line,
                format!(
                    "expected {}, found {}",
                    kind.describe(),
                    token.kind.describe()
                ),
            )),
            None => Err(self.error_at_end(&format!("expected {}", kind.describe()))),
        }
    }

    fn error_at(&self, line: usize, details: String) -> anyhow::Error {
        SbomError::QueryParse { line, details }.into()
    }

    fn error_at_end(&self, details: &str) -> anyhow::Error {
        let line = self.tokens.last().map(|t| t.line).unwrap_or(1);
        SbomError::QueryParse {
            line,
            details: format!("{} but the output ended", details),
        }
        .into()
    }
}
