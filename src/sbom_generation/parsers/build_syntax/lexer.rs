use crate::shared::error::SbomError;
use crate::shared::Result;

/// A single token from the BUILD-syntax query output
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub line: usize,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TokenKind {
    Ident(String),
    Str(String),
    Int(i64),
    LParen,
    RParen,
    LBracket,
    RBracket,
    LBrace,
    RBrace,
    Comma,
    Equals,
    Colon,
}

impl TokenKind {
    /// Human-readable token description for parse error messages
    pub fn describe(&self) -> String {
        match self {
            TokenKind::Ident(name) => format!("identifier '{}'", name),
            TokenKind::Str(_) => "string literal".to_string(),
            TokenKind::Int(value) => format!("integer '{}'", value),
            TokenKind::LParen => "'('".to_string(),
            TokenKind::RParen => "')'".to_string(),
            TokenKind::LBracket => "'['".to_string(),
            TokenKind::RBracket => "']'".to_string(),
            TokenKind::LBrace => "'{'".to_string(),
            TokenKind::RBrace => "'}'".to_string(),
            TokenKind::Comma => "','".to_string(),
            TokenKind::Equals => "'='".to_string(),
            TokenKind::Colon => "':'".to_string(),
        }
    }
}

/// Tokenizes the output of `bazel query --output=build`.
///
/// The output is Starlark-shaped but restricted: identifiers, string and
/// integer literals, and the punctuation of calls, lists, and dicts.
/// Comment lines (source location markers emitted by the query) are
/// skipped. Anything outside this token set is a fatal lex error.
pub fn tokenize(input: &str) -> Result<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut chars = input.chars().peekable();
    let mut line = 1usize;

    while let Some(&c) = chars.peek() {
        match c {
            '\n' => {
                line += 1;
                chars.next();
            }
            c if c.is_whitespace() => {
                chars.next();
            }
            '#' => {
                // Comment runs to end of line
                for c in chars.by_ref() {
                    if c == '\n' {
                        line += 1;
                        break;
                    }
                }
            }
            '(' => push_symbol(&mut tokens, &mut chars, TokenKind::LParen, line),
            ')' => push_symbol(&mut tokens, &mut chars, TokenKind::RParen, line),
            '[' => push_symbol(&mut tokens, &mut chars, TokenKind::LBracket, line),
            ']' => push_symbol(&mut tokens, &mut chars, TokenKind::RBracket, line),
            '{' => push_symbol(&mut tokens, &mut chars, TokenKind::LBrace, line),
            '}' => push_symbol(&mut tokens, &mut chars, TokenKind::RBrace, line),
            ',' => push_symbol(&mut tokens, &mut chars, TokenKind::Comma, line),
            '=' => push_symbol(&mut tokens, &mut chars, TokenKind::Equals, line),
            ':' => push_symbol(&mut tokens, &mut chars, TokenKind::Colon, line),
            '"' | '\'' => {
                let text = lex_string(&mut chars, &mut line)?;
                tokens.push(Token {
                    kind: TokenKind::Str(text),
                    line,
                });
            }
            '-' => {
                chars.next();
                match chars.peek() {
                    Some(d) if d.is_ascii_digit() => {
                        let value = lex_int(&mut chars, line)?;
                        tokens.push(Token {
                            kind: TokenKind::Int(-value),
                            line,
                        });
                    }
                    _ => {
                        return Err(SbomError::QueryParse {
                            line,
                            details: "unexpected character '-'".to_string(),
                        }
                        .into())
                    }
                }
            }
            c if c.is_ascii_digit() => {
                let value = lex_int(&mut chars, line)?;
                tokens.push(Token {
                    kind: TokenKind::Int(value),
                    line,
                });
            }
            c if c.is_alphabetic() || c == '_' => {
                let mut name = String::new();
                while let Some(&c) = chars.peek() {
                    if c.is_alphanumeric() || c == '_' {
                        name.push(c);
                        chars.next();
                    } else {
                        break;
                    }
                }
                tokens.push(Token {
                    kind: TokenKind::Ident(name),
                    line,
                });
            }
            other => {
                return Err(SbomError::QueryParse {
                    line,
                    details: format!("unexpected character '{}'", other),
                }
                .into())
            }
        }
    }

    Ok(tokens)
}

fn push_symbol(
    tokens: &mut Vec<Token>,
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    kind: TokenKind,
    line: usize,
) {
    chars.next();
    tokens.push(Token { kind, line });
}

fn lex_int(chars: &mut std::iter::Peekable<std::str::Chars<'_>>, line: usize) -> Result<i64> {
    let mut digits = String::new();
    while let Some(&c) = chars.peek() {
        if c.is_ascii_digit() {
            digits.push(c);
            chars.next();
        } else {
            break;
        }
    }
    digits.parse::<i64>().map_err(|e| {
        SbomError::QueryParse {
            line,
            details: format!("invalid integer literal '{}': {}", digits, e),
        }
        .into()
    })
}

fn lex_string(
    chars: &mut std::iter::Peekable<std::str::Chars<'_>>,
    line: &mut usize,
) -> Result<String> {
    let quote = chars.next().unwrap_or('"');
    let start_line = *line;
    let mut text = String::new();

    loop {
        match chars.next() {
            Some(c) if c == quote => return Ok(text),
            Some('\\') => match chars.next() {
                Some('n') => text.push('\n'),
                Some('t') => text.push('\t'),
                Some('r') => text.push('\r'),
                Some('0') => text.push('\0'),
                Some('\\') => text.push('\\'),
                Some('\'') => text.push('\''),
                Some('"') => text.push('"'),
                // Unknown escapes are carried through verbatim
                Some(other) => {
                    text.push('\\');
                    text.push(other);
                }
                None => {
                    return Err(SbomError::QueryParse {
                        line: start_line,
                        details: "unterminated string literal".to_string(),
                    }
                    .into())
                }
            },
            Some('\n') => {
                return Err(SbomError::QueryParse {
                    line: start_line,
                    details: "unterminated string literal".to_string(),
                }
                .into())
            }
            Some(c) => text.push(c),
            None => {
                return Err(SbomError::QueryParse {
                    line: start_line,
                    details: "unterminated string literal".to_string(),
                }
                .into())
            }
        }
    }
}
