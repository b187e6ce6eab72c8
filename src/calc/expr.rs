// src/calc/expr.rs
//
// Arithmetic over a closed grammar; nothing is ever executed as code.
//
//   expr    := term (('+' | '-') term)*
//   term    := factor (('*' | '/') factor)*
//   factor  := ('+' | '-') factor | primary
//   primary := number | '(' expr ')'
//
// Numbers are decimal: "12", "3.5", ".5", "3.".

use thiserror::Error;

use super::{CalcError, divide};

const MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ExprError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("malformed number '{text}' at {pos}")]
    BadNumber { text: String, pos: usize },

    #[error("unexpected '{found}' at {pos}")]
    UnexpectedToken { found: String, pos: usize },

    #[error("unexpected end of expression")]
    UnexpectedEnd,

    #[error("expression nested too deeply")]
    TooDeep,

    #[error("result out of range")]
    OutOfRange,

    #[error(transparent)]
    Calc(#[from] CalcError),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    Num(f64),
    Plus,
    Minus,
    Star,
    Slash,
    LParen,
    RParen,
}

impl Token {
    fn text(&self) -> String {
        match self {
            Token::Num(n) => format!("{n}"),
            Token::Plus => s!("+"),
            Token::Minus => s!("-"),
            Token::Star => s!("*"),
            Token::Slash => s!("/"),
            Token::LParen => s!("("),
            Token::RParen => s!(")"),
        }
    }
}

/// Split `src` into (byte offset, token) pairs. Whitespace is skipped.
pub fn tokenize(src: &str) -> Result<Vec<(usize, Token)>, ExprError> {
    let mut out = Vec::new();
    let b = src.as_bytes();
    let mut i = 0;

    while i < b.len() {
        let c = b[i];
        let tok = match c {
            b' ' | b'\t' | b'\r' | b'\n' => { i += 1; continue; }
            b'+' => Token::Plus,
            b'-' => Token::Minus,
            b'*' => Token::Star,
            b'/' => Token::Slash,
            b'(' => Token::LParen,
            b')' => Token::RParen,
            b'0'..=b'9' | b'.' => {
                let start = i;
                while i < b.len() && (b[i].is_ascii_digit() || b[i] == b'.') { i += 1; }
                let text = &src[start..i];
                let dots = text.bytes().filter(|&c| c == b'.').count();
                if dots > 1 || text == "." {
                    return Err(ExprError::BadNumber { text: s!(text), pos: start });
                }
                let n: f64 = text
                    .parse()
                    .map_err(|_| ExprError::BadNumber { text: s!(text), pos: start })?;
                out.push((start, Token::Num(n)));
                continue;
            }
            _ => {
                let ch = src[i..].chars().next().unwrap_or('?');
                return Err(ExprError::UnexpectedChar { ch, pos: i });
            }
        };
        out.push((i, tok));
        i += 1;
    }

    Ok(out)
}

struct Parser {
    tokens: Vec<(usize, Token)>,
    at: usize,
    depth: usize,
}

impl Parser {
    fn peek(&self) -> Option<Token> {
        self.tokens.get(self.at).map(|(_, t)| *t)
    }

    fn bump(&mut self) -> Option<(usize, Token)> {
        let t = self.tokens.get(self.at).copied();
        if t.is_some() { self.at += 1; }
        t
    }

    fn expr(&mut self) -> Result<f64, ExprError> {
        let mut acc = self.term()?;
        while let Some(t @ (Token::Plus | Token::Minus)) = self.peek() {
            self.at += 1;
            let rhs = self.term()?;
            acc = if t == Token::Plus { acc + rhs } else { acc - rhs };
        }
        Ok(acc)
    }

    fn term(&mut self) -> Result<f64, ExprError> {
        let mut acc = self.factor()?;
        while let Some(t @ (Token::Star | Token::Slash)) = self.peek() {
            self.at += 1;
            let rhs = self.factor()?;
            acc = if t == Token::Star { acc * rhs } else { divide(acc, rhs)? };
        }
        Ok(acc)
    }

    fn factor(&mut self) -> Result<f64, ExprError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(ExprError::TooDeep);
        }
        let v = match self.peek() {
            Some(Token::Minus) => { self.at += 1; -self.factor()? }
            Some(Token::Plus) => { self.at += 1; self.factor()? }
            _ => self.primary()?,
        };
        self.depth -= 1;
        Ok(v)
    }

    fn primary(&mut self) -> Result<f64, ExprError> {
        match self.bump() {
            Some((_, Token::Num(n))) => Ok(n),
            Some((_, Token::LParen)) => {
                let v = self.expr()?;
                match self.bump() {
                    Some((_, Token::RParen)) => Ok(v),
                    Some((pos, t)) => Err(ExprError::UnexpectedToken { found: t.text(), pos }),
                    None => Err(ExprError::UnexpectedEnd),
                }
            }
            Some((pos, t)) => Err(ExprError::UnexpectedToken { found: t.text(), pos }),
            None => Err(ExprError::UnexpectedEnd),
        }
    }
}

/// Evaluate `src` to a finite number.
pub fn evaluate(src: &str) -> Result<f64, ExprError> {
    let tokens = tokenize(src)?;
    if tokens.is_empty() {
        return Err(ExprError::Empty);
    }

    let mut p = Parser { tokens, at: 0, depth: 0 };
    let v = p.expr()?;

    if let Some((pos, t)) = p.bump() {
        return Err(ExprError::UnexpectedToken { found: t.text(), pos });
    }
    if !v.is_finite() {
        return Err(ExprError::OutOfRange);
    }
    Ok(v)
}

/// Shortest display form: "5", "3.5", never "-0".
pub fn format_number(v: f64) -> String {
    format!("{}", v + 0.0)
}
