//! Positional message templates for text only known at runtime (CLI, shell, config).
//!
//! `{0}`, `{1}` … select arguments by index; `{}` takes the next argument in
//! order. `{{` and `}}` produce literal braces. Compile-time messages should use
//! `format_args!` through the gate macros instead.

use std::fmt::{self, Display, Write as _};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Piece {
    Literal(String),
    Arg(usize),
}

/// Parsed template. Parsing and rendering both report problems as [`crate::Error::Format`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MessageTemplate {
    pieces: Vec<Piece>,
}

impl MessageTemplate {
    /// # Errors
    /// Unclosed `{`, stray `}`, or a non-numeric index.
    pub fn parse(template: &str) -> Result<Self, crate::Error> {
        let mut pieces = Vec::new();
        let mut literal = String::new();
        let mut next_auto = 0;
        let mut chars = template.char_indices().peekable();

        while let Some((pos, c)) = chars.next() {
            match c {
                '{' if chars.peek().is_some_and(|&(_, n)| n == '{') => {
                    chars.next();
                    literal.push('{');
                }
                '}' if chars.peek().is_some_and(|&(_, n)| n == '}') => {
                    chars.next();
                    literal.push('}');
                }
                '{' => {
                    let mut index = String::new();
                    let mut closed = false;
                    for (_, d) in chars.by_ref() {
                        if d == '}' {
                            closed = true;
                            break;
                        }
                        index.push(d);
                    }
                    if !closed {
                        return Err(crate::Error::Format(format!(
                            "unclosed '{{' at position {pos}"
                        )));
                    }
                    let index = index.trim();
                    let arg = if index.is_empty() {
                        next_auto += 1;
                        next_auto - 1
                    } else {
                        index.parse::<usize>().map_err(|_| {
                            crate::Error::Format(format!(
                                "invalid argument index '{index}' at position {pos}"
                            ))
                        })?
                    };
                    if !literal.is_empty() {
                        pieces.push(Piece::Literal(std::mem::take(&mut literal)));
                    }
                    pieces.push(Piece::Arg(arg));
                }
                '}' => {
                    return Err(crate::Error::Format(format!(
                        "unmatched '}}' at position {pos}"
                    )));
                }
                _ => literal.push(c),
            }
        }

        if !literal.is_empty() {
            pieces.push(Piece::Literal(literal));
        }

        Ok(Self { pieces })
    }

    /// Number of arguments the template needs (highest index + 1).
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.pieces
            .iter()
            .filter_map(|p| match p {
                Piece::Arg(i) => Some(i + 1),
                Piece::Literal(_) => None,
            })
            .max()
            .unwrap_or(0)
    }

    /// Extra arguments are ignored.
    ///
    /// # Errors
    /// An index with no matching argument.
    pub fn render(&self, args: &[&dyn Display]) -> Result<String, crate::Error> {
        let mut out = String::new();
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => out.push_str(s),
                Piece::Arg(i) => {
                    let arg = args.get(*i).ok_or_else(|| {
                        crate::Error::Format(format!(
                            "argument {i} requested but only {} given",
                            args.len()
                        ))
                    })?;
                    write!(out, "{arg}").map_err(|e| crate::Error::Format(e.to_string()))?;
                }
            }
        }
        Ok(out)
    }
}

impl fmt::Display for MessageTemplate {
    /// Re-serializes the template with explicit indices.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for piece in &self.pieces {
            match piece {
                Piece::Literal(s) => f.write_str(&s.replace('{', "{{").replace('}', "}}"))?,
                Piece::Arg(i) => write!(f, "{{{i}}}")?,
            }
        }
        Ok(())
    }
}

/// Parses and renders in one step.
///
/// # Errors
/// See [`MessageTemplate::parse`] and [`MessageTemplate::render`].
pub fn format(template: &str, args: &[&dyn Display]) -> Result<String, crate::Error> {
    MessageTemplate::parse(template)?.render(args)
}
