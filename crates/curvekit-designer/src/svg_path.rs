//! SVG path data for the edited curve.
//!
//! Writes a [`Path`] as the absolute `M`/`L`/`Q`/`C` subset of the SVG path
//! mini-language and reads that subset back. Every coordinate is joined to the
//! next with a comma and commands follow one another with no separator:
//!
//! ```text
//! M100,100L200,100Q200,300,300,300
//! ```

use std::fmt::Write;

use curvekit_core::PathError;

use crate::model::{NodeKind, Path, PathNode, Point};

/// Serializes `path` to SVG path data, one command per node.
///
/// Fails when the first node is not a move, since there is no current point
/// to draw the first segment from.
pub fn serialize(path: &Path) -> Result<String, PathError> {
    path.validate()?;

    let mut d = String::with_capacity(path.len() * 16);
    let mut previous = Point::default();
    for node in path {
        write_node(&mut d, node, previous);
        previous = node.anchor;
    }
    Ok(d)
}

/// Writes one command. `previous` stands in for a missing first cubic control.
fn write_node(d: &mut String, node: &PathNode, previous: Point) {
    d.push(node.kind.command());
    match node.kind {
        NodeKind::Move | NodeKind::Line => {}
        NodeKind::Quadratic { cp } => {
            write_point(d, cp);
            d.push(',');
        }
        NodeKind::Cubic { cp1, cp2 } => {
            write_point(d, cp1.unwrap_or(previous));
            d.push(',');
            write_point(d, cp2);
            d.push(',');
        }
    }
    write_point(d, node.anchor);
}

fn write_point(d: &mut String, p: Point) {
    // Writing into a String cannot fail.
    let _ = write!(d, "{},{}", p.x, p.y);
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Token {
    Command(char),
    Number(f64),
}

/// Splits path data into commands and numbers, each with its byte offset.
///
/// Commas and whitespace separate numbers; a sign also starts a new number
/// unless it follows an exponent marker (`1e-5`).
fn tokenize(data: &str) -> Result<Vec<(usize, Token)>, PathError> {
    let mut tokens = Vec::new();
    let mut number_start: Option<usize> = None;
    let mut prev: Option<char> = None;

    let flush = |start: &mut Option<usize>,
                 end: usize,
                 tokens: &mut Vec<(usize, Token)>|
     -> Result<(), PathError> {
        if let Some(begin) = start.take() {
            let text = &data[begin..end];
            let value = text
                .parse::<f64>()
                .map_err(|_| PathError::parse(begin, format!("invalid number '{}'", text)))?;
            tokens.push((begin, Token::Number(value)));
        }
        Ok(())
    };

    for (pos, ch) in data.char_indices() {
        match ch {
            ',' => flush(&mut number_start, pos, &mut tokens)?,
            c if c.is_whitespace() => flush(&mut number_start, pos, &mut tokens)?,
            '+' | '-' => {
                let in_exponent = matches!(prev, Some('e') | Some('E')) && number_start.is_some();
                if !in_exponent {
                    flush(&mut number_start, pos, &mut tokens)?;
                    number_start = Some(pos);
                }
            }
            'e' | 'E' if number_start.is_some() => {}
            c if c.is_ascii_digit() || c == '.' => {
                if number_start.is_none() {
                    number_start = Some(pos);
                }
            }
            c if c.is_ascii_alphabetic() => {
                flush(&mut number_start, pos, &mut tokens)?;
                tokens.push((pos, Token::Command(c)));
            }
            other => {
                return Err(PathError::parse(pos, format!("unexpected character '{}'", other)));
            }
        }
        prev = Some(ch);
    }
    flush(&mut number_start, data.len(), &mut tokens)?;

    Ok(tokens)
}

/// Parses the absolute `M`/`L`/`Q`/`C` subset back into nodes.
///
/// Extra coordinate groups after a command repeat it, except after `M` where
/// they are lines, as in SVG. Anything outside the subset is rejected.
pub fn parse(data: &str) -> Result<Vec<PathNode>, PathError> {
    let tokens = tokenize(data)?;
    let mut nodes = Vec::new();
    let mut i = 0usize;

    while i < tokens.len() {
        let (pos, token) = tokens[i];
        let cmd = match token {
            Token::Command(c) => c,
            Token::Number(_) => {
                return Err(PathError::parse(pos, "expected a command letter"));
            }
        };
        i += 1;

        if nodes.is_empty() && cmd != 'M' {
            return Err(PathError::parse(pos, "path data must start with 'M'"));
        }

        let arity = match cmd {
            'M' | 'L' => 2,
            'Q' => 4,
            'C' => 6,
            other => {
                return Err(PathError::parse(pos, format!("unsupported command '{}'", other)));
            }
        };

        let mut groups = 0usize;
        loop {
            let mut values = [0.0f64; 6];
            let mut taken = 0usize;
            while taken < arity {
                match tokens.get(i) {
                    Some((_, Token::Number(v))) => {
                        values[taken] = *v;
                        taken += 1;
                        i += 1;
                    }
                    Some((at, Token::Command(_))) if taken > 0 || groups == 0 => {
                        return Err(PathError::parse(
                            *at,
                            format!("'{}' needs {} numbers, found {}", cmd, arity, taken),
                        ));
                    }
                    None if taken > 0 || groups == 0 => {
                        return Err(PathError::parse(
                            data.len(),
                            format!("'{}' needs {} numbers, found {}", cmd, arity, taken),
                        ));
                    }
                    _ => break,
                }
            }
            if taken < arity {
                break;
            }

            let node = match (cmd, groups) {
                ('M', 0) => PathNode::move_to(Point::new(values[0], values[1])),
                ('M', _) | ('L', _) => PathNode::line_to(Point::new(values[0], values[1])),
                ('Q', _) => PathNode::quad_to(
                    Point::new(values[0], values[1]),
                    Point::new(values[2], values[3]),
                ),
                _ => PathNode::cubic_to(
                    Point::new(values[0], values[1]),
                    Point::new(values[2], values[3]),
                    Point::new(values[4], values[5]),
                ),
            };
            nodes.push(node);
            groups += 1;
        }
    }

    if nodes.is_empty() {
        return Err(PathError::Empty);
    }
    Ok(nodes)
}
