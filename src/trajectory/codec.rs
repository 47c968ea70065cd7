//! Text encoding of a single agent's path
//!
//! Paths are stored as a bracketed list of `(row, col)` pairs, e.g.
//! `[(0, 1), (1, 2)]`. Parsing is a small hand-written recursive descent over
//! the bytes: only non-negative integers, parentheses, brackets, commas and
//! whitespace are accepted, and anything else is reported with its byte offset.

use std::fmt::Write;

use crate::{Error, Result, grid::Coordinate};

/// Render a path as `[(r, c), (r, c), ...]`
pub fn encode_path<I>(path: I) -> String
where
    I: IntoIterator<Item = Coordinate>,
{
    let mut out = String::from("[");
    for (i, coordinate) in path.into_iter().enumerate() {
        if i > 0 {
            out.push_str(", ");
        }
        // Writing into a String cannot fail.
        let _ = write!(out, "({}, {})", coordinate.row, coordinate.col);
    }
    out.push(']');
    out
}

/// Parse the text produced by [`encode_path`].
///
/// Pairs may be written as tuples `(r, c)` or lists `[r, c]`, and a trailing
/// comma is tolerated in either position.
///
/// # Examples
///
/// ```
/// use gridcollide::{grid::Coordinate, trajectory::parse_path};
///
/// let path = parse_path("[(0, 1), (1, 2)]")?;
/// assert_eq!(path, vec![Coordinate::new(0, 1), Coordinate::new(1, 2)]);
/// # Ok::<(), gridcollide::Error>(())
/// ```
pub fn parse_path(text: &str) -> Result<Vec<Coordinate>> {
    let mut parser = PathParser::new(text);
    let path = parser.path()?;
    parser.skip_whitespace();
    if let Some(byte) = parser.peek() {
        return Err(parser.error(format!("unexpected trailing '{}'", byte as char)));
    }
    Ok(path)
}

struct PathParser<'a> {
    bytes: &'a [u8],
    position: usize,
}

impl<'a> PathParser<'a> {
    fn new(text: &'a str) -> Self {
        Self {
            bytes: text.as_bytes(),
            position: 0,
        }
    }

    fn path(&mut self) -> Result<Vec<Coordinate>> {
        self.skip_whitespace();
        self.expect(b'[')?;

        let mut path = Vec::new();
        loop {
            self.skip_whitespace();
            if self.eat(b']') {
                return Ok(path);
            }
            path.push(self.pair()?);

            self.skip_whitespace();
            if self.eat(b',') {
                continue;
            }
            self.expect(b']')?;
            return Ok(path);
        }
    }

    fn pair(&mut self) -> Result<Coordinate> {
        let close = match self.peek() {
            Some(b'(') => b')',
            Some(b'[') => b']',
            Some(other) => {
                return Err(self.error(format!(
                    "expected '(' or '[' to open a pair, found '{}'",
                    other as char
                )));
            }
            None => return Err(self.error("expected a pair, found end of input".to_string())),
        };
        self.position += 1;

        self.skip_whitespace();
        let row = self.integer()?;
        self.skip_whitespace();
        self.expect(b',')?;
        self.skip_whitespace();
        let col = self.integer()?;
        self.skip_whitespace();
        if self.eat(b',') {
            self.skip_whitespace();
        }
        self.expect(close)?;

        Ok(Coordinate::new(row, col))
    }

    fn integer(&mut self) -> Result<usize> {
        let start = self.position;
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.position += 1;
        }
        if start == self.position {
            return Err(self.error("expected a non-negative integer".to_string()));
        }

        let digits = std::str::from_utf8(&self.bytes[start..self.position])
            .map_err(|e| self.error(e.to_string()))?;
        digits.parse::<usize>().map_err(|_| Error::ParseTrajectory {
            position: start,
            reason: format!("integer '{digits}' is out of range"),
        })
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(byte) if byte.is_ascii_whitespace()) {
            self.position += 1;
        }
    }

    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.position).copied()
    }

    fn eat(&mut self, expected: u8) -> bool {
        if self.peek() == Some(expected) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    fn expect(&mut self, expected: u8) -> Result<()> {
        if self.eat(expected) {
            return Ok(());
        }
        let found = match self.peek() {
            Some(byte) => format!("'{}'", byte as char),
            None => "end of input".to_string(),
        };
        Err(self.error(format!("expected '{}', found {found}", expected as char)))
    }

    fn error(&self, reason: String) -> Error {
        Error::ParseTrajectory {
            position: self.position,
            reason,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn c(row: usize, col: usize) -> Coordinate {
        Coordinate::new(row, col)
    }

    #[test]
    fn encodes_like_a_list_of_tuples() {
        assert_eq!(encode_path([c(0, 1), c(12, 3)]), "[(0, 1), (12, 3)]");
        assert_eq!(encode_path(Vec::new()), "[]");
    }

    #[test]
    fn parses_encoded_text_exactly() {
        let path = vec![c(0, 0), c(9, 9), c(4, 10), c(123, 7)];
        assert_eq!(parse_path(&encode_path(path.clone())).unwrap(), path);
    }

    #[test]
    fn accepts_lists_and_loose_spacing() {
        let parsed = parse_path("  [ [1,2] ,( 3 , 4 ,) , ]  ").unwrap();
        assert_eq!(parsed, vec![c(1, 2), c(3, 4)]);
        assert!(parse_path("[]").unwrap().is_empty());
    }

    #[test]
    fn rejects_code_and_garbage() {
        for text in [
            "__import__('os').system('true')",
            "[(1, 2)] + [(3, 4)]",
            "[(1, -2)]",
            "[(1, 2.5)]",
            "[(1, 2]",
            "[(1, 2), (3 4)]",
            "[(1, 2)",
            "",
        ] {
            assert!(
                matches!(parse_path(text), Err(Error::ParseTrajectory { .. })),
                "accepted {text:?}"
            );
        }
    }

    #[test]
    fn reports_byte_position() {
        match parse_path("[(1, x)]") {
            Err(Error::ParseTrajectory { position, .. }) => assert_eq!(position, 5),
            other => panic!("unexpected result: {other:?}"),
        }
    }

    #[test]
    fn rejects_integer_overflow() {
        let text = format!("[(1, {}0)]", usize::MAX);
        assert!(matches!(
            parse_path(&text),
            Err(Error::ParseTrajectory { position: 5, .. })
        ));
    }
}
