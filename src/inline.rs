// ABOUTME: Inline span rendering for the mdslides application
// ABOUTME: Expands emphasis, links, inline code and escapes within a single line

use crate::errors::{MarkupError, Result};
use std::io::Write;

/// Emphasis strength currently open while scanning a line.
///
/// Selected by the length of a run of consecutive asterisks. Runs of four or
/// more never reach this type; they are rejected as a validation failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Emphasis {
    None,
    Italic,
    Bold,
    BoldItalic,
}

impl Emphasis {
    fn from_run(len: usize) -> Option<Self> {
        match len {
            1 => Some(Emphasis::Italic),
            2 => Some(Emphasis::Bold),
            3 => Some(Emphasis::BoldItalic),
            _ => None,
        }
    }

    fn opening_tags(self) -> &'static str {
        match self {
            Emphasis::None => "",
            Emphasis::Italic => "<i>",
            Emphasis::Bold => "<b>",
            Emphasis::BoldItalic => "<b><i>",
        }
    }

    /// Closing tags in reverse nesting order.
    fn closing_tags(self) -> &'static str {
        match self {
            Emphasis::None => "",
            Emphasis::Italic => "</i>",
            Emphasis::Bold => "</b>",
            Emphasis::BoldItalic => "</i></b>",
        }
    }
}

/// Scan forward from `from` for the next occurrence of `delim`, returning its
/// byte index, or `None` if the delimiter does not occur before line end.
fn scan_until(line: &str, from: usize, delim: char) -> Option<usize> {
    line[from..].find(delim).map(|pos| from + pos)
}

/// Render one trimmed line of slide text, expanding inline markup into `out`.
///
/// Scans left to right, applying the first matching rule at each position:
/// an asterisk run toggles emphasis, `[` starts a link, a backtick starts a
/// verbatim code span, and a backslash passes the next character through
/// untouched. On success exactly one trailing space is written, the separator
/// between consecutive rendered lines (this renderer never emits line breaks).
pub fn render_inline<W: Write>(line: &str, out: &mut W) -> Result<()> {
    let bytes = line.as_bytes();
    let mut open = Emphasis::None;
    let mut i = 0;

    while i < bytes.len() {
        match bytes[i] {
            b'*' => {
                let run_start = i;
                while i < bytes.len() && bytes[i] == b'*' {
                    i += 1;
                }
                let strength = Emphasis::from_run(i - run_start).ok_or_else(|| {
                    MarkupError::TooManyEmphasisMarkers {
                        line: line.to_string(),
                    }
                })?;
                if open == Emphasis::None {
                    out.write_all(strength.opening_tags().as_bytes())?;
                    open = strength;
                } else if open == strength {
                    out.write_all(strength.closing_tags().as_bytes())?;
                    open = Emphasis::None;
                } else {
                    return Err(MarkupError::MismatchedEmphasisClose {
                        line: line.to_string(),
                    });
                }
            }
            b'[' => {
                let text_end = scan_until(line, i + 1, ']').ok_or_else(|| {
                    MarkupError::UnterminatedLinkText {
                        line: line.to_string(),
                    }
                })?;
                let text = &line[i + 1..text_end];

                // The character after ']' is assumed to be '(' and skipped.
                let url_start = text_end + 2;
                if url_start >= line.len() || !line.is_char_boundary(url_start) {
                    return Err(MarkupError::MissingOrUnterminatedLinkUrl {
                        line: line.to_string(),
                    });
                }
                let url_end = scan_until(line, url_start, ')').ok_or_else(|| {
                    MarkupError::MissingOrUnterminatedLinkUrl {
                        line: line.to_string(),
                    }
                })?;
                write!(out, "<a href=\"{}\">{}</a>", &line[url_start..url_end], text)?;
                i = url_end + 1;
            }
            b'`' => {
                let end = scan_until(line, i + 1, '`').ok_or_else(|| {
                    MarkupError::UnterminatedInlineCode {
                        line: line.to_string(),
                    }
                })?;
                // Everything between the backticks is emitted verbatim.
                write!(out, "<code>{}</code>", &line[i + 1..end])?;
                i = end + 1;
            }
            b'\\' => {
                // The escaped character is emitted literally, whatever it is.
                // A trailing lone backslash escapes nothing and is dropped.
                if let Some(c) = line[i + 1..].chars().next() {
                    write!(out, "{}", c)?;
                    i += 1 + c.len_utf8();
                } else {
                    i += 1;
                }
            }
            _ => {
                let run_start = i;
                while i < bytes.len() && !matches!(bytes[i], b'*' | b'[' | b'`' | b'\\') {
                    i += 1;
                }
                out.write_all(&bytes[run_start..i])?;
            }
        }
    }

    if open != Emphasis::None {
        return Err(MarkupError::UnclosedEmphasis {
            line: line.to_string(),
        });
    }

    // Space between every rendered line.
    out.write_all(b" ")?;
    Ok(())
}
