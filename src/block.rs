// ABOUTME: Block-level rendering for the mdslides application
// ABOUTME: Classifies slide lines and maintains paragraph and list nesting state

use crate::errors::Result;
use crate::inline::render_inline;
use std::io::Write;

/// Marker opening and closing a fenced code block.
const FENCE: &str = "```";

/// What a single slide line is, decided in strict priority order.
#[derive(Debug, PartialEq, Eq)]
pub(crate) enum LineKind<'a> {
    Heading { level: usize, text: &'a str },
    ListItem { level: usize, text: &'a str },
    CodeFenceOpen { language: &'a str },
    Image { src: &'a str, alt: &'a str },
    Paragraph { text: &'a str },
    Blank,
}

/// Classify one raw line. First match wins: heading, list item, code fence,
/// image, then paragraph or blank.
pub(crate) fn classify(line: &str) -> LineKind<'_> {
    if line.starts_with('#') {
        let level = line.bytes().take_while(|&b| b == b'#').count();
        return LineKind::Heading {
            level,
            text: &line[level..],
        };
    }

    if line.trim_start().starts_with("- ") {
        // Two spaces of indentation per nesting level.
        let indent = line.len() - line.trim_start_matches(' ').len();
        let rest = &line[indent..];
        return LineKind::ListItem {
            level: indent / 2 + 1,
            text: rest.strip_prefix("- ").unwrap_or(rest),
        };
    }

    if let Some(language) = line.strip_prefix(FENCE) {
        return LineKind::CodeFenceOpen { language };
    }

    let trimmed = line.trim();
    if let Some(body) = trimmed.strip_prefix("![") {
        let (alt, src) = match body.find("](") {
            Some(split) => (&body[..split], &body[split + 2..]),
            None => (body, ""),
        };
        return LineKind::Image {
            alt,
            src: src.strip_suffix(')').unwrap_or(src),
        };
    }

    if trimmed.is_empty() {
        LineKind::Blank
    } else {
        LineKind::Paragraph { text: trimmed }
    }
}

/// Per-slide tag bookkeeping. Both fields start at zero/false and are forced
/// back to zero/false by the virtual trailing blank line in [`render_slide`].
#[derive(Debug, Default)]
struct BlockState {
    list_depth: usize,
    in_paragraph: bool,
}

impl BlockState {
    /// Close and open wrapper tags until the state matches this line's shape.
    /// Closings always run before openings.
    fn transition<W: Write>(&mut self, out: &mut W, list_level: usize, is_paragraph: bool) -> Result<()> {
        while self.list_depth > list_level {
            out.write_all(b"</ul>\n")?;
            self.list_depth -= 1;
        }
        if self.in_paragraph && !is_paragraph {
            out.write_all(b"</p>\n")?;
            self.in_paragraph = false;
        }
        if !self.in_paragraph && is_paragraph {
            out.write_all(b"<p>\n")?;
            self.in_paragraph = true;
        }
        while self.list_depth < list_level {
            out.write_all(b"<ul>\n")?;
            self.list_depth += 1;
        }
        Ok(())
    }
}

/// Render one slide's text to `out`.
///
/// Walks the slide line by line, classifying each and emitting the containing
/// block markup. Code fences consume subsequent lines verbatim; images and
/// blank lines skip inline rendering but still settle the paragraph and list
/// wrappers first.
pub fn render_slide<W: Write>(slide: &str, out: &mut W) -> Result<()> {
    let mut state = BlockState::default();
    let mut lines = slide.lines();

    while let Some(line) = lines.next() {
        match classify(line) {
            LineKind::Heading { level, text } => {
                state.transition(out, 0, false)?;
                writeln!(out, "<h{}>", level)?;
                render_inline(text.trim(), out)?;
                writeln!(out, "</h{}>", level)?;
            }
            LineKind::ListItem { level, text } => {
                state.transition(out, level, false)?;
                out.write_all(b"<li>\n")?;
                render_inline(text.trim(), out)?;
                out.write_all(b"</li>\n")?;
            }
            LineKind::CodeFenceOpen { language } => {
                state.transition(out, 0, false)?;
                write!(out, "<pre><code class=\"language-{}\">", language)?;
                // Verbatim until the closing fence. An unterminated fence
                // swallows the rest of the slide as code.
                for code_line in lines.by_ref() {
                    if code_line == FENCE {
                        break;
                    }
                    writeln!(out, "{}", code_line)?;
                }
                out.write_all(b"</code></pre>\n")?;
            }
            LineKind::Image { src, alt } => {
                state.transition(out, 0, false)?;
                writeln!(out, "<img src=\"{}\" alt=\"{}\">", src, alt)?;
            }
            LineKind::Paragraph { text } => {
                state.transition(out, 0, true)?;
                render_inline(text, out)?;
            }
            LineKind::Blank => {
                state.transition(out, 0, false)?;
            }
        }
    }

    // A slide need not end with a blank line; one extra virtual blank line
    // closes any paragraph or list wrappers still open.
    state.transition(out, 0, false)
}
