// ABOUTME: Presentation splitting for the mdslides application
// ABOUTME: Cuts the document into slides and wraps each in its container div

use crate::block::render_slide;
use crate::errors::Result;
use log::debug;
use std::io::Write;

/// Literal delimiter separating slides in the source document.
const SLIDE_DELIMITER: &str = "\n---\n";

/// Lazy iterator over the slide texts of a document.
///
/// Each item borrows from the input; the delimiter itself belongs to no
/// slide. An empty document yields no slides, and text after the last
/// delimiter is the final slide.
pub struct Slides<'a> {
    rest: &'a str,
}

impl<'a> Slides<'a> {
    pub fn new(document: &'a str) -> Self {
        Slides { rest: document }
    }
}

impl<'a> Iterator for Slides<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.rest.is_empty() {
            return None;
        }
        match self.rest.find(SLIDE_DELIMITER) {
            Some(at) => {
                let slide = &self.rest[..at];
                self.rest = &self.rest[at + SLIDE_DELIMITER.len()..];
                Some(slide)
            }
            None => Some(std::mem::take(&mut self.rest)),
        }
    }
}

/// Render a whole document to `out`, one container div per slide, numbered
/// from 1 in document order.
pub fn render_presentation<W: Write>(document: &str, out: &mut W) -> Result<()> {
    for (index, slide) in Slides::new(document).enumerate() {
        let number = index + 1;
        debug!("Rendering slide {}", number);
        writeln!(out, "<div class=\"slide\" id=\"slide{}\">", number)?;
        render_slide(slide, out)?;
        out.write_all(b"</div>\n")?;
    }
    Ok(())
}

/// Convenience wrapper rendering the whole document into a `String`.
pub fn render_to_string(document: &str) -> Result<String> {
    let mut buf = Vec::new();
    render_presentation(document, &mut buf)?;
    // The renderer only writes fixed tags and char-boundary slices of the
    // input, so the buffer is always valid UTF-8.
    Ok(String::from_utf8(buf).expect("rendered HTML is valid UTF-8"))
}
