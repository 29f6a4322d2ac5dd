use crate::block::parse_block_at;
use crate::error::ParseError;
use crate::markup::{CommonMark, MarkupRenderer};
use crate::steps::parse_steps;
use crate::types::Document;

/// A line consisting solely of this marker opens or closes the front matter.
pub const FRONT_MATTER_DELIMITER: &str = "---";

/// Parse a tutorial, rendering step bodies with the default [`CommonMark`]
/// renderer.
pub fn parse(input: &str) -> Result<Document, ParseError> {
    parse_with(input, &CommonMark::default())
}

/// Parse a tutorial, rendering step bodies with `renderer`.
///
/// Fails on the first malformed construct; no partial document is returned.
pub fn parse_with<R: MarkupRenderer + ?Sized>(
    input: &str,
    renderer: &R,
) -> Result<Document, ParseError> {
    // Normalise CRLF → LF and drop a leading byte-order mark.
    let normalised = input.replace("\r\n", "\n");
    let source = normalised.strip_prefix('\u{feff}').unwrap_or(&normalised);
    let sections = split_sections(source)?;

    let front_matter = parse_block_at(sections.front_matter, sections.front_matter_line)?;
    let steps = parse_steps(sections.steps, sections.steps_line, renderer)?;

    Ok(Document {
        front_matter,
        steps,
    })
}

// ------------------------------------------------------------------
// Section splitting
// ------------------------------------------------------------------

/// The two regions of a tutorial, with the 1-based line each starts on.
#[derive(Debug, PartialEq, Eq)]
struct Sections<'a> {
    front_matter: &'a str,
    front_matter_line: usize,
    steps: &'a str,
    steps_line: usize,
}

/// Split on the first two `---` lines. Anything before the opening line is
/// ignored; later `---` lines belong to the steps section.
fn split_sections(source: &str) -> Result<Sections<'_>, ParseError> {
    // (byte offset of line start, byte offset after line end, 1-based line)
    let mut delimiters: Vec<(usize, usize, usize)> = Vec::with_capacity(2);
    let mut offset = 0;

    for (idx, line) in source.split_inclusive('\n').enumerate() {
        let end = offset + line.len();
        if line.trim() == FRONT_MATTER_DELIMITER {
            delimiters.push((offset, end, idx + 1));
            if delimiters.len() == 2 {
                break;
            }
        }
        offset = end;
    }

    let &[(_, open_end, open_line), (close_start, close_end, close_line)] = delimiters.as_slice()
    else {
        return Err(ParseError::MalformedDocument {
            delimiters_found: delimiters.len(),
        });
    };

    Ok(Sections {
        front_matter: &source[open_end..close_start],
        front_matter_line: open_line + 1,
        steps: &source[close_end..],
        steps_line: close_line + 1,
    })
}
