use crate::error::ParseError;
use crate::types::KeyValues;

/// Parse a block of `key: value` lines into a map.
///
/// Blank lines are skipped. Each remaining line is split on its first colon,
/// so values may contain further colons (`url: http://example.com`). Keys are
/// trimmed and lowercased, values trimmed; a repeated key keeps its last value.
pub fn parse_block(text: &str) -> Result<KeyValues, ParseError> {
    parse_block_at(text, 1)
}

/// Like [`parse_block`], but reports errors relative to `first_line`, the
/// 1-based line number of the block's first line in the enclosing document.
pub fn parse_block_at(text: &str, first_line: usize) -> Result<KeyValues, ParseError> {
    let mut values = KeyValues::new();

    for (offset, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            return Err(ParseError::MalformedBlock {
                line: first_line + offset,
                text: line.to_string(),
            });
        };

        values.insert(key.trim().to_lowercase(), value.trim().to_string());
    }

    Ok(values)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn empty_and_blank_blocks() {
        assert!(parse_block("").unwrap().is_empty());
        assert!(parse_block("\n   \n\t\n").unwrap().is_empty());
    }

    #[test]
    fn keys_lowercased_and_trimmed() {
        let values = parse_block("  Title :  My Tutorial  \nAUTHOR:Jane\n").unwrap();
        assert_eq!(
            values,
            KeyValues::from([
                ("title".to_string(), "My Tutorial".to_string()),
                ("author".to_string(), "Jane".to_string()),
            ])
        );
    }

    #[test]
    fn value_keeps_later_colons() {
        let values = parse_block("url: http://example.com:8080/path").unwrap();
        assert_eq!(values["url"], "http://example.com:8080/path");
    }

    #[test]
    fn empty_value_allowed() {
        let values = parse_block("draft:").unwrap();
        assert_eq!(values["draft"], "");
    }

    #[test]
    fn last_duplicate_wins() {
        let values = parse_block("name: one\nName: two").unwrap();
        assert_eq!(values.len(), 1);
        assert_eq!(values["name"], "two");
    }

    #[test]
    fn missing_colon_is_error() {
        let err = parse_block("title: ok\n\nbad_line_no_colon\n").unwrap_err();
        assert_eq!(
            err,
            ParseError::MalformedBlock {
                line: 3,
                text: "bad_line_no_colon".into(),
            }
        );
    }

    #[test]
    fn error_line_is_offset() {
        let err = parse_block_at("oops", 7).unwrap_err();
        assert!(matches!(err, ParseError::MalformedBlock { line: 7, .. }));
    }
}
