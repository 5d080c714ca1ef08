use tracing::debug;

use crate::models::Record;

/// Split one CSV line into fields.
///
/// Double quotes toggle quoting, `""` inside quotes is a literal quote, and a comma
/// only separates fields outside quotes. Unbalanced quotes are not an error: the
/// rest of the line is read as quoted. The last field is always emitted, so an
/// empty line yields a single empty field.
pub fn split_csv_line(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if in_quotes && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => in_quotes = !in_quotes,
            ',' if !in_quotes => fields.push(std::mem::take(&mut current)),
            _ => current.push(ch),
        }
    }

    fields.push(current);
    fields
}

/// Non-empty lines of `text`, split on `\n` with an optional preceding `\r`.
fn document_lines(text: &str) -> impl Iterator<Item = &str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .filter(|line| !line.is_empty())
}

/// Turn a CSV document into records keyed by trimmed, lowercased header names.
///
/// A leading byte order mark is ignored. Cells are zipped against the header by position: a short row leaves the
/// remaining keys with no value, extra cells are dropped.
pub fn csv_to_records(text: &str) -> Vec<Record> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = document_lines(text);

    let headers: Vec<String> = match lines.next() {
        Some(header) => split_csv_line(header)
            .iter()
            .map(|cell| cell.trim().to_lowercase())
            .collect(),
        None => return Vec::new(),
    };

    let records: Vec<Record> = lines
        .map(|line| -> Record {
            let mut cells = split_csv_line(line).into_iter();
            headers
                .iter()
                .map(|key| (key.clone(), cells.next()))
                .collect()
        })
        .collect();

    debug!("Parsed {} rows against {} header columns", records.len(), headers.len());
    records
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn fields(line: &str) -> Vec<String> {
        split_csv_line(line)
    }

    #[test]
    fn splits_unquoted_line_on_every_comma() {
        for line in ["a", "a,b", "a,,b", ",", "one, two ,three,four"] {
            let commas = line.matches(',').count();
            assert_eq!(fields(line).len(), commas + 1, "line {:?}", line);
        }
        assert_eq!(fields("one, two ,three"), vec!["one", " two ", "three"]);
    }

    #[test]
    fn decodes_quoted_commas_and_escaped_quotes() {
        assert_eq!(fields(r#""a,b","c""d",e"#), vec!["a,b", "c\"d", "e"]);
    }

    #[test]
    fn empty_line_is_one_empty_field() {
        assert_eq!(fields(""), vec![""]);
    }

    #[test]
    fn trailing_comma_emits_trailing_empty_field() {
        assert_eq!(fields("a,b,"), vec!["a", "b", ""]);
    }

    #[test]
    fn unclosed_quote_swallows_rest_of_line() {
        assert_eq!(fields(r#"x,"a,b,c"#), vec!["x", "a,b,c"]);
        assert_eq!(fields(r#""open, never closed"#), vec!["open, never closed"]);
    }

    #[test]
    fn quotes_mid_field_toggle_without_being_kept() {
        assert_eq!(fields(r#"ab"c,d"e,f"#), vec!["abc,de", "f"]);
    }

    #[test]
    fn maps_rows_against_lowercased_headers() {
        let records = csv_to_records("Name,Condition,Price\nLugia ex,nm,$40");

        let expected: Record = [
            ("name", Some("Lugia ex".to_string())),
            ("condition", Some("nm".to_string())),
            ("price", Some("$40".to_string())),
        ]
        .into_iter()
        .collect();
        assert_eq!(records, vec![expected]);
    }

    #[test]
    fn header_cells_are_trimmed() {
        let records = csv_to_records(" NAME , Img \r\nPikachu,pika.png\r\n");
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].get("name"), Some("Pikachu"));
        assert_eq!(records[0].get("img"), Some("pika.png"));
    }

    #[test]
    fn byte_order_mark_does_not_leak_into_first_header() {
        let records = csv_to_records("\u{feff}Name,Price\r\nPsyduck,$3\r\n");
        assert_eq!(records[0].get("name"), Some("Psyduck"));
        assert!(!records[0].contains_key("\u{feff}name"));
    }

    #[test]
    fn short_rows_leave_keys_without_value() {
        let records = csv_to_records("name,condition,price\nEevee");
        assert_eq!(records[0].get("name"), Some("Eevee"));
        assert!(records[0].contains_key("price"));
        assert_eq!(records[0].get("price"), None);
    }

    #[test]
    fn long_rows_drop_extra_cells() {
        let records = csv_to_records("name\nSnorlax,extra,cells");
        assert_eq!(records[0].len(), 1);
        assert_eq!(records[0].get("name"), Some("Snorlax"));
    }

    #[test]
    fn blank_lines_anywhere_are_skipped() {
        let text = "\n\nname,price\n\nGengar,$12\r\n\r\n\nHaunter,$5\n\n";
        let records = csv_to_records(text);

        let names: Vec<_> = records.iter().map(|r| r.get("name")).collect();
        assert_eq!(names, vec![Some("Gengar"), Some("Haunter")]);
    }

    #[test]
    fn no_lines_means_no_records() {
        assert!(csv_to_records("").is_empty());
        assert!(csv_to_records("\r\n\n").is_empty());
        assert!(csv_to_records("name,price").is_empty());
    }

    #[test]
    fn unknown_columns_are_retained() {
        let records = csv_to_records("name,set\nMachamp,Base");
        assert_eq!(records[0].get("set"), Some("Base"));
    }
}
