use csv::{Reader, ReaderBuilder, StringRecord, Terminator, Trim};

use crate::error::Result;

/// Header row and data rows of an uploaded file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedCsv {
    /// Trimmed column titles from the first line.
    pub headers: Vec<String>,
    /// Trimmed cells of every following non-blank line.
    pub rows: Vec<Vec<String>>,
}

impl ParsedCsv {
    pub fn header_count(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Splits `text` into a header row and data rows.
///
/// The header is always the first line, even when it is blank. Lines end at
/// `\n` only; a trailing `\r` is trimmed with the rest of the cell. Every
/// comma splits, since quotes are ordinary characters. Later blank lines
/// produce no row. Empty input yields an empty result.
pub fn parse_csv_text(text: &str) -> Result<ParsedCsv> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    if text.is_empty() {
        return Ok(ParsedCsv::default());
    }
    let (first_line, rest) = text.split_once('\n').unwrap_or((text, ""));

    // The reader skips an empty line entirely, which leaves no header record.
    let headers = match reader(first_line).records().next() {
        Some(record) => to_cells(&record?),
        None => vec![String::new()],
    };
    let mut rows = Vec::new();
    for record in reader(rest).records() {
        let record = record?;
        if !is_blank(&record) {
            rows.push(to_cells(&record));
        }
    }

    let parsed = ParsedCsv { headers, rows };
    tracing::debug!(
        headers = parsed.header_count(),
        rows = parsed.row_count(),
        "parsed csv text"
    );
    Ok(parsed)
}

fn reader(text: &str) -> Reader<&[u8]> {
    ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .quoting(false)
        .terminator(Terminator::Any(b'\n'))
        .trim(Trim::All)
        .from_reader(text.as_bytes())
}

fn to_cells(record: &StringRecord) -> Vec<String> {
    record.iter().map(str::to_string).collect()
}

// A whitespace-only line comes back as a single empty field after trimming.
fn is_blank(record: &StringRecord) -> bool {
    record.len() <= 1 && record.iter().all(str::is_empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_header_and_rows() {
        let parsed = parse_csv_text("Full Name,Email Address\nJohn Doe,john@x.com\n").unwrap();
        assert_eq!(parsed.headers, vec!["Full Name", "Email Address"]);
        assert_eq!(parsed.rows, vec![vec!["John Doe", "john@x.com"]]);
    }

    #[test]
    fn empty_input_is_not_an_error() {
        let parsed = parse_csv_text("").unwrap();
        assert!(parsed.is_empty());
    }

    #[test]
    fn trims_cells_and_headers() {
        let parsed = parse_csv_text("  A  ,  B \n 1 , 2 \n").unwrap();
        assert_eq!(parsed.headers, vec!["A", "B"]);
        assert_eq!(parsed.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn skips_blank_and_whitespace_lines() {
        let parsed = parse_csv_text("A,B\n\n1,2\n   \n3,4\n\n").unwrap();
        assert_eq!(parsed.rows, vec![vec!["1", "2"], vec!["3", "4"]]);
    }

    #[test]
    fn keeps_rows_of_empty_cells() {
        let parsed = parse_csv_text("A,B\n , \n").unwrap();
        assert_eq!(parsed.rows, vec![vec!["", ""]]);
    }

    #[test]
    fn quotes_are_not_interpreted() {
        let parsed = parse_csv_text("A,B\n\"Doe, John\",x\n").unwrap();
        assert_eq!(parsed.rows, vec![vec!["\"Doe", "John\"", "x"]]);
    }

    #[test]
    fn accepts_crlf_and_bom() {
        let parsed = parse_csv_text("\u{feff}A,B\r\n1,2\r\n").unwrap();
        assert_eq!(parsed.headers, vec!["A", "B"]);
        assert_eq!(parsed.rows, vec![vec!["1", "2"]]);
    }

    #[test]
    fn rows_keep_their_own_width() {
        let parsed = parse_csv_text("A,B,C\n1,2\n1,2,3,4\n").unwrap();
        assert_eq!(parsed.rows[0].len(), 2);
        assert_eq!(parsed.rows[1].len(), 4);
    }

    #[test]
    fn blank_first_line_is_still_the_header() {
        let parsed = parse_csv_text("\nName,Email\nJohn,j@x.com\n").unwrap();
        assert_eq!(parsed.headers, vec![""]);
        assert_eq!(
            parsed.rows,
            vec![vec!["Name", "Email"], vec!["John", "j@x.com"]]
        );
    }

    #[test]
    fn whitespace_first_line_is_a_single_empty_header() {
        let parsed = parse_csv_text("   \nA\n").unwrap();
        assert_eq!(parsed.headers, vec![""]);
        assert_eq!(parsed.rows, vec![vec!["A"]]);
    }

    #[test]
    fn lone_carriage_return_does_not_end_a_line() {
        let parsed = parse_csv_text("A,B\r1,2\n").unwrap();
        assert_eq!(parsed.headers, vec!["A", "B\r1", "2"]);
        assert!(parsed.rows.is_empty());
    }
}
