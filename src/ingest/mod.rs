mod error;

pub use error::IngestError;

/// Extracts candidate addresses from raw CSV bytes, in row order.
///
/// Row 0 is the header; the email column is located by name with a
/// fallback to column 0. Cells come from a naive comma split: quoted
/// fields and escaped commas are not handled (known limitation). Rows
/// shorter than the located column contribute no candidate, blank rows
/// are skipped, and no validation happens here.
pub fn extract_emails(raw: &[u8]) -> Result<Vec<String>, IngestError> {
    let text = std::str::from_utf8(raw).map_err(IngestError::utf8)?;
    let mut rows = text.lines();
    let Some(header) = rows.next() else {
        return Ok(Vec::new());
    };
    let column = email_column(header);

    let mut emails = Vec::new();
    for row in rows {
        if row.trim().is_empty() {
            continue;
        }
        let cell = row.split(',').nth(column).map(str::trim).unwrap_or("");
        if !cell.is_empty() {
            emails.push(cell.to_string());
        }
    }
    #[cfg(feature = "with-tracing")]
    tracing::debug!(column, count = emails.len(), "extracted candidates");
    Ok(emails)
}

/// A header cell exactly equal to "email" or "email address" wins, then
/// the first cell containing "email", then column 0.
fn email_column(header: &str) -> usize {
    let cells: Vec<String> = header
        .split(',')
        .map(|cell| cell.trim().to_lowercase())
        .collect();
    cells
        .iter()
        .position(|cell| cell == "email" || cell == "email address")
        .or_else(|| cells.iter().position(|cell| cell.contains("email")))
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_column_skips_blank_rows() {
        let emails = extract_emails(b"Email\nfoo@bar.com\n\nbaz@qux.com\n").unwrap();
        assert_eq!(emails, ["foo@bar.com", "baz@qux.com"]);
    }

    #[test]
    fn column_located_by_header_name() {
        let emails = extract_emails(b"Name,Email\nA,a@a.com\nB,b@b.com").unwrap();
        assert_eq!(emails, ["a@a.com", "b@b.com"]);
    }

    #[test]
    fn exact_header_beats_substring_match() {
        let emails = extract_emails(b"work email,email\nw@x.com,p@y.com").unwrap();
        assert_eq!(emails, ["p@y.com"]);
    }

    #[test]
    fn email_address_header_is_exact_too() {
        let emails = extract_emails(b"Name,Email Address\nA,a@a.com").unwrap();
        assert_eq!(emails, ["a@a.com"]);
    }

    #[test]
    fn falls_back_to_first_column() {
        let emails = extract_emails(b"id,name\na@a.com,Alice").unwrap();
        assert_eq!(emails, ["a@a.com"]);
    }

    #[test]
    fn short_and_empty_cells_yield_no_candidate() {
        let emails = extract_emails(b"Name,Email\nA\nB,b@b.com\nC,\nD,  ").unwrap();
        assert_eq!(emails, ["b@b.com"]);
    }

    #[test]
    fn cells_are_trimmed() {
        let emails = extract_emails(b"email\n  a@a.com  \n").unwrap();
        assert_eq!(emails, ["a@a.com"]);
    }

    #[test]
    fn empty_or_header_only_text_is_not_an_error() {
        assert!(extract_emails(b"").unwrap().is_empty());
        assert!(extract_emails(b"email\n").unwrap().is_empty());
    }

    #[test]
    fn crlf_line_endings() {
        let emails = extract_emails(b"Email\r\na@a.com\r\nb@b.com\r\n").unwrap();
        assert_eq!(emails, ["a@a.com", "b@b.com"]);
    }

    #[test]
    fn invalid_utf8_is_rejected() {
        let err = extract_emails(&[0xff, 0xfe, b'a']).unwrap_err();
        assert!(matches!(err, IngestError::InvalidUtf8 { .. }));
    }
}
