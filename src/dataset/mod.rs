//! Reads column names and a sample row from the generated CSV artifact.
//!
//! The visualization stage only needs prompt context, not a dataframe, so
//! this is a header + one-row read with quote-aware field splitting rather
//! than a full CSV engine. The exact cell formats are whatever the generated
//! script wrote; they are passed through verbatim.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

/// Row index of the representative sample handed to the visualization
/// prompt, counted from the first data row.
pub const SAMPLE_ROW_INDEX: usize = 4;

#[derive(Debug, Clone)]
pub struct CsvPreview {
    pub columns: Vec<String>,
    pub sample: Vec<String>,
}

impl CsvPreview {
    /// One "column: value" line per column, for embedding into a prompt.
    pub fn sample_lines(&self) -> String {
        self.columns
            .iter()
            .zip(self.sample.iter())
            .map(|(c, v)| format!("{}: {}", c, v))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Reads the header plus the data row at `sample_index` from `path`.
///
/// Requires the file to hold at least `sample_index + 1` data rows; the
/// producing stage must have reported success before this is called.
pub fn read_preview(path: &Path, sample_index: usize) -> Result<CsvPreview> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("failed to read dataset artifact '{}'", path.display()))?;

    let mut lines = content.lines();
    let header = match lines.next() {
        Some(h) if !h.trim().is_empty() => h,
        _ => bail!("dataset artifact '{}' is empty", path.display()),
    };
    let columns = split_fields(header);

    let row = lines
        .filter(|l| !l.trim().is_empty())
        .nth(sample_index)
        .with_context(|| {
            format!(
                "dataset artifact '{}' has fewer than {} data rows",
                path.display(),
                sample_index + 1
            )
        })?;
    let sample = split_fields(row);

    if sample.len() != columns.len() {
        bail!(
            "sample row has {} fields but header has {} columns",
            sample.len(),
            columns.len()
        );
    }

    Ok(CsvPreview { columns, sample })
}

/// Splits one CSV line on commas, honoring double-quoted fields and the
/// `""` escape inside them.
fn split_fields(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut field = String::new();
    let mut in_quotes = false;
    let mut chars = line.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '"' if in_quotes => {
                if chars.peek() == Some(&'"') {
                    chars.next();
                    field.push('"');
                } else {
                    in_quotes = false;
                }
            }
            '"' => in_quotes = true,
            ',' if !in_quotes => {
                fields.push(std::mem::take(&mut field));
            }
            _ => field.push(c),
        }
    }
    fields.push(field);
    fields
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_csv(content: &str) -> tempfile::NamedTempFile {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        f.write_all(content.as_bytes()).unwrap();
        f.flush().unwrap();
        f
    }

    #[test]
    fn test_read_preview_header_and_fifth_row() {
        let f = write_csv("name,age,salary\na,1,10\nb,2,20\nc,3,30\nd,4,40\ne,5,50\n");
        let preview = read_preview(f.path(), SAMPLE_ROW_INDEX).unwrap();
        assert_eq!(preview.columns, vec!["name", "age", "salary"]);
        assert_eq!(preview.sample, vec!["e", "5", "50"]);
    }

    #[test]
    fn test_read_preview_too_few_rows() {
        let f = write_csv("name,age\na,1\nb,2\n");
        let err = read_preview(f.path(), SAMPLE_ROW_INDEX).unwrap_err();
        assert!(err.to_string().contains("fewer than 5 data rows"), "{err}");
    }

    #[test]
    fn test_read_preview_missing_file() {
        let err = read_preview(Path::new("no_such_artifact.csv"), 0).unwrap_err();
        assert!(err.to_string().contains("failed to read"), "{err}");
    }

    #[test]
    fn test_split_fields_quoted_commas_and_escapes() {
        let fields = split_fields(r#"plain,"a, b","she said ""hi""",42"#);
        assert_eq!(fields, vec!["plain", "a, b", "she said \"hi\"", "42"]);
    }

    #[test]
    fn test_sample_lines_pairs_columns_with_values() {
        let preview = CsvPreview {
            columns: vec!["name".into(), "age".into()],
            sample: vec!["e".into(), "5".into()],
        };
        assert_eq!(preview.sample_lines(), "name: e\nage: 5");
    }
}
