//! Entity table in, summary table out.
//!
//! The input is a CSV with a header row; one column names the entity. The
//! output repeats every input column and appends the summary columns.

use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;

use csv::{ReaderBuilder, Writer};

use crate::error::{TableError, TableResult};
use crate::types::BatchResult;

/// Default name of the entity column.
pub const DEFAULT_ENTITY_COLUMN: &str = "Company";

/// Columns appended to every output row.
pub const SUMMARY_COLUMNS: [&str; 6] = [
    "Mentions",
    "Positiveness",
    "Negativeness",
    "Neutralness",
    "Average positiveness",
    "Text",
];

/// An input table with a designated entity column.
#[derive(Debug, Clone)]
pub struct EntityTable {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
    entity_column: usize,
}

impl EntityTable {
    /// Read a CSV table from any reader.
    pub fn read_csv<R: Read>(reader: R, column: &str) -> TableResult<Self> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = reader.headers()?.iter().map(|h| h.to_string()).collect();
        let entity_column = headers
            .iter()
            .position(|h| h.trim() == column)
            .ok_or_else(|| TableError::MissingColumn(column.to_string()))?;

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record?;
            let mut row: Vec<String> = record.iter().map(|f| f.to_string()).collect();
            row.resize(headers.len(), String::new());
            rows.push(row);
        }

        Ok(Self {
            headers,
            rows,
            entity_column,
        })
    }

    /// Read a CSV table from a file.
    pub fn from_path(path: impl AsRef<Path>, column: &str) -> TableResult<Self> {
        let file = File::open(path)?;
        Self::read_csv(file, column)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Entity names in row order, trimmed.
    pub fn entities(&self) -> Vec<String> {
        self.rows
            .iter()
            .map(|row| row[self.entity_column].trim().to_string())
            .collect()
    }

    /// Write every input row followed by its summary columns.
    pub fn write_csv<W: Write>(&self, writer: W, result: &BatchResult) -> TableResult<()> {
        if result.len() != self.rows.len() {
            return Err(TableError::RowMismatch {
                expected: self.rows.len(),
                actual: result.len(),
            });
        }

        let mut writer = Writer::from_writer(writer);

        let mut header = self.headers.clone();
        header.extend(SUMMARY_COLUMNS.iter().map(|c| c.to_string()));
        writer.write_record(&header)?;

        for (row, summary) in self.rows.iter().zip(result.iter()) {
            let mut record = row.clone();
            record.extend([
                summary.mention_count.to_string(),
                summary.positive_pct.to_string(),
                summary.negative_pct.to_string(),
                summary.neutral_pct.to_string(),
                summary.avg_score.to_string(),
                summary.concatenated_text.clone(),
            ]);
            writer.write_record(&record)?;
        }

        writer.flush()?;
        Ok(())
    }

    /// Write the output table to a file.
    pub fn write_csv_path(&self, path: impl AsRef<Path>, result: &BatchResult) -> TableResult<()> {
        let file = File::create(path)?;
        self.write_csv(file, result)
    }
}

/// Write the batch result as a JSON array of summaries.
pub fn write_json<W: Write>(mut writer: W, result: &BatchResult) -> TableResult<()> {
    serde_json::to_writer_pretty(&mut writer, result)?;
    writer.write_all(b"\n")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::EntitySummary;

    const INPUT: &str = "Ticker,Company,Sector\nACM,Acme Corp,Industrials\nGLX, Globex ,Energy\n";

    #[test]
    fn test_reads_entities_from_named_column() {
        let table = EntityTable::read_csv(INPUT.as_bytes(), "Company").unwrap();
        assert_eq!(table.len(), 2);
        assert_eq!(table.entities(), vec!["Acme Corp", "Globex"]);
    }

    #[test]
    fn test_missing_column() {
        let err = EntityTable::read_csv(INPUT.as_bytes(), "Name").unwrap_err();
        assert!(matches!(err, TableError::MissingColumn(c) if c == "Name"));
    }

    #[test]
    fn test_short_rows_padded() {
        let table = EntityTable::read_csv("Id,Company\n1\n".as_bytes(), "Company").unwrap();
        assert_eq!(table.entities(), vec![""]);
    }

    #[test]
    fn test_write_appends_summary_columns() {
        let table = EntityTable::read_csv(INPUT.as_bytes(), "Company").unwrap();
        let mut acme = EntitySummary::empty("Acme Corp");
        acme.mention_count = 2;
        acme.positive_pct = 50.0;
        acme.neutral_pct = 50.0;
        acme.avg_score = 0.25;
        acme.concatenated_text = "great;ok".into();
        let result = BatchResult::new(vec![acme, EntitySummary::empty("Globex")]);

        let mut out = Vec::new();
        table.write_csv(&mut out, &result).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();

        assert_eq!(
            lines[0],
            "Ticker,Company,Sector,Mentions,Positiveness,Negativeness,Neutralness,Average positiveness,Text"
        );
        assert_eq!(lines[1], "ACM,Acme Corp,Industrials,2,50,0,50,0.25,great;ok");
        assert_eq!(lines[2], "GLX, Globex ,Energy,0,0,0,0,0,");
    }

    #[test]
    fn test_write_rejects_mismatched_rows() {
        let table = EntityTable::read_csv(INPUT.as_bytes(), "Company").unwrap();
        let result = BatchResult::new(vec![EntitySummary::empty("Acme Corp")]);

        let err = table.write_csv(Vec::new(), &result).unwrap_err();
        assert!(matches!(err, TableError::RowMismatch { expected: 2, actual: 1 }));
    }

    #[test]
    fn test_json_output() {
        let result = BatchResult::new(vec![EntitySummary::empty("Acme Corp")]);
        let mut out = Vec::new();
        write_json(&mut out, &result).unwrap();

        let parsed: Vec<EntitySummary> = serde_json::from_slice(&out).unwrap();
        assert_eq!(parsed, vec![EntitySummary::empty("Acme Corp")]);
    }
}
