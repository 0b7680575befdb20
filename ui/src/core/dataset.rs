//! Tabular ingestion of uploaded EEG CSV files.
//!
//! The first column is the signal column by position, whatever its header says.
//! Column kinds are inferred from the cells: integers, floats (including integer
//! columns with gaps) or free text.

use std::fmt;
use std::io::Read;

use crate::core::error::{ParseError, RenderError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Integer,
    Float,
    Text,
}

impl ColumnKind {
    pub fn is_numeric(self) -> bool {
        matches!(self, ColumnKind::Integer | ColumnKind::Float)
    }
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnKind::Integer => "integer",
            ColumnKind::Float => "float",
            ColumnKind::Text => "text",
        })
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Number(f64),
    Text(String),
    Missing,
}

impl Cell {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Cell::Number(value) if value.is_finite() => Some(*value),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
    pub cells: Vec<Cell>,
}

impl Column {
    /// Finite values paired with their row index; missing cells leave gaps.
    pub fn indexed_values(&self) -> Result<Vec<(usize, f64)>, RenderError> {
        if !self.kind.is_numeric() {
            return Err(RenderError::NonNumericColumn {
                column: self.name.clone(),
            });
        }

        let points: Vec<(usize, f64)> = self
            .cells
            .iter()
            .enumerate()
            .filter_map(|(idx, cell)| cell.as_f64().map(|value| (idx, value)))
            .collect();

        if points.is_empty() {
            return Err(RenderError::NoNumericValues {
                column: self.name.clone(),
            });
        }
        Ok(points)
    }

    pub fn numeric_values(&self) -> Result<Vec<f64>, RenderError> {
        Ok(self
            .indexed_values()?
            .into_iter()
            .map(|(_, value)| value)
            .collect())
    }
}

/// One row view across all columns.
#[derive(Debug, Clone)]
pub struct Row<'a> {
    pub index: usize,
    pub cells: Vec<&'a Cell>,
}

/// Uploaded table: at least one column, all columns the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    columns: Vec<Column>,
    rows: usize,
}

impl Dataset {
    pub fn from_csv_bytes(bytes: &[u8]) -> Result<Self, ParseError> {
        Self::from_reader(bytes)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, ParseError> {
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers: Vec<String> = reader
            .headers()?
            .iter()
            .enumerate()
            .map(|(idx, name)| {
                if name.is_empty() {
                    format!("column_{idx}")
                } else {
                    name.to_string()
                }
            })
            .collect();

        if headers.is_empty() {
            return Err(ParseError::MissingHeader);
        }

        let mut raw: Vec<Vec<String>> = vec![Vec::new(); headers.len()];
        for record in reader.records() {
            let record = record?;
            for (column, field) in raw.iter_mut().zip(record.iter()) {
                column.push(field.to_string());
            }
        }

        let rows = raw.first().map(Vec::len).unwrap_or(0);
        let columns = headers
            .into_iter()
            .zip(raw)
            .map(|(name, fields)| infer_column(name, fields))
            .collect::<Vec<_>>();

        log::debug!(
            "parsed CSV: {rows} rows × {} columns ({} numeric)",
            columns.len(),
            columns.iter().filter(|c| c.kind.is_numeric()).count()
        );

        Ok(Self { columns, rows })
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows
    }

    /// Column 0, treated as the EEG signal.
    pub fn signal_column(&self) -> &Column {
        &self.columns[0]
    }

    pub fn numeric_columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().filter(|column| column.kind.is_numeric())
    }

    pub fn row(&self, index: usize) -> Option<Row<'_>> {
        if index >= self.rows {
            return None;
        }
        Some(Row {
            index,
            cells: self.columns.iter().map(|c| &c.cells[index]).collect(),
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.rows).filter_map(move |idx| self.row(idx))
    }
}

/// Markers read as missing cells, on top of the empty string.
pub const NA_TOKENS: &[&str] = &[
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(field: &str) -> bool {
    field.is_empty() || NA_TOKENS.contains(&field)
}

fn infer_column(name: String, fields: Vec<String>) -> Column {
    let present = || fields.iter().filter(|f| !is_missing(f));
    let has_gaps = fields.iter().any(|f| is_missing(f));

    let all_int = present().all(|f| f.parse::<i64>().is_ok());
    let all_float = present().all(|f| f.parse::<f64>().is_ok());

    let kind = if all_int && !has_gaps && present().next().is_some() {
        ColumnKind::Integer
    } else if all_float {
        ColumnKind::Float
    } else {
        ColumnKind::Text
    };

    let cells = fields
        .into_iter()
        .map(|field| {
            if is_missing(&field) {
                Cell::Missing
            } else if kind.is_numeric() {
                field.parse::<f64>().map(Cell::Number).unwrap_or(Cell::Missing)
            } else {
                Cell::Text(field)
            }
        })
        .collect();

    Column { name, kind, cells }
}
