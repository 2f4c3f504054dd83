use crate::error::DataError;
use std::collections::HashSet;
use std::path::Path;

/// Immutable, in-memory CSV table. Cells keep their raw text; numbers are
/// parsed on access.
#[derive(Debug, Clone)]
pub struct RecordTable {
    name: String,
    columns: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// A borrowed view of one row of a [`RecordTable`].
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    table: &'a RecordTable,
    index: usize,
    cells: &'a [String],
}

/// `(column, value)` pairs that a row has to match, ignoring case.
pub type Keys<'k> = [(&'k str, &'k str)];

pub fn matches_ignore_case(lhs: &str, rhs: &str) -> bool {
    lhs == rhs || lhs.to_lowercase() == rhs.to_lowercase()
}

impl RecordTable {
    pub fn from_path(name: &str, path: impl AsRef<Path>) -> Result<Self, DataError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(name, file)
    }

    pub fn from_reader(name: &str, reader: impl std::io::Read) -> Result<Self, DataError> {
        let csv_error = |source| DataError::Csv {
            table: name.to_string(),
            source,
        };
        let mut reader = csv::ReaderBuilder::new()
            .has_headers(true)
            .trim(csv::Trim::All)
            .from_reader(reader);

        let columns = reader
            .headers()
            .map_err(csv_error)?
            .iter()
            .map(String::from)
            .collect::<Vec<_>>();

        let mut rows = Vec::new();
        for record in reader.records() {
            let record = record.map_err(csv_error)?;
            rows.push(record.iter().map(String::from).collect::<Vec<_>>());
        }

        tracing::info!(table = name, rows = rows.len(), "loaded table");
        Ok(Self {
            name: name.to_string(),
            columns,
            rows,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Result<usize, DataError> {
        self.columns
            .iter()
            .position(|c| c == column)
            .ok_or_else(|| DataError::UnknownColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Fails on the first column in `columns` that the table does not have.
    pub fn require_columns(&self, columns: &[&str]) -> Result<(), DataError> {
        for column in columns {
            if !self.columns.iter().any(|c| c == column) {
                return Err(DataError::MissingColumn {
                    table: self.name.clone(),
                    column: column.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Fails on the first cell of `column` that does not parse as a number.
    pub fn require_numeric(&self, column: &str) -> Result<(), DataError> {
        let column_index = self.column_index(column)?;
        for index in 0..self.rows.len() {
            self.row(index).parse_number(column, column_index)?;
        }
        Ok(())
    }

    pub fn rows(&self) -> impl Iterator<Item = Row<'_>> {
        (0..self.rows.len()).map(|index| self.row(index))
    }

    fn row(&self, index: usize) -> Row<'_> {
        Row {
            table: self,
            index,
            cells: &self.rows[index],
        }
    }

    /// Distinct values of `column` in order of first appearance.
    pub fn distinct(&self, column: &str) -> Result<Vec<String>, DataError> {
        let column_index = self.column_index(column)?;
        let mut seen = HashSet::new();
        Ok(self
            .rows
            .iter()
            .map(|cells| cells[column_index].as_str())
            .filter(|value| seen.insert(*value))
            .map(String::from)
            .collect())
    }

    pub fn distinct_sorted(&self, column: &str) -> Result<Vec<String>, DataError> {
        let mut values = self.distinct(column)?;
        values.sort();
        Ok(values)
    }

    /// All rows matching every key, in file order.
    pub fn filter<'t>(&'t self, keys: &Keys<'_>) -> Result<Vec<Row<'t>>, DataError> {
        let key_indices = self.key_indices(keys)?;
        Ok(self
            .rows()
            .filter(|row| row.matches(&key_indices))
            .collect())
    }

    /// The first row matching every key. `None` is a regular outcome, not an
    /// error.
    pub fn find_first<'t>(&'t self, keys: &Keys<'_>) -> Result<Option<Row<'t>>, DataError> {
        let key_indices = self.key_indices(keys)?;
        Ok(self.rows().find(|row| row.matches(&key_indices)))
    }

    fn key_indices<'k>(&self, keys: &Keys<'k>) -> Result<Vec<(usize, &'k str)>, DataError> {
        keys.iter()
            .map(|(column, value)| {
                self.column_index(column)
                    .map(|column_index| (column_index, *value))
            })
            .collect()
    }
}

impl<'a> Row<'a> {
    /// Zero-based position of the row in its table.
    pub fn index(&self) -> usize {
        self.index
    }

    pub fn text(&self, column: &str) -> Result<&'a str, DataError> {
        let column_index = self.table.column_index(column)?;
        Ok(self.cells[column_index].as_str())
    }

    pub fn number(&self, column: &str) -> Result<f64, DataError> {
        let column_index = self.table.column_index(column)?;
        self.parse_number(column, column_index)
    }

    fn parse_number(&self, column: &str, column_index: usize) -> Result<f64, DataError> {
        let value = &self.cells[column_index];
        value.parse::<f64>().map_err(|_| DataError::InvalidNumber {
            table: self.table.name.clone(),
            column: column.to_string(),
            row: self.index + 1,
            value: value.clone(),
        })
    }

    fn matches(&self, key_indices: &[(usize, &str)]) -> bool {
        key_indices
            .iter()
            .all(|(column_index, value)| matches_ignore_case(&self.cells[*column_index], value))
    }
}
