use std::fmt;

// ---------------------------------------------------------------------------
// Record – one row of the dataset
// ---------------------------------------------------------------------------

/// A single row, values aligned with the dataset header.
///
/// Values are kept as the raw text read from the file; nothing is parsed, so
/// untouched cells are written back exactly as they came in.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Record { values }
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// Keep only the values at `keep` (ascending indices into the old layout).
    pub(crate) fn project(&self, keep: &[usize]) -> Record {
        Record {
            values: keep
                .iter()
                .filter_map(|&i| self.values.get(i).cloned())
                .collect(),
        }
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Record {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// Header plus rows, in file order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Dataset {
    /// Column names, in file order. May contain duplicates.
    pub headers: Vec<String>,
    /// All rows; each has `headers.len()` values.
    pub records: Vec<Record>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, records: Vec<Record>) -> Self {
        Dataset { headers, records }
    }

    /// Number of rows (header excluded).
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    /// Position of the first column called `name`.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    /// Look up a cell by row number and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&str> {
        let idx = self.column_index(column)?;
        self.records
            .get(row)
            .and_then(|r| r.values.get(idx))
            .map(String::as_str)
    }
}

// ---------------------------------------------------------------------------
// ColumnSet – names to remove
// ---------------------------------------------------------------------------

/// Columns dropped when none are given on the command line.
pub const DEFAULT_DROP_COLUMNS: [&str; 3] = ["EVENT_UNIQUE_ID", "x", "y"];

/// Ordered, de-duplicated set of column names.
///
/// Order only matters for reporting; membership is what `prune` uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColumnSet {
    names: Vec<String>,
}

impl ColumnSet {
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut out: Vec<String> = Vec::new();
        for name in names {
            let name = name.into();
            if !out.contains(&name) {
                out.push(name);
            }
        }
        ColumnSet { names: out }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}

impl Default for ColumnSet {
    fn default() -> Self {
        ColumnSet::new(DEFAULT_DROP_COLUMNS)
    }
}

impl fmt::Display for ColumnSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.names.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_set_dedups_and_keeps_order() {
        let set = ColumnSet::new(["y", "x", "y", "EVENT_UNIQUE_ID"]);
        assert_eq!(set.iter().collect::<Vec<_>>(), ["y", "x", "EVENT_UNIQUE_ID"]);
        assert!(set.contains("x"));
        assert!(!set.contains("X"));
    }

    #[test]
    fn default_column_set() {
        let set = ColumnSet::default();
        assert_eq!(set.len(), 3);
        assert_eq!(set.to_string(), "EVENT_UNIQUE_ID, x, y");
    }

    #[test]
    fn cell_lookup_by_name() {
        let ds = Dataset::new(
            vec!["Division".into(), "Count".into()],
            vec![Record::from_iter(["D11", "5"])],
        );
        assert_eq!(ds.get(0, "Count"), Some("5"));
        assert_eq!(ds.get(0, "x"), None);
        assert_eq!(ds.get(1, "Count"), None);
    }
}
