//! Core data structures for parsed CSV tables.

use indexmap::IndexMap;

/// A single data row keyed by header name.
///
/// Keys follow header order. When the header list repeats a name, the record
/// keeps one key for it holding the value of the last column with that name.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Record {
    cells: IndexMap<String, String>,
}

impl Record {
    /// Build a record by pairing headers and fields positionally.
    ///
    /// Callers must pass equal-length slices; the parser guarantees this.
    pub(crate) fn zip(headers: &[String], fields: Vec<String>) -> Self {
        debug_assert_eq!(headers.len(), fields.len());
        let cells = headers.iter().cloned().zip(fields).collect();
        Self { cells }
    }

    /// Get the raw cell value for a header.
    #[inline]
    pub fn get(&self, header: &str) -> Option<&str> {
        self.cells.get(header).map(String::as_str)
    }

    /// Header names in column order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.keys().map(String::as_str)
    }

    /// `(header, value)` pairs in column order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of distinct keys.
    #[inline]
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Check if the record has no cells.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// A parsed CSV table: headers plus every row that matched the header width.
///
/// Every record has the same key set, derived from the header list. A dataset
/// is never edited in place; a new parse produces a new dataset.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
pub struct Dataset {
    headers: Vec<String>,
    records: Vec<Record>,
    /// 1-based line numbers (blank lines not counted) of rows that were dropped
    skipped_lines: Vec<usize>,
}

impl Dataset {
    pub(crate) fn new(headers: Vec<String>, records: Vec<Record>, skipped_lines: Vec<usize>) -> Self {
        Self {
            headers,
            records,
            skipped_lines,
        }
    }

    /// Build a dataset from already split rows.
    ///
    /// Rows whose length differs from `headers` are dropped, the same way the
    /// parser drops them. Returns `None` if no row survives.
    ///
    /// ## Example
    ///
    /// ```rust
    /// use csv_chart_core::Dataset;
    ///
    /// let headers = vec!["x".to_string(), "y".to_string()];
    /// let rows = vec![
    ///     vec!["a".to_string(), "1".to_string()],
    ///     vec!["short".to_string()],
    /// ];
    /// let dataset = Dataset::from_rows(headers, rows).unwrap();
    /// assert_eq!(dataset.len(), 1);
    /// assert_eq!(dataset.skipped_lines(), [3]);
    /// ```
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Option<Self> {
        let mut records = Vec::with_capacity(rows.len());
        let mut skipped_lines = Vec::new();
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() == headers.len() {
                records.push(Record::zip(&headers, row));
            } else {
                // Header is line 1.
                skipped_lines.push(i + 2);
            }
        }
        if records.is_empty() {
            None
        } else {
            Some(Self::new(headers, records, skipped_lines))
        }
    }

    /// Header names in column order, duplicates included.
    #[inline]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// All records in input order.
    #[inline]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Line numbers of rows that were skipped for having the wrong width.
    #[inline]
    pub fn skipped_lines(&self) -> &[usize] {
        &self.skipped_lines
    }

    /// Number of records.
    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Check if the dataset holds no records.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Check if a header with this name exists.
    pub fn has_header(&self, name: &str) -> bool {
        self.headers.iter().any(|h| h == name)
    }

    /// Get the cell at the given position for table rendering.
    ///
    /// Returns None if position is out of bounds.
    pub fn cell(&self, row: usize, col: usize) -> Option<&str> {
        let header = self.headers.get(col)?;
        self.records.get(row)?.get(header)
    }

    /// Iterate over rows as cell slices in header order.
    ///
    /// With duplicate headers every repeated column shows the surviving value.
    pub fn table_rows(&self) -> impl Iterator<Item = Vec<&str>> + '_ {
        self.records.iter().map(move |record| {
            self.headers
                .iter()
                .map(|h| record.get(h).unwrap_or_default())
                .collect()
        })
    }

    /// Get the raw values of one column, in row order.
    ///
    /// Unknown columns produce an empty string per row.
    pub fn column<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.records
            .iter()
            .map(move |record| record.get(name).unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample() -> Dataset {
        Dataset::from_rows(
            strings(&["month", "sales"]),
            vec![strings(&["Jan", "10"]), strings(&["Feb", "x"])],
        )
        .unwrap()
    }

    #[test]
    fn test_record_zip_keeps_header_order() {
        let record = Record::zip(&strings(&["b", "a", "c"]), strings(&["2", "1", "3"]));
        assert_eq!(record.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
        assert_eq!(
            record.iter().collect::<Vec<_>>(),
            vec![("b", "2"), ("a", "1"), ("c", "3")]
        );
    }

    #[test]
    fn test_cell_accessors() {
        let dataset = sample();
        assert_eq!(dataset.cell(0, 0), Some("Jan"));
        assert_eq!(dataset.cell(1, 1), Some("x"));
        assert_eq!(dataset.cell(2, 0), None);
        assert_eq!(dataset.cell(0, 2), None);
    }

    #[test]
    fn test_table_rows_with_duplicate_headers() {
        let dataset = Dataset::from_rows(strings(&["k", "k"]), vec![strings(&["1", "2"])]).unwrap();
        let rows: Vec<Vec<&str>> = dataset.table_rows().collect();
        assert_eq!(rows, vec![vec!["2", "2"]]);
    }

    #[test]
    fn test_column() {
        let dataset = sample();
        assert_eq!(dataset.column("month").collect::<Vec<_>>(), vec!["Jan", "Feb"]);
        assert_eq!(dataset.column("missing").collect::<Vec<_>>(), vec!["", ""]);
        assert!(dataset.has_header("sales"));
        assert!(!dataset.has_header("missing"));
    }

    #[test]
    fn test_from_rows_all_invalid() {
        let dataset = Dataset::from_rows(strings(&["a", "b"]), vec![strings(&["1"])]);
        assert!(dataset.is_none());
    }
}
