use std::collections::HashMap;

use csv::StringRecord;

/// Column holding the proxy name.
pub const PROXY_COLUMN: &str = "pxname";
/// Column holding the server, `FRONTEND` or `BACKEND` name.
pub const SERVER_COLUMN: &str = "svname";

/// One fetch worth of stats rows, keyed by the header line of the response.
#[derive(Debug, Clone)]
pub struct StatsTable {
    header: StringRecord,
    index: HashMap<String, usize>,
    records: Vec<StringRecord>,
}

impl StatsTable {
    pub(super) fn new(header: StringRecord, records: Vec<StringRecord>) -> Self {
        let mut index = HashMap::with_capacity(header.len());
        for (position, name) in header.iter().enumerate() {
            index.entry(name.to_owned()).or_insert(position);
        }
        Self {
            header,
            index,
            records,
        }
    }

    /// Column names in source order.
    pub fn header(&self) -> impl Iterator<Item = &str> {
        self.header.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows in the order the stats source reported them.
    pub fn rows(&self) -> impl Iterator<Item = StatsRow<'_>> {
        self.records.iter().map(move |record| StatsRow {
            table: self,
            record,
        })
    }
}

/// Borrowed view of one proxy/server line.
#[derive(Debug, Clone, Copy)]
pub struct StatsRow<'table> {
    table: &'table StatsTable,
    record: &'table StringRecord,
}

impl<'table> StatsRow<'table> {
    /// Value of `field`, or `None` when the header has no such column.
    ///
    /// A column name repeated in the header resolves to its first occurrence.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&'table str> {
        let position = *self.table.index.get(field)?;
        self.record.get(position)
    }

    #[must_use]
    pub fn proxy(&self) -> &'table str {
        self.get(PROXY_COLUMN).unwrap_or_default()
    }

    #[must_use]
    pub fn server(&self) -> &'table str {
        self.get(SERVER_COLUMN).unwrap_or_default()
    }

    /// `(column, value)` pairs in header order.
    pub fn iter(&self) -> impl Iterator<Item = (&'table str, &'table str)> + use<'table> {
        self.table.header.iter().zip(self.record.iter())
    }
}
