use prettytable::format::consts::FORMAT_BOX_CHARS;
use prettytable::{Cell, Row, Table};

/// Body of a display table. Rows are only ever replaced as a whole.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableBody {
    id: &'static str,
    header: Vec<&'static str>,
    rows: Vec<Vec<String>>,
}

impl TableBody {
    pub fn new(id: &'static str, header: Vec<&'static str>) -> Self {
        Self {
            id,
            header,
            rows: Vec::new(),
        }
    }

    pub fn id(&self) -> &'static str {
        self.id
    }

    pub fn header(&self) -> &[&'static str] {
        &self.header
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Drops every existing row and installs `rows` in their place.
    pub fn replace_rows(&mut self, rows: Vec<Vec<String>>) {
        self.rows = rows;
    }

    pub fn to_table(&self) -> Table {
        let mut table = Table::new();
        table.set_format(*FORMAT_BOX_CHARS);
        table.set_titles(Row::new(
            self.header.iter().map(|title| Cell::new(title).style_spec("b")).collect(),
        ));
        for row in &self.rows {
            table.add_row(Row::new(row.iter().map(|value| Cell::new(value)).collect()));
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn replace_discards_previous_rows() {
        let mut body = TableBody::new("t", vec!["a", "b"]);
        body.replace_rows(vec![cells(&["1", "2"]), cells(&["3", "4"])]);
        assert_eq!(body.len(), 2);

        body.replace_rows(vec![cells(&["5", "6"])]);
        assert_eq!(body.rows(), &[cells(&["5", "6"])]);
    }

    #[test]
    fn table_contains_titles_and_cells() {
        let mut body = TableBody::new("t", vec!["Ticker", "Price"]);
        body.replace_rows(vec![cells(&["QSI", "2.35"])]);

        let rendered = body.to_table().to_string();

        assert!(rendered.contains("Ticker"));
        assert!(rendered.contains("QSI"));
        assert!(rendered.contains("2.35"));
    }
}
