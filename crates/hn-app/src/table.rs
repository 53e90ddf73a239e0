//! Plain-text tables described by a column list.
//!
//! One renderer serves every entity type; each caller only supplies the
//! columns it wants to show.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Align {
    Left,
    Right,
}

/// One table column: a header and how to format a row's cell.
pub struct Column<'a, T> {
    pub header: &'static str,
    pub align: Align,
    pub cell: Box<dyn Fn(&T) -> String + 'a>,
}

impl<'a, T> Column<'a, T> {
    pub fn new(header: &'static str, align: Align, cell: impl Fn(&T) -> String + 'a) -> Self {
        Self {
            header,
            align,
            cell: Box::new(cell),
        }
    }

    pub fn left(header: &'static str, cell: impl Fn(&T) -> String + 'a) -> Self {
        Self::new(header, Align::Left, cell)
    }

    pub fn right(header: &'static str, cell: impl Fn(&T) -> String + 'a) -> Self {
        Self::new(header, Align::Right, cell)
    }
}

/// Render `rows` under a header line, each column as wide as its widest cell.
/// Lines end with `\n` and carry no trailing spaces.
pub fn render_table<T>(rows: &[T], columns: &[Column<'_, T>]) -> String {
    let cells: Vec<Vec<String>> = rows
        .iter()
        .map(|row| columns.iter().map(|c| (c.cell)(row)).collect())
        .collect();

    let widths: Vec<usize> = columns
        .iter()
        .enumerate()
        .map(|(i, c)| {
            cells
                .iter()
                .map(|r| r[i].chars().count())
                .chain(std::iter::once(c.header.chars().count()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    let headers: Vec<String> = columns.iter().map(|c| c.header.to_string()).collect();
    push_line(&mut out, &headers, columns, &widths);
    for row in &cells {
        push_line(&mut out, row, columns, &widths);
    }
    out
}

fn push_line<T>(out: &mut String, cells: &[String], columns: &[Column<'_, T>], widths: &[usize]) {
    let mut line = String::new();
    for (i, cell) in cells.iter().enumerate() {
        if i > 0 {
            line.push_str("  ");
        }
        let padded = match columns[i].align {
            Align::Left => format!("{:<width$}", cell, width = widths[i]),
            Align::Right => format!("{:>width$}", cell, width = widths[i]),
        };
        line.push_str(&padded);
    }
    out.push_str(line.trim_end());
    out.push('\n');
}
