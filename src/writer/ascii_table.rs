/// Bordered plain-ASCII table; the first row is the header.
///
/// ```text
/// +HH Moscow-+-------+
/// | Language | Found |
/// +----------+-------+
/// | Rust     | 12    |
/// +----------+-------+
/// ```
#[derive(Debug, Clone, Default)]
pub struct AsciiTable {
    title: Option<String>,
    rows: Vec<Vec<String>>,
}

impl AsciiTable {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { title: None, rows }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    fn column_widths(&self) -> Vec<usize> {
        let columns = self.rows.iter().map(Vec::len).max().unwrap_or(0);
        (0..columns)
            .map(|col| {
                self.rows
                    .iter()
                    .filter_map(|row| row.get(col))
                    .map(|cell| cell.chars().count())
                    .max()
                    .unwrap_or(0)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let border = border_line(&widths);

        let mut out = String::new();
        out.push_str(&self.top_border(&border));
        out.push('\n');

        for (i, row) in self.rows.iter().enumerate() {
            out.push_str(&row_line(row, &widths));
            out.push('\n');
            if i == 0 && self.rows.len() > 1 {
                out.push_str(&border);
                out.push('\n');
            }
        }

        out.push_str(&border);
        out
    }

    // The title replaces the start of the top border, unless it does not fit.
    fn top_border(&self, border: &str) -> String {
        match &self.title {
            Some(title) if title.chars().count() + 2 <= border.chars().count() => {
                let mut top = String::from("+");
                top.push_str(title);
                top.extend(border.chars().skip(1 + title.chars().count()));
                top
            }
            _ => border.to_string(),
        }
    }
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

fn row_line(row: &[String], widths: &[usize]) -> String {
    let mut line = String::from("|");
    for (col, width) in widths.iter().enumerate() {
        let cell = row.get(col).map(String::as_str).unwrap_or("");
        let pad = width - cell.chars().count();
        line.push(' ');
        line.push_str(cell);
        line.push_str(&" ".repeat(pad + 1));
        line.push('|');
    }
    line
}
