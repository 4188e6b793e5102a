/// Cells longer than this are cut, so article bodies do not flood a row.
const MAX_CELL_WIDTH: usize = 48;

#[derive(Clone, Copy, Debug)]
pub struct TableOptions {
    pub max_width: Option<usize>,
}

impl TableOptions {
    /// Fit to `$COLUMNS` when the shell exports it.
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            max_width: std::env::var("COLUMNS").ok().and_then(|c| c.parse().ok()),
        }
    }
}

/// Render a simple aligned table for string rows.
#[must_use]
pub fn render_entity_table(headers: &[&str], rows: &[Vec<String>], options: TableOptions) -> String {
    let mut widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .clamp(header.len(), MAX_CELL_WIDTH.max(header.len()))
        })
        .collect();
    fit_widths(&mut widths, headers, options.max_width);

    let header_line = format_line(headers.iter().copied(), &widths);
    let mut lines = Vec::with_capacity(rows.len() + 2);
    let divider = "-".repeat(header_line.chars().count());
    lines.push(header_line);
    lines.push(divider);
    for row in rows {
        let cells = (0..widths.len()).map(|i| row.get(i).map_or("-", String::as_str));
        lines.push(format_line(cells, &widths));
    }
    lines.join("\n")
}

fn format_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    cells
        .zip(widths)
        .map(|(cell, width)| pad(&truncate_text(cell, *width), *width, looks_numeric(cell)))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

/// Shrink the widest columns one step at a time until the row fits.
fn fit_widths(widths: &mut [usize], headers: &[&str], max_width: Option<usize>) {
    let Some(max_width) = max_width else {
        return;
    };
    let separators = widths.len().saturating_sub(1) * 2;
    while widths.iter().sum::<usize>() + separators > max_width {
        let widest = widths
            .iter()
            .enumerate()
            .filter(|(idx, width)| **width > headers[*idx].len().max(6))
            .max_by_key(|(_, width)| **width)
            .map(|(idx, _)| idx);
        let Some(idx) = widest else {
            break;
        };
        widths[idx] -= 1;
    }
}

fn truncate_text(value: &str, width: usize) -> String {
    if value.chars().count() <= width {
        return value.to_string();
    }
    if width <= 1 {
        return "…".to_string();
    }
    let mut out: String = value.chars().take(width - 1).collect();
    out.push('…');
    out
}

fn looks_numeric(value: &str) -> bool {
    let trimmed = value.trim();
    !trimmed.is_empty() && trimmed.chars().all(|ch| ch.is_ascii_digit())
}

fn pad(value: &str, width: usize, numeric: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if numeric {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn columns_align_and_numbers_right_justify() {
        let rows = vec![
            vec!["art-1".to_string(), "Intro".to_string(), "3".to_string()],
            vec!["art-22".to_string(), "Getting started".to_string(), "120".to_string()],
        ];
        let table = render_entity_table(
            &["id", "title", "helpful"],
            &rows,
            TableOptions { max_width: None },
        );
        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "id      title            helpful");
        assert!(lines[1].chars().all(|c| c == '-'));
        assert_eq!(lines[2], "art-1   Intro                  3");
        assert_eq!(lines[3], "art-22  Getting started      120");
    }

    #[test]
    fn long_cells_are_cut() {
        let long = "x".repeat(200);
        let table = render_entity_table(&["content"], &[vec![long]], TableOptions { max_width: None });
        let last = table.lines().last().unwrap();
        assert_eq!(last.chars().count(), MAX_CELL_WIDTH);
        assert!(last.ends_with('…'));
    }

    #[test]
    fn narrow_terminal_shrinks_widest_column() {
        let rows = vec![vec!["art-1".to_string(), "a".repeat(40)]];
        let table = render_entity_table(&["id", "title"], &rows, TableOptions { max_width: Some(30) });
        assert!(table.lines().all(|line| line.chars().count() <= 30));
    }
}
