// render.rs - Plain-text views of a grid for logs and tests

use std::fmt;

use crate::grid::Grid;

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{cell}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Bordered dump, one `|alive|dead |` line per row followed by its 1-based
/// row number, then a dashed rule.
pub fn to_table(grid: &Grid) -> String {
    let mut out = String::new();
    for (i, row) in grid.rows().enumerate() {
        out.push('|');
        for cell in row {
            out.push_str(if cell.is_alive() { "alive" } else { "dead " });
            out.push('|');
        }
        out.push_str(&format!("    {}\n", i + 1));
    }
    out.push('-');
    out.push_str(&"------".repeat(grid.width()));
    out.push('\n');
    out
}
