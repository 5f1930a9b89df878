//! Text and JSON output for grids

use std::fmt;
use std::io::{self, Write};

use crate::config::OutputFormat;
use crate::error::Result;
use crate::grid::Grid;

/// Text form: every value followed by one space, one row per line.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.rows() {
            for cell in row {
                write!(f, "{} ", cell)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Write the text form of `grid` to `out`.
pub fn write_text<W: Write>(grid: &Grid, out: &mut W) -> io::Result<()> {
    write!(out, "{}", grid)
}

/// Write `grid` to `out` as pretty-printed JSON plus a trailing newline.
///
/// # Errors
///
/// Returns `Json` if serialization fails and `Io` if the write fails.
pub fn write_json<W: Write>(grid: &Grid, out: &mut W) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, grid)?;
    writeln!(out)?;
    Ok(())
}

/// Write `grid` to `out` in the chosen format.
///
/// # Errors
///
/// Returns `Io` or `Json` on failure.
pub fn write_grid<W: Write>(grid: &Grid, format: OutputFormat, out: &mut W) -> Result<()> {
    match format {
        OutputFormat::Text => write_text(grid, out)?,
        OutputFormat::Json => write_json(grid, out)?,
    }
    Ok(())
}

/// Render `grid` to a string in the chosen format.
///
/// # Errors
///
/// Returns `Json` if serialization fails and `Io` if the output is not UTF-8.
pub fn render_to_string(grid: &Grid, format: OutputFormat) -> Result<String> {
    let mut buf = Vec::new();
    write_grid(grid, format, &mut buf)?;
    let out =
        String::from_utf8(buf).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    Ok(out)
}

/// Print `grid` to standard output.
///
/// # Errors
///
/// Returns `Io` if stdout cannot be written, e.g. a closed pipe.
pub fn print(grid: &Grid, format: OutputFormat) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_grid(grid, format, &mut out)?;
    out.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generator::generate;

    #[test]
    fn test_display_two() {
        assert_eq!(generate(2).unwrap().to_string(), "0 1 \n1 0 \n");
    }

    #[test]
    fn test_write_text_matches_display() {
        let grid = generate(3).unwrap();
        let mut buf = Vec::new();
        write_text(&grid, &mut buf).unwrap();
        assert_eq!(String::from_utf8(buf).unwrap(), grid.to_string());
    }

    #[test]
    fn test_json_ends_with_newline() {
        let out = render_to_string(&generate(2).unwrap(), OutputFormat::Json).unwrap();
        assert!(out.ends_with("}\n"));
    }
}
