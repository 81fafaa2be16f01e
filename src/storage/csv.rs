// src/storage/csv.rs

use std::io::{self, Write};
#[cfg(test)]
use std::mem::take;

use crate::models::Article;

const SEP: char = ',';

/* ---------------- Writing ---------------- */

fn needs_quotes(field: &str) -> bool {
    field.contains(SEP)
        || field.contains('"')
        || field.contains('\n')
        || field.contains('\r')
        || field.starts_with(char::is_whitespace)
}

/// Write a single CSV row.
pub fn write_row<W: Write>(w: &mut W, row: &[&str]) -> io::Result<()> {
    let mut first = true;
    for cell in row {
        if !first {
            write!(w, "{}", SEP)?;
        } else {
            first = false;
        }
        if needs_quotes(cell) {
            let escaped = cell.replace('"', "\"\"");
            write!(w, "\"{}\"", escaped)?;
        } else {
            write!(w, "{}", cell)?;
        }
    }
    writeln!(w)
}

/// Write the header row followed by one row per article.
pub fn write_articles<W: Write>(w: &mut W, articles: &[Article]) -> io::Result<()> {
    write_row(w, &Article::CSV_HEADER)?;
    for article in articles {
        write_row(w, &article.csv_row())?;
    }
    Ok(())
}

/* ---------------- Reading back (tests) ---------------- */

/// Minimal CSV parser (quotes + CRLF tolerant).
#[cfg(test)]
pub fn parse_rows(text: &str) -> Vec<Vec<String>> {
    let mut rows = Vec::new();
    let mut field = String::new();
    let mut row = Vec::new();
    let mut in_quotes = false;
    let mut chars = text.chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' => {
                if in_quotes {
                    if matches!(chars.peek(), Some('"')) {
                        chars.next(); // doubled quote
                        field.push('"');
                    } else {
                        in_quotes = false;
                    }
                } else {
                    in_quotes = true;
                }
            }
            c if c == SEP && !in_quotes => row.push(take(&mut field)),
            '\n' | '\r' if !in_quotes => {
                if ch == '\r' && matches!(chars.peek(), Some('\n')) {
                    chars.next();
                }
                row.push(take(&mut field));
                if !(row.len() == 1 && row[0].is_empty()) {
                    rows.push(take(&mut row));
                } else {
                    row.clear();
                }
            }
            _ => field.push(ch),
        }
    }

    // Trailing row without a final newline
    if !field.is_empty() || !row.is_empty() {
        row.push(field);
        rows.push(row);
    }

    rows
}

/// Parse articles written by `write_articles`, skipping the header row.
#[cfg(test)]
pub fn parse_articles(text: &str) -> Vec<Article> {
    parse_rows(text)
        .into_iter()
        .skip(1)
        .filter_map(|row| Article::from_csv_row(&row))
        .collect()
}
