//! Output file writing.
//!
//! Both formats start with a UTF-8 byte-order mark so spreadsheet importers
//! pick the right encoding.
//!
//! ```text
//! EF BB BF  [ {...}, ... ]                          # json
//! EF BB BF  tag,title,author,url,date,content\n...  # csv
//! ```

pub mod csv;
pub mod json;

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

use crate::error::Result;
use crate::models::{Article, OutputFormat};

/// UTF-8 byte-order mark written before any content.
pub const BOM: &[u8] = b"\xEF\xBB\xBF";

/// Write the BOM and the articles in the given format.
pub fn write_articles<W: Write>(
    w: &mut W,
    articles: &[Article],
    format: OutputFormat,
) -> Result<()> {
    w.write_all(BOM)?;
    match format {
        OutputFormat::Json => json::write_articles(w, articles)?,
        OutputFormat::Csv => csv::write_articles(w, articles)?,
    }
    Ok(())
}

/// Write articles to `path`.
///
/// Content goes to a sibling `.tmp` file first and is renamed into place, so
/// `path` never holds a partial file. The `.tmp` file is removed again if
/// either step fails.
pub fn save(path: &Path, articles: &[Article], format: OutputFormat) -> Result<()> {
    ensure_parent(path)?;

    let tmp = tmp_path(path);
    let file = File::create(&tmp)?;
    let mut writer = BufWriter::new(file);

    let written = write_articles(&mut writer, articles, format)
        .and_then(|_| writer.flush().map_err(Into::into));
    drop(writer);

    if let Err(e) = written {
        let _ = fs::remove_file(&tmp);
        return Err(e);
    }

    if let Err(e) = fs::rename(&tmp, path) {
        let _ = fs::remove_file(&tmp);
        return Err(e.into());
    }
    Ok(())
}

fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(OsString::from).unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
