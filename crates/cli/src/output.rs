//! CSV rendering and report file output.
//!
//! Invariants:
//! - The header row is always written, even when there are no records.
//! - Files are replaced atomically: content goes to a temp file in the
//!   target directory which is then renamed over the destination.

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tempfile::NamedTempFile;

/// Path argument meaning "write to stdout".
pub const STDOUT_PATH: &str = "-";

/// Render records as RFC 4180 CSV under the given header.
pub fn render_csv<T: Serialize>(headers: &[&str], records: &[T]) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(Vec::new());

    writer
        .write_record(headers)
        .context("Failed to write CSV header")?;
    for record in records {
        writer
            .serialize(record)
            .context("Failed to serialize CSV record")?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| anyhow::anyhow!("Failed to flush CSV writer: {}", e.error()))?;
    String::from_utf8(bytes).context("CSV output is not valid UTF-8")
}

/// Write `content` to `path`, or to stdout when `path` is `-`.
pub fn write_output(content: &str, path: &Path) -> io::Result<()> {
    if path.as_os_str() == STDOUT_PATH {
        let mut stdout = io::stdout().lock();
        stdout.write_all(content.as_bytes())?;
        return stdout.flush();
    }
    write_to_file(content, path)
}

/// Write `content` to `path` atomically, creating parent directories.
pub fn write_to_file(content: &str, path: &Path) -> io::Result<()> {
    // A bare file name has an empty parent; use the current directory.
    let parent_dir = match path.parent() {
        Some(dir) if !dir.as_os_str().is_empty() => dir,
        _ => Path::new("."),
    };

    fs::create_dir_all(parent_dir)?;

    let mut temp_file = NamedTempFile::new_in(parent_dir)?;
    temp_file.write_all(content.as_bytes())?;
    temp_file.flush()?;

    temp_file.persist(path).map_err(|e| e.error)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use prisma_client::{Account, REPORT_HEADERS, ReportRow};
    use tempfile::TempDir;

    #[test]
    fn test_render_csv_quotes_fields() {
        let account = Account::new("a1", "Prod, EU", "aws");
        let row = ReportRow::for_account(
            &account,
            "Config",
            "Overall Config",
            "warning",
            "said \"partial\"\nsee docs",
        );

        let csv = render_csv(&REPORT_HEADERS, &[row]).unwrap();

        assert_eq!(
            csv,
            "AccountID,AccountName,CloudType,Category,ServiceContext,Status,Message\n\
             a1,\"Prod, EU\",aws,Config,Overall Config,warning,\"said \"\"partial\"\"\nsee docs\"\n"
        );
    }

    #[test]
    fn test_render_csv_header_only_when_empty() {
        let csv = render_csv::<Account>(&["AccountID", "AccountName", "CloudType"], &[]).unwrap();
        assert_eq!(csv, "AccountID,AccountName,CloudType\n");
    }

    #[test]
    fn test_write_to_file_creates_parent_dirs() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested/deeper/report.csv");

        write_to_file("a,b\n", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "a,b\n");
    }

    #[test]
    fn test_write_to_file_replaces_existing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("report.csv");
        fs::write(&path, "old contents that are longer\n").unwrap();

        write_to_file("new\n", &path).unwrap();

        assert_eq!(fs::read_to_string(&path).unwrap(), "new\n");
    }

    #[test]
    fn test_write_to_file_into_directory_fails() {
        let dir = TempDir::new().unwrap();
        assert!(write_to_file("x", dir.path()).is_err());
    }
}
