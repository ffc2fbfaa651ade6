//! 파일시스템 기반 소스 리더 어댑터.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::application::ports::SourceReader;

pub struct FsSourceReader;

impl SourceReader for FsSourceReader {
    fn read_lines(&self, path: &Path) -> Result<Vec<String>> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read source file {}", path.display()))?;
        Ok(raw.lines().map(str::to_string).collect())
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn reads_lines_in_file_order() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".env.local");
        fs::write(&path, "# header\r\nSTRIPE_KEY=sk\n\nSUPABASE_URL=https://db\n").unwrap();

        let lines = FsSourceReader.read_lines(&path).unwrap();

        assert_eq!(lines, ["# header", "STRIPE_KEY=sk", "", "SUPABASE_URL=https://db"]);
    }

    #[test]
    fn missing_file_keeps_not_found_kind() {
        let dir = tempfile::tempdir().unwrap();

        let err = FsSourceReader
            .read_lines(&dir.path().join(".env.local"))
            .unwrap_err();

        let kind = err.downcast_ref::<io::Error>().map(io::Error::kind);
        assert_eq!(kind, Some(io::ErrorKind::NotFound));
    }
}
