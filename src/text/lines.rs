//! # 行级文件读写
//!
//! 将文本文件读取为行序列，或把行序列写回文件。
//!
//! ## 约定
//! - 读取时末尾换行符不会产生空行条目
//! - 写入时每行追加恰好一个换行符，父目录按需创建
//! - 写入失败时可能留下部分内容（无原子重命名保证）
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/report.rs` 使用

use crate::error::{Result, TextopsError};

use std::fs::{self, File};
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

/// 读取文件为行序列
pub fn read_lines(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|e| TextopsError::FileReadError {
        path: path.display().to_string(),
        source: e,
    })?;

    BufReader::new(file)
        .lines()
        .collect::<std::io::Result<Vec<String>>>()
        .map_err(|e| TextopsError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })
}

/// 将行序列写入文件，按需创建父目录
pub fn write_lines(lines: &[String], path: &Path) -> Result<()> {
    let map_write_err = |e: std::io::Error| TextopsError::FileWriteError {
        path: path.display().to_string(),
        source: e,
    };

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent).map_err(map_write_err)?;
        }
    }

    let file = File::create(path).map_err(map_write_err)?;
    let mut writer = BufWriter::new(file);

    for line in lines {
        writeln!(writer, "{}", line).map_err(map_write_err)?;
    }

    writer.flush().map_err(map_write_err)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_write_read_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("round_trip.txt");
        let content = lines(&["premiere ligne", "deuxieme ligne", "troisieme"]);

        write_lines(&content, &path).unwrap();
        assert_eq!(read_lines(&path).unwrap(), content);
    }

    #[test]
    fn test_final_newline_produces_no_empty_entry() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trailing.txt");
        fs::write(&path, "a\nb\n").unwrap();

        assert_eq!(read_lines(&path).unwrap(), lines(&["a", "b"]));
    }

    #[test]
    fn test_write_creates_parent_directories() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/deeper/out.txt");

        write_lines(&lines(&["x"]), &path).unwrap();
        assert_eq!(read_lines(&path).unwrap(), lines(&["x"]));
    }

    #[test]
    fn test_read_missing_file_fails() {
        let dir = tempdir().unwrap();
        let err = read_lines(&dir.path().join("absent.txt")).unwrap_err();
        assert!(matches!(err, TextopsError::FileReadError { .. }));
    }

    #[test]
    fn test_write_truncates_existing_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("overwrite.txt");

        write_lines(&lines(&["old", "content", "here"]), &path).unwrap();
        write_lines(&lines(&["new"]), &path).unwrap();
        assert_eq!(read_lines(&path).unwrap(), lines(&["new"]));
    }
}
