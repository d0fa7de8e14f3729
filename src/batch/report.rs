//! # 汇总输出
//!
//! 由批量统计记录生成三个汇总文件并写盘。
//!
//! ## 输出格式
//! - `index.txt`  : `<path> | <size> o | <YYYY-MM-DD HH:MM:SS>`
//! - `report.txt` : `<basename> → <N> lignes, <M> mots (moy. X.X)`
//! - `merged.txt` : 所有成功读取文件的行拼接，无分隔符
//!
//! 按 index → report → merged 顺序写出，任一写入失败立即返回，
//! 不再尝试后续写入。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `batch/runner.rs` 的 FileRecord
//! - 使用 `text/lines.rs` 写盘

use crate::batch::runner::FileRecord;
use crate::error::Result;
use crate::text::lines;

use std::path::{Path, PathBuf};

/// 三个汇总文件的目标路径
pub struct OutputPaths {
    pub index: PathBuf,
    pub report: PathBuf,
    pub merged: PathBuf,
}

impl OutputPaths {
    /// 在输出目录下使用标准文件名
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            index: dir.join("index.txt"),
            report: dir.join("report.txt"),
            merged: dir.join("merged.txt"),
        }
    }
}

/// index.txt 行
pub fn index_line(record: &FileRecord) -> String {
    format!(
        "{} | {} o | {}",
        record.path.display(),
        record.size_bytes,
        record.modified.format("%Y-%m-%d %H:%M:%S")
    )
}

/// report.txt 行
pub fn report_line(record: &FileRecord) -> String {
    let basename = record.path.file_name().and_then(|n| n.to_str()).unwrap_or("?");
    format!(
        "{} → {} lignes, {} mots (moy. {:.1})",
        basename,
        record.line_count(),
        record.words,
        record.avg_word_len
    )
}

/// 写出三个汇总文件
pub fn write_outputs(records: &[FileRecord], paths: &OutputPaths) -> Result<()> {
    let mut index_lines = Vec::with_capacity(records.len());
    let mut report_lines = Vec::with_capacity(records.len());
    let mut merged_lines = Vec::new();

    for record in records {
        index_lines.push(index_line(record));
        report_lines.push(report_line(record));
        merged_lines.extend_from_slice(&record.lines);
    }

    lines::write_lines(&index_lines, &paths.index)?;
    lines::write_lines(&report_lines, &paths.report)?;
    lines::write_lines(&merged_lines, &paths.merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use tempfile::tempdir;

    fn record(path: &str, size: u64, lines: &[&str], words: usize, avg: f64) -> FileRecord {
        FileRecord {
            path: PathBuf::from(path),
            size_bytes: size,
            modified: chrono::Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 5).unwrap(),
            lines: lines.iter().map(|s| s.to_string()).collect(),
            words,
            avg_word_len: avg,
        }
    }

    #[test]
    fn test_index_line_format() {
        let r = record("data/a.txt", 1234, &["x"], 1, 1.0);
        assert_eq!(index_line(&r), "data/a.txt | 1234 o | 2024-03-01 12:30:05");
    }

    #[test]
    fn test_report_line_format() {
        let r = record("data/sub/a.txt", 10, &["un deux", "trois"], 3, 4.0);
        assert_eq!(report_line(&r), "a.txt → 2 lignes, 3 mots (moy. 4.0)");
    }

    #[test]
    fn test_write_outputs_each_file_exactly_once() {
        let dir = tempdir().unwrap();
        let records = vec![
            record("a.txt", 3, &["aa", "bb"], 2, 2.0),
            record("b.txt", 5, &["cc"], 1, 2.0),
        ];
        let paths = OutputPaths::in_dir(&dir.path().join("out"));

        write_outputs(&records, &paths).unwrap();

        let index = lines::read_lines(&paths.index).unwrap();
        let report = lines::read_lines(&paths.report).unwrap();
        let merged = lines::read_lines(&paths.merged).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(report.len(), 2);
        assert_eq!(merged, vec!["aa", "bb", "cc"]);
        assert_eq!(index.iter().filter(|l| l.starts_with("a.txt")).count(), 1);
        assert_eq!(report.iter().filter(|l| l.starts_with("b.txt")).count(), 1);
    }

    #[test]
    fn test_full_pipeline_scan_run_write() {
        use crate::batch::{process_file, BatchRunner, FileCollector};
        use std::fs;

        let dir = tempdir().unwrap();
        let data = dir.path().join("data");
        fs::create_dir_all(data.join("sub")).unwrap();
        fs::write(data.join("a.txt"), "un deux\ntrois\n").unwrap();
        fs::write(data.join("sub/c.txt"), "quatre\n").unwrap();
        fs::write(data.join("b.log"), "ignore moi\n").unwrap();

        let files = FileCollector::new(data).collect().unwrap();
        assert_eq!(files.len(), 2);

        let result = BatchRunner::new(2).run(files, process_file);
        let paths = OutputPaths::in_dir(&dir.path().join("out"));
        write_outputs(&result.records, &paths).unwrap();

        let index = lines::read_lines(&paths.index).unwrap();
        let report = lines::read_lines(&paths.report).unwrap();
        let merged = lines::read_lines(&paths.merged).unwrap();

        assert_eq!(index.len(), 2);
        assert_eq!(report.len(), 2);
        assert_eq!(merged.len(), 3);
        assert!(merged.contains(&"quatre".to_string()));
        assert_eq!(report.iter().filter(|l| l.starts_with("a.txt")).count(), 1);
        assert_eq!(report.iter().filter(|l| l.starts_with("c.txt")).count(), 1);
        // b.log never reaches any output
        assert!(!merged.contains(&"ignore moi".to_string()));
    }

    #[test]
    fn test_write_outputs_empty_batch_writes_empty_files() {
        let dir = tempdir().unwrap();
        let paths = OutputPaths::in_dir(dir.path());

        write_outputs(&[], &paths).unwrap();

        assert!(lines::read_lines(&paths.index).unwrap().is_empty());
        assert!(lines::read_lines(&paths.merged).unwrap().is_empty());
    }
}
