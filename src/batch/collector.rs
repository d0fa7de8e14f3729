//! # 文件收集器
//!
//! 递归扫描目录，收集名称以指定后缀结尾的常规文件。
//!
//! ## 功能
//! - 基于 walkdir 的递归遍历
//! - 后缀匹配（默认 `.txt`）
//! - 根目录缺失或非目录时报错，零匹配不视为错误
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `walkdir` 遍历目录

use crate::error::{Result, TextopsError};

use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// 文件收集器
pub struct FileCollector {
    /// 扫描根目录
    root: PathBuf,
    /// 文件名后缀
    suffix: String,
}

impl FileCollector {
    /// 创建新的文件收集器，默认收集 `.txt` 文件
    pub fn new(root: PathBuf) -> Self {
        Self {
            root,
            suffix: ".txt".to_string(),
        }
    }

    /// 设置文件名后缀
    pub fn with_suffix(mut self, suffix: &str) -> Self {
        self.suffix = suffix.to_string();
        self
    }

    /// 递归收集所有匹配的常规文件
    ///
    /// 根目录不存在或不是目录时返回 `InvalidDirectory`；
    /// 目录有效但无匹配文件时返回空列表。
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        if !self.root.is_dir() {
            return Err(TextopsError::InvalidDirectory {
                path: self.root.display().to_string(),
            });
        }

        Ok(WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
            .filter(|e| self.matches_suffix(e.path()))
            .map(|e| e.path().to_path_buf())
            .collect())
    }

    /// 检查文件名是否以配置的后缀结尾
    fn matches_suffix(&self, path: &Path) -> bool {
        match path.file_name().and_then(|n| n.to_str()) {
            Some(name) => name.ends_with(&self.suffix),
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_collect_matches_suffix_recursively() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "alpha\n").unwrap();
        fs::write(dir.path().join("b.log"), "beta\n").unwrap();
        fs::create_dir(dir.path().join("sub")).unwrap();
        fs::write(dir.path().join("sub/c.txt"), "gamma\n").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf()).collect().unwrap();
        let names: BTreeSet<String> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();

        assert_eq!(names, BTreeSet::from(["a.txt".to_string(), "c.txt".to_string()]));
    }

    #[test]
    fn test_collect_empty_directory_is_not_an_error() {
        let dir = tempdir().unwrap();
        let files = FileCollector::new(dir.path().to_path_buf()).collect().unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn test_collect_missing_root_fails() {
        let dir = tempdir().unwrap();
        let err = FileCollector::new(dir.path().join("absent"))
            .collect()
            .unwrap_err();
        assert!(matches!(err, TextopsError::InvalidDirectory { .. }));
    }

    #[test]
    fn test_collect_file_root_fails() {
        let dir = tempdir().unwrap();
        let file = dir.path().join("plain.txt");
        fs::write(&file, "x\n").unwrap();

        let err = FileCollector::new(file).collect().unwrap_err();
        assert!(matches!(err, TextopsError::InvalidDirectory { .. }));
    }

    #[test]
    fn test_collect_with_custom_suffix() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "x\n").unwrap();
        fs::write(dir.path().join("b.log"), "y\n").unwrap();

        let files = FileCollector::new(dir.path().to_path_buf())
            .with_suffix(".log")
            .collect()
            .unwrap();
        assert_eq!(files.len(), 1);
        assert!(files[0].ends_with("b.log"));
    }
}
