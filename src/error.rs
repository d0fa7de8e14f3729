//! # 统一错误处理模块
//!
//! 定义 Textops 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// Textops 统一错误类型
#[derive(Error, Debug)]
pub enum TextopsError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 目录错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid directory: {path} (missing or not a directory)")]
    InvalidDirectory { path: String },
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TextopsError>;
