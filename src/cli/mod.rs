//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `analyze`: 单文件分析（统计、过滤、head/tail）
//! - `batch`: 目录批量分析（并行统计与汇总输出）
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: analyze, batch

pub mod analyze;
pub mod batch;

use clap::{Parser, Subcommand};

/// Textops - 文本文件批量分析工具箱
#[derive(Parser)]
#[command(name = "textops")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(about = "A batch text file analysis toolkit", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a single text file (stats, keyword filter, head/tail)
    Analyze(analyze::AnalyzeArgs),

    /// Analyze every matching file in a directory in parallel
    Batch(batch::BatchArgs),
}
