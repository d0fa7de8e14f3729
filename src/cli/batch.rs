//! # batch 子命令 CLI 定义
//!
//! 目录批量分析入口：递归收集匹配文件，并行统计，
//! 生成 index/report/merged 三个汇总文件。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/batch.rs`

use clap::Args;
use std::path::PathBuf;

/// batch 子命令参数
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Input directory to scan recursively
    #[arg(default_value = "data")]
    pub input: PathBuf,

    /// Output directory for index.txt, report.txt and merged.txt
    #[arg(short, long, default_value = "out")]
    pub output: PathBuf,

    /// Filename suffix to match during the scan
    #[arg(short, long, default_value = ".txt")]
    pub ext: String,

    /// Number of parallel jobs (0 = auto)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,
}
