//! # analyze 子命令 CLI 定义
//!
//! 单文件分析入口：打印文件统计信息，可选地生成
//! 关键词过滤结果与 head/tail 片段。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/analyze.rs`

use clap::Args;
use std::path::PathBuf;

/// analyze 子命令参数
#[derive(Args, Debug)]
pub struct AnalyzeArgs {
    /// Input text file
    #[arg(default_value = "data/input.txt")]
    pub input: PathBuf,

    /// Output directory for generated artifacts
    #[arg(short, long, default_value = "out")]
    pub output: PathBuf,

    /// Keyword filter: writes filtered.txt (matching lines) and
    /// filtered_not.txt (the rest); match is case-insensitive
    #[arg(short, long)]
    pub keyword: Option<String>,

    /// Extract the first/last N lines into head.txt and tail.txt
    #[arg(short = 'n', long, value_name = "N")]
    pub head_tail: Option<usize>,
}
