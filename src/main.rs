//! # Textops - 文本文件批量分析工具箱
//!
//! 将零散的文本统计/整理脚本用 Rust 重构，统一成单一可执行文件。
//!
//! ## 子命令
//! - `analyze` - 单文件分析（统计信息、关键词过滤、head/tail 提取）
//! - `batch`   - 目录批量分析（并行统计，输出 index/report/merged）
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (文件收集与并行处理)
//!   │     └── text/      (行读写、词频统计、过滤)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod text;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
