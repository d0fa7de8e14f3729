//! # analyze 命令实现
//!
//! 单文件分析：打印统计信息，按需生成过滤与 head/tail 产物。
//!
//! ## 功能
//! - 文件元信息（大小、修改时间）
//! - 行数、词数与平均词长
//! - 关键词过滤对（filtered.txt / filtered_not.txt）
//! - head/tail 提取（head.txt / tail.txt）
//!
//! ## 依赖关系
//! - 使用 `cli/analyze.rs` 定义的 AnalyzeArgs
//! - 使用 `text/` 读行、统计与过滤
//! - 使用 `utils/output.rs`

use crate::cli::analyze::AnalyzeArgs;
use crate::error::{Result, TextopsError};
use crate::text::{filter, lines, stats};
use crate::utils::output;

use chrono::{DateTime, Local};
use std::fs;

/// 执行 analyze 命令
pub fn execute(args: AnalyzeArgs) -> Result<()> {
    output::print_header("Text File Analysis");

    if !args.input.is_file() {
        return Err(TextopsError::FileNotFound {
            path: args.input.display().to_string(),
        });
    }

    let file_lines = lines::read_lines(&args.input)?;
    let meta = fs::metadata(&args.input).map_err(|e| TextopsError::FileReadError {
        path: args.input.display().to_string(),
        source: e,
    })?;
    let word_stats = stats::word_stats(&file_lines);

    output::print_info(&format!("File: {}", args.input.display()));
    output::print_info(&format!("Size: {} bytes", meta.len()));
    if let Ok(modified) = meta.modified() {
        let modified = DateTime::<Local>::from(modified);
        output::print_info(&format!(
            "Modified: {}",
            modified.format("%Y-%m-%d %H:%M:%S")
        ));
    }
    output::print_info(&format!("Lines: {}", file_lines.len()));
    output::print_info(&format!(
        "Words: {} (avg length {:.1})",
        word_stats.words, word_stats.avg_len
    ));

    if let Some(ref keyword) = args.keyword {
        write_filter_pair(&file_lines, keyword, &args)?;
    }

    if let Some(n) = args.head_tail {
        write_head_tail(&file_lines, n, &args)?;
    }

    Ok(())
}

/// 写出关键词过滤对
fn write_filter_pair(file_lines: &[String], keyword: &str, args: &AnalyzeArgs) -> Result<()> {
    let kept = filter::filter_lines(file_lines, keyword, true);
    let rejected = filter::filter_lines(file_lines, keyword, false);

    let kept_path = args.output.join("filtered.txt");
    let rejected_path = args.output.join("filtered_not.txt");

    lines::write_lines(&kept, &kept_path)?;
    lines::write_lines(&rejected, &rejected_path)?;

    output::print_success(&format!(
        "{} lines matching '{}' -> {}",
        kept.len(),
        keyword,
        kept_path.display()
    ));
    output::print_success(&format!(
        "{} remaining lines -> {}",
        rejected.len(),
        rejected_path.display()
    ));

    Ok(())
}

/// 写出 head/tail 片段
fn write_head_tail(file_lines: &[String], n: usize, args: &AnalyzeArgs) -> Result<()> {
    let head_path = args.output.join("head.txt");
    let tail_path = args.output.join("tail.txt");

    lines::write_lines(filter::head(file_lines, n), &head_path)?;
    lines::write_lines(filter::tail(file_lines, n), &tail_path)?;

    output::print_success(&format!(
        "First/last {} lines -> {} / {}",
        n,
        head_path.display(),
        tail_path.display()
    ));

    Ok(())
}
