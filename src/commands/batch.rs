//! # batch 命令实现
//!
//! 目录批量分析：收集文件、并行统计、写出汇总输出。
//!
//! ## 功能
//! - 递归收集匹配后缀的文件
//! - 有界线程池并行统计
//! - join 后写出 index/report/merged
//! - 汇总统计与跳过文件列表
//!
//! ## 依赖关系
//! - 使用 `cli/batch.rs` 定义的 BatchArgs
//! - 使用 `batch/` 模块进行收集、并行处理与输出
//! - 使用 `utils/output.rs`

use crate::batch::{process_file, BatchRunner, FileCollector, FileRecord, OutputPaths};
use crate::batch::report;
use crate::cli::batch::BatchArgs;
use crate::error::Result;
use crate::utils::output;

/// 执行 batch 命令
pub fn execute(args: BatchArgs) -> Result<()> {
    output::print_header("Batch Directory Analysis");
    output::print_info(&format!(
        "Scanning '{}' for '{}' files",
        args.input.display(),
        args.ext
    ));

    // 收集文件（目录无效时在此报错，零匹配不是错误）
    let files = FileCollector::new(args.input.clone())
        .with_suffix(&args.ext)
        .collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No '{}' files found in '{}'",
            args.ext,
            args.input.display()
        ));
        return Ok(());
    }

    output::print_info(&format!("Found {} files", files.len()));

    // 并行统计
    let runner = BatchRunner::new(args.jobs);
    let result = runner.run(files, process_file);

    // 写出汇总（index → report → merged，失败即止）
    let paths = OutputPaths::in_dir(&args.output);
    report::write_outputs(&result.records, &paths)?;

    // 打印统计
    output::print_separator();
    output::print_success(&format!(
        "Batch complete: {} processed, {} skipped -> results in '{}'",
        result.processed(),
        result.skipped.len(),
        args.output.display()
    ));

    if !result.skipped.is_empty() {
        output::print_warning("Skipped files:");
        for (path, reason) in result.skipped.iter().take(10) {
            output::print_error(&format!("  {}: {}", path, reason));
        }
        if result.skipped.len() > 10 {
            output::print_warning(&format!("  ... and {} more", result.skipped.len() - 10));
        }
    }

    print_report_table(&result.records, 10);

    Ok(())
}

/// 打印报告摘要表格
fn print_report_table(records: &[FileRecord], count: usize) {
    use tabled::{Table, Tabled};

    #[derive(Tabled)]
    struct ReportRow {
        #[tabled(rename = "File")]
        file: String,
        #[tabled(rename = "Lines")]
        lines: String,
        #[tabled(rename = "Words")]
        words: String,
        #[tabled(rename = "Avg. length")]
        avg: String,
    }

    let rows: Vec<ReportRow> = records
        .iter()
        .take(count)
        .map(|r| ReportRow {
            file: r
                .path
                .file_name()
                .and_then(|n| n.to_str())
                .unwrap_or("?")
                .to_string(),
            lines: format!("{}", r.line_count()),
            words: format!("{}", r.words),
            avg: format!("{:.1}", r.avg_word_len),
        })
        .collect();

    if !rows.is_empty() {
        output::print_header(&format!(
            "Report Preview ({} of {} files)",
            rows.len(),
            records.len()
        ));
        let table = Table::new(&rows);
        println!("{}", table);
    }
}
