//! # 批量执行器
//!
//! 并行执行批量文件统计任务。
//!
//! ## 功能
//! - 基于 rayon 的有界线程池并行迭代
//! - 进度条显示
//! - 逐文件失败跳过，路径与原因记入汇总
//!
//! ## 并发模型
//! 每个工作单元产出一个 `FileOutcome`，由 `collect()` 在
//! 隐式 join 屏障后按输入顺序汇集，无共享可变状态。
//! 无取消与超时机制，文件系统调用挂起会阻塞整个批次。
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 调用
//! - 使用 `text/` 读行与统计
//! - 使用 `utils/progress.rs` 创建进度条

use crate::text::{lines, stats};
use crate::utils::progress;

use chrono::{DateTime, Local};
use rayon::prelude::*;
use std::fs;
use std::path::PathBuf;

/// 单个文件的统计记录
#[derive(Debug, Clone)]
pub struct FileRecord {
    /// 文件路径
    pub path: PathBuf,
    /// 文件大小（字节）
    pub size_bytes: u64,
    /// 修改时间
    pub modified: DateTime<Local>,
    /// 文件全部行内容
    pub lines: Vec<String>,
    /// 计入的词数
    pub words: usize,
    /// 平均词长（字符数）
    pub avg_word_len: f64,
}

impl FileRecord {
    /// 行数
    pub fn line_count(&self) -> usize {
        self.lines.len()
    }
}

/// 单个文件处理结果
#[derive(Debug, Clone)]
pub enum FileOutcome {
    /// 处理成功
    Processed(FileRecord),
    /// 跳过
    Skipped(String, String), // (文件路径, 原因)
}

/// 批量处理结果
#[derive(Debug, Default)]
pub struct BatchResult {
    /// 成功处理的记录，按输入顺序
    pub records: Vec<FileRecord>,
    /// 被跳过的文件及原因
    pub skipped: Vec<(String, String)>,
}

impl BatchResult {
    /// 合并处理结果
    pub fn merge(&mut self, outcome: FileOutcome) {
        match outcome {
            FileOutcome::Processed(record) => self.records.push(record),
            FileOutcome::Skipped(path, reason) => self.skipped.push((path, reason)),
        }
    }

    /// 成功数量
    pub fn processed(&self) -> usize {
        self.records.len()
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.records.len() + self.skipped.len()
    }
}

/// 批量执行器
pub struct BatchRunner {
    /// 并行作业数
    jobs: usize,
}

impl BatchRunner {
    /// 创建新的批量执行器，0 表示使用逻辑 CPU 数
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self { jobs }
    }

    /// 并行处理文件列表
    pub fn run<F>(&self, files: Vec<PathBuf>, processor: F) -> BatchResult
    where
        F: Fn(&PathBuf) -> FileOutcome + Sync + Send,
    {
        let pb = progress::create_progress_bar(files.len() as u64, "Analyzing");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .unwrap();

        let outcomes: Vec<FileOutcome> = pool.install(|| {
            files
                .par_iter()
                .map(|file| {
                    let outcome = processor(file);
                    pb.inc(1);
                    outcome
                })
                .collect()
        });

        pb.finish_and_clear();

        // 汇总结果
        let mut result = BatchResult::default();
        for outcome in outcomes {
            result.merge(outcome);
        }

        result
    }
}

/// 处理单个文件：stat → 读行 → 词频统计
///
/// 任一步失败时返回 `Skipped`，不影响批次中的其余文件。
pub fn process_file(path: &PathBuf) -> FileOutcome {
    let display = path.display().to_string();

    let meta = match fs::metadata(path) {
        Ok(m) => m,
        Err(e) => return FileOutcome::Skipped(display, e.to_string()),
    };

    let modified = match meta.modified() {
        Ok(t) => DateTime::<Local>::from(t),
        Err(e) => return FileOutcome::Skipped(display, e.to_string()),
    };

    let file_lines = match lines::read_lines(path) {
        Ok(l) => l,
        Err(e) => return FileOutcome::Skipped(display, e.to_string()),
    };

    let word_stats = stats::word_stats(&file_lines);

    FileOutcome::Processed(FileRecord {
        path: path.clone(),
        size_bytes: meta.len(),
        modified,
        words: word_stats.words,
        avg_word_len: word_stats.avg_len,
        lines: file_lines,
    })
}
