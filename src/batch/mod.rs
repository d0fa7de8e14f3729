//! # 批量处理模块
//!
//! 提供统一的文件批量统计能力。
//!
//! ## 功能
//! - 递归收集匹配文件列表
//! - 并行统计（stat、行数、词频）
//! - join 后生成 index/report/merged 汇总输出
//! - 进度反馈与跳过文件记录
//!
//! ## 依赖关系
//! - 被 `commands/batch.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod collector;
pub mod report;
pub mod runner;

pub use collector::FileCollector;
pub use report::OutputPaths;
pub use runner::{process_file, BatchResult, BatchRunner, FileOutcome, FileRecord};
