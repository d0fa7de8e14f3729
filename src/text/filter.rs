//! # 行过滤与片段提取
//!
//! 关键词过滤（保留或剔除匹配行）以及 head/tail 提取。
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs` 使用

/// 按关键词过滤行（大小写不敏感）
///
/// `keep` 为 true 时保留包含关键词的行，否则保留不包含的行。
pub fn filter_lines(lines: &[String], keyword: &str, keep: bool) -> Vec<String> {
    let keyword = keyword.to_lowercase();
    lines
        .iter()
        .filter(|line| line.to_lowercase().contains(&keyword) == keep)
        .cloned()
        .collect()
}

/// 取前 n 行，n 超出时取全部
pub fn head(lines: &[String], n: usize) -> &[String] {
    &lines[..n.min(lines.len())]
}

/// 取后 n 行，n 超出时取全部
pub fn tail(lines: &[String], n: usize) -> &[String] {
    &lines[lines.len().saturating_sub(n)..]
}
