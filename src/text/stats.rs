//! # 词频统计
//!
//! 对一组文本行做词数与平均词长统计。
//!
//! ## 统计规则
//! - 按空白字符切分出词
//! - 首字符为十进制数字的词不计入（粗略的"跳过数字"启发式，
//!   "3abc" 被排除而 "abc3" 被保留）
//! - 平均词长按字符数计算，而非字节数
//!
//! ## 依赖关系
//! - 被 `commands/analyze.rs` 与 `batch/runner.rs` 使用

/// 词频统计结果
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WordStats {
    /// 计入的词数
    pub words: usize,
    /// 平均词长（字符数），无词时为 0
    pub avg_len: f64,
}

/// 统计行序列中的词数与平均词长
pub fn word_stats(lines: &[String]) -> WordStats {
    let mut count = 0usize;
    let mut total_len = 0usize;

    for line in lines {
        for token in line.split_whitespace() {
            // 空词按排除处理，首字符为数字的词跳过
            match token.chars().next() {
                Some(c) if !c.is_ascii_digit() => {
                    count += 1;
                    total_len += token.chars().count();
                }
                _ => {}
            }
        }
    }

    if count == 0 {
        return WordStats {
            words: 0,
            avg_len: 0.0,
        };
    }

    WordStats {
        words: count,
        avg_len: total_len as f64 / count as f64,
    }
}
