use crate::core::frequency::count_tokens;
use crate::core::tokenizer::Tokenizer;
use crate::domain::model::TokenFrequency;
use crate::utils::error::Result;
use crate::utils::validation::validate_top_n;
use std::collections::HashMap;

/// 從頻率表取出前 n 名：次數遞減，同次數依 token 字典序遞增。
///
/// n 為 0 回傳空序列；n 超過 distinct token 數則回傳全部。
pub fn top_n(counts: &HashMap<String, u64>, n: usize) -> Vec<TokenFrequency> {
    let mut entries: Vec<TokenFrequency> = counts
        .iter()
        .map(|(token, count)| TokenFrequency::new(token.clone(), *count))
        .collect();

    entries.sort_unstable_by(|a, b| b.count.cmp(&a.count).then_with(|| a.token.cmp(&b.token)));
    entries.truncate(n);
    entries
}

/// 驗證 n 之後對既有頻率表做排名
pub fn rank_counts(counts: &HashMap<String, u64>, n: i64) -> Result<Vec<TokenFrequency>> {
    validate_top_n("top_n", n)?;
    Ok(top_n(counts, n as usize))
}

/// 對原始文字執行完整的 tokenize -> count -> rank 流程。
///
/// 唯一的錯誤條件是 n 為負值；包含空字串在內的任何文字都是合法輸入。
pub fn rank(text: &str, n: i64) -> Result<Vec<TokenFrequency>> {
    let counts = count_tokens(Tokenizer::new(text).tokens());
    rank_counts(&counts, n)
}
