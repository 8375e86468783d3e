use std::collections::HashMap;

/// 將 token 序列聚合成「token -> 出現次數」的頻率表。
///
/// 以字串完全相等做比對，純函數：相同輸入永遠得到相同結果。
pub fn count_tokens<'a, I>(tokens: I) -> HashMap<String, u64>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut counts: HashMap<String, u64> = HashMap::new();
    for token in tokens {
        *counts.entry(token.to_string()).or_insert(0) += 1;
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::tokenizer::Tokenizer;

    #[test]
    fn test_counts_by_exact_match() {
        let counts = count_tokens(["a", "b", "a", "a"]);
        assert_eq!(counts.get("a"), Some(&3));
        assert_eq!(counts.get("b"), Some(&1));
        assert_eq!(counts.len(), 2);
    }

    #[test]
    fn test_case_sensitive_counting() {
        let counts = count_tokens(["Word", "word"]);
        assert_eq!(counts.get("Word"), Some(&1));
        assert_eq!(counts.get("word"), Some(&1));
    }

    #[test]
    fn test_empty_input_gives_empty_map() {
        let counts = count_tokens(std::iter::empty());
        assert!(counts.is_empty());
    }

    #[test]
    fn test_composes_with_tokenizer() {
        let tokenizer = Tokenizer::new("to be or not to be");
        let counts = count_tokens(tokenizer.tokens());
        assert_eq!(counts.get("to"), Some(&2));
        assert_eq!(counts.get("be"), Some(&2));
        assert_eq!(counts.get("or"), Some(&1));
        assert_eq!(counts.get("not"), Some(&1));
    }

    #[test]
    fn test_same_input_same_result() {
        let first = count_tokens(["x", "y", "x"]);
        let second = count_tokens(["x", "y", "x"]);
        assert_eq!(first, second);
    }
}
