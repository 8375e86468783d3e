use std::str::SplitWhitespace;

/// 以空白切分文字的 tokenizer。
///
/// Token 是連續的非空白字元；保留原始大小寫，不做任何正規化。
/// 回傳的序列是 lazy 的，同一個 `Tokenizer` 可以重複走訪。
#[derive(Debug, Clone, Copy)]
pub struct Tokenizer<'a> {
    text: &'a str,
}

impl<'a> Tokenizer<'a> {
    pub fn new(text: &'a str) -> Self {
        Self { text }
    }

    pub fn tokens(&self) -> SplitWhitespace<'a> {
        self.text.split_whitespace()
    }

    pub fn total_count(&self) -> u64 {
        self.tokens().count() as u64
    }
}
