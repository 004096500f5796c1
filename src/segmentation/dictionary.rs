/*!
 * Dictionary-based word segmentation for unsegmented scripts.
 *
 * Uses forward maximum matching: at each position the longest lexicon
 * entry wins, and characters with no lexicon match become one-character
 * words. Runs of ASCII letters and digits embedded in the text are kept
 * together as single words.
 */

use std::collections::HashSet;

use super::{Segmenter, is_punctuation};

/// Built-in lexicon of common words found in Chinese marketing copy
const DEFAULT_LEXICON: &[&str] = &[
    "我们", "你们", "他们", "这个", "那个", "什么", "因为", "所以", "但是", "如果",
    "可以", "没有", "已经", "现在", "今天", "时候", "问题", "方法", "需要", "选择",
    "产品", "质量", "价格", "优惠", "折扣", "免费", "包邮", "购买", "用户", "客户",
    "服务", "品牌", "官方", "正品", "推荐", "最新", "热门", "新款", "限时", "活动",
    "手机", "电脑", "耳机", "无线", "蓝牙", "降噪", "音质", "续航", "充电", "设计",
    "舒适", "轻便", "时尚", "经典", "专业", "高效", "安全", "健康", "天然", "环保",
    "搜索", "引擎", "优化", "关键词", "内容", "文章", "网站", "页面", "标题", "描述",
    "营销", "流量", "排名", "用户体验", "搜索引擎", "无线耳机", "蓝牙耳机",
];

/// Forward maximum matching segmenter
#[derive(Debug, Clone)]
pub struct DictionarySegmenter {
    lexicon: HashSet<String>,
    max_word_chars: usize,
}

impl DictionarySegmenter {
    /// Create a segmenter with the built-in lexicon
    pub fn new() -> Self {
        Self::with_words(DEFAULT_LEXICON.iter().copied())
    }

    /// Create a segmenter from a custom word list
    pub fn with_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut segmenter = Self {
            lexicon: HashSet::new(),
            max_word_chars: 1,
        };
        segmenter.extend(words);
        segmenter
    }

    /// Add words to the lexicon
    pub fn extend<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            self.max_word_chars = self.max_word_chars.max(word.chars().count());
            self.lexicon.insert(word.to_string());
        }
    }

    /// Number of lexicon entries
    pub fn lexicon_len(&self) -> usize {
        self.lexicon.len()
    }

    /// Longest lexicon entry starting at `start`, in chars
    fn longest_match(&self, chars: &[char], start: usize) -> usize {
        let limit = self.max_word_chars.min(chars.len() - start);
        for len in (2..=limit).rev() {
            let candidate: String = chars[start..start + len].iter().collect();
            if self.lexicon.contains(&candidate) {
                return len;
            }
        }
        1
    }
}

impl Default for DictionarySegmenter {
    fn default() -> Self {
        Self::new()
    }
}

impl Segmenter for DictionarySegmenter {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn words(&self, text: &str) -> Vec<String> {
        let chars: Vec<char> = text.chars().collect();
        let mut words = Vec::new();
        let mut pos = 0;

        while pos < chars.len() {
            let c = chars[pos];

            if c.is_whitespace() || is_punctuation(c) {
                pos += 1;
                continue;
            }

            if c.is_ascii_alphanumeric() {
                let start = pos;
                while pos < chars.len() && chars[pos].is_ascii_alphanumeric() {
                    pos += 1;
                }
                words.push(chars[start..pos].iter().collect());
                continue;
            }

            let len = self.longest_match(&chars, pos);
            words.push(chars[pos..pos + len].iter().collect());
            pos += len;
        }

        words
    }
}
