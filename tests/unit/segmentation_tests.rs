/*!
 * Tests for word, sentence and paragraph segmentation
 */

use std::sync::Arc;

use seoscore::language_utils::ContentLanguage;
use seoscore::segmentation::{
    DictionarySegmenter, Segmenter, SegmenterRegistry, WhitespaceSegmenter, count_terminals,
    split_paragraphs, split_sentences,
};

#[test]
fn test_splitParagraphs_withCrlfAndBlankLines_shouldDropEmptyParagraphs() {
    let text = "First line\r\nstill first\r\n\r\n\n  \nSecond\n\n\n";

    let paragraphs = split_paragraphs(text);

    assert_eq!(paragraphs, vec!["First line\nstill first", "Second"]);
}

#[test]
fn test_splitSentences_withMixedTerminals_shouldSplitOnEach() {
    let sentences = split_sentences("Hello there! Is it new? Yes. 很好。真的！");

    assert_eq!(sentences, vec!["Hello there", "Is it new", "Yes", "很好", "真的"]);
}

#[test]
fn test_countTerminals_shouldCountFullWidthMarks() {
    assert_eq!(count_terminals("Wow!! Really? 好。"), 4);
    assert_eq!(count_terminals("no terminals here"), 0);
}

#[test]
fn test_whitespaceSegmenter_segment_shouldFillAllParts() {
    let segmentation = WhitespaceSegmenter::new().segment("## Title\n\nOne two. Three!");

    assert_eq!(segmentation.words, vec!["Title", "One", "two", "Three"]);
    assert_eq!(segmentation.paragraphs.len(), 2);
    assert_eq!(segmentation.sentences.len(), 2);
}

#[test]
fn test_dictionarySegmenter_shouldPreferLongestWord() {
    let segmenter = DictionarySegmenter::new();

    let words = segmenter.words("搜索引擎优化，蓝牙耳机");

    assert_eq!(words, vec!["搜索引擎", "优化", "蓝牙耳机"]);
}

#[test]
fn test_dictionarySegmenter_withCustomWords_shouldUseThem() {
    let mut segmenter = DictionarySegmenter::with_words(["跑步"]);
    segmenter.extend(["跑步鞋", " "]);

    assert_eq!(segmenter.lexicon_len(), 2);
    assert_eq!(segmenter.words("跑步鞋好"), vec!["跑步鞋", "好"]);
}

#[test]
fn test_dictionarySegmenter_withEmbeddedLatin_shouldKeepRunsTogether() {
    let words = DictionarySegmenter::new().words("iPhone15手机");

    assert_eq!(words, vec!["iPhone15", "手机"]);
}

#[test]
fn test_registry_shouldSegmentByLanguage() {
    let registry = SegmenterRegistry::new();
    let text = "无线耳机 音质";

    let spaced = registry.segment(text, ContentLanguage::SpaceDelimited);
    let dictionary = registry.segment(text, ContentLanguage::GenericSegmented);

    assert_eq!(spaced.words, vec!["无线耳机", "音质"]);
    assert_eq!(dictionary.words, vec!["无线耳机", "音质"]);
    assert_eq!(spaced.paragraphs, dictionary.paragraphs);
}

#[test]
fn test_registry_withRegisteredStrategy_shouldUseIt() {
    let mut registry = SegmenterRegistry::empty();
    registry.register(
        ContentLanguage::GenericSegmented,
        Arc::new(DictionarySegmenter::with_words(["降噪耳机"])),
    );

    let words = registry
        .segment("降噪耳机", ContentLanguage::GenericSegmented)
        .words;

    assert_eq!(words, vec!["降噪耳机"]);
    assert_eq!(registry.get(ContentLanguage::SpaceDelimited).name(), "whitespace");
}
