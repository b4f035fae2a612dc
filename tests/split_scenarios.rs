//! Scenario tests for each segmentation strategy.

use std::sync::Once;

use theatre_text::node::{chars, group_count};
use theatre_text::render::outline;
use theatre_text::{
    CharNode, CharPath, Container, Node, SplitMode, SplitOptions, SplitUnit, WordGroup, segment,
    split,
};
use tracing::{debug, info};

fn setup_test_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::DEBUG)
            .with_test_writer()
            .try_init();
    });
}

fn segment_lang(text: &str, lang: &str) -> (Container, Vec<CharPath>) {
    setup_test_logging();
    info!(text, lang, "segmenting");
    let mut container = Container::with_font_size("24px");
    let paths = segment(text, lang, &mut container);
    debug!(nodes = ?container.children(), "segmentation result");
    (container, paths)
}

macro_rules! assert_outline {
    ($name:ident, $lang:expr, $input:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let (container, _) = segment_lang($input, $lang);
            assert_eq!(outline(container.children()), $expected);
        }
    };
}

// ============================================================================
// Latin
// ============================================================================

#[test]
fn latin_hello_world_has_two_words_and_a_space() {
    let (container, paths) = segment_lang("hello world", "en");
    let children = container.children();
    assert_eq!(children.len(), 3);
    match children {
        [Node::Group(first), Node::Char(space), Node::Group(second)] => {
            assert_eq!(first.len(), 5);
            assert_eq!(second.len(), 5);
            assert!(space.is_space());
            assert_eq!(space.width(), Some(6.0));
        }
        other => panic!("unexpected structure: {other:?}"),
    }
    assert_eq!(paths.len(), 11);
}

assert_outline!(
    latin_newline_closes_word,
    "en",
    "Hi\nthere",
    "group \"Hi\"\nbreak\ngroup \"there\""
);
assert_outline!(
    unknown_language_falls_back_to_latin,
    "xx",
    "a b",
    "group \"a\"\nspace\ngroup \"b\""
);
assert_outline!(
    region_tag_is_not_japanese,
    "ja-JP",
    "あ）",
    "group \"あ）\""
);

// ============================================================================
// Ungrouped
// ============================================================================

#[test]
fn ungrouped_line_break() {
    let (container, paths) = segment_lang("a\nb", "zh");
    assert_eq!(
        container.children(),
        &[
            Node::Char(CharNode::glyph("a", 24.0)),
            Node::LineBreak,
            Node::Char(CharNode::glyph("b", 24.0)),
        ]
    );
    assert_eq!(paths, vec![CharPath::root(0), CharPath::root(2)]);
}

assert_outline!(
    thai_is_ungrouped,
    "th",
    "ไทย กก",
    "char \"ไ\"\nchar \"ท\"\nchar \"ย\"\nspace\nchar \"ก\"\nchar \"ก\""
);

// ============================================================================
// Kinsoku
// ============================================================================

#[test]
fn kinsoku_closing_bracket_groups_with_previous() {
    let (container, _) = segment_lang("あ）", "ja");
    assert_eq!(
        container.children(),
        &[Node::Group(WordGroup {
            chars: vec![CharNode::glyph("あ", 24.0), CharNode::glyph("）", 24.0)],
        })]
    );
}

#[test]
fn kinsoku_digits_share_a_group() {
    let (container, _) = segment_lang("12", "ja");
    assert_eq!(group_count(container.children()), 1);
    assert_eq!(container.children().len(), 1);
}

assert_outline!(
    chinese_code_cn_uses_kinsoku,
    "cn",
    "你好。",
    "char \"你\"\ngroup \"好。\""
);
assert_outline!(
    kinsoku_quote_sentence,
    "ja",
    "「はい」、そう。",
    "group \"「は\"\ngroup \"い」、\"\nchar \"そ\"\ngroup \"う。\""
);
assert_outline!(
    kinsoku_small_kana_does_not_start_line,
    "ja",
    "ちょっと",
    "group \"ちょっ\"\nchar \"と\""
);
assert_outline!(
    kinsoku_long_number,
    "ja",
    "3000円",
    "group \"3000\"\nchar \"円\""
);

// ============================================================================
// Korean
// ============================================================================

assert_outline!(
    korean_plain_text_is_ungrouped,
    "ko",
    "안녕 하세요",
    "char \"안\"\nchar \"녕\"\nspace\nchar \"하\"\nchar \"세\"\nchar \"요\""
);
assert_outline!(
    korean_punctuation_binds,
    "ko",
    "네, 좋아요!",
    "group \"네,\"\nspace\nchar \"좋\"\nchar \"아\"\ngroup \"요!\""
);

#[test]
fn korean_space_inside_open_group() {
    let (container, _) = segment_lang("$ 5", "ko");
    match container.children() {
        [Node::Group(group), Node::Char(five)] => {
            assert_eq!(group.text(), "$ ");
            assert!(group.chars[1].is_space());
            assert_eq!(five.text, "5");
        }
        other => panic!("unexpected structure: {other:?}"),
    }
}

// ============================================================================
// Edge cases
// ============================================================================

#[test]
fn empty_input_appends_nothing() {
    for lang in ["en", "ja", "ko", "zh"] {
        let (container, paths) = segment_lang("", lang);
        assert!(paths.is_empty());
        assert!(container.children().is_empty());
    }
}

#[test]
fn missing_font_size_gives_zero_height() {
    let mut container = Container::new();
    let paths = segment("a b", "en", &mut container);
    for path in paths {
        assert_eq!(container.char_at(path).map(|c| c.height), Some(0.0));
    }
}

#[test]
fn repeated_segmentation_is_identical() {
    for lang in ["en", "ja", "ko", "zh"] {
        let (first, a) = segment_lang("「12 ab」\n…… 한국", lang);
        let (second, b) = segment_lang("「12 ab」\n…… 한국", lang);
        assert_eq!(a, b);
        assert_eq!(first, second);
    }
}

#[test]
fn astral_characters_are_single_nodes() {
    let nodes = split("😀😀", &SplitOptions::new(SplitMode::Ungrouped));
    assert_eq!(chars(&nodes).count(), 2);
}

#[test]
fn grapheme_unit_keeps_family_emoji_whole() {
    let family = "👨\u{200d}👩\u{200d}👧";
    let by_char = split(family, &SplitOptions::new(SplitMode::Latin));
    let by_cluster = split(
        family,
        &SplitOptions::new(SplitMode::Latin).with_unit(SplitUnit::Grapheme),
    );
    assert_eq!(chars(&by_char).count(), 5);
    assert_eq!(chars(&by_cluster).count(), 1);
}
