//! Line-breaking character classes.
//!
//! Each set compiles down to range checks through `matches!`, so a
//! classification is a constant-time lookup per character.

use bitflags::bitflags;

bitflags! {
    /// Line-breaking role of a character.
    #[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
    pub struct CharClass: u8 {
        /// Must not start a line (closing punctuation, small kana, ...).
        const NO_LINE_START = 0x01;
        /// Must not end a line (opening punctuation).
        const NO_LINE_END   = 0x02;
        /// Must not be split when repeated (ellipses, dashes).
        const INSEPARABLE   = 0x04;
        /// ASCII digit; consecutive digits stay together.
        const DIGIT         = 0x08;
    }
}

/// Which rule table to classify with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Ruleset {
    /// Kinsoku Shori for Japanese and Chinese.
    Kinsoku,
    /// Korean line breaking (KS X ISO/IEC 26300).
    Korean,
}

impl Ruleset {
    /// Classify a character under this rule table.
    #[must_use]
    pub fn classify(self, ch: char) -> CharClass {
        let mut class = CharClass::empty();
        let (head, tail, split) = match self {
            Self::Kinsoku => (
                is_kinsoku_no_start(ch),
                is_kinsoku_no_end(ch),
                is_kinsoku_inseparable(ch),
            ),
            Self::Korean => (is_korean_no_start(ch), is_korean_no_end(ch), false),
        };
        if head {
            class |= CharClass::NO_LINE_START;
        }
        if tail {
            class |= CharClass::NO_LINE_END;
        }
        if split {
            class |= CharClass::INSEPARABLE;
        }
        if ch.is_ascii_digit() {
            class |= CharClass::DIGIT;
        }
        class
    }
}

fn is_kinsoku_no_start(ch: char) -> bool {
    matches!(
        ch,
        '!' | ')'
            | ','
            | '.'
            | ':'
            | ';'
            | '?'
            | ']'
            | '}'
            | '\''
            | '"'
            | '¢'
            | '°'
            | '·'
            | '’'
            | '”'
            | '†'
            | '‡'
            | '›'
            | '»'
            | '‰'
            | '′'
            | '″'
            | '℃'
            | '∶'
            | '、'
            | '。'
            | '〃'
            | '〆'
            | '々'
            | '〻'
            | '〉'
            | '》'
            | '」'
            | '』'
            | '】'
            | '〕'
            | '〗'
            | '〙'
            | '〛'
            | '〞'
            | '〟'
            | '゠'
            | 'ゝ'
            | 'ゞ'
            | 'ー'
            | '・'
            | 'ヽ'
            | 'ヾ'
            | 'ぁ'
            | 'ぃ'
            | 'ぅ'
            | 'ぇ'
            | 'ぉ'
            | 'っ'
            | 'ゃ'
            | 'ゅ'
            | 'ょ'
            | 'ゎ'
            | 'ゕ'
            | 'ゖ'
            | 'ァ'
            | 'ィ'
            | 'ゥ'
            | 'ェ'
            | 'ォ'
            | 'ッ'
            | 'ャ'
            | 'ュ'
            | 'ョ'
            | 'ヮ'
            | 'ヵ'
            | 'ヶ'
            | 'ㇰ'..='ㇿ'
            | '﹐'..='﹒'
            | '﹔'..='﹗'
            | '﹚'
            | '﹜'
            | '﹞'
            | '！'
            | '＂'
            | '％'
            | '＇'
            | '）'
            | '，'
            | '．'
            | '：'
            | '；'
            | '？'
            | '］'
            | '｝'
            | '～'
            | '｠'
            | '｡'
            | '｣'
            | '､'
            | 'ｰ'
    )
}

fn is_kinsoku_no_end(ch: char) -> bool {
    matches!(
        ch,
        '(' | '['
            | '{'
            | '£'
            | '¥'
            | '‘'
            | '“'
            | '‵'
            | '‹'
            | '«'
            | '〈'
            | '《'
            | '「'
            | '『'
            | '【'
            | '〔'
            | '〖'
            | '〘'
            | '〚'
            | '〝'
            | '︴'
            | '︵'
            | '︷'
            | '︹'
            | '︻'
            | '︽'
            | '︿'
            | '﹁'
            | '﹃'
            | '﹏'
            | '﹙'
            | '﹛'
            | '﹝'
            | '（'
            | '［'
            | '｛'
            | '｟'
            | '｢'
            | '＄'
            | '￡'
            | '￥'
    )
}

fn is_kinsoku_inseparable(ch: char) -> bool {
    matches!(ch, '—' | '―' | '…' | '‥' | '〳' | '〴' | '〵')
}

fn is_korean_no_start(ch: char) -> bool {
    matches!(
        ch,
        '!' | '%'
            | ')'
            | ','
            | '.'
            | ':'
            | ';'
            | '?'
            | ']'
            | '}'
            | '\''
            | '"'
            | '¢'
            | '°'
            | '’'
            | '”'
            | '†'
            | '‡'
            | '℃'
            | '〆'
            | '〉'
            | '》'
            | '」'
            | '』'
            | '】'
            | '〕'
            | '！'
            | '％'
            | '）'
            | '，'
            | '．'
            | '：'
            | '；'
            | '？'
            | '］'
            | '｝'
    )
}

fn is_korean_no_end(ch: char) -> bool {
    matches!(
        ch,
        '$' | '('
            | '['
            | '{'
            | '#'
            | '£'
            | '¥'
            | '‘'
            | '“'
            | '々'
            | '〇'
            | '〈'
            | '《'
            | '「'
            | '『'
            | '【'
            | '〔'
            | '＄'
            | '（'
            | '［'
            | '｛'
            | '｠'
            | '￥'
            | '￦'
    )
}
