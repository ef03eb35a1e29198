//! Layered name heuristics.
//!
//! Resumes have no fixed layout, so the name is found by a short pipeline
//! of independent matchers:
//!
//! - **Keyword**: the value following a label such as `姓名：` or
//!   `Name:`.
//! - **Position**: the first run of name-script characters within the
//!   first [`NAME_WINDOW_CHARS`] characters of the document.
//!
//! Ideographic names are searched for first, by keyword and then by
//! position. Latin names are only considered when neither finds one, so
//! `Company Name: Acme Corp` never shadows a bare `张三` at the top.
//!
//! Every candidate goes through [`is_valid_name`], which rejects section
//! headings, digits, and punctuation.

use std::sync::LazyLock;

use regex::Regex;

/// How many leading characters the positional layer looks at.
pub const NAME_WINDOW_CHARS: usize = 200;

/// Longest Latin name accepted after a `Name:` label, in words.
const MAX_KEYWORD_LATIN_WORDS: usize = 3;

/// Section titles, headings, and field labels that look like names but
/// are not.
///
/// Ideographic entries are rejected when contained anywhere in a
/// candidate, Latin entries when they appear as whole words.
pub const HEADING_PHRASES: &[&str] = &[
    "个人简历",
    "求职简历",
    "简历",
    "个人信息",
    "基本信息",
    "求职意向",
    "工作经历",
    "工作经验",
    "教育经历",
    "教育背景",
    "项目经验",
    "项目经历",
    "自我评价",
    "技能特长",
    "专业技能",
    "联系方式",
    "应聘岗位",
    "期望职位",
    "个人资料",
    "姓名",
    "名字",
    "性别",
    "年龄",
    "出生",
    "籍贯",
    "民族",
    "学历",
    "电话",
    "手机",
    "邮箱",
    "地址",
    "resume",
    "personal resume",
    "curriculum vitae",
    "cv",
    "objective",
    "career objective",
    "job intent",
    "personal information",
    "contact information",
    "contact",
    "profile",
    "summary",
    "education",
    "experience",
    "work experience",
    "skills",
    "projects",
];

/// A name matcher: text in, optional candidate out.
type Layer = fn(&str) -> Option<String>;

const LAYERS: &[(&str, Layer)] = &[
    ("keyword", keyword_han),
    ("position", position_han),
    ("latin keyword", keyword_latin),
    ("latin position", position_latin),
];

static KEYWORD_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:姓\s*名|名\s*字|(?i:\bname))\s*[：:]\s*([^\r\n]*)").expect("valid regex")
});

static LEADING_HAN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\x{4e00}-\x{9fff}]{2,4}").expect("valid regex"));

static LEADING_LATIN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+)*").expect("valid regex")
});

static HAN_RUN_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[\x{4e00}-\x{9fff}]{2,4}").expect("valid regex"));

static LATIN_RUN_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[A-Z][a-zA-Z]+(?:[ \t]+[A-Z][a-zA-Z]+){1,3}\b").expect("valid regex")
});

/// Returns the best-guess person name in `text`.
///
/// Layers are tried in order and the first hit wins. Within a script a
/// labelled name always beats a positional guess.
#[must_use]
pub fn extract_name(text: &str) -> Option<String> {
    LAYERS.iter().find_map(|(layer, matcher)| {
        let name = matcher(text)?;
        log::trace!("Name {name:?} found by {layer} layer");
        Some(name)
    })
}

/// Label tails in document order, trimmed of whitespace and punctuation.
fn keyword_tails(text: &str) -> impl Iterator<Item = &str> {
    KEYWORD_RE.captures_iter(text).filter_map(|caps| {
        caps.get(1).map(|tail| {
            tail.as_str()
                .trim_matches(|c: char| c.is_whitespace() || is_punctuation(c))
        })
    })
}

/// The ideographic value after a `姓名` / `名字` / `Name` label.
fn keyword_han(text: &str) -> Option<String> {
    keyword_tails(text).find_map(|tail| {
        let candidate = cut_at_heading(LEADING_HAN_RE.find(tail)?.as_str());
        is_valid_name(candidate).then(|| candidate.to_owned())
    })
}

/// The capitalized Latin words after a `Name` label.
///
/// A run longer than [`MAX_KEYWORD_LATIN_WORDS`] is more likely a title
/// such as `John Smith Software Engineer` and is skipped.
fn keyword_latin(text: &str) -> Option<String> {
    keyword_tails(text).find_map(|tail| {
        let candidate = collapse_spaces(LEADING_LATIN_RE.find(tail)?.as_str());
        (candidate.split(' ').count() <= MAX_KEYWORD_LATIN_WORDS && is_valid_name(&candidate))
            .then_some(candidate)
    })
}

/// The first valid ideographic run near the top of the text.
fn position_han(text: &str) -> Option<String> {
    HAN_RUN_RE
        .find_iter(leading_chars(text, NAME_WINDOW_CHARS))
        .map(|m| cut_at_heading(m.as_str()))
        .find(|candidate| is_valid_name(candidate))
        .map(str::to_owned)
}

/// The first valid capitalized word run near the top of the text.
fn position_latin(text: &str) -> Option<String> {
    LATIN_RUN_RE
        .find_iter(leading_chars(text, NAME_WINDOW_CHARS))
        .map(|m| collapse_spaces(m.as_str()))
        .find(|candidate| is_valid_name(candidate))
}

/// Returns `true` if `candidate` is acceptable as a person name.
///
/// A valid name is either 2-4 ideographs or 1-4 capitalized ASCII words
/// of at least two letters each,
/// contains no digits, punctuation, or symbols, and does not contain a
/// [`HEADING_PHRASES`] entry.
#[must_use]
pub fn is_valid_name(candidate: &str) -> bool {
    let candidate = candidate.trim();
    if candidate.is_empty() || contains_heading(candidate) {
        return false;
    }

    if candidate.chars().all(is_han) {
        return (2..=4).contains(&candidate.chars().count());
    }

    if !candidate
        .chars()
        .all(|c| c.is_ascii_alphabetic() || c == ' ' || c == '\t')
    {
        return false;
    }

    let words: Vec<&str> = candidate.split_whitespace().collect();
    (1..=4).contains(&words.len())
        && words
            .iter()
            .all(|w| w.len() >= 2 && w.chars().next().is_some_and(|c| c.is_ascii_uppercase()))
}

fn contains_heading(candidate: &str) -> bool {
    let lower = candidate.to_lowercase();
    let padded = format!(" {} ", lower.split_whitespace().collect::<Vec<_>>().join(" "));

    HEADING_PHRASES.iter().any(|phrase| {
        if phrase.is_ascii() {
            padded.contains(&format!(" {phrase} "))
        } else {
            lower.contains(phrase)
        }
    })
}

/// Truncates an ideographic run where a label such as `性别` begins, so
/// `张三性别` (labels run together by the PDF text layer) yields `张三`.
fn cut_at_heading(run: &str) -> &str {
    HEADING_PHRASES
        .iter()
        .filter(|phrase| !phrase.is_ascii())
        .filter_map(|phrase| run.find(phrase))
        .filter(|&idx| idx > 0)
        .min()
        .map_or(run, |idx| &run[..idx])
}

const fn is_han(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}')
}

fn is_punctuation(c: char) -> bool {
    c.is_ascii_punctuation()
        || matches!(
            c,
            '：' | '，' | '。' | '；' | '、' | '（' | '）' | '【' | '】' | '｜' | '·'
        )
}

fn collapse_spaces(s: &str) -> String {
    s.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn leading_chars(text: &str, n: usize) -> &str {
    text.char_indices()
        .nth(n)
        .map_or(text, |(idx, _)| &text[..idx])
}
