//! Position, location, salary, gender, age, and date extraction.
//!
//! Recruiting platforms export resumes with names like
//! `【前端工程师_成都 9-14K】刘存麟 6年.pdf`, so position, location, and
//! salary are read from labelled text first and from the file name as a
//! fallback. Gender, age, and date only come from the text.

use std::sync::LazyLock;

use regex::Regex;

static FILENAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[【\[]\s*(?P<position>[^_】\]]+?)\s*_\s*(?P<location>[^\s_】\]]+)\s*(?P<salary>[^】\]]*?)\s*[】\]]",
    )
    .expect("valid regex")
});

static POSITION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:期望职位|期望岗位|应聘岗位|意向岗位|求职意向)\s*[：:]\s*([^\s|｜,，;；]+)")
        .expect("valid regex")
});

static LOCATION_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:期望城市|意向城市|期望地点|工作地点)\s*[：:]\s*([^\r\n]*)").expect("valid regex")
});

static SALARY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?:期望薪资|期望工资|期望月薪|薪资要求)\s*[：:]\s*(面议|\d+(?:\.\d+)?\s*[kKwW千万]?(?:\s*[-~～至到]\s*\d+(?:\.\d+)?\s*[kKwW千万]?)?)",
    )
    .expect("valid regex")
});

static GENDER_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"性\s*别\s*[：:]?\s*(男|女)").expect("valid regex"));

static GENDER_INLINE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[\s|｜/,，])(男|女)\s*[|｜/,，]\s*\d{1,2}\s*岁").expect("valid regex")
});

static AGE_LABEL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"年\s*龄\s*[：:]?\s*(\d{1,3})").expect("valid regex"));

static AGE_INLINE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:^|[^\d])(\d{2})\s*岁").expect("valid regex"));

static AVAILABILITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:到岗时间|入职时间|到岗日期)\s*[：:]\s*([^\s|｜,，;；]+)").expect("valid regex")
});

static YEAR_MONTH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:^|[^\d])((?:19|20)\d{2}\s*[./\-年]\s*(?:1[0-2]|0?[1-9])(?:\s*月|[^\d]|$))")
        .expect("valid regex")
});

/// Plausible candidate ages.
const AGE_RANGE: std::ops::RangeInclusive<u8> = 16..=70;

/// Fields encoded in a recruiting-platform file name.
///
/// The candidate name that follows the bracketed block is not parsed:
/// names only ever come from the document text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilenameInfo {
    /// Position before the underscore.
    pub position: Option<String>,
    /// Location after the underscore.
    pub location: Option<String>,
    /// Salary range inside the brackets.
    pub salary: Option<String>,
}

/// Parses a `【position_location salary】name ...` file name.
///
/// Returns an empty [`FilenameInfo`] for names in any other shape.
#[must_use]
pub fn parse_filename(file_name: &str) -> FilenameInfo {
    let Some(caps) = FILENAME_RE.captures(file_name.trim()) else {
        return FilenameInfo::default();
    };

    let group = |name: &str| {
        caps.name(name)
            .map(|m| m.as_str().trim())
            .filter(|v| !v.is_empty())
            .map(str::to_owned)
    };

    FilenameInfo {
        position: group("position"),
        location: group("location"),
        salary: group("salary"),
    }
}

/// Returns the desired position following a label such as `期望职位：`.
#[must_use]
pub fn extract_position(text: &str) -> Option<String> {
    POSITION_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Returns the desired location following a label such as `期望城市：`.
///
/// Up to two space-separated ideographic tokens are kept (`四川 成都`);
/// the value ends at the first token that is not a plain place name.
#[must_use]
pub fn extract_location(text: &str) -> Option<String> {
    LOCATION_RE.captures_iter(text).find_map(|caps| {
        let tokens: Vec<&str> = caps
            .get(1)?
            .as_str()
            .split_whitespace()
            .take_while(|t| t.chars().count() >= 2 && t.chars().all(is_han))
            .take(2)
            .collect();

        (!tokens.is_empty()).then(|| tokens.join(" "))
    })
}

/// Returns the expected salary following a label such as `期望薪资：`.
#[must_use]
pub fn extract_salary(text: &str) -> Option<String> {
    SALARY_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().split_whitespace().collect::<String>())
}

/// Returns `男` or `女`, from a `性别` label or an inline `男 | 28岁`
/// profile line.
#[must_use]
pub fn extract_gender(text: &str) -> Option<String> {
    GENDER_LABEL_RE
        .captures(text)
        .or_else(|| GENDER_INLINE_RE.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_owned())
}

/// Returns the age in years from a `年龄` label or a bare `28岁`.
///
/// Values outside 16-70 are ignored, so work-year counts and stray
/// numbers are not mistaken for an age.
#[must_use]
pub fn extract_age(text: &str) -> Option<String> {
    let plausible = |caps: regex::Captures<'_>| {
        let digits = caps.get(1)?.as_str();
        let age: u8 = digits.parse().ok()?;
        AGE_RANGE.contains(&age).then(|| age.to_string())
    };

    AGE_LABEL_RE
        .captures_iter(text)
        .find_map(plausible)
        .or_else(|| AGE_INLINE_RE.captures_iter(text).find_map(plausible))
}

/// Returns the availability date after a label such as `到岗时间：`, or
/// else the first year-month date in the text (`2024.01`, `2019年9月`).
#[must_use]
pub fn extract_date(text: &str) -> Option<String> {
    AVAILABILITY_RE
        .captures(text)
        .or_else(|| YEAR_MONTH_RE.captures(text))
        .and_then(|caps| caps.get(1))
        .map(|m| {
            m.as_str()
                .trim_end_matches(|c: char| !c.is_alphanumeric() && c != '月')
                .split_whitespace()
                .collect::<String>()
        })
        .filter(|date| !date.is_empty())
}

const fn is_han(c: char) -> bool {
    matches!(c, '\u{4e00}'..='\u{9fff}')
}
