#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Heuristic field extraction from resume text.
//!
//! All extractors are pure functions of the input text with no hidden
//! state, so running them twice on the same text yields the same result.
//! Each returns [`None`] when nothing qualifies; sentinel substitution is
//! left to [`resume_extract_models::ExtractionRecord`].

pub mod contact;
pub mod details;
pub mod name;

use resume_extract_models::ExtractedFields;

pub use contact::{extract_email, extract_phone};
pub use details::{
    FilenameInfo, extract_age, extract_date, extract_gender, extract_location, extract_position,
    extract_salary, parse_filename,
};
pub use name::{extract_name, is_valid_name};

/// Runs every extractor over `text`.
///
/// Position, location, and salary fall back to values parsed from
/// `file_name`. Every other field, the name included, comes from the text
/// alone.
#[must_use]
pub fn extract_fields(text: &str, file_name: &str) -> ExtractedFields {
    let from_file_name = parse_filename(file_name);

    ExtractedFields {
        name: extract_name(text),
        phone: extract_phone(text),
        email: extract_email(text),
        position: extract_position(text).or(from_file_name.position),
        location: extract_location(text).or(from_file_name.location),
        salary: extract_salary(text).or(from_file_name.salary),
        gender: extract_gender(text),
        age: extract_age(text),
        date: extract_date(text),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combines_text_and_file_name() {
        let text = "姓名：张三\n性别：男 | 年龄：28岁\n电话：13812345678\n邮箱：zhangsan@example.com\n期望城市：北京\n到岗时间：一周内";
        let fields = extract_fields(text, "【后端工程师_上海 20-30K】李四 3年.pdf");

        assert_eq!(fields.name.as_deref(), Some("张三"));
        assert_eq!(fields.phone.as_deref(), Some("13812345678"));
        assert_eq!(fields.email.as_deref(), Some("zhangsan@example.com"));
        assert_eq!(fields.position.as_deref(), Some("后端工程师"));
        assert_eq!(fields.location.as_deref(), Some("北京"));
        assert_eq!(fields.salary.as_deref(), Some("20-30K"));
        assert_eq!(fields.gender.as_deref(), Some("男"));
        assert_eq!(fields.age.as_deref(), Some("28"));
        assert_eq!(fields.date.as_deref(), Some("一周内"));
    }

    #[test]
    fn file_name_never_supplies_the_name() {
        let fields = extract_fields("13812345678", "【后端工程师_上海 20-30K】李四 3年.pdf");
        assert_eq!(fields.name, None);
    }

    #[test]
    fn extraction_is_idempotent() {
        let text = "个人简历\n王小明\nContact: 13812345678, email: a.b@test.com";
        assert_eq!(extract_fields(text, "a.pdf"), extract_fields(text, "a.pdf"));
    }
}
