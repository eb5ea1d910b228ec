use std::sync::LazyLock;

use regex::Regex;

/// The 25 autonomous districts of Seoul, in the order the selectors list them.
pub const SEOUL_GUS: [&str; 25] = [
    "종로구", "중구", "용산구", "성동구", "광진구", "동대문구", "중랑구", "성북구", "강북구",
    "도봉구", "노원구", "은평구", "서대문구", "마포구", "양천구", "강서구", "구로구", "금천구",
    "영등포구", "동작구", "관악구", "서초구", "강남구", "송파구", "강동구",
];

// 제1선거구, 가선거구, or a bare 선거구 at the end of the district string.
static SEAT_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\s*(?:제\s*\d+|[가나다라마바사아자차카타파하])?선거구$")
        .expect("seat suffix pattern is valid")
});

/// Derives the district group (gu name) by stripping the trailing seat suffix.
///
/// `강남구가선거구` and `강남구 제1선거구` both give `강남구`. Strings without a
/// suffix, such as `비례대표`, come back unchanged.
pub fn district_group(district: &str) -> &str {
    match SEAT_SUFFIX.find(district) {
        Some(m) => &district[..m.start()],
        None => district,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_letter_suffix() {
        assert_eq!(district_group("강남구가선거구"), "강남구");
        assert_eq!(district_group("강남구나선거구"), "강남구");
    }

    #[test]
    fn test_strips_numbered_suffix() {
        assert_eq!(district_group("종로구제1선거구"), "종로구");
        assert_eq!(district_group("강남구 제12선거구"), "강남구");
    }

    #[test]
    fn test_keeps_gu_ending_in_gu() {
        // the syllable before 선거구 is part of the gu name here
        assert_eq!(district_group("중구선거구"), "중구");
        assert_eq!(district_group("강북구"), "강북구");
    }

    #[test]
    fn test_at_large_unchanged() {
        assert_eq!(district_group("비례대표"), "비례대표");
        assert_eq!(district_group(""), "");
    }

    #[test]
    fn test_seoul_gus_are_groups() {
        for gu in SEOUL_GUS {
            assert_eq!(district_group(&format!("{gu}가선거구")), gu);
        }
    }
}
