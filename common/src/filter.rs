//! Directory view model: which candidates are shown, and in what order.
//!
//! [`filter_candidates`] is a pure function of the full list and the current
//! [`CandidateFilter`]; the directory recomputes it on every input change.

use std::cmp::Ordering;

use crate::model::candidate::{Candidate, CouncilType};
use crate::model::district::district_group;

/// District-group selector value.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum GroupFilter {
    #[default]
    All,
    Gu(String),
}

impl GroupFilter {
    /// `"all"` (or an empty value) selects every group.
    pub fn parse(value: &str) -> Self {
        match value {
            "" | "all" => GroupFilter::All,
            gu => GroupFilter::Gu(gu.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            GroupFilter::All => "all",
            GroupFilter::Gu(gu) => gu,
        }
    }

    pub fn matches(&self, district: &str) -> bool {
        match self {
            GroupFilter::All => true,
            GroupFilter::Gu(gu) => district_group(district) == gu,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CandidateFilter {
    pub council_type: CouncilType,
    /// Case-sensitive substring of name, district or welfare policy.
    pub search: String,
    pub group: GroupFilter,
}

impl CandidateFilter {
    pub fn matches(&self, candidate: &Candidate) -> bool {
        candidate.council_type == self.council_type
            && (candidate.name.contains(&self.search)
                || candidate.district.contains(&self.search)
                || candidate.welfare_policy.contains(&self.search))
            && self.group.matches(&candidate.district)
    }
}

/// Filters and orders `candidates` for display.
///
/// At-large (비례대표) entries come last; the rest are ordered by district and
/// then by name.
pub fn filter_candidates(candidates: &[Candidate], filter: &CandidateFilter) -> Vec<Candidate> {
    let mut visible: Vec<Candidate> = candidates
        .iter()
        .filter(|c| filter.matches(c))
        .cloned()
        .collect();

    visible.sort_by(display_order);
    visible
}

fn display_order(a: &Candidate, b: &Candidate) -> Ordering {
    a.is_at_large()
        .cmp(&b.is_at_large())
        .then_with(|| locale_cmp(&a.district, &b.district))
        .then_with(|| locale_cmp(&a.name, &b.name))
}

/// Korean collation order, approximating `localeCompare(_, "ko")`.
///
/// Characters first compare by script group: spaces, punctuation and digits,
/// then Hangul, then Hanja, then every other script. Within a group Hangul
/// syllables are already in dictionary order by code point, and letters
/// compare case-insensitively. Only strings equal on that level are split by
/// case, lowercase first, and finally by their exact text.
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let primary = |s: &str| {
        s.chars()
            .flat_map(char::to_lowercase)
            .map(|c| (script_rank(c), c))
            .collect::<Vec<_>>()
    };
    let case = |s: &str| s.chars().map(char::is_uppercase).collect::<Vec<_>>();

    primary(a)
        .cmp(&primary(b))
        .then_with(|| case(a).cmp(&case(b)))
        .then_with(|| a.cmp(b))
}

fn script_rank(c: char) -> u8 {
    match c {
        c if c.is_whitespace() || c.is_ascii_punctuation() || c.is_numeric() => 0,
        '\u{AC00}'..='\u{D7A3}' | '\u{1100}'..='\u{11FF}' | '\u{3130}'..='\u{318F}' => 1,
        '\u{4E00}'..='\u{9FFF}' | '\u{F900}'..='\u{FAFF}' => 2,
        _ => 3,
    }
}

/// Counts the filtered candidates per district group, in display order.
pub fn count_by_group(candidates: &[Candidate]) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = Vec::new();
    for candidate in candidates {
        let group = district_group(&candidate.district);
        match counts.iter_mut().find(|(g, _)| g == group) {
            Some((_, n)) => *n += 1,
            None => counts.push((group.to_string(), 1)),
        }
    }
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::normalize_rows;
    use serde_json::json;

    fn candidates(rows: serde_json::Value) -> Vec<Candidate> {
        normalize_rows(&rows, 0).unwrap()
    }

    fn names(list: &[Candidate]) -> Vec<&str> {
        list.iter().map(|c| c.name.as_str()).collect()
    }

    fn sample() -> Vec<Candidate> {
        candidates(json!([
            { "isVisible": true, "name": "다", "district": "강남구가선거구", "councilType": "si", "welfarePolicy": "노인 돌봄 확충" },
            { "isVisible": true, "name": "가", "district": "비례대표", "councilType": "si" },
            { "isVisible": true, "name": "나", "district": "강남구나선거구", "councilType": "si" },
            { "isVisible": true, "name": "라", "district": "종로구가선거구", "councilType": "si" },
            { "isVisible": true, "name": "마", "district": "강남구가선거구", "councilType": "gu" },
            { "isVisible": true, "name": "바", "district": "강남구가선거구", "councilType": "si" }
        ]))
    }

    #[test]
    fn test_at_large_sorts_last() {
        let list = candidates(json!([
            { "isVisible": true, "name": "갑", "district": "강남구가선거구" },
            { "isVisible": true, "name": "을", "district": "비례대표" },
            { "isVisible": true, "name": "병", "district": "강남구나선거구" }
        ]));

        let sorted = filter_candidates(&list, &CandidateFilter::default());
        let districts: Vec<_> = sorted.iter().map(|c| c.district.as_str()).collect();
        assert_eq!(districts, vec!["강남구가선거구", "강남구나선거구", "비례대표"]);
    }

    #[test]
    fn test_ties_sorted_by_name() {
        let sorted = filter_candidates(&sample(), &CandidateFilter::default());
        assert_eq!(names(&sorted), vec!["다", "바", "나", "라", "가"]);
    }

    #[test]
    fn test_council_type_filter() {
        let filter = CandidateFilter {
            council_type: CouncilType::Gu,
            ..Default::default()
        };
        assert_eq!(names(&filter_candidates(&sample(), &filter)), vec!["마"]);
    }

    #[test]
    fn test_search_matches_name_district_policy() {
        let by_policy = CandidateFilter {
            search: "돌봄".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter_candidates(&sample(), &by_policy)), vec!["다"]);

        let by_district = CandidateFilter {
            search: "종로".to_string(),
            ..Default::default()
        };
        assert_eq!(names(&filter_candidates(&sample(), &by_district)), vec!["라"]);

        let by_name = CandidateFilter {
            search: "나".to_string(),
            ..Default::default()
        };
        // "나" is a name and also part of 강남구나선거구
        assert_eq!(names(&filter_candidates(&sample(), &by_name)), vec!["나"]);
    }

    #[test]
    fn test_search_is_case_sensitive() {
        let list = candidates(json!([
            { "isVisible": true, "name": "Kim", "district": "강남구가선거구" }
        ]));
        let filter = CandidateFilter {
            search: "kim".to_string(),
            ..Default::default()
        };
        assert!(filter_candidates(&list, &filter).is_empty());
    }

    #[test]
    fn test_group_filter() {
        let filter = CandidateFilter {
            group: GroupFilter::parse("강남구"),
            ..Default::default()
        };
        assert_eq!(names(&filter_candidates(&sample(), &filter)), vec!["다", "바", "나"]);

        assert_eq!(GroupFilter::parse("all"), GroupFilter::All);
        assert_eq!(GroupFilter::parse("강남구").as_str(), "강남구");
    }

    #[test]
    fn test_locale_cmp() {
        assert_eq!(locale_cmp("가", "나"), Ordering::Less);
        assert_eq!(locale_cmp("abc", "ABD"), Ordering::Less);
        assert_eq!(locale_cmp("a", "A"), Ordering::Less);
        assert_eq!(locale_cmp("Ab", "ab"), Ordering::Greater);
        assert_eq!(locale_cmp("a", "a"), Ordering::Equal);
    }

    #[test]
    fn test_hangul_sorts_before_latin() {
        assert_eq!(locale_cmp("Kim", "김"), Ordering::Greater);
        assert_eq!(locale_cmp("김철수", "Lee"), Ordering::Less);
        assert_eq!(locale_cmp("1선거구", "가선거구"), Ordering::Less);

        let list = candidates(json!([
            { "isVisible": true, "name": "Kim", "district": "강남구가선거구" },
            { "isVisible": true, "name": "김복지", "district": "강남구가선거구" }
        ]));
        let sorted = filter_candidates(&list, &CandidateFilter::default());
        assert_eq!(names(&sorted), vec!["김복지", "Kim"]);
    }

    #[test]
    fn test_count_by_group() {
        let sorted = filter_candidates(&sample(), &CandidateFilter::default());
        assert_eq!(
            count_by_group(&sorted),
            vec![
                ("강남구".to_string(), 3),
                ("종로구".to_string(), 1),
                ("비례대표".to_string(), 1)
            ]
        );
    }
}
