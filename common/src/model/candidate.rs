use serde::{Deserialize, Serialize};

/// Council a candidate runs for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CouncilType {
    /// Seoul Metropolitan Council (시의회).
    #[default]
    Si,
    /// District council (구의회).
    Gu,
}

impl CouncilType {
    /// Parses the backend value. Anything other than `"gu"` counts as `Si`.
    pub fn from_field(value: &str) -> Self {
        match value {
            "gu" => CouncilType::Gu,
            _ => CouncilType::Si,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CouncilType::Si => "si",
            CouncilType::Gu => "gu",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            CouncilType::Si => "시의원",
            CouncilType::Gu => "구의원",
        }
    }
}

/// One registered, approved and visible election candidate.
///
/// Records are produced by [`crate::normalize::normalize_rows`] and are never
/// mutated afterwards; the next fetch replaces the whole list. Field names
/// serialize in the same camelCase form the spreadsheet rows use, so the
/// cached blob goes back through the same deserializer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    /// `candidate-{n}`, the position among the visible rows of one fetch.
    /// Not stable across fetches.
    pub id: String,
    pub name: String,
    /// YYMMDD.
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    pub council_type: CouncilType,
    /// Free text such as `강남구가선거구`; encodes gu name and seat suffix.
    pub district: String,
    pub party: String,
    pub current_position: String,
    pub social_media_url: String,
    /// `none`, `level1`, `level2`, or a legacy `TRUE`/`FALSE`.
    pub has_social_worker_license: String,
    pub has_paid_membership_fee: bool,
    pub has_election_office: bool,
    pub office_address: String,
    pub has_kickoff_event: bool,
    pub kickoff_event_date: String,
    pub kickoff_event_details: String,
    pub career_summary: String,
    pub welfare_policy: String,
    pub candidate_photo_url: String,
    pub election_flyer_url: String,
    pub is_visible: bool,
    pub approved: bool,
    pub timestamp: String,
}

impl Candidate {
    pub fn license(&self) -> SocialWorkerLicense {
        SocialWorkerLicense::from_field(&self.has_social_worker_license)
    }

    /// Whether the district is the at-large list (비례대표).
    pub fn is_at_large(&self) -> bool {
        self.district.contains(AT_LARGE)
    }
}

/// District marker for at-large seats.
pub const AT_LARGE: &str = "비례대표";

/// Parsed view of [`Candidate::has_social_worker_license`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SocialWorkerLicense {
    None,
    Level1,
    Level2,
    /// Rows written before the grade was recorded only say `TRUE`.
    Legacy,
}

impl SocialWorkerLicense {
    pub fn from_field(value: &str) -> Self {
        match value.trim() {
            "level1" => SocialWorkerLicense::Level1,
            "level2" => SocialWorkerLicense::Level2,
            "TRUE" | "true" => SocialWorkerLicense::Legacy,
            _ => SocialWorkerLicense::None,
        }
    }

    pub fn label(&self) -> Option<&'static str> {
        match self {
            SocialWorkerLicense::None => None,
            SocialWorkerLicense::Level1 => Some("사회복지사 1급"),
            SocialWorkerLicense::Level2 => Some("사회복지사 2급"),
            SocialWorkerLicense::Legacy => Some("사회복지사"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_council_type_from_field() {
        assert_eq!(CouncilType::from_field("gu"), CouncilType::Gu);
        assert_eq!(CouncilType::from_field("si"), CouncilType::Si);
        assert_eq!(CouncilType::from_field(""), CouncilType::Si);
        assert_eq!(CouncilType::from_field("GU"), CouncilType::Si);
    }

    #[test]
    fn test_council_type_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&CouncilType::Gu).unwrap(), "\"gu\"");
        let parsed: CouncilType = serde_json::from_str("\"si\"").unwrap();
        assert_eq!(parsed, CouncilType::Si);
    }

    #[test]
    fn test_license_levels() {
        assert_eq!(SocialWorkerLicense::from_field("level1"), SocialWorkerLicense::Level1);
        assert_eq!(SocialWorkerLicense::from_field("level2"), SocialWorkerLicense::Level2);
        assert_eq!(SocialWorkerLicense::from_field("TRUE"), SocialWorkerLicense::Legacy);
        assert_eq!(SocialWorkerLicense::from_field("none"), SocialWorkerLicense::None);
        assert_eq!(SocialWorkerLicense::from_field("FALSE"), SocialWorkerLicense::None);
        assert_eq!(SocialWorkerLicense::None.label(), None);
    }
}
