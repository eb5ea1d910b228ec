use serde::{Deserialize, Serialize};

/// Policy categories offered by the proposal form.
pub const POLICY_CATEGORIES: [&str; 9] = [
    "임금(임금체계 등)",
    "복리후생",
    "경력인정 및 승급",
    "고용(인력증원 등)",
    "휴가",
    "안전과 인권",
    "일가정양립 등",
    "대시민복지정책",
    "기타",
];

/// A file attached to a registration, inlined as base64.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    /// Raw base64 without the `data:...;base64,` prefix.
    pub base64: String,
    pub mime_type: String,
    pub extension: String,
}

/// Body of the candidate registration form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CandidateRegistration {
    pub name: String,
    pub birth_date: String,
    pub phone: String,
    pub email: String,
    /// `si` or `gu`; empty until the user picks one.
    pub council_type: String,
    pub district: String,
    pub party: String,
    pub current_position: String,
    pub career_summary: String,
    pub welfare_policy: String,
    pub social_media_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub candidate_photo: Option<Attachment>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub election_flyer: Option<Attachment>,
}

/// Body of the policy proposal form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyProposal {
    pub name: String,
    // the policy sheet has no organization column
    #[serde(skip_serializing)]
    pub organization: String,
    pub email: String,
    pub phone: String,
    pub category: String,
    pub title: String,
    pub current_issue: String,
    pub proposed_solution: String,
    pub expected_effect: String,
}
