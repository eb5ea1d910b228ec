//! Registration and proposal submission.
//!
//! The script backend is written to fire-and-forget: the browser transport
//! posts in `no-cors` mode and cannot see the response, so a submission only
//! fails on missing consent, missing required fields, or a network error.

use log::{info, warn};
use serde_json::Value;
use thiserror::Error;

use crate::model::config::EndpointConfig;
use crate::model::submission::{CandidateRegistration, PolicyProposal};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormError {
    #[error("개인정보 수집 및 이용에 동의해주세요.")]
    NotAgreed,

    #[error("필수 항목을 입력해주세요: {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),
}

#[derive(Error, Debug)]
pub enum SubmitError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error("Failed to encode submission: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Submission request failed: {0}")]
    Transport(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Sent,
    /// No script URL configured; nothing was sent.
    NotConfigured,
}

/// HTTP POST of a JSON body whose response is ignored.
#[allow(async_fn_in_trait)]
pub trait SubmitTransport {
    async fn post_json(&self, url: &str, body: &Value) -> Result<(), SubmitError>;
}

fn blank_fields(fields: &[(&'static str, &str)]) -> Vec<&'static str> {
    fields
        .iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| *label)
        .collect()
}

impl CandidateRegistration {
    pub fn validate(&self, agreed: bool) -> Result<(), FormError> {
        if !agreed {
            return Err(FormError::NotAgreed);
        }

        let missing = blank_fields(&[
            ("성명", self.name.as_str()),
            ("생년월일", self.birth_date.as_str()),
            ("연락처", self.phone.as_str()),
            ("이메일", self.email.as_str()),
            ("출마 유형", self.council_type.as_str()),
            ("선거구", self.district.as_str()),
        ]);
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        Ok(())
    }
}

impl PolicyProposal {
    pub fn validate(&self, agreed: bool) -> Result<(), FormError> {
        if !agreed {
            return Err(FormError::NotAgreed);
        }

        let missing = blank_fields(&[
            ("성명", self.name.as_str()),
            ("이메일", self.email.as_str()),
            ("분야", self.category.as_str()),
            ("제목", self.title.as_str()),
            ("현황", self.current_issue.as_str()),
            ("제안 내용", self.proposed_solution.as_str()),
        ]);
        if !missing.is_empty() {
            return Err(FormError::MissingFields(missing));
        }
        Ok(())
    }
}

/// Validates and posts a registration to the candidate script.
pub async fn submit_candidate<T: SubmitTransport>(
    config: &EndpointConfig,
    transport: &T,
    form: &CandidateRegistration,
    agreed: bool,
) -> Result<SubmitOutcome, SubmitError> {
    form.validate(agreed)?;

    let mut body = serde_json::to_value(form)?;
    if let Value::Object(map) = &mut body {
        map.insert("agreed".to_string(), Value::Bool(agreed));
    }

    post(config.candidate_url(), transport, &body, "registration").await
}

/// Validates and posts a proposal to the policy script.
pub async fn submit_policy<T: SubmitTransport>(
    config: &EndpointConfig,
    transport: &T,
    form: &PolicyProposal,
    agreed: bool,
) -> Result<SubmitOutcome, SubmitError> {
    form.validate(agreed)?;
    let body = serde_json::to_value(form)?;

    post(config.policy_url(), transport, &body, "policy proposal").await
}

async fn post<T: SubmitTransport>(
    url: Option<&str>,
    transport: &T,
    body: &Value,
    what: &str,
) -> Result<SubmitOutcome, SubmitError> {
    let Some(url) = url else {
        warn!("No script URL configured, {what} not sent");
        return Ok(SubmitOutcome::NotConfigured);
    };

    transport.post_json(url, body).await?;
    info!("Submitted {what}");
    Ok(SubmitOutcome::Sent)
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::model::submission::Attachment;

    #[derive(Default)]
    struct RecordingTransport {
        posts: RefCell<Vec<(String, Value)>>,
        offline: bool,
    }

    impl SubmitTransport for RecordingTransport {
        async fn post_json(&self, url: &str, body: &Value) -> Result<(), SubmitError> {
            if self.offline {
                return Err(SubmitError::Transport("Failed to fetch".to_string()));
            }
            self.posts.borrow_mut().push((url.to_string(), body.clone()));
            Ok(())
        }
    }

    fn config() -> EndpointConfig {
        EndpointConfig::new(
            Some("https://script/candidate".to_string()),
            Some("https://script/policy".to_string()),
        )
    }

    fn registration() -> CandidateRegistration {
        CandidateRegistration {
            name: "홍길동".to_string(),
            birth_date: "800101".to_string(),
            phone: "010-0000-0000".to_string(),
            email: "hong@example.com".to_string(),
            council_type: "si".to_string(),
            district: "강남구가선거구".to_string(),
            ..Default::default()
        }
    }

    fn proposal() -> PolicyProposal {
        PolicyProposal {
            name: "김제안".to_string(),
            organization: "복지관".to_string(),
            email: "kim@example.com".to_string(),
            category: "휴가".to_string(),
            title: "안식휴가 도입".to_string(),
            current_issue: "장기근속자 소진".to_string(),
            proposed_solution: "10년 근속 시 1개월".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_registration_requires_consent() {
        assert_eq!(registration().validate(false), Err(FormError::NotAgreed));
    }

    #[test]
    fn test_registration_lists_missing_fields() {
        let form = CandidateRegistration {
            name: "홍길동".to_string(),
            email: " ".to_string(),
            ..Default::default()
        };
        assert_eq!(
            form.validate(true),
            Err(FormError::MissingFields(vec![
                "생년월일", "연락처", "이메일", "출마 유형", "선거구"
            ]))
        );
    }

    #[test]
    fn test_policy_expected_effect_optional() {
        assert!(proposal().validate(true).is_ok());
    }

    #[tokio::test]
    async fn test_submit_candidate_posts_with_agreement() {
        let transport = RecordingTransport::default();
        let mut form = registration();
        form.candidate_photo = Some(Attachment {
            base64: "AAAA".to_string(),
            mime_type: "image/png".to_string(),
            extension: "png".to_string(),
        });

        let outcome = submit_candidate(&config(), &transport, &form, true).await.unwrap();
        assert_eq!(outcome, SubmitOutcome::Sent);

        let posts = transport.posts.borrow();
        let (url, body) = &posts[0];
        assert_eq!(url, "https://script/candidate");
        assert_eq!(body["agreed"], Value::Bool(true));
        assert_eq!(body["birthDate"], "800101");
        assert_eq!(body["candidatePhoto"]["mimeType"], "image/png");
        assert!(body.get("electionFlyer").is_none());
    }

    #[tokio::test]
    async fn test_submit_policy_omits_organization() {
        let transport = RecordingTransport::default();
        submit_policy(&config(), &transport, &proposal(), true).await.unwrap();

        let posts = transport.posts.borrow();
        let (url, body) = &posts[0];
        assert_eq!(url, "https://script/policy");
        assert_eq!(body["currentIssue"], "장기근속자 소진");
        assert_eq!(body["expectedEffect"], "");
        assert!(body.get("organization").is_none());
    }

    #[tokio::test]
    async fn test_unconfigured_endpoint_is_noop() {
        let transport = RecordingTransport::default();
        let outcome = submit_policy(&EndpointConfig::default(), &transport, &proposal(), true)
            .await
            .unwrap();

        assert_eq!(outcome, SubmitOutcome::NotConfigured);
        assert!(transport.posts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_invalid_form_is_not_sent() {
        let transport = RecordingTransport::default();
        let result = submit_candidate(&config(), &transport, &registration(), false).await;

        assert!(matches!(result, Err(SubmitError::Form(FormError::NotAgreed))));
        assert!(transport.posts.borrow().is_empty());
    }

    #[tokio::test]
    async fn test_transport_error_surfaces() {
        let transport = RecordingTransport {
            offline: true,
            ..Default::default()
        };
        let result = submit_candidate(&config(), &transport, &registration(), true).await;
        assert!(matches!(result, Err(SubmitError::Transport(_))));
    }
}
