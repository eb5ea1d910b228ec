//! Candidate registration form.
//!
//! Collects a `CandidateRegistration`, including optional photo and flyer
//! attachments, and posts it to the candidate script. The sheet operators
//! review each row before flipping its visibility flag, so a submission does
//! not show up in the directory right away.

use common::model::config::EndpointConfig;
use common::model::submission::{Attachment, CandidateRegistration};
use common::submit::{submit_candidate, SubmitOutcome};
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{show_toast, submit_error_message};
use crate::services::http::GlooTransport;

mod view;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    BirthDate,
    Phone,
    Email,
    CouncilType,
    District,
    Party,
    CurrentPosition,
    CareerSummary,
    WelfarePolicy,
    SocialMediaUrl,
}

pub enum Msg {
    Edit(Field, String),
    SetGu(String),
    SetAgreed(bool),
    Photo(Option<Attachment>),
    Flyer(Option<Attachment>),
    Submit,
    Finished(Result<SubmitOutcome, String>),
    Reset,
}

#[derive(Properties, PartialEq, Clone)]
pub struct RegisterProps {
    pub endpoints: EndpointConfig,
}

#[derive(Default)]
pub struct RegisterForm {
    pub form: CandidateRegistration,
    /// Narrows the district hint; not part of the payload.
    pub selected_gu: String,
    pub agreed: bool,
    pub submitting: bool,
    pub submitted: bool,
}

fn field_mut(form: &mut CandidateRegistration, field: Field) -> &mut String {
    match field {
        Field::Name => &mut form.name,
        Field::BirthDate => &mut form.birth_date,
        Field::Phone => &mut form.phone,
        Field::Email => &mut form.email,
        Field::CouncilType => &mut form.council_type,
        Field::District => &mut form.district,
        Field::Party => &mut form.party,
        Field::CurrentPosition => &mut form.current_position,
        Field::CareerSummary => &mut form.career_summary,
        Field::WelfarePolicy => &mut form.welfare_policy,
        Field::SocialMediaUrl => &mut form.social_media_url,
    }
}

impl Component for RegisterForm {
    type Message = Msg;
    type Properties = RegisterProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                *field_mut(&mut self.form, field) = value;
                true
            }
            Msg::SetGu(gu) => {
                if self.selected_gu != gu {
                    self.selected_gu = gu;
                    self.form.district.clear();
                }
                true
            }
            Msg::SetAgreed(agreed) => {
                self.agreed = agreed;
                true
            }
            Msg::Photo(attachment) => {
                self.form.candidate_photo = attachment;
                false
            }
            Msg::Flyer(attachment) => {
                self.form.election_flyer = attachment;
                false
            }
            Msg::Submit => {
                if self.submitting {
                    return false;
                }
                if let Err(e) = self.form.validate(self.agreed) {
                    show_toast(&e.to_string());
                    return false;
                }
                self.submitting = true;

                let endpoints = ctx.props().endpoints.clone();
                let form = self.form.clone();
                let agreed = self.agreed;
                let link = ctx.link().clone();
                spawn_local(async move {
                    let result = submit_candidate(&endpoints, &GlooTransport, &form, agreed)
                        .await
                        .map_err(|e| submit_error_message(&e));
                    link.send_message(Msg::Finished(result));
                });
                true
            }
            Msg::Finished(result) => {
                self.submitting = false;
                match result {
                    Ok(SubmitOutcome::Sent) => {
                        self.submitted = true;
                        show_toast("예비후보 등록이 완료되었습니다. 확인 후 연락드리겠습니다.");
                    }
                    Ok(SubmitOutcome::NotConfigured) => {
                        show_toast("접수 주소가 설정되지 않아 제출되지 않았습니다.");
                    }
                    Err(message) => show_toast(&message),
                }
                true
            }
            Msg::Reset => {
                *self = Self::default();
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
