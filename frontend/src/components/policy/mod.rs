//! Policy proposal form.

use common::model::config::EndpointConfig;
use common::model::submission::{PolicyProposal, POLICY_CATEGORIES};
use common::submit::{submit_policy, SubmitOutcome};
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::helpers::{input_value, select_value, show_toast, submit_error_message, textarea_value};
use crate::services::http::GlooTransport;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Organization,
    Email,
    Phone,
    Category,
    Title,
    CurrentIssue,
    ProposedSolution,
    ExpectedEffect,
}

pub enum Msg {
    Edit(Field, String),
    SetAgreed(bool),
    Submit,
    Finished(Result<SubmitOutcome, String>),
    Reset,
}

#[derive(Properties, PartialEq, Clone)]
pub struct PolicyProps {
    pub endpoints: EndpointConfig,
}

#[derive(Default)]
pub struct PolicyForm {
    form: PolicyProposal,
    agreed: bool,
    submitting: bool,
    submitted: bool,
}

fn field_mut(form: &mut PolicyProposal, field: Field) -> &mut String {
    match field {
        Field::Name => &mut form.name,
        Field::Organization => &mut form.organization,
        Field::Email => &mut form.email,
        Field::Phone => &mut form.phone,
        Field::Category => &mut form.category,
        Field::Title => &mut form.title,
        Field::CurrentIssue => &mut form.current_issue,
        Field::ProposedSolution => &mut form.proposed_solution,
        Field::ExpectedEffect => &mut form.expected_effect,
    }
}

impl Component for PolicyForm {
    type Message = Msg;
    type Properties = PolicyProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self::default()
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Edit(field, value) => {
                *field_mut(&mut self.form, field) = value;
                true
            }
            Msg::SetAgreed(agreed) => {
                self.agreed = agreed;
                true
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
                    let result = submit_policy(&endpoints, &GlooTransport, &form, agreed)
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
                        show_toast("정책 제안이 접수되었습니다.");
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
        let link = ctx.link();

        if self.submitted {
            return html! {
                <div class="page done">
                    <h1>{ "정책 제안이 접수되었습니다" }</h1>
                    <p class="muted">{ "소중한 제안 감사합니다. 검토 후 정책 자료에 반영하겠습니다." }</p>
                    <button onclick={link.callback(|_| Msg::Reset)}>{ "새 제안 작성" }</button>
                </div>
            };
        }

        let form = &self.form;
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div class="page policy">
                <header class="page-header">
                    <h1>{ "정책 제안" }</h1>
                    <p class="muted">{ "사회복지 현장의 목소리를 정책으로 만들어 주세요" }</p>
                </header>

                <form class="card form" {onsubmit}>
                    <h3>{ "제안자 정보" }</h3>
                    { text_input(link, Field::Name, "성명 *", &form.name) }
                    { text_input(link, Field::Organization, "소속 기관", &form.organization) }
                    { text_input(link, Field::Email, "이메일 *", &form.email) }
                    { text_input(link, Field::Phone, "연락처", &form.phone) }

                    <h3>{ "제안 내용" }</h3>
                    <div class="field">
                        <label>{ "분야 *" }</label>
                        <select onchange={link.callback(|e: Event| Msg::Edit(Field::Category, select_value(&e)))}>
                            <option value="" selected={form.category.is_empty()}>{ "분야 선택" }</option>
                            {
                                for POLICY_CATEGORIES.iter().map(|category| html! {
                                    <option value={*category} selected={form.category == *category}>{ *category }</option>
                                })
                            }
                        </select>
                    </div>
                    { text_input(link, Field::Title, "제목 *", &form.title) }
                    { text_area(link, Field::CurrentIssue, "현황 및 문제점 *", &form.current_issue) }
                    { text_area(link, Field::ProposedSolution, "제안 내용 *", &form.proposed_solution) }
                    { text_area(link, Field::ExpectedEffect, "기대 효과", &form.expected_effect) }

                    <label class="consent">
                        <input
                            type="checkbox"
                            checked={self.agreed}
                            onchange={link.callback(|e: Event| {
                                let input: HtmlInputElement = e.target_unchecked_into();
                                Msg::SetAgreed(input.checked())
                            })}
                        />
                        { "개인정보 수집 및 이용에 동의합니다 *" }
                    </label>

                    <button type="submit" class="primary" disabled={self.submitting}>
                        { if self.submitting { "제출 중..." } else { "제안하기" } }
                    </button>
                </form>
            </div>
        }
    }
}

fn text_input(link: &Scope<PolicyForm>, field: Field, label: &'static str, value: &str) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <input
                type="text"
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::Edit(field, input_value(&e)))}
            />
        </div>
    }
}

fn text_area(link: &Scope<PolicyForm>, field: Field, label: &'static str, value: &str) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <textarea
                rows="5"
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::Edit(field, textarea_value(&e)))}
            />
        </div>
    }
}
