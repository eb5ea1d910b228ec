use common::model::candidate::CouncilType;
use common::model::district::SEOUL_GUS;
use web_sys::HtmlInputElement;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::attachment::{AttachmentInput, AttachmentKind};
use crate::helpers::{input_value, select_value, textarea_value};

use super::{Field, Msg, RegisterForm};

pub fn view(component: &RegisterForm, ctx: &Context<RegisterForm>) -> Html {
    let link = ctx.link();

    if component.submitted {
        return html! {
            <div class="page done">
                <h1>{ "예비후보 등록이 완료되었습니다" }</h1>
                <p class="muted">
                    { "등록해주신 정보를 확인 후 연락드리겠습니다. 사회복지 정책에 관심 가져주셔서 감사합니다." }
                </p>
                <button onclick={link.callback(|_| Msg::Reset)}>{ "처음으로" }</button>
            </div>
        };
    }

    let form = &component.form;
    let onsubmit = link.callback(|e: SubmitEvent| {
        e.prevent_default();
        Msg::Submit
    });

    html! {
        <div class="page register">
            <header class="page-header">
                <h1>{ "예비후보 등록" }</h1>
                <p class="muted">{ "2026 서울 지방선거 출마 예정자 등록" }</p>
                <p class="notice">
                    { "등록하신 정보는 검증 절차를 거쳐 웹사이트에 게재됩니다. 정확한 정보를 입력해주세요." }
                </p>
            </header>

            <form class="card form" {onsubmit}>
                <h3>{ "기본 정보" }</h3>
                { text_input(link, Field::Name, "성명 *", "홍길동", &form.name) }
                { text_input(link, Field::BirthDate, "생년월일 (6자리) *", "800101", &form.birth_date) }
                { text_input(link, Field::Phone, "연락처 *", "010-0000-0000", &form.phone) }
                { text_input(link, Field::Email, "이메일 *", "example@email.com", &form.email) }

                <h3>{ "출마 정보" }</h3>
                <div class="field">
                    <label>{ "출마 유형 *" }</label>
                    <select onchange={link.callback(|e: Event| Msg::Edit(Field::CouncilType, select_value(&e)))}>
                        <option value="" selected={form.council_type.is_empty()}>{ "선택" }</option>
                        {
                            for [CouncilType::Si, CouncilType::Gu].into_iter().map(|council| html! {
                                <option value={council.as_str()} selected={form.council_type == council.as_str()}>
                                    { council.label() }
                                </option>
                            })
                        }
                    </select>
                </div>
                { text_input(link, Field::Party, "소속 정당", "무소속 또는 정당명", &form.party) }
                <div class="field">
                    <label>{ "자치구 *" }</label>
                    <select onchange={link.callback(|e: Event| Msg::SetGu(select_value(&e)))}>
                        <option value="" selected={component.selected_gu.is_empty()}>{ "자치구 선택" }</option>
                        {
                            for SEOUL_GUS.iter().map(|gu| html! {
                                <option value={*gu} selected={component.selected_gu == *gu}>{ *gu }</option>
                            })
                        }
                    </select>
                </div>
                <div class="field">
                    <label>{ "선거구 *" }</label>
                    <input
                        type="text"
                        disabled={component.selected_gu.is_empty()}
                        placeholder={district_hint(&component.selected_gu)}
                        value={form.district.clone()}
                        oninput={link.callback(|e: InputEvent| Msg::Edit(Field::District, input_value(&e)))}
                    />
                </div>
                { text_input(link, Field::CurrentPosition, "현직", "사회복지사", &form.current_position) }
                { text_input(link, Field::SocialMediaUrl, "SNS 주소", "https://", &form.social_media_url) }

                <h3>{ "경력 및 공약" }</h3>
                { text_area(link, Field::CareerSummary, "주요 경력", &form.career_summary) }
                { text_area(link, Field::WelfarePolicy, "복지 공약", &form.welfare_policy) }

                <h3>{ "첨부 파일" }</h3>
                <AttachmentInput
                    label="후보자 사진 (JPG, PNG, WebP / 5MB 이하)"
                    kind={AttachmentKind::Photo}
                    on_change={link.callback(Msg::Photo)}
                />
                <AttachmentInput
                    label="선거 공보물 (이미지 또는 PDF / 10MB 이하)"
                    kind={AttachmentKind::Flyer}
                    on_change={link.callback(Msg::Flyer)}
                />

                <label class="consent">
                    <input
                        type="checkbox"
                        checked={component.agreed}
                        onchange={link.callback(|e: Event| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetAgreed(input.checked())
                        })}
                    />
                    { "개인정보 수집 및 이용에 동의합니다 *" }
                </label>

                <button type="submit" class="primary" disabled={component.submitting}>
                    { if component.submitting { "제출 중..." } else { "등록 신청" } }
                </button>
            </form>
        </div>
    }
}

fn district_hint(gu: &str) -> String {
    if gu.is_empty() {
        "자치구를 먼저 선택하세요".to_string()
    } else {
        format!("예: {gu}가선거구")
    }
}

fn text_input(
    link: &Scope<RegisterForm>,
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    value: &str,
) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <input
                type="text"
                {placeholder}
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::Edit(field, input_value(&e)))}
            />
        </div>
    }
}

fn text_area(link: &Scope<RegisterForm>, field: Field, label: &'static str, value: &str) -> Html {
    html! {
        <div class="field">
            <label>{ label }</label>
            <textarea
                rows="4"
                value={value.to_string()}
                oninput={link.callback(move |e: InputEvent| Msg::Edit(field, textarea_value(&e)))}
            />
        </div>
    }
}
