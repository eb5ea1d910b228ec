//! Rendering of the candidate directory: council tabs, search and gu
//! filters, the card grid and the detail sheet.

use common::filter::{count_by_group, GroupFilter};
use common::model::candidate::{Candidate, CouncilType};
use common::model::district::SEOUL_GUS;
use common::photo::photo_view_url;
use yew::html::Scope;
use yew::prelude::*;

use crate::components::sheet::Sheet;
use crate::helpers::{input_value, select_value};

use super::messages::Msg;
use super::state::CandidateDirectory;

pub fn view(component: &CandidateDirectory, ctx: &Context<CandidateDirectory>) -> Html {
    let link = ctx.link();
    let visible = component.visible();

    html! {
        <div class="page candidates">
            <header class="page-header">
                <h1>{ "내 선거구 후보자" }</h1>
                <p class="muted">{ "승인된 예비후보자 정보를 확인하세요" }</p>
            </header>

            { council_tabs(component, link) }
            { filters(component, link) }

            {
                if !component.loaded {
                    html! { <p class="muted loading">{ "후보자 정보를 불러오는 중..." }</p> }
                } else if visible.is_empty() {
                    empty_state(component)
                } else {
                    results(&visible, link)
                }
            }

            <Sheet node_ref={component.sheet_ref.clone()} on_close={link.callback(|_| Msg::CloseDetail)}>
                { component.selected.as_ref().map(detail).unwrap_or_default() }
            </Sheet>
        </div>
    }
}

fn council_tabs(component: &CandidateDirectory, link: &Scope<CandidateDirectory>) -> Html {
    let tab = |council_type: CouncilType| {
        let class = classes!(
            "tab",
            (component.filter.council_type == council_type).then_some("active")
        );
        html! {
            <button {class} onclick={link.callback(move |_| Msg::SetCouncilType(council_type))}>
                { council_type.label() }
            </button>
        }
    };

    html! {
        <div class="tabs">
            { tab(CouncilType::Si) }
            { tab(CouncilType::Gu) }
        </div>
    }
}

fn filters(component: &CandidateDirectory, link: &Scope<CandidateDirectory>) -> Html {
    let selected_group = component.filter.group.as_str().to_string();

    html! {
        <div class="filters">
            <input
                type="search"
                placeholder="후보자명, 선거구, 공약으로 검색..."
                value={component.filter.search.clone()}
                oninput={link.callback(|e: InputEvent| Msg::SetSearch(input_value(&e)))}
            />
            <select onchange={link.callback(|e: Event| Msg::SetGroup(select_value(&e)))}>
                <option value="all" selected={component.filter.group == GroupFilter::All}>
                    { "전체 자치구" }
                </option>
                {
                    for SEOUL_GUS.iter().map(|gu| html! {
                        <option value={*gu} selected={selected_group == *gu}>{ *gu }</option>
                    })
                }
            </select>
            <button
                class="refresh"
                disabled={component.loading}
                onclick={link.callback(|_| Msg::Load { force: true })}
            >
                { if component.loading { "불러오는 중..." } else { "새로고침" } }
            </button>
        </div>
    }
}

fn results(visible: &[Candidate], link: &Scope<CandidateDirectory>) -> Html {
    let groups = count_by_group(visible)
        .into_iter()
        .map(|(group, n)| format!("{group} {n}"))
        .collect::<Vec<_>>()
        .join(" · ");

    html! {
        <div class="results">
            <p class="muted">
                { "총 " }<strong>{ visible.len() }</strong>{ "명의 후보자" }
                <span class="group-counts">{ groups }</span>
            </p>
            <div class="card-grid">
                { for visible.iter().map(|candidate| card(candidate, link)) }
            </div>
        </div>
    }
}

fn card(candidate: &Candidate, link: &Scope<CandidateDirectory>) -> Html {
    let id = candidate.id.clone();

    html! {
        <article class="card" key={candidate.id.clone()} onclick={link.callback(move |_| Msg::ShowDetail(id.clone()))}>
            { photo(candidate, "card-photo") }
            <div class="card-body">
                <div class="card-title">
                    <h3>{ candidate.name.clone() }</h3>
                    if !candidate.party.is_empty() {
                        <span class="badge">{ candidate.party.clone() }</span>
                    }
                </div>
                <p class="muted">{ candidate.district.clone() }</p>
                if !candidate.current_position.is_empty() {
                    <p class="small muted">{ candidate.current_position.clone() }</p>
                }
                if let Some(label) = candidate.license().label() {
                    <span class="badge outline">{ label }</span>
                }
                if !candidate.welfare_policy.is_empty() {
                    <p class="policy clamp">{ format!("📋 {}", candidate.welfare_policy) }</p>
                }
            </div>
        </article>
    }
}

fn photo(candidate: &Candidate, class: &'static str) -> Html {
    match photo_view_url(&candidate.candidate_photo_url) {
        Some(src) => html! { <img {class} {src} alt={candidate.name.clone()} loading="lazy" /> },
        None => html! { <div class={classes!(class, "placeholder")}>{ "👤" }</div> },
    }
}

fn empty_state(component: &CandidateDirectory) -> Html {
    let council = component.filter.council_type.label();
    let description = match &component.filter.group {
        GroupFilter::Gu(gu) => format!("{gu}에 등록된 {council} 예비후보가 아직 없습니다."),
        GroupFilter::All => {
            "아직 승인된 예비후보자가 없습니다. 후보자 등록을 기다려주세요.".to_string()
        }
    };

    html! {
        <div class="empty">
            <h3>{ "등록된 후보자가 없습니다" }</h3>
            <p class="muted">{ description }</p>
        </div>
    }
}

fn detail(candidate: &Candidate) -> Html {
    let row = |label: &'static str, value: &str| {
        if value.is_empty() {
            Html::default()
        } else {
            html! {
                <div class="detail-row">
                    <dt>{ label }</dt>
                    <dd>{ value.to_string() }</dd>
                </div>
            }
        }
    };

    html! {
        <div class="detail">
            { photo(candidate, "detail-photo") }
            <h2>{ candidate.name.clone() }</h2>
            <p class="muted">
                { format!("{} · {}", candidate.council_type.label(), candidate.district) }
            </p>
            <dl>
                { row("소속 정당", &candidate.party) }
                { row("현직", &candidate.current_position) }
                { row("자격", candidate.license().label().unwrap_or_default()) }
                { row("주요 경력", &candidate.career_summary) }
                { row("복지 공약", &candidate.welfare_policy) }
                if candidate.has_election_office {
                    { row("선거사무소", &candidate.office_address) }
                }
                if candidate.has_kickoff_event {
                    <>
                        { row("출정식 일시", &candidate.kickoff_event_date) }
                        { row("출정식 안내", &candidate.kickoff_event_details) }
                    </>
                }
            </dl>
            <div class="detail-links">
                if !candidate.social_media_url.is_empty() {
                    <a href={candidate.social_media_url.clone()} target="_blank" rel="noopener noreferrer">
                        { "SNS 바로가기" }
                    </a>
                }
                if !candidate.election_flyer_url.is_empty() {
                    <a href={candidate.election_flyer_url.clone()} target="_blank" rel="noopener noreferrer">
                        { "선거 공보물 보기" }
                    </a>
                }
            </div>
        </div>
    }
}
