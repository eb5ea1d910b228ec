use log::debug;
use yew::platform::spawn_local;
use yew::prelude::*;

use common::filter::GroupFilter;

use crate::components::sheet::open_sheet;
use crate::helpers::show_toast;

use super::messages::Msg;
use super::state::CandidateDirectory;

pub fn update(
    component: &mut CandidateDirectory,
    ctx: &Context<CandidateDirectory>,
    msg: Msg,
) -> bool {
    match msg {
        Msg::Load { force } => {
            if component.loading {
                return false;
            }
            component.loading = true;

            let service = component.service.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                let candidates = service.fetch_candidates(force).await;
                link.send_message(Msg::Loaded {
                    candidates,
                    refreshed: force,
                });
            });
            true
        }
        Msg::Loaded {
            candidates,
            refreshed,
        } => {
            debug!("Directory received {} candidates", candidates.len());
            component.candidates = candidates;
            component.loading = false;
            component.loaded = true;
            if let Some(notice) = refresh_notice(refreshed, component.candidates.len()) {
                show_toast(notice);
            }
            true
        }
        Msg::SetCouncilType(council_type) => {
            if component.filter.council_type == council_type {
                return false;
            }
            component.filter.council_type = council_type;
            true
        }
        Msg::SetSearch(search) => {
            component.filter.search = search;
            true
        }
        Msg::SetGroup(group) => {
            component.filter.group = GroupFilter::parse(&group);
            true
        }
        Msg::ShowDetail(id) => {
            component.selected = component.candidates.iter().find(|c| c.id == id).cloned();
            if component.selected.is_some() {
                open_sheet(&component.sheet_ref);
            }
            true
        }
        Msg::CloseDetail => {
            component.selected = None;
            true
        }
    }
}

/// Toast after a forced refresh. A failed fetch also comes back empty, so an
/// empty result gets no confirmation.
fn refresh_notice(refreshed: bool, count: usize) -> Option<&'static str> {
    (refreshed && count > 0).then_some("후보자 정보를 새로 불러왔습니다.")
}
