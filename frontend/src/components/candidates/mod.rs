//! Candidate directory page.
//!
//! Loads the list through the cached `CandidateService` on mount, then
//! filters and orders it locally on every input change. The refresh button
//! forces a network fetch.

use yew::prelude::*;

use common::model::config::EndpointConfig;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::CandidateDirectory;

#[derive(Properties, PartialEq, Clone)]
pub struct CandidateDirectoryProps {
    pub endpoints: EndpointConfig,
}

impl Component for CandidateDirectory {
    type Message = Msg;
    type Properties = CandidateDirectoryProps;

    fn create(ctx: &Context<Self>) -> Self {
        ctx.link().send_message(Msg::Load { force: false });
        CandidateDirectory::new(&ctx.props().endpoints)
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        if ctx.props().endpoints != old_props.endpoints {
            // a fetch still running against the old service may land later
            *self = CandidateDirectory::new(&ctx.props().endpoints);
            ctx.link().send_message(Msg::Load { force: false });
        }
        true
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }
}
