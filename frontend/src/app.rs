use common::model::config::EndpointConfig;
use yew::platform::spawn_local;
use yew::{classes, html, Component, Context, Html};

use crate::components::candidates::CandidateDirectory;
use crate::components::policy::PolicyForm;
use crate::components::register::RegisterForm;
use crate::services::config::load_endpoints;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Candidates,
    Register,
    Policy,
}

impl Page {
    const ALL: [Page; 3] = [Page::Candidates, Page::Register, Page::Policy];

    fn label(self) -> &'static str {
        match self {
            Page::Candidates => "후보자 정보",
            Page::Register => "후보자 등록",
            Page::Policy => "정책 제안",
        }
    }
}

pub enum Msg {
    ConfigLoaded(EndpointConfig),
    Navigate(Page),
}

pub struct App {
    page: Page,
    /// `None` until `/api/config` answers or falls back.
    endpoints: Option<EndpointConfig>,
}

impl Component for App {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let link = ctx.link().clone();
        spawn_local(async move {
            link.send_message(Msg::ConfigLoaded(load_endpoints().await));
        });

        Self {
            page: Page::Candidates,
            endpoints: None,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::ConfigLoaded(endpoints) => {
                self.endpoints = Some(endpoints);
                true
            }
            Msg::Navigate(page) => {
                if self.page == page {
                    return false;
                }
                self.page = page;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();

        let content = match &self.endpoints {
            None => html! { <div class="loading">{ "불러오는 중..." }</div> },
            Some(endpoints) => match self.page {
                Page::Candidates => html! { <CandidateDirectory endpoints={endpoints.clone()} /> },
                Page::Register => html! { <RegisterForm endpoints={endpoints.clone()} /> },
                Page::Policy => html! { <PolicyForm endpoints={endpoints.clone()} /> },
            },
        };

        html! {
            <div class="app">
                <nav class="nav">
                    <span class="brand">{ "사회복지 후보자 포털" }</span>
                    {
                        for Page::ALL.iter().map(|&page| html! {
                            <button
                                class={classes!("nav-item", (self.page == page).then_some("active"))}
                                onclick={link.callback(move |_| Msg::Navigate(page))}
                            >
                                { page.label() }
                            </button>
                        })
                    }
                </nav>
                <main>{ content }</main>
            </div>
        }
    }
}
