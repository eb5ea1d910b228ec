//! Slide-over panel used for the candidate detail view.
//!
//! The panel is always mounted; [`open_sheet`] and [`close_sheet`] toggle the
//! `show` class, which the stylesheet shows or hides.

use yew::prelude::*;

pub struct Sheet;

#[derive(Properties, PartialEq)]
pub struct SheetProps {
    #[prop_or_default]
    pub children: Html,
    pub node_ref: NodeRef,
    #[prop_or_default]
    pub on_close: Callback<()>,
}

impl Component for Sheet {
    type Message = ();
    type Properties = SheetProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Sheet
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let props = ctx.props();
        let node_ref = props.node_ref.clone();
        let on_close = props.on_close.clone();
        let close = Callback::from(move |_: MouseEvent| {
            close_sheet(&node_ref);
            on_close.emit(());
        });

        html! {
            <div class="sheet" ref={props.node_ref.clone()}>
                <div class="sheet-backdrop" onclick={close.clone()}></div>
                <div class="sheet-panel">
                    <button class="sheet-close" title="닫기" onclick={close}>{ "✕" }</button>
                    { props.children.clone() }
                </div>
            </div>
        }
    }
}

pub fn open_sheet(sheet_ref: &NodeRef) {
    toggle(sheet_ref, true);
}

pub fn close_sheet(sheet_ref: &NodeRef) {
    toggle(sheet_ref, false);
}

fn toggle(sheet_ref: &NodeRef, show: bool) {
    if let Some(sheet) = sheet_ref.cast::<web_sys::HtmlElement>() {
        let classes = sheet.class_list();
        if show {
            classes.add_1("show").ok();
        } else {
            classes.remove_1("show").ok();
        }
    }
}
