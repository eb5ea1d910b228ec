//! File picker that validates a registration attachment and hands it to the
//! parent as base64.

use base64::{engine::general_purpose, Engine as _};
use common::model::submission::Attachment;
use common::upload::{extension_of, validate_flyer, validate_image, UploadError};
use gloo_file::futures::read_as_bytes;
use log::error;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttachmentKind {
    /// Candidate photo: images up to 5 MB.
    Photo,
    /// Election flyer: images or PDF up to 10 MB.
    Flyer,
}

impl AttachmentKind {
    fn accept(&self) -> &'static str {
        match self {
            AttachmentKind::Photo => "image/jpeg,image/png,image/webp",
            AttachmentKind::Flyer => "image/jpeg,image/png,image/webp,application/pdf",
        }
    }

    fn validate(&self, mime_type: &str, size: u64) -> Result<(), UploadError> {
        match self {
            AttachmentKind::Photo => validate_image(mime_type, size),
            AttachmentKind::Flyer => validate_flyer(mime_type, size),
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct AttachmentInputProps {
    pub label: AttrValue,
    pub kind: AttachmentKind,
    pub on_change: Callback<Option<Attachment>>,
}

pub enum Msg {
    Selected(web_sys::File),
    Encoded { name: String, attachment: Attachment },
    Failed(String),
    Remove,
}

pub struct AttachmentInput {
    file_name: Option<String>,
    error: Option<String>,
    reading: bool,
    input_ref: NodeRef,
}

impl AttachmentInput {
    fn reset_input(&self) {
        if let Some(input) = self.input_ref.cast::<HtmlInputElement>() {
            input.set_value("");
        }
    }
}

impl Component for AttachmentInput {
    type Message = Msg;
    type Properties = AttachmentInputProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            file_name: None,
            error: None,
            reading: false,
            input_ref: NodeRef::default(),
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Selected(file) => {
                let mime_type = file.type_();
                if let Err(e) = ctx.props().kind.validate(&mime_type, file.size() as u64) {
                    self.error = Some(e.to_string());
                    self.reset_input();
                    return true;
                }

                self.error = None;
                self.reading = true;

                let name = file.name();
                let link = ctx.link().clone();
                spawn_local(async move {
                    let file = gloo_file::File::from(file);
                    match read_as_bytes(&file).await {
                        Ok(bytes) => link.send_message(Msg::Encoded {
                            attachment: Attachment {
                                base64: general_purpose::STANDARD.encode(&bytes),
                                mime_type,
                                extension: extension_of(&name),
                            },
                            name,
                        }),
                        Err(e) => {
                            error!("Failed to read {name}: {e}");
                            link.send_message(Msg::Failed(
                                "파일 처리 중 오류가 발생했습니다.".to_string(),
                            ));
                        }
                    }
                });
                true
            }
            Msg::Encoded { name, attachment } => {
                self.reading = false;
                self.file_name = Some(name);
                ctx.props().on_change.emit(Some(attachment));
                true
            }
            Msg::Failed(message) => {
                self.reading = false;
                self.error = Some(message);
                self.reset_input();
                true
            }
            Msg::Remove => {
                self.file_name = None;
                self.error = None;
                self.reset_input();
                ctx.props().on_change.emit(None);
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        html! {
            <div class="field attachment">
                <label>{ props.label.clone() }</label>
                <input
                    type="file"
                    accept={props.kind.accept()}
                    ref={self.input_ref.clone()}
                    disabled={self.reading}
                    onchange={link.batch_callback(|e: Event| {
                        let input: HtmlInputElement = e.target_unchecked_into();
                        input.files().and_then(|files| files.get(0)).map(Msg::Selected)
                    })}
                />
                if self.reading {
                    <span class="muted small">{ "파일을 읽는 중..." }</span>
                }
                if let Some(name) = &self.file_name {
                    <div class="attachment-selected">
                        <span>{ name.clone() }</span>
                        <button type="button" onclick={link.callback(|_| Msg::Remove)}>{ "삭제" }</button>
                    </div>
                }
                if let Some(error) = &self.error {
                    <p class="error">{ error.clone() }</p>
                }
            </div>
        }
    }
}
