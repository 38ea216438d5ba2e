use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::config::Timings;
use crate::contact::{
    format_phone_number, BrowserTimer, Field, FormAction, FormState, FormSubmissionController,
    ReentryPolicy,
};

/// The contact form with its status message.
#[function_component(ContactSection)]
pub fn contact_section() -> Html {
    let state = use_reducer(FormState::default);
    let controller = {
        let dispatcher = state.dispatcher();
        use_memo(
            move |_| {
                FormSubmissionController::new(BrowserTimer, dispatcher, Timings::default())
                    .with_policy(ReentryPolicy::Ignore)
            },
            (),
        )
    };

    let onsubmit = {
        let state = state.clone();
        let controller = controller.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let fields = state.fields.clone();
            let controller = (*controller).clone();
            spawn_local(async move {
                controller.handle_submit(fields).await;
            });
        })
    };

    let on_input = |field: Field| {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            let value = match field {
                Field::Phone => {
                    let formatted = format_phone_number(&input.value());
                    input.set_value(&formatted);
                    formatted
                }
                _ => input.value(),
            };
            state.dispatch(FormAction::Edit(field, value));
        })
    };

    let on_message_input = {
        let state = state.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            state.dispatch(FormAction::Edit(Field::Message, input.value()));
        })
    };

    let message_html = match &state.message {
        Some(message) => {
            let (opacity, offset) = if state.revealed { ("1", "0") } else { ("0", "-10px") };
            html! {
                <div
                    id="form-message"
                    class={classes!("form-message", message.kind.css_class())}
                    style={format!(
                        "display: block; opacity: {}; transform: translateY({}); transition: all 0.3s ease;",
                        opacity, offset
                    )}
                >
                    { message.text.clone() }
                </div>
            }
        }
        None => html! {
            <div id="form-message" class="form-message" style="display: none;"></div>
        },
    };

    let button_label = if state.busy {
        html! { <><i class="fas fa-spinner fa-spin me-2"></i>{"იგზავნება..."}</> }
    } else {
        html! { <><i class="fas fa-paper-plane me-2"></i>{"შეტყობინების გაგზავნა"}</> }
    };

    html! {
        <form id="contactForm" class="contact-form" {onsubmit} novalidate={true}>
            <div class="row g-3">
                <div class="col-md-6">
                    <input
                        type="text"
                        name="name"
                        class="form-control"
                        placeholder="სახელი *"
                        value={state.fields.name.clone()}
                        oninput={on_input(Field::Name)}
                    />
                </div>
                <div class="col-md-6">
                    <input
                        type="email"
                        name="email"
                        class="form-control"
                        placeholder="ელ-ფოსტა *"
                        value={state.fields.email.clone()}
                        oninput={on_input(Field::Email)}
                    />
                </div>
                <div class="col-md-6">
                    <input
                        type="tel"
                        id="phone"
                        name="phone"
                        class="form-control"
                        placeholder="ტელეფონი"
                        value={state.fields.phone.clone()}
                        oninput={on_input(Field::Phone)}
                    />
                </div>
                <div class="col-md-6">
                    <input
                        type="text"
                        name="subject"
                        class="form-control"
                        placeholder="თემა *"
                        value={state.fields.subject.clone()}
                        oninput={on_input(Field::Subject)}
                    />
                </div>
                <div class="col-12">
                    <textarea
                        name="message"
                        class="form-control"
                        rows="5"
                        placeholder="შეტყობინება *"
                        value={state.fields.message.clone()}
                        oninput={on_message_input}
                    />
                </div>
                <div class="col-12">
                    <button
                        type="submit"
                        class={classes!("btn", "btn-primary", state.busy.then_some("loading"))}
                        disabled={state.busy}
                    >
                        { button_label }
                    </button>
                </div>
            </div>
            { message_html }
        </form>
    }
}
