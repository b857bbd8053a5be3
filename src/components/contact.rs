use serde::Serialize;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::context::SiteContext;
use crate::utils::mask::mask_phone;
use crate::utils::scheduler::TimerSleep;
use crate::utils::submit::{run_submission, SubmitPhase};
use crate::utils::validate::{check, FieldKind};

/// What a real backend would receive. There is no backend: the encoded body
/// only goes to the console diagnostic log.
#[derive(Serialize)]
struct ContactPayload {
    name: String,
    email: String,
    phone: String,
    service: String,
    message: String,
}

const SERVICE_OPTIONS: [(&str, &str); 4] = [
    ("branding", "Brand identity"),
    ("web", "Web design"),
    ("product", "Product interfaces"),
    ("consulting", "Technical consulting"),
];

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let ctx = use_context::<SiteContext>();

    let name = use_state(String::new);
    let email = use_state(String::new);
    let phone = use_state(String::new);
    let service = use_state(String::new);
    let message = use_state(String::new);

    let name_err = use_state(|| None::<&'static str>);
    let email_err = use_state(|| None::<&'static str>);
    let phone_err = use_state(|| None::<&'static str>);
    let service_err = use_state(|| None::<&'static str>);
    let message_err = use_state(|| None::<&'static str>);

    let submitting = use_state_eq(|| false);
    let sent = use_state_eq(|| false);

    let name_ref = use_node_ref();
    let email_ref = use_node_ref();
    let phone_ref = use_node_ref();
    let service_ref = use_node_ref();
    let message_ref = use_node_ref();

    let onsubmit = {
        let name = name.clone();
        let email = email.clone();
        let phone = phone.clone();
        let service = service.clone();
        let message = message.clone();
        let name_err = name_err.clone();
        let email_err = email_err.clone();
        let phone_err = phone_err.clone();
        let service_err = service_err.clone();
        let message_err = message_err.clone();
        let name_ref = name_ref.clone();
        let email_ref = email_ref.clone();
        let phone_ref = phone_ref.clone();
        let service_ref = service_ref.clone();
        let message_ref = message_ref.clone();
        let submitting = submitting.clone();
        let sent = sent.clone();
        let ctx = ctx.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            let results = [
                check(FieldKind::Text, &name),
                check(FieldKind::Email, &email),
                check(FieldKind::Phone, &phone),
                check(FieldKind::Select, &service),
                check(FieldKind::Text, &message),
            ];
            name_err.set(results[0]);
            email_err.set(results[1]);
            phone_err.set(results[2]);
            service_err.set(results[3]);
            message_err.set(results[4]);
            if let Some(index) = results.iter().position(|r| r.is_some()) {
                let refs = [&name_ref, &email_ref, &phone_ref, &service_ref, &message_ref];
                if let Some(el) = refs[index].cast::<web_sys::HtmlElement>() {
                    let _ = el.focus();
                }
                return;
            }

            let payload = ContactPayload {
                name: (*name).clone(),
                email: (*email).clone(),
                phone: (*phone).clone(),
                service: (*service).clone(),
                message: (*message).clone(),
            };
            match serde_json::to_string(&payload) {
                Ok(body) => gloo_console::log!("contact submission:", body),
                Err(err) => log::warn!("could not encode contact payload: {err}"),
            }

            let name = name.clone();
            let email = email.clone();
            let phone = phone.clone();
            let service = service.clone();
            let message = message.clone();
            let submitting = submitting.clone();
            let sent = sent.clone();
            let ctx = ctx.clone();
            wasm_bindgen_futures::spawn_local(async move {
                run_submission(&TimerSleep, |phase| match phase {
                    SubmitPhase::Sending => submitting.set(true),
                    SubmitPhase::Delivered => {
                        submitting.set(false);
                        name.set(String::new());
                        email.set(String::new());
                        phone.set(String::new());
                        service.set(String::new());
                        message.set(String::new());
                        sent.set(true);
                        if let Some(ctx) = &ctx {
                            ctx.announce
                                .emit("Your message has been sent. We will reply shortly.".to_string());
                        }
                    }
                    SubmitPhase::Cleared => sent.set(false),
                })
                .await;
            });
        })
    };

    html! {
        <section class="contact" id="contact" data-reveal="fade-up">
            <h2>{"Tell us about your project"}</h2>
            <form class="contact-form" novalidate=true onsubmit={onsubmit}>
                <div class={classes!("field", (*name_err).map(|_| "invalid"))}>
                    <label for="contact-name">{"Name"}</label>
                    <input
                        id="contact-name"
                        name="name"
                        type="text"
                        ref={name_ref.clone()}
                        value={(*name).clone()}
                        aria-invalid={if (*name_err).is_some() { "true" } else { "false" }}
                        onblur={let name = name.clone(); let name_err = name_err.clone(); move |_: FocusEvent| {
                            name_err.set(check(FieldKind::Text, &name));
                        }}
                        oninput={let name = name.clone(); let name_err = name_err.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let value = input.value();
                            if (*name_err).is_some() {
                                name_err.set(check(FieldKind::Text, &value));
                            }
                            name.set(value);
                        }}
                    />
                    {
                        if let Some(msg) = *name_err {
                            html! { <span class="field-error">{msg}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class={classes!("field", (*email_err).map(|_| "invalid"))}>
                    <label for="contact-email">{"Email"}</label>
                    <input
                        id="contact-email"
                        name="email"
                        type="email"
                        ref={email_ref.clone()}
                        value={(*email).clone()}
                        aria-invalid={if (*email_err).is_some() { "true" } else { "false" }}
                        onblur={let email = email.clone(); let email_err = email_err.clone(); move |_: FocusEvent| {
                            email_err.set(check(FieldKind::Email, &email));
                        }}
                        oninput={let email = email.clone(); let email_err = email_err.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let value = input.value();
                            if (*email_err).is_some() {
                                email_err.set(check(FieldKind::Email, &value));
                            }
                            email.set(value);
                        }}
                    />
                    {
                        if let Some(msg) = *email_err {
                            html! { <span class="field-error">{msg}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class={classes!("field", (*phone_err).map(|_| "invalid"))}>
                    <label for="contact-phone">{"Phone"}</label>
                    <input
                        id="contact-phone"
                        name="phone"
                        type="tel"
                        placeholder="(11) 98765-4321"
                        ref={phone_ref.clone()}
                        value={(*phone).clone()}
                        aria-invalid={if (*phone_err).is_some() { "true" } else { "false" }}
                        onblur={let phone = phone.clone(); let phone_err = phone_err.clone(); move |_: FocusEvent| {
                            phone_err.set(check(FieldKind::Phone, &phone));
                        }}
                        oninput={let phone = phone.clone(); let phone_err = phone_err.clone(); move |e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            let masked = mask_phone(&input.value());
                            // Keep the control in the masked shape while typing.
                            input.set_value(&masked);
                            if (*phone_err).is_some() {
                                phone_err.set(check(FieldKind::Phone, &masked));
                            }
                            phone.set(masked);
                        }}
                    />
                    {
                        if let Some(msg) = *phone_err {
                            html! { <span class="field-error">{msg}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class={classes!("field", (*service_err).map(|_| "invalid"))}>
                    <label for="contact-service">{"Service"}</label>
                    <select
                        id="contact-service"
                        name="service"
                        ref={service_ref.clone()}
                        aria-invalid={if (*service_err).is_some() { "true" } else { "false" }}
                        onchange={let service = service.clone(); let service_err = service_err.clone(); move |e: Event| {
                            let select: HtmlSelectElement = e.target_unchecked_into();
                            let value = select.value();
                            service_err.set(check(FieldKind::Select, &value));
                            service.set(value);
                        }}
                    >
                        <option value="" selected={service.is_empty()}>{"Choose a service"}</option>
                        { for SERVICE_OPTIONS.iter().map(|(value, label)| html! {
                            <option value={*value} selected={*service == *value}>{*label}</option>
                        }) }
                    </select>
                    {
                        if let Some(msg) = *service_err {
                            html! { <span class="field-error">{msg}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <div class={classes!("field", (*message_err).map(|_| "invalid"))}>
                    <label for="contact-message">{"Message"}</label>
                    <textarea
                        id="contact-message"
                        name="message"
                        rows="5"
                        ref={message_ref.clone()}
                        value={(*message).clone()}
                        aria-invalid={if (*message_err).is_some() { "true" } else { "false" }}
                        onblur={let message = message.clone(); let message_err = message_err.clone(); move |_: FocusEvent| {
                            message_err.set(check(FieldKind::Text, &message));
                        }}
                        oninput={let message = message.clone(); let message_err = message_err.clone(); move |e: InputEvent| {
                            let area: HtmlTextAreaElement = e.target_unchecked_into();
                            let value = area.value();
                            if (*message_err).is_some() {
                                message_err.set(check(FieldKind::Text, &value));
                            }
                            message.set(value);
                        }}
                    />
                    {
                        if let Some(msg) = *message_err {
                            html! { <span class="field-error">{msg}</span> }
                        } else {
                            html! {}
                        }
                    }
                </div>

                <button type="submit" class="contact-submit" disabled={*submitting}>
                    { if *submitting { "Sending…" } else { "Send message" } }
                </button>

                {
                    if *sent {
                        html! {
                            <p class="form-success" role="status">
                                {"Thanks! Your message is on its way. We will reply shortly."}
                            </p>
                        }
                    } else {
                        html! {}
                    }
                }
            </form>
            <style>{CONTACT_CSS}</style>
        </section>
    }
}

const CONTACT_CSS: &str = r#"
.contact {
    max-width: 640px;
    margin: 0 auto;
    padding: 5rem 1.5rem 7rem;
}
.contact h2 {
    font-size: 2.2rem;
    text-align: center;
    margin-bottom: 2.5rem;
}
.contact-form .field {
    margin-bottom: 1.3rem;
    display: flex;
    flex-direction: column;
}
.contact-form label {
    margin-bottom: 0.4rem;
    color: rgba(255, 255, 255, 0.8);
}
.contact-form input,
.contact-form select,
.contact-form textarea {
    background: rgba(30, 30, 36, 0.7);
    border: 1px solid rgba(126, 178, 255, 0.2);
    border-radius: 8px;
    padding: 0.75rem 0.9rem;
    color: #fff;
    font: inherit;
}
.contact-form .invalid input,
.contact-form .invalid select,
.contact-form .invalid textarea {
    border-color: #ff6b6b;
}
.field-error {
    margin-top: 0.35rem;
    color: #ff6b6b;
    font-size: 0.85rem;
}
.contact-submit {
    width: 100%;
    padding: 0.95rem;
    border: none;
    border-radius: 8px;
    background: #1E90FF;
    color: #fff;
    font-size: 1rem;
    font-weight: 600;
    cursor: pointer;
    transition: background 0.2s ease;
}
.contact-submit:hover {
    background: #3f9fff;
}
.contact-submit:disabled {
    opacity: 0.6;
    cursor: wait;
}
.form-success {
    margin-top: 1.2rem;
    text-align: center;
    color: #6fd18b;
}
"#;
