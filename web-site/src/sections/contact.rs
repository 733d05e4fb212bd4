//! Contact - enquiry form bound to `ContactForm`

use dioxus::prelude::*;

use crate::contact::{ContactForm, ContactTransport, Field, FormStatus, SimulatedTransport, SubmitBlocked};
use crate::content::CONTACT_EMAIL;
use crate::ui::{FadeInView, GeneratedImage};

/// Label on the submit button for the current status
pub fn submit_label(status: FormStatus) -> &'static str {
    match status {
        FormStatus::Submitting => "Sending...",
        _ => "Send Message",
    }
}

#[component]
fn FormField(
    field: Field,
    label: &'static str,
    placeholder: &'static str,
    value: String,
    error: Option<&'static str>,
    oninput: EventHandler<String>,
) -> Element {
    let input_id = field.input_id();
    let error_id = field.error_id();
    let border = if error.is_some() { "#ef4444" } else { "rgba(255,255,255,0.1)" };
    let described_by = if error.is_some() { error_id } else { "" };
    let kind = if field == Field::Email { "email" } else { "text" };
    let input_style = format!(
        "width: 100%; box-sizing: border-box; background: #0a0a0a; border: 1px solid {border}; padding: 16px; color: #fff; font: inherit; outline: none;"
    );

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            label {
                r#for: input_id,
                style: "font-size: 14px; font-weight: 600; color: #9ca3af; text-transform: uppercase; letter-spacing: 0.1em;",
                "{label} "
                span { style: "color: #22d3ee;", "*" }
            }
            if field == Field::Message {
                textarea {
                    id: input_id,
                    name: "message",
                    rows: "5",
                    value: "{value}",
                    placeholder: placeholder,
                    "aria-required": "true",
                    "aria-invalid": error.is_some(),
                    "aria-describedby": described_by,
                    style: "{input_style}",
                    oninput: move |e: FormEvent| oninput.call(e.value()),
                }
            } else {
                input {
                    id: input_id,
                    r#type: kind,
                    value: "{value}",
                    placeholder: placeholder,
                    "aria-required": "true",
                    "aria-invalid": error.is_some(),
                    "aria-describedby": described_by,
                    style: "{input_style}",
                    oninput: move |e: FormEvent| oninput.call(e.value()),
                }
            }
            if let Some(message) = error {
                p { id: error_id, role: "alert", style: "color: #f87171; font-size: 14px; margin: 0;", "{message}" }
            }
        }
    }
}

#[component]
pub fn Contact() -> Element {
    let mut form = use_signal(ContactForm::new);

    let submit = move |e: FormEvent| {
        e.prevent_default();
        let started = form.write().begin_submit();
        match started {
            Ok(details) => {
                spawn(async move {
                    let outcome = SimulatedTransport::default().submit(&details).await;
                    form.write().finish_submit(outcome);
                });
            }
            Err(SubmitBlocked::Invalid(errors)) => log::debug!("contact form blocked: {errors:?}"),
            Err(SubmitBlocked::InFlight) => log::debug!("contact form already sending"),
        }
    };

    let snapshot = form();
    let status = snapshot.status();
    let details = snapshot.details().clone();
    let errors = *snapshot.errors();
    let failure = snapshot.failure().map(str::to_string);
    let button_label = submit_label(status);
    let sending = status == FormStatus::Submitting;
    let button_aria = if sending { "Sending message..." } else { "Send message" };

    rsx! {
        section {
            id: "contact",
            style: "padding: 128px 0; background: #0a0a0a; position: relative; overflow: hidden;",
            div {
                "aria-hidden": "true",
                style: "position: absolute; inset: 0; z-index: 0; pointer-events: none;",
                GeneratedImage {
                    name: "contact-bg",
                    alt: "",
                    overlay: 0.8,
                    style: "width: 100%; height: 100%; opacity: 0.3;",
                }
            }
            div {
                "aria-hidden": "true",
                style: "position: absolute; top: 0; right: 0; width: 500px; height: 500px; background: rgba(30,58,138,0.2); filter: blur(120px); border-radius: 50%; pointer-events: none;",
            }
            div {
                class: "container",
                style: "position: relative; z-index: 10;",
                FadeInView {
                    div {
                        style: "max-width: 896px; margin: 0 auto; background: rgba(17,17,17,0.9); backdrop-filter: blur(12px); border: 1px solid rgba(255,255,255,0.1); padding: clamp(32px, 5vw, 48px); position: relative; overflow: hidden; box-shadow: 0 25px 50px rgba(0,0,0,0.5);",
                        div {
                            "aria-hidden": "true",
                            style: "position: absolute; top: 0; left: 0; width: 100%; height: 4px; background: linear-gradient(90deg, #06b6d4, #3b82f6, #06b6d4);",
                        }
                        div {
                            style: "text-align: center; margin-bottom: 48px;",
                            h2 { style: "font-size: clamp(30px, 5vw, 48px); font-weight: 700; margin: 0 0 16px; color: #fff;", "Let's Build Something" }
                            p { style: "color: #9ca3af; margin: 0;", "Have a project in mind? Tell us about it." }
                        }

                        if status == FormStatus::Submitted {
                            div {
                                role: "alert",
                                "aria-live": "polite",
                                style: "text-align: center; padding: 48px 0;",
                                div {
                                    "aria-hidden": "true",
                                    style: "width: 64px; height: 64px; margin: 0 auto 24px; border-radius: 50%; background: rgba(6,182,212,0.2); display: flex; align-items: center; justify-content: center; color: #22d3ee; font-size: 28px;",
                                    "\u{2713}"
                                }
                                h3 { style: "font-size: 24px; font-weight: 700; color: #fff; margin: 0 0 16px;", "Message Sent!" }
                                p { style: "color: #9ca3af; margin: 0 0 24px;", "Thank you for reaching out. We'll get back to you within 24 hours." }
                                button {
                                    r#type: "button",
                                    style: "background: none; border: none; color: #22d3ee; font-weight: 600; cursor: pointer; padding: 4px 8px;",
                                    onclick: move |_| form.write().start_over(),
                                    "Send another message"
                                }
                            }
                        } else {
                            form {
                                novalidate: true,
                                style: "display: flex; flex-direction: column; gap: 24px;",
                                onsubmit: submit,
                                div {
                                    class: "grid-2 tight",
                                    FormField {
                                        field: Field::Name,
                                        label: "Name",
                                        placeholder: "John Doe",
                                        value: details.get(Field::Name).to_string(),
                                        error: errors.get(Field::Name),
                                        oninput: move |v: String| form.write().set_field(Field::Name, v),
                                    }
                                    FormField {
                                        field: Field::Email,
                                        label: "Email",
                                        placeholder: "john@company.com",
                                        value: details.get(Field::Email).to_string(),
                                        error: errors.get(Field::Email),
                                        oninput: move |v: String| form.write().set_field(Field::Email, v),
                                    }
                                }
                                FormField {
                                    field: Field::Message,
                                    label: "Project Description",
                                    placeholder: "Tell us about your idea...",
                                    value: details.get(Field::Message).to_string(),
                                    error: errors.get(Field::Message),
                                    oninput: move |v: String| form.write().set_field(Field::Message, v),
                                }
                                if let Some(message) = failure {
                                    p { role: "alert", style: "color: #f87171; margin: 0;", "{message}" }
                                }
                                div {
                                    style: "padding-top: 16px;",
                                    button {
                                        r#type: "submit",
                                        disabled: sending,
                                        "aria-label": button_aria,
                                        style: "min-width: 200px; padding: 14px 28px; border: none; border-radius: 9999px; font-weight: 600; color: #fff; cursor: pointer; background: linear-gradient(90deg, #06b6d4, #3b82f6);",
                                        "{button_label}"
                                    }
                                }
                            }
                        }

                        div {
                            style: "margin-top: 32px; text-align: center; border-top: 1px solid rgba(255,255,255,0.1); padding-top: 32px;",
                            p {
                                style: "color: #9ca3af; margin: 0;",
                                "Prefer email? Reach us directly at "
                                a {
                                    href: "mailto:{CONTACT_EMAIL}",
                                    style: "color: #22d3ee; font-weight: 700;",
                                    "{CONTACT_EMAIL}"
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn button_label_follows_status() {
        assert_eq!(submit_label(FormStatus::Editing), "Send Message");
        assert_eq!(submit_label(FormStatus::Submitting), "Sending...");
    }
}
