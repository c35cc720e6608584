//! Consultation request form: validation, attachment handling, and
//! dispatch to the form relay or the mailto fallback.
//!
//! The submit control is the concurrency guard: it is disabled for the
//! whole of an attempt, so a second submission can never race the first.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use std::{cell::RefCell, rc::Rc};

use crate::components::toast_host;
use crate::state::attachment::SelectedFile;
use crate::state::form::{self, ConsultationFields, SubmitPhase};
use crate::state::toast::ToastState;
use crate::util::{mailto, origin};

/// Fixed delay before declaring the mail draft handed off; the mail client
/// gives no completion signal to observe.
#[cfg(feature = "hydrate")]
const MAILTO_RESET_DELAY_MS: u64 = 600;

#[component]
pub fn ConsultationForm() -> impl IntoView {
    let toast = expect_context::<RwSignal<ToastState>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let summary = RwSignal::new(String::new());
    let phase = RwSignal::new(SubmitPhase::Idle);
    let attachment = RwSignal::new(None::<SelectedFile>);
    let file_input_ref = NodeRef::<leptos::html::Input>::new();

    // The DOM file handle rides outside the reactive graph; `attachment`
    // carries the displayable metadata.
    #[cfg(feature = "hydrate")]
    let file_handle = Rc::new(RefCell::new(None::<web_sys::File>));

    #[cfg(feature = "hydrate")]
    let reset_form = {
        let file_handle = Rc::clone(&file_handle);
        move || {
            name.set(String::new());
            email.set(String::new());
            phone.set(String::new());
            summary.set(String::new());
            attachment.set(None);
            file_handle.borrow_mut().take();
            if let Some(input) = file_input_ref.get_untracked() {
                input.set_value("");
            }
        }
    };

    let on_file_change = {
        #[cfg(feature = "hydrate")]
        let file_handle = Rc::clone(&file_handle);
        move |_ev: leptos::ev::Event| {
            #[cfg(feature = "hydrate")]
            {
                let Some(input) = file_input_ref.get_untracked() else {
                    return;
                };
                let Some(file) = input.files().and_then(|files| files.get(0)) else {
                    return;
                };
                let selected = SelectedFile {
                    name: file.name(),
                    size_bytes: file.size(),
                    mime_type: file.type_(),
                };
                match crate::state::attachment::validate(&selected) {
                    Ok(()) => {
                        attachment.set(Some(selected));
                        *file_handle.borrow_mut() = Some(file);
                    }
                    Err(err) => {
                        attachment.set(None);
                        file_handle.borrow_mut().take();
                        input.set_value("");
                        toast_host::show(toast, "Attachment rejected", &err.to_string(), true);
                    }
                }
            }
        }
    };

    let on_remove = {
        #[cfg(feature = "hydrate")]
        let file_handle = Rc::clone(&file_handle);
        move |_| {
            attachment.set(None);
            #[cfg(feature = "hydrate")]
            {
                file_handle.borrow_mut().take();
                if let Some(input) = file_input_ref.get_untracked() {
                    input.set_value("");
                }
            }
        }
    };

    let on_submit = {
        #[cfg(feature = "hydrate")]
        let file_handle = Rc::clone(&file_handle);
        #[cfg(feature = "hydrate")]
        let reset_form = reset_form.clone();
        move |ev: leptos::ev::SubmitEvent| {
            ev.prevent_default();
            if phase.get_untracked().is_busy() {
                return;
            }

            let fields = ConsultationFields {
                name: name.get_untracked(),
                email: email.get_untracked(),
                phone: phone.get_untracked(),
                summary: summary.get_untracked(),
            };
            let clean = match form::validate(&fields) {
                Ok(clean) => clean,
                Err(desc) => {
                    toast_host::show(toast, form::MISSING_FIELDS_TITLE, desc, true);
                    return;
                }
            };

            if origin::is_local_file() {
                // No origin to POST from; hand the visitor a mail draft.
                phase.set(SubmitPhase::OpeningEmail);
                let draft = mailto::draft_url(&clean, attachment.get_untracked().is_some());
                origin::navigate_to(&draft);
                #[cfg(feature = "hydrate")]
                {
                    let reset_form = reset_form.clone();
                    leptos::task::spawn_local(async move {
                        gloo_timers::future::sleep(std::time::Duration::from_millis(
                            MAILTO_RESET_DELAY_MS,
                        ))
                        .await;
                        toast_host::show(
                            toast,
                            "Email draft opened",
                            "Please press Send in your email app to deliver this query.",
                            false,
                        );
                        reset_form();
                        phase.set(SubmitPhase::Idle);
                    });
                }
                return;
            }

            phase.set(SubmitPhase::Sending);
            #[cfg(feature = "hydrate")]
            {
                let attached = file_handle.borrow().clone();
                let reset_form = reset_form.clone();
                leptos::task::spawn_local(async move {
                    let page_url = origin::page_href();
                    match crate::net::relay::submit_consultation(
                        &clean,
                        &page_url,
                        attached.as_ref(),
                    )
                    .await
                    {
                        Ok(()) => {
                            toast_host::show(
                                toast,
                                "Request sent",
                                "Your consultation request was sent successfully.",
                                false,
                            );
                            reset_form();
                        }
                        Err(err) => {
                            leptos::logging::warn!("consultation submit failed: {err}");
                            toast_host::show(
                                toast,
                                "Send failed",
                                "Unable to send right now. Please try again in a moment.",
                                true,
                            );
                        }
                    }
                    phase.set(SubmitPhase::Idle);
                });
            }
        }
    };

    view! {
        <form class="consultation-form" on:submit=on_submit>
            <div class="consultation-form__row">
                <input
                    class="consultation-form__input"
                    type="text"
                    name="name"
                    placeholder="Your name"
                    prop:value=move || name.get()
                    on:input=move |ev| name.set(event_target_value(&ev))
                />
                <input
                    class="consultation-form__input"
                    type="email"
                    name="email"
                    placeholder="you@example.com"
                    prop:value=move || email.get()
                    on:input=move |ev| email.set(event_target_value(&ev))
                />
            </div>
            <input
                class="consultation-form__input"
                type="tel"
                name="phone"
                placeholder="Phone (optional)"
                prop:value=move || phone.get()
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <textarea
                class="consultation-form__textarea"
                name="summary"
                placeholder="Briefly describe your project"
                rows="5"
                prop:value=move || summary.get()
                on:input=move |ev| summary.set(event_target_value(&ev))
            ></textarea>
            <div class="consultation-form__attachment">
                <label class="consultation-form__file-label">
                    "Attach a brief (PDF or Word, optional)"
                    <input
                        type="file"
                        accept=".pdf,.doc,.docx"
                        node_ref=file_input_ref
                        on:change=on_file_change
                    />
                </label>
                <Show when=move || attachment.get().is_some()>
                    <div class="attachment-chip">
                        <span class="attachment-chip__name">
                            {move || attachment.get().map(|file| file.name).unwrap_or_default()}
                        </span>
                        <button
                            type="button"
                            class="attachment-chip__remove"
                            aria-label="Remove attachment"
                            on:click=on_remove
                        >
                            "\u{2715}"
                        </button>
                    </div>
                </Show>
            </div>
            <button
                class="consultation-form__submit"
                type="submit"
                disabled=move || phase.get().is_busy()
            >
                {move || phase.get().label()}
            </button>
        </form>
    }
}
