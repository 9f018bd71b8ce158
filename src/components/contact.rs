use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::components::toast::{Toast, ToastKind, ToastMessage};
use crate::config;
use crate::contact_form::{ContactForm, EventType, Field};

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_state(ContactForm::default);
    let toast = use_state(|| None::<ToastMessage>);
    let toast_counter = use_mut_ref(|| 0u32);

    let show_toast = {
        let toast = toast.clone();
        let toast_counter = toast_counter.clone();
        Callback::from(move |(kind, text): (ToastKind, &'static str)| {
            let id = {
                let mut counter = toast_counter.borrow_mut();
                *counter = counter.wrapping_add(1);
                *counter
            };
            toast.set(Some(ToastMessage {
                id,
                kind,
                text: text.to_string(),
            }));
        })
    };

    let dismiss_toast = {
        let toast = toast.clone();
        Callback::from(move |_: ()| toast.set(None))
    };

    let set_field = |field: Field| {
        let form = form.clone();
        Callback::from(move |value: String| form.set(form.with_field(field, value)))
    };

    let text_input = |field: Field| {
        let set_field = set_field(field);
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            set_field.emit(input.value());
        })
    };

    let on_message = {
        let set_field = set_field(Field::Message);
        Callback::from(move |e: InputEvent| {
            let input: HtmlTextAreaElement = e.target_unchecked_into();
            set_field.emit(input.value());
        })
    };

    let on_event_type = {
        let set_field = set_field(Field::EventType);
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            set_field.emit(select.value());
        })
    };

    let onsubmit = {
        let form = form.clone();
        let show_toast = show_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            match form.validate() {
                Ok(()) => {
                    let event_label = EventType::from_value(&form.event_type)
                        .map(EventType::label)
                        .unwrap_or("unknown");
                    log::info!("Contact form accepted for {}", event_label);
                    show_toast.emit((ToastKind::Success, "Thank you! We'll get back to you soon."));
                    form.set(ContactForm::default());
                }
                Err(err) => {
                    log::info!("Contact form rejected: {}", err);
                    show_toast.emit((ToastKind::Error, "Please fill in all required fields"));
                }
            }
        })
    };

    html! {
        <section id="contact" class="contact-section">
            <style>
                {r#"
                    .contact-section {
                        padding: 5rem 1rem;
                        background: rgba(240, 232, 220, 0.2);
                    }
                    .contact-grid {
                        display: grid;
                        grid-template-columns: 1fr 1fr;
                        gap: 3rem;
                        max-width: 72rem;
                        margin: 0 auto;
                    }
                    .contact-form {
                        display: flex;
                        flex-direction: column;
                        gap: 1.5rem;
                    }
                    .contact-form input,
                    .contact-form select,
                    .contact-form textarea {
                        height: 3rem;
                        padding: 0 1rem;
                        border: 1px solid rgba(0, 0, 0, 0.12);
                        border-radius: 8px;
                        font-size: 1rem;
                        background: #fff;
                    }
                    .contact-form textarea {
                        min-height: 120px;
                        padding: 0.75rem 1rem;
                        resize: none;
                    }
                    .contact-form input:focus,
                    .contact-form select:focus,
                    .contact-form textarea:focus {
                        outline: none;
                        border-color: #d4af37;
                    }
                    .contact-submit {
                        padding: 1.25rem;
                        font-size: 1.1rem;
                        font-weight: 500;
                        color: #fff;
                        background: #141414;
                        border: none;
                        border-radius: 999px;
                        cursor: pointer;
                        transition: transform 0.2s;
                    }
                    .contact-submit:hover { transform: scale(1.05); }
                    .contact-info {
                        display: flex;
                        flex-direction: column;
                        gap: 2rem;
                    }
                    .contact-card {
                        background: #fff;
                        border: 1px solid rgba(0, 0, 0, 0.08);
                        border-radius: 16px;
                        padding: 2rem;
                    }
                    .contact-card p { color: #6b6b6b; }
                    .contact-map {
                        height: 300px;
                        border-radius: 16px;
                        overflow: hidden;
                        border: 1px solid rgba(0, 0, 0, 0.08);
                    }
                    @media (max-width: 1024px) {
                        .contact-grid { grid-template-columns: 1fr; }
                    }
                "#}
            </style>
            <div class="section-header reveal">
                <h2>{"Get Started"}</h2>
                <p>{"Let's create something unforgettable together"}</p>
            </div>
            <div class="contact-grid">
                <form class="contact-form reveal" {onsubmit}>
                    <input
                        placeholder="Your Name *"
                        value={form.name.clone()}
                        oninput={text_input(Field::Name)}
                        required=true
                    />
                    <input
                        type="email"
                        placeholder="Email Address *"
                        value={form.email.clone()}
                        oninput={text_input(Field::Email)}
                        required=true
                    />
                    <input
                        type="tel"
                        placeholder="Phone Number *"
                        value={form.phone.clone()}
                        oninput={text_input(Field::Phone)}
                        required=true
                    />
                    <select onchange={on_event_type} required=true>
                        <option value="" disabled=true selected={form.event_type.is_empty()}>
                            {"Select Event Type *"}
                        </option>
                        { for EventType::ALL.iter().map(|event_type| html! {
                            <option
                                key={event_type.value()}
                                value={event_type.value()}
                                selected={form.event_type == event_type.value()}
                            >
                                {event_type.label()}
                            </option>
                        }) }
                    </select>
                    <textarea
                        placeholder="Tell us about your event..."
                        value={form.message.clone()}
                        oninput={on_message}
                    />
                    <button type="submit" class="contact-submit">
                        {"Start Your Event With Us"}
                    </button>
                </form>

                <div class="contact-info">
                    <div class="contact-card">
                        <h3>{"Contact Information"}</h3>
                        <p>{format!("📧 Email: {}", config::EMAIL)}</p>
                        <p>{format!("📱 Phone: {}", config::PHONE_DISPLAY)}</p>
                        <p>{format!("📍 Location: {}", config::LOCATION)}</p>
                    </div>
                    <div class="contact-map">
                        <iframe
                            src={config::MAP_EMBED_URL}
                            width="100%"
                            height="100%"
                            style="border: 0;"
                            allowfullscreen=true
                            loading="lazy"
                            referrerpolicy="no-referrer-when-downgrade"
                            title="Kerala Location"
                        />
                    </div>
                </div>
            </div>
            {
                if let Some(message) = (*toast).clone() {
                    html! { <Toast {message} on_dismiss={dismiss_toast} /> }
                } else {
                    html! {}
                }
            }
        </section>
    }
}
