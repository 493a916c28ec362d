use gloo_net::http::Request;
use log::{error, info};
use thiserror::Error;
use wasm_bindgen_futures::spawn_local;
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};
use yew::prelude::*;
use yew_router::prelude::*;

use crate::config;
use crate::Route;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("Please fill in the {0} field.")]
    MissingField(&'static str),
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("The form service rejected the message (status {0}). Please email us instead.")]
    Rejected(u16),
    #[error("Couldn't send your message: {0}")]
    Network(String),
}

/// Field values of one form, in display order.
#[derive(Debug, Clone, PartialEq)]
pub struct FormSubmission {
    form: &'static str,
    fields: Vec<(&'static str, String)>,
    required: &'static [&'static str],
}

pub fn is_valid_email(email: &str) -> bool {
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    !local.is_empty()
        && !domain.contains('@')
        && !email.contains(char::is_whitespace)
        && domain
            .split_once('.')
            .map_or(false, |(host, tld)| !host.is_empty() && !tld.is_empty() && !tld.ends_with('.'))
}

impl FormSubmission {
    pub fn new(form: &'static str) -> Self {
        Self {
            form,
            fields: Vec::new(),
            required: &[],
        }
    }

    pub fn field(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.fields.push((name, value.into()));
        self
    }

    pub fn required(mut self, names: &'static [&'static str]) -> Self {
        self.required = names;
        self
    }

    pub fn value(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| *field == name)
            .map(|(_, value)| value.as_str())
    }

    pub fn validate(&self) -> Result<(), FormError> {
        for &name in self.required {
            if self.value(name).map_or(true, |value| value.trim().is_empty()) {
                return Err(FormError::MissingField(name));
            }
        }
        if let Some(email) = self.value("email") {
            if !is_valid_email(email.trim()) {
                return Err(FormError::InvalidEmail);
            }
        }
        Ok(())
    }

    /// `application/x-www-form-urlencoded` body, subject line first.
    pub fn encode(&self) -> String {
        let subject = format!("New {} enquiry", self.form);
        std::iter::once(("_subject", subject.as_str()))
            .chain(self.fields.iter().map(|(name, value)| (*name, value.trim())))
            .map(|(name, value)| format!("{}={}", urlencoding::encode(name), urlencoding::encode(value)))
            .collect::<Vec<_>>()
            .join("&")
    }
}

pub async fn submit(endpoint: &str, submission: &FormSubmission) -> Result<(), FormError> {
    let response = Request::post(endpoint)
        .header("Content-Type", "application/x-www-form-urlencoded")
        .header("Accept", "application/json")
        .body(submission.encode())
        .send()
        .await
        .map_err(|err| FormError::Network(err.to_string()))?;

    if response.ok() {
        Ok(())
    } else {
        Err(FormError::Rejected(response.status()))
    }
}

fn bind_input(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(e.target_unchecked_into::<HtmlInputElement>().value());
    })
}

fn bind_textarea(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        state.set(e.target_unchecked_into::<HtmlTextAreaElement>().value());
    })
}

fn bind_select(state: &UseStateHandle<String>) -> Callback<Event> {
    let state = state.clone();
    Callback::from(move |e: Event| {
        state.set(e.target_unchecked_into::<HtmlSelectElement>().value());
    })
}

/// Validates, posts and on success moves on to the confirmation page.
fn deliver(
    submission: FormSubmission,
    navigator: Option<Navigator>,
    error: UseStateHandle<Option<FormError>>,
    submitting: UseStateHandle<bool>,
) {
    if let Err(err) = submission.validate() {
        error.set(Some(err));
        return;
    }
    error.set(None);
    submitting.set(true);

    spawn_local(async move {
        match submit(config::form_endpoint(), &submission).await {
            Ok(()) => {
                info!("{} form submitted", submission.form);
                if let Some(navigator) = navigator {
                    navigator.push(&Route::Thanks);
                }
            }
            Err(err) => {
                error!("{} form failed: {}", submission.form, err);
                error.set(Some(err));
                submitting.set(false);
            }
        }
    });
}

fn error_banner(error: &Option<FormError>) -> Html {
    match error {
        Some(err) => html! { <p class="form-error" role="alert">{err.to_string()}</p> },
        None => html! {},
    }
}

#[function_component(ContactForm)]
pub fn contact_form() -> Html {
    let navigator = use_navigator();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let company = use_state(String::new);
    let message = use_state(String::new);
    let error = use_state(|| None::<FormError>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let (name, email, company, message) = (name.clone(), email.clone(), company.clone(), message.clone());
        let (error, submitting) = (error.clone(), submitting.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = FormSubmission::new("contact")
                .field("name", (*name).clone())
                .field("email", (*email).clone())
                .field("company", (*company).clone())
                .field("message", (*message).clone())
                .required(&["name", "email", "message"]);
            deliver(submission, navigator.clone(), error.clone(), submitting.clone());
        })
    };

    html! {
        <form class="studio-form" {onsubmit} novalidate=true>
            <div class="form-row">
                <label for="contact-name">{"Name"}</label>
                <input id="contact-name" type="text" value={(*name).clone()} oninput={bind_input(&name)} />
            </div>
            <div class="form-row">
                <label for="contact-email">{"Email"}</label>
                <input id="contact-email" type="email" value={(*email).clone()} oninput={bind_input(&email)} />
            </div>
            <div class="form-row">
                <label for="contact-company">{"Company (optional)"}</label>
                <input id="contact-company" type="text" value={(*company).clone()} oninput={bind_input(&company)} />
            </div>
            <div class="form-row">
                <label for="contact-message">{"Message"}</label>
                <textarea id="contact-message" rows="6" value={(*message).clone()} oninput={bind_textarea(&message)} />
            </div>
            { error_banner(&error) }
            <button type="submit" class="button primary" disabled={*submitting}>
                { if *submitting { "Sending…" } else { "Send message" } }
            </button>
        </form>
    }
}

const SERVICE_OPTIONS: &[&str] = &["Brand identity", "Website", "Campaign", "Design retainer", "Not sure yet"];
const BUDGET_OPTIONS: &[&str] = &["Under €10k", "€10k–€30k", "€30k–€75k", "€75k+"];

#[function_component(BookingForm)]
pub fn booking_form() -> Html {
    let navigator = use_navigator();
    let name = use_state(String::new);
    let email = use_state(String::new);
    let service = use_state(|| SERVICE_OPTIONS[0].to_string());
    let budget = use_state(|| BUDGET_OPTIONS[0].to_string());
    let timeline = use_state(String::new);
    let details = use_state(String::new);
    let error = use_state(|| None::<FormError>);
    let submitting = use_state(|| false);

    let onsubmit = {
        let (name, email, service, budget) = (name.clone(), email.clone(), service.clone(), budget.clone());
        let (timeline, details) = (timeline.clone(), details.clone());
        let (error, submitting) = (error.clone(), submitting.clone());
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let submission = FormSubmission::new("project booking")
                .field("name", (*name).clone())
                .field("email", (*email).clone())
                .field("service", (*service).clone())
                .field("budget", (*budget).clone())
                .field("timeline", (*timeline).clone())
                .field("details", (*details).clone())
                .required(&["name", "email", "service", "details"]);
            deliver(submission, navigator.clone(), error.clone(), submitting.clone());
        })
    };

    let options = |choices: &'static [&'static str], current: &str| -> Html {
        choices
            .iter()
            .map(|choice| html! { <option value={*choice} selected={*choice == current}>{*choice}</option> })
            .collect()
    };

    html! {
        <form class="studio-form" {onsubmit} novalidate=true>
            <div class="form-row">
                <label for="booking-name">{"Name"}</label>
                <input id="booking-name" type="text" value={(*name).clone()} oninput={bind_input(&name)} />
            </div>
            <div class="form-row">
                <label for="booking-email">{"Email"}</label>
                <input id="booking-email" type="email" value={(*email).clone()} oninput={bind_input(&email)} />
            </div>
            <div class="form-row split">
                <div>
                    <label for="booking-service">{"What do you need?"}</label>
                    <select id="booking-service" onchange={bind_select(&service)}>
                        { options(SERVICE_OPTIONS, &service) }
                    </select>
                </div>
                <div>
                    <label for="booking-budget">{"Budget"}</label>
                    <select id="booking-budget" onchange={bind_select(&budget)}>
                        { options(BUDGET_OPTIONS, &budget) }
                    </select>
                </div>
            </div>
            <div class="form-row">
                <label for="booking-timeline">{"Ideal launch date (optional)"}</label>
                <input id="booking-timeline" type="text" placeholder="e.g. September" value={(*timeline).clone()} oninput={bind_input(&timeline)} />
            </div>
            <div class="form-row">
                <label for="booking-details">{"Tell us about the project"}</label>
                <textarea id="booking-details" rows="6" value={(*details).clone()} oninput={bind_textarea(&details)} />
            </div>
            { error_banner(&error) }
            <button type="submit" class="button primary" disabled={*submitting}>
                { if *submitting { "Sending…" } else { "Request a proposal" } }
            </button>
        </form>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, email: &str, message: &str) -> FormSubmission {
        FormSubmission::new("contact")
            .field("name", name)
            .field("email", email)
            .field("company", "")
            .field("message", message)
            .required(&["name", "email", "message"])
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ada@example.com"));
        assert!(is_valid_email("ada.lovelace+studio@mail.example.co.uk"));
        assert!(!is_valid_email("ada.example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ada@example"));
        assert!(!is_valid_email("ada@@example.com"));
        assert!(!is_valid_email("ada@.com"));
        assert!(!is_valid_email("ada lovelace@example.com"));
    }

    #[test]
    fn test_required_fields() {
        assert_eq!(
            contact("  ", "ada@example.com", "Hello").validate(),
            Err(FormError::MissingField("name"))
        );
        assert_eq!(
            contact("Ada", "ada@example.com", "").validate(),
            Err(FormError::MissingField("message"))
        );
        assert_eq!(
            contact("Ada", "not-an-email", "Hello").validate(),
            Err(FormError::InvalidEmail)
        );
        assert_eq!(contact("Ada", "ada@example.com", "Hello").validate(), Ok(()));
    }

    #[test]
    fn test_optional_field_may_be_empty() {
        let submission = contact("Ada", "ada@example.com", "Hello");
        assert_eq!(submission.value("company"), Some(""));
        assert!(submission.validate().is_ok());
    }

    #[test]
    fn test_encode_body() {
        let body = FormSubmission::new("contact")
            .field("name", " Ada Lovelace ")
            .field("message", "Budget: €10k & up")
            .encode();
        assert_eq!(
            body,
            "_subject=New%20contact%20enquiry&name=Ada%20Lovelace&message=Budget%3A%20%E2%82%AC10k%20%26%20up"
        );
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(
            FormError::MissingField("email").to_string(),
            "Please fill in the email field."
        );
        assert!(FormError::Rejected(422).to_string().contains("422"));
    }
}
