//! Contact form validation and submission.
//!
//! There is no backend, an accepted submission is written to the
//! log and reported to analytics.
use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use thiserror::Error;

use analytics::{Analytics, Event};

/// Time after a submission before the form is cleared.
pub const RESET_DELAY_SECS: i64 = 3;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum Error {
    #[error("The {0} field is required")]
    Required(&'static str),

    #[error("Email address {0} is not valid")]
    InvalidEmail(String),

    #[error("Unknown business vertical {0}")]
    UnknownVertical(String),
}

type Result<T> = std::result::Result<T, Error>;

pub fn reset_delay() -> Duration {
    Duration::seconds(RESET_DELAY_SECS)
}

#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: Option<String>,
    pub subject: String,
    pub message: String,
    /// Lower case vertical label as offered by the form.
    pub vertical: Option<String>,
}

impl ContactForm {
    pub fn is_empty(&self) -> bool {
        *self == Default::default()
    }

    pub fn validate(&self) -> Result<()> {
        let required = [
            ("name", &self.name),
            ("email", &self.email),
            ("subject", &self.subject),
            ("message", &self.message),
        ];
        for (field, value) in required.iter() {
            if value.trim().is_empty() {
                return Err(Error::Required(*field));
            }
        }

        if !valid_email(self.email.trim()) {
            return Err(Error::InvalidEmail(self.email.clone()));
        }

        if let Some(ref vertical) = self.vertical {
            let known = collections::verticals()
                .iter()
                .any(|v| v.label.eq_ignore_ascii_case(vertical.trim()));
            if !known {
                return Err(Error::UnknownVertical(vertical.clone()));
            }
        }

        Ok(())
    }
}

fn valid_email(email: &str) -> bool {
    match email.find('@') {
        Some(pos) => pos > 0 && pos + 1 < email.len(),
        None => false,
    }
}

/// Holds the form and the time of the last accepted submission.
#[derive(Debug, Default)]
pub struct ContactDesk {
    form: ContactForm,
    submitted_at: Option<DateTime<Utc>>,
}

impl ContactDesk {
    pub fn new() -> Self {
        Default::default()
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted_at.is_some()
    }

    pub fn submit(
        &mut self,
        form: ContactForm,
        analytics: &dyn Analytics,
        now: DateTime<Utc>,
    ) -> Result<&ContactForm> {
        form.validate()?;

        analytics.event(&Event::form_submit());
        match serde_json::to_string(&form) {
            Ok(payload) => info!("Form submitted: {}", payload),
            Err(e) => warn!("Unable to encode contact form: {}", e),
        }

        self.form = form;
        self.submitted_at = Some(now);
        Ok(&self.form)
    }

    /// Clear the form once the reset delay has elapsed, returns
    /// whether a reset happened.
    pub fn tick(&mut self, now: DateTime<Utc>) -> bool {
        match self.submitted_at {
            Some(at) if now - at >= reset_delay() => {
                debug!("Reset contact form");
                self.form = Default::default();
                self.submitted_at = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use analytics::Recorder;

    fn form() -> ContactForm {
        ContactForm {
            name: "Aiko Tanaka".to_string(),
            email: "aiko@example.jp".to_string(),
            company: None,
            subject: "Partnership".to_string(),
            message: "Hello from Osaka".to_string(),
            vertical: Some("tradezy".to_string()),
        }
    }

    #[test]
    fn required_fields() {
        let mut f = form();
        f.subject = "   ".to_string();
        assert_eq!(Err(Error::Required("subject")), f.validate());
        assert_eq!(
            Err(Error::Required("name")),
            ContactForm::default().validate()
        );
    }

    #[test]
    fn email_shape() {
        let mut f = form();
        for bad in &["aiko", "@example.jp", "aiko@"] {
            f.email = bad.to_string();
            assert_eq!(Err(Error::InvalidEmail(bad.to_string())), f.validate());
        }
    }

    #[test]
    fn vertical_must_be_known() {
        let mut f = form();
        f.vertical = Some("hr tech".to_string());
        assert!(f.validate().is_ok());
        f.vertical = Some("space tourism".to_string());
        assert_eq!(
            Err(Error::UnknownVertical("space tourism".to_string())),
            f.validate()
        );
    }

    #[test]
    fn submit_then_reset() {
        let recorder = Recorder::new();
        let mut desk = ContactDesk::new();
        let now = Utc::now();

        assert!(desk.submit(form(), &recorder, now).is_ok());
        assert!(desk.is_submitted());
        assert_eq!(vec![Event::form_submit()], recorder.events());

        assert!(!desk.tick(now + Duration::seconds(1)));
        assert!(desk.tick(now + reset_delay()));
        assert!(!desk.is_submitted());
        assert!(desk.form().is_empty());
    }

    #[test]
    fn invalid_submit_sends_nothing() {
        let recorder = Recorder::new();
        let mut desk = ContactDesk::new();
        let mut f = form();
        f.email = String::new();
        assert!(desk.submit(f, &recorder, Utc::now()).is_err());
        assert!(recorder.signals().is_empty());
        assert!(!desk.is_submitted());
    }
}
