//! Consultation form fields, validation, and submit phases.

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

/// Label on the submit control while idle; restored after every attempt.
pub const SUBMIT_IDLE_LABEL: &str = "Send Consultation Request";

pub const MISSING_FIELDS_TITLE: &str = "Missing fields";
pub const MISSING_FIELDS_DESC: &str = "Please fill in name, email, and summary.";

/// Phase of one submission attempt. The submit control is disabled and
/// relabeled while a phase other than `Idle` is active, so a second submit
/// cannot race the first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmitPhase {
    #[default]
    Idle,
    OpeningEmail,
    Sending,
}

impl SubmitPhase {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Idle => SUBMIT_IDLE_LABEL,
            Self::OpeningEmail => "Opening Email...",
            Self::Sending => "Sending...",
        }
    }

    #[must_use]
    pub fn is_busy(self) -> bool {
        self != Self::Idle
    }
}

/// Raw values read from the form inputs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ConsultationFields {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub summary: String,
}

impl ConsultationFields {
    /// Copy with surrounding whitespace removed from every field.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self {
            name: self.name.trim().to_owned(),
            email: self.email.trim().to_owned(),
            phone: self.phone.trim().to_owned(),
            summary: self.summary.trim().to_owned(),
        }
    }

    /// Phone value for outbound payloads; the optional field reads `N/A`
    /// when left blank.
    #[must_use]
    pub fn phone_or_default(&self) -> &str {
        if self.phone.is_empty() { "N/A" } else { &self.phone }
    }
}

/// Trim every field and check the required ones. Phone stays optional.
///
/// # Errors
///
/// Returns the user-facing description for the missing-fields toast when
/// name, email, or summary is empty after trimming.
pub fn validate(fields: &ConsultationFields) -> Result<ConsultationFields, &'static str> {
    let clean = fields.trimmed();
    if clean.name.is_empty() || clean.email.is_empty() || clean.summary.is_empty() {
        return Err(MISSING_FIELDS_DESC);
    }
    Ok(clean)
}

/// Subject line shared by the relay `_subject` field and the mailto draft.
#[must_use]
pub fn subject_line(name: &str) -> String {
    format!("Free Consultation Request from {name}")
}
