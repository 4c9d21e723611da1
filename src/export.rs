//! Export document formatting.
//!
//! Renders the fixed-section plain-text report offered for download after
//! processing a clip. Rendering is deterministic given a timestamp; the
//! public entry point stamps the current local time.

use crate::defaults;
use chrono::Local;

/// Free-form patient fields entered alongside the recording. Both may be
/// empty; they render as "-" placeholders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PatientDetails {
    pub name: String,
    pub age: String,
}

impl PatientDetails {
    pub fn new(name: &str, age: &str) -> Self {
        Self {
            name: name.to_string(),
            age: age.to_string(),
        }
    }
}

/// Build the export document with the current local timestamp.
pub fn build_export_text(
    patient: &PatientDetails,
    transcript: &str,
    detected_language: &str,
    model: &str,
    mode: &str,
) -> String {
    let timestamp = Local::now().format(defaults::TIMESTAMP_FORMAT).to_string();
    render(patient, transcript, detected_language, model, mode, &timestamp)
}

/// Deterministic template rendering with an explicit timestamp.
fn render(
    patient: &PatientDetails,
    transcript: &str,
    detected_language: &str,
    model: &str,
    mode: &str,
    timestamp: &str,
) -> String {
    let name = placeholder_if_empty(&patient.name);
    let age = placeholder_if_empty(&patient.age);

    format!(
        "DOCTOR VOICE → TEXT TRANSCRIPT\n\
         Generated At: {timestamp}\n\
         Model: {model}\n\
         Mode: {mode}\n\
         Detected Language: {detected_language}\n\
         \n\
         PATIENT DETAILS:\n\
         Name: {name}\n\
         Age: {age}\n\
         \n\
         TRANSCRIPT:\n\
         {transcript}"
    )
}

fn placeholder_if_empty(value: &str) -> &str {
    if value.trim().is_empty() { "-" } else { value }
}
