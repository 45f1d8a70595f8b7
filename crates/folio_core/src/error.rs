//! Error types for folio_core

use crate::form::FieldName;
use thiserror::Error;

/// Contact form errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// A submission is already in flight
    #[error("a submission is already in progress")]
    Busy,

    /// Field name not known to the form
    #[error("unknown form field: {0}")]
    UnknownField(String),

    /// Required fields left blank
    #[error("missing required fields: {}", join_fields(.0))]
    MissingFields(Vec<FieldName>),
}

fn join_fields(fields: &[FieldName]) -> String {
    fields
        .iter()
        .map(FieldName::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failures reported by a message delivery service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DeliveryError {
    /// The service refused the message
    #[error("message rejected: {0}")]
    Rejected(String),

    /// The service could not be reached
    #[error("delivery service unavailable: {0}")]
    Unavailable(String),
}

/// Portfolio content the page cannot render
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ContentError {
    #[error("hero name is empty")]
    EmptyHeroName,

    #[error("hero tagline is empty")]
    EmptyTagline,

    #[error("no rotating skills configured")]
    NoRotatingSkills,

    #[error("rotating skill {0} is empty")]
    EmptyRotatingSkill(usize),

    #[error("contact email is empty")]
    EmptyEmail,
}
