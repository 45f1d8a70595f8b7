//! Folio Core
//!
//! Foundational pieces of the portfolio page that are not animation:
//!
//! - **Contact Form**: four-state submission lifecycle with injected time
//! - **Message Delivery**: the collaborator a submission is handed to
//! - **Content Model**: identity, hero text, skills, projects and experience
//!
//! # Example
//!
//! ```rust
//! use folio_core::{ContactFields, ContactForm, FormStatus, FormTimings, SimulatedDelivery};
//! use std::time::Duration;
//!
//! let mut form = ContactForm::new(SimulatedDelivery::new(), FormTimings::default());
//! form.submit_fields(ContactFields::new("A", "a@b.com", "hi")).unwrap();
//! assert_eq!(form.status(), FormStatus::Submitting);
//!
//! form.advance(Duration::from_millis(1500));
//! assert_eq!(form.status(), FormStatus::Success);
//! ```

pub mod content;
pub mod delivery;
pub mod error;
pub mod form;

pub use content::{
    AboutContent, ContactIdentity, Experience, HeroContent, Portfolio, Project, SkillCategory,
    SocialLink,
};
pub use delivery::{MessageDelivery, SimulatedDelivery};
pub use error::{ContentError, DeliveryError, FormError};
pub use form::{
    ContactFields, ContactForm, FieldName, FormEvent, FormSnapshot, FormStatus, FormTimings,
    DEFAULT_STATUS_HOLD, DEFAULT_SUBMISSION_LATENCY,
};
