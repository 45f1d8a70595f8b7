//! Folio Animation System
//!
//! Text animations for the portfolio page.
//!
//! # Features
//!
//! - **Typewriter**: character-by-character reveal with reset or delete-and-cycle loops
//! - **Cursor Blink**: phase-independent blinking cursor merged into rendered text
//! - **Scheduler**: owns every running typewriter and advances them each frame
//! - **Scoped Ownership**: `AnimatedTypewriter` cancels its pending steps when stopped or dropped
//! - **Presets**: hero name, hero tagline and skills rotator configurations

pub mod cursor;
pub mod presets;
pub mod scheduler;
pub mod typewriter;

pub use cursor::{CursorBlink, DEFAULT_BLINK_INTERVAL};
pub use scheduler::{AnimatedTypewriter, AnimationScheduler, SchedulerHandle, TypewriterId};
pub use typewriter::{
    CursorMode, Phase, Typewriter, TypewriterConfig, TypewriterError, TypewriterMode,
    TypewriterSnapshot, CURSOR_GLYPH,
};
