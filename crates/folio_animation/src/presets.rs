//! Typewriter presets used by the portfolio page
//!
//! Each preset returns a [`TypewriterConfig`] that callers may further
//! adjust with the builder methods before starting it.

use crate::typewriter::{CursorMode, TypewriterConfig, TypewriterError, TypewriterMode};
use std::time::Duration;

/// Hero heading: types the owner's name, holds, then retypes it
///
/// 150 ms per character, 4 s hold. The cursor blinks only while typing.
pub fn hero_name(name: impl Into<String>) -> Result<TypewriterConfig, TypewriterError> {
    Ok(TypewriterConfig::single(name)?
        .type_interval(Duration::from_millis(150))
        .hold(Duration::from_millis(4000))
        .mode(TypewriterMode::Reset)
        .cursor(CursorMode::BlinkWhileTyping))
}

/// Hero tagline: types the tagline, holds, then retypes it
///
/// 100 ms per character, 3 s hold. Steady cursor while typing.
pub fn hero_tagline(tagline: impl Into<String>) -> Result<TypewriterConfig, TypewriterError> {
    Ok(TypewriterConfig::single(tagline)?
        .type_interval(Duration::from_millis(100))
        .hold(Duration::from_millis(3000))
        .mode(TypewriterMode::Reset)
        .cursor(CursorMode::SolidWhileTyping))
}

/// "I specialize in ..." rotator: types, holds, deletes, moves to the next skill
///
/// 100 ms per typed character, 50 ms per deleted character, 2 s hold.
pub fn skills_rotator<I, S>(skills: I) -> Result<TypewriterConfig, TypewriterError>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    Ok(TypewriterConfig::new(skills)?
        .type_interval(Duration::from_millis(100))
        .delete_interval(Duration::from_millis(50))
        .hold(Duration::from_millis(2000))
        .mode(TypewriterMode::CycleDelete)
        .cursor(CursorMode::Blink))
}
