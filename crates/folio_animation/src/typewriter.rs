//! Typewriter text animation
//!
//! Reveals one or more strings character by character, holds the finished
//! text, then either clears it instantly and retypes ([`TypewriterMode::Reset`])
//! or deletes it character by character and moves on to the next string
//! ([`TypewriterMode::CycleDelete`]). The loop never terminates on its own.
//!
//! Time is injected through [`Typewriter::advance`]. Each step is scheduled
//! only after the previous one has committed, so a large `dt` replays the
//! exact same sequence of steps as many small ones.
//!
//! ```
//! use folio_animation::{Typewriter, TypewriterConfig};
//! use std::time::Duration;
//!
//! let config = TypewriterConfig::single("Hi").unwrap()
//!     .type_interval(Duration::from_millis(100));
//! let mut tw = Typewriter::new(config);
//!
//! tw.advance(Duration::from_millis(100));
//! assert_eq!(tw.displayed_text(), "H");
//! ```

use crate::cursor::{CursorBlink, DEFAULT_BLINK_INTERVAL};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

/// Shortest delay any step may be scheduled with
const MIN_DELAY: Duration = Duration::from_millis(1);

/// Character rendered for a visible cursor
pub const CURSOR_GLYPH: char = '|';

/// Typewriter configuration errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TypewriterError {
    /// No strings were supplied
    #[error("typewriter needs at least one string")]
    EmptyStrings,

    /// A supplied string has nothing to type
    #[error("typewriter string {0} is empty")]
    EmptyString(usize),
}

/// What happens once a string has been fully typed and held
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TypewriterMode {
    /// Clear instantly and retype the same string
    #[default]
    Reset,
    /// Delete character by character, then advance to the next string
    CycleDelete,
}

/// Current activity of a typewriter
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    Typing,
    Holding,
    Deleting,
}

/// How the blinking cursor is combined with the typing phase
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CursorMode {
    /// Blink forever, regardless of phase
    #[default]
    Blink,
    /// Blink while typing, hidden otherwise
    BlinkWhileTyping,
    /// Steady while typing, hidden otherwise
    SolidWhileTyping,
    /// Never shown
    Hidden,
}

/// Parameters for one typewriter instance
#[derive(Clone, Debug)]
pub struct TypewriterConfig {
    strings: Arc<[String]>,
    type_interval: Duration,
    /// Falls back to `type_interval` when unset
    delete_interval: Option<Duration>,
    hold: Duration,
    mode: TypewriterMode,
    cursor: CursorMode,
    blink_interval: Duration,
}

impl TypewriterConfig {
    /// Create a config over an ordered, non-empty sequence of non-empty strings
    pub fn new<I, S>(strings: I) -> Result<Self, TypewriterError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let strings: Arc<[String]> = strings.into_iter().map(Into::into).collect();
        if strings.is_empty() {
            return Err(TypewriterError::EmptyStrings);
        }
        if let Some(index) = strings.iter().position(|s| s.is_empty()) {
            return Err(TypewriterError::EmptyString(index));
        }

        Ok(Self {
            strings,
            type_interval: Duration::from_millis(100),
            delete_interval: None,
            hold: Duration::from_millis(2000),
            mode: TypewriterMode::Reset,
            cursor: CursorMode::Blink,
            blink_interval: DEFAULT_BLINK_INTERVAL,
        })
    }

    /// Create a config that loops a single string
    pub fn single(text: impl Into<String>) -> Result<Self, TypewriterError> {
        Self::new([text.into()])
    }

    pub fn type_interval(mut self, interval: Duration) -> Self {
        self.type_interval = interval.max(MIN_DELAY);
        self
    }

    pub fn delete_interval(mut self, interval: Duration) -> Self {
        self.delete_interval = Some(interval.max(MIN_DELAY));
        self
    }

    pub fn hold(mut self, hold: Duration) -> Self {
        self.hold = hold.max(MIN_DELAY);
        self
    }

    pub fn mode(mut self, mode: TypewriterMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn cursor(mut self, cursor: CursorMode) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn blink_interval(mut self, interval: Duration) -> Self {
        self.blink_interval = interval;
        self
    }

    pub fn strings(&self) -> &[String] {
        &self.strings
    }

    pub fn get_type_interval(&self) -> Duration {
        self.type_interval
    }

    pub fn get_delete_interval(&self) -> Duration {
        self.delete_interval.unwrap_or(self.type_interval)
    }

    pub fn get_hold(&self) -> Duration {
        self.hold
    }

    pub fn get_mode(&self) -> TypewriterMode {
        self.mode
    }

    pub fn get_cursor(&self) -> CursorMode {
        self.cursor
    }
}

/// Read-only view of a typewriter for the rendering layer
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TypewriterSnapshot {
    pub index: usize,
    pub text: String,
    pub phase: Phase,
    pub cursor_visible: bool,
}

impl TypewriterSnapshot {
    /// Text with the cursor glyph appended when visible
    pub fn render(&self) -> String {
        let mut out = self.text.clone();
        if self.cursor_visible {
            out.push(CURSOR_GLYPH);
        }
        out
    }
}

/// The typewriter state machine
#[derive(Clone, Debug)]
pub struct Typewriter {
    config: TypewriterConfig,
    index: usize,
    /// Byte length of the displayed prefix (always on a char boundary)
    revealed: usize,
    phase: Phase,
    /// Time left until the next scheduled step
    remaining: Duration,
    blink: CursorBlink,
}

impl Typewriter {
    /// Start in `Typing` at the first string with nothing displayed
    pub fn new(config: TypewriterConfig) -> Self {
        let remaining = config.type_interval;
        let blink = CursorBlink::new(config.blink_interval);
        Self {
            config,
            index: 0,
            revealed: 0,
            phase: Phase::Typing,
            remaining,
            blink,
        }
    }

    pub fn config(&self) -> &TypewriterConfig {
        &self.config
    }

    pub fn current_index(&self) -> usize {
        self.index
    }

    /// The string currently being typed or deleted
    pub fn target(&self) -> &str {
        &self.config.strings[self.index]
    }

    pub fn displayed_text(&self) -> &str {
        &self.target()[..self.revealed]
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Time until the next step fires
    pub fn time_to_next_step(&self) -> Duration {
        self.remaining
    }

    pub fn cursor_visible(&self) -> bool {
        match self.config.cursor {
            CursorMode::Blink => self.blink.is_visible(),
            CursorMode::BlinkWhileTyping => {
                self.phase == Phase::Typing && self.blink.is_visible()
            }
            CursorMode::SolidWhileTyping => self.phase == Phase::Typing,
            CursorMode::Hidden => false,
        }
    }

    pub fn snapshot(&self) -> TypewriterSnapshot {
        TypewriterSnapshot {
            index: self.index,
            text: self.displayed_text().to_string(),
            phase: self.phase,
            cursor_visible: self.cursor_visible(),
        }
    }

    /// Displayed text plus the cursor glyph when visible
    pub fn render(&self) -> String {
        self.snapshot().render()
    }

    /// Advance the animation by `dt`
    ///
    /// Fires every step whose delay elapses within `dt`, in order.
    pub fn advance(&mut self, dt: Duration) {
        self.blink.advance(dt);

        let mut budget = dt;
        while budget >= self.remaining {
            budget -= self.remaining;
            self.step();
        }
        self.remaining -= budget;
    }

    /// Apply one scheduled step and schedule the next
    fn step(&mut self) {
        match self.phase {
            Phase::Typing => {
                let target = &self.config.strings[self.index];
                if let Some(c) = target[self.revealed..].chars().next() {
                    self.revealed += c.len_utf8();
                }
                if self.revealed == target.len() {
                    self.set_phase(Phase::Holding);
                    self.remaining = self.config.hold;
                } else {
                    self.remaining = self.config.type_interval;
                }
            }
            Phase::Holding => match self.config.mode {
                TypewriterMode::Reset => {
                    self.revealed = 0;
                    self.set_phase(Phase::Typing);
                    self.remaining = self.config.type_interval;
                }
                TypewriterMode::CycleDelete => {
                    self.set_phase(Phase::Deleting);
                    self.remaining = self.config.get_delete_interval();
                }
            },
            Phase::Deleting => {
                let target = &self.config.strings[self.index];
                if let Some(c) = target[..self.revealed].chars().next_back() {
                    self.revealed -= c.len_utf8();
                }
                if self.revealed == 0 {
                    self.index = (self.index + 1) % self.config.strings.len();
                    self.set_phase(Phase::Typing);
                    self.remaining = self.config.type_interval;
                } else {
                    self.remaining = self.config.get_delete_interval();
                }
            }
        }
    }

    fn set_phase(&mut self, phase: Phase) {
        tracing::trace!(
            "Typewriter: {:?} -> {:?} (index={})",
            self.phase,
            phase,
            self.index
        );
        self.phase = phase;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Advance exactly to the next step and return the new snapshot
    fn next_step(tw: &mut Typewriter) -> TypewriterSnapshot {
        let dt = tw.time_to_next_step();
        tw.advance(dt);
        tw.snapshot()
    }

    fn assert_prefix_invariant(tw: &Typewriter) {
        let target = tw.target();
        assert!(target.starts_with(tw.displayed_text()));
        assert!(tw.displayed_text().chars().count() <= target.chars().count());
    }

    #[test]
    fn test_config_rejects_empty() {
        assert_eq!(
            TypewriterConfig::new(Vec::<String>::new()).unwrap_err(),
            TypewriterError::EmptyStrings
        );
        assert_eq!(
            TypewriterConfig::new(["a", ""]).unwrap_err(),
            TypewriterError::EmptyString(1)
        );
    }

    #[test]
    fn test_delete_interval_falls_back_to_type_interval() {
        let config = TypewriterConfig::single("x")
            .unwrap()
            .type_interval(ms(80));
        assert_eq!(config.get_delete_interval(), ms(80));

        let config = config.delete_interval(ms(20));
        assert_eq!(config.get_delete_interval(), ms(20));
    }

    #[test]
    fn test_zero_delays_are_clamped() {
        let config = TypewriterConfig::single("abc")
            .unwrap()
            .type_interval(Duration::ZERO)
            .hold(Duration::ZERO);
        assert_eq!(config.get_type_interval(), MIN_DELAY);
        assert_eq!(config.get_hold(), MIN_DELAY);

        // Must terminate even with the shortest delays
        let mut tw = Typewriter::new(config);
        tw.advance(ms(1000));
        assert_prefix_invariant(&tw);
    }

    #[test]
    fn test_initial_state() {
        let tw = Typewriter::new(TypewriterConfig::single("Hello").unwrap());
        assert_eq!(tw.current_index(), 0);
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_types_one_char_per_interval() {
        let config = TypewriterConfig::single("Hey")
            .unwrap()
            .type_interval(ms(150));
        let mut tw = Typewriter::new(config);

        tw.advance(ms(149));
        assert_eq!(tw.displayed_text(), "");

        tw.advance(ms(1));
        assert_eq!(tw.displayed_text(), "H");

        tw.advance(ms(150));
        assert_eq!(tw.displayed_text(), "He");
        assert_eq!(tw.phase(), Phase::Typing);

        tw.advance(ms(150));
        assert_eq!(tw.displayed_text(), "Hey");
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn test_reset_mode_retypes_same_string() {
        let config = TypewriterConfig::new(["ab", "cd"])
            .unwrap()
            .type_interval(ms(100))
            .hold(ms(3000));
        let mut tw = Typewriter::new(config);

        tw.advance(ms(200));
        assert_eq!(tw.displayed_text(), "ab");
        assert_eq!(tw.phase(), Phase::Holding);

        tw.advance(ms(2999));
        assert_eq!(tw.displayed_text(), "ab");
        assert_eq!(tw.phase(), Phase::Holding);

        let snap = next_step(&mut tw);
        assert_eq!(snap.text, "");
        assert_eq!(snap.phase, Phase::Typing);
        assert_eq!(snap.index, 0);

        tw.advance(ms(100));
        assert_eq!(tw.displayed_text(), "a");
    }

    #[test]
    fn test_cycle_delete_takes_one_step_per_char() {
        let config = TypewriterConfig::new(["abcd", "xy"])
            .unwrap()
            .type_interval(ms(100))
            .delete_interval(ms(50))
            .hold(ms(2000))
            .mode(TypewriterMode::CycleDelete);
        let mut tw = Typewriter::new(config);

        for _ in 0..4 {
            next_step(&mut tw);
        }
        assert_eq!(tw.phase(), Phase::Holding);

        let snap = next_step(&mut tw);
        assert_eq!(snap.phase, Phase::Deleting);
        assert_eq!(snap.text, "abcd");
        assert_eq!(tw.time_to_next_step(), ms(50));

        let mut steps = 0;
        while tw.phase() == Phase::Deleting {
            assert_eq!(tw.current_index(), 0);
            let before = tw.displayed_text().len();
            next_step(&mut tw);
            steps += 1;
            if tw.phase() == Phase::Deleting {
                assert_eq!(tw.displayed_text().len(), before - 1);
            }
        }

        assert_eq!(steps, 4);
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.current_index(), 1);
    }

    #[test]
    fn test_cycle_delete_wraps_index() {
        let config = TypewriterConfig::new(["a", "b"])
            .unwrap()
            .type_interval(ms(10))
            .delete_interval(ms(10))
            .hold(ms(10))
            .mode(TypewriterMode::CycleDelete);
        let mut tw = Typewriter::new(config);

        // type, hold, delete for each string
        tw.advance(ms(30));
        assert_eq!(tw.current_index(), 1);
        tw.advance(ms(30));
        assert_eq!(tw.current_index(), 0);
        assert_eq!(tw.phase(), Phase::Typing);
    }

    #[test]
    fn test_prefix_invariant_over_many_steps() {
        let config = TypewriterConfig::new(["Frontend", "UI/UX", "C/C++, Python"])
            .unwrap()
            .type_interval(ms(100))
            .delete_interval(ms(50))
            .hold(ms(2000))
            .mode(TypewriterMode::CycleDelete);
        let mut tw = Typewriter::new(config);

        let mut last_len = 0;
        let mut last_phase = tw.phase();
        for _ in 0..500 {
            tw.advance(ms(37));
            assert_prefix_invariant(&tw);

            let len = tw.displayed_text().len();
            if tw.phase() == last_phase {
                match last_phase {
                    Phase::Typing => assert!(len >= last_len),
                    Phase::Deleting => assert!(len <= last_len),
                    Phase::Holding => assert_eq!(len, last_len),
                }
            }
            last_len = len;
            last_phase = tw.phase();
        }
    }

    #[test]
    fn test_large_dt_matches_small_steps() {
        let config = TypewriterConfig::new(["one", "two"])
            .unwrap()
            .type_interval(ms(100))
            .delete_interval(ms(50))
            .hold(ms(700))
            .mode(TypewriterMode::CycleDelete);

        let mut coarse = Typewriter::new(config.clone());
        let mut fine = Typewriter::new(config);

        coarse.advance(ms(2345));
        for _ in 0..2345 {
            fine.advance(ms(1));
        }

        assert_eq!(coarse.snapshot(), fine.snapshot());
        assert_eq!(coarse.time_to_next_step(), fine.time_to_next_step());
    }

    #[test]
    fn test_multibyte_prefixes() {
        let config = TypewriterConfig::single("héllo – ok")
            .unwrap()
            .type_interval(ms(10));
        let mut tw = Typewriter::new(config);

        for expected in 1..=10 {
            tw.advance(ms(10));
            assert_eq!(tw.displayed_text().chars().count(), expected);
            assert_prefix_invariant(&tw);
        }
        assert_eq!(tw.phase(), Phase::Holding);
    }

    #[test]
    fn test_cursor_modes() {
        let base = TypewriterConfig::single("ab")
            .unwrap()
            .type_interval(ms(100))
            .hold(ms(4000));

        let mut solid = Typewriter::new(base.clone().cursor(CursorMode::SolidWhileTyping));
        assert!(solid.cursor_visible());
        solid.advance(ms(200));
        assert_eq!(solid.phase(), Phase::Holding);
        assert!(!solid.cursor_visible());

        let mut gated = Typewriter::new(base.clone().cursor(CursorMode::BlinkWhileTyping));
        assert!(gated.cursor_visible());
        gated.advance(ms(200));
        assert!(!gated.cursor_visible());
        gated.advance(ms(500));
        assert!(!gated.cursor_visible());

        let hidden = Typewriter::new(base.cursor(CursorMode::Hidden));
        assert!(!hidden.cursor_visible());
    }

    #[test]
    fn test_blink_does_not_affect_text() {
        let config = TypewriterConfig::single("abc")
            .unwrap()
            .type_interval(ms(1000))
            .blink_interval(ms(500));
        let mut tw = Typewriter::new(config);

        tw.advance(ms(500));
        assert!(!tw.cursor_visible());
        assert_eq!(tw.displayed_text(), "");
        assert_eq!(tw.phase(), Phase::Typing);
        assert_eq!(tw.render(), "");

        tw.advance(ms(500));
        assert!(tw.cursor_visible());
        assert_eq!(tw.render(), "a|");
    }
}
