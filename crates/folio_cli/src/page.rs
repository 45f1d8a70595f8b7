//! The portfolio home page
//!
//! Mounts the three typewriters and the contact form from content and
//! timings. Everything is released when the page is unmounted or dropped.

use crate::config::TimingsConfig;
use anyhow::Result;
use folio_animation::{presets, AnimatedTypewriter, AnimationScheduler};
use folio_core::{ContactForm, FormSnapshot, MessageDelivery, Portfolio};
use std::time::Duration;

/// Current text of the animated lines
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeroLines {
    pub name: String,
    pub tagline: String,
    pub skill: String,
}

impl HeroLines {
    /// Fully typed lines without cursors, for static output
    pub fn settled(portfolio: &Portfolio) -> Self {
        Self {
            name: portfolio.hero.name.clone(),
            tagline: portfolio.hero.tagline.clone(),
            skill: portfolio
                .about
                .rotating_skills
                .first()
                .cloned()
                .unwrap_or_default(),
        }
    }
}

pub struct HomePage<D: MessageDelivery> {
    portfolio: Portfolio,
    scheduler: AnimationScheduler,
    hero_name: AnimatedTypewriter,
    hero_tagline: AnimatedTypewriter,
    skills: AnimatedTypewriter,
    contact: ContactForm<D>,
}

impl<D: MessageDelivery> HomePage<D> {
    /// Validate content and start every animation
    pub fn mount(portfolio: Portfolio, timings: &TimingsConfig, delivery: D) -> Result<Self> {
        portfolio.validate()?;

        let blink = timings.cursor_blink();
        let scheduler = AnimationScheduler::new();

        let name = timings
            .hero_name
            .apply(presets::hero_name(portfolio.hero.name.as_str())?.blink_interval(blink));
        let tagline = timings
            .hero_tagline
            .apply(presets::hero_tagline(portfolio.hero.tagline.as_str())?.blink_interval(blink));
        let skills = timings.skills_rotator.apply(
            presets::skills_rotator(portfolio.about.rotating_skills.iter().cloned())?
                .blink_interval(blink),
        );

        let hero_name = AnimatedTypewriter::start(scheduler.handle(), name);
        let hero_tagline = AnimatedTypewriter::start(scheduler.handle(), tagline);
        let skills = AnimatedTypewriter::start(scheduler.handle(), skills);
        let contact = ContactForm::new(delivery, timings.form_timings());

        tracing::debug!(
            "HomePage: mounted {} typewriters",
            scheduler.typewriter_count()
        );

        Ok(Self {
            portfolio,
            scheduler,
            hero_name,
            hero_tagline,
            skills,
            contact,
        })
    }

    /// Advance every animation and the contact form by `dt`
    pub fn advance(&mut self, dt: Duration) {
        self.scheduler.advance(dt);
        self.contact.advance(dt);
    }

    /// Stop all animations and drop every pending form transition
    pub fn unmount(&mut self) {
        self.hero_name.stop();
        self.hero_tagline.stop();
        self.skills.stop();
        self.contact.dispose();
    }

    pub fn portfolio(&self) -> &Portfolio {
        &self.portfolio
    }

    pub fn lines(&self) -> HeroLines {
        HeroLines {
            name: self.hero_name.render(),
            tagline: self.hero_tagline.render(),
            skill: self.skills.render(),
        }
    }

    pub fn contact(&self) -> &ContactForm<D> {
        &self.contact
    }

    pub fn contact_mut(&mut self) -> &mut ContactForm<D> {
        &mut self.contact
    }

    pub fn form_snapshot(&self) -> FormSnapshot {
        self.contact.snapshot()
    }

    /// Number of typewriters still running
    pub fn running_animations(&self) -> usize {
        self.scheduler.typewriter_count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ContactFields, FormStatus, SimulatedDelivery};

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    fn mount() -> HomePage<SimulatedDelivery> {
        HomePage::mount(
            Portfolio::sample(),
            &TimingsConfig::default(),
            SimulatedDelivery::new(),
        )
        .unwrap()
    }

    #[test]
    fn test_mount_starts_three_animations() {
        let page = mount();
        assert_eq!(page.running_animations(), 3);

        let lines = page.lines();
        // Nothing typed yet; blinking cursors start visible
        assert_eq!(lines.name, "|");
        assert_eq!(lines.tagline, "|");
        assert_eq!(lines.skill, "|");
    }

    #[test]
    fn test_instances_use_their_own_timing() {
        let mut page = mount();
        page.advance(ms(300));

        let lines = page.lines();
        // 150 ms name, 100 ms tagline and skills
        assert_eq!(lines.name.trim_end_matches('|'), "Al");
        assert_eq!(lines.tagline.trim_end_matches('|'), "Gra");
        assert_eq!(lines.skill.trim_end_matches('|'), "Fro");
    }

    #[test]
    fn test_unmount_freezes_everything() {
        let mut page = mount();
        page.advance(ms(450));
        page.contact_mut()
            .submit_fields(ContactFields::new("A", "a@b.com", "hi"))
            .unwrap();

        page.unmount();
        let frozen = page.lines();
        assert_eq!(page.running_animations(), 0);
        assert_eq!(page.contact().status(), FormStatus::Idle);

        page.advance(ms(60_000));
        assert_eq!(page.lines(), frozen);
        assert_eq!(page.contact().delivery().delivered(), 0);
    }

    #[test]
    fn test_unmount_during_success_notice() {
        let mut page = mount();
        page.contact_mut()
            .submit_fields(ContactFields::new("A", "a@b.com", "hi"))
            .unwrap();
        page.advance(ms(1500));
        assert_eq!(page.contact().status(), FormStatus::Success);

        page.unmount();
        assert_eq!(page.contact().time_to_next_event(), None);

        page.advance(ms(3000));
        assert_eq!(page.contact().status(), FormStatus::Success);
    }

    #[test]
    fn test_mount_rejects_invalid_content() {
        let mut portfolio = Portfolio::sample();
        portfolio.about.rotating_skills.clear();

        let result = HomePage::mount(portfolio, &TimingsConfig::default(), SimulatedDelivery::new());
        assert!(result.is_err());
    }

    #[test]
    fn test_contact_runs_alongside_animations() {
        let mut page = mount();
        page.contact_mut()
            .submit_fields(ContactFields::new("A", "a@b.com", "hi"))
            .unwrap();

        page.advance(ms(1500));
        assert_eq!(page.form_snapshot().status, FormStatus::Success);
        page.advance(ms(3000));
        assert_eq!(page.form_snapshot().status, FormStatus::Idle);
        assert_eq!(page.running_animations(), 3);
    }
}
