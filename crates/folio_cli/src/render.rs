//! Plain-text rendering of the portfolio page

use crate::page::HeroLines;
use folio_core::{FieldName, FormSnapshot, Portfolio};
use std::fmt::Write;

const NAV_SECTIONS: [&str; 5] = ["Home", "About", "Experience", "Projects", "Contact"];
const RULE_WIDTH: usize = 60;

fn heading(out: &mut String, title: &str) {
    let _ = writeln!(out, "{}", title);
    let _ = writeln!(out, "{}", "=".repeat(title.chars().count()));
}

fn rule(out: &mut String) {
    let _ = writeln!(out, "{}", "-".repeat(RULE_WIDTH));
}

pub fn render_hero(portfolio: &Portfolio, lines: &HeroLines) -> String {
    let mut out = String::new();
    let identity = &portfolio.identity;

    let _ = writeln!(out, "[{}]  {}", identity.initials(), NAV_SECTIONS.join("  "));
    out.push('\n');
    let _ = writeln!(out, "{}", lines.name);
    let _ = writeln!(out, "{}", lines.tagline);
    if !portfolio.hero.bio.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "{}", portfolio.hero.bio);
    }
    out.push('\n');
    let _ = writeln!(out, "  Email:    {}", identity.email);
    if let Some(phone) = &identity.phone {
        let _ = writeln!(out, "  Phone:    {}", phone);
    }
    if let Some(location) = &identity.location {
        let _ = writeln!(out, "  Location: {}", location);
    }
    for link in &identity.social {
        let _ = writeln!(out, "  {}: {}", link.label, link.url);
    }
    out
}

pub fn render_about(portfolio: &Portfolio, lines: &HeroLines) -> String {
    let mut out = String::new();
    heading(&mut out, "About Me");

    if !portfolio.about.summary.is_empty() {
        let _ = writeln!(out, "{}", portfolio.about.summary);
    }
    let _ = writeln!(out, "I specialize in {}", lines.skill);

    if !portfolio.skill_categories.is_empty() {
        out.push('\n');
        let _ = writeln!(out, "Skills & Expertise");
        for category in &portfolio.skill_categories {
            let _ = writeln!(out, "  {}: {}", category.name, category.skills.join(", "));
        }
    }
    out
}

pub fn render_experience(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    heading(&mut out, "Work Experience");

    for (i, item) in portfolio.experience.iter().enumerate() {
        let last = i + 1 == portfolio.experience.len();
        let _ = writeln!(out, "o {} - {}", item.company, item.position);
        let bar = if last { " " } else { "|" };
        let _ = writeln!(out, "{}   {} | {}", bar, item.duration, item.location);
        for responsibility in &item.responsibilities {
            let _ = writeln!(out, "{}   * {}", bar, responsibility);
        }
        if !last {
            let _ = writeln!(out, "|");
        }
    }
    out
}

pub fn render_projects(portfolio: &Portfolio) -> String {
    let mut out = String::new();
    heading(&mut out, "Projects");

    for project in &portfolio.projects {
        let _ = writeln!(out, "{} ({})", project.title, project.date);
        let _ = writeln!(out, "  {}", project.description);
        if let Some(link) = &project.link_url {
            let _ = writeln!(out, "  View Project: {}", link);
        }
    }
    out
}

pub fn render_contact(portfolio: &Portfolio, form: &FormSnapshot) -> String {
    let mut out = String::new();
    heading(&mut out, "Get In Touch");

    for field in FieldName::ALL {
        let _ = writeln!(out, "  {:<8} [{}]", field.as_str(), form.fields.get(field));
    }
    let _ = writeln!(out, "  < {} >", form.status.button_label());
    if let Some(message) = form.status.status_message() {
        let _ = writeln!(out, "  {}", message);
    }

    out.push('\n');
    let _ = writeln!(out, "Or reach out via:");
    for link in &portfolio.identity.social {
        let _ = writeln!(out, "  {}: {}", link.label, link.url);
    }
    let _ = writeln!(out, "Email: {}", portfolio.identity.email);
    out
}

/// Every section in page order
pub fn render_page(portfolio: &Portfolio, lines: &HeroLines, form: &FormSnapshot) -> String {
    let sections = [
        render_hero(portfolio, lines),
        render_about(portfolio, lines),
        render_experience(portfolio),
        render_projects(portfolio),
        render_contact(portfolio, form),
    ];

    let mut out = String::new();
    for (i, section) in sections.iter().enumerate() {
        if i > 0 {
            rule(&mut out);
        }
        out.push_str(section);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_core::{ContactFields, FormStatus};

    fn idle_form() -> FormSnapshot {
        FormSnapshot {
            status: FormStatus::Idle,
            fields: ContactFields::default(),
        }
    }

    #[test]
    fn test_page_contains_every_section() {
        let portfolio = Portfolio::sample();
        let lines = HeroLines::settled(&portfolio);
        let page = render_page(&portfolio, &lines, &idle_form());

        for needle in [
            "[AE]",
            "Alex Example",
            "About Me",
            "I specialize in Frontend Development",
            "Proficient: C, C++, Python, SQL, HTML, CSS",
            "Work Experience",
            "Example Labs - Frontend Development Intern",
            "Resume Builder (Dec 2024)",
            "Get In Touch",
            "< Send Message >",
        ] {
            assert!(page.contains(needle), "missing {:?}", needle);
        }
    }

    #[test]
    fn test_contact_notice_per_status() {
        let portfolio = Portfolio::sample();
        let mut form = idle_form();

        form.status = FormStatus::Submitting;
        let text = render_contact(&portfolio, &form);
        assert!(text.contains("Sending..."));

        form.status = FormStatus::Success;
        let text = render_contact(&portfolio, &form);
        assert!(text.contains("Message Sent!"));
        assert!(text.contains("Thank you for your message!"));

        form.status = FormStatus::Error;
        let text = render_contact(&portfolio, &form);
        assert!(text.contains("Failed to Send"));
        assert!(text.contains("Something went wrong"));
    }

    #[test]
    fn test_contact_shows_field_values() {
        let portfolio = Portfolio::sample();
        let form = FormSnapshot {
            status: FormStatus::Idle,
            fields: ContactFields::new("Ada", "ada@example.com", "Hello"),
        };
        let text = render_contact(&portfolio, &form);
        assert!(text.contains("[ada@example.com]"));
    }
}
