//! Portfolio content model
//!
//! Static data supplied by the page author: identity, hero text, skills,
//! projects and work experience. Loaded from configuration and rendered
//! as-is; nothing here changes at runtime.

use crate::error::ContentError;
use serde::{Deserialize, Serialize};

/// Everything the portfolio page displays
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Portfolio {
    pub identity: ContactIdentity,
    pub hero: HeroContent,
    #[serde(default)]
    pub about: AboutContent,
    #[serde(default)]
    pub skill_categories: Vec<SkillCategory>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub experience: Vec<Experience>,
}

/// Who the page belongs to and how to reach them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactIdentity {
    pub display_name: String,
    /// Short monogram for the navigation bar and avatar fallback
    #[serde(default)]
    pub initials: Option<String>,
    pub email: String,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub social: Vec<SocialLink>,
}

impl ContactIdentity {
    /// Configured initials, or the first letter of each word of the name
    pub fn initials(&self) -> String {
        match &self.initials {
            Some(initials) => initials.clone(),
            None => self
                .display_name
                .split_whitespace()
                .filter_map(|word| word.chars().next())
                .flat_map(char::to_uppercase)
                .collect(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Text for the hero section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeroContent {
    /// Typed out in the heading
    pub name: String,
    /// Typed out below the heading
    pub tagline: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar_url: Option<String>,
}

/// Text for the about section
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AboutContent {
    #[serde(default)]
    pub summary: String,
    /// Cycled through after "I specialize in"
    #[serde(default)]
    pub rotating_skills: Vec<String>,
}

/// A named group of skills ("Proficient", "Tools", ...)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    #[serde(default)]
    pub skills: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub date: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub link_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub company: String,
    pub position: String,
    pub duration: String,
    pub location: String,
    #[serde(default)]
    pub responsibilities: Vec<String>,
}

impl Portfolio {
    /// Check that the animated parts of the page have something to show
    pub fn validate(&self) -> Result<(), ContentError> {
        if self.hero.name.trim().is_empty() {
            return Err(ContentError::EmptyHeroName);
        }
        if self.hero.tagline.trim().is_empty() {
            return Err(ContentError::EmptyTagline);
        }
        if self.identity.email.trim().is_empty() {
            return Err(ContentError::EmptyEmail);
        }
        if self.about.rotating_skills.is_empty() {
            return Err(ContentError::NoRotatingSkills);
        }
        if let Some(index) = self
            .about
            .rotating_skills
            .iter()
            .position(|s| s.is_empty())
        {
            return Err(ContentError::EmptyRotatingSkill(index));
        }
        Ok(())
    }

    /// Placeholder content for trying the page without a config file
    pub fn sample() -> Self {
        Self {
            identity: ContactIdentity {
                display_name: "Alex Example".into(),
                initials: None,
                email: "alex@example.com".into(),
                phone: Some("+1 555 0100".into()),
                location: Some("Springfield".into()),
                social: vec![
                    SocialLink {
                        label: "GitHub".into(),
                        url: "https://github.com/example".into(),
                    },
                    SocialLink {
                        label: "LinkedIn".into(),
                        url: "https://www.linkedin.com/in/example".into(),
                    },
                ],
            },
            hero: HeroContent {
                name: "Alex Example".into(),
                tagline: "Graduate & Aspiring Software Developer".into(),
                bio: "Detail-oriented developer who enjoys learning new technologies \
                      and solving problems efficiently."
                    .into(),
                avatar_url: None,
            },
            about: AboutContent {
                summary: "A reliable team player who takes initiative and delivers quality work."
                    .into(),
                rotating_skills: vec![
                    "Frontend Development".into(),
                    "UI/UX Design".into(),
                    "Programming in C/C++, Python".into(),
                    "Responsive Web Design".into(),
                    "GitHub & Version Control".into(),
                ],
            },
            skill_categories: vec![
                SkillCategory {
                    name: "Proficient".into(),
                    skills: ["C", "C++", "Python", "SQL", "HTML", "CSS"]
                        .map(String::from)
                        .to_vec(),
                },
                SkillCategory {
                    name: "Tools".into(),
                    skills: ["GitHub", "Netlify"].map(String::from).to_vec(),
                },
            ],
            projects: vec![
                Project {
                    title: "Resume Builder".into(),
                    description: "Resume builder with real-time editing and PDF download.".into(),
                    date: "Dec 2024".into(),
                    image_url: None,
                    link_url: Some("https://example.com/resume".into()),
                },
                Project {
                    title: "City Explorer".into(),
                    description: "Search cities and view key information about them.".into(),
                    date: "Mar 2024".into(),
                    image_url: None,
                    link_url: None,
                },
            ],
            experience: vec![Experience {
                company: "Example Labs".into(),
                position: "Frontend Development Intern".into(),
                duration: "June 2025 - July 2025".into(),
                location: "Remote".into(),
                responsibilities: vec![
                    "Developed responsive web pages".into(),
                    "Completed a small-scale web project independently".into(),
                ],
            }],
        }
    }
}
