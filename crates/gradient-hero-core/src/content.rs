//! Copy, links and asset references rendered by the hero section.

use serde::{Deserialize, Serialize};

/// Stagger between consecutive avatar fade-ins.
pub const AVATAR_STAGGER_MS: u64 = 200;

/// Fade-in delay of the waitlist caption next to the avatars.
pub const TRUST_CAPTION_DELAY_MS: u64 = 800;

/// A navigation link.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    pub fn new(label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            href: href.into(),
        }
    }
}

/// Social network shown in the footer row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Instagram,
    LinkedIn,
    GitHub,
}

impl SocialKind {
    pub fn label(&self) -> &'static str {
        match self {
            SocialKind::Instagram => "Instagram",
            SocialKind::LinkedIn => "LinkedIn",
            SocialKind::GitHub => "GitHub",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
}

/// Everything the hero section prints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HeroContent {
    pub brand: String,
    pub nav_links: Vec<NavLink>,
    pub cta_label: String,
    /// Avatar image references (paths or URLs), left to right
    pub avatars: Vec<String>,
    pub waitlist_count: String,
    pub waitlist_caption: String,
    pub headline_lead: String,
    pub headline_accent: String,
    pub subtitle: Vec<String>,
    pub email_placeholder: String,
    pub success_message: String,
    pub social_links: Vec<SocialLink>,
}

impl Default for HeroContent {
    fn default() -> Self {
        Self {
            brand: "Preplex".to_string(),
            nav_links: vec![
                NavLink::new("Features", "#features"),
                NavLink::new("Vision", "#vision"),
                NavLink::new("Press", "#press"),
                NavLink::new("Contact", "#contact"),
            ],
            cta_label: "Join The Waitlist".to_string(),
            avatars: (1..=4).map(|n| format!("assets/avatar-{n}.jpg")).collect(),
            waitlist_count: "2.4K".to_string(),
            waitlist_caption: "currently on the waitlist".to_string(),
            headline_lead: "Redefining What's Possible,".to_string(),
            headline_accent: "One Experience at a Time.".to_string(),
            subtitle: vec![
                "Be the first to know when we launch.".to_string(),
                "Join the waitlist and get exclusive early access.".to_string(),
            ],
            email_placeholder: "Enter Your Email".to_string(),
            success_message: "Thanks! We'll notify you when we launch.".to_string(),
            social_links: [SocialKind::Instagram, SocialKind::LinkedIn, SocialKind::GitHub]
                .into_iter()
                .map(|kind| SocialLink {
                    kind,
                    href: "#".to_string(),
                })
                .collect(),
        }
    }
}

/// Fade-in delay for the avatar at `index`.
pub fn avatar_delay_ms(index: usize) -> u64 {
    index as u64 * AVATAR_STAGGER_MS
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_content_matches_stock_page() {
        let content = HeroContent::default();
        assert_eq!(content.brand, "Preplex");
        assert_eq!(content.nav_links.len(), 4);
        assert_eq!(content.nav_links[0], NavLink::new("Features", "#features"));
        assert_eq!(content.avatars.len(), 4);
        assert_eq!(content.avatars[3], "assets/avatar-4.jpg");
        assert_eq!(content.social_links.len(), 3);
    }

    #[test]
    fn avatars_fade_in_staggered() {
        assert_eq!(avatar_delay_ms(0), 0);
        assert_eq!(avatar_delay_ms(3), 600);
    }

    #[test]
    fn social_kind_deserializes_lowercase() {
        let link: SocialLink =
            serde_json::from_str(r#"{ "kind": "github", "href": "https://github.com" }"#).unwrap();
        assert_eq!(link.kind, SocialKind::GitHub);
        assert_eq!(link.kind.label(), "GitHub");
    }
}
