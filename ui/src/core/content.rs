//! Static page content.
//!
//! Image URLs and the ordering of every list live in `content/site.json`,
//! embedded at compile time. Visible copy is not stored here: each entry's id
//! maps to Fluent message ids (see the `*_key` helpers), so both locales share
//! one content file.

use once_cell::sync::Lazy;
use serde::Deserialize;

const SITE_JSON: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/content/site.json"));

/// Parsed copy of the embedded content file.
pub static SITE: Lazy<SiteContent> =
    Lazy::new(|| SiteContent::parse(SITE_JSON).expect("embedded content/site.json is valid"));

#[derive(Debug, Clone, Deserialize)]
pub struct SiteContent {
    pub logo: String,
    pub hero_image: String,
    pub navigation: Vec<NavEntry>,
    pub facilities: Vec<Facility>,
    pub programs: Vec<Program>,
    pub objectives: Vec<Objective>,
    pub promo: Promo,
    pub footer: FooterContent,
}

#[derive(Debug, Clone, Deserialize)]
pub struct NavEntry {
    pub id: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Facility {
    pub id: String,
    pub image: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Program {
    pub id: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ObjectiveIcon {
    Users,
    Award,
    Wrench,
    Graduation,
}

impl ObjectiveIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ObjectiveIcon::Users => "👥",
            ObjectiveIcon::Award => "🏅",
            ObjectiveIcon::Wrench => "🔧",
            ObjectiveIcon::Graduation => "🎓",
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct Objective {
    pub id: String,
    pub icon: ObjectiveIcon,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Promo {
    pub background: String,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SocialLink {
    pub label: String,
    pub href: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct FooterContent {
    pub quick_links: Vec<String>,
    pub programs: Vec<String>,
    pub social: Vec<SocialLink>,
}

impl SiteContent {
    pub fn parse(raw: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(raw)
    }

    /// Every Fluent id the content refers to.
    pub fn message_keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        keys.extend(self.navigation.iter().map(|n| nav_key(&n.id)));
        for f in &self.facilities {
            keys.push(facility_title_key(&f.id));
            keys.push(facility_desc_key(&f.id));
        }
        for p in &self.programs {
            keys.push(program_title_key(&p.id));
            keys.push(program_desc_key(&p.id));
        }
        keys.extend(self.objectives.iter().map(|o| objective_key(&o.id)));
        for h in &self.promo.highlights {
            keys.push(promo_title_key(h));
            keys.push(promo_desc_key(h));
        }
        keys.extend(self.footer.quick_links.iter().map(|q| footer_quick_key(q)));
        keys.extend(self.footer.programs.iter().map(|p| footer_program_key(p)));
        keys
    }
}

pub fn nav_key(id: &str) -> String {
    format!("nav-{id}")
}

pub fn facility_title_key(id: &str) -> String {
    format!("facility-{id}-title")
}

pub fn facility_desc_key(id: &str) -> String {
    format!("facility-{id}-desc")
}

pub fn program_title_key(id: &str) -> String {
    format!("program-{id}-title")
}

pub fn program_desc_key(id: &str) -> String {
    format!("program-{id}-desc")
}

pub fn objective_key(id: &str) -> String {
    format!("objective-{id}")
}

pub fn promo_title_key(id: &str) -> String {
    format!("promo-{id}-title")
}

pub fn promo_desc_key(id: &str) -> String {
    format!("promo-{id}-desc")
}

pub fn footer_quick_key(id: &str) -> String {
    format!("footer-quick-{id}")
}

pub fn footer_program_key(id: &str) -> String {
    format!("footer-program-{id}")
}
