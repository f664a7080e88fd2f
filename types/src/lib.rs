//! Shared content and settings types for Folio
//!
//! This crate contains serializable types that are shared between the
//! animation core (folio-core) and the WASM frontend (folio-app): the site
//! content tree rendered by the UI and the tunables that drive the reveal
//! animations.

use serde::{Deserialize, Serialize};

// ─────────────────────────────────────────────────────────────────────────────
// Reveal Settings
// ─────────────────────────────────────────────────────────────────────────────

/// Tunables for the reveal dispatcher and related page animations.
///
/// All fields have serde defaults so a settings table can override any
/// subset without restating the rest.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RevealSettings {
    /// Visibility ratio an element must reach before its animation fires.
    #[serde(default = "default_threshold")]
    pub threshold: f64,
    /// Total duration of a counter animation, in milliseconds.
    #[serde(default = "default_counter_duration")]
    pub counter_duration_ms: u32,
    /// Delay between counter ticks, in milliseconds.
    #[serde(default = "default_counter_interval")]
    pub counter_interval_ms: u32,
    /// Delay between typed characters, in milliseconds.
    #[serde(default = "default_type_delay")]
    pub type_delay_ms: u32,
    /// Autoplay delay for the testimonial slider, in milliseconds.
    #[serde(default = "default_slider_interval")]
    pub slider_interval_ms: u32,
}

fn default_threshold() -> f64 {
    0.3
}
fn default_counter_duration() -> u32 {
    2000
}
fn default_counter_interval() -> u32 {
    16
}
fn default_type_delay() -> u32 {
    50
}
fn default_slider_interval() -> u32 {
    5000
}

impl Default for RevealSettings {
    fn default() -> Self {
        Self {
            threshold: default_threshold(),
            counter_duration_ms: default_counter_duration(),
            counter_interval_ms: default_counter_interval(),
            type_delay_ms: default_type_delay(),
            slider_interval_ms: default_slider_interval(),
        }
    }
}

impl RevealSettings {
    /// Number of ticks a counter runs for. Never zero, so every counter
    /// reaches its target even with a degenerate duration.
    pub fn counter_ticks(&self) -> u32 {
        (self.counter_duration_ms / self.counter_interval_ms.max(1)).max(1)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Site Content
// ─────────────────────────────────────────────────────────────────────────────

/// Root of the content tree, deserialized from the site's TOML document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SiteContent {
    /// Animation tunables, overridable from the content document.
    #[serde(default)]
    pub settings: RevealSettings,
    #[serde(default)]
    pub profile: Profile,
    #[serde(default)]
    pub hero: Hero,
    #[serde(default)]
    pub stats: Vec<StatItem>,
    #[serde(default)]
    pub skills: Vec<SkillItem>,
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub contact: ContactInfo,
}

/// Who the site is about.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub role: String,
    /// About-section paragraphs, rendered in order.
    #[serde(default)]
    pub about: Vec<String>,
    #[serde(default)]
    pub location: String,
}

/// Hero section: headline plus the tagline the typing animation reveals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    #[serde(default)]
    pub headline: String,
    #[serde(default)]
    pub intro: String,
    /// Strings revealed by the typed-text animation.
    #[serde(default)]
    pub typed_lines: Vec<String>,
}

/// One animated statistic (projects shipped, years of experience, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatItem {
    #[serde(default)]
    pub label: String,
    /// Value the counter animates up to.
    #[serde(default)]
    pub target: u64,
    /// Literal appended after the final value ("+", "%", "k").
    #[serde(default)]
    pub suffix: Option<String>,
}

impl StatItem {
    /// Suffix as a displayable slice, empty when none is configured.
    pub fn suffix_str(&self) -> &str {
        self.suffix.as_deref().unwrap_or("")
    }
}

/// One skill bar. Percent is clamped to 100 at load time.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SkillItem {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub percent: u8,
}

/// Portfolio project card.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub source_url: Option<String>,
    #[serde(default)]
    pub featured: bool,
}

/// Quote shown in the testimonial slider.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    #[serde(default)]
    pub quote: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub role: String,
}

/// Contact section: address plus external profiles.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ContactInfo {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub links: Vec<SocialLink>,
}

/// External profile link (GitHub, LinkedIn, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialLink {
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub url: String,
}
