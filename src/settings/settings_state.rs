//! Settings model and panel selection state

use serde::Deserialize;

use crate::config::Config;
use crate::config::ai_types::DEFAULT_MODEL;

/// Audiences offered as toggle tags
pub const AUDIENCE_CATALOGUE: [&str; 5] = ["大學生", "新生", "校友", "老師", "社群大眾"];

/// Platforms offered as toggle tags
pub const PLATFORM_CATALOGUE: [&str; 4] = ["IG", "FB", "Threads", "Discord"];

/// Copywriting tone requested from the model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    #[default]
    Lively,
    Professional,
    Heartfelt,
}

impl Tone {
    pub const ALL: [Tone; 3] = [Tone::Lively, Tone::Professional, Tone::Heartfelt];

    /// Label used both in the panel and in the system prompt
    pub fn label(self) -> &'static str {
        match self {
            Tone::Lively => "活潑",
            Tone::Professional => "專業",
            Tone::Heartfelt => "走心",
        }
    }

    pub fn next(self) -> Self {
        match self {
            Tone::Lively => Tone::Professional,
            Tone::Professional => Tone::Heartfelt,
            Tone::Heartfelt => Tone::Lively,
        }
    }

    pub fn previous(self) -> Self {
        match self {
            Tone::Lively => Tone::Heartfelt,
            Tone::Professional => Tone::Lively,
            Tone::Heartfelt => Tone::Professional,
        }
    }
}

/// Campaign parameters plus the connection credential and model name
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub model: String,
    pub api_key: String,
    pub remember_key: bool,
    /// Per-person budget ceiling; `None` means unconstrained
    pub budget_max: Option<u32>,
    pub audiences: Vec<String>,
    pub tone: Tone,
    pub platforms: Vec<String>,
    pub hashtags: String,
    pub cta: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}

impl Settings {
    /// Build the initial settings from configuration
    ///
    /// The API key is not taken from here when a remembered key exists;
    /// see `key_store::hydrate_api_key`.
    pub fn from_config(config: &Config) -> Self {
        let campaign = &config.campaign;
        let mut settings = Self {
            model: config.ai.model.clone(),
            api_key: config.ai.api_key.clone().unwrap_or_default(),
            remember_key: config.ai.remember_key,
            budget_max: campaign.budget_max,
            audiences: Vec::new(),
            tone: campaign.tone,
            platforms: Vec::new(),
            hashtags: campaign.hashtags.clone(),
            cta: campaign.cta.clone(),
        };
        // Duplicates in the config collapse to one tag
        for audience in &campaign.audiences {
            if !settings.audiences.contains(audience) {
                settings.audiences.push(audience.clone());
            }
        }
        for platform in &campaign.platforms {
            if !settings.platforms.contains(platform) {
                settings.platforms.push(platform.clone());
            }
        }
        settings
    }

    /// Whether a credential is present
    pub fn is_configured(&self) -> bool {
        !self.api_key.trim().is_empty()
    }

    /// Model identifier to send, falling back to the default when blank
    pub fn effective_model(&self) -> &str {
        let model = self.model.trim();
        if model.is_empty() { DEFAULT_MODEL } else { model }
    }

    pub fn toggle_audience(&mut self, audience: &str) {
        toggle_tag(&mut self.audiences, audience);
    }

    pub fn toggle_platform(&mut self, platform: &str) {
        toggle_tag(&mut self.platforms, platform);
    }

    pub fn has_audience(&self, audience: &str) -> bool {
        self.audiences.iter().any(|a| a == audience)
    }

    pub fn has_platform(&self, platform: &str) -> bool {
        self.platforms.iter().any(|p| p == platform)
    }

    /// Append a digit to the budget, saturating at `u32::MAX`
    pub fn push_budget_digit(&mut self, digit: u32) {
        let current = self.budget_max.unwrap_or(0);
        let next = current
            .checked_mul(10)
            .and_then(|v| v.checked_add(digit))
            .unwrap_or(u32::MAX);
        self.budget_max = Some(next);
    }

    /// Remove the last budget digit; removing the only digit clears the budget
    pub fn pop_budget_digit(&mut self) {
        self.budget_max = match self.budget_max {
            Some(v) if v >= 10 => Some(v / 10),
            _ => None,
        };
    }
}

/// Add the tag when absent, remove it when present
fn toggle_tag(tags: &mut Vec<String>, tag: &str) {
    if let Some(pos) = tags.iter().position(|t| t == tag) {
        tags.remove(pos);
    } else {
        tags.push(tag.to_string());
    }
}

/// Rows of the settings panel, top to bottom
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SettingsField {
    Model,
    ApiKey,
    RememberKey,
    Budget,
    Audiences,
    Tone,
    Platforms,
    Hashtags,
    Cta,
}

impl SettingsField {
    pub const ALL: [SettingsField; 9] = [
        SettingsField::Model,
        SettingsField::ApiKey,
        SettingsField::RememberKey,
        SettingsField::Budget,
        SettingsField::Audiences,
        SettingsField::Tone,
        SettingsField::Platforms,
        SettingsField::Hashtags,
        SettingsField::Cta,
    ];

    pub fn label(self) -> &'static str {
        match self {
            SettingsField::Model => "模型",
            SettingsField::ApiKey => "Gemini API Key",
            SettingsField::RememberKey => "記住 Key（僅本機）",
            SettingsField::Budget => "預算上限（NT$ / 人）",
            SettingsField::Audiences => "宣傳對象（多選）",
            SettingsField::Tone => "文案語氣",
            SettingsField::Platforms => "平台（多選）",
            SettingsField::Hashtags => "Hashtags",
            SettingsField::Cta => "Call-To-Action（CTA）",
        }
    }

    /// Number of toggle tags on this row, if it is a tag row
    pub fn tag_count(self) -> Option<usize> {
        match self {
            SettingsField::Audiences => Some(AUDIENCE_CATALOGUE.len()),
            SettingsField::Platforms => Some(PLATFORM_CATALOGUE.len()),
            _ => None,
        }
    }
}

/// Selection state of the settings panel
#[derive(Debug, Default)]
pub struct SettingsPanel {
    selected: usize,
    tag_cursor: usize,
}

impl SettingsPanel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected_field(&self) -> SettingsField {
        SettingsField::ALL[self.selected]
    }

    pub fn tag_cursor(&self) -> usize {
        self.tag_cursor
    }

    pub fn select_next(&mut self) {
        self.selected = (self.selected + 1) % SettingsField::ALL.len();
        self.tag_cursor = 0;
    }

    pub fn select_previous(&mut self) {
        self.selected = if self.selected == 0 {
            SettingsField::ALL.len() - 1
        } else {
            self.selected - 1
        };
        self.tag_cursor = 0;
    }

    pub fn tag_next(&mut self) {
        if let Some(count) = self.selected_field().tag_count() {
            self.tag_cursor = (self.tag_cursor + 1) % count;
        }
    }

    pub fn tag_previous(&mut self) {
        if let Some(count) = self.selected_field().tag_count() {
            self.tag_cursor = (self.tag_cursor + count - 1) % count;
        }
    }
}
