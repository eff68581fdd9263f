// Configuration type definitions

use serde::Deserialize;

use super::ai_types::AiConfig;
use crate::settings::Tone;

fn default_audiences() -> Vec<String> {
    vec!["大學生".to_string()]
}

fn default_platforms() -> Vec<String> {
    vec!["IG".to_string()]
}

fn default_hashtags() -> String {
    "#社團 #週末活動 #台北".to_string()
}

fn default_cta() -> String {
    "立即私訊報名 / tag 你的同學一起來！".to_string()
}

/// Initial campaign parameters shown in the settings panel
#[derive(Debug, Clone, Deserialize)]
pub struct CampaignConfig {
    /// Per-person budget ceiling in NT$
    pub budget_max: Option<u32>,
    #[serde(default = "default_audiences")]
    pub audiences: Vec<String>,
    #[serde(default)]
    pub tone: Tone,
    #[serde(default = "default_platforms")]
    pub platforms: Vec<String>,
    #[serde(default = "default_hashtags")]
    pub hashtags: String,
    #[serde(default = "default_cta")]
    pub cta: String,
}

impl Default for CampaignConfig {
    fn default() -> Self {
        CampaignConfig {
            budget_max: None,
            audiences: default_audiences(),
            tone: Tone::default(),
            platforms: default_platforms(),
            hashtags: default_hashtags(),
            cta: default_cta(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub ai: AiConfig,
    #[serde(default)]
    pub campaign: CampaignConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
