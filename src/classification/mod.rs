//! Category assignment and news ordering.
//!
//! Classification is a pure function of `(name, region, original category)`;
//! all tables are built once into [`ClassificationRules`] and shared
//! read-only.

use regex::Regex;
use std::collections::HashMap;

use crate::errors::{AppError, AppResult};
use crate::models::{ChannelRecord, ClassifiedChannel};

pub mod rules;

use rules::*;

/// Sort key shared by non-news channels and news channels that match no
/// relevance keyword
pub const UNRANKED: usize = usize::MAX;

/// Read-only lookup tables driving classification
#[derive(Debug, Clone)]
pub struct ClassificationRules {
    pub category_rules: Vec<(String, Vec<String>)>,
    pub fallback_category: String,
    pub region_display: HashMap<String, String>,
    pub news_category: String,
    pub news_relevance: Vec<String>,
    pub rock_keywords: Vec<String>,
}

impl ClassificationRules {
    pub fn builtin() -> Self {
        Self {
            category_rules: BR_CATEGORY_RULES
                .iter()
                .map(|(category, keywords)| {
                    (
                        category.to_string(),
                        keywords.iter().map(|k| k.to_string()).collect(),
                    )
                })
                .collect(),
            fallback_category: BR_FALLBACK_CATEGORY.to_string(),
            region_display: REGION_DISPLAY
                .iter()
                .map(|(code, label)| (code.to_string(), label.to_string()))
                .collect(),
            news_category: NEWS_CATEGORY.to_string(),
            news_relevance: NEWS_RELEVANCE.iter().map(|k| k.to_string()).collect(),
            rock_keywords: ROCK_KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

impl Default for ClassificationRules {
    fn default() -> Self {
        Self::builtin()
    }
}

pub struct Classifier {
    rules: ClassificationRules,
    mtv_pattern: Regex,
}

impl Classifier {
    pub fn new(rules: ClassificationRules) -> AppResult<Self> {
        let mtv_pattern = Regex::new(r"\bmtv\b")
            .map_err(|e| AppError::configuration(format!("Invalid brand pattern: {e}")))?;
        Ok(Self { rules, mtv_pattern })
    }

    pub fn builtin() -> AppResult<Self> {
        Self::new(ClassificationRules::builtin())
    }

    /// Final category of a channel.
    ///
    /// Cross-region brand rules (VH1, MTV, Rock) win first, then a music
    /// source label, then the Brazilian keyword table for region `BR`, and
    /// finally the region display name.
    pub fn final_category(&self, name: &str, region: &str, original_category: &str) -> String {
        let name_lower = name.to_lowercase();

        if name_lower.contains("vh1") {
            return VH1_CATEGORY.to_string();
        }
        if self.mtv_pattern.is_match(&name_lower) {
            return MTV_CATEGORY.to_string();
        }
        if self
            .rules
            .rock_keywords
            .iter()
            .any(|kw| name_lower.contains(kw.as_str()))
        {
            return ROCK_CATEGORY.to_string();
        }

        if original_category.to_lowercase().contains("music") {
            return MUSIC_CATEGORY.to_string();
        }

        if region.eq_ignore_ascii_case("BR") {
            return self.br_category(&name_lower);
        }

        self.rules
            .region_display
            .get(region)
            .cloned()
            .unwrap_or_else(|| OTHER_CATEGORY.to_string())
    }

    fn br_category(&self, name_lower: &str) -> String {
        self.rules
            .category_rules
            .iter()
            .find(|(_, keywords)| keywords.iter().any(|kw| name_lower.contains(kw.as_str())))
            .map(|(category, _)| category.clone())
            .unwrap_or_else(|| self.rules.fallback_category.clone())
    }

    /// Position of the first relevance keyword found in the name, or
    /// [`UNRANKED`]
    pub fn news_rank(&self, name: &str) -> usize {
        let name_lower = name.to_lowercase();
        self.rules
            .news_relevance
            .iter()
            .position(|kw| name_lower.contains(kw.as_str()))
            .unwrap_or(UNRANKED)
    }

    fn sort_key(&self, channel: &ClassifiedChannel) -> usize {
        if channel.category == self.rules.news_category {
            self.news_rank(&channel.record.name)
        } else {
            UNRANKED
        }
    }

    /// Assign categories and move ranked news channels ahead, keeping the
    /// input order for everything that shares a key.
    pub fn order(&self, records: Vec<ChannelRecord>) -> Vec<ClassifiedChannel> {
        let mut classified: Vec<ClassifiedChannel> = records
            .into_iter()
            .map(|record| {
                let category =
                    self.final_category(&record.name, &record.region, &record.original_category);
                ClassifiedChannel { record, category }
            })
            .collect();

        classified.sort_by_cached_key(|channel| self.sort_key(channel));
        classified
    }
}
