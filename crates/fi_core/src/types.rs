use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::Error;

/// Closed set of news topics used for filtering and tagging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Category {
    Technology,
    Business,
    Sports,
    Entertainment,
    Politics,
}

impl Category {
    pub const ALL: [Category; 5] = [
        Category::Technology,
        Category::Business,
        Category::Sports,
        Category::Entertainment,
        Category::Politics,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Technology => "Technology",
            Category::Business => "Business",
            Category::Sports => "Sports",
            Category::Entertainment => "Entertainment",
            Category::Politics => "Politics",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Category> {
        Category::ALL.into_iter().find(|c| c.as_str() == name)
    }

    /// Accent colour used when tagging an item of this category.
    pub fn color(&self) -> &'static str {
        match self {
            Category::Technology => "#667eea",
            Category::Business => "#f093fb",
            Category::Sports => "#4facfe",
            Category::Entertainment => "#fa709a",
            Category::Politics => "#764ba2",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::InvalidResponse(format!("Unknown category: {}", s)))
    }
}

impl TryFrom<String> for Category {
    type Error = Error;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Category tab selection: the `"all"` wildcard or a single category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub const WILDCARD: &'static str = "all";

    /// Tabs in display order, wildcard first.
    pub fn tabs() -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(Category::ALL.into_iter().map(CategoryFilter::Only))
            .collect()
    }

    pub fn matches(&self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(c) => *c == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str(Self::WILDCARD),
            CategoryFilter::Only(c) => c.fmt(f),
        }
    }
}

/// Tab values must match exactly: `"all"` or a category's display name.
impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == Self::WILDCARD {
            return Ok(CategoryFilter::All);
        }
        Category::from_name(s)
            .map(CategoryFilter::Only)
            .ok_or_else(|| Error::Source(format!("Unknown category tab: {:?}", s)))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewsItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub summary: String,
    pub image: String,
    pub trending: bool,
}

impl NewsItem {
    /// Case-insensitive substring match against title or summary.
    /// `needle` must already be lowercased.
    pub fn mentions(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.title.to_lowercase().contains(needle)
            || self.summary.to_lowercase().contains(needle)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationItem {
    pub id: u32,
    pub title: String,
    pub category: Category,
    pub reason: String,
    #[serde(default)]
    pub image: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult {
    pub category: Category,
    pub confidence: f64,
    pub model_used: String,
}

/// Remote classification backend selected by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelKind {
    #[default]
    Bert,
    Custom,
}

impl ModelKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModelKind::Bert => "bert",
            ModelKind::Custom => "custom",
        }
    }

    /// Path of the prediction endpoint, relative to the service root.
    pub fn endpoint(&self) -> &'static str {
        match self {
            ModelKind::Bert => "predict/bert",
            ModelKind::Custom => "predict/custom",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModelKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bert" => Ok(ModelKind::Bert),
            "custom" => Ok(ModelKind::Custom),
            other => Err(Error::InvalidResponse(format!("Unknown model: {}", other))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_parse_ignores_case() {
        assert_eq!("technology".parse::<Category>().unwrap(), Category::Technology);
        assert_eq!("POLITICS".parse::<Category>().unwrap(), Category::Politics);
        assert!("Weather".parse::<Category>().is_err());
    }

    #[test]
    fn test_category_filter_parse() {
        assert_eq!("all".parse::<CategoryFilter>().unwrap(), CategoryFilter::All);
        assert_eq!(
            "Sports".parse::<CategoryFilter>().unwrap(),
            CategoryFilter::Only(Category::Sports)
        );
        assert!("".parse::<CategoryFilter>().is_err());
        assert!("ALL".parse::<CategoryFilter>().is_err());
        assert!("technology".parse::<CategoryFilter>().is_err());
        assert!(" Sports ".parse::<CategoryFilter>().is_err());
        assert_eq!(CategoryFilter::tabs().len(), 6);
        assert_eq!(CategoryFilter::tabs()[0].to_string(), "all");
    }

    #[test]
    fn test_recommendation_without_image() {
        let json = r#"{"id": 4, "title": "Recommended: Python 3.12 Features", "category": "Technology", "reason": "Based on your reading history"}"#;
        let item: RecommendationItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.category, Category::Technology);
        assert!(item.image.is_empty());
    }

    #[test]
    fn test_classification_result_rejects_unknown_category() {
        let json = r#"{"category": "Weather", "confidence": 0.5, "model_used": "bert"}"#;
        assert!(serde_json::from_str::<ClassificationResult>(json).is_err());
    }

    #[test]
    fn test_model_kind_endpoint() {
        assert_eq!(ModelKind::default(), ModelKind::Bert);
        assert_eq!(ModelKind::Bert.endpoint(), "predict/bert");
        assert_eq!("custom".parse::<ModelKind>().unwrap().endpoint(), "predict/custom");
        assert_eq!(serde_json::to_string(&ModelKind::Custom).unwrap(), "\"custom\"");
    }
}
