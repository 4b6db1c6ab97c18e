//! Prompt records, their shareable projection and the form payload used to build them.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

/// Image shown for prompts saved without an image URL.
pub const PLACEHOLDER_IMAGE_URL: &str = "https://picsum.photos/800/1000";

/// The image-generation tool a prompt was written for.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Category {
    #[default]
    NanoBanana,
    Midjourney,
    Seedream,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::NanoBanana, Category::Midjourney, Category::Seedream];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::NanoBanana => "NanoBanana",
            Category::Midjourney => "Midjourney",
            Category::Seedream => "Seedream",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    /// Case-insensitive, so `midjourney` works on the command line.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!(
                    "Unknown category '{}' (expected one of: NanoBanana, Midjourney, Seedream)",
                    s
                )
            })
    }
}

/// Reads a category that may be missing, `null` or unknown. Payloads written
/// before the field existed resolve to the default category.
fn lenient_category<'de, D>(deserializer: D) -> Result<Category, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(match raw {
        None => Category::default(),
        Some(s) => match s.parse() {
            Ok(c) => c,
            Err(_) => {
                tracing::debug!(category = %s, "unknown category, using default");
                Category::default()
            }
        },
    })
}

/// A single stored prompt.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PromptRecord {
    pub id: String,
    pub title: String,
    #[serde(rename = "prompt")]
    pub prompt_text: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,
    pub created_at: i64,
}

impl PromptRecord {
    /// Builds a brand-new record from a form payload.
    pub fn create(draft: PromptDraft, id: String, created_at: i64) -> Self {
        let mut record = PromptRecord {
            id,
            title: String::new(),
            prompt_text: String::new(),
            image_url: String::new(),
            category: Category::default(),
            created_at,
        };
        record.apply(draft);
        record
    }

    /// Overwrites every editable field. `id` and `created_at` are untouched.
    pub fn apply(&mut self, draft: PromptDraft) {
        self.title = draft.title;
        self.prompt_text = draft.prompt;
        self.image_url = draft
            .image_url
            .filter(|u| !u.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
        self.category = draft.category.unwrap_or_default();
    }

    /// Fills in fields that older or hand-edited payloads may have left blank.
    pub(crate) fn normalize(&mut self) {
        if self.image_url.trim().is_empty() {
            self.image_url = PLACEHOLDER_IMAGE_URL.to_string();
        }
    }

    /// The form payload that would reproduce this record's content.
    pub fn to_draft(&self) -> PromptDraft {
        PromptDraft {
            title: self.title.clone(),
            prompt: self.prompt_text.clone(),
            image_url: Some(self.image_url.clone()),
            category: Some(self.category),
        }
    }
}

/// Content-only view of a prompt, as carried by a share link.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SharedView {
    pub title: String,
    pub prompt: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default, deserialize_with = "lenient_category")]
    pub category: Category,
}

impl From<&PromptRecord> for SharedView {
    fn from(record: &PromptRecord) -> Self {
        SharedView {
            title: record.title.clone(),
            prompt: record.prompt_text.clone(),
            image_url: record.image_url.clone(),
            category: record.category,
        }
    }
}

/// What the create/edit form submits.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PromptDraft {
    pub title: String,
    pub prompt: String,
    pub image_url: Option<String>,
    pub category: Option<Category>,
}

impl PromptDraft {
    /// Title and prompt are the only required fields.
    pub fn validate(&self) -> Result<(), String> {
        if self.title.trim().is_empty() {
            return Err("Title cannot be empty".to_string());
        }
        if self.prompt.trim().is_empty() {
            return Err("Prompt cannot be empty".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft() -> PromptDraft {
        PromptDraft {
            title: "Cyberpunk Cat".to_string(),
            prompt: "a neon cat".to_string(),
            image_url: None,
            category: None,
        }
    }

    #[test]
    fn create_fills_defaults() {
        let r = PromptRecord::create(draft(), "42".to_string(), 1000);
        assert_eq!(r.id, "42");
        assert_eq!(r.created_at, 1000);
        assert_eq!(r.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(r.category, Category::NanoBanana);
    }

    #[test]
    fn blank_image_url_uses_placeholder() {
        let mut d = draft();
        d.image_url = Some("   ".to_string());
        let r = PromptRecord::create(d, "1".to_string(), 1);
        assert_eq!(r.image_url, PLACEHOLDER_IMAGE_URL);
    }

    #[test]
    fn apply_keeps_identity() {
        let mut r = PromptRecord::create(draft(), "7".to_string(), 500);
        r.apply(PromptDraft {
            title: "Dog".to_string(),
            prompt: "a dog".to_string(),
            image_url: Some("https://img/dog.png".to_string()),
            category: Some(Category::Seedream),
        });
        assert_eq!(r.id, "7");
        assert_eq!(r.created_at, 500);
        assert_eq!(r.title, "Dog");
        assert_eq!(r.prompt_text, "a dog");
        assert_eq!(r.image_url, "https://img/dog.png");
        assert_eq!(r.category, Category::Seedream);
    }

    #[test]
    fn category_parses_case_insensitively() {
        assert_eq!("midjourney".parse::<Category>().unwrap(), Category::Midjourney);
        assert_eq!(" Seedream ".parse::<Category>().unwrap(), Category::Seedream);
        assert!("Dalle".parse::<Category>().is_err());
    }

    #[test]
    fn record_without_category_reads_default() {
        let json = r#"{"id":"1","title":"A","prompt":"p1","imageUrl":"u","createdAt":1000}"#;
        let r: PromptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.category, Category::NanoBanana);
    }

    #[test]
    fn null_or_unknown_category_reads_default() {
        let json = r#"{"id":"1","title":"A","prompt":"p1","imageUrl":"u","category":null,"createdAt":1}"#;
        let r: PromptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.category, Category::NanoBanana);

        let json = r#"{"id":"1","title":"A","prompt":"p1","imageUrl":"u","category":"Dalle","createdAt":1}"#;
        let r: PromptRecord = serde_json::from_str(json).unwrap();
        assert_eq!(r.category, Category::NanoBanana);
    }

    #[test]
    fn record_uses_original_key_names() {
        let r = PromptRecord::create(draft(), "9".to_string(), 3);
        let value = serde_json::to_value(&r).unwrap();
        assert_eq!(value["prompt"], "a neon cat");
        assert_eq!(value["imageUrl"], PLACEHOLDER_IMAGE_URL);
        assert_eq!(value["category"], "NanoBanana");
        assert_eq!(value["createdAt"], 3);
    }

    #[test]
    fn validate_requires_title_and_prompt() {
        assert!(draft().validate().is_ok());
        let mut d = draft();
        d.title = " ".to_string();
        assert_eq!(d.validate().unwrap_err(), "Title cannot be empty");
        let mut d = draft();
        d.prompt.clear();
        assert_eq!(d.validate().unwrap_err(), "Prompt cannot be empty");
    }
}
