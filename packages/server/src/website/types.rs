//! Core types for the website generation pipeline.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::style::StyleTemplate;

fn default_true() -> bool {
    true
}

fn default_primary_color() -> String {
    "#667eea".to_string()
}

fn default_secondary_color() -> String {
    "#764ba2".to_string()
}

/// A validated request to generate a website.
///
/// Deserializes with the same defaults as the public JSON contract:
/// navigation/footer/responsive on, contact form off, modern template.
/// Call [`validate`](GenerationRequest::validate) before handing the
/// request to a generator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationRequest {
    pub name: String,
    pub description: String,
    #[serde(default = "default_true")]
    pub include_navigation: bool,
    #[serde(default = "default_true")]
    pub include_footer: bool,
    #[serde(default)]
    pub include_contact_form: bool,
    #[serde(default = "default_true")]
    pub is_responsive: bool,
    #[serde(default = "default_primary_color")]
    pub primary_color: String,
    #[serde(default = "default_secondary_color")]
    pub secondary_color: String,
    #[serde(default)]
    pub image_urls: Vec<String>,
    #[serde(default)]
    pub style_template: StyleTemplate,
}

/// The output of a generator: a complete markup fragment plus stylesheet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedContent {
    pub html: String,
    pub css: String,
    pub navigation_items: Vec<String>,
    pub footer_content: String,
}

/// A stored generation result with identity and creation timestamp.
///
/// Immutable once created; the request fields are copied verbatim and the
/// generated html/css are always non-empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Website {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub generated_html: String,
    pub generated_css: String,
    pub navigation_items: Vec<String>,
    pub footer_content: String,
    pub include_navigation: bool,
    pub include_footer: bool,
    pub include_contact_form: bool,
    pub is_responsive: bool,
    pub primary_color: String,
    pub secondary_color: String,
    pub image_urls: Vec<String>,
    pub style_template: StyleTemplate,
    pub created_at: DateTime<Utc>,
}
