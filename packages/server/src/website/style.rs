//! Style templates for the UI preview state.
//!
//! A small enumerated template table mapping each style to its default
//! colors, font family, and layout. This feeds the client-side style
//! picker and is independent of the generation pipeline.

use serde::{Deserialize, Serialize};

/// The fixed set of style templates a request may name.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StyleTemplate {
    #[default]
    Modern,
    Classic,
    Minimal,
    Corporate,
    Creative,
}

impl StyleTemplate {
    pub const ALL: [StyleTemplate; 5] = [
        StyleTemplate::Modern,
        StyleTemplate::Classic,
        StyleTemplate::Minimal,
        StyleTemplate::Corporate,
        StyleTemplate::Creative,
    ];

    /// Default preview preset for this template.
    pub fn preset(self) -> StylePreset {
        match self {
            StyleTemplate::Modern => StylePreset {
                template: self,
                name: "Modern",
                description: "Clean lines, gradients, and contemporary design",
                primary_color: "#667eea",
                secondary_color: "#764ba2",
                font_family: FontFamily::Inter,
                layout: Layout::Centered,
            },
            StyleTemplate::Classic => StylePreset {
                template: self,
                name: "Classic",
                description: "Traditional, professional with serif fonts",
                primary_color: "#2c3e50",
                secondary_color: "#34495e",
                font_family: FontFamily::Roboto,
                layout: Layout::Boxed,
            },
            StyleTemplate::Minimal => StylePreset {
                template: self,
                name: "Minimal",
                description: "Simple, spacious with lots of white space",
                primary_color: "#1a202c",
                secondary_color: "#4a5568",
                font_family: FontFamily::Inter,
                layout: Layout::Centered,
            },
            StyleTemplate::Corporate => StylePreset {
                template: self,
                name: "Corporate",
                description: "Business-focused, professional blue theme",
                primary_color: "#3182ce",
                secondary_color: "#2b6cb0",
                font_family: FontFamily::OpenSans,
                layout: Layout::Fullwidth,
            },
            StyleTemplate::Creative => StylePreset {
                template: self,
                name: "Creative",
                description: "Bold colors, artistic and expressive",
                primary_color: "#ed64a6",
                secondary_color: "#9f7aea",
                font_family: FontFamily::Poppins,
                layout: Layout::Centered,
            },
        }
    }
}

/// Preview preset for a single style template.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StylePreset {
    pub template: StyleTemplate,
    pub name: &'static str,
    pub description: &'static str,
    pub primary_color: &'static str,
    pub secondary_color: &'static str,
    pub font_family: FontFamily,
    pub layout: Layout,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FontFamily {
    Inter,
    Roboto,
    #[serde(rename = "opensans")]
    OpenSans,
    Lato,
    Poppins,
}

impl FontFamily {
    /// CSS font stack for this family.
    pub fn css_stack(self) -> &'static str {
        match self {
            FontFamily::Inter => "Inter, sans-serif",
            FontFamily::Roboto => "Roboto, sans-serif",
            FontFamily::OpenSans => "Open Sans, sans-serif",
            FontFamily::Lato => "Lato, sans-serif",
            FontFamily::Poppins => "Poppins, sans-serif",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Layout {
    Centered,
    Fullwidth,
    Boxed,
}
