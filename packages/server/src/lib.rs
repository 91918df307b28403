// Sitesmith - AI website generator service
//
// This crate turns a structured generation request (name, description, style
// options, image URLs) into a complete HTML+CSS website, with a deterministic
// demo generator as the fallback path when no OpenAI key is configured.

pub mod config;
pub mod error;
pub mod server;
pub mod website;

pub use config::*;
