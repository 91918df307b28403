//! Website generation domain: validation, generation, storage, preview.

pub mod demo;
pub mod generate;
pub mod preview;
pub mod store;
pub mod style;
pub mod types;
pub mod validate;

pub use generate::{GenerationOutcome, GenerationSource, WebsiteGenerator};
pub use store::WebsiteStore;
pub use types::{GeneratedContent, GenerationRequest, Website};
pub use validate::{FieldError, ValidationError};
