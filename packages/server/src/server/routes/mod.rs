pub mod health;
pub mod preview;
pub mod styles;
pub mod websites;

pub use health::health_handler;
pub use preview::{preview_code_handler, preview_download_handler, preview_handler};
pub use styles::list_styles_handler;
pub use websites::{generate_website_handler, get_website_handler, list_websites_handler};
