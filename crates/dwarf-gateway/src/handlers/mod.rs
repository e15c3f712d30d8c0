mod health;
mod url;

pub use health::health_handler;
pub use url::{create_urls_handler, redirect_handler, root_handler};
