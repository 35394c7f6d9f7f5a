//! # Configuration Module
//!
//! Layered settings for the link service, resolved in this order (later wins):
//! - built-in defaults
//! - `config/default.toml`, then `config/{RUN_ENV}.toml`
//! - `APP__SECTION__KEY` environment variables, plus the short forms
//!   `SERVER_HOST`, `SERVER_PORT` and `LINKS_MAX_BATCH_SIZE`
//!
//! A `.env` file is read first when present.
//!
//! ```rust,ignore
//! use marketplace_links::config::Settings;
//!
//! let settings = Settings::load()?;
//! println!("Batch limit: {}", settings.links.max_batch_size);
//! ```

mod settings;

pub use settings::*;
