pub mod config;
pub mod logging;

pub mod clipboard;
pub mod email;
pub mod fetch;
pub mod fragment_url;
pub mod lead;
pub mod loader;
pub mod page;
pub mod site_id;
