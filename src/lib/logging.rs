//! Browser console logging. Installs the `log` backend and the panic hook once at
//! startup; everything else in the crate only talks to the `log` facade.

use super::config::AppConfig;
use log::Level;

/// Routes `log` records and panics to the browser console.
pub fn init(config: &AppConfig) {
    console_error_panic_hook::set_once();

    let level = parse_level(&config.log_level);
    if console_log::init_with_level(level).is_err() {
        // A logger is already installed (hot reload); keep it.
        return;
    }
    log::info!(
        "cloud web {} starting (api: {})",
        super::build_info::git_commit_hash(),
        config.api_base_url
    );
}

fn parse_level(value: &str) -> Level {
    value.parse().unwrap_or(Level::Info)
}
