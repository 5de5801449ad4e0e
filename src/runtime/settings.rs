use crate::config::Settings;

/// Settings for this run. A broken config file never blocks renaming: it is
/// reported on stderr and the defaults are used instead.
pub fn load_settings() -> Settings {
    let settings = Settings::load()
        .map_err(|e| e.to_string())
        .and_then(|s| s.validate().map(|()| s));

    let settings = settings.unwrap_or_else(|msg| {
        eprintln!("tagname: ignoring config, using defaults: {msg}");
        Settings::default()
    });

    for warning in settings.warnings() {
        eprintln!("tagname: {warning}");
    }
    settings
}
