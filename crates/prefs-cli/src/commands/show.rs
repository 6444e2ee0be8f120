use prefs_core::db::PreferencesStore;

use crate::commands::common::format_settings_lines;
use crate::error::CliError;

pub fn run_show(store: &impl PreferencesStore, as_json: bool) -> Result<(), CliError> {
    let settings = store.load();

    if as_json {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    } else {
        for line in format_settings_lines(&settings) {
            println!("{line}");
        }
    }

    Ok(())
}
