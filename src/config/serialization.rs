//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::{default_headers, Config};

/// Quote `value` as a TOML string, escaping what TOML requires
fn toml_string(value: &str) -> String {
    toml::Value::String(value.to_string()).to_string()
}

impl Config {
    /// Serialize the config as a commented TOML document
    pub fn to_toml(&self) -> String {
        let mut output = String::new();

        output.push_str("# jokebox configuration\n");
        output.push_str("# Precedence: environment variables > this file > built-in defaults\n");

        output.push_str(&self.api_to_toml());
        output.push_str(&self.ui_to_toml());
        output.push_str(&self.logging_to_toml());

        output
    }

    fn api_to_toml(&self) -> String {
        let api = &self.api;
        let mut output = String::from("\n[api]\n");
        output.push_str("# Joke API endpoint (env: JOKEBOX_API_URL)\n");
        output.push_str(&format!("base_url = {}\n", toml_string(&api.base_url)));
        output.push_str("# Request timeout in seconds; unset waits indefinitely\n");
        match api.timeout_secs {
            Some(secs) => output.push_str(&format!("timeout_secs = {}\n", secs)),
            None => output.push_str("# timeout_secs = 30\n"),
        }

        // Only headers that differ from the built-in set are written out
        let defaults = default_headers();
        let extra: Vec<_> = api
            .headers
            .iter()
            .filter(|(name, value)| defaults.get(*name) != Some(*value))
            .collect();

        output.push_str("\n[api.headers]\n");
        output.push_str("# Extra headers sent with every request (Content-Type: application/json is always set)\n");
        if extra.is_empty() {
            output.push_str("# \"User-Agent\" = \"jokebox\"\n");
        } else {
            for (name, value) in extra {
                output.push_str(&format!("{} = {}\n", toml_string(name), toml_string(value)));
            }
        }

        output
    }

    fn ui_to_toml(&self) -> String {
        let ui = &self.ui;
        let mut output = String::from("\n[ui]\n");
        output.push_str("# \"programming\" or \"general\" (env: JOKEBOX_CATEGORY)\n");
        output.push_str(&format!(
            "default_category = {}\n",
            toml_string(ui.default_category.as_str())
        ));
        output.push_str("# Show the latest fetch error in the status bar\n");
        output.push_str(&format!("show_errors = {}\n", ui.show_errors));
        output.push_str(&format!("show_logs = {}\n", ui.show_logs));
        output
    }

    fn logging_to_toml(&self) -> String {
        let logging = &self.logging;
        let mut output = String::from("\n[logging]\n");
        output.push_str("# trace, debug, info, warn, error (RUST_LOG takes precedence)\n");
        output.push_str(&format!("level = {}\n", toml_string(&logging.level)));
        output.push_str(&format!("file_enabled = {}\n", logging.file_enabled));
        output.push_str(&format!(
            "file_dir = {}\n",
            toml_string(&logging.file_dir.display().to_string())
        ));
        output.push_str("# hourly, daily, never\n");
        output.push_str(&format!(
            "file_rotation = {}\n",
            toml_string(logging.file_rotation.as_str())
        ));
        output.push_str(&format!("file_prefix = {}\n", toml_string(&logging.file_prefix)));
        output
    }
}
