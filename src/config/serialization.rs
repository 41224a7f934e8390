//! Config serialization to TOML
//!
//! Single source of truth for config file format.

use super::Config;

impl Config {
    /// Serialize config to TOML string (single source of truth for format)
    pub fn to_toml(&self) -> String {
        format!(
            r#"# bemkit configuration

# Stylesheet for the terminal gallery: default, mono
stylesheet = "{stylesheet}"

# Gallery presentation
[gallery]
# Size for components not sized explicitly: small, medium, large
default_size = "{default_size}"
# Per-item list decoration: none, marker
list_decoration = "{list_decoration}"
# Show the logs panel under the gallery
show_logs = {show_logs}

# Logging configuration (RUST_LOG env var overrides)
[logging]
level = "{log_level}"
# File logging (in addition to the gallery buffer or stderr)
file_enabled = {log_file_enabled}
file_dir = "{log_file_dir}"
file_rotation = "{log_file_rotation}"  # hourly, daily, never
file_prefix = "{log_file_prefix}"
"#,
            stylesheet = self.stylesheet.name(),
            default_size = self.gallery.default_size.as_str(),
            list_decoration = self.gallery.list_decoration.name(),
            show_logs = self.gallery.show_logs,
            log_level = self.logging.level,
            log_file_enabled = self.logging.file_enabled,
            log_file_dir = self.logging.file_dir.display(),
            log_file_rotation = self.logging.file_rotation.as_str(),
            log_file_prefix = self.logging.file_prefix,
        )
    }
}
