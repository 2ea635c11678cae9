//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Porthole Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[app]
name = "Porthole"

[window]
# title = "Porthole"
# width = 900
# height = 700
# min_width = 600
# min_height = 400
# background = "#f5f5f5"
# show_when_ready = true

[load]
# mode = "auto"              # auto, development, packaged
# dev_url = "http://localhost:8080"
# bundle_dir = "renderer"
# entry = "index.html"
# devtools_in_development = true

[logging]
# level = "INFO"             # DEBUG, INFO, WARNING, ERROR
"##
    .to_string()
}
