//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Shoal Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# Servers, devices, push-to-talk keys and appearance are managed from the
# settings page and stored separately in store.json.

[window]
# title = "Shoal"
# width = 1280           # 400-7680
# height = 800           # 300-4320
# decorations = true
# startup_mode = "windowed"  # windowed, maximized

[layout]
# titlebar_height = 36   # 0-200
# sidebar_width = 72     # 0-400

[webview]
# devtools = false
# user_agent = "Mozilla/5.0 ..."
# isolate_server_data = true   # separate cookies and storage per server

[ptt]
# listen_globally = true       # keep push-to-talk working while unfocused

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
}
