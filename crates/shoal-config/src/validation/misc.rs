//! Validation for the webview section.

use crate::schema::ShoalConfig;

use super::helpers::validate_not_blank;

pub(crate) fn validate_webview(errors: &mut Vec<String>, config: &ShoalConfig) {
    if let Some(ua) = &config.webview.user_agent {
        validate_not_blank(errors, "webview.user_agent", ua);
    }
}
