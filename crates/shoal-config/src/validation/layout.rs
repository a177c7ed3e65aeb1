//! Window and chrome layout validation.

use crate::schema::ShoalConfig;

use super::helpers::{validate_not_blank, validate_range};

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &ShoalConfig) {
    validate_not_blank(errors, "window.title", &config.window.title);
    validate_range(errors, "window.width", config.window.width, 400, 7680);
    validate_range(errors, "window.height", config.window.height, 300, 4320);
}

pub(crate) fn validate_layout(errors: &mut Vec<String>, config: &ShoalConfig) {
    validate_range(
        errors,
        "layout.titlebar_height",
        config.layout.titlebar_height,
        0,
        200,
    );
    validate_range(
        errors,
        "layout.sidebar_width",
        config.layout.sidebar_width,
        0,
        400,
    );
}
