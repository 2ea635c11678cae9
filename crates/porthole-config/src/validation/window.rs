//! Window geometry and background validation.

use crate::colors;
use crate::schema::PortholeConfig;

use super::helpers::validate_range;

pub(crate) fn validate_window(errors: &mut Vec<String>, config: &PortholeConfig) {
    let w = &config.window;
    validate_range(errors, "window.width", w.width, 200, 16384);
    validate_range(errors, "window.height", w.height, 150, 16384);
    validate_range(errors, "window.min_width", w.min_width, 0, 16384);
    validate_range(errors, "window.min_height", w.min_height, 0, 16384);

    if w.min_width > w.width {
        errors.push(format!(
            "window.min_width = {} exceeds window.width = {}",
            w.min_width, w.width
        ));
    }
    if w.min_height > w.height {
        errors.push(format!(
            "window.min_height = {} exceeds window.height = {}",
            w.min_height, w.height
        ));
    }
    if !colors::is_valid_hex(&w.background) {
        errors.push(format!(
            "window.background = {:?} is not a hex color",
            w.background
        ));
    }
}
