//! Load target validation.

use std::path::Path;

use crate::schema::PortholeConfig;

pub(crate) fn validate_load(errors: &mut Vec<String>, config: &PortholeConfig) {
    let load = &config.load;

    if !(load.dev_url.starts_with("http://") || load.dev_url.starts_with("https://")) {
        errors.push(format!(
            "load.dev_url = {:?} must be an http(s) address",
            load.dev_url
        ));
    }

    if load.bundle_dir.trim().is_empty() {
        errors.push("load.bundle_dir must not be empty".into());
    }

    let entry = Path::new(&load.entry);
    if load.entry.trim().is_empty() {
        errors.push("load.entry must not be empty".into());
    } else if entry.is_absolute() || load.entry.split(['/', '\\']).any(|seg| seg == "..") {
        errors.push(format!(
            "load.entry = {:?} must be a relative path inside the bundle",
            load.entry
        ));
    }
}
