//! User id handling for `--user`.

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use regex::Regex;
use std::sync::LazyLock;

static USER_ID: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9._@-]{0,63}$").expect("valid user id pattern")
});

pub fn validate_user_id(s: &str) -> AppResult<String> {
    if USER_ID.is_match(s) {
        Ok(s.to_string())
    } else {
        Err(AppError::InvalidUser(s.to_string()))
    }
}

/// `--user` when given, the configured default user otherwise.
pub fn resolve_user(arg: Option<&String>, cfg: &Config) -> AppResult<String> {
    validate_user_id(arg.unwrap_or(&cfg.default_user))
}
