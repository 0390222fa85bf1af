//! Environment variable access.

/// Returns the value of `key`, panicking with the variable name if it is
/// unset or not valid UTF-8. For configuration a run cannot proceed without.
pub fn required(key: &str) -> String {
    match std::env::var(key) {
        Ok(value) => value,
        Err(_) => panic!("missing required environment variable: {key}"),
    }
}

/// Returns the value of `key`, or `None` if unset or not valid UTF-8.
pub fn get(key: &str) -> Option<String> {
    std::env::var(key).ok()
}
