//! Platform-specific defaults.

/// Environment variable that overrides the Python interpreter.
pub const PYTHON_ENV_VAR: &str = "NBDEPS_PYTHON";

/// Check if running in a CI environment.
pub fn is_ci() -> bool {
    std::env::var("CI").is_ok()
        || std::env::var("GITHUB_ACTIONS").is_ok()
        || std::env::var("GITLAB_CI").is_ok()
        || std::env::var("CIRCLECI").is_ok()
        || std::env::var("TRAVIS").is_ok()
        || std::env::var("JENKINS_URL").is_ok()
}

/// Python interpreter used when none is configured.
pub fn default_python() -> String {
    std::env::var(PYTHON_ENV_VAR).unwrap_or_else(|_| {
        if cfg!(target_os = "windows") {
            "python".to_string()
        } else {
            "python3".to_string()
        }
    })
}
