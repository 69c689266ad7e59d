//! Platform detection.

/// Environment variables set by common CI providers.
const CI_VARS: &[&str] = &[
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
];

/// Check if running in a CI environment.
///
/// Used in `main()` to force the non-interactive UI, which suppresses
/// spinners that produce noisy output in log-based environments.
pub fn is_ci() -> bool {
    ci_detected(|name| std::env::var_os(name).is_some())
}

/// CI detection against an arbitrary variable lookup.
fn ci_detected(is_set: impl Fn(&str) -> bool) -> bool {
    CI_VARS.iter().any(|name| is_set(name))
}
