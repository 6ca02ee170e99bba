//! Invocation context detection.
//!
//! Works out, from well-known environment variables, whether the process
//! was started by a package-manager script and whether update
//! notifications have been switched off. The notification core never
//! calls this; the CLI does and passes the results in.

/// What detection found about how the process was started.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InvocationContext {
    /// The variable that identified a package-manager script run.
    pub automated_via: Option<String>,
    /// The variable that switched notifications off.
    pub opted_out_via: Option<String>,
}

impl InvocationContext {
    /// Running as part of an npm or yarn script.
    pub fn is_automated(&self) -> bool {
        self.automated_via.is_some()
    }

    /// Notifications disabled by the user or a CI environment.
    pub fn is_opted_out(&self) -> bool {
        self.opted_out_via.is_some()
    }
}

/// CI variables that disable notifications when present.
const CI_VARS: [&str; 7] = [
    "CI",
    "GITHUB_ACTIONS",
    "GITLAB_CI",
    "CIRCLECI",
    "TRAVIS",
    "JENKINS_URL",
    "BUILDKITE",
];

/// Environment-variable based context detector.
///
/// # Example
///
/// ```
/// use update_notifier::environment::ContextDetector;
///
/// let context = ContextDetector::new().detect_with_env(|key| match key {
///     "npm_config_user_agent" => Ok("npm/10.2.0 node/v20.10.0".to_string()),
///     _ => Err(std::env::VarError::NotPresent),
/// });
/// assert!(context.is_automated());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct ContextDetector;

impl ContextDetector {
    pub fn new() -> Self {
        Self
    }

    /// Detect from the process environment.
    pub fn detect(&self) -> InvocationContext {
        self.detect_with_env(|key| std::env::var(key))
    }

    /// Detect with a custom env var lookup (for testing).
    pub fn detect_with_env<F>(&self, env_fn: F) -> InvocationContext
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        InvocationContext {
            automated_via: self.detect_automated(&env_fn),
            opted_out_via: self.detect_opt_out(&env_fn),
        }
    }

    fn detect_automated<F>(&self, env_fn: &F) -> Option<String>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        // npm 6 and yarn both announce themselves in the user agent
        if let Ok(agent) = env_fn("npm_config_user_agent") {
            if agent.starts_with("npm") || agent.starts_with("yarn") {
                return Some("npm_config_user_agent".to_string());
            }
        }

        // npm 7+ always points at the package manifest
        if let Ok(manifest) = env_fn("npm_package_json") {
            if manifest.ends_with("package.json") {
                return Some("npm_package_json".to_string());
            }
        }

        None
    }

    fn detect_opt_out<F>(&self, env_fn: &F) -> Option<String>
    where
        F: Fn(&str) -> Result<String, std::env::VarError>,
    {
        if env_fn("NO_UPDATE_NOTIFIER").is_ok() {
            return Some("NO_UPDATE_NOTIFIER".to_string());
        }

        if env_fn("NODE_ENV").as_deref() == Ok("test") {
            return Some("NODE_ENV".to_string());
        }

        for var in CI_VARS {
            if env_fn(var).is_ok() {
                return Some(var.to_string());
            }
        }

        // TF_BUILD must equal "True" (Azure DevOps)
        if env_fn("TF_BUILD").as_deref() == Ok("True") {
            return Some("TF_BUILD".to_string());
        }

        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn make_env(vars: &[(&str, &str)]) -> impl Fn(&str) -> Result<String, std::env::VarError> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key: &str| map.get(key).cloned().ok_or(std::env::VarError::NotPresent)
    }

    #[test]
    fn detect_nothing_in_clean_env() {
        let context = ContextDetector::new().detect_with_env(make_env(&[]));
        assert_eq!(context, InvocationContext::default());
        assert!(!context.is_automated());
        assert!(!context.is_opted_out());
    }

    #[test]
    fn detect_npm_script_from_user_agent() {
        let env_fn = make_env(&[("npm_config_user_agent", "npm/6.14.18 node/v14.21.3")]);
        let context = ContextDetector::new().detect_with_env(env_fn);
        assert!(context.is_automated());
        assert_eq!(context.automated_via.as_deref(), Some("npm_config_user_agent"));
    }

    #[test]
    fn detect_yarn_script_from_user_agent() {
        let env_fn = make_env(&[("npm_config_user_agent", "yarn/1.22.19 npm/? node/v18")]);
        assert!(ContextDetector::new().detect_with_env(env_fn).is_automated());
    }

    #[test]
    fn other_user_agents_are_not_automated() {
        let env_fn = make_env(&[("npm_config_user_agent", "pnpm/8.0.0 npm/? node/v18")]);
        assert!(!ContextDetector::new().detect_with_env(env_fn).is_automated());
    }

    #[test]
    fn detect_npm7_script_from_manifest() {
        let env_fn = make_env(&[("npm_package_json", "/home/me/project/package.json")]);
        let context = ContextDetector::new().detect_with_env(env_fn);
        assert_eq!(context.automated_via.as_deref(), Some("npm_package_json"));
    }

    #[test]
    fn opt_out_from_no_update_notifier() {
        let env_fn = make_env(&[("NO_UPDATE_NOTIFIER", "")]);
        let context = ContextDetector::new().detect_with_env(env_fn);
        assert_eq!(context.opted_out_via.as_deref(), Some("NO_UPDATE_NOTIFIER"));
    }

    #[test]
    fn opt_out_from_node_env_test_only() {
        let context = ContextDetector::new().detect_with_env(make_env(&[("NODE_ENV", "test")]));
        assert!(context.is_opted_out());

        let context =
            ContextDetector::new().detect_with_env(make_env(&[("NODE_ENV", "production")]));
        assert!(!context.is_opted_out());
    }

    #[test]
    fn opt_out_from_ci_vars() {
        for var in CI_VARS {
            let context = ContextDetector::new().detect_with_env(make_env(&[(var, "true")]));
            assert_eq!(context.opted_out_via.as_deref(), Some(var));
        }
    }

    #[test]
    fn tf_build_requires_true_value() {
        let context = ContextDetector::new().detect_with_env(make_env(&[("TF_BUILD", "True")]));
        assert!(context.is_opted_out());

        let context = ContextDetector::new().detect_with_env(make_env(&[("TF_BUILD", "false")]));
        assert!(!context.is_opted_out());
    }

    #[test]
    fn automated_and_opt_out_are_independent() {
        let env_fn = make_env(&[
            ("npm_config_user_agent", "npm/10.2.0"),
            ("CI", "1"),
        ]);
        let context = ContextDetector::new().detect_with_env(env_fn);
        assert!(context.is_automated());
        assert!(context.is_opted_out());
    }

    #[test]
    fn detect_uses_process_env_without_panicking() {
        let _ = ContextDetector::new().detect();
    }
}
