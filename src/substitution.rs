//! Substitution types for deferred launch values

use crate::ament::get_package_share_directory;
use crate::context::LaunchContext;
use crate::error::SubstitutionError;

/// Substitution enum representing different types of deferred values
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// Launch configuration variable, resolved from the context
    LaunchConfiguration(String),
    /// Environment variable with optional default
    EnvironmentVariable {
        name: String,
        default: Option<String>,
    },
    /// Share directory of an installed package
    FindPackageShare(String),
}

impl Substitution {
    pub fn text(s: impl Into<String>) -> Self {
        Substitution::Text(s.into())
    }

    pub fn configuration(name: impl Into<String>) -> Self {
        Substitution::LaunchConfiguration(name.into())
    }

    /// Resolve substitution to a string value
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(s) => Ok(s.clone()),
            Substitution::LaunchConfiguration(name) => context
                .get_configuration(name)
                .ok_or_else(|| SubstitutionError::UndefinedConfiguration(name.clone())),
            Substitution::EnvironmentVariable { name, default } => {
                std::env::var(name).or_else(|_| {
                    default
                        .clone()
                        .ok_or_else(|| SubstitutionError::UndefinedEnvVar(name.clone()))
                })
            }
            Substitution::FindPackageShare(package) => get_package_share_directory(package)
                .map(|p| p.to_string_lossy().into_owned())
                .ok_or_else(|| SubstitutionError::PackageNotFound(package.clone())),
        }
    }
}

/// Resolve a list of substitutions to a single string
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_substitution() {
        let sub = Substitution::text("hello");
        let context = LaunchContext::new();
        assert_eq!(sub.resolve(&context).unwrap(), "hello");
    }

    #[test]
    fn test_launch_configuration() {
        let sub = Substitution::configuration("drone_id");
        let mut context = LaunchContext::new();
        context.set_configuration("drone_id".to_string(), "drone_3".to_string());
        assert_eq!(sub.resolve(&context).unwrap(), "drone_3");
    }

    #[test]
    fn test_undefined_configuration() {
        let sub = Substitution::configuration("undefined");
        let context = LaunchContext::new();
        assert!(sub.resolve(&context).is_err());
    }

    #[test]
    fn test_env_var_with_default() {
        let sub = Substitution::EnvironmentVariable {
            name: "NONEXISTENT_VAR".to_string(),
            default: Some("default_value".to_string()),
        };
        let context = LaunchContext::new();
        assert_eq!(sub.resolve(&context).unwrap(), "default_value");
    }

    #[test]
    fn test_undefined_env_var() {
        let sub = Substitution::EnvironmentVariable {
            name: "NONEXISTENT_VAR".to_string(),
            default: None,
        };
        let context = LaunchContext::new();
        assert!(sub.resolve(&context).is_err());
    }

    #[test]
    fn test_resolve_multiple() {
        let subs = vec![
            Substitution::text("ns_"),
            Substitution::configuration("drone_id"),
        ];
        let mut context = LaunchContext::new();
        context.set_configuration("drone_id".to_string(), "drone_0".to_string());
        assert_eq!(resolve_substitutions(&subs, &context).unwrap(), "ns_drone_0");
    }
}
