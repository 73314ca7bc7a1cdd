//! Declare argument action for argument defaults and metadata

use crate::context::LaunchContext;
use crate::error::SubstitutionError;
use crate::substitution::{resolve_substitutions, Substitution};

/// Declare argument action with an optional default and description
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareArgumentAction {
    pub name: String,
    pub default: Option<Vec<Substitution>>,
    pub description: Option<String>,
}

impl DeclareArgumentAction {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: None,
            description: None,
        }
    }

    /// Set a plain-text default value
    pub fn default_value(mut self, value: impl Into<String>) -> Self {
        self.default = Some(vec![Substitution::Text(value.into())]);
        self
    }

    /// Set a default built from substitutions
    pub fn default_substitutions(mut self, subs: Vec<Substitution>) -> Self {
        self.default = Some(subs);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Install the argument's default into the context. Configurations pinned
    /// by an external override keep their value.
    pub fn apply(&self, context: &mut LaunchContext) -> Result<(), SubstitutionError> {
        if context.is_overridden(&self.name) {
            log::debug!("Argument '{}' overridden externally, keeping value", self.name);
            return Ok(());
        }

        if let Some(default) = &self.default {
            let value = resolve_substitutions(default, context)?;
            context.set_configuration(self.name.clone(), value);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_default() {
        let action = DeclareArgumentAction::new("drone_id").default_value("drone_sim_rafa_0");
        let mut context = LaunchContext::new();
        action.apply(&mut context).unwrap();
        assert_eq!(
            context.get_configuration("drone_id"),
            Some("drone_sim_rafa_0".to_string())
        );
    }

    #[test]
    fn test_apply_respects_override() {
        let action = DeclareArgumentAction::new("drone_id").default_value("drone_sim_rafa_0");
        let mut context = LaunchContext::new();
        context.set_override("drone_id".to_string(), "drone_real_1".to_string());

        action.apply(&mut context).unwrap();
        assert_eq!(
            context.get_configuration("drone_id"),
            Some("drone_real_1".to_string())
        );
    }

    #[test]
    fn test_apply_without_default() {
        let action = DeclareArgumentAction::new("drone_id");
        let mut context = LaunchContext::new();
        action.apply(&mut context).unwrap();
        assert!(context.get_configuration("drone_id").is_none());
    }

    #[test]
    fn test_default_from_substitutions() {
        let action = DeclareArgumentAction::new("config_file").default_substitutions(vec![
            Substitution::configuration("base_dir"),
            Substitution::text("/config.yaml"),
        ]);
        let mut context = LaunchContext::new();
        context.set_configuration("base_dir".to_string(), "/tmp/share".to_string());

        action.apply(&mut context).unwrap();
        assert_eq!(
            context.get_configuration("config_file"),
            Some("/tmp/share/config.yaml".to_string())
        );
    }

    #[test]
    fn test_description_metadata() {
        let action = DeclareArgumentAction::new("mass").description("Platform mass in kg");
        assert_eq!(action.description, Some("Platform mass in kg".to_string()));
    }
}
