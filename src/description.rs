//! Ordered launch descriptions and their resolution

use crate::actions::{Action, DeclareArgumentAction, NodeAction};
use crate::context::LaunchContext;
use crate::error::Result;
use crate::record::{generate_node_record, LaunchRecord};
use std::collections::HashMap;

/// Ordered list of launch actions.
///
/// Order matters: a node directive may reference only configurations declared
/// by an earlier argument declaration.
#[derive(Debug, Clone, Default)]
pub struct LaunchDescription {
    actions: Vec<Action>,
}

impl LaunchDescription {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: Action) {
        self.actions.push(action);
    }

    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Argument declarations, in declaration order
    pub fn arguments(&self) -> impl Iterator<Item = &DeclareArgumentAction> {
        self.actions.iter().filter_map(|a| match a {
            Action::DeclareArgument(arg) => Some(arg),
            _ => None,
        })
    }

    /// Node directives, in declaration order
    pub fn nodes(&self) -> impl Iterator<Item = &NodeAction> {
        self.actions.iter().filter_map(|a| match a {
            Action::Node(node) => Some(node),
            _ => None,
        })
    }

    /// Resolve the description into a launch record.
    ///
    /// Walks actions in order: argument declarations install their defaults
    /// into the context (external overrides win), node directives are
    /// resolved against the configurations accumulated so far.
    pub fn resolve(&self, overrides: HashMap<String, String>) -> Result<LaunchRecord> {
        let mut context = LaunchContext::with_overrides(overrides);
        let mut record = LaunchRecord::new();

        for action in &self.actions {
            match action {
                Action::DeclareArgument(arg) => {
                    arg.apply(&mut context)?;
                    let value = context.get_configuration(&arg.name).unwrap_or_default();
                    record.arguments.push((arg.name.clone(), value));
                }
                Action::Node(node) => {
                    log::debug!("Resolving node {}/{}", node.package, node.executable);
                    record.node.push(generate_node_record(node, &context)?);
                }
            }
        }

        Ok(record)
    }
}

impl FromIterator<Action> for LaunchDescription {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        Self {
            actions: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::substitution::Substitution;

    fn demo_description() -> LaunchDescription {
        [
            Action::DeclareArgument(
                DeclareArgumentAction::new("robot_name").default_value("robot1"),
            ),
            Action::Node(
                NodeAction::new("demo_nodes_cpp", "talker")
                    .namespace(vec![Substitution::configuration("robot_name")]),
            ),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_resolve_with_defaults() {
        let record = demo_description().resolve(HashMap::new()).unwrap();
        assert_eq!(record.node.len(), 1);
        assert_eq!(record.node[0].namespace, "/robot1");
        assert_eq!(
            record.arguments,
            vec![("robot_name".to_string(), "robot1".to_string())]
        );
    }

    #[test]
    fn test_resolve_with_override() {
        let mut overrides = HashMap::new();
        overrides.insert("robot_name".to_string(), "robot2".to_string());

        let record = demo_description().resolve(overrides).unwrap();
        assert_eq!(record.node[0].namespace, "/robot2");
        assert_eq!(
            record.arguments,
            vec![("robot_name".to_string(), "robot2".to_string())]
        );
    }

    #[test]
    fn test_node_before_argument_fails() {
        let description: LaunchDescription = [
            Action::Node(
                NodeAction::new("demo_nodes_cpp", "talker")
                    .namespace(vec![Substitution::configuration("robot_name")]),
            ),
            Action::DeclareArgument(
                DeclareArgumentAction::new("robot_name").default_value("robot1"),
            ),
        ]
        .into_iter()
        .collect();

        assert!(description.resolve(HashMap::new()).is_err());
    }

    #[test]
    fn test_filtered_views() {
        let description = demo_description();
        assert_eq!(description.arguments().count(), 1);
        assert_eq!(description.nodes().count(), 1);
    }
}
