//! Node action representing one platform process to spawn

use crate::substitution::Substitution;

/// Node action describing an executable from a package, its namespace,
/// parameters and remappings
#[derive(Debug, Clone)]
pub struct NodeAction {
    pub package: String,
    pub executable: String,
    pub name: Option<String>,
    pub namespace: Option<Vec<Substitution>>,
    pub output: Option<String>,
    pub emulate_tty: bool,
    pub parameters: Vec<Parameter>,
    pub param_files: Vec<Vec<Substitution>>,
    pub remappings: Vec<Remapping>,
}

impl NodeAction {
    pub fn new(package: impl Into<String>, executable: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            executable: executable.into(),
            name: None,
            namespace: None,
            output: None,
            emulate_tty: false,
            parameters: Vec::new(),
            param_files: Vec::new(),
            remappings: Vec::new(),
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn namespace(mut self, namespace: Vec<Substitution>) -> Self {
        self.namespace = Some(namespace);
        self
    }

    /// Request unbuffered, screen-directed output from the spawned process
    pub fn output(mut self, output: impl Into<String>) -> Self {
        self.output = Some(output.into());
        self
    }

    pub fn emulate_tty(mut self, emulate_tty: bool) -> Self {
        self.emulate_tty = emulate_tty;
        self
    }

    pub fn parameter(mut self, name: impl Into<String>, value: Vec<Substitution>) -> Self {
        self.parameters.push(Parameter {
            name: name.into(),
            value,
        });
        self
    }

    pub fn param_file(mut self, path: Vec<Substitution>) -> Self {
        self.param_files.push(path);
        self
    }

    pub fn remap(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.remappings.push(Remapping {
            from: vec![Substitution::Text(from.into())],
            to: vec![Substitution::Text(to.into())],
        });
        self
    }

    pub fn remap_substitutions(mut self, from: Vec<Substitution>, to: Vec<Substitution>) -> Self {
        self.remappings.push(Remapping { from, to });
        self
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    pub name: String,
    pub value: Vec<Substitution>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Remapping {
    pub from: Vec<Substitution>,
    pub to: Vec<Substitution>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_node() {
        let node = NodeAction::new("demo_nodes_cpp", "talker");
        assert_eq!(node.package, "demo_nodes_cpp");
        assert_eq!(node.executable, "talker");
        assert!(node.name.is_none());
        assert!(node.namespace.is_none());
        assert!(!node.emulate_tty);
        assert!(node.parameters.is_empty());
        assert!(node.remappings.is_empty());
    }

    #[test]
    fn test_node_with_parameter() {
        let node = NodeAction::new("demo", "node")
            .parameter("rate", vec![Substitution::text("10.0")]);

        assert_eq!(node.parameters.len(), 1);
        assert_eq!(node.parameters[0].name, "rate");
        assert_eq!(
            node.parameters[0].value,
            vec![Substitution::Text("10.0".to_string())]
        );
    }

    #[test]
    fn test_node_with_remap() {
        let node = NodeAction::new("demo", "node").remap("chatter", "/chat");

        assert_eq!(node.remappings.len(), 1);
        assert_eq!(
            node.remappings[0].from,
            vec![Substitution::Text("chatter".to_string())]
        );
        assert_eq!(
            node.remappings[0].to,
            vec![Substitution::Text("/chat".to_string())]
        );
    }

    #[test]
    fn test_node_with_namespace_substitution() {
        let node = NodeAction::new("demo", "node")
            .namespace(vec![Substitution::configuration("drone_id")]);

        assert!(matches!(
            node.namespace.as_deref(),
            Some([Substitution::LaunchConfiguration(_)])
        ));
    }

    #[test]
    fn test_node_output_and_tty() {
        let node = NodeAction::new("demo", "node").output("screen").emulate_tty(true);
        assert_eq!(node.output.as_deref(), Some("screen"));
        assert!(node.emulate_tty);
    }
}
