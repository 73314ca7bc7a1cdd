//! Launch actions

mod declare_argument;
mod node;

pub use declare_argument::DeclareArgumentAction;
pub use node::{NodeAction, Parameter, Remapping};

/// A single entry of a launch description
#[derive(Debug, Clone)]
pub enum Action {
    DeclareArgument(DeclareArgumentAction),
    Node(NodeAction),
}
