//! Resolved launch records and command generation

mod generator;
mod types;

pub use generator::{generate_node_command, generate_node_record};
pub use types::{LaunchRecord, NodeRecord};
