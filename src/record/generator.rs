//! Node record and command-line generation

use crate::actions::NodeAction;
use crate::context::{normalize_namespace, LaunchContext};
use crate::error::GenerationError;
use crate::params::load_param_file;
use crate::record::types::NodeRecord;
use crate::substitution::resolve_substitutions;
use std::path::Path;

/// Resolve a node action against the context into a record
pub fn generate_node_record(
    node: &NodeAction,
    context: &LaunchContext,
) -> Result<NodeRecord, GenerationError> {
    let name = node.name.clone().unwrap_or_else(|| node.executable.clone());

    let namespace = match &node.namespace {
        Some(ns_subs) => normalize_namespace(&resolve_substitutions(ns_subs, context)?),
        None => "/".to_string(),
    };

    let mut params: Vec<(String, String)> = node
        .parameters
        .iter()
        .map(|p| {
            let value = resolve_substitutions(&p.value, context)?;
            Ok((p.name.clone(), value))
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;

    // Parameter files are merged after inline parameters. A file the node
    // itself will read may be absent at description-resolution time, so a
    // failed load is only a warning.
    let mut params_files = Vec::new();
    for param_file_subs in &node.param_files {
        let param_file_path = resolve_substitutions(param_file_subs, context)?;
        params_files.push(param_file_path.clone());

        match load_param_file(Path::new(&param_file_path)) {
            Ok(file_params) => params.extend(file_params),
            Err(e) => {
                log::warn!("Failed to load parameter file {}: {}", param_file_path, e);
            }
        }
    }

    let remaps = node
        .remappings
        .iter()
        .map(|r| {
            let from = resolve_substitutions(&r.from, context)?;
            let to = resolve_substitutions(&r.to, context)?;
            Ok((from, to))
        })
        .collect::<Result<Vec<_>, GenerationError>>()?;

    let cmd = generate_node_command(node, context)?;

    Ok(NodeRecord {
        executable: node.executable.clone(),
        package: node.package.clone(),
        name,
        namespace,
        params,
        params_files,
        remaps,
        cmd,
        output: node.output.clone(),
        emulate_tty: node.emulate_tty,
    })
}

/// Build the command line the launch runtime would spawn for this node
pub fn generate_node_command(
    node: &NodeAction,
    context: &LaunchContext,
) -> Result<Vec<String>, GenerationError> {
    let mut cmd = Vec::new();

    cmd.push(resolve_executable_path(&node.package, &node.executable));
    cmd.push("--ros-args".to_string());

    let node_name = node.name.clone().unwrap_or_else(|| node.executable.clone());
    cmd.push("-r".to_string());
    cmd.push(format!("__node:={}", node_name));

    let namespace = match &node.namespace {
        Some(ns_subs) => normalize_namespace(&resolve_substitutions(ns_subs, context)?),
        None => "/".to_string(),
    };
    cmd.push("-r".to_string());
    cmd.push(format!("__ns:={}", namespace));

    for remap in &node.remappings {
        let from = resolve_substitutions(&remap.from, context)?;
        let to = resolve_substitutions(&remap.to, context)?;
        cmd.push("-r".to_string());
        cmd.push(format!("{}:={}", from, to));
    }

    for param in &node.parameters {
        let value = resolve_substitutions(&param.value, context)?;
        cmd.push("-p".to_string());
        cmd.push(format!("{}:={}", param.name, value));
    }

    for param_file_subs in &node.param_files {
        let path = resolve_substitutions(param_file_subs, context)?;
        cmd.push("--params-file".to_string());
        cmd.push(path);
    }

    Ok(cmd)
}

fn resolve_executable_path(package: &str, executable: &str) -> String {
    let distro = std::env::var("ROS_DISTRO").unwrap_or_else(|_| "humble".to_string());
    format!("/opt/ros/{}/lib/{}/{}", distro, package, executable)
}
