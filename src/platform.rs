//! Launch description for the ignition platform node

use crate::actions::{Action, DeclareArgumentAction, NodeAction};
use crate::description::LaunchDescription;
use crate::substitution::Substitution;

pub const PACKAGE: &str = "ignition_platform";
pub const EXECUTABLE: &str = "ignition_platform_node";

pub const DEFAULT_DRONE_ID: &str = "drone_sim_rafa_0";
pub const DEFAULT_MASS: &str = "1.0";

/// Build the launch description for the ignition platform node.
///
/// Declares `drone_id`, `mass` and `control_modes_file`, then one node
/// directive namespaced by `drone_id` with screen output, a
/// `control_modes_file` parameter and the odometry remapping.
///
/// The builder is pure: the control-modes default is kept as a
/// find-package-share substitution, so share-directory lookup happens at
/// resolution time, not here.
pub fn platform_launch_description() -> LaunchDescription {
    let control_modes_default = vec![
        Substitution::FindPackageShare(PACKAGE.to_string()),
        Substitution::text("/config/control_modes.yaml"),
    ];

    [
        Action::DeclareArgument(
            DeclareArgumentAction::new("drone_id").default_value(DEFAULT_DRONE_ID),
        ),
        // Declared but not consumed by the node directive; kept so operators
        // can still override it.
        Action::DeclareArgument(DeclareArgumentAction::new("mass").default_value(DEFAULT_MASS)),
        Action::DeclareArgument(
            DeclareArgumentAction::new("control_modes_file")
                .default_substitutions(control_modes_default),
        ),
        Action::Node(
            NodeAction::new(PACKAGE, EXECUTABLE)
                .namespace(vec![Substitution::configuration("drone_id")])
                .output("screen")
                .emulate_tty(true)
                .parameter(
                    "control_modes_file",
                    vec![Substitution::configuration("control_modes_file")],
                )
                .remap("sensor_measurements/odometry", "self_localization/odom"),
        ),
    ]
    .into_iter()
    .collect()
}
