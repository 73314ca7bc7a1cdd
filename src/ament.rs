//! Package share-directory lookup through the ament index

use std::path::PathBuf;

const FALLBACK_DISTROS: &[&str] = &["jazzy", "iron", "humble", "galactic", "foxy"];

/// Find the share directory of an installed package.
///
/// Tries `ROS_DISTRO` first, then a list of known distributions, then each
/// entry of `AMENT_PREFIX_PATH`.
pub fn get_package_share_directory(package: &str) -> Option<PathBuf> {
    if let Ok(distro) = std::env::var("ROS_DISTRO") {
        let share_path = PathBuf::from(format!("/opt/ros/{}/share/{}", distro, package));
        if share_path.exists() {
            return Some(share_path);
        }
    }

    for distro in FALLBACK_DISTROS {
        let share_path = PathBuf::from(format!("/opt/ros/{}/share/{}", distro, package));
        if share_path.exists() {
            return Some(share_path);
        }
    }

    if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
        return share_directory_in_prefixes(prefix_path.split(':'), package);
    }

    None
}

/// Look up a package share directory under an explicit list of install
/// prefixes, without consulting the environment.
pub fn share_directory_in_prefixes<'a>(
    prefixes: impl IntoIterator<Item = &'a str>,
    package: &str,
) -> Option<PathBuf> {
    for prefix in prefixes {
        let share_path = PathBuf::from(prefix).join("share").join(package);
        if share_path.exists() {
            return Some(share_path);
        }
    }
    None
}
