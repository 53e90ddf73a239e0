//! Schema migration framework.

use crate::ProjectError;
use crate::schema::NetworkFile;

pub const LATEST_VERSION: u32 = 1;

pub fn migrate_to_latest(mut file: NetworkFile) -> Result<NetworkFile, ProjectError> {
    while file.version < LATEST_VERSION {
        file = migrate_one_version(file)?;
    }
    Ok(file)
}

fn migrate_one_version(file: NetworkFile) -> Result<NetworkFile, ProjectError> {
    match file.version {
        0 => migrate_v0_to_v1(file),
        v => Err(ProjectError::Migration {
            what: format!("No migration path from version {}", v),
        }),
    }
}

/// Version 0 files had no node names; the common id doubled as the label.
fn migrate_v0_to_v1(mut file: NetworkFile) -> Result<NetworkFile, ProjectError> {
    for node in &mut file.nodes {
        if node.name.trim().is_empty() {
            node.name = node.id.clone();
        }
    }
    file.version = 1;
    Ok(file)
}
