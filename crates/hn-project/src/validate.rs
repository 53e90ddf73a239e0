//! Network file validation logic.

use std::collections::HashSet;

use crate::schema::NetworkFile;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Missing reference: {id} in {context}")]
    MissingReference { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_file(file: &NetworkFile) -> Result<(), ValidationError> {
    if file.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut node_ids = HashSet::new();
    for node in &file.nodes {
        if node.id.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "node.id".to_string(),
                value: format!("{:?}", node.id),
                reason: "must not be empty".to_string(),
            });
        }
        if !node_ids.insert(node.id.as_str()) {
            return Err(ValidationError::DuplicateId {
                id: node.id.clone(),
                context: "nodes".to_string(),
            });
        }
        for (axis, value) in [("x", node.x), ("y", node.y)] {
            if !value.is_finite() {
                return Err(ValidationError::InvalidValue {
                    field: format!("{}.{}", node.id, axis),
                    value: value.to_string(),
                    reason: "must be finite".to_string(),
                });
            }
        }
    }

    for node in &file.nodes {
        let Some(down) = &node.downstream else {
            continue;
        };
        if down == &node.id {
            return Err(ValidationError::InvalidValue {
                field: format!("{}.downstream", node.id),
                value: down.clone(),
                reason: "node cannot flow into itself".to_string(),
            });
        }
        if !node_ids.contains(down.as_str()) {
            return Err(ValidationError::MissingReference {
                id: down.clone(),
                context: format!("downstream of {}", node.id),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{NodeDef, NodeKindDef};

    fn node(id: &str, downstream: Option<&str>) -> NodeDef {
        NodeDef {
            id: id.to_string(),
            name: id.to_string(),
            kind: NodeKindDef::Other,
            x: 0.0,
            y: 0.0,
            downstream: downstream.map(str::to_string),
        }
    }

    fn file(nodes: Vec<NodeDef>) -> NetworkFile {
        NetworkFile {
            version: 1,
            name: "t".to_string(),
            nodes,
        }
    }

    #[test]
    fn valid_chain_passes() {
        let f = file(vec![node("A", Some("B")), node("B", None)]);
        assert!(validate_file(&f).is_ok());
    }

    #[test]
    fn duplicate_id_rejected() {
        let f = file(vec![node("A", None), node("A", None)]);
        assert_eq!(
            validate_file(&f).unwrap_err(),
            ValidationError::DuplicateId {
                id: "A".into(),
                context: "nodes".into()
            }
        );
    }

    #[test]
    fn missing_downstream_rejected() {
        let f = file(vec![node("A", Some("Z"))]);
        assert!(matches!(
            validate_file(&f).unwrap_err(),
            ValidationError::MissingReference { .. }
        ));
    }

    #[test]
    fn self_link_rejected() {
        let f = file(vec![node("A", Some("A"))]);
        assert!(matches!(
            validate_file(&f).unwrap_err(),
            ValidationError::InvalidValue { .. }
        ));
    }

    #[test]
    fn non_finite_coordinate_rejected() {
        let mut n = node("A", None);
        n.y = f64::NAN;
        let err = validate_file(&file(vec![n])).unwrap_err();
        assert!(err.to_string().contains("A.y"));
    }

    #[test]
    fn future_version_rejected() {
        let mut f = file(vec![]);
        f.version = 99;
        assert_eq!(
            validate_file(&f).unwrap_err(),
            ValidationError::UnsupportedVersion { version: 99 }
        );
    }
}
