use serde::{Deserialize, Serialize};

// ============================================================================
// Reference Value Objects
// ============================================================================

/// Selectable user (customer or courier)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceUser {
    pub id: String,
    #[serde(rename = "username")]
    pub display_name: String,
}

impl ReferenceUser {
    pub fn new(id: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            display_name: display_name.into(),
        }
    }
}

/// Both reference lists as returned by the directory
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSets {
    #[serde(rename = "users")]
    pub customers: Vec<ReferenceUser>,
    #[serde(rename = "repartidores")]
    pub couriers: Vec<ReferenceUser>,
}

impl ReferenceSets {
    pub fn has_customer(&self, id: &str) -> bool {
        self.customers.iter().any(|u| u.id == id)
    }

    pub fn has_courier(&self, id: &str) -> bool {
        self.couriers.iter().any(|u| u.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_directory_payload() {
        let payload = r#"{
            "users": [{"id": "u1", "username": "ana"}],
            "repartidores": [{"id": "r1", "username": "luis"}]
        }"#;

        let sets: ReferenceSets = serde_json::from_str(payload).unwrap();

        assert_eq!(sets.customers, vec![ReferenceUser::new("u1", "ana")]);
        assert_eq!(sets.couriers, vec![ReferenceUser::new("r1", "luis")]);
    }

    #[test]
    fn test_membership_is_per_set() {
        let sets = ReferenceSets {
            customers: vec![ReferenceUser::new("u1", "ana")],
            couriers: vec![ReferenceUser::new("r1", "luis")],
        };

        assert!(sets.has_customer("u1"));
        assert!(!sets.has_customer("r1"));
        assert!(sets.has_courier("r1"));
        assert!(!sets.has_courier("u1"));
    }
}
