use serde::{Deserialize, Serialize};

use crate::domain::{PersonId, PersonRecord, Role};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewTarget {
    Dashboard,
    Users,
    PersonDetail,
    Help,
}

/// Asks the surrounding shell to switch views and make `payload` the active
/// subject of the target view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavigationRequest {
    pub target: ViewTarget,
    pub payload: PersonRecord,
}

/// Intent to change a person's role. Produced by the users screen, never
/// applied by it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoleChangeRequest {
    pub person_id: PersonId,
    pub previous: Option<Role>,
    pub requested: Role,
}
