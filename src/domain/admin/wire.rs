//! Wire types for admin requests.

use serde::{Deserialize, Serialize};

use crate::shared::ResourceId;

/// Body of every admin request: `{"id": "<resource id>"}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceIdRequest {
    pub id: ResourceId,
}
