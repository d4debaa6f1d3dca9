use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactRequest {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DataRequestKind {
    Export,
    Deletion,
}

/// A GDPR data request (export or deletion) submitted from the privacy page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataRequest {
    pub email: String,
    pub kind: DataRequestKind,
}
