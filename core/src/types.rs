//! Domain DTOs for the employee directory API.
//!
//! # Design
//! These types mirror the server's schema but are defined independently.
//! Employee ids are plain integers assigned by the server (a random unique
//! 4-digit value), never minted or rewritten by the client. Integration
//! tests catch any schema drift between this crate and the mock server.

use serde::{Deserialize, Serialize};

/// A single employee record returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Employee {
    pub employee_id: u32,
    pub first_name: String,
    pub last_name: String,
}

/// Request payload for creating a new employee. Carries no id — identity is
/// assigned by the server and returned in [`CreateReply`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewEmployee {
    pub first_name: String,
    pub last_name: String,
}

/// Request payload for updating an existing employee.
///
/// The id in the request path is authoritative; the body repeats it because
/// the directory service's wire contract includes it. Both names are
/// mandatory — updates replace the whole record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EmployeeUpdate {
    pub employee_id: u32,
    pub first_name: String,
    pub last_name: String,
}

/// Server reply to a creation request: a confirmation plus the assigned id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CreateReply {
    pub message: String,
    pub employee_id: u32,
}

/// Server reply to an update or deletion request. The deletion message is
/// surfaced to the user verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MessageReply {
    pub message: String,
}
