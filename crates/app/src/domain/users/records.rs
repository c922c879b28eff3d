//! User Records

use jiff::Timestamp;
use serde::Serialize;

use crate::uuids::TypedUuid;

/// User UUID
pub type UserUuid = TypedUuid<UserRecord>;

/// User Record
#[derive(Debug, Clone, Serialize)]
pub struct UserRecord {
    pub uuid: UserUuid,
    pub username: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
