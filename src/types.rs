//! Common types used throughout folder-pager
//!
//! Identifiers are UUID newtypes so a folder id can never be passed where an
//! organization id is expected. Both serialize as plain hyphenated strings.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

// ============================================================================
// Identifiers
// ============================================================================

/// Globally unique folder identifier, also used as the pagination cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FolderId(Uuid);

/// Owning organization identifier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrgId(Uuid);

macro_rules! uuid_newtype {
    ($name:ident) => {
        impl $name {
            /// Wrap an existing UUID
            pub const fn from_uuid(id: Uuid) -> Self {
                Self(id)
            }

            /// Generate a fresh random id
            pub fn new_v4() -> Self {
                Self(Uuid::new_v4())
            }

            /// The underlying UUID
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// Check for the all-zero UUID
            pub fn is_nil(&self) -> bool {
                self.0.is_nil()
            }
        }

        impl From<Uuid> for $name {
            fn from(id: Uuid) -> Self {
                Self(id)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0.hyphenated())
            }
        }

        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

uuid_newtype!(FolderId);
uuid_newtype!(OrgId);

// ============================================================================
// Folder
// ============================================================================

/// A folder record owned by the external data source
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Folder {
    /// Folder identity
    pub id: FolderId,
    /// Display name
    pub name: String,
    /// Owning organization
    pub org_id: OrgId,
}

impl Folder {
    /// Create a folder record
    pub fn new(id: FolderId, name: impl Into<String>, org_id: OrgId) -> Self {
        Self {
            id,
            name: name.into(),
            org_id,
        }
    }
}
