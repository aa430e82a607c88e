//! Identifier newtypes
//!
//! All ids are opaque strings assigned by the collaborator layer. `generate()`
//! exists for callers (and tests) that need a fresh one.

use serde::{Deserialize, Serialize};

macro_rules! string_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub struct $name(pub String);

        impl $name {
            pub fn new(id: impl Into<String>) -> Self {
                Self(id.into())
            }

            pub fn generate() -> Self {
                Self(uuid::Uuid::new_v4().to_string())
            }

            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

string_id!(
    /// Identifies an admin-initiated proposal
    ProposalId
);

string_id!(
    /// Identifies a member-initiated recommendation
    RecommendationId
);

string_id!(
    /// Identifies a candidate in an election race
    CandidateId
);

string_id!(
    /// Names the community setting a proposal or recommendation targets
    SettingKey
);
