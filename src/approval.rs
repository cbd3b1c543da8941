//! Shared approval lifecycle for teacher accounts, courses, and reviews.
//!
//! All three moderated entities move through the same three states:
//!
//! ```text
//! pending ──approve──▶ approved
//!    └─────reject────▶ rejected
//! ```
//!
//! `approved` and `rejected` are terminal. Approving or rejecting an entity
//! that is no longer pending is a client error, not a no-op: the admin UI
//! treats a stale decision as something the operator should see.

use std::fmt;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::modules::users::model::UserRole;

/// Moderation state shared by teacher accounts, courses, and reviews.
///
/// Stored in PostgreSQL as the `approval_status` enum type.
#[derive(
    Serialize, Deserialize, sqlx::Type, Debug, Clone, Copy, PartialEq, Eq, ToSchema,
)]
#[sqlx(type_name = "approval_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum ApprovalStatus {
    Pending,
    Approved,
    Rejected,
}

impl ApprovalStatus {
    /// Status a freshly registered account starts in.
    ///
    /// Only teachers go through moderation; students and admins are usable
    /// immediately, so a non-teacher can never be observed as pending.
    pub fn default_for(role: UserRole) -> Self {
        match role {
            UserRole::Teacher => ApprovalStatus::Pending,
            UserRole::Admin | UserRole::Student => ApprovalStatus::Approved,
        }
    }

    pub fn is_pending(self) -> bool {
        self == ApprovalStatus::Pending
    }

    /// Transition to `approved`. Valid only from `pending`.
    pub fn approve(self) -> Result<Self, InvalidTransition> {
        self.transition(ApprovalStatus::Approved)
    }

    /// Transition to `rejected`. Valid only from `pending`.
    pub fn reject(self) -> Result<Self, InvalidTransition> {
        self.transition(ApprovalStatus::Rejected)
    }

    /// Shared transition rule: the only legal moves are
    /// `pending -> approved` and `pending -> rejected`.
    pub fn transition(self, to: ApprovalStatus) -> Result<Self, InvalidTransition> {
        match (self, to) {
            (ApprovalStatus::Pending, ApprovalStatus::Approved)
            | (ApprovalStatus::Pending, ApprovalStatus::Rejected) => Ok(to),
            (from, attempted) => Err(InvalidTransition { from, attempted }),
        }
    }
}

impl fmt::Display for ApprovalStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ApprovalStatus::Pending => "pending",
            ApprovalStatus::Approved => "approved",
            ApprovalStatus::Rejected => "rejected",
        };
        f.write_str(s)
    }
}

/// Rejected state-machine move, e.g. approving an already-rejected course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTransition {
    pub from: ApprovalStatus,
    pub attempted: ApprovalStatus,
}

impl fmt::Display for InvalidTransition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot move from '{}' to '{}': only pending entities can be decided",
            self.from, self.attempted
        )
    }
}

impl std::error::Error for InvalidTransition {}
