//! Project entity and membership types.

use super::{ParseMemberRoleError, ProjectId, UserId};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role a member holds within a project.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    /// Project creator with administrative rights.
    Owner,
    /// Regular collaborator.
    Member,
}

impl MemberRole {
    /// Returns the canonical wire representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Member => "member",
        }
    }
}

impl TryFrom<&str> for MemberRole {
    type Error = ParseMemberRoleError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let normalized = value.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "owner" => Ok(Self::Owner),
            "member" => Ok(Self::Member),
            _ => Err(ParseMemberRoleError(value.to_owned())),
        }
    }
}

/// One member of a project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMember {
    /// Member's user identifier.
    pub id: UserId,
    /// Member's display name.
    pub name: String,
    /// Member's email address.
    pub email: String,
    /// Role within the project.
    pub role: MemberRole,
}

/// Project whose board is being rendered.
///
/// The member list is the sole source of valid assignee values; the
/// rendering layer builds its assignee pickers from it, and the server
/// enforces validity on update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    /// Stable project identifier.
    pub id: ProjectId,
    /// Project name.
    pub name: String,
    /// Free-form project description.
    pub description: Option<String>,
    /// User who owns the project.
    pub owner_id: UserId,
    /// Members in server-provided order.
    pub members: Vec<ProjectMember>,
    /// Server-side creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Server-side timestamp of the latest change.
    pub updated_at: DateTime<Utc>,
}

impl Project {
    /// Looks up a member by user identifier.
    #[must_use]
    pub fn member(&self, user_id: UserId) -> Option<&ProjectMember> {
        self.members.iter().find(|member| member.id == user_id)
    }

    /// Returns `true` when the user belongs to the project.
    #[must_use]
    pub fn is_member(&self, user_id: UserId) -> bool {
        self.member(user_id).is_some()
    }
}
