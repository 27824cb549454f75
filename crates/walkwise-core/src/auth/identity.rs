use serde::{Deserialize, Serialize};

/// Closed set of account roles.
///
/// Role gates exactly one view (the admin panel) and nothing else; it is a
/// rendering decision, not a security boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// Capability check for the admin panel. View code goes through this
    /// instead of comparing role values directly.
    pub fn can_view_admin(self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Role::User => write!(f, "User"),
            Role::Admin => write!(f, "Admin"),
        }
    }
}

/// The authenticated principal. At most one exists per session store, created
/// on successful sign-in/sign-up and dropped on sign-out.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Identity {
    pub fn is_admin(&self) -> bool {
        self.role.can_view_admin()
    }
}
