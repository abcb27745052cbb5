use std::str::FromStr;

/// Role assigned to an account; the server stores it as the upper-case name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserRole {
    Admin,
    TeamLeader,
    Member,
}

impl UserRole {
    pub fn all() -> [UserRole; 3] {
        [UserRole::Admin, UserRole::TeamLeader, UserRole::Member]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "ADMIN",
            UserRole::TeamLeader => "TEAM_LEADER",
            UserRole::Member => "MEMBER",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl FromStr for UserRole {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_uppercase();
        Self::all()
            .into_iter()
            .find(|role| role.as_str() == normalized)
            .ok_or_else(|| UnknownRole(s.to_string()))
    }
}
