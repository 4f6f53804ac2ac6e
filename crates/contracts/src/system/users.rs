use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub username: String,
    pub full_name: Option<String>,
    pub is_active: bool,
    #[serde(default)]
    pub is_admin: bool,
    pub created_at: String,
}

impl User {
    pub fn role(&self) -> UserRole {
        if self.is_admin {
            UserRole::Admin
        } else {
            UserRole::User
        }
    }

    pub fn status(&self) -> UserStatus {
        if self.is_active {
            UserStatus::Active
        } else {
            UserStatus::Inactive
        }
    }
}

/// Role filter of the admin users list (`role` query parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    User,
}

impl UserRole {
    pub fn code(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::User => "user",
        }
    }

    pub fn all() -> [UserRole; 2] {
        [UserRole::Admin, UserRole::User]
    }
}

/// Status filter of the admin users list (`status` query parameter)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserStatus {
    Active,
    Inactive,
}

impl UserStatus {
    pub fn code(&self) -> &'static str {
        match self {
            UserStatus::Active => "active",
            UserStatus::Inactive => "inactive",
        }
    }

    pub fn all() -> [UserStatus; 2] {
        [UserStatus::Active, UserStatus::Inactive]
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserStatusUpdateDto {
    pub status: UserStatus,
}
