//! Member model and related types

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::ids::MemberId;

/// Membership standing. Only active members may borrow.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    #[default]
    Active,
    Inactive,
    Suspended,
}

impl MemberStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
        }
    }
}

impl std::fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for MemberStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "active" => Ok(MemberStatus::Active),
            "inactive" => Ok(MemberStatus::Inactive),
            "suspended" => Ok(MemberStatus::Suspended),
            _ => Err(format!("Invalid member status: {}", s)),
        }
    }
}

/// Registered library member
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Member {
    pub id: MemberId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub membership_date: NaiveDate,
    pub status: MemberStatus,
    /// Books currently out on loan, maintained by borrow and return
    pub borrowed_books: u32,
}

impl Member {
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    fn apply(&mut self, data: UpdateMember) {
        if let Some(name) = data.name {
            self.name = name;
        }
        if let Some(email) = data.email {
            self.email = email;
        }
        if let Some(phone) = data.phone {
            self.phone = phone;
        }
        if let Some(address) = data.address {
            self.address = address;
        }
        if let Some(status) = data.status {
            self.status = status;
        }
    }

    pub fn merged(&self, data: UpdateMember) -> Member {
        let mut updated = self.clone();
        updated.apply(data);
        updated
    }
}

/// Register member request
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct NewMember {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Invalid email format"))]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub status: MemberStatus,
}

impl NewMember {
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            ..Default::default()
        }
    }
}

/// Update member request. The borrowed-books counter is not editable.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateMember {
    #[validate(length(min = 1, message = "Name cannot be empty"))]
    pub name: Option<String>,
    #[validate(email(message = "Invalid email format"))]
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub status: Option<MemberStatus>,
}
