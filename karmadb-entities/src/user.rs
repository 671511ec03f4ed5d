use num_derive::{FromPrimitive, ToPrimitive};
use strum::{AsRefStr, Display, EnumString};

use crate::{id::Id, password::Password};

/// An account that may sign in.
///
/// Staff and admins share the same record and are told apart by
/// their [`Role`].
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id       : Id,
    pub username : String,
    pub password : Password,
    pub role     : Role,
}

impl User {
    pub fn is_staff(&self) -> bool {
        self.role == Role::Staff
    }

    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

#[rustfmt::skip]
#[derive(
    Debug, Default, Clone, Copy, PartialEq, Eq, Hash,
    FromPrimitive, ToPrimitive,
    EnumString, Display, AsRefStr,
)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Role {
    #[default]
    Staff = 1,
    Admin = 2,
}
