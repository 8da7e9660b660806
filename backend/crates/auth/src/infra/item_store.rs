//! Item store backed user repository

use serde::{Deserialize, Serialize};
use storage::{Collection, ItemStore, Record, Table};

use crate::domain::entity::user::User;
use crate::domain::repository::UserRepository;
use crate::domain::value_object::{
    display_name::DisplayName, email::Email, user_password::UserPassword, user_role::UserRole,
};
use crate::error::{AuthError, AuthResult};

/// Stored shape of a user
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub user_id: String,
    pub email: String,
    pub display_name: String,
    pub hashed_password: String,
    pub role: UserRole,
    pub created_at: String,
}

impl Record for UserRecord {
    const TABLE: Table = Table::Users;
}

impl From<&User> for UserRecord {
    fn from(user: &User) -> Self {
        Self {
            user_id: user.user_id.to_string(),
            email: user.email.as_str().to_string(),
            display_name: user.display_name.as_str().to_string(),
            hashed_password: user.password.as_phc_string().to_string(),
            role: user.role,
            created_at: user.created_at.clone(),
        }
    }
}

impl TryFrom<UserRecord> for User {
    type Error = AuthError;

    fn try_from(record: UserRecord) -> AuthResult<Self> {
        let user_id = record
            .user_id
            .parse()
            .map_err(|e| AuthError::Internal(format!("stored user_id is invalid: {e}")))?;

        Ok(User {
            user_id,
            email: Email::from_stored(record.email),
            display_name: DisplayName::from_stored(record.display_name),
            password: UserPassword::from_phc_string(record.hashed_password)?,
            role: record.role,
            created_at: record.created_at,
        })
    }
}

/// User repository over any [`ItemStore`]
#[derive(Clone)]
pub struct StoreUserRepository<S> {
    users: Collection<S, UserRecord>,
}

impl<S> StoreUserRepository<S>
where
    S: ItemStore + Sync,
{
    pub fn new(store: S) -> Self {
        Self {
            users: Collection::new(store),
        }
    }
}

impl<S> UserRepository for StoreUserRepository<S>
where
    S: ItemStore + Sync,
{
    async fn create(&self, user: &User) -> AuthResult<()> {
        self.users.put(&UserRecord::from(user)).await?;
        Ok(())
    }

    async fn find_by_email(&self, email: &Email) -> AuthResult<Option<User>> {
        let matches = self.users.scan_eq("email", email.as_str()).await?;

        if matches.len() > 1 {
            tracing::warn!(email = %email, count = matches.len(), "Duplicate user emails in storage");
        }

        match matches.into_iter().next() {
            Some(record) => Ok(Some(User::try_from(record)?)),
            None => Ok(None),
        }
    }

    async fn exists_by_email(&self, email: &Email) -> AuthResult<bool> {
        Ok(!self.users.scan_eq("email", email.as_str()).await?.is_empty())
    }
}
