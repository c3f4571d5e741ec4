use async_trait::async_trait;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;

/// Port for user domain service operations.
#[async_trait]
pub trait UserServicePort: Send + Sync + 'static {
    /// Register a new user with validated credentials.
    ///
    /// # Errors
    /// * `UsernameAlreadyExists` - Username is already taken
    /// * `EmailAlreadyExists` - Email is already registered
    /// * `Hashing` - Password hashing failed
    /// * `DatabaseError` - Storage operation failed
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError>;

    /// Retrieve a user by identifier.
    ///
    /// # Errors
    /// * `NotFound` - User does not exist
    /// * `DatabaseError` - Storage operation failed
    async fn get_user(&self, id: UserId) -> Result<User, UserError>;

    /// Retrieve a user by exact username match.
    ///
    /// # Errors
    /// * `NotFoundByUsername` - No user with this username
    /// * `DatabaseError` - Storage operation failed
    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError>;
}

/// Persistence port for the user directory.
///
/// Uniqueness of username and email is enforced by the storage layer itself;
/// `create` reports a constraint violation as the matching AlreadyExists
/// kind.
#[async_trait]
pub trait UserRepository: Send + Sync + 'static {
    /// Persist a new user and return it with its storage-assigned id.
    async fn create(&self, new_user: NewUser) -> Result<User, UserError>;

    /// Retrieve a user by identifier, `None` if absent.
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;

    /// Retrieve a user by exact username match, `None` if absent.
    async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;

    /// Retrieve a user by exact email match, `None` if absent.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
}
