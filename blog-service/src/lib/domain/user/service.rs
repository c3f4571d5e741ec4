use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;

use crate::domain::user::errors::UserError;
use crate::domain::user::models::NewUser;
use crate::domain::user::models::RegisterUserCommand;
use crate::domain::user::models::User;
use crate::domain::user::models::UserId;
use crate::domain::user::models::Username;
use crate::domain::user::ports::UserRepository;
use crate::domain::user::ports::UserServicePort;

/// Domain service implementation for user operations.
pub struct UserService<UR>
where
    UR: UserRepository,
{
    repository: Arc<UR>,
    password_hasher: auth::PasswordHasher,
}

impl<UR> UserService<UR>
where
    UR: UserRepository,
{
    pub fn new(repository: Arc<UR>) -> Self {
        Self {
            repository,
            password_hasher: auth::PasswordHasher::new(),
        }
    }
}

#[async_trait]
impl<UR> UserServicePort for UserService<UR>
where
    UR: UserRepository,
{
    async fn register(&self, command: RegisterUserCommand) -> Result<User, UserError> {
        if self
            .repository
            .find_by_username(&command.username)
            .await?
            .is_some()
        {
            return Err(UserError::UsernameAlreadyExists(
                command.username.to_string(),
            ));
        }

        if self
            .repository
            .find_by_email(command.email.as_str())
            .await?
            .is_some()
        {
            return Err(UserError::EmailAlreadyExists(
                command.email.as_str().to_string(),
            ));
        }

        let password_hash = self
            .password_hasher
            .hash(&command.password)
            .map_err(|e| UserError::Hashing(e.to_string()))?;

        // The existence checks above and this create are not one
        // transaction. Two concurrent registrations for the same identity
        // can both pass the checks; the unique constraints in storage reject
        // the second create and the repository reports it as the same
        // AlreadyExists kind.
        let now = Utc::now();
        self.repository
            .create(NewUser {
                username: command.username,
                email: command.email,
                password_hash,
                created_at: now,
                updated_at: now,
            })
            .await
    }

    async fn get_user(&self, id: UserId) -> Result<User, UserError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(UserError::NotFound(id.to_string()))
    }

    async fn get_user_by_username(&self, username: &Username) -> Result<User, UserError> {
        self.repository
            .find_by_username(username)
            .await?
            .ok_or(UserError::NotFoundByUsername(username.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use mockall::mock;

    use super::*;
    use crate::domain::user::models::EmailAddress;

    mock! {
        pub TestUserRepository {}

        #[async_trait]
        impl UserRepository for TestUserRepository {
            async fn create(&self, new_user: NewUser) -> Result<User, UserError>;
            async fn find_by_id(&self, id: UserId) -> Result<Option<User>, UserError>;
            async fn find_by_username(&self, username: &Username) -> Result<Option<User>, UserError>;
            async fn find_by_email(&self, email: &str) -> Result<Option<User>, UserError>;
        }
    }

    fn sample_user(id: i64, username: &str, email: &str) -> User {
        let now = Utc::now();
        User {
            id: UserId(id),
            username: Username::new(username.to_string()).unwrap(),
            email: EmailAddress::new(email.to_string()).unwrap(),
            password_hash: "$argon2id$test_hash".to_string(),
            created_at: now,
            updated_at: now,
        }
    }

    fn register_command(username: &str, email: &str, password: &str) -> RegisterUserCommand {
        RegisterUserCommand::new(
            Username::new(username.to_string()).unwrap(),
            EmailAddress::new(email.to_string()).unwrap(),
            password.to_string(),
        )
    }

    #[tokio::test]
    async fn register_hashes_password_and_persists() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_create()
            .withf(|new_user| {
                new_user.username.as_str() == "alice"
                    && new_user.email.as_str() == "a@x.com"
                    && new_user.password_hash.starts_with("$argon2")
                    && new_user.password_hash != "secret1"
            })
            .times(1)
            .returning(|new_user| {
                Ok(User {
                    id: UserId(1),
                    username: new_user.username,
                    email: new_user.email,
                    password_hash: new_user.password_hash,
                    created_at: new_user.created_at,
                    updated_at: new_user.updated_at,
                })
            });

        let service = UserService::new(Arc::new(repository));

        let user = service
            .register(register_command("alice", "a@x.com", "secret1"))
            .await
            .expect("registration should succeed");

        assert_eq!(user.id, UserId(1));
        assert_eq!(user.username.as_str(), "alice");

        // The stored hash verifies against the original password.
        let hasher = auth::PasswordHasher::new();
        assert!(hasher.verify("secret1", &user.password_hash).unwrap());
        assert!(!hasher.verify("wrong", &user.password_hash).unwrap());
    }

    #[tokio::test]
    async fn register_rejects_taken_username() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(Some(sample_user(1, "alice", "a@x.com"))));
        repository.expect_find_by_email().times(0);
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register(register_command("alice", "other@x.com", "secret1"))
            .await;

        assert!(matches!(
            result,
            Err(UserError::UsernameAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn register_rejects_taken_email() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(Some(sample_user(1, "alice", "a@x.com"))));
        repository.expect_create().times(0);

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register(register_command("bob", "a@x.com", "secret1"))
            .await;

        assert!(matches!(result, Err(UserError::EmailAlreadyExists(_))));
    }

    #[tokio::test]
    async fn register_surfaces_storage_constraint_violation() {
        // Both existence checks pass (the concurrent-registration
        // interleaving); the storage constraint still rejects the create.
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));
        repository
            .expect_find_by_email()
            .times(1)
            .returning(|_| Ok(None));
        repository.expect_create().times(1).returning(|new_user| {
            Err(UserError::UsernameAlreadyExists(
                new_user.username.to_string(),
            ))
        });

        let service = UserService::new(Arc::new(repository));

        let result = service
            .register(register_command("alice", "a@x.com", "secret1"))
            .await;

        assert!(matches!(
            result,
            Err(UserError::UsernameAlreadyExists(_))
        ));
    }

    #[tokio::test]
    async fn get_user_found_and_missing() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId(7))
            .times(1)
            .returning(|_| Ok(Some(sample_user(7, "alice", "a@x.com"))));
        repository
            .expect_find_by_id()
            .withf(|id| *id == UserId(8))
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let user = service.get_user(UserId(7)).await.expect("should find");
        assert_eq!(user.id, UserId(7));

        let result = service.get_user(UserId(8)).await;
        assert!(matches!(result, Err(UserError::NotFound(_))));
    }

    #[tokio::test]
    async fn get_user_by_username_missing_is_distinct_kind() {
        let mut repository = MockTestUserRepository::new();

        repository
            .expect_find_by_username()
            .times(1)
            .returning(|_| Ok(None));

        let service = UserService::new(Arc::new(repository));

        let username = Username::new("ghost".to_string()).unwrap();
        let result = service.get_user_by_username(&username).await;

        assert!(matches!(result, Err(UserError::NotFoundByUsername(_))));
    }
}
