use argon2::{
    password_hash::{PasswordHasher, SaltString},
    Argon2,
};
use models::user;
use rand::rngs::OsRng;
use sea_orm::{ActiveValue::Unchanged, ConnectionTrait, Set};
use serde::Deserialize;
use tracing::{info, instrument};
use validator::Validate;

use crate::errors::ServiceError;
use crate::model_service::ModelService;
use crate::pagination::ListParams;
use crate::query_service::{Listable, Page, SharedQueryService};
use crate::validation::{check, taken, trimmed, FieldErrors};

#[derive(Clone, Default, Deserialize, Validate)]
pub struct CreateUser {
    #[validate(
        required(message = "The username field is required."),
        length(min = 1, max = 60, message = "The username must be between 1 and 60 characters.")
    )]
    pub username: Option<String>,
    #[validate(
        required(message = "The email field is required."),
        email(message = "The email must be a valid email address."),
        length(max = 120, message = "The email may not be greater than 120 characters.")
    )]
    pub email: Option<String>,
    #[validate(
        required(message = "The name field is required."),
        length(min = 1, max = 120, message = "The name must be between 1 and 120 characters.")
    )]
    pub name: Option<String>,
    #[validate(
        required(message = "The surname field is required."),
        length(min = 1, max = 120, message = "The surname must be between 1 and 120 characters.")
    )]
    pub surname: Option<String>,
    #[validate(
        required(message = "The password field is required."),
        length(min = 8, message = "The password must be at least 8 characters.")
    )]
    pub password: Option<String>,
    #[validate(
        required(message = "The role id field is required."),
        range(min = 1, message = "The role id must be at least 1.")
    )]
    pub role_id: Option<i32>,
}

impl std::fmt::Debug for CreateUser {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CreateUser")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("role_id", &self.role_id)
            .finish_non_exhaustive()
    }
}

/// Partial patch. Passwords are set on create only.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[validate(length(min = 1, max = 60, message = "The username must be between 1 and 60 characters."))]
    pub username: Option<String>,
    #[validate(
        email(message = "The email must be a valid email address."),
        length(max = 120, message = "The email may not be greater than 120 characters.")
    )]
    pub email: Option<String>,
    #[validate(length(min = 1, max = 120, message = "The name must be between 1 and 120 characters."))]
    pub name: Option<String>,
    #[validate(length(min = 1, max = 120, message = "The surname must be between 1 and 120 characters."))]
    pub surname: Option<String>,
    #[validate(range(min = 1, message = "The role id must be at least 1."))]
    pub role_id: Option<i32>,
}

impl Listable for user::Entity {
    fn sortable_columns() -> Vec<user::Column> {
        vec![
            user::Column::Id,
            user::Column::Username,
            user::Column::Email,
            user::Column::Name,
            user::Column::Surname,
            user::Column::RoleId,
            user::Column::CreationTime,
        ]
    }

    fn searchable_columns() -> Vec<user::Column> {
        vec![user::Column::Username, user::Column::Email, user::Column::Name, user::Column::Surname]
    }
}

/// Argon2id PHC string with a random salt.
pub fn hash_password(password: &str) -> Result<String, ServiceError> {
    let salt = SaltString::generate(&mut OsRng);
    let hash = Argon2::default()
        .hash_password(password.as_bytes(), &salt)
        .map_err(|e| ServiceError::Unexpected(e.to_string()))?
        .to_string();
    Ok(hash)
}

#[derive(Debug, Clone, Copy, Default)]
pub struct UserService {
    model: ModelService<user::Entity>,
    query: SharedQueryService,
}

impl UserService {
    pub fn new(query: SharedQueryService) -> Self {
        Self { model: ModelService::new(), query }
    }

    async fn check_unique<C: ConnectionTrait>(
        &self,
        db: &C,
        username: Option<&str>,
        email: Option<&str>,
        except_id: Option<i32>,
        errors: &mut FieldErrors,
    ) -> Result<(), ServiceError> {
        if let Some(v) = username.filter(|_| !errors.contains("username")) {
            if self.model.exists_live(db, user::Column::Username, v, except_id).await? {
                errors.add("username", taken("username"));
            }
        }
        if let Some(v) = email.filter(|_| !errors.contains("email")) {
            if self.model.exists_live(db, user::Column::Email, v, except_id).await? {
                errors.add("email", taken("email"));
            }
        }
        Ok(())
    }

    #[instrument(skip(self, db, input), fields(username = ?input.username))]
    pub async fn create<C: ConnectionTrait>(
        &self,
        db: &C,
        mut input: CreateUser,
        actor: Option<i32>,
    ) -> Result<user::Model, ServiceError> {
        input.username = trimmed(input.username);
        input.email = trimmed(input.email);
        input.name = trimmed(input.name);
        input.surname = trimmed(input.surname);

        let mut errors = check(&input);
        self.check_unique(db, input.username.as_deref(), input.email.as_deref(), None, &mut errors)
            .await?;
        errors.into_result()?;

        let (Some(username), Some(email), Some(name), Some(surname), Some(password), Some(role_id)) =
            (input.username, input.email, input.name, input.surname, input.password, input.role_id)
        else {
            return Err(ServiceError::Unexpected("validated user input is incomplete".into()));
        };
        let am = user::ActiveModel {
            username: Set(username),
            email: Set(email),
            name: Set(name),
            surname: Set(surname),
            password_hash: Set(hash_password(&password)?),
            role_id: Set(role_id),
            ..Default::default()
        };
        let created = self.model.create(db, am, actor).await?;
        info!(id = created.id, username = %created.username, "user created");
        Ok(created)
    }

    #[instrument(skip(self, db, input))]
    pub async fn update<C: ConnectionTrait>(
        &self,
        db: &C,
        id: i32,
        mut input: UpdateUser,
        actor: Option<i32>,
    ) -> Result<user::Model, ServiceError> {
        let existing = self.model.validate(db, id).await?;
        input.username = trimmed(input.username);
        input.email = trimmed(input.email);
        input.name = trimmed(input.name);
        input.surname = trimmed(input.surname);

        let mut errors = check(&input);
        self.check_unique(db, input.username.as_deref(), input.email.as_deref(), Some(existing.id), &mut errors)
            .await?;
        errors.into_result()?;

        let mut am = user::ActiveModel { id: Unchanged(existing.id), ..Default::default() };
        if let Some(v) = input.username {
            am.username = Set(v);
        }
        if let Some(v) = input.email {
            am.email = Set(v);
        }
        if let Some(v) = input.name {
            am.name = Set(v);
        }
        if let Some(v) = input.surname {
            am.surname = Set(v);
        }
        if let Some(v) = input.role_id {
            am.role_id = Set(v);
        }
        let updated = self.model.update(db, am, actor).await?;
        info!(id = updated.id, "user updated");
        Ok(updated)
    }

    #[instrument(skip(self, db))]
    pub async fn delete<C: ConnectionTrait>(&self, db: &C, id: i32, actor: Option<i32>) -> Result<user::Model, ServiceError> {
        let existing = self.model.validate(db, id).await?;
        let deleted = self.model.delete(db, existing, actor).await?;
        info!(id = deleted.id, "user deleted");
        Ok(deleted)
    }

    pub async fn find<C: ConnectionTrait>(&self, db: &C, id: i32) -> Result<user::Model, ServiceError> {
        self.model.validate(db, id).await
    }

    pub async fn list<C: ConnectionTrait>(&self, db: &C, params: &ListParams) -> Result<Page<user::Model>, ServiceError> {
        self.query.query::<user::Entity, _>(db, params, user::Column::Name).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use argon2::{password_hash::PasswordVerifier, PasswordHash};

    fn create(username: &str, email: &str) -> CreateUser {
        CreateUser {
            username: Some(username.into()),
            email: Some(email.into()),
            name: Some("Ana".into()),
            surname: Some("Quispe".into()),
            password: Some("s3cret-pass".into()),
            role_id: Some(2),
        }
    }

    #[tokio::test]
    async fn password_is_hashed_with_argon2() -> anyhow::Result<()> {
        let db = get_db().await?;
        let u = UserService::default().create(&db, create("ana", "ana@example.com"), None).await?;
        assert_ne!(u.password_hash, "s3cret-pass");
        let parsed = PasswordHash::new(&u.password_hash).unwrap();
        assert!(Argon2::default().verify_password(b"s3cret-pass", &parsed).is_ok());
        Ok(())
    }

    #[tokio::test]
    async fn username_and_email_unique_among_live_users() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = UserService::default();
        let first = svc.create(&db, create("ana", "ana@example.com"), None).await?;

        match svc.create(&db, create("ana", "ana@example.com"), None).await.unwrap_err() {
            ServiceError::Validation(e) => {
                assert!(e.contains("username"));
                assert!(e.contains("email"));
            }
            other => panic!("unexpected error: {other}"),
        }

        svc.delete(&db, first.id, None).await?;
        svc.create(&db, create("ana", "ana@example.com"), None).await?;
        Ok(())
    }

    #[tokio::test]
    async fn structural_rules() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = UserService::default();
        let mut bad = create(&"u".repeat(61), "not-an-email");
        bad.password = Some("short".into());
        bad.role_id = Some(0);
        match svc.create(&db, bad, None).await.unwrap_err() {
            ServiceError::Validation(e) => {
                for field in ["username", "email", "password", "role_id"] {
                    assert!(e.contains(field), "{field}");
                }
                assert!(!e.contains("name"));
            }
            other => panic!("unexpected error: {other}"),
        }
        Ok(())
    }

    #[tokio::test]
    async fn update_keeps_password_and_checks_email_against_others() -> anyhow::Result<()> {
        let db = get_db().await?;
        let svc = UserService::default();
        let ana = svc.create(&db, create("ana", "ana@example.com"), None).await?;
        svc.create(&db, create("luis", "luis@example.com"), None).await?;

        let u = svc
            .update(&db, ana.id, UpdateUser { email: Some("ana@example.com".into()), role_id: Some(3), ..Default::default() }, None)
            .await?;
        assert_eq!(u.role_id, 3);
        assert_eq!(u.password_hash, ana.password_hash);

        let err = svc
            .update(&db, ana.id, UpdateUser { email: Some("luis@example.com".into()), ..Default::default() }, None)
            .await
            .unwrap_err();
        assert!(matches!(err, ServiceError::Validation(ref e) if e.contains("email")));
        Ok(())
    }
}
