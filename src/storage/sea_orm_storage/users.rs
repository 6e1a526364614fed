use super::SeaOrmStorage;
use crate::entity::prelude::{UserActiveModel, Users};
use crate::entity::users::Column;
use crate::errors::{AttendanceSystemError, Result};
use crate::models::users::{
    entities::{User, UserStatus},
    requests::CreateUserRequest,
};
use crate::utils::password::hash_password;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, EntityTrait, PaginatorTrait, QueryFilter, Set,
};

impl SeaOrmStorage {
    pub async fn create_user_impl(&self, req: CreateUserRequest) -> Result<User> {
        let now = chrono::Utc::now().timestamp();

        let model = UserActiveModel {
            username: Set(req.username),
            email: Set(req.email),
            password_hash: Set(hash_password(&req.password)?),
            role: Set(req.role.to_string()),
            status: Set(UserStatus::Active.to_string()),
            display_name: Set(req.display_name),
            created_at: Set(now),
            updated_at: Set(now),
            ..Default::default()
        };

        let result = model.insert(&self.db).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to create user: {e}"))
        })?;

        Ok(result.into_user())
    }

    pub async fn get_user_by_id_impl(&self, id: i64) -> Result<Option<User>> {
        let result = Users::find_by_id(id).one(&self.db).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to query user: {e}"))
        })?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn get_user_by_username_or_email_impl(
        &self,
        identifier: &str,
    ) -> Result<Option<User>> {
        let result = Users::find()
            .filter(
                Condition::any()
                    .add(Column::Username.eq(identifier))
                    .add(Column::Email.eq(identifier)),
            )
            .one(&self.db)
            .await
            .map_err(|e| {
                AttendanceSystemError::database_operation(format!("failed to query user: {e}"))
            })?;

        Ok(result.map(|m| m.into_user()))
    }

    pub async fn update_last_login_impl(&self, id: i64) -> Result<bool> {
        let Some(model) = Users::find_by_id(id).one(&self.db).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to query user: {e}"))
        })?
        else {
            return Ok(false);
        };

        let now = chrono::Utc::now().timestamp();
        let mut active: UserActiveModel = model.into();
        active.last_login = Set(Some(now));
        active.updated_at = Set(now);

        active.update(&self.db).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to update login time: {e}"))
        })?;

        Ok(true)
    }

    pub async fn count_users_impl(&self) -> Result<u64> {
        Users::find().count(&self.db).await.map_err(|e| {
            AttendanceSystemError::database_operation(format!("failed to count users: {e}"))
        })
    }
}
