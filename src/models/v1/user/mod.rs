use chrono::Utc;
use sea_orm::prelude::*;
use sea_orm::{NotSet, Set};

use crate::entities::v1::personal_access_tokens;
use crate::entities::v1::users::{ActiveModel, Column, Entity, Model};

impl Model {
    #[::tracing::instrument(skip(db))]
    pub async fn create(db: &DatabaseConnection, name: &str, email: &str) -> Result<Self, DbErr> {
        let now = Utc::now();
        let user = ActiveModel {
            id: NotSet,
            name: Set(name.trim().to_string()),
            email: Set(email.trim().to_lowercase()),
            email_verified_at: Set(None),
            created_at: Set(now),
            updated_at: Set(now),
        };

        let user = user.insert(db).await?;

        ::tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    pub async fn find_by_email(db: &DatabaseConnection, email: &str) -> Result<Option<Self>, DbErr> {
        Entity::find()
            .filter(Column::Email.eq(email.trim().to_lowercase()))
            .one(db)
            .await
    }

    pub async fn tokens(
        &self,
        db: &DatabaseConnection,
    ) -> Result<Vec<personal_access_tokens::Model>, DbErr> {
        self.find_related(personal_access_tokens::Entity).all(db).await
    }
}
