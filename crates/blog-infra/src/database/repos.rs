//! SeaORM repository implementations.

use async_trait::async_trait;
use sea_orm::sea_query::{Expr, Func};
use sea_orm::{
    ColumnTrait, Condition, EntityTrait, FromQueryResult, JoinType, PaginatorTrait, QueryFilter,
    QueryOrder, QuerySelect, RelationTrait,
};
use uuid::Uuid;

use blog_core::domain::{NewUser, Post, User, UserWithPostCount};
use blog_core::error::RepoError;
use blog_core::ports::{PostRepository, UserRepository};

use super::base::{query_err, SeaOrmRepository};
use super::entity::post::{self, Entity as PostEntity};
use super::entity::user::{self, Entity as UserEntity};

/// SeaORM user repository.
pub type SeaOrmUserRepository = SeaOrmRepository<UserEntity>;

/// SeaORM post repository.
pub type SeaOrmPostRepository = SeaOrmRepository<PostEntity>;

/// User columns plus the aggregate post count from the LEFT JOIN.
#[derive(Debug, FromQueryResult)]
struct UserPostCountRow {
    id: i32,
    email: String,
    password_hash: String,
    first_name: String,
    last_name: String,
    role: String,
    is_active: bool,
    birth_date: Option<chrono::NaiveDate>,
    created_at: chrono::DateTime<chrono::FixedOffset>,
    updated_at: Option<chrono::DateTime<chrono::FixedOffset>>,
    post_count: i64,
}

impl TryFrom<UserPostCountRow> for UserWithPostCount {
    type Error = RepoError;

    fn try_from(row: UserPostCountRow) -> Result<Self, Self::Error> {
        let user = User::try_from(user::Model {
            id: row.id,
            email: row.email,
            password_hash: row.password_hash,
            first_name: row.first_name,
            last_name: row.last_name,
            role: row.role,
            is_active: row.is_active,
            birth_date: row.birth_date,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })?;
        Ok(UserWithPostCount {
            user,
            post_count: row.post_count.max(0) as u64,
        })
    }
}

/// Case-insensitive substring match OR-ed across first name, last name and
/// email.
fn search_condition(term: &str) -> Condition {
    let pattern = format!("%{}%", term.to_lowercase());
    Condition::any()
        .add(
            Expr::expr(Func::lower(Expr::col((
                UserEntity,
                user::Column::FirstName,
            ))))
            .like(pattern.clone()),
        )
        .add(
            Expr::expr(Func::lower(Expr::col((UserEntity, user::Column::LastName))))
                .like(pattern.clone()),
        )
        .add(Expr::expr(Func::lower(Expr::col((UserEntity, user::Column::Email)))).like(pattern))
}

#[async_trait]
impl UserRepository for SeaOrmUserRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<User>, RepoError> {
        self.find_one(id).await
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, RepoError> {
        // Mask the local part so no PII lands in the logs.
        let masked = match email.find('@') {
            Some(at) => format!("{}***{}", &email[..1.min(at)], &email[at..]),
            None => "***".to_string(),
        };
        tracing::debug!(user_email = %masked, "Finding user by email");

        UserEntity::find()
            .filter(user::Column::Email.eq(email))
            .one(&self.db)
            .await
            .map_err(query_err)?
            .map(User::try_from)
            .transpose()
    }

    async fn list_with_post_count(
        &self,
        search: Option<&str>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<UserWithPostCount>, RepoError> {
        let mut query = UserEntity::find()
            .column_as(post::Column::Id.count(), "post_count")
            .join_rev(JoinType::LeftJoin, post::Relation::User.def())
            .group_by(user::Column::Id);

        if let Some(term) = search {
            query = query.filter(search_condition(term));
        }

        query
            .order_by_desc(user::Column::Id)
            .offset(offset)
            .limit(limit)
            .into_model::<UserPostCountRow>()
            .all(&self.db)
            .await
            .map_err(query_err)?
            .into_iter()
            .map(UserWithPostCount::try_from)
            .collect()
    }

    async fn count(&self, search: Option<&str>) -> Result<u64, RepoError> {
        let mut query = UserEntity::find();
        if let Some(term) = search {
            query = query.filter(search_condition(term));
        }
        query.count(&self.db).await.map_err(query_err)
    }

    async fn insert(&self, user: NewUser) -> Result<User, RepoError> {
        let model = self.insert_model(user::ActiveModel::from(user)).await?;
        User::try_from(model)
    }

    async fn update(&self, user: User) -> Result<User, RepoError> {
        let model = self.update_model(user::ActiveModel::from(user)).await?;
        User::try_from(model)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        self.delete_one(id).await
    }
}

#[async_trait]
impl PostRepository for SeaOrmPostRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, RepoError> {
        self.find_one(id).await
    }

    // No ORDER BY: listings keep the store's insertion order.
    async fn list(&self, offset: u64, limit: u64) -> Result<Vec<Post>, RepoError> {
        PostEntity::find()
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?
            .into_iter()
            .map(Post::try_from)
            .collect()
    }

    async fn list_by_user(
        &self,
        user_id: i32,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<Post>, RepoError> {
        PostEntity::find()
            .filter(post::Column::UserId.eq(user_id))
            .offset(offset)
            .limit(limit)
            .all(&self.db)
            .await
            .map_err(query_err)?
            .into_iter()
            .map(Post::try_from)
            .collect()
    }

    async fn count(&self) -> Result<u64, RepoError> {
        PostEntity::find().count(&self.db).await.map_err(query_err)
    }

    async fn insert(&self, post: Post) -> Result<Post, RepoError> {
        let model = self.insert_model(post::ActiveModel::from(post)).await?;
        Post::try_from(model)
    }

    async fn update(&self, post: Post) -> Result<Post, RepoError> {
        let model = self.update_model(post::ActiveModel::from(post)).await?;
        Post::try_from(model)
    }

    async fn delete(&self, id: Uuid) -> Result<(), RepoError> {
        self.delete_one(id).await
    }
}
