use std::sync::Arc;

use chrono::Utc;
use uuid::Uuid;

use crate::domain::{CreatePost, Post, PostPatch};
use crate::error::DomainError;
use crate::pagination::{PageRequest, Paginated};
use crate::ports::{PostRepository, UserRepository};
use crate::update::ApplyPatch;

/// Post use cases: create, get, skip-mode listing, partial update, delete.
#[derive(Clone)]
pub struct PostService {
    posts: Arc<dyn PostRepository>,
    users: Arc<dyn UserRepository>,
}

impl PostService {
    pub fn new(posts: Arc<dyn PostRepository>, users: Arc<dyn UserRepository>) -> Self {
        Self { posts, users }
    }

    /// Create a post for an existing user. A post never exists without its
    /// owner, so an unknown `user_id` fails before anything is persisted.
    pub async fn create(&self, user_id: i32, req: CreatePost) -> Result<Post, DomainError> {
        req.validate().map_err(DomainError::Validation)?;

        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(DomainError::NotFound(format!(
                "User with id {user_id} does not exist"
            )));
        }

        Ok(self.posts.insert(Post::new(user_id, req)).await?)
    }

    pub async fn get(&self, id: Uuid) -> Result<Post, DomainError> {
        self.posts.find_by_id(id).await?.ok_or_else(not_found)
    }

    /// Skip-mode listing: raw offset plus limit, for "load more" clients.
    pub async fn list(&self, skip: u64, limit: u64) -> Result<Paginated<Post>, DomainError> {
        let request = PageRequest::from_skip(skip, limit);
        let items = self.posts.list(request.offset, request.limit).await?;
        let total_items = self.posts.count().await?;
        Ok(Paginated::new(items, request, total_items))
    }

    /// Partial update: only the fields present in the patch are overwritten.
    pub async fn update(&self, id: Uuid, patch: PostPatch) -> Result<Post, DomainError> {
        patch.validate().map_err(DomainError::Validation)?;

        let mut post = self.posts.find_by_id(id).await?.ok_or_else(not_found)?;
        patch.apply_to(&mut post);
        post.updated_at = Some(Utc::now());

        Ok(self.posts.update(post).await?)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), DomainError> {
        self.posts.find_by_id(id).await?.ok_or_else(not_found)?;
        self.posts.delete(id).await?;
        Ok(())
    }
}

fn not_found() -> DomainError {
    DomainError::NotFound("Post not found".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{CreateUser, Role};
    use crate::service::testutil::{FakeHasher, InMemoryStore};
    use crate::service::UserService;

    async fn service_with_user() -> (PostService, Arc<InMemoryStore>, i32) {
        let store = Arc::new(InMemoryStore::new());
        let users = UserService::new(store.clone(), Arc::new(FakeHasher));
        let user = users
            .create(CreateUser {
                email: "ann@example.com".to_string(),
                password: "secret1".to_string(),
                first_name: "Ann".to_string(),
                last_name: "Smith".to_string(),
                role: Role::User,
                is_active: true,
                birth_date: None,
            })
            .await
            .unwrap();
        let service = PostService::new(store.clone(), store.clone());
        (service, store, user.id)
    }

    fn create_req(title: &str) -> CreatePost {
        CreatePost {
            title: title.to_string(),
            content: "body".to_string(),
            published: false,
            event_date: None,
        }
    }

    #[tokio::test]
    async fn create_persists_with_defaults() {
        let (service, _, user_id) = service_with_user().await;
        let post = service.create(user_id, create_req("Hello")).await.unwrap();
        assert_eq!(post.user_id, user_id);
        assert_eq!(post.views, 0);
        assert!(!post.published);
    }

    #[tokio::test]
    async fn create_for_missing_user_persists_nothing() {
        let (service, store, _) = service_with_user().await;

        let err = service.create(999, create_req("Orphan")).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
        assert_eq!(PostRepository::count(&*store).await.unwrap(), 0);
    }

    #[tokio::test]
    async fn get_missing_post_is_not_found() {
        let (service, _, _) = service_with_user().await;
        let err = service.get(Uuid::new_v4()).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }

    #[tokio::test]
    async fn skip_mode_listing_reports_page_metadata() {
        let (service, _, user_id) = service_with_user().await;
        for i in 0..7 {
            service
                .create(user_id, create_req(&format!("p{i}")))
                .await
                .unwrap();
        }

        let page = service.list(4, 2).await.unwrap();
        assert_eq!(page.items.len(), 2);
        assert_eq!(page.current_page, 3);
        assert_eq!(page.total_pages, 4);
        assert_eq!(page.total_items, 7);
        assert_eq!(page.items[0].title, "p4");
    }

    #[tokio::test]
    async fn update_patch_leaves_other_fields() {
        let (service, _, user_id) = service_with_user().await;
        let post = service.create(user_id, create_req("Old")).await.unwrap();

        let patch: PostPatch = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        let updated = service.update(post.id, patch).await.unwrap();

        assert_eq!(updated.title, "X");
        assert_eq!(updated.content, "body");
        assert!(!updated.published);
        assert_eq!(updated.event_date, None);
        assert!(updated.updated_at.is_some());
    }

    #[tokio::test]
    async fn delete_removes_the_post() {
        let (service, store, user_id) = service_with_user().await;
        let post = service.create(user_id, create_req("Gone")).await.unwrap();

        service.delete(post.id).await.unwrap();
        assert_eq!(PostRepository::count(&*store).await.unwrap(), 0);

        let err = service.delete(post.id).await.unwrap_err();
        assert!(matches!(err, DomainError::NotFound(_)));
    }
}
