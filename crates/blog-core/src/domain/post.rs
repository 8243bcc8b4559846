use chrono::{DateTime, NaiveDate, Utc};
use serde::Deserialize;
use uuid::Uuid;

use crate::apply_patch_fields;
use crate::error::FieldViolation;
use crate::update::{double_option, ApplyPatch};

const TITLE_MAX_CHARS: usize = 200;

/// Post entity. Every post belongs to exactly one user and is removed with it.
#[derive(Debug, Clone, PartialEq)]
pub struct Post {
    pub id: Uuid,
    pub user_id: i32,
    pub title: String,
    pub content: String,
    pub views: i32,
    pub rating: Option<f64>,
    pub published: bool,
    pub published_at: Option<DateTime<Utc>>,
    pub event_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl Post {
    /// Build a new post for a user with a generated id and defaults applied.
    pub fn new(user_id: i32, create: CreatePost) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            title: create.title,
            content: create.content,
            views: 0,
            rating: None,
            published: create.published,
            published_at: None,
            event_date: create.event_date,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}

/// Request to create a post.
#[derive(Debug, Clone, Deserialize)]
pub struct CreatePost {
    pub title: String,
    pub content: String,
    #[serde(default)]
    pub published: bool,
    pub event_date: Option<NaiveDate>,
}

impl CreatePost {
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();
        check_title(&self.title, &mut violations);
        if self.content.is_empty() {
            violations.push(FieldViolation::new("content", "must not be empty"));
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

/// Sparse update request for a post.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PostPatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub published: Option<bool>,
    #[serde(default, deserialize_with = "double_option")]
    pub event_date: Option<Option<NaiveDate>>,
}

impl PostPatch {
    pub fn validate(&self) -> Result<(), Vec<FieldViolation>> {
        let mut violations = Vec::new();
        if let Some(title) = &self.title {
            check_title(title, &mut violations);
        }
        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

impl ApplyPatch<Post> for PostPatch {
    fn apply_to(&self, post: &mut Post) {
        apply_patch_fields!(self, post, { title, content, published, event_date });
    }
}

fn check_title(title: &str, violations: &mut Vec<FieldViolation>) {
    if title.is_empty() {
        violations.push(FieldViolation::new("title", "must not be empty"));
    } else if title.chars().count() > TITLE_MAX_CHARS {
        violations.push(FieldViolation::new(
            "title",
            "must be at most 200 characters",
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_request() -> CreatePost {
        CreatePost {
            title: "Hello".to_string(),
            content: "First post".to_string(),
            published: false,
            event_date: None,
        }
    }

    #[test]
    fn new_post_applies_defaults() {
        let post = Post::new(7, create_request());
        assert_eq!(post.user_id, 7);
        assert_eq!(post.views, 0);
        assert!(!post.published);
        assert_eq!(post.rating, None);
        assert_eq!(post.published_at, None);
        assert_eq!(post.updated_at, None);
    }

    #[test]
    fn overlong_title_is_rejected() {
        let req = CreatePost {
            title: "x".repeat(201),
            ..create_request()
        };
        let violations = req.validate().unwrap_err();
        assert_eq!(violations[0].field, "title");

        assert!(create_request().validate().is_ok());
    }

    #[test]
    fn patch_with_title_only_leaves_the_rest() {
        let mut post = Post::new(
            1,
            CreatePost {
                title: "Old".to_string(),
                content: "Body".to_string(),
                published: true,
                event_date: NaiveDate::from_ymd_opt(2026, 3, 1),
            },
        );

        let patch: PostPatch = serde_json::from_str(r#"{"title": "X"}"#).unwrap();
        patch.apply_to(&mut post);

        assert_eq!(post.title, "X");
        assert_eq!(post.content, "Body");
        assert!(post.published);
        assert_eq!(post.event_date, NaiveDate::from_ymd_opt(2026, 3, 1));
    }

    #[test]
    fn patch_null_clears_event_date() {
        let mut post = Post::new(
            1,
            CreatePost {
                event_date: NaiveDate::from_ymd_opt(2026, 3, 1),
                ..create_request()
            },
        );
        let patch: PostPatch = serde_json::from_str(r#"{"event_date": null}"#).unwrap();
        patch.apply_to(&mut post);
        assert_eq!(post.event_date, None);
    }
}
