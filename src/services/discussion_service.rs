use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::{Discussion, Reply, User};
use crate::models::dto::CreateDiscussionInput;
use crate::store::EntityStore;

pub struct DiscussionService;

impl DiscussionService {
    pub fn create_discussion(
        store: &mut EntityStore,
        author: &User,
        input: CreateDiscussionInput,
        id: String,
        now: u64,
    ) -> AppResult<Discussion> {
        input.validate()?;

        if store.course(&input.course_id).is_none() {
            return Err(AppError::NotFound(format!(
                "Course with id '{}' not found",
                input.course_id
            )));
        }

        let discussion = Discussion::new(
            &id,
            &input.course_id,
            &author.id,
            &author.name,
            &input.title,
            &input.content,
            now,
        );
        store.insert_discussion(discussion.clone());

        Ok(discussion)
    }

    /// Appends a reply. Replies are immutable once appended and are never
    /// reordered.
    pub fn reply(
        store: &mut EntityStore,
        author: &User,
        discussion_id: &str,
        content: &str,
        id: String,
        now: u64,
    ) -> AppResult<()> {
        if content.trim().is_empty() {
            return Err(AppError::InvalidArgument(
                "Reply content must not be empty".to_string(),
            ));
        }

        let discussion = store.discussion_mut(discussion_id).ok_or_else(|| {
            AppError::NotFound(format!("Discussion with id '{}' not found", discussion_id))
        })?;

        discussion.replies.push(Reply {
            id,
            author_id: author.id.clone(),
            author_name: author.name.clone(),
            content: content.to_string(),
            created_at: now,
        });

        Ok(())
    }
}
