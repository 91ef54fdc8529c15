use serde::{Deserialize, Serialize};

use crate::models::domain::course::CourseId;
use crate::models::domain::user::UserId;

pub type DiscussionId = String;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Discussion {
    pub id: DiscussionId,
    pub course_id: CourseId,
    pub author_id: UserId,
    pub author_name: String, // snapshot of the author's name at posting time
    pub title: String,
    pub content: String,
    pub replies: Vec<Reply>, // append-only
    pub created_at: u64,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Reply {
    pub id: String,
    pub author_id: UserId,
    pub author_name: String,
    pub content: String,
    pub created_at: u64,
}

impl Discussion {
    pub fn new(
        id: &str,
        course_id: &str,
        author_id: &str,
        author_name: &str,
        title: &str,
        content: &str,
        created_at: u64,
    ) -> Self {
        Discussion {
            id: id.to_string(),
            course_id: course_id.to_string(),
            author_id: author_id.to_string(),
            author_name: author_name.to_string(),
            title: title.to_string(),
            content: content.to_string(),
            replies: Vec::new(),
            created_at,
        }
    }
}
