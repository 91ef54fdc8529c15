use serde::{Deserialize, Serialize};

use crate::models::domain::course::CourseId;
use crate::models::domain::user::UserId;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Certificate {
    pub student_id: UserId,
    pub course_id: CourseId,
    pub student_name: String,    // snapshot at issuance, not re-derived later
    pub course_title: String,    // snapshot at issuance
    pub instructor_name: String, // snapshot at issuance
    pub issued_at: u64,
    pub certificate_hash: String,
}

/// Digest of (student_id, course_id, issued_at, course_title), hex-encoded.
///
/// The payload is the canonical JSON array of the four fields, so anyone
/// holding a certificate can recompute the hash without a secret key.
pub fn certificate_hash(
    student_id: &str,
    course_id: &str,
    issued_at: u64,
    course_title: &str,
) -> String {
    use sha2::{Digest, Sha256};

    let payload = serde_json::to_string(&(student_id, course_id, issued_at, course_title))
        .unwrap_or_default();

    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    format!("{:x}", hasher.finalize())
}
