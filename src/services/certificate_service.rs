use crate::errors::{AppError, AppResult};
use crate::models::domain::certificate::certificate_hash;
use crate::models::domain::{Certificate, User};
use crate::store::EntityStore;

pub struct CertificateService;

impl CertificateService {
    /// Issues a certificate for a completed course. Student name, course
    /// title and instructor name are snapshotted at issuance, so later
    /// profile renames never alter an issued certificate. One certificate
    /// per (student, course); a second call fails with `AlreadyExists`.
    pub fn issue(
        store: &mut EntityStore,
        student: &User,
        course_id: &str,
        now: u64,
    ) -> AppResult<Certificate> {
        let enrollment = store
            .enrollment(&student.id, course_id)
            .ok_or_else(|| AppError::NotEnrolled("Caller is not enrolled in this course".to_string()))?;

        if !enrollment.completed {
            return Err(AppError::InvalidState(
                "Course is not completed".to_string(),
            ));
        }
        if enrollment.certificate_issued {
            return Err(AppError::AlreadyExists(
                "Certificate already issued for this course".to_string(),
            ));
        }

        let course = store.course(course_id).ok_or_else(|| {
            AppError::NotFound(format!("Course with id '{}' not found", course_id))
        })?;

        let certificate = Certificate {
            student_id: student.id.clone(),
            course_id: course_id.to_string(),
            student_name: student.name.clone(),
            course_title: course.title.clone(),
            instructor_name: course.instructor_name.clone(),
            issued_at: now,
            certificate_hash: certificate_hash(&student.id, course_id, now, &course.title),
        };

        // All checks passed; commit both writes.
        if let Some(enrollment) = store.enrollment_mut(&student.id, course_id) {
            enrollment.certificate_issued = true;
        }
        store.push_certificate(certificate.clone());
        log::info!(
            "issued certificate {} to student {} for course {}",
            certificate.certificate_hash,
            student.id,
            course_id
        );

        Ok(certificate)
    }

    /// Public lookup by hash; no caller identity involved.
    pub fn verify(store: &EntityStore, hash: &str) -> Option<Certificate> {
        store.certificate_by_hash(hash).cloned()
    }
}
