use validator::Validate;

use crate::errors::{AppError, AppResult};
use crate::models::domain::User;
use crate::models::dto::{CreateUserInput, UpdateProfileInput};
use crate::store::EntityStore;

pub struct UserService;

impl UserService {
    /// Creates the profile for a caller identity. One profile per identity;
    /// the role is fixed here and never changes afterwards.
    pub fn create_user(
        store: &mut EntityStore,
        caller: &str,
        input: CreateUserInput,
        now: u64,
    ) -> AppResult<User> {
        input.validate()?;

        if store.user(caller).is_some() {
            return Err(AppError::AlreadyExists(
                "A profile already exists for this caller".to_string(),
            ));
        }

        let user = User::new(
            caller,
            &input.name,
            input.role,
            &input.bio,
            &input.profile_photo,
            now,
        );
        store.insert_user(user.clone());
        log::info!("created {:?} profile for caller {}", user.role, caller);

        Ok(user)
    }

    /// Updates name, bio and photo. Role and id are frozen at creation.
    pub fn update_profile(
        store: &mut EntityStore,
        caller: &str,
        input: UpdateProfileInput,
    ) -> AppResult<User> {
        input.validate()?;

        let user = store.user_mut(caller).ok_or_else(|| {
            AppError::Unauthorized("No profile exists for this caller".to_string())
        })?;

        user.name = input.name;
        user.bio = input.bio;
        user.profile_photo = input.profile_photo;

        Ok(user.clone())
    }
}
