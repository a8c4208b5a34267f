//! User entity <-> model mapper

use chirpy_core::entities::User;

use crate::models::UserModel;

/// Convert UserModel to User entity
impl From<UserModel> for User {
    fn from(model: UserModel) -> Self {
        User {
            id: model.id,
            email: model.email,
            is_chirpy_red: model.is_chirpy_red,
            created_at: model.created_at,
            updated_at: model.updated_at,
        }
    }
}
