pub mod login;
pub mod logout;
pub mod validate;

use crate::error::AppError;

/// Method fallback for the POST-only endpoints.
pub async fn only_post() -> AppError {
    AppError::MethodNotAllowed
}
