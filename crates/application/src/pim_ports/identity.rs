use async_trait::async_trait;
use pimctl_core::{AppResult, SubjectId};

/// Port for acquiring bearer tokens from the signed-in session.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Returns a bearer token for the given resource scope.
    ///
    /// Fails with `AppError::Unauthorized` when the caller is not signed in.
    async fn access_token(&self, scope: &str) -> AppResult<String>;
}

/// Port for resolving the signed-in principal.
#[async_trait]
pub trait DirectoryLookup: Send + Sync {
    /// Returns the object id of the signed-in user.
    async fn signed_in_user_id(&self) -> AppResult<SubjectId>;
}
