//! Current-user endpoints.

use crate::error::ClientResult;
use crate::http::ApiClient;
use crate::query;
use mira_core::{AuditLog, Page, ProfileUpdate, User, UserFull};

impl ApiClient {
    /// Basic profile of the authenticated user.
    pub async fn me(&self) -> ClientResult<User> {
        self.get("/users/me").await
    }

    /// Full profile including KYC and trader-profile attachments.
    pub async fn me_full(&self) -> ClientResult<UserFull> {
        self.get("/users/me/full").await
    }

    /// Force the backend to recompute derived user data.
    pub async fn refresh_user_data(&self) -> ClientResult<UserFull> {
        self.get("/users/me/refresh").await
    }

    /// Partial profile update.
    pub async fn update_profile(&self, update: &ProfileUpdate) -> ClientResult<User> {
        self.patch("/users/me", update).await
    }

    /// Paginated account activity log.
    pub async fn audit_logs(&self, page: u32, page_size: u32) -> ClientResult<Page<AuditLog>> {
        let q = query::build(&[
            ("page", Some(page.to_string())),
            ("page_size", Some(page_size.to_string())),
        ]);
        self.get(&format!("/users/me/audit-logs{q}")).await
    }
}
