//! User account types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

/// Account verification status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserStatus {
    Pending,
    Verified,
    Suspended,
}

/// KYC review status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    Pending,
    Approved,
    Rejected,
}

/// Basic user profile as returned by `GET /users/me`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: Uuid,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: UserStatus,
    pub country: Option<String>,
    pub is_active: bool,
    pub is_2fa_enabled: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// KYC summary nested in the full user view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct KycSummary {
    pub status: KycStatus,
    pub first_name: String,
    pub last_name: String,
    pub country: String,
}

/// Trader profile summary nested in the full user view.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TraderProfileSummary {
    pub id: Uuid,
    pub alias: String,
    pub is_active: bool,
    pub performance_fee_percentage: rust_decimal::Decimal,
}

/// Extended user view with KYC and trader profile attachments.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserFull {
    #[serde(flatten)]
    pub user: User,
    pub kyc: Option<KycSummary>,
    pub trader_profile: Option<TraderProfileSummary>,
}

/// Registration payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub country: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone_number: Option<String>,
    pub password: String,
}

/// Partial profile update.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfileUpdate {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// Audit log entry for user activity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditLog {
    pub id: Uuid,
    pub user_id: Uuid,
    pub action: String,
    pub resource_type: String,
    pub resource_id: Option<String>,
    pub ip_address: Option<String>,
    pub user_agent: Option<String>,
    pub changes: Option<Value>,
    pub extra_data: Option<Value>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_status_wire_format() {
        assert_eq!(
            serde_json::to_string(&UserStatus::Verified).unwrap(),
            "\"VERIFIED\""
        );
        let parsed: UserStatus = serde_json::from_str("\"PENDING\"").unwrap();
        assert_eq!(parsed, UserStatus::Pending);
    }

    #[test]
    fn test_user_full_flattens_base_fields() {
        let json = serde_json::json!({
            "id": "9f7c1a94-5e1b-4f58-93d8-4a1f0e2ab111",
            "first_name": "Ada",
            "last_name": "Obi",
            "email": "ada@example.com",
            "status": "VERIFIED",
            "country": "NG",
            "is_active": true,
            "is_2fa_enabled": false,
            "created_at": "2025-01-01T00:00:00Z",
            "updated_at": "2025-01-02T00:00:00Z",
            "kyc": null,
            "trader_profile": null
        });
        let full: UserFull = serde_json::from_value(json).unwrap();
        assert_eq!(full.user.email, "ada@example.com");
        assert!(full.kyc.is_none());
    }
}
