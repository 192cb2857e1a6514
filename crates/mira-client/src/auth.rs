//! Authentication endpoints.
//!
//! Login uses an OAuth2 form body (`username`/`password`); all other
//! auth endpoints are JSON. Successful login/2FA/refresh responses
//! install the returned token pair into the token manager.

use crate::error::{ClientError, ClientResult};
use crate::http::ApiClient;
use crate::query;
use mira_core::{LoginResponse, TokenPair, TwoFactorSetup, User, UserCreate};
use serde::{Deserialize, Serialize};
use tracing::{info, instrument, warn};

/// Generic `{ "message": ... }` acknowledgement.
#[derive(Debug, Clone, Deserialize)]
pub struct Ack {
    pub message: String,
}

#[derive(Serialize)]
struct LoginForm<'a> {
    // OAuth2 password grant uses "username" even though we log in by email.
    username: &'a str,
    password: &'a str,
}

#[derive(Serialize)]
struct TwoFactorVerify<'a> {
    pre_auth_token: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct TwoFactorConfirm<'a> {
    secret: &'a str,
    code: &'a str,
}

#[derive(Serialize)]
struct TwoFactorDisable<'a> {
    code: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    refresh_token: &'a str,
}

#[derive(Serialize)]
struct ForgotPassword<'a> {
    email: &'a str,
}

#[derive(Serialize)]
struct ResetPassword<'a> {
    token: &'a str,
    new_password: &'a str,
}

#[derive(Serialize)]
struct ChangePassword<'a> {
    old_password: &'a str,
    new_password: &'a str,
    confirm_password: &'a str,
}

impl ApiClient {
    /// Register a new user. Does not log in; the account must verify
    /// its email first.
    pub async fn register(&self, user: &UserCreate) -> ClientResult<User> {
        self.post_public("/auth/register", user).await
    }

    /// Login with email and password.
    ///
    /// Stores the token pair unless the account requires 2FA, in which
    /// case the caller must follow up with [`verify_2fa`].
    ///
    /// [`verify_2fa`]: ApiClient::verify_2fa
    #[instrument(skip(self, password), fields(email = %email))]
    pub async fn login(&self, email: &str, password: &str) -> ClientResult<LoginResponse> {
        let response: LoginResponse = self
            .post_form("/auth/login", &LoginForm { username: email, password })
            .await?;

        if let Some(pair) = response.tokens() {
            self.tokens().set_tokens(pair)?;
            info!("Login successful");
        } else if response.require_2fa {
            info!("Login pending 2FA verification");
        }

        Ok(response)
    }

    /// Complete a 2FA-gated login. Stores the issued pair.
    pub async fn verify_2fa(&self, pre_auth_token: &str, code: &str) -> ClientResult<TokenPair> {
        let pair: TokenPair = self
            .post_public("/auth/2fa/verify", &TwoFactorVerify { pre_auth_token, code })
            .await?;
        self.tokens().set_tokens(pair.clone())?;
        Ok(pair)
    }

    /// Begin 2FA enrollment: returns the TOTP secret and QR URI.
    pub async fn setup_2fa(&self) -> ClientResult<TwoFactorSetup> {
        self.post_empty("/auth/2fa/setup").await
    }

    /// Confirm 2FA enrollment with a code generated from the secret.
    pub async fn confirm_2fa(&self, secret: &str, code: &str) -> ClientResult<Ack> {
        self.post("/auth/2fa/confirm", &TwoFactorConfirm { secret, code })
            .await
    }

    /// Disable 2FA on the account.
    pub async fn disable_2fa(&self, code: &str) -> ClientResult<Ack> {
        self.post("/auth/2fa/disable", &TwoFactorDisable { code })
            .await
    }

    /// Explicitly exchange the stored refresh token for a new pair.
    ///
    /// The request executor refreshes transparently on 401; this is for
    /// callers that want to refresh ahead of expiry.
    pub async fn refresh(&self) -> ClientResult<TokenPair> {
        let Some(refresh_token) = self.tokens().refresh_token() else {
            return Err(ClientError::Api {
                code: "NO_REFRESH_TOKEN".to_string(),
                message: "No refresh token".to_string(),
                status: 401,
            });
        };

        let pair: TokenPair = self
            .post_public(
                "/auth/refresh",
                &RefreshRequest {
                    refresh_token: &refresh_token,
                },
            )
            .await?;
        self.tokens().set_tokens(pair.clone())?;
        Ok(pair)
    }

    /// Logout. The server call is best-effort; tokens are cleared
    /// locally regardless of its outcome.
    pub async fn logout(&self) -> ClientResult<()> {
        let result: ClientResult<Ack> = self.post_empty("/auth/logout").await;
        if let Err(e) = result {
            warn!(error = %e, "Server-side logout failed, clearing local tokens anyway");
        }
        self.tokens().clear()?;
        Ok(())
    }

    /// Request a password-reset email.
    pub async fn forgot_password(&self, email: &str) -> ClientResult<Ack> {
        self.post_public("/auth/forgot-password", &ForgotPassword { email })
            .await
    }

    /// Reset the password using an emailed token.
    pub async fn reset_password(&self, token: &str, new_password: &str) -> ClientResult<Ack> {
        self.post_public("/auth/reset-password", &ResetPassword { token, new_password })
            .await
    }

    /// Change the password of the authenticated account.
    pub async fn change_password(
        &self,
        old_password: &str,
        new_password: &str,
        confirm_password: &str,
    ) -> ClientResult<Ack> {
        self.post(
            "/auth/change-password",
            &ChangePassword {
                old_password,
                new_password,
                confirm_password,
            },
        )
        .await
    }

    /// Re-send the account verification email.
    pub async fn resend_verification(&self, email: &str) -> ClientResult<Ack> {
        let q = query::build(&[("email", Some(email.to_string()))]);
        self.request(
            reqwest::Method::POST,
            &format!("/auth/resend-verification{q}"),
            None::<&()>,
            crate::http::Auth::None,
        )
        .await
    }

    /// Verify the account email with an emailed token.
    pub async fn verify_email(&self, token: &str) -> ClientResult<Ack> {
        let q = query::build(&[("token", Some(token.to_string()))]);
        self.request(
            reqwest::Method::POST,
            &format!("/auth/verify-email{q}"),
            None::<&()>,
            crate::http::Auth::None,
        )
        .await
    }
}
