// src/infrastructure/oauth/google.rs
//! Google authorization-code flow with PKCE.
//!
//! [`GoogleIdentityProvider::authorization_request`] builds the consent URL
//! together with the CSRF state and PKCE verifier the callback must present.
//! [`GoogleIdentityProvider::exchange`] trades the code for an access token and
//! reads the OpenID userinfo document into a [`ProviderProfile`].

use crate::application::{
    error::{ApplicationError, ApplicationResult},
    ports::identity::{AuthorizationRequest, IdentityProvider, ProviderProfile},
};
use crate::domain::user::AuthProvider;
use async_trait::async_trait;
use oauth2::basic::BasicClient;
use oauth2::{
    AuthUrl, AuthorizationCode, ClientId, ClientSecret, CsrfToken, EndpointNotSet, EndpointSet,
    PkceCodeChallenge, PkceCodeVerifier, RedirectUrl, Scope, TokenResponse, TokenUrl,
};
use serde::Deserialize;

const GOOGLE_AUTH_URL: &str = "https://accounts.google.com/o/oauth2/v2/auth";
const GOOGLE_TOKEN_URL: &str = "https://oauth2.googleapis.com/token";
const GOOGLE_USERINFO_URL: &str = "https://openidconnect.googleapis.com/v1/userinfo";

type ConfiguredClient = oauth2::Client<
    oauth2::basic::BasicErrorResponse,
    oauth2::basic::BasicTokenResponse,
    oauth2::basic::BasicTokenIntrospectionResponse,
    oauth2::StandardRevocableToken,
    oauth2::basic::BasicRevocationErrorResponse,
    EndpointSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointNotSet,
    EndpointSet,
>;

#[derive(Debug, Clone)]
pub struct GoogleOAuthSettings {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_url: String,
}

/// OpenID userinfo document.
#[derive(Debug, Deserialize)]
struct GoogleUserInfo {
    sub: String,
    email: String,
    given_name: Option<String>,
    name: Option<String>,
    picture: Option<String>,
}

impl From<GoogleUserInfo> for ProviderProfile {
    fn from(info: GoogleUserInfo) -> Self {
        let given_name = info.given_name.or(info.name).unwrap_or_default();
        Self {
            provider: AuthProvider::Google,
            subject: info.sub,
            email: info.email,
            given_name,
            picture_url: info.picture,
        }
    }
}

pub struct GoogleIdentityProvider {
    client: ConfiguredClient,
    http: reqwest::Client,
}

impl GoogleIdentityProvider {
    pub fn new(settings: GoogleOAuthSettings) -> ApplicationResult<Self> {
        let client = BasicClient::new(ClientId::new(settings.client_id))
            .set_client_secret(ClientSecret::new(settings.client_secret))
            .set_auth_uri(invalid_config(AuthUrl::new(GOOGLE_AUTH_URL.to_string()))?)
            .set_token_uri(invalid_config(TokenUrl::new(GOOGLE_TOKEN_URL.to_string()))?)
            .set_redirect_uri(invalid_config(RedirectUrl::new(settings.redirect_url))?);

        // Token endpoint must not follow redirects.
        let http = reqwest::ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .build()
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

        Ok(Self { client, http })
    }

    async fn fetch_userinfo(&self, access_token: &str) -> ApplicationResult<GoogleUserInfo> {
        let response = self
            .http
            .get(GOOGLE_USERINFO_URL)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("userinfo request: {err}")))?;

        if !response.status().is_success() {
            return Err(ApplicationError::unauthorized(format!(
                "userinfo rejected the access token ({})",
                response.status()
            )));
        }

        response
            .json::<GoogleUserInfo>()
            .await
            .map_err(|err| ApplicationError::infrastructure(format!("userinfo payload: {err}")))
    }
}

fn invalid_config<T>(parsed: Result<T, oauth2::url::ParseError>) -> ApplicationResult<T> {
    parsed.map_err(|err| ApplicationError::infrastructure(format!("oauth endpoint: {err}")))
}

#[async_trait]
impl IdentityProvider for GoogleIdentityProvider {
    fn provider(&self) -> AuthProvider {
        AuthProvider::Google
    }

    fn authorization_request(&self) -> ApplicationResult<AuthorizationRequest> {
        let (pkce_challenge, pkce_verifier) = PkceCodeChallenge::new_random_sha256();

        let (url, csrf_state) = self
            .client
            .authorize_url(CsrfToken::new_random)
            .add_scope(Scope::new("openid".to_string()))
            .add_scope(Scope::new("email".to_string()))
            .add_scope(Scope::new("profile".to_string()))
            .set_pkce_challenge(pkce_challenge)
            .url();

        Ok(AuthorizationRequest {
            url: url.to_string(),
            csrf_state: csrf_state.secret().clone(),
            pkce_verifier: pkce_verifier.secret().clone(),
        })
    }

    async fn exchange(&self, code: &str, pkce_verifier: &str) -> ApplicationResult<ProviderProfile> {
        let token = self
            .client
            .exchange_code(AuthorizationCode::new(code.to_string()))
            .set_pkce_verifier(PkceCodeVerifier::new(pkce_verifier.to_string()))
            .request_async(&self.http)
            .await
            .map_err(|err| ApplicationError::unauthorized(format!("code exchange failed: {err}")))?;

        let info = self.fetch_userinfo(token.access_token().secret()).await?;
        tracing::debug!(subject = %info.sub, "fetched google profile");

        Ok(info.into())
    }
}
