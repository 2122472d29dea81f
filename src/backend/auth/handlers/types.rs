/**
 * Authentication Handler Types
 *
 * Request extractors and response bodies shared by the auth handlers.
 */

use std::collections::{BTreeMap, HashMap};

use axum::{
    extract::{FromRequest, FromRequestParts, Request},
    http::{header, request::Parts, StatusCode},
    Form, Json,
};
use serde::Serialize;

use crate::backend::auth::credentials::CredentialField;
use crate::backend::auth::sessions::Session;
use crate::backend::error::BackendError;

/// Untyped credentials payload
///
/// Accepts either a JSON body or an `application/x-www-form-urlencoded`
/// form; form fields become JSON strings.
#[derive(Debug, Clone)]
pub struct CredentialsPayload(pub serde_json::Value);

impl<S> FromRequest<S> for CredentialsPayload
where
    S: Send + Sync,
{
    type Rejection = BackendError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_form = req
            .headers()
            .get(header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|value| value.starts_with("application/x-www-form-urlencoded"));

        if is_form {
            let Form(fields) = Form::<HashMap<String, String>>::from_request(req, state)
                .await
                .map_err(|rejection| {
                    BackendError::handler(StatusCode::BAD_REQUEST, rejection.body_text())
                })?;
            let object = fields
                .into_iter()
                .map(|(key, value)| (key, serde_json::Value::String(value)))
                .collect();
            return Ok(Self(serde_json::Value::Object(object)));
        }

        let Json(value) = Json::<serde_json::Value>::from_request(req, state)
            .await
            .map_err(|rejection| BackendError::handler(rejection.status(), rejection.body_text()))?;
        Ok(Self(value))
    }
}

/// Bearer token from the `Authorization` header, if any
///
/// The scheme is matched case-insensitively. Never rejects; a missing or
/// malformed header yields `None`.
#[derive(Debug, Clone, Default)]
pub struct SessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .and_then(|h| h.split_once(' '))
            .filter(|(scheme, _)| scheme.eq_ignore_ascii_case("bearer"))
            .map(|(_, token)| token.trim())
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        Ok(Self(token))
    }
}

/// Where to send the client after signing in
///
/// Only same-origin relative paths from `callbackUrl` or `redirectTo` are
/// honored; anything else falls back to `/`.
pub fn redirect_target(credentials: &serde_json::Value) -> String {
    ["callbackUrl", "redirectTo"]
        .iter()
        .filter_map(|key| credentials.get(*key).and_then(|v| v.as_str()))
        .find(|url| url.starts_with('/') && !url.starts_with("//") && !url.contains('\\'))
        .unwrap_or("/")
        .to_string()
}

/// Sign-in response
#[derive(Serialize, Debug)]
pub struct SignInResponse {
    /// Session token; send it back as `Authorization: Bearer <token>`
    pub token: String,
    pub session: Session,
    /// Redirect target for the client
    pub url: String,
}

/// Sign-out response
#[derive(Serialize, Debug)]
pub struct SignOutResponse {
    pub url: String,
}

/// Public description of a provider
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct ProviderInfo {
    pub id: &'static str,
    pub name: &'static str,
    #[serde(rename = "type")]
    pub provider_type: &'static str,
    pub callback_url: String,
    pub credentials: BTreeMap<&'static str, CredentialField>,
}
