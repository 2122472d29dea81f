/**
 * Providers Handler
 *
 * GET {base}/providers - lists the configured providers and the form
 * fields the credentials provider expects.
 */

use std::collections::BTreeMap;
use std::sync::Arc;

use axum::{extract::State, response::Json};

use crate::backend::auth::credentials::credential_fields;
use crate::backend::auth::handlers::types::ProviderInfo;
use crate::backend::auth::provider::CredentialsProvider;
use crate::shared::AuthConfig;

/// List providers, keyed by provider ID
///
/// # Example Response
///
/// ```json
/// {
///   "credentials": {
///     "id": "credentials",
///     "name": "Credentials",
///     "type": "credentials",
///     "callbackUrl": "/api/auth/callback/credentials",
///     "credentials": {
///       "email": { "type": "email", "label": "Email", "placeholder": "Enter email" },
///       "password": { "type": "password", "label": "Password", "placeholder": "Enter password" }
///     }
///   }
/// }
/// ```
pub async fn providers(
    State(config): State<Arc<AuthConfig>>,
    State(provider): State<CredentialsProvider>,
) -> Json<BTreeMap<&'static str, ProviderInfo>> {
    let info = ProviderInfo {
        id: provider.id(),
        name: provider.name(),
        provider_type: "credentials",
        callback_url: format!("{}/callback/{}", config.base_path, provider.id()),
        credentials: credential_fields(),
    };

    Json(BTreeMap::from([(provider.id(), info)]))
}
