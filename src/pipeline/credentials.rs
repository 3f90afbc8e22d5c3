use tracing::debug;

use crate::Result;
use crate::client::ChatClient;
use crate::models::{AdminCredential, AuthHeaders};

/// Turn the configured admin identity into headers for authenticated calls.
///
/// A static token needs no network call; a login pair costs one login request.
pub async fn resolve(client: &ChatClient, credential: &AdminCredential) -> Result<AuthHeaders> {
    debug!(kind = credential.kind(), "resolving admin credential");

    match credential {
        AdminCredential::StaticToken { user_id, token } => {
            Ok(AuthHeaders::new(token.clone(), user_id.clone()))
        }
        AdminCredential::LoginPair { username, password } => {
            client.login(username, password).await
        }
    }
}
