//! Session token source for store requests

use async_trait::async_trait;
use ql_store::TokenProvider;
use std::env;

/// Reads the session's bearer token from `QL_ACCESS_TOKEN`
///
/// The variable is read on every request, so a rotated token is picked up
/// without restarting. An unset or empty variable means the request goes
/// out unauthenticated.
pub struct EnvSession;

#[async_trait]
impl TokenProvider for EnvSession {
    async fn access_token(&self) -> Option<String> {
        env::var("QL_ACCESS_TOKEN").ok().filter(|t| !t.is_empty())
    }
}
