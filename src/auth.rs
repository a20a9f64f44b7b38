use anyhow::{Context, Result};
use rspotify::{ClientCredsSpotify, Config, Credentials};

pub const CLIENT_ID_VAR: &str = "SPOTIFY_CLIENT_ID";
pub const CLIENT_SECRET_VAR: &str = "SPOTIFY_CLIENT_SECRET";

/// Read the client id/secret pair from the environment. Read once at
/// startup; there is no rotation or runtime reconfiguration.
pub fn credentials_from_env() -> Result<Credentials> {
    let id = std::env::var(CLIENT_ID_VAR)
        .with_context(|| format!("{CLIENT_ID_VAR} is not set"))?;
    let secret = std::env::var(CLIENT_SECRET_VAR)
        .with_context(|| format!("{CLIENT_SECRET_VAR} is not set"))?;
    Ok(Credentials::new(&id, &secret))
}

/// Exchange the credentials for a session bearer token via the
/// client-credentials grant. The token lives for the whole session: caching
/// and refreshing are disabled, so an expired token stays expired until the
/// app is restarted.
pub async fn request_session_token(credentials: Credentials) -> Result<ClientCredsSpotify> {
    let spotify = ClientCredsSpotify::with_config(
        credentials,
        Config {
            token_cached: false,
            token_refreshing: false,
            ..Default::default()
        },
    );

    spotify
        .request_token()
        .await
        .context("client credentials token request failed")?;

    tracing::info!("session token acquired");
    Ok(spotify)
}
