use std::{sync::Arc, time::Duration};

use chrono::Utc;
use reqwest::{Client, RequestBuilder, Url};
use tokio::sync::Mutex;

use crate::{
    Res, config,
    management::TokenManager,
    server::start_api_server,
    types::{PkceToken, Token, TokenResponse},
    utils, warning,
};

/// Runs the OAuth 2.0 authorization code flow with PKCE against Spotify.
///
/// 1. Generates the PKCE code verifier and its S256 challenge
/// 2. Starts the local callback server
/// 3. Opens the authorization URL in the user's browser
/// 4. Waits up to 60 seconds for the callback to deliver a token
/// 5. Persists the token for later `sync` runs
///
/// # Arguments
///
/// * `shared_state` - PKCE state shared with the callback handler, which
///   stores the exchanged token into it
///
/// # Errors
///
/// Fails on missing configuration, on timeout, or when the token cannot be
/// written to the cache.
pub async fn auth(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Res<()> {
    let code_verifier = utils::generate_code_verifier();
    let code_challenge = utils::generate_code_challenge(&code_verifier);

    let auth_url = authorize_url(
        &config::spotify_apiauth_url(),
        &config::spotify_client_id()?,
        &config::spotify_redirect_uri()?,
        &config::spotify_scope(),
        &code_challenge,
    )?;

    // Store verifier in shared state before redirect
    {
        let mut lock = shared_state.lock().await;
        *lock = Some(PkceToken {
            code_verifier: code_verifier.clone(),
            token: None,
        });
    }

    let server_state = Arc::clone(&shared_state);
    tokio::spawn(async move {
        if let Err(e) = start_api_server(server_state).await {
            warning!("Callback server stopped: {}", e);
        }
    });

    if webbrowser::open(auth_url.as_str()).is_err() {
        warning!(
            "Failed to open browser. Please navigate to the following URL manually:\n{}",
            auth_url
        )
    }

    let token = wait_for_token(shared_state)
        .await
        .ok_or("Authentication failed or timed out.")?;

    TokenManager::new(token).persist().await?;

    Ok(())
}

/// Builds the Spotify authorization URL with all query parameters encoded.
pub fn authorize_url(
    base: &str,
    client_id: &str,
    redirect_uri: &str,
    scope: &str,
    code_challenge: &str,
) -> Res<Url> {
    let url = Url::parse_with_params(
        base,
        &[
            ("client_id", client_id),
            ("response_type", "code"),
            ("redirect_uri", redirect_uri),
            ("code_challenge", code_challenge),
            ("code_challenge_method", "S256"),
            ("scope", scope),
        ],
    )?;
    Ok(url)
}

/// Polls the shared state once per second, for at most 60 seconds, until the
/// callback handler has stored a token.
async fn wait_for_token(shared_state: Arc<Mutex<Option<PkceToken>>>) -> Option<Token> {
    use std::time::Instant;

    let max_wait = Duration::from_secs(60);
    let start = Instant::now();

    while start.elapsed() < max_wait {
        let lock = shared_state.lock().await;
        if let Some(token) = lock.as_ref().and_then(|p| p.token.as_ref()) {
            return Some(token.clone());
        }
        drop(lock);
        tokio::time::sleep(Duration::from_secs(1)).await;
    }

    None
}

/// Exchanges an authorization code for a token.
///
/// The verifier must be the one whose challenge was sent with the
/// authorization request. When a client secret is configured it is sent as
/// HTTP Basic credentials; otherwise the client ID goes into the form body.
pub async fn exchange_code_pkce(code: &str, verifier: &str) -> Res<Token> {
    let redirect_uri = config::spotify_redirect_uri()?;

    let form = vec![
        ("grant_type", "authorization_code".to_string()),
        ("code", code.to_string()),
        ("code_verifier", verifier.to_string()),
        ("redirect_uri", redirect_uri),
    ];

    let response = token_request(form)?.send().await?.error_for_status()?;
    let json = response.json::<TokenResponse>().await?;

    Ok(into_token(json, None))
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may or may not rotate the refresh token; when the response has
/// none, the current one is kept.
pub async fn refresh_token(refresh_token: &str) -> Res<Token> {
    let form = vec![
        ("grant_type", "refresh_token".to_string()),
        ("refresh_token", refresh_token.to_string()),
    ];

    let response = token_request(form)?.send().await?.error_for_status()?;
    let json = response.json::<TokenResponse>().await?;

    Ok(into_token(json, Some(refresh_token)))
}

fn token_request(mut form: Vec<(&'static str, String)>) -> Res<RequestBuilder> {
    let client_id = config::spotify_client_id()?;
    let request = Client::new().post(config::spotify_apitoken_url());

    let request = match config::spotify_client_secret() {
        Some(secret) => request.basic_auth(client_id, Some(secret)),
        None => {
            form.push(("client_id", client_id));
            request
        }
    };

    Ok(request.form(&form))
}

/// Converts a token endpoint response, keeping `fallback_refresh` when the
/// response carries no refresh token.
pub fn into_token(json: TokenResponse, fallback_refresh: Option<&str>) -> Token {
    Token {
        access_token: json.access_token,
        refresh_token: json
            .refresh_token
            .or_else(|| fallback_refresh.map(str::to_string))
            .unwrap_or_default(),
        scope: json.scope,
        expires_in: json.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    }
}
