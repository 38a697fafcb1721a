// src/core/net.rs
// Thin blocking HTTP helpers. Everything runs sequentially, one request at a time.

use std::time::Duration;

use reqwest::blocking::{Client, RequestBuilder, Response};
use serde::{Serialize, de::DeserializeOwned};

use crate::config::consts::USER_AGENT;
use crate::error::{Result, RosterError};

pub fn client() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).build()?)
}

fn send(req: RequestBuilder, url: &str, timeout_secs: u64) -> Result<Response> {
    let resp = req.timeout(Duration::from_secs(timeout_secs)).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(RosterError::Status { status: status.as_u16(), url: s!(url) });
    }
    Ok(resp)
}

/// GET and return the body as text. Non-2xx is an error.
pub fn get_text(client: &Client, url: &str, timeout_secs: u64) -> Result<String> {
    logd!("GET {url}");
    Ok(send(client.get(url), url, timeout_secs)?.text()?)
}

/// GET and decode a JSON body.
pub fn get_json<T: DeserializeOwned>(client: &Client, url: &str, timeout_secs: u64) -> Result<T> {
    logd!("GET {url}");
    Ok(send(client.get(url), url, timeout_secs)?.json()?)
}

/// GET raw bytes.
pub fn get_bytes(client: &Client, url: &str, timeout_secs: u64) -> Result<Vec<u8>> {
    logd!("GET {url} (bytes)");
    Ok(send(client.get(url), url, timeout_secs)?.bytes()?.to_vec())
}

/// POST a JSON body and decode a JSON reply.
pub fn post_json<B, T>(client: &Client, url: &str, body: &B, timeout_secs: u64) -> Result<T>
where
    B: Serialize + ?Sized,
    T: DeserializeOwned,
{
    logd!("POST {url}");
    Ok(send(client.post(url).json(body), url, timeout_secs)?.json()?)
}
