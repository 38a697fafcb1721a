// src/specs/roblox.rs

use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use super::{AvatarSource, Identity, IdentityLookup};
use crate::config::consts::{
    API_TIMEOUT_SECS, DOWNLOAD_TIMEOUT_SECS, FALLBACK_AVATAR, HEADSHOT_SIZE, HEADSHOT_URL,
    USERS_LOOKUP_URL,
};
use crate::core::net;
use crate::error::{Result, RosterError};

/* ---------- wire shapes ---------- */

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct UsernamesRequest<'a> {
    usernames: [&'a str; 1],
    exclude_banned_users: bool,
}

#[derive(Deserialize)]
struct DataEnvelope<T> {
    #[serde(default = "Vec::new")]
    data: Vec<T>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct UserEntry {
    id: u64,
    name: String,
    #[serde(default)]
    display_name: Option<String>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ThumbnailEntry {
    #[serde(default)]
    image_url: Option<String>,
}

impl From<UserEntry> for Identity {
    fn from(u: UserEntry) -> Self {
        let display_name = match u.display_name {
            Some(d) if !d.is_empty() => d,
            _ => u.name.clone(),
        };
        Identity { id: u.id, handle: u.name, display_name }
    }
}

/// First user in a lookup reply, if any.
fn first_identity(body: DataEnvelope<UserEntry>) -> Option<Identity> {
    body.data.into_iter().next().map(Identity::from)
}

/// First non-empty image URL in a headshot reply, if any.
fn first_image_url(body: DataEnvelope<ThumbnailEntry>) -> Option<String> {
    body.data.into_iter().next()?.image_url.filter(|u| !u.is_empty())
}

pub fn headshot_url(id: u64) -> String {
    format!(
        "{HEADSHOT_URL}?userIds={id}&size={HEADSHOT_SIZE}x{HEADSHOT_SIZE}&format=Png&isCircular=false"
    )
}

/* ---------- live client ---------- */

pub struct RobloxApi {
    client: Client,
}

impl RobloxApi {
    pub fn new(client: Client) -> Self {
        Self { client }
    }
}

impl IdentityLookup for RobloxApi {
    fn lookup(&mut self, handle: &str) -> Option<Identity> {
        let req = UsernamesRequest { usernames: [handle], exclude_banned_users: false };
        match net::post_json::<_, DataEnvelope<UserEntry>>(&self.client, USERS_LOOKUP_URL, &req, API_TIMEOUT_SECS) {
            Ok(body) => {
                let found = first_identity(body);
                if found.is_none() {
                    logd!("No user for handle {handle:?}");
                }
                found
            }
            Err(e) => {
                logw!("User lookup for {handle:?} failed: {e}");
                None
            }
        }
    }
}

impl AvatarSource for RobloxApi {
    fn avatar_url(&mut self, id: u64) -> String {
        let url = headshot_url(id);
        match net::get_json::<DataEnvelope<ThumbnailEntry>>(&self.client, &url, API_TIMEOUT_SECS) {
            Ok(body) => first_image_url(body).unwrap_or_else(|| {
                logw!("No headshot for user {id}; using fallback");
                s!(FALLBACK_AVATAR)
            }),
            Err(e) => {
                loge!("Avatar fetch error for user {id}: {e}");
                s!(FALLBACK_AVATAR)
            }
        }
    }

    fn fetch_image(&mut self, url: &str) -> Result<Vec<u8>> {
        let bytes = net::get_bytes(&self.client, url, DOWNLOAD_TIMEOUT_SECS)?;
        match image::guess_format(&bytes) {
            Ok(image::ImageFormat::Png) => Ok(bytes),
            _ => Err(RosterError::NotPng { url: s!(url) }),
        }
    }
}
