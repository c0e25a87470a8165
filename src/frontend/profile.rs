//! Company profile editor
//!
//! The profile (name, phone, optional logo) lives under a single local
//! storage key as JSON. Logos are stored inline as `data:` URLs.

use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde::{Deserialize, Serialize};

use super::html::escape_html;
use super::storage::LocalStore;
use crate::error::{Result, StoreError};

/// Local storage key holding the profile JSON
pub const PROFILE_KEY: &str = "companyProfile";

/// Company details shown on quotes
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyProfile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub phone: String,

    /// `data:<mime>;base64,<payload>`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,
}

impl CompanyProfile {
    /// Read the stored profile, if any
    pub fn load<S: LocalStore>(store: &S) -> Result<Option<Self>> {
        let Some(raw) = store.get_item(PROFILE_KEY)? else {
            return Ok(None);
        };

        serde_json::from_str(&raw).map(Some).map_err(|e| {
            StoreError::Corrupt {
                key: PROFILE_KEY.to_string(),
                reason: e.to_string(),
            }
            .into()
        })
    }

    pub fn store<S: LocalStore>(&self, store: &mut S) -> Result<()> {
        let json = serde_json::to_string(self)?;
        store.set_item(PROFILE_KEY, &json)?;
        Ok(())
    }
}

/// An image chosen for upload
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogoUpload {
    pub media_type: String,
    pub bytes: Vec<u8>,
}

impl LogoUpload {
    pub fn new(media_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            media_type: media_type.into(),
            bytes,
        }
    }

    /// Read an image file, guessing its media type from the extension
    pub async fn read(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let bytes = tokio::fs::read(path).await?;
        log::debug!("Read {} byte logo from {}", bytes.len(), path.display());
        Ok(Self::new(media_type_for(path), bytes))
    }

    pub fn to_data_url(&self) -> String {
        format!("data:{};base64,{}", self.media_type, STANDARD.encode(&self.bytes))
    }
}

fn media_type_for(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());

    match extension.as_deref() {
        Some("png") => "image/png",
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("gif") => "image/gif",
        Some("svg") => "image/svg+xml",
        Some("webp") => "image/webp",
        Some("bmp") => "image/bmp",
        Some("ico") => "image/x-icon",
        _ => "application/octet-stream",
    }
}

/// Profile form backed by local storage
pub struct ProfileEditor<S> {
    store: S,
}

impl<S: LocalStore> ProfileEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn load(&self) -> Result<Option<CompanyProfile>> {
        CompanyProfile::load(&self.store)
    }

    /// Overwrite the stored profile.
    ///
    /// Without a new logo the previously stored one is kept unchanged.
    pub fn save(
        &mut self,
        name: &str,
        phone: &str,
        logo: Option<LogoUpload>,
    ) -> Result<CompanyProfile> {
        let logo = match logo {
            Some(upload) => Some(upload.to_data_url()),
            None => self.load()?.and_then(|existing| existing.logo),
        };

        let profile = CompanyProfile {
            name: name.trim().to_string(),
            phone: phone.trim().to_string(),
            logo,
        };
        profile.store(&mut self.store)?;
        log::info!("Saved company profile '{}'", profile.name);

        Ok(profile)
    }

    /// Preview fragment for the stored profile, empty when none is stored
    pub fn preview_html(&self) -> Result<String> {
        Ok(self.load()?.map(|p| preview_html(&p)).unwrap_or_default())
    }

    pub fn into_store(self) -> S {
        self.store
    }
}

fn preview_html(profile: &CompanyProfile) -> String {
    let logo = profile
        .logo
        .as_ref()
        .map(|src| format!(r#"<img id="previewLogo" src="{}" alt="Company logo">"#, escape_html(src)))
        .unwrap_or_default();

    format!(
        r#"<div id="profilePreview">{}<h3 id="previewName">{}</h3><p id="previewPhone">{}</p></div>"#,
        logo,
        escape_html(&profile.name),
        escape_html(&profile.phone)
    )
}
