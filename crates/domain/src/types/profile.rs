//! Profile records
//!
//! Profiles arrive from the list endpoint with unreliable optional fields.
//! Only `id` is mandatory; everything else may be missing or `null`.

use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};
use url::Url;

use crate::constants::{NO_EMAIL_LABEL, NO_NAME_LABEL};

/// Stable profile identity
pub type ProfileId = i64;

/// A single profile card.
///
/// Equality and hashing use `id` only, so two snapshots of the same person
/// compare equal even if their optional fields differ.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub id: ProfileId,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    #[serde(rename = "avatar")]
    pub avatar_url: Option<String>,
}

impl Profile {
    /// Create a profile with only its identity set.
    pub fn new(id: ProfileId) -> Self {
        Self { id, first_name: None, last_name: None, name: None, email: None, avatar_url: None }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_names(mut self, first: impl Into<String>, last: impl Into<String>) -> Self {
        self.first_name = Some(first.into());
        self.last_name = Some(last.into());
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = Some(email.into());
        self
    }

    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar_url = Some(avatar.into());
        self
    }

    /// `first_name` and `last_name` joined by a single space.
    ///
    /// Missing parts render as empty strings, so a profile without either
    /// yields `" "`. `name` is deliberately not consulted.
    pub fn display_name(&self) -> String {
        format!(
            "{} {}",
            self.first_name.as_deref().unwrap_or_default(),
            self.last_name.as_deref().unwrap_or_default()
        )
    }

    /// Label printed on the card face.
    pub fn card_title(&self) -> &str {
        self.name.as_deref().unwrap_or(NO_NAME_LABEL)
    }

    /// Where the card image should come from.
    pub fn avatar_source(&self) -> AvatarSource {
        self.avatar_url
            .as_deref()
            .and_then(|raw| Url::parse(raw).ok())
            .map_or(AvatarSource::Placeholder, AvatarSource::Remote)
    }
}

impl PartialEq for Profile {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Profile {}

impl Hash for Profile {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// Image to show for a profile
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarSource {
    Remote(Url),
    /// Bundled fallback artwork
    Placeholder,
}

/// Progress reported by the opaque image loading capability
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImagePhase {
    Pending,
    Loaded,
    Failed,
}

/// What the card should draw for its image slot
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AvatarView {
    /// Image still downloading
    Progress,
    Image(Url),
    Placeholder,
}

impl AvatarSource {
    /// Resolve what the view should draw for a given loading phase.
    pub fn resolve(&self, phase: ImagePhase) -> AvatarView {
        match (self, phase) {
            (Self::Placeholder, _) | (Self::Remote(_), ImagePhase::Failed) => {
                AvatarView::Placeholder
            }
            (Self::Remote(_), ImagePhase::Pending) => AvatarView::Progress,
            (Self::Remote(url), ImagePhase::Loaded) => AvatarView::Image(url.clone()),
        }
    }
}

/// View model handed to the detail presenter after a tap
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileDetail {
    pub id: ProfileId,
    pub title: String,
    pub email: String,
    pub avatar: AvatarSource,
}

impl From<&Profile> for ProfileDetail {
    fn from(profile: &Profile) -> Self {
        Self {
            id: profile.id,
            title: profile.card_title().to_string(),
            email: profile.email.as_deref().unwrap_or(NO_EMAIL_LABEL).to_string(),
            avatar: profile.avatar_source(),
        }
    }
}
