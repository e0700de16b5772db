use std::path::PathBuf;

use crate::post::post_model::Author;
use crate::utils::error::CustomError;

/// Profile of the person browsing the feed; shown in the sidebar and used
/// as the author of every comment they write.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewerProfile {
    pub author: Author,
    pub cover_url: String,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub seed_path: Option<PathBuf>,
    pub viewer: ViewerProfile,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, CustomError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, CustomError> {
        let get = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| CustomError::BadRequestError(format!("Invalid PORT value: {}", raw)))?,
            None => 8000,
        };

        let seed_path = lookup("FEED_SEED_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from);

        Ok(AppConfig {
            host: get("HOST", "localhost"),
            port,
            seed_path,
            viewer: ViewerProfile {
                author: Author {
                    name: get("VIEWER_NAME", "Bruno Padilha"),
                    avatar_url: get(
                        "VIEWER_AVATAR_URL",
                        "https://avatars.githubusercontent.com/u/37818334?v=4",
                    ),
                    role: get("VIEWER_ROLE", "Web Developer"),
                },
                cover_url: get(
                    "VIEWER_COVER_URL",
                    "https://images.unsplash.com/photo-1604964432806-254d07c11f32?w=500&q=50",
                ),
            },
        })
    }
}

/// Viewer built from the defaults, for tests that need a commenter
#[cfg(test)]
pub fn default_viewer() -> ViewerProfile {
    AppConfig::from_lookup(|_| None)
        .expect("defaults always parse")
        .viewer
}
