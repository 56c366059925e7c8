//! Wire DTOs exchanged verbatim with the backend.
//!
//! DESIGN
//! ======
//! These records mirror the backend's JSON bodies field for field. The
//! client never transforms or dedups them; each collection is a set keyed
//! by its identity field as enforced by the backend.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A growing-advice entry, keyed by `crop_name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tip {
    pub crop_name: String,
    pub crop_tips: String,
}

/// A crop disease entry, keyed by `disease_name`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Disease {
    pub disease_name: String,
    /// Crop the disease affects.
    pub crop_name: String,
    pub cure: String,
    /// Free-text prevalence description (e.g. `"common"`, `"rare"`).
    pub commonness: String,
}

/// A published news article, keyed by `title`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsArticle {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub author_name: String,
    /// Publication time (ISO datetime), stamped by the backend.
    #[serde(default)]
    pub timestamp: String,
}

/// The add-news payload: a `NewsArticle` minus the backend-stamped timestamp.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewsDraft {
    pub title: String,
    pub subtitle: String,
    pub content: String,
    pub author_name: String,
}

/// One user prediction-history row, keyed by `image_id`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct HistoryRecord {
    pub image_id: i64,
    pub username: String,
    pub summary: String,
    pub model_chosen: String,
    pub crop_name: String,
    /// URL of the annotated image, when processing produced one.
    #[serde(default)]
    pub processed_image_url: Option<String>,
    /// Upload time (ISO datetime).
    pub created_at: String,
}

/// The authenticated admin as reported by `GET /auth/me`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AdminUser {
    pub username: String,
    pub is_admin: bool,
}

/// Envelope for `GET /api/tips`.
#[derive(Debug, PartialEq, Deserialize)]
pub struct TipListResponse {
    pub tips: Vec<Tip>,
}

/// Envelope for `GET /api/diseases`.
#[derive(Debug, PartialEq, Deserialize)]
pub struct DiseaseListResponse {
    pub diseases: Vec<Disease>,
}

/// Envelope for `GET /api/news`.
#[derive(Debug, PartialEq, Deserialize)]
pub struct NewsListResponse {
    pub news: Vec<NewsArticle>,
}
