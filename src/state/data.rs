/// Shared data structures for the application state
///
/// These structs represent the data model that flows between
/// the store layer and the UI layer.

use serde::{Deserialize, Serialize};

/// A single movie in the catalog
///
/// The title is unique within the catalog and acts as the identity key
/// for favorites and selection. Records are serialized to JSON when the
/// favorites list is mirrored to the store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MovieRecord {
    /// Display title (e.g., "Interstellar")
    pub title: String,
    /// Poster URL, carried in the record and persisted with favorites.
    /// Never fetched; the app makes no network calls.
    pub image: String,
    /// Viewer rating on a 0.0 to 5.0 scale
    pub rating: f32,
    /// Short synopsis shown on the card and in the detail view
    pub description: String,
}
