//! Core note model for the ocean-notes application.
//!
//! This module contains the `Note` record itself plus `NotePatch`, the
//! structured partial-update type accepted by the store's update operation.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Color assigned to freshly created notes.
pub const DEFAULT_NOTE_COLOR: &str = "#FFFFFF";

const SEED_NOTE_TITLE: &str = "Welcome to Ocean Notes";
const SEED_NOTE_COLOR: &str = "#FCE7F3";
const SEED_NOTE_CONTENT: &str = "Create, edit, and organize your thoughts with a splash of color!\n\nUse the sidebar to filter by tags or sections, and try pinning important notes.";

/// Represents a single note in the store
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    /// Unique identifier for the note, immutable after creation
    pub id: String,
    /// Note title
    pub title: String,
    /// Note content as free text
    pub content: String,
    /// Tags for organization, in insertion order
    pub tags: Vec<String>,
    /// Display color hint, opaque to the store
    pub color: String,
    /// Whether the note is pinned to the top of listings
    #[serde(default)]
    pub pinned: bool,
    /// Whether the note is archived
    #[serde(default)]
    pub archived: bool,
    /// Whether the note is in the trash
    #[serde(default)]
    pub trashed: bool,
    /// When the note was created
    pub created_at: DateTime<Utc>,
    /// Last modification time
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Creates a new empty note with a fresh id and current timestamps
    pub fn new() -> Self {
        let now = Utc::now();
        Note {
            id: Uuid::new_v4().to_string(),
            title: String::new(),
            content: String::new(),
            tags: Vec::new(),
            color: DEFAULT_NOTE_COLOR.to_string(),
            pinned: false,
            archived: false,
            trashed: false,
            created_at: now,
            updated_at: now,
        }
    }

    /// Creates the welcome note seeded into an empty collection
    pub fn seed() -> Self {
        let mut note = Note::new();
        note.title = SEED_NOTE_TITLE.to_string();
        note.content = SEED_NOTE_CONTENT.to_string();
        note.tags = vec!["ideas".to_string()];
        note.color = SEED_NOTE_COLOR.to_string();
        note.pinned = true;
        note
    }

    /// Merges a patch into this note. Supplied fields override the existing
    /// values; absent fields leave them untouched. Does not refresh the
    /// modification timestamp; the store does that on every update.
    pub fn apply_patch(&mut self, patch: NotePatch) {
        if let Some(title) = patch.title {
            self.title = title;
        }
        if let Some(content) = patch.content {
            self.content = content;
        }
        if let Some(tags) = patch.tags {
            self.tags = tags;
        }
        if let Some(color) = patch.color {
            self.color = color;
        }
        if let Some(pinned) = patch.pinned {
            self.pinned = pinned;
        }
        if let Some(archived) = patch.archived {
            self.archived = archived;
        }
        if let Some(trashed) = patch.trashed {
            self.trashed = trashed;
        }
    }

    /// Refreshes the modification timestamp
    pub(crate) fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl Default for Note {
    fn default() -> Self {
        Note::new()
    }
}

/// A partial update to a note.
///
/// Every observable field is optional; the note's id and creation time are
/// not patchable.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct NotePatch {
    pub title: Option<String>,
    pub content: Option<String>,
    pub tags: Option<Vec<String>>,
    pub color: Option<String>,
    pub pinned: Option<bool>,
    pub archived: Option<bool>,
    pub trashed: Option<bool>,
}
