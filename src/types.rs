//! Shared types for the ocean-notes application.
//!
//! This module contains the query types consumed by the filter engine and
//! the CLI command structure.

use clap::{Subcommand, ValueEnum};

use crate::NotesError;

/// A specialized Result type for ocean-notes operations.
pub type Result<T> = std::result::Result<T, NotesError>;

/// The four views used to scope a note query.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum Section {
    /// Notes that are neither archived nor trashed
    #[default]
    All,
    /// Pinned notes that are neither archived nor trashed
    Pinned,
    /// Archived notes that are not trashed
    Archived,
    /// Trashed notes, regardless of other flags
    Trash,
}

/// Query input for `NotesStore::get_filtered_notes`.
///
/// The three dimensions are independent and compose as a logical AND.
#[derive(Debug, Clone, Default)]
pub struct NoteFilter {
    /// Section scoping the view
    pub section: Section,
    /// Exact, case-sensitive tag match; `Some("all")` is treated as unset
    pub tag: Option<String>,
    /// Case-insensitive substring match against title or content
    pub query: Option<String>,
}

/// Available subcommands for the ocean-notes application
#[derive(Subcommand)]
pub enum Commands {
    /// Create a new note and print its id
    New {
        /// Title of the note
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// Content of the note
        #[clap(short, long)]
        content: Option<String>,

        /// Tags to associate with the note (comma-separated)
        #[clap(short, long)]
        tags: Option<String>,

        /// Display color hint, e.g. "#FCE7F3"
        #[clap(long)]
        color: Option<String>,
    },

    /// Edit fields of an existing note
    Edit {
        /// ID of the note to edit
        id: String,

        /// New title for the note
        #[clap(short = 'T', long)]
        title: Option<String>,

        /// New content for the note
        #[clap(short, long)]
        content: Option<String>,

        /// Replacement tags for the note (comma-separated)
        #[clap(short, long)]
        tags: Option<String>,

        /// New display color hint
        #[clap(long)]
        color: Option<String>,
    },

    /// List notes with optional filtering
    List {
        /// Section to list
        #[clap(short, long, value_enum, default_value = "all")]
        section: Section,

        /// Filter notes by exact tag
        #[clap(short, long)]
        tag: Option<String>,

        /// Case-insensitive search in title and content
        #[clap(short, long)]
        query: Option<String>,

        /// Format output as JSON
        #[clap(short, long)]
        json: bool,
    },

    /// Pin a note to the top of listings
    Pin {
        /// ID of the note to pin
        id: String,
    },

    /// Unpin a note
    Unpin {
        /// ID of the note to unpin
        id: String,
    },

    /// Archive a note
    Archive {
        /// ID of the note to archive
        id: String,
    },

    /// Move a note out of the archive
    Unarchive {
        /// ID of the note to unarchive
        id: String,
    },

    /// Move a note to the trash, or delete it permanently if already trashed
    Delete {
        /// ID of the note to delete
        id: String,
    },

    /// Restore a note from the trash
    Restore {
        /// ID of the note to restore
        id: String,
    },

    /// List known tags, or register a new one
    Tags {
        /// Tag to add to the registry
        #[clap(short, long)]
        add: Option<String>,
    },

    /// Show or change the active note
    Active {
        /// ID of the note to make active
        id: Option<String>,

        /// Clear the active note
        #[clap(long)]
        clear: bool,
    },
}
