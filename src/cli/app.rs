//! Command handlers for the ocean-notes CLI.
//!
//! Dispatches parsed commands to the notes store and formats whatever it
//! returns. All lifecycle rules live in the store; this layer only renders.

use console::style;
use log::debug;

use crate::{
    helper::{note_summary, patch_from_fields},
    FileSlotStore, Note, NoteFilter, NotePatch, NotesStore, Result, Section,
};

/// CLI application handler - processes CLI commands against the notes store
pub struct App {
    /// The notes store backend
    store: NotesStore<FileSlotStore>,

    /// Whether to display verbose output
    verbose: bool,
}

impl App {
    /// Create a new CLI application over an opened store
    pub fn new(store: NotesStore<FileSlotStore>, verbose: bool) -> Self {
        Self { store, verbose }
    }

    /// Run the CLI application with the given command
    pub fn run(&mut self, command: crate::Commands) -> Result<()> {
        use crate::Commands;

        match command {
            Commands::New {
                title,
                content,
                tags,
                color,
            } => self.handle_new(title, content, tags, color),

            Commands::Edit {
                id,
                title,
                content,
                tags,
                color,
            } => self.handle_edit(&id, title, content, tags, color),

            Commands::List {
                section,
                tag,
                query,
                json,
            } => self.handle_list(section, tag, query, json)?,

            Commands::Pin { id } => self.handle_flag_patch(
                &id,
                NotePatch {
                    pinned: Some(true),
                    ..Default::default()
                },
                "pinned",
            ),

            Commands::Unpin { id } => self.handle_flag_patch(
                &id,
                NotePatch {
                    pinned: Some(false),
                    ..Default::default()
                },
                "unpinned",
            ),

            Commands::Archive { id } => {
                if self.store.archive_note(&id) {
                    println!("Note archived: {}", id);
                } else {
                    self.report_not_found(&id);
                }
            }

            Commands::Unarchive { id } => {
                if self.store.unarchive_note(&id) {
                    println!("Note unarchived: {}", id);
                } else {
                    self.report_not_found(&id);
                }
            }

            Commands::Delete { id } => self.handle_delete(&id),

            Commands::Restore { id } => {
                if self.store.restore_from_trash(&id) {
                    println!("Note restored from trash: {}", id);
                } else {
                    self.report_not_found(&id);
                }
            }

            Commands::Tags { add } => self.handle_tags(add),

            Commands::Active { id, clear } => self.handle_active(id, clear),
        }

        Ok(())
    }

    fn handle_new(
        &mut self,
        title: Option<String>,
        content: Option<String>,
        tags: Option<String>,
        color: Option<String>,
    ) {
        let id = self.store.create_note();
        if let Some(patch) = patch_from_fields(title, content, tags, color) {
            self.store.update_note(&id, patch);
        }
        println!("Note created with ID: {}", id);
    }

    fn handle_edit(
        &mut self,
        id: &str,
        title: Option<String>,
        content: Option<String>,
        tags: Option<String>,
        color: Option<String>,
    ) {
        let Some(patch) = patch_from_fields(title, content, tags, color) else {
            println!("Nothing to change; pass at least one field flag");
            return;
        };

        if self.store.update_note(id, patch) {
            println!("Note updated: {}", id);
        } else {
            self.report_not_found(id);
        }
    }

    fn handle_list(
        &mut self,
        section: Section,
        tag: Option<String>,
        query: Option<String>,
        json: bool,
    ) -> Result<()> {
        let filter = NoteFilter {
            section,
            tag,
            query,
        };
        debug!("Listing notes with filter: {:?}", filter);
        let notes = self.store.get_filtered_notes(&filter);

        if json {
            println!("{}", serde_json::to_string_pretty(&notes)?);
            return Ok(());
        }

        if notes.is_empty() {
            println!("No notes found");
            return Ok(());
        }

        for note in &notes {
            self.display_note(note);
        }
        println!("{} note(s)", notes.len());
        Ok(())
    }

    fn display_note(&self, note: &Note) {
        let active_marker = if self.store.active_note_id() == Some(note.id.as_str()) {
            "> "
        } else {
            "  "
        };
        println!("{}{}", active_marker, style(note_summary(note)).bold());

        if self.verbose {
            if !note.tags.is_empty() {
                println!("    Tags: {}", style(note.tags.join(", ")).cyan());
            }
            println!(
                "    Updated: {}",
                note.updated_at.format("%Y-%m-%d %H:%M:%S")
            );
            if !note.content.is_empty() {
                let preview: String = note.content.chars().take(80).collect();
                println!("    {}", style(preview).dim());
            }
        }
    }

    fn handle_flag_patch(&mut self, id: &str, patch: NotePatch, verb: &str) {
        if self.store.update_note(id, patch) {
            println!("Note {}: {}", verb, id);
        } else {
            self.report_not_found(id);
        }
    }

    fn handle_delete(&mut self, id: &str) {
        let already_trashed = self
            .store
            .get_note(id)
            .map(|n| n.trashed)
            .unwrap_or(false);

        if !self.store.delete_note(id) {
            self.report_not_found(id);
        } else if already_trashed {
            println!("Note permanently deleted: {}", id);
        } else {
            println!("Note moved to trash: {}", id);
        }
    }

    fn handle_tags(&mut self, add: Option<String>) {
        if let Some(name) = add {
            if self.store.add_tag(&name) {
                println!("Tag added: {}", name.trim());
            } else {
                println!("Tag not added (empty or already known): {}", name.trim());
            }
        }

        for tag in self.store.tags() {
            println!("{}", style(tag).cyan());
        }
    }

    fn handle_active(&mut self, id: Option<String>, clear: bool) {
        if clear {
            self.store.set_active_note(None);
            println!("Active note cleared");
            return;
        }

        if let Some(id) = id {
            self.store.set_active_note(Some(id.clone()));
            println!("Active note set: {}", id);
            return;
        }

        match self.store.active_note_id() {
            Some(id) => {
                let title = self
                    .store
                    .get_note(id)
                    .map(|n| n.title.clone())
                    .unwrap_or_default();
                println!("Active note: {}  {}", id, style(title).bold());
            }
            None => println!("No active note"),
        }
    }

    fn report_not_found(&self, id: &str) {
        println!("No note found with ID: {}", id);
    }
}
