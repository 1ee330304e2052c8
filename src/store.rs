//! The notes state store.
//!
//! `NotesStore` owns the note collection, the tag registry, and the
//! active-note pointer for the lifetime of the process, and is the single
//! source of truth for all three. Every mutation enforces the lifecycle
//! invariants (a pinned note is never archived or trashed), refreshes the
//! modification timestamp, and synchronously persists a full snapshot
//! through the slot store it was constructed over.
//!
//! Operating on a missing note id is a no-op signalled by a `false` return
//! rather than an error, and persistence failures never propagate to the
//! caller: in-memory state stays authoritative for the rest of the session
//! even when durability is lost.

use log::{debug, info, warn};
use serde::de::DeserializeOwned;

use crate::{
    persistence::{SlotStore, ACTIVE_SLOT, NOTES_SLOT, TAGS_SLOT},
    Note, NoteFilter, NotePatch, Section,
};

/// Tag registry used when no tag slot has been persisted yet.
pub const DEFAULT_TAGS: [&str; 3] = ["work", "personal", "ideas"];

/// Manages the in-memory note collection and its persistence.
///
/// Constructed exactly once by the entry point and handed to all consumers;
/// the store assumes a single synchronous caller and holds no locks.
pub struct NotesStore<S: SlotStore> {
    /// Persistence backend for the three state slots
    slots: S,

    /// The note collection, most recently created first
    notes: Vec<Note>,

    /// Known tag names, sorted lexicographically, no duplicates
    tags: Vec<String>,

    /// Id of the note currently selected for editing
    active_note_id: Option<String>,

    /// Whether the most recent persist wrote every slot
    last_persist_ok: bool,
}

impl<S: SlotStore> NotesStore<S> {
    /// Opens a store over the given slot store and loads persisted state.
    ///
    /// Each slot falls back to its default when absent or malformed, so a
    /// damaged slot never prevents startup. An empty collection is seeded
    /// with the welcome note, which is then set active and persisted.
    pub fn open(slots: S) -> Self {
        let mut tags: Vec<String> = DEFAULT_TAGS.iter().map(|t| t.to_string()).collect();
        tags.sort();

        let mut store = Self {
            slots,
            notes: Vec::new(),
            tags,
            active_note_id: None,
            last_persist_ok: true,
        };
        store.load();
        store
    }

    fn load(&mut self) {
        if let Some(notes) = self.load_slot::<Vec<Note>>(NOTES_SLOT) {
            self.notes = notes;
        }
        if let Some(tags) = self.load_slot::<Vec<String>>(TAGS_SLOT) {
            self.tags = tags;
        }
        if let Some(active) = self.load_slot::<Option<String>>(ACTIVE_SLOT) {
            self.active_note_id = active;
        }

        info!(
            "Loaded {} notes and {} tags from storage",
            self.notes.len(),
            self.tags.len()
        );

        if self.notes.is_empty() {
            debug!("Note collection is empty, seeding welcome note");
            let note = Note::seed();
            self.active_note_id = Some(note.id.clone());
            self.notes.push(note);
            self.persist();
        }
    }

    /// Reads and parses one slot. Absent, unreadable, or malformed slots
    /// yield `None` so the caller keeps that slot's default.
    fn load_slot<T: DeserializeOwned>(&self, key: &str) -> Option<T> {
        match self.slots.read_slot(key) {
            Ok(Some(raw)) => match serde_json::from_str(&raw) {
                Ok(value) => Some(value),
                Err(e) => {
                    warn!("Slot {} holds malformed data, using default: {}", key, e);
                    None
                }
            },
            Ok(None) => None,
            Err(e) => {
                warn!("Failed to read slot {}, using default: {}", key, e);
                None
            }
        }
    }

    /// Serializes and writes all three slots.
    ///
    /// Failures are logged and suppressed; the in-memory state remains
    /// authoritative for the rest of the session. Returns whether every
    /// slot was written.
    pub fn persist(&mut self) -> bool {
        let payloads = [
            (NOTES_SLOT, serde_json::to_string(&self.notes)),
            (TAGS_SLOT, serde_json::to_string(&self.tags)),
            (ACTIVE_SLOT, serde_json::to_string(&self.active_note_id)),
        ];

        let mut ok = true;
        for (key, payload) in payloads {
            let written = match payload {
                Ok(json) => match self.slots.write_slot(key, &json) {
                    Ok(()) => true,
                    Err(e) => {
                        warn!("Failed to write slot {}: {}", key, e);
                        false
                    }
                },
                Err(e) => {
                    warn!("Failed to serialize slot {}: {}", key, e);
                    false
                }
            };
            ok &= written;
        }

        if ok {
            debug!("Persisted all slots");
        }
        self.last_persist_ok = ok;
        ok
    }

    /// Creates a new empty note at the front of the collection, makes it
    /// the active note, and persists. Returns the new note's id.
    pub fn create_note(&mut self) -> String {
        let note = Note::new();
        let id = note.id.clone();
        info!("Creating note: {}", id);
        self.notes.insert(0, note);
        self.active_note_id = Some(id.clone());
        self.persist();
        id
    }

    /// Merges `patch` into the note with `id`, refreshing its modification
    /// timestamp regardless of which fields changed. Returns `false` when
    /// no such note exists.
    pub fn update_note(&mut self, id: &str, patch: NotePatch) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            debug!("Cannot update note {}: not found", id);
            return false;
        };

        note.apply_patch(patch);
        // A note in the archive or the trash never keeps its pin.
        if note.archived || note.trashed {
            note.pinned = false;
        }
        note.touch();
        self.persist();
        true
    }

    /// Soft-deletes the note into the trash, or removes it permanently when
    /// it is already trashed. The hard-delete path clears the active
    /// pointer if it referenced the note. Returns `false` when no such note
    /// exists.
    pub fn delete_note(&mut self, id: &str) -> bool {
        let Some(idx) = self.notes.iter().position(|n| n.id == id) else {
            debug!("Cannot delete note {}: not found", id);
            return false;
        };

        if self.notes[idx].trashed {
            info!("Permanently deleting note: {}", id);
            self.notes.remove(idx);
            if self.active_note_id.as_deref() == Some(id) {
                self.active_note_id = None;
            }
        } else {
            info!("Moving note to trash: {}", id);
            let note = &mut self.notes[idx];
            note.trashed = true;
            note.pinned = false;
            note.archived = false;
            note.touch();
        }
        self.persist();
        true
    }

    /// Moves a trashed note back to the plain active state. Prior pinned or
    /// archived state is not restored. Returns `false` when no such note
    /// exists.
    pub fn restore_from_trash(&mut self, id: &str) -> bool {
        self.with_note(id, |note| {
            note.trashed = false;
        })
    }

    /// Archives a note, dropping its pin. The trashed flag is left as-is.
    /// Returns `false` when no such note exists.
    pub fn archive_note(&mut self, id: &str) -> bool {
        self.with_note(id, |note| {
            note.archived = true;
            note.pinned = false;
        })
    }

    /// Moves a note out of the archive. Returns `false` when no such note
    /// exists.
    pub fn unarchive_note(&mut self, id: &str) -> bool {
        self.with_note(id, |note| {
            note.archived = false;
        })
    }

    /// Sets or clears the active-note pointer and persists. No existence
    /// check is made against the collection.
    pub fn set_active_note(&mut self, id: Option<String>) {
        debug!("Setting active note: {:?}", id);
        self.active_note_id = id;
        self.persist();
    }

    /// Registers a tag, keeping the registry sorted and duplicate-free.
    /// Whitespace is trimmed; empty and already-known tags are ignored and
    /// do not trigger a persist. Returns whether the tag was added.
    pub fn add_tag(&mut self, name: &str) -> bool {
        let tag = name.trim();
        if tag.is_empty() {
            return false;
        }
        if self.tags.iter().any(|t| t == tag) {
            debug!("Tag already registered: {}", tag);
            return false;
        }

        info!("Registering tag: {}", tag);
        self.tags.push(tag.to_string());
        self.tags.sort();
        self.persist();
        true
    }

    /// Returns a freshly computed view of the collection for `filter`.
    ///
    /// The section, tag, and query restrictions compose as a logical AND.
    /// Pinned notes sort first, then most recently updated; the sort is
    /// stable, so ties keep the collection's order. Never mutates state and
    /// never aliases internal storage.
    pub fn get_filtered_notes(&self, filter: &NoteFilter) -> Vec<Note> {
        let mut notes: Vec<Note> = self
            .notes
            .iter()
            .filter(|n| match filter.section {
                Section::All => !n.archived && !n.trashed,
                Section::Pinned => n.pinned && !n.archived && !n.trashed,
                Section::Archived => n.archived && !n.trashed,
                Section::Trash => n.trashed,
            })
            .filter(|n| match filter.tag.as_deref() {
                Some(tag) if tag != "all" => n.tags.iter().any(|t| t == tag),
                _ => true,
            })
            .filter(|n| match filter.query.as_deref() {
                Some(query) if !query.is_empty() => {
                    let q = query.to_lowercase();
                    n.title.to_lowercase().contains(&q) || n.content.to_lowercase().contains(&q)
                }
                _ => true,
            })
            .cloned()
            .collect();

        notes.sort_by(|a, b| b.pinned.cmp(&a.pinned).then(b.updated_at.cmp(&a.updated_at)));
        notes
    }

    /// The live note collection, most recently created first.
    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The tag registry, sorted lexicographically.
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// The id of the note currently selected for editing, if any.
    pub fn active_note_id(&self) -> Option<&str> {
        self.active_note_id.as_deref()
    }

    /// Looks up a note by id.
    pub fn get_note(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    /// Whether the most recent persist wrote every slot.
    pub fn last_persist_ok(&self) -> bool {
        self.last_persist_ok
    }

    /// The underlying slot store.
    pub fn slot_store(&self) -> &S {
        &self.slots
    }

    /// Mutable access to the underlying slot store.
    pub fn slot_store_mut(&mut self) -> &mut S {
        &mut self.slots
    }

    /// Applies `mutate` to the note with `id`, refreshes its timestamp, and
    /// persists. Returns `false` when no such note exists.
    fn with_note(&mut self, id: &str, mutate: impl FnOnce(&mut Note)) -> bool {
        let Some(note) = self.notes.iter_mut().find(|n| n.id == id) else {
            debug!("No such note: {}", id);
            return false;
        };
        mutate(note);
        note.touch();
        self.persist();
        true
    }
}
