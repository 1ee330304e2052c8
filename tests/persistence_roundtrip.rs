use ocean_notes::{
    FileSlotStore, MemorySlotStore, NotePatch, NotesStore, SlotStore, ACTIVE_SLOT, NOTES_SLOT,
    TAGS_SLOT,
};

fn clone_slots(store: &NotesStore<MemorySlotStore>) -> MemorySlotStore {
    let mut slots = MemorySlotStore::new();
    for key in [NOTES_SLOT, TAGS_SLOT, ACTIVE_SLOT] {
        if let Some(raw) = store.slot_store().raw_slot(key) {
            slots.insert_slot(key, raw);
        }
    }
    slots
}

#[test]
fn empty_storage_seeds_exactly_one_welcome_note() {
    let store = NotesStore::open(MemorySlotStore::new());

    assert_eq!(store.notes().len(), 1);
    let seed = &store.notes()[0];
    assert_eq!(seed.title, "Welcome to Ocean Notes");
    assert!(seed.pinned);
    assert!(!seed.archived && !seed.trashed);
    assert_eq!(seed.tags, vec!["ideas".to_string()]);
    assert_eq!(seed.color, "#FCE7F3");
    assert_eq!(store.active_note_id(), Some(seed.id.as_str()));

    // Seeding is itself persisted.
    assert!(store.slot_store().raw_slot(NOTES_SLOT).is_some());
    assert!(store.slot_store().raw_slot(TAGS_SLOT).is_some());
    assert!(store.slot_store().raw_slot(ACTIVE_SLOT).is_some());
}

#[test]
fn seeding_happens_only_when_the_collection_is_empty() {
    let first = NotesStore::open(MemorySlotStore::new());
    let seed_id = first.notes()[0].id.clone();

    let second = NotesStore::open(clone_slots(&first));
    assert_eq!(second.notes().len(), 1);
    assert_eq!(second.notes()[0].id, seed_id);
}

#[test]
fn round_trip_reproduces_notes_tags_and_active_pointer() {
    let mut store = NotesStore::open(MemorySlotStore::new());
    let id = store.create_note();
    store.update_note(
        &id,
        NotePatch {
            title: Some("Groceries".to_string()),
            content: Some("milk, eggs".to_string()),
            tags: Some(vec!["personal".to_string()]),
            color: Some("#E0F2FE".to_string()),
            ..Default::default()
        },
    );
    store.add_tag("errands");
    store.set_active_note(Some(id.clone()));

    let reloaded = NotesStore::open(clone_slots(&store));

    assert_eq!(reloaded.notes(), store.notes());
    assert_eq!(reloaded.tags(), store.tags());
    assert_eq!(reloaded.active_note_id(), store.active_note_id());
}

#[test]
fn malformed_notes_slot_falls_back_without_touching_other_slots() {
    let mut slots = MemorySlotStore::new();
    slots.insert_slot(NOTES_SLOT, "{definitely not json");
    slots.insert_slot(TAGS_SLOT, r#"["alpha","beta"]"#);
    slots.insert_slot(ACTIVE_SLOT, "null");

    let store = NotesStore::open(slots);

    // The damaged collection falls back to empty and is then seeded.
    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.notes()[0].title, "Welcome to Ocean Notes");
    // The healthy tag slot is untouched by the fallback.
    assert_eq!(store.tags(), ["alpha".to_string(), "beta".to_string()]);
}

#[test]
fn malformed_active_slot_falls_back_to_none() {
    let first = NotesStore::open(MemorySlotStore::new());
    let mut slots = clone_slots(&first);
    slots.insert_slot(ACTIVE_SLOT, "{broken");

    let store = NotesStore::open(slots);

    assert_eq!(store.notes().len(), 1);
    assert_eq!(store.active_note_id(), None);
}

#[test]
fn persist_failures_are_suppressed_and_state_stays_authoritative() {
    let mut slots = MemorySlotStore::new();
    slots.set_fail_writes(true);

    let mut store = NotesStore::open(slots);
    assert_eq!(store.notes().len(), 1);
    assert!(!store.last_persist_ok());

    // Mutations still succeed while durability is lost.
    let id = store.create_note();
    assert_eq!(store.notes().len(), 2);
    assert!(store.get_note(&id).is_some());
    assert!(!store.last_persist_ok());

    assert!(store.update_note(
        &id,
        NotePatch {
            title: Some("kept in memory".to_string()),
            ..Default::default()
        },
    ));
    assert_eq!(store.get_note(&id).unwrap().title, "kept in memory");

    // Once storage recovers, the next persist writes every slot again.
    store.slot_store_mut().set_fail_writes(false);
    assert!(store.persist());
    assert!(store.last_persist_ok());
    assert!(store.slot_store().raw_slot(NOTES_SLOT).is_some());
}

#[test]
fn file_slot_store_round_trips_across_reopen() {
    let dir = tempfile::tempdir().unwrap();

    let (id, notes, tags, active) = {
        let slots = FileSlotStore::new(dir.path().to_path_buf()).unwrap();
        let mut store = NotesStore::open(slots);
        let id = store.create_note();
        store.update_note(
            &id,
            NotePatch {
                title: Some("On disk".to_string()),
                ..Default::default()
            },
        );
        store.add_tag("durable");
        (
            id,
            store.notes().to_vec(),
            store.tags().to_vec(),
            store.active_note_id().map(String::from),
        )
    };

    let slots = FileSlotStore::new(dir.path().to_path_buf()).unwrap();
    let reloaded = NotesStore::open(slots);

    assert_eq!(reloaded.notes(), notes.as_slice());
    assert_eq!(reloaded.tags(), tags.as_slice());
    assert_eq!(reloaded.active_note_id().map(String::from), active);
    assert_eq!(reloaded.get_note(&id).unwrap().title, "On disk");
}

#[test]
fn file_slot_store_reads_none_for_missing_slots() {
    let dir = tempfile::tempdir().unwrap();
    let mut slots = FileSlotStore::new(dir.path().to_path_buf()).unwrap();

    assert!(slots.read_slot("never-written").unwrap().is_none());

    slots.write_slot("greeting", "\"hello\"").unwrap();
    assert_eq!(
        slots.read_slot("greeting").unwrap().as_deref(),
        Some("\"hello\"")
    );
}
