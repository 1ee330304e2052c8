use crate::{Note, NotePatch};

// Helper method for parsing tags
pub fn parse_tags(tags: Option<String>) -> Option<Vec<String>> {
    tags.map(|t| {
        t.split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect()
    })
}

/// Builds the patch for the CLI's field-edit flags. `None` when no flag was
/// given, so callers can skip the update entirely.
pub fn patch_from_fields(
    title: Option<String>,
    content: Option<String>,
    tags: Option<String>,
    color: Option<String>,
) -> Option<NotePatch> {
    let patch = NotePatch {
        title,
        content,
        tags: parse_tags(tags),
        color,
        ..Default::default()
    };

    if patch.title.is_none()
        && patch.content.is_none()
        && patch.tags.is_none()
        && patch.color.is_none()
    {
        None
    } else {
        Some(patch)
    }
}

/// One-line summary of a note for list output.
pub fn note_summary(note: &Note) -> String {
    let mut flags = String::new();
    if note.pinned {
        flags.push('*');
    }
    if note.archived {
        flags.push('a');
    }
    if note.trashed {
        flags.push('t');
    }

    let title = if note.title.is_empty() {
        "(untitled)"
    } else {
        note.title.as_str()
    };

    if flags.is_empty() {
        format!("{}  {}", note.id, title)
    } else {
        format!("{}  [{}] {}", note.id, flags, title)
    }
}

#[cfg(test)]
mod tests {
    use super::{parse_tags, patch_from_fields};

    #[test]
    fn parse_tags_splits_trims_and_drops_empties() {
        let tags = parse_tags(Some("work, personal, ,ideas".to_string())).unwrap();
        assert_eq!(tags, vec!["work", "personal", "ideas"]);
        assert!(parse_tags(None).is_none());
    }

    #[test]
    fn patch_from_fields_is_none_without_flags() {
        assert!(patch_from_fields(None, None, None, None).is_none());
        let patch = patch_from_fields(Some("t".to_string()), None, None, None).unwrap();
        assert_eq!(patch.title.as_deref(), Some("t"));
    }
}
