// Undo/redo history properties over song documents

use lyrics_lab_wasm::models::{Section, SectionKind, SongDocument};
use lyrics_lab_wasm::undo::{HistoryStore, INITIAL_LABEL, RESET_LABEL};

fn song_titled(title: &str) -> SongDocument {
    SongDocument {
        title: title.to_string(),
        artist: "X".to_string(),
        mood: "Calm".to_string(),
        format: "Single".to_string(),
        sections: vec![Section {
            id: "verse-1".to_string(),
            kind: SectionKind::Verse,
            content: "la la".to_string(),
        }],
    }
}

#[test]
fn test_undo_k_times_returns_to_k_applies_ago() {
    let mut history = HistoryStore::new(song_titled("v0"));
    let mut states = vec![song_titled("v0")];

    for i in 1..=6 {
        let next = song_titled(&format!("v{}", i));
        assert!(history.apply(next.clone(), format!("Edit Title {}", i)));
        states.push(next);
        assert!(history.can_undo());
    }

    for k in 1..=6 {
        history.undo();
        assert_eq!(*history.current(), states[6 - k], "after {} undos", k);
    }
    assert!(!history.can_undo());
}

#[test]
fn test_structurally_equal_documents_collapse() {
    let mut history = HistoryStore::new(song_titled("A"));
    history.apply(song_titled("B"), "Edit Title");
    let len = history.len();
    let (can_undo, can_redo) = (history.can_undo(), history.can_redo());

    // Distinct allocation, same value
    let same = song_titled("B");
    assert!(!history.apply(same, "Edit Title"));
    assert!(!history.apply_with(|song| song.clone(), "Edit Title"));

    assert_eq!(history.len(), len);
    assert_eq!(history.can_undo(), can_undo);
    assert_eq!(history.can_redo(), can_redo);
}

#[test]
fn test_typing_then_retyping_same_text_is_one_step() {
    let mut history = HistoryStore::new(song_titled("A"));
    history.apply_with(
        |song| SongDocument { title: "AB".to_string(), ..song.clone() },
        "Edit Title",
    );
    history.apply_with(
        |song| SongDocument { title: "AB".to_string(), ..song.clone() },
        "Edit Title",
    );
    assert_eq!(history.len(), 2);
}

#[test]
fn test_new_edit_after_undo_discards_redo_branch() {
    let (a, b, c, d) = (song_titled("A"), song_titled("B"), song_titled("C"), song_titled("D"));
    let mut history = HistoryStore::new(a.clone());
    history.apply(b.clone(), "b");
    history.apply(c, "c");

    history.undo();
    assert_eq!(*history.current(), b);
    history.apply(d.clone(), "d");

    let values: Vec<&SongDocument> = history.entries().iter().map(|e| &e.value).collect();
    assert_eq!(values, vec![&a, &b, &d]);
    assert!(!history.can_redo());
    assert_eq!(history.redo_label(), None);
}

#[test]
fn test_redo_after_undo_restores_value_and_label() {
    let mut history = HistoryStore::new(song_titled("A"));
    history.apply(song_titled("B"), "Edit Title");
    history.apply(song_titled("C"), "Edit Mood");

    history.undo();
    history.undo();
    assert_eq!(history.current_label(), INITIAL_LABEL);

    history.redo();
    assert_eq!(*history.current(), song_titled("B"));
    assert_eq!(history.current_label(), "Edit Title");
    history.redo();
    assert_eq!(*history.current(), song_titled("C"));
    assert_eq!(history.current_label(), "Edit Mood");
}

#[test]
fn test_reset_regardless_of_depth() {
    for depth in [0usize, 1, 5, 50] {
        let mut history = HistoryStore::new(song_titled("start"));
        for i in 0..depth {
            history.apply(song_titled(&format!("{}", i)), "edit");
        }
        if depth > 1 {
            history.undo();
        }
        history.reset(SongDocument::new());
        assert_eq!(history.len(), 1);
        assert_eq!(history.pointer(), 0);
        assert!(!history.can_undo());
        assert!(!history.can_redo());
        assert_eq!(history.current_label(), RESET_LABEL);
    }
}

#[test]
fn test_lazy_initial_state() {
    let history = HistoryStore::new_with(SongDocument::new);
    assert_eq!(history.current().title, "New Song");
    assert_eq!(history.current_label(), INITIAL_LABEL);
}
