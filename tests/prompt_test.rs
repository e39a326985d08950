// Prompt generation and re-import

use lyrics_lab_wasm::models::{PromptControls, Section, SectionKind, SongDocument};
use lyrics_lab_wasm::parse::{parse_lyrics_block, ImportError};
use lyrics_lab_wasm::renderers::generate_prompt;

fn song(sections: Vec<Section>) -> SongDocument {
    SongDocument {
        title: "Test".to_string(),
        artist: "X".to_string(),
        mood: "Melancholic".to_string(),
        format: "Single".to_string(),
        sections,
    }
}

fn pairs(sections: &[Section]) -> Vec<(SectionKind, String)> {
    sections.iter().map(|s| (s.kind, s.content.trim().to_string())).collect()
}

#[test]
fn test_forward_example() {
    let doc = song(vec![Section::new(SectionKind::Verse, "la la")]);
    let prompt = generate_prompt(&doc, &PromptControls::new(75, 85));

    assert!(prompt.contains("[Style Originality: 75%]"));
    assert!(prompt.contains("[Instrumentation Originality: 85%]"));
    assert!(prompt.contains("[Verse]\nla la"));
    assert!(prompt.starts_with("[Style Description: An melancholic single in the style of X.]"));
}

#[test]
fn test_forward_is_deterministic() {
    let doc = SongDocument::new();
    let controls = PromptControls::new(33, 66);
    let first = generate_prompt(&doc, &controls);
    for _ in 0..5 {
        assert_eq!(generate_prompt(&doc, &controls), first);
    }
}

#[test]
fn test_round_trip_recovers_kinds_and_content() {
    let contents = [
        "la la",
        "line one\nline two",
        "  padded  ",
        "",
        "stanza one\n\nstanza two",
        "has [brackets] inside",
        "ends with newline\n",
        "ünïcödé wörds",
    ];

    for (i, kind) in SectionKind::ALL.iter().enumerate() {
        let sections: Vec<Section> = contents
            .iter()
            .enumerate()
            .map(|(j, text)| Section::new(SectionKind::ALL[(i + j) % SectionKind::ALL.len()], *text))
            .collect();
        let doc = song(sections);
        let prompt = generate_prompt(&doc, &PromptControls::default());

        let imported = parse_lyrics_block(&prompt).unwrap();
        assert_eq!(pairs(&imported.sections), pairs(&doc.sections), "rotation {:?}", kind);
        assert!(imported.skipped.is_empty());

        for (old, new) in doc.sections.iter().zip(&imported.sections) {
            assert_ne!(old.id, new.id);
        }
    }
}

#[test]
fn test_no_lyrics_marker() {
    let err = parse_lyrics_block("[Style Description: An x y in the style of z.]\n[Verse]\nla").unwrap_err();
    assert_eq!(err, ImportError::NoLyricsBlock);
    assert_eq!(err.to_string(), "Could not find [Lyrics] block in the prompt.");
}

#[test]
fn test_only_unrecognized_labels() {
    let prompt = "[Lyrics]\n[Foo]\nsomething\n\n[Style Originality: 75%]";
    let err = parse_lyrics_block(prompt).unwrap_err();
    assert_eq!(err, ImportError::NoRecognizableSections);
    assert_eq!(
        err.to_string(),
        "No recognizable sections (e.g., [Verse], [Chorus]) found in the [Lyrics] block."
    );
}

#[test]
fn test_hand_edited_prompt() {
    let prompt = "[Style Description: An upbeat ep in the style of Y.]\n\n\
                  [Lyrics]\n\
                  [Intro]\n\
                  hum\n\
                  \n\
                  [Pre-Chorus]\n\
                  climb\n\
                  [Guitar Solo]\n\
                  wail\n\
                  [Chorus]\n\
                  shout\n\
                  \n\
                  [Style Originality: 50%]\n\
                  [Instrumentation Originality: 50%]\n";
    let imported = parse_lyrics_block(prompt).unwrap();
    assert_eq!(
        pairs(&imported.sections),
        vec![
            (SectionKind::Intro, "hum".to_string()),
            (SectionKind::PreChorus, "climb".to_string()),
            (SectionKind::Chorus, "shout".to_string()),
        ]
    );
    assert_eq!(imported.skipped, vec!["Guitar Solo".to_string()]);
}
