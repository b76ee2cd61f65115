//! Test utilities and module declarations for storage tests.

use catalog_lookup_core::{Entry, EntryInput};

pub fn create_test_entry(id: i64, name: &str) -> Entry {
    Entry::from_input(EntryInput {
        id,
        name: name.to_owned(),
        description: format!("Description of {name}"),
        audio_urls: vec![format!("https://cdn.example/{id}.mp3")],
    })
    .unwrap()
}

pub fn with_phonetic(mut entry: Entry, key: &str) -> Entry {
    entry.phonetic_name = key.to_owned();
    entry
}
