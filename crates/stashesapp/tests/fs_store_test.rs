use stashesapp::config::Config;
use stashesapp::store::fs::FileStore;
use stashesapp::store::StashStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, FileStore) {
    let dir = TempDir::new().unwrap();
    let store = FileStore::new(&Config::from_root(dir.path()));
    (dir, store)
}

#[test]
fn test_titles_with_slashes_store_dashed_names() {
    let (dir, store) = setup();

    let stash = store.create_stash("a/b/c").unwrap();
    assert_eq!(stash, "a-b-c");

    let stem = store.create_note(&stash, "x/y").unwrap();
    assert_eq!(stem, "x-y");
    assert!(dir.path().join("a-b-c").join("x-y.txt").is_file());
}

#[test]
fn test_blank_and_dotted_titles_become_untitled() {
    let (_dir, store) = setup();
    store.create_stash("S").unwrap();

    assert_eq!(store.create_note("S", "   ").unwrap(), "Untitled");
    // The all-dots title sanitizes to the same stem and picks a suffix.
    assert_eq!(store.create_note("S", "...").unwrap(), "Untitled (1)");
}

#[test]
fn test_note_collisions_count_upward() {
    let (dir, store) = setup();
    store.create_stash("S").unwrap();

    assert_eq!(store.create_note("S", "X").unwrap(), "X");
    assert_eq!(store.create_note("S", "X").unwrap(), "X (1)");
    assert_eq!(store.create_note("S", "X").unwrap(), "X (2)");
    assert!(dir.path().join("S").join("X (2).txt").is_file());
}

#[test]
fn test_listing_is_case_insensitively_sorted() {
    let (_dir, store) = setup();

    store.create_stash("banana").unwrap();
    store.create_stash("Apple").unwrap();
    assert_eq!(store.list_stashes().unwrap(), vec!["Apple", "banana"]);

    store.create_note("banana", "zebra").unwrap();
    store.create_note("banana", "Ant").unwrap();
    assert_eq!(store.list_notes("banana").unwrap(), vec!["Ant", "zebra"]);
}

#[test]
fn test_reading_an_externally_removed_note_is_empty() {
    let (dir, store) = setup();
    store.create_stash("S").unwrap();
    store.create_note("S", "gone").unwrap();
    store.write_note("S", "gone", "still here?").unwrap();

    fs::remove_file(dir.path().join("S").join("gone.txt")).unwrap();

    assert_eq!(store.read_note("S", "gone").unwrap(), "");
}

#[test]
fn test_rename_to_current_title_changes_nothing() {
    let (dir, store) = setup();
    store.create_stash("S").unwrap();
    store.create_note("S", "Todo").unwrap();
    store.write_note("S", "Todo", "body").unwrap();

    let stem = store.rename_note("S", "Todo", "Todo").unwrap();

    assert_eq!(stem, "Todo");
    assert_eq!(
        fs::read_to_string(dir.path().join("S").join("Todo.txt")).unwrap(),
        "body"
    );
    // No suffixed copy appeared.
    assert_eq!(store.list_notes("S").unwrap(), vec!["Todo"]);
}

#[test]
fn test_deleting_a_stash_removes_its_notes() {
    let (dir, store) = setup();
    store.create_stash("Doomed").unwrap();
    store.create_note("Doomed", "a").unwrap();
    store.create_note("Doomed", "b").unwrap();

    store.delete_stash("Doomed").unwrap();

    assert!(!dir.path().join("Doomed").exists());
    assert!(store.list_stashes().unwrap().is_empty());
}

#[test]
fn test_deleting_a_missing_stash_is_a_noop() {
    let (_dir, store) = setup();
    store.delete_stash("never created").unwrap();
}

#[test]
fn test_create_write_reopen_round_trip() {
    let (_dir, store) = setup();

    let stash = store.create_stash("Ideas").unwrap();
    let stem = store.create_note(&stash, "Todo").unwrap();
    assert_eq!(store.read_note(&stash, &stem).unwrap(), "");

    store.write_note(&stash, &stem, "buy milk").unwrap();

    // Reopen the way the UI does: list, then read.
    assert_eq!(store.list_notes(&stash).unwrap(), vec!["Todo"]);
    assert_eq!(store.read_note(&stash, "Todo").unwrap(), "buy milk");
}

#[test]
fn test_root_is_created_on_first_listing() {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("nested").join("Stashes");
    let store = FileStore::new(&Config::from_root(&root));

    assert!(store.list_stashes().unwrap().is_empty());
    assert!(root.is_dir());
}

#[test]
fn test_files_directly_under_root_are_not_stashes() {
    let (dir, store) = setup();
    store.create_stash("Real").unwrap();
    fs::write(dir.path().join("stray.txt"), "not a stash").unwrap();

    assert_eq!(store.list_stashes().unwrap(), vec!["Real"]);
}
