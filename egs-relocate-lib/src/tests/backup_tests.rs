use std::fs;

use super::*;
use crate::error::RelocateError;
use crate::test_support::{Fixture, ScriptedPrompter};

#[test]
fn test_backup_copies_matching_launcher_manifests() {
    let fx = Fixture::new();
    fx.add_game("GameA", &["GameA.manifest", "GameA.manifest2"]);
    fx.add_game("GameB", &["GameB.manifest"]);
    let item_a = fx.add_launcher_manifest("GameA.item", 0, "GameA");
    fx.add_launcher_manifest("GameB.item", 0, "GameB");
    fx.add_launcher_manifest("Other.item", 0, "Other");

    let summary = fx
        .context()
        .backup_manifests(&ScriptedPrompter::yes())
        .unwrap()
        .completed()
        .unwrap();

    // GameA's two manifests share one launcher manifest: copied once.
    assert_eq!(summary.backed_up, vec!["GameA.item", "GameB.item"]);
    assert!(summary.unmatched.is_empty());
    assert_eq!(
        fs::read(fx.backup_folder().join("GameA.item")).unwrap(),
        fs::read(&item_a).unwrap()
    );
    assert!(!fx.backup_folder().join("Other.item").exists());
    // Originals stay where they are.
    assert!(item_a.exists());
}

#[test]
fn test_backup_reports_unmatched_and_continues() {
    let fx = Fixture::new();
    fx.add_game("GameA", &["GameA.manifest"]);
    fx.add_game("Orphan", &["Orphan.manifest"]);
    fx.add_launcher_manifest("GameA.item", 0, "GameA");

    let summary = fx
        .context()
        .backup_manifests(&ScriptedPrompter::yes())
        .unwrap()
        .completed()
        .unwrap();

    assert_eq!(summary.backed_up, vec!["GameA.item"]);
    assert_eq!(
        summary.unmatched,
        vec![UnmatchedManifest {
            game: "Orphan".to_string(),
            manifest: "Orphan.manifest".to_string(),
        }]
    );
}

#[test]
fn test_backup_is_idempotent() {
    let fx = Fixture::new();
    fx.add_game("GameA", &["GameA.manifest"]);
    fx.add_launcher_manifest("GameA.item", 0, "GameA");
    let ctx = fx.context();

    ctx.backup_manifests(&ScriptedPrompter::yes()).unwrap();
    let second = ctx.backup_manifests(&ScriptedPrompter::yes()).unwrap();
    assert_eq!(second.completed().unwrap().backed_up, vec!["GameA.item"]);
}

#[test]
fn test_backup_declined_creates_nothing() {
    let fx = Fixture::new();
    fx.add_game("GameA", &["GameA.manifest"]);
    fx.add_launcher_manifest("GameA.item", 0, "GameA");

    let prompter = ScriptedPrompter::no();
    let outcome = fx.context().backup_manifests(&prompter).unwrap();
    assert!(outcome.is_aborted());
    assert_eq!(prompter.confirmations.get(), 1);
    assert!(!fx.backup_folder().exists());
}

#[test]
fn test_backup_requires_launcher_root() {
    let fx = Fixture::new();
    fx.add_game("GameA", &["GameA.manifest"]);
    fs::remove_dir(&fx.launcher_root).unwrap();

    let err = fx
        .context()
        .backup_manifests(&ScriptedPrompter::yes())
        .unwrap_err();
    assert!(matches!(err, RelocateError::MissingFolder { .. }));
    assert!(!fx.backup_folder().exists());
}

#[test]
fn test_restore_requires_backup_folder() {
    let fx = Fixture::new();
    fx.add_game("GameA", &["GameA.manifest"]);

    let prompter = ScriptedPrompter::yes();
    let err = fx.context().restore_manifests(&prompter).unwrap_err();
    assert_eq!(err.hint(), Some(BACKUP_FIRST_HINT));
    // Fails before asking anything.
    assert_eq!(prompter.confirmations.get(), 0);
}

#[test]
fn test_restore_overwrites_launcher_manifests() {
    let fx = Fixture::new();
    fx.add_game("GameA", &["GameA.manifest"]);
    let item = fx.add_launcher_manifest("GameA.item", 0, "GameA");
    let ctx = fx.context();
    ctx.backup_manifests(&ScriptedPrompter::yes()).unwrap();

    fs::write(&item, "launcher changed this").unwrap();
    fs::write(fx.backup_folder().join("notes.txt"), "not a manifest").unwrap();

    let summary = ctx
        .restore_manifests(&ScriptedPrompter::yes())
        .unwrap()
        .completed()
        .unwrap();
    assert_eq!(summary.restored, vec!["GameA.item"]);
    assert_eq!(
        fs::read(&item).unwrap(),
        fs::read(fx.backup_folder().join("GameA.item")).unwrap()
    );
    assert!(!fx.launcher_root.join("notes.txt").exists());
}

#[test]
fn test_restore_declined_changes_nothing() {
    let fx = Fixture::new();
    fx.add_game("GameA", &["GameA.manifest"]);
    let item = fx.add_launcher_manifest("GameA.item", 0, "GameA");
    let ctx = fx.context();
    ctx.backup_manifests(&ScriptedPrompter::yes()).unwrap();
    fs::write(&item, "launcher changed this").unwrap();

    let outcome = ctx.restore_manifests(&ScriptedPrompter::no()).unwrap();
    assert!(outcome.is_aborted());
    assert_eq!(fs::read_to_string(&item).unwrap(), "launcher changed this");
}
