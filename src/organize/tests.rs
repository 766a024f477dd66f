use std::fs;
use std::path::{Path, PathBuf};

use tempfile::tempdir;

use super::*;

fn record(src: &Path, artist: Option<&str>, album: Option<&str>, title: Option<&str>, track: Option<u32>) -> MetadataRecord {
    MetadataRecord {
        source_path: src.to_path_buf(),
        artist: artist.map(str::to_string),
        album: album.map(str::to_string),
        title: title.map(str::to_string),
        track_number: track,
        mime_types: vec!["audio/mpeg".to_string()],
        extension: ".mp3".to_string(),
        in_compilation: false,
    }
}

fn options(out: &Path) -> Options {
    Options {
        out_dir: out.to_path_buf(),
        compilation_dir: "Various Artists".to_string(),
        collision: CollisionPolicy::Report,
        confirm: false,
        trust_compilations: false,
    }
}

fn write(path: &Path, contents: &[u8]) -> PathBuf {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, contents).unwrap();
    path.to_path_buf()
}

#[test]
fn moves_into_artist_album_layout() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let file = write(&src.path().join("x.mp3"), b"song");

    let r = record(&file, Some("A/C"), Some("X"), Some("Y"), Some(1));
    let outcome = relocate(&r, &options(out.path()), &mut Scripted::new(&[]));

    assert_eq!(outcome, Outcome::Moved);
    let dest = out.path().join("A_C").join("X").join("01 Y.mp3");
    assert_eq!(fs::read(&dest).unwrap(), b"song");
    assert!(!file.exists());
}

#[test]
fn missing_title_or_artist_is_skipped_without_io() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let file = write(&src.path().join("x.mp3"), b"song");

    for r in [
        record(&file, None, Some("X"), Some("Y"), None),
        record(&file, Some("A"), Some("X"), None, None),
    ] {
        assert_eq!(
            relocate(&r, &options(out.path()), &mut Scripted::new(&[])),
            Outcome::Skipped
        );
    }
    assert!(file.exists());
    assert_eq!(fs::read_dir(out.path()).unwrap().count(), 0);
}

#[test]
fn occupied_destination_is_reported_and_source_kept() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let file = write(&src.path().join("x.mp3"), b"new");
    let dest = write(&out.path().join("A").join("X").join("01 Y.mp3"), b"old");

    let r = record(&file, Some("A"), Some("X"), Some("Y"), Some(1));
    let outcome = relocate(&r, &options(out.path()), &mut Scripted::new(&[]));

    assert_eq!(outcome, Outcome::Reported);
    assert_eq!(fs::read(&file).unwrap(), b"new");
    assert_eq!(fs::read(&dest).unwrap(), b"old");
}

#[test]
fn overwrite_replaces_the_destination() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let file = write(&src.path().join("x.mp3"), b"new");
    let dest = write(&out.path().join("A").join("X").join("01 Y.mp3"), b"old");

    let mut opts = options(out.path());
    opts.collision = CollisionPolicy::Overwrite;
    let r = record(&file, Some("A"), Some("X"), Some("Y"), Some(1));

    assert_eq!(relocate(&r, &opts, &mut Scripted::new(&[])), Outcome::Overwritten);
    assert_eq!(fs::read(&dest).unwrap(), b"new");
    assert!(!file.exists());
}

#[test]
fn discard_deletes_the_source() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let file = write(&src.path().join("x.mp3"), b"dup");
    let dest = write(&out.path().join("A").join("Y.mp3"), b"kept");

    let mut opts = options(out.path());
    opts.collision = CollisionPolicy::Discard;
    let r = record(&file, Some("A"), None, Some("Y"), None);

    assert_eq!(relocate(&r, &opts, &mut Scripted::new(&[])), Outcome::Discarded);
    assert!(!file.exists());
    assert_eq!(fs::read(&dest).unwrap(), b"kept");
}

#[test]
fn file_already_in_place_is_left_alone() {
    let out = tempdir().unwrap();
    let file = write(&out.path().join("A").join("X").join("01 Y.mp3"), b"song");

    let mut opts = options(out.path());
    opts.collision = CollisionPolicy::Discard;
    let r = record(&file, Some("A"), Some("X"), Some("Y"), Some(1));

    assert_eq!(relocate(&r, &opts, &mut Scripted::new(&[])), Outcome::AlreadyInPlace);
    assert_eq!(fs::read(&file).unwrap(), b"song");
}

#[test]
fn confirm_mode_asks_before_every_move() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let yes = write(&src.path().join("yes.mp3"), b"1");
    let no = write(&src.path().join("no.mp3"), b"2");

    let mut opts = options(out.path());
    opts.confirm = true;
    let mut confirm = Scripted::new(&[true, false]);

    let r1 = record(&yes, Some("A"), None, Some("Yes"), None);
    let r2 = record(&no, Some("A"), None, Some("No"), None);
    assert_eq!(relocate(&r1, &opts, &mut confirm), Outcome::Moved);
    assert_eq!(relocate(&r2, &opts, &mut confirm), Outcome::Skipped);

    assert_eq!(confirm.asked.len(), 2);
    assert!(out.path().join("A").join("Yes.mp3").exists());
    assert!(no.exists());
}

#[test]
fn confirm_mode_routes_collisions_through_the_prompt() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let file = write(&src.path().join("x.mp3"), b"new");
    let dest = write(&out.path().join("A").join("Y.mp3"), b"old");

    let mut opts = options(out.path());
    opts.confirm = true;
    opts.collision = CollisionPolicy::Discard;
    let mut confirm = Scripted::new(&[true]);

    let r = record(&file, Some("A"), None, Some("Y"), None);
    assert_eq!(relocate(&r, &opts, &mut confirm), Outcome::Moved);
    assert!(confirm.asked[0].contains("replacing the existing file"));
    assert_eq!(fs::read(&dest).unwrap(), b"new");
}

#[test]
fn compilation_flag_without_album_fails_that_file_only() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let file = write(&src.path().join("x.mp3"), b"song");

    let mut r = record(&file, Some("A"), None, Some("Y"), None);
    r.in_compilation = true;

    let outcome = relocate(&r, &options(out.path()), &mut Scripted::new(&[]));
    assert!(matches!(outcome, Outcome::Failed(_)));
    assert!(file.exists());
}

#[test]
fn organize_routes_trusted_compilations_under_various_artists() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let a = write(&src.path().join("a.mp3"), b"a");
    let b = write(&src.path().join("b.mp3"), b"b");

    let mut opts = options(out.path());
    opts.trust_compilations = true;
    let records = vec![
        record(&a, Some("A"), Some("Greatest Hits"), Some("One"), Some(1)),
        record(&b, Some("B"), Some("Greatest Hits"), Some("Two"), Some(2)),
    ];

    let report = organize(records, &opts, &mut Scripted::new(&[]));
    assert_eq!(report.compilations, 1);
    assert!(report.outcomes.iter().all(|(_, o)| *o == Outcome::Moved));

    let album = out.path().join("Various Artists").join("Greatest Hits");
    assert!(album.join("01 One.mp3").exists());
    assert!(album.join("02 Two.mp3").exists());
}

#[test]
fn organize_falls_back_to_artists_when_compilation_declined() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let a = write(&src.path().join("a.mp3"), b"a");
    let b = write(&src.path().join("b.mp3"), b"b");

    let records = vec![
        record(&a, Some("A"), Some("Hits"), Some("One"), Some(1)),
        record(&b, Some("B"), Some("Hits"), Some("Two"), Some(2)),
    ];

    let mut confirm = Scripted::new(&[false]);
    let report = organize(records, &options(out.path()), &mut confirm);
    assert_eq!(report.compilations, 0);
    assert_eq!(confirm.asked.len(), 1);
    assert!(out.path().join("A").join("Hits").join("01 One.mp3").exists());
    assert!(out.path().join("B").join("Hits").join("02 Two.mp3").exists());
}

#[test]
fn organizing_the_output_again_changes_nothing() {
    let src = tempdir().unwrap();
    let out = tempdir().unwrap();
    let a = write(&src.path().join("a.mp3"), b"a");
    let b = write(&src.path().join("b.mp3"), b"b");

    let mut opts = options(out.path());
    opts.trust_compilations = true;
    let first = vec![
        record(&a, Some("A"), Some("Split"), Some("One"), Some(1)),
        record(&b, Some("B"), Some("Solo"), Some("Two"), None),
    ];
    organize(first, &opts, &mut Scripted::new(&[]));

    let moved_a = out.path().join("A").join("Split").join("01 One.mp3");
    let moved_b = out.path().join("B").join("Solo").join("Two.mp3");
    let second = vec![
        record(&moved_a, Some("A"), Some("Split"), Some("One"), Some(1)),
        record(&moved_b, Some("B"), Some("Solo"), Some("Two"), None),
    ];
    let report = organize(second, &opts, &mut Scripted::new(&[]));
    assert!(
        report
            .outcomes
            .iter()
            .all(|(_, o)| *o == Outcome::AlreadyInPlace)
    );
}
