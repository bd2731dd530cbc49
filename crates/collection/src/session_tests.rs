use super::*;
use std::{
    fs::{create_dir, read, write},
    time::Duration,
};

use crate::slideshow::SlideshowState;

const PNG_MAGIC: &[u8] = b"\x89PNG\r\n\x1a\n\0\0\0\rIHDR";

fn settings() -> Settings {
    Settings {
        delete_mode: DeleteMode::Permanent,
        ..Settings::default()
    }
}

fn fixture(names: &[&str]) -> tempfile::TempDir {
    let tmp = tempfile::tempdir().expect("create temp dir");
    for name in names {
        write(tmp.path().join(name), PNG_MAGIC).expect("write image");
    }
    tmp
}

fn open_at(tmp: &tempfile::TempDir, name: &str) -> Session {
    Session::open(&[tmp.path().join(name)], settings()).expect("open session")
}

fn names(session: &Session) -> Vec<&str> {
    session
        .collection()
        .iter()
        .map(|r| r.display_name())
        .collect()
}

#[test]
fn status_line_shows_position_and_name() {
    let tmp = fixture(&["a.png", "b.png", "c.png"]);
    let session = open_at(&tmp, "b.png");

    assert_eq!(session.status_line(), "[2/3] b.png");
    assert_eq!(
        Session::new(FileCollection::new(), settings()).status_line(),
        "no images"
    );
}

#[test]
fn slideshow_is_denied_for_single_image() {
    let tmp = fixture(&["only.png"]);
    let mut session = open_at(&tmp, "only.png");

    assert_eq!(session.slideshow().state(), SlideshowState::Denied);
    assert!(!session.slideshow_mut().start(Instant::now()));
}

#[test]
fn tick_advances_only_when_due() {
    let tmp = fixture(&["a.png", "b.png", "c.png"]);
    let mut session = open_at(&tmp, "c.png");
    let start = Instant::now();
    let interval = Duration::from_secs(session.settings().slideshow_secs);

    assert!(!session.tick(start + interval), "stopped slideshow never ticks");

    assert!(session.slideshow_mut().start(start));
    assert!(!session.tick(start));
    assert!(session.tick(start + interval));
    assert_eq!(session.status_line(), "[1/3] a.png");

    // Manual navigation restarts the countdown.
    let manual = start + interval + Duration::from_secs(1);
    assert!(session.next(manual));
    assert!(!session.tick(start + interval * 2));
    assert!(session.tick(manual + interval));
    assert_eq!(session.status_line(), "[3/3] c.png");
}

#[test]
fn rename_current_resorts_and_keeps_cursor() {
    let tmp = fixture(&["a.png", "b.png", "c.png"]);
    let mut session = open_at(&tmp, "a.png");
    let now = Instant::now();
    session.slideshow_mut().start(now);

    session.rename_current("z.png", now).expect("rename");

    assert_eq!(names(&session), vec!["b.png", "c.png", "z.png"]);
    assert_eq!(session.status_line(), "[3/3] z.png");
    assert!(tmp.path().join("z.png").exists());
    assert!(!tmp.path().join("a.png").exists());
    assert!(session.slideshow().is_running(), "slideshow resumes");
}

#[test]
fn rename_current_failure_leaves_state() {
    let tmp = fixture(&["a.png", "b.png"]);
    let mut session = open_at(&tmp, "a.png");
    let now = Instant::now();
    session.slideshow_mut().start(now);

    assert!(session.rename_current("b.png", now).is_err());
    assert!(session.rename_current("../escape.png", now).is_err());
    assert!(session.rename_current("", now).is_err());

    assert_eq!(names(&session), vec!["a.png", "b.png"]);
    assert_eq!(session.status_line(), "[1/2] a.png");
    assert!(!session.slideshow().is_running(), "failed action does not resume");
}

#[test]
fn move_current_drops_record_and_advances() {
    let tmp = fixture(&["a.png", "b.png", "c.png"]);
    let dest = tmp.path().join("keep");
    create_dir(&dest).expect("create dest");
    let mut session = open_at(&tmp, "b.png");

    session.move_current(&dest, Instant::now()).expect("move");

    assert_eq!(names(&session), vec!["a.png", "c.png"]);
    assert_eq!(session.status_line(), "[2/2] c.png");
    assert!(dest.join("b.png").exists());
    assert!(!tmp.path().join("b.png").exists());
}

#[test]
fn move_current_to_own_directory_is_noop() {
    let tmp = fixture(&["a.png", "b.png"]);
    let mut session = open_at(&tmp, "a.png");

    session
        .move_current(tmp.path(), Instant::now())
        .expect("noop move");
    assert_eq!(names(&session), vec!["a.png", "b.png"]);
}

#[test]
fn move_current_refuses_to_clobber() {
    let tmp = fixture(&["a.png", "b.png"]);
    let dest = tmp.path().join("keep");
    create_dir(&dest).expect("create dest");
    write(dest.join("a.png"), b"other").expect("write blocker");
    let mut session = open_at(&tmp, "a.png");

    assert!(session.move_current(&dest, Instant::now()).is_err());
    assert_eq!(names(&session), vec!["a.png", "b.png"]);
    assert_eq!(read(dest.join("a.png")).expect("read blocker"), b"other");
}

#[test]
fn copy_current_leaves_collection_alone() {
    let tmp = fixture(&["a.png"]);
    let dest = tmp.path().join("out");
    create_dir(&dest).expect("create dest");
    let session = open_at(&tmp, "a.png");

    let first = session.copy_current(&dest).expect("copy");
    let second = session.copy_current(&dest).expect("copy again");

    assert_eq!(first, dest.join("a.png"));
    assert_eq!(second, dest.join("a-copy01.png"));
    assert_eq!(names(&session), vec!["a.png"]);
}

#[test]
fn delete_current_until_empty() {
    let tmp = fixture(&["a.png", "b.png"]);
    let mut session = open_at(&tmp, "b.png");
    let now = Instant::now();

    assert_eq!(session.delete_current(now).expect("delete"), Deleted::Next);
    assert!(!tmp.path().join("b.png").exists());
    assert_eq!(session.status_line(), "[1/1] a.png");
    assert_eq!(session.slideshow().state(), SlideshowState::Denied);

    assert_eq!(session.delete_current(now).expect("delete"), Deleted::Empty);
    assert!(session.current().is_none());
    assert_eq!(session.status_line(), "no images");

    assert!(session.delete_current(now).is_err());
}

#[test]
fn delete_failure_keeps_record() {
    let tmp = fixture(&["a.png", "b.png"]);
    let mut session = open_at(&tmp, "a.png");
    std::fs::remove_file(tmp.path().join("a.png")).expect("remove behind its back");

    assert!(session.delete_current(Instant::now()).is_err());
    assert_eq!(names(&session), vec!["a.png", "b.png"]);
}

#[test]
fn reload_picks_up_new_files() {
    let tmp = fixture(&["b.png", "d.png"]);
    let mut session = open_at(&tmp, "d.png");

    write(tmp.path().join("a.png"), PNG_MAGIC).expect("write a.png");
    session.reload().expect("reload");

    assert_eq!(names(&session), vec!["a.png", "b.png", "d.png"]);
    assert_eq!(session.status_line(), "[3/3] d.png");
}

#[test]
fn replace_swaps_collection() {
    let tmp = fixture(&["a.png", "b.png"]);
    let mut session = open_at(&tmp, "a.png");

    session.replace(FileCollection::new());
    assert!(session.current().is_none());
    assert_eq!(session.slideshow().state(), SlideshowState::Denied);
}
