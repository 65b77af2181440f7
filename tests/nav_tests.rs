//! Navigation integration tests for kupo.
//!
//! These tests drive the AppState controller the way the terminal loop
//! does, via key events, and check the pane synchronization invariants.
//! Temporary directories are created per test and cleaned up automatically.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use kupo_tui::app::AppState;
use kupo_tui::config::Config;
use rand::rng;
use rand::seq::SliceRandom;
use std::error;
use std::fs::{self, File};
use std::path::Path;
use tempfile::tempdir;

fn press(app: &mut AppState, code: KeyCode) {
    app.handle_keypress(KeyEvent::new(code, KeyModifiers::NONE));
}

/// Moves the highlight down until it lands on `target`, with a step bound
/// so a broken listing fails the test instead of hanging it.
fn highlight(app: &mut AppState, target: &Path) -> Result<(), Box<dyn error::Error>> {
    for _ in 0..=app.current().entries().len() {
        if app.current().highlighted_path().as_deref() == Some(target) {
            return Ok(());
        }
        press(app, KeyCode::Char('j'));
    }
    Err(format!("could not highlight {}", target.display()).into())
}

#[test]
fn descend_keeps_three_level_invariant() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let base = tempdir()?;
    let home = base.path().join("u");
    let proj = home.join("proj");
    let deep = proj.join("deep");
    fs::create_dir_all(&deep)?;
    File::create(home.join("notes.txt"))?;
    File::create(proj.join("main.rs"))?;
    File::create(deep.join("leaf.txt"))?;

    let mut app = AppState::from_dir(&config, &home)?;

    highlight(&mut app, &proj)?;
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current().source_dir(), proj);
    assert_eq!(app.parent().source_dir(), home);
    assert_eq!(app.parent().highlighted_path(), Some(proj.clone()));

    highlight(&mut app, &deep)?;
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current().source_dir(), deep);
    assert_eq!(app.parent().source_dir(), proj);
    assert_eq!(app.parent().highlighted_path(), Some(deep));
    Ok(())
}

#[test]
fn ascend_restores_highlight_round_trip() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let base = tempdir()?;
    let home = base.path().join("u");
    let proj = home.join("proj");
    fs::create_dir_all(&proj)?;
    File::create(home.join("notes.txt"))?;
    File::create(proj.join("main.rs"))?;

    let mut app = AppState::from_dir(&config, &home)?;

    highlight(&mut app, &proj)?;
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Left);

    assert_eq!(app.current().source_dir(), home);
    assert_eq!(
        app.current().highlighted_path(),
        Some(proj.clone()),
        "ascending must re-highlight the directory just left"
    );
    assert_eq!(app.parent().highlighted_path(), Some(home.clone()));

    // And again, several levels in a row.
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Left);
    assert_eq!(app.current().highlighted_path(), Some(proj));
    Ok(())
}

#[test]
fn rapid_movement_stays_in_bounds() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let dir = tempdir()?;
    let file_count = 10;

    let mut names: Vec<String> = (0..file_count).map(|i| format!("testfile_{i}.txt")).collect();
    names.shuffle(&mut rng());
    for name in &names {
        File::create(dir.path().join(name))?;
    }

    let mut app = AppState::from_dir(&config, dir.path())?;
    assert_eq!(app.current().entries().len(), file_count);

    let down_presses = 1000;
    for _ in 0..down_presses {
        press(&mut app, KeyCode::Char('j'));
    }

    // Initial anchoring selects index 0; movement wraps modulo the count.
    let expected_idx = down_presses % file_count;
    assert_eq!(app.current().selected_idx(), Some(expected_idx));

    for _ in 0..1000 {
        press(&mut app, KeyCode::Char('k'));
    }
    assert_eq!(app.current().selected_idx(), Some(0));
    Ok(())
}

#[test]
fn top_and_bottom_jumps() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let dir = tempdir()?;
    for name in ["aaa.txt", "bbb.txt", "ccc.txt", "ddd.txt"] {
        File::create(dir.path().join(name))?;
    }

    let mut app = AppState::from_dir(&config, dir.path())?;

    app.handle_keypress(KeyEvent::new(KeyCode::Char('G'), KeyModifiers::SHIFT));
    assert_eq!(
        app.current().highlighted_path(),
        Some(dir.path().join("ddd.txt"))
    );

    press(&mut app, KeyCode::Char('g'));
    assert_eq!(
        app.current().highlighted_path(),
        Some(dir.path().join("aaa.txt"))
    );
    Ok(())
}

#[test]
fn unreadable_directory_becomes_empty_pane() -> Result<(), Box<dyn error::Error>> {
    let config = Config::default();
    let base = tempdir()?;
    let home = base.path().join("u");
    let doomed = home.join("doomed");
    fs::create_dir_all(&doomed)?;
    File::create(home.join("notes.txt"))?;

    let mut app = AppState::from_dir(&config, &home)?;
    highlight(&mut app, &doomed)?;

    // The directory vanishes between highlighting and the descend commit.
    fs::remove_dir(&doomed)?;
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.current().source_dir(), doomed);
    assert!(app.current().entries().is_empty());
    assert_eq!(app.current().highlighted_path(), None);

    // Navigation is still fully interactive: ascend recovers.
    press(&mut app, KeyCode::Left);
    assert_eq!(app.current().source_dir(), home);
    assert!(!app.current().entries().is_empty());
    Ok(())
}

#[test]
fn hidden_files_follow_config() -> Result<(), Box<dyn error::Error>> {
    let base = tempdir()?;
    File::create(base.path().join(".hidden"))?;
    File::create(base.path().join("visible.txt"))?;

    let config = Config::default();
    let app = AppState::from_dir(&config, base.path())?;
    let names: Vec<String> = app
        .current()
        .entries()
        .iter()
        .map(|e| e.name_str().into_owned())
        .collect();
    assert_eq!(names, vec!["visible.txt"]);

    let raw: kupo_tui::config::RawConfig = toml::from_str(
        r#"
        [general]
        show_hidden = true
    "#,
    )?;
    let config = Config::from(raw);
    let app = AppState::from_dir(&config, base.path())?;
    assert_eq!(app.current().entries().len(), 2);
    Ok(())
}
