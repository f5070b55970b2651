use santa_sorter::core::GameState;
use santa_sorter::session;
use santa_sorter::store::HighScoreFile;
use santa_sorter::term::NullCues;
use santa_sorter::types::{GameEvent, SESSION_MS};

#[test]
fn high_score_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("data").join("highscore.txt");

    let store = HighScoreFile::new(&path);
    assert_eq!(store.load(), 0);
    store.save(35).unwrap();

    let reopened = HighScoreFile::new(&path);
    let game = GameState::new(1).with_high_score(reopened.load());
    assert_eq!(game.high_score(), 35);
}

#[test]
fn garbage_file_counts_as_zero() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    std::fs::write(&path, "lots\n").unwrap();

    let store = HighScoreFile::new(&path);
    assert!(store.try_load().is_err());
    assert_eq!(store.load(), 0);
}

#[test]
fn only_new_records_are_written() {
    let dir = tempfile::tempdir().unwrap();
    let store = HighScoreFile::new(dir.path().join("highscore.txt"));
    store.save(20).unwrap();

    let mut game = GameState::new(4).with_high_score(store.load());
    game.start();
    game.tick(SESSION_MS);

    let mut cues = NullCues;
    for ev in game.take_events() {
        session::dispatch(&ev, &store, &mut cues);
    }
    assert_eq!(store.load(), 20);
}

#[test]
fn record_from_dispatch_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    let store = HighScoreFile::new(&path);

    let mut cues = NullCues;
    session::dispatch(
        &GameEvent::SessionEnded {
            score: 45,
            new_high_score: true,
        },
        &store,
        &mut cues,
    );

    let game = GameState::new(1).with_high_score(HighScoreFile::new(&path).load());
    assert_eq!(game.high_score(), 45);
}

#[test]
fn whitespace_around_value_is_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("highscore.txt");
    std::fs::write(&path, "  42 \n").unwrap();
    assert_eq!(HighScoreFile::new(&path).load(), 42);
}
