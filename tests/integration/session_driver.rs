//! Ranking sessions driven by a scripted arbiter, saving to real stores.

use super::test_utils::{numbered_songs, rank_of, ScriptedArbiter};
use rankly::session::{Choice, RankingSession, SessionOutcome};
use rankly::snapshot::restore;
use rankly::song::Song;
use rankly::sort::{Algorithm, Engine};
use rankly::store::{JsonFileStore, SledSessionStore};
use tempfile::TempDir;

fn shuffled(n: usize) -> Vec<Song> {
    let mut songs = numbered_songs(n);
    songs.reverse();
    songs.swap(0, n / 2);
    songs
}

fn ranks(songs: &[Song]) -> Vec<usize> {
    songs.iter().map(rank_of).collect()
}

#[test]
fn test_session_ranks_every_song() {
    let temp = TempDir::new().unwrap();
    for algorithm in [Algorithm::BinaryInsertion, Algorithm::Merge] {
        let engine = Engine::new(algorithm, shuffled(7)).unwrap();
        let store = JsonFileStore::new(temp.path().join("rank.json"));
        let mut session = RankingSession::new("rank", engine, Box::new(store));
        let mut arbiter = ScriptedArbiter::by_number();

        let outcome = session.run(&mut arbiter).unwrap();
        assert_eq!(outcome, SessionOutcome::Ranked(numbered_songs(7)));
        assert_eq!(session.answered(), arbiter.asked);
    }
    assert!(!temp.path().join("rank.json").exists());
}

#[test]
fn test_save_then_resume_from_file() {
    for algorithm in [Algorithm::BinaryInsertion, Algorithm::Merge] {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("saves").join("rank.json");

        let engine = Engine::new(algorithm, shuffled(9)).unwrap();
        let mut session = RankingSession::new("rank", engine, Box::new(JsonFileStore::new(&path)));
        let outcome = session.run(&mut ScriptedArbiter::save_after(4)).unwrap();
        assert_eq!(
            outcome,
            SessionOutcome::Saved {
                location: path.display().to_string()
            }
        );
        assert_eq!(session.answered(), 4);

        let store = JsonFileStore::new(&path);
        let state = store.load().unwrap();
        assert_eq!(state.algorithm(), algorithm);
        assert_eq!(state.item_count(), 9);

        let engine = restore(state).unwrap();
        let mut resumed = RankingSession::new("rank", engine, Box::new(store));
        let outcome = resumed.run(&mut ScriptedArbiter::by_number()).unwrap();
        match outcome {
            SessionOutcome::Ranked(songs) => assert_eq!(ranks(&songs), (1..=9).collect::<Vec<_>>()),
            other => panic!("expected a ranking, got {:?}", other),
        }
    }
}

#[test]
fn test_quit_writes_nothing() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rank.json");
    let engine = Engine::new(Algorithm::Merge, shuffled(5)).unwrap();
    let mut session = RankingSession::new("rank", engine, Box::new(JsonFileStore::new(&path)));

    let outcome = session.run(&mut ScriptedArbiter::quit_after(2)).unwrap();
    assert_eq!(outcome, SessionOutcome::Abandoned);
    assert_eq!(session.answered(), 2);
    assert!(!path.exists());
}

#[test]
fn test_save_at_first_comparison() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("rank.json");
    let engine = Engine::new(Algorithm::BinaryInsertion, shuffled(3)).unwrap();
    let mut session = RankingSession::new("rank", engine, Box::new(JsonFileStore::new(&path)));

    let outcome = session.run(&mut ScriptedArbiter::new(vec![Choice::Save])).unwrap();
    assert!(matches!(outcome, SessionOutcome::Saved { .. }));
    assert_eq!(session.answered(), 0);

    let state = JsonFileStore::new(&path).load().unwrap();
    assert_eq!(state.item_count(), 3);
}

#[test]
fn test_named_session_counts_answers_across_resumes() {
    let temp = TempDir::new().unwrap();
    let sessions = SledSessionStore::new(temp.path().join("db")).unwrap();

    let engine = Engine::new(Algorithm::Merge, shuffled(8)).unwrap();
    let mut first = RankingSession::new("mix", engine, Box::new(sessions.clone()));
    first.run(&mut ScriptedArbiter::save_after(3)).unwrap();

    let record = sessions.require("mix").unwrap();
    assert_eq!(record.comparisons, 3);
    assert_eq!(record.algorithm, Algorithm::Merge);

    let engine = restore(record.state).unwrap();
    let mut second = RankingSession::new("mix", engine, Box::new(sessions.clone()))
        .with_prior_answers(record.comparisons);
    second.run(&mut ScriptedArbiter::save_after(2)).unwrap();

    let record = sessions.require("mix").unwrap();
    assert_eq!(record.comparisons, 5);
    assert_eq!(sessions.list().unwrap().len(), 1);
}

#[test]
fn test_save_before_first_comparison() {
    let temp = TempDir::new().unwrap();
    let engine = Engine::new(Algorithm::Merge, shuffled(4)).unwrap();
    let session = RankingSession::new(
        "rank",
        engine,
        Box::new(JsonFileStore::new(temp.path().join("rank.json"))),
    );
    // saving before the first comparison is still allowed
    assert!(session.save().is_ok());
}
