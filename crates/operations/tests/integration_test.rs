//! Integration tests for the store operations.
//!
//! These run queries and commands together against a seeded store and check
//! the observable properties of the API.

use std::collections::HashSet;

use movie_store::{MovieId, MovieStore, NewMovie};
use operations::{AddMovie, DeleteMovie, FindMovie, ListMovies, MovieCommand, MovieQuery};

fn inception() -> NewMovie {
    NewMovie::new("Inception", "Christopher Nolan", "2010-07-16")
}

#[test]
fn test_seed_add_delete_scenario() {
    let mut store = MovieStore::seeded();

    // The seed record is returned exactly
    let shawshank = FindMovie::new(Some(MovieId::from("1"))).run(&store).unwrap();
    assert_eq!(shawshank.title, "The Shawshank Redemption");
    assert_eq!(shawshank.director, "Frank Darabont");
    assert_eq!(shawshank.release_date, "1994-09-10");

    // Adding a movie yields a fresh id and grows the list to two
    let added = AddMovie::new(inception()).execute(&mut store);
    assert!(!added.id.as_str().is_empty());
    assert_ne!(added.id, shawshank.id);
    assert_eq!(ListMovies.run(&store).len(), 2);

    // Deleting the seed leaves only the new movie
    DeleteMovie::new(MovieId::from("1")).execute(&mut store);
    let remaining = ListMovies.run(&store);
    assert_eq!(remaining, vec![added]);
}

#[test]
fn test_added_ids_are_unique_and_non_empty() {
    let mut store = MovieStore::seeded();
    let mut seen: HashSet<MovieId> = store.list_all().iter().map(|m| m.id.clone()).collect();

    for i in 0..50 {
        let added = AddMovie::new(NewMovie::new(format!("Movie {}", i), "D", "2000"))
            .execute(&mut store);
        assert!(!added.id.as_str().is_empty());
        assert!(seen.insert(added.id), "id was reused");
    }
}

#[test]
fn test_add_then_list_contains_exactly_one_new_record() {
    let mut store = MovieStore::seeded();
    let before = ListMovies.run(&store);

    AddMovie::new(inception()).execute(&mut store);
    let after = ListMovies.run(&store);

    let new_records: Vec<_> = after.iter().filter(|m| !before.contains(m)).collect();
    assert_eq!(new_records.len(), 1);
    assert_eq!(new_records[0].title, "Inception");
    assert_eq!(new_records[0].director, "Christopher Nolan");
    assert_eq!(new_records[0].release_date, "2010-07-16");
}

#[test]
fn test_delete_existing_shrinks_list_by_one() {
    let mut store = MovieStore::seeded();
    let added = AddMovie::new(inception()).execute(&mut store);
    let before = ListMovies.run(&store).len();

    let deleted = DeleteMovie::new(added.id.clone()).execute(&mut store);
    assert_eq!(deleted, Some(added.clone()));

    let after = ListMovies.run(&store);
    assert_eq!(after.len(), before - 1);
    assert!(after.iter().all(|m| m.id != added.id));
}

#[test]
fn test_delete_missing_leaves_list_unchanged() {
    let mut store = MovieStore::seeded();
    AddMovie::new(inception()).execute(&mut store);
    let before = ListMovies.run(&store);

    let deleted = DeleteMovie::new(MovieId::from("does-not-exist")).execute(&mut store);
    assert!(deleted.is_none());
    assert_eq!(ListMovies.run(&store), before);
}

#[test]
fn test_find_returns_exact_record_or_none() {
    let mut store = MovieStore::new();
    let added = AddMovie::new(inception()).execute(&mut store);

    assert_eq!(FindMovie::new(Some(added.id.clone())).run(&store), Some(added));
    assert_eq!(FindMovie::new(Some(MovieId::from("x"))).run(&store), None);
}
