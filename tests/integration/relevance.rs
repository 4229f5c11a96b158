//! TF-IDF relevance on a small text corpus.

use webrank::{Error, RelevanceEngine};

use super::common::{assert_close, text_corpus, url};

const CATS: &str = "https://pets.example/cats";
const DOGS: &str = "https://pets.example/dogs";
const BIRDS: &str = "https://pets.example/birds";

fn engine() -> RelevanceEngine {
    RelevanceEngine::new(&text_corpus())
}

fn score(engine: &RelevanceEngine, query: &[&str], page: &str) -> f64 {
    engine.compute_relevance(query, &url(page)).unwrap()
}

#[test]
fn test_single_term_cosine() {
    let engine = engine();
    // cats page: cats 2/5, purr 1/5, sleep 1/5 (all × ln 3), "and" weighs 0.
    assert_close(score(&engine, &["cats"], CATS), 2.0 / 6f64.sqrt(), 1e-12);
    assert_eq!(score(&engine, &["cats"], DOGS), 0.0);
    assert_eq!(score(&engine, &["cats"], BIRDS), 0.0);
}

#[test]
fn test_term_in_every_document_carries_no_signal() {
    let engine = engine();
    assert_eq!(engine.idf("and"), Some(0.0));
    for page in [CATS, DOGS, BIRDS] {
        assert_eq!(score(&engine, &["and"], page), 0.0);
    }
    // Adding it to a query changes nothing.
    assert_close(
        score(&engine, &["cats", "and"], CATS),
        score(&engine, &["cats"], CATS),
        1e-12,
    );
}

#[test]
fn test_repeated_query_terms_shift_direction() {
    let engine = engine();
    assert_close(score(&engine, &["cats", "purr"], CATS), 3.0 / 12f64.sqrt(), 1e-12);
    assert_close(
        score(&engine, &["cats", "cats", "purr"], CATS),
        5.0 / 30f64.sqrt(),
        1e-12,
    );
    // A lone term repeated keeps its direction.
    assert_close(
        score(&engine, &["cats", "cats"], CATS),
        score(&engine, &["cats"], CATS),
        1e-12,
    );
}

#[test]
fn test_query_terms_are_case_insensitive() {
    let engine = engine();
    assert_eq!(
        score(&engine, &["Bark", "RUN"], DOGS),
        score(&engine, &["bark", "run"], DOGS)
    );
    assert!(score(&engine, &["Bark"], DOGS) > 0.0);
}

#[test]
fn test_unknown_terms_and_pages() {
    let engine = engine();
    assert_eq!(score(&engine, &["hamster"], CATS), 0.0);
    let err = engine
        .compute_relevance(&["cats"], &url("https://pets.example/fish"))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownPage(_)));
}

#[test]
fn test_engine_sizes() {
    let engine = engine();
    assert_eq!(engine.corpus_size(), 3);
    // cats purr and sleep dogs bark run play birds sing fly
    assert_eq!(engine.vocabulary_size(), 11);
}
