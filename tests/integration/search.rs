//! Searcher: relevance weighted by page rank.

use webrank::{PageRankConfig, Searcher};

use super::common::{assert_close, corpus_of, make_page, text_corpus};

fn searcher() -> Searcher {
    Searcher::new(&text_corpus(), PageRankConfig::default()).unwrap()
}

#[test]
fn test_hits_are_best_first() {
    let searcher = searcher();
    let hits = searcher.search(&["cats", "dogs", "birds"], 10).unwrap();
    assert_eq!(hits.len(), 3);
    for pair in hits.windows(2) {
        assert!(pair[0].score >= pair[1].score);
    }
    for hit in &hits {
        assert_close(hit.score, hit.relevance * hit.page_rank, 1e-15);
        assert_eq!(hit.title, format!("Title of {}", hit.uri));
    }
}

#[test]
fn test_limit_truncates() {
    let searcher = searcher();
    let all = searcher.search(&["cats", "dogs", "birds"], 10).unwrap();
    let one = searcher.search(&["cats", "dogs", "birds"], 1).unwrap();
    assert_eq!(one.len(), 1);
    assert_eq!(one[0], all[0]);
}

#[test]
fn test_only_matching_pages_returned() {
    let searcher = searcher();
    let hits = searcher.search_text("purr", 10).unwrap();
    assert_eq!(hits.len(), 1);
    assert_eq!(hits[0].uri.as_str(), "https://pets.example/cats");
    // "and" is everywhere, so it matches nothing.
    assert!(searcher.search_text("and", 10).unwrap().is_empty());
}

#[test]
fn test_search_text_splits_on_whitespace() {
    let searcher = searcher();
    let from_text = searcher.search_text("  Dogs\tbark \n", 5).unwrap();
    let from_terms = searcher.search(&["dogs", "bark"], 5).unwrap();
    assert_eq!(from_text, from_terms);
}

#[test]
fn test_authority_breaks_relevance_ties() {
    // Identical text, but every other page links to "hub".
    let corpus = corpus_of(vec![
        make_page("https://x.example/hub", &[], &["ferris", "crab"]),
        make_page("https://x.example/leaf", &["https://x.example/hub"], &["ferris", "crab"]),
        make_page("https://x.example/fan", &["https://x.example/hub"], &["other"]),
    ]);
    let searcher = Searcher::new(&corpus, PageRankConfig::default()).unwrap();
    let hits = searcher.search_text("ferris", 10).unwrap();
    assert_eq!(hits.len(), 2);
    assert_close(hits[0].relevance, hits[1].relevance, 1e-12);
    assert_eq!(hits[0].uri.as_str(), "https://x.example/hub");
    assert!(hits[0].page_rank > hits[1].page_rank);
}

#[test]
fn test_blurbs_travel_with_hits() {
    let corpus = corpus_of(vec![
        make_page("https://x.example/a", &[], &["ferris"]).with_blurb("All about Ferris."),
        make_page("https://x.example/b", &[], &["tux"]),
    ]);
    let searcher = Searcher::new(&corpus, PageRankConfig::default()).unwrap();
    let hits = searcher.search_text("ferris", 10).unwrap();
    assert_eq!(hits[0].blurb, "All about Ferris.");
}

#[test]
fn test_equal_scores_come_out_by_uri() {
    // Three dangling pages share rank 1/3; the two twins share relevance too.
    let corpus = corpus_of(vec![
        make_page("https://x.example/twin-b", &[], &["ferris", "crab"]),
        make_page("https://x.example/other", &[], &["tux"]),
        make_page("https://x.example/twin-a", &[], &["ferris", "crab"]),
    ]);
    let searcher = Searcher::new(&corpus, PageRankConfig::default()).unwrap();
    let hits = searcher.search_text("ferris", 10).unwrap();
    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].score, hits[1].score);
    assert_eq!(hits[0].uri.as_str(), "https://x.example/twin-a");
    assert_eq!(hits[1].uri.as_str(), "https://x.example/twin-b");
    assert_ne!(hits[0], hits[1]);
}

#[test]
fn test_hit_relevance_matches_engine() {
    let searcher = searcher();
    let query = ["Cats", "bark", "sing", "hamster"];
    let hits = searcher.search(&query, 10).unwrap();
    assert!(!hits.is_empty());
    for hit in &hits {
        let direct = searcher.relevance().compute_relevance(&query, &hit.uri).unwrap();
        assert_eq!(hit.relevance, direct);
    }
}
