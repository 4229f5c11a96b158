//! PageRank on hand-checked link graphs.

use webrank::{AuthorityEngine, Error, PageRankConfig};

use super::common::{
    assert_close, corpus_of, cycle_corpus, dangling_corpus, link_corpus, make_page, page_uri,
    rank_of, rank_with_defaults, star_corpus, url, DELTA,
};

// ============================================================================
// REFERENCE GRAPHS
// ============================================================================

#[test]
fn test_star_graph() {
    let engine = rank_with_defaults(&star_corpus());
    assert_close(rank_of(&engine, "a"), 0.47973, DELTA);
    for leaf in ["b", "c", "d"] {
        assert_close(rank_of(&engine, leaf), 0.17342, DELTA);
    }
    assert!(engine.report().converged);
}

#[test]
fn test_cycle_is_uniform() {
    let engine = rank_with_defaults(&cycle_corpus());
    for name in ["a", "b", "c"] {
        assert_close(rank_of(&engine, name), 1.0 / 3.0, DELTA);
    }
    // Uniform is already the fixed point.
    assert_eq!(engine.report().iterations, 1);
}

#[test]
fn test_dangling_and_unlinked_pages() {
    let engine = rank_with_defaults(&dangling_corpus());
    let expected = [
        ("a", 0.31706),
        ("b", 0.18719),
        ("c", 0.13199),
        ("d", 0.31132),
        ("e", 0.05244),
    ];
    for (name, rank) in expected {
        assert_close(rank_of(&engine, name), rank, DELTA);
    }
    let total: f64 = engine.ranks().map(|(_, rank)| rank).sum();
    assert_close(total, 1.0, 1e-9);
}

#[test]
fn test_unlinked_page_gets_teleport_plus_dangling_share() {
    let engine = rank_with_defaults(&dangling_corpus());
    let c = rank_of(&engine, "c");
    // E only receives the surf term and C's pooled share.
    assert_close(rank_of(&engine, "e"), 0.15 / 5.0 + 0.85 * c / 5.0, DELTA);
}

// ============================================================================
// LINK FILTERING
// ============================================================================

#[test]
fn test_self_and_foreign_links_are_ignored() {
    let (a, b) = (page_uri("a"), page_uri("b"));
    let with_noise = corpus_of(vec![
        make_page(&a, &[a.as_str(), b.as_str(), b.as_str(), "https://somewhere.else/"], &[]),
        make_page(&b, &[a.as_str()], &[]),
    ]);
    let clean = link_corpus(&[("a", &["b"][..]), ("b", &["a"][..])]);

    let noisy = rank_with_defaults(&with_noise);
    let expected = rank_with_defaults(&clean);
    for name in ["a", "b"] {
        assert_close(rank_of(&noisy, name), rank_of(&expected, name), 1e-12);
    }
}

#[test]
fn test_foreign_uri_is_unknown() {
    let engine = rank_with_defaults(&star_corpus());
    let err = engine
        .compute_page_rank(&url("https://somewhere.else/"))
        .unwrap_err();
    assert!(matches!(err, Error::UnknownPage(uri) if uri.as_str() == "https://somewhere.else/"));
}

// ============================================================================
// PARAMETERS AND REPORT
// ============================================================================

#[test]
fn test_iteration_cap_stops_early() {
    let config = PageRankConfig {
        limit: 2,
        ..PageRankConfig::default()
    };
    let engine = AuthorityEngine::new(&star_corpus(), config).unwrap();
    let report = engine.report();
    assert_eq!(report.iterations, 2);
    assert!(!report.converged);
    assert!(report.max_delta > config.epsilon);
}

// ============================================================================
// PUBLICATION LAG
// ============================================================================

#[test]
fn test_first_pass_convergence_publishes_initial_table() {
    // Pass 1 moves A from 0.25 to 0.675, a delta of 0.425, which is within
    // epsilon. The table published is the one that pass started from.
    let config = PageRankConfig {
        epsilon: 0.5,
        ..PageRankConfig::default()
    };
    let engine = AuthorityEngine::new(&star_corpus(), config).unwrap();
    for name in ["a", "b", "c", "d"] {
        assert_eq!(rank_of(&engine, name), 0.25);
    }
    let report = engine.report();
    assert_eq!(report.iterations, 1);
    assert!(report.converged);
    assert_close(report.max_delta, 0.425, 1e-12);
}

#[test]
fn test_convergence_publishes_second_to_last_table() {
    let converged = rank_with_defaults(&dangling_corpus());
    let passes = converged.report().iterations;
    assert!(converged.report().converged);
    assert!(passes > 1);

    // Capping the iteration one pass short publishes the last completed pass,
    // which is the table the converging pass started from.
    let capped = AuthorityEngine::new(
        &dangling_corpus(),
        PageRankConfig {
            limit: passes - 1,
            ..PageRankConfig::default()
        },
    )
    .unwrap();
    assert!(!capped.report().converged);
    for name in ["a", "b", "c", "d", "e"] {
        assert_eq!(rank_of(&converged, name), rank_of(&capped, name));
    }

    // One more pass would have moved at least one rank.
    let uncapped = AuthorityEngine::new(
        &dangling_corpus(),
        PageRankConfig {
            epsilon: 0.0,
            limit: passes,
            ..PageRankConfig::default()
        },
    )
    .unwrap();
    let moved = ["a", "b", "c", "d", "e"]
        .iter()
        .any(|name| rank_of(&uncapped, name) != rank_of(&converged, name));
    assert!(moved);
}

#[test]
fn test_looser_epsilon_converges_sooner() {
    let tight = rank_with_defaults(&dangling_corpus());
    let loose = AuthorityEngine::new(
        &dangling_corpus(),
        PageRankConfig {
            epsilon: 1e-2,
            ..PageRankConfig::default()
        },
    )
    .unwrap();
    assert!(loose.report().converged);
    assert!(loose.report().iterations < tight.report().iterations);
}

#[test]
fn test_top_pages_best_first() {
    let engine = rank_with_defaults(&dangling_corpus());
    let top = engine.top_pages(2).unwrap();
    let names: Vec<&str> = top.iter().map(|page| page.uri.as_str()).collect();
    assert_eq!(names, vec![page_uri("a"), page_uri("d")]);
    assert!(top[0].rank >= top[1].rank);
    assert_eq!(engine.top_pages(100).unwrap().len(), 5);
}

#[test]
fn test_top_pages_ties_break_by_uri() {
    let engine = rank_with_defaults(&cycle_corpus());
    let top = engine.top_pages(3).unwrap();
    let names: Vec<&str> = top.iter().map(|page| page.uri.as_str()).collect();
    assert_eq!(names, vec![page_uri("a"), page_uri("b"), page_uri("c")]);
}
