use super::*;
use crate::segment::Segmenter;

fn sentences(n: usize) -> Vec<Sentence> {
    let text = (1..=n)
        .map(|i| format!("Sentence number {i} has more than enough words to be checked."))
        .collect::<Vec<_>>()
        .join(" ");
    Segmenter::new(crate::segment::SegmenterConfig::default().with_max_sentences(n))
        .segment(&text)
        .unwrap()
}

fn m(sentence_index: usize, similarity: f64, source: &str) -> Match {
    Match {
        sentence_index,
        matched_text: format!("sentence {sentence_index}"),
        similarity,
        source: source.to_string(),
        start_index: 0,
        end_index: 0,
    }
}

#[test]
fn test_three_of_ten_scenario() {
    let sentences = sentences(10);
    let matches = vec![m(2, 70.0, "a"), m(5, 80.0, "b"), m(9, 90.0, "c")];

    let result = aggregate("doc text", &sentences, 10, matches);

    assert_eq!(result.plagiarism_score, 24.0);
    assert_eq!(result.originality_score, 76.0);
    assert_eq!(result.sentences_analyzed, 10);
    assert_eq!(result.sentences_checked, 10);
}

#[test]
fn test_ratio_uses_analyzed_sentences_not_checked() {
    // Only the two sentences with candidates were checked; the ratio still
    // counts all four.
    let result = aggregate("doc", &sentences(4), 2, vec![m(1, 80.0, "a")]);

    assert_eq!(result.sentences_analyzed, 4);
    assert_eq!(result.sentences_checked, 2);
    assert_eq!(result.plagiarism_score, 20.0);
}

#[test]
fn test_no_matches_is_fully_original() {
    let result = aggregate("doc text", &sentences(4), 4, Vec::new());
    assert_eq!(result.plagiarism_score, 0.0);
    assert_eq!(result.originality_score, 100.0);
    assert!(!result.has_matches());
    assert!(result.sources.is_empty());
}

#[test]
fn test_single_perfect_match_is_diluted() {
    let result = aggregate("doc", &sentences(12), 12, vec![m(1, 100.0, "a")]);
    assert_eq!(result.plagiarism_score, 8.3);
    assert_eq!(result.originality_score, 91.7);
}

#[test]
fn test_all_sentences_matched() {
    let matches = (1..=3).map(|i| m(i, 100.0, "a")).collect();
    let result = aggregate("doc", &sentences(3), 3, matches);
    assert_eq!(result.plagiarism_score, 100.0);
    assert_eq!(result.originality_score, 0.0);
}

#[test]
fn test_scores_are_complementary() {
    for (n, sims) in [
        (7, vec![66.6, 71.3]),
        (12, vec![99.9, 65.1, 80.0, 77.7]),
        (5, vec![65.5]),
    ] {
        let matches = sims.iter().enumerate().map(|(i, s)| m(i + 1, *s, "x")).collect();
        let result = aggregate("doc", &sentences(n), n, matches);
        assert!((0.0..=100.0).contains(&result.plagiarism_score));
        assert!(
            (result.originality_score - (100.0 - result.plagiarism_score)).abs() < 0.051,
            "{result:?}"
        );
    }
}

#[test]
fn test_matches_sorted_by_sentence_index() {
    let matches = vec![m(7, 80.0, "c"), m(2, 80.0, "a"), m(4, 80.0, "b")];
    let result = aggregate("doc", &sentences(8), 8, matches);
    let order: Vec<usize> = result.matches.iter().map(|m| m.sentence_index).collect();
    assert_eq!(order, vec![2, 4, 7]);
}

#[test]
fn test_sources_are_distinct_in_order() {
    let matches = vec![m(1, 80.0, "b"), m(2, 80.0, "a"), m(3, 80.0, "b")];
    let result = aggregate("doc", &sentences(3), 3, matches);
    assert_eq!(result.sources, vec!["b", "a"]);
}

#[test]
fn test_counts_use_full_text_and_text_is_truncated() {
    let text = "héllo wörld ".repeat(1000);
    let result = aggregate(&text, &sentences(1), 1, Vec::new());

    assert_eq!(result.word_count, 2000);
    assert_eq!(result.character_count, 12_000);
    assert_eq!(result.text.chars().count(), 10_000);
}

#[test]
fn test_result_serializes_camel_case() {
    let result = aggregate("some words here", &sentences(2), 2, vec![m(1, 70.0, "s")]);
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["plagiarismScore"], 35.0);
    assert_eq!(json["originalityScore"], 65.0);
    assert_eq!(json["wordCount"], 3);
    assert_eq!(json["characterCount"], 15);
    assert_eq!(json["sentencesAnalyzed"], 2);
    assert_eq!(json["sentencesChecked"], 2);
    assert_eq!(json["matches"][0]["matchedText"], "sentence 1");
}
