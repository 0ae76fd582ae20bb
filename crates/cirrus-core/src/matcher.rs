//! Keyword-scoring template matcher. A prompt that closely matches a
//! known architecture pattern gets the canned template diagram instead of
//! a model round trip.

use crate::templates::{self, Template};

/// Minimum accumulated tag-length score for a confident match.
pub const MIN_SCORE: usize = 12;

/// Minimum number of distinct tags that must hit. A single long tag can
/// clear the score threshold on its own without genuine topical overlap,
/// so one hit is never enough.
pub const MIN_HITS: usize = 2;

/// Score a prompt against the built-in template catalog.
pub fn best_match(prompt: &str) -> Option<&'static Template> {
    best_match_in(prompt, templates::all())
}

/// Score a prompt against an explicit template list. Each tag that is a
/// literal substring of the lowercased prompt adds its character length
/// to the template's score and counts as one distinct hit. The highest
/// score wins; the first-declared template wins ties. The winner is
/// returned only if it clears both thresholds.
pub fn best_match_in<'a>(prompt: &str, catalog: &'a [Template]) -> Option<&'a Template> {
    let prompt = prompt.to_lowercase();
    if prompt.trim().is_empty() {
        return None;
    }

    let mut best: Option<(&Template, usize, usize)> = None;
    for template in catalog {
        let mut score = 0;
        let mut hits = 0;
        for tag in template.tags {
            if prompt.contains(tag) {
                score += tag.len();
                hits += 1;
            }
        }
        let current_best = best.map(|(_, s, _)| s).unwrap_or(0);
        if score > current_best {
            best = Some((template, score, hits));
        }
    }

    best.and_then(|(template, score, hits)| {
        if score >= MIN_SCORE && hits >= MIN_HITS {
            tracing::debug!(template = template.id, score, hits, "template match");
            Some(template)
        } else {
            None
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::all;

    #[test]
    fn kafka_bigquery_prompt_matches_streaming_template() {
        let t = best_match("real-time event processing with Kafka and BigQuery").unwrap();
        assert_eq!(t.id, "streaming_analytics");
    }

    #[test]
    fn generic_prompt_matches_nothing() {
        assert!(best_match("please help me").is_none());
        assert!(best_match("").is_none());
        assert!(best_match("   ").is_none());
    }

    #[test]
    fn matcher_is_deterministic() {
        let prompt = "salesforce crm reporting warehouse";
        let a = best_match(prompt).map(|t| t.id);
        for _ in 0..10 {
            assert_eq!(best_match(prompt).map(|t| t.id), a);
        }
    }

    #[test]
    fn single_long_tag_hit_is_rejected() {
        // "customer 360" alone is 12 chars, enough for the score
        // threshold but not the distinct-hit minimum.
        let tags: Vec<&str> = all()
            .iter()
            .flat_map(|t| t.tags.iter().copied())
            .filter(|tag| "customer 360 please".contains(tag))
            .collect();
        assert_eq!(tags, ["customer 360"]);
        assert!(best_match("customer 360 please").is_none());
    }

    #[test]
    fn case_is_ignored() {
        let t = best_match("KAFKA STREAMING into BIGQUERY").unwrap();
        assert_eq!(t.id, "streaming_analytics");
    }

    #[test]
    fn first_declared_template_wins_ties() {
        let diagram = crate::assemble("empty", None, &[], &[]);
        let mk = |id: &'static str| Template {
            id,
            name: id,
            tags: &["kafka", "bigquery"],
            diagram: diagram.clone(),
        };
        let catalog = vec![mk("first"), mk("second")];
        let winner = best_match_in("move kafka events into bigquery", &catalog).unwrap();
        assert_eq!(winner.id, "first");
    }

    #[test]
    fn higher_score_beats_declaration_order() {
        let diagram = crate::assemble("empty", None, &[], &[]);
        let catalog = vec![
            Template { id: "weak", name: "weak", tags: &["kafka", "events"], diagram: diagram.clone() },
            Template {
                id: "strong",
                name: "strong",
                tags: &["kafka", "events", "bigquery", "streaming"],
                diagram: diagram.clone(),
            },
        ];
        let winner = best_match_in("streaming kafka events into bigquery", &catalog).unwrap();
        assert_eq!(winner.id, "strong");
    }
}
