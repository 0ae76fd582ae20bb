//! Prompt construction: a system prompt carrying the full product
//! catalog plus strict output-shape rules, and a thin user message.

use std::fmt::Write;

use cirrus_core::catalog::CATALOG;

/// Compact one-line-per-product catalog listing for model consumption.
fn catalog_listing() -> String {
    let mut out = String::with_capacity(4096);
    for entry in CATALOG {
        let _ = writeln!(
            out,
            "{} [{}] {} — {}",
            entry.id,
            entry.layer().as_str(),
            entry.name,
            entry.subtitle
        );
    }
    out
}

pub fn system_prompt() -> String {
    format!(
        r#"You are a cloud data-platform architect. Given a user's request, select products from the catalog below and connect them into a coherent architecture.

CATALOG (id [layer] name — role):
{listing}
Rules:
- Use only product ids from the catalog, exactly as written.
- Pick 8 to 20 products. Always include the pillar_* products that the request implies.
- Edges reference product ids. Number the main data path with step 1, 2, 3, ... in flow order.
- Use step 0 for control, orchestration, and observability edges.
- Keep edge labels under 4 words.

Respond with ONLY a JSON object, no prose, no code fences:
{{"title": "...", "subtitle": "...", "nodes": ["id", ...], "edges": [{{"from": "id", "to": "id", "label": "...", "step": 1}}, ...]}}"#,
        listing = catalog_listing()
    )
}

pub fn user_message(prompt: &str) -> String {
    format!("USER REQUEST:\n{prompt}\n\nJSON:")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn system_prompt_lists_every_product() {
        let system = system_prompt();
        for entry in CATALOG {
            assert!(system.contains(entry.id), "missing {}", entry.id);
        }
    }

    #[test]
    fn system_prompt_demands_bare_json() {
        let system = system_prompt();
        assert!(system.contains("ONLY a JSON object"));
        assert!(system.contains("step 0"));
    }

    #[test]
    fn user_message_carries_the_prompt() {
        assert!(user_message("oracle to bigquery").contains("oracle to bigquery"));
    }
}
