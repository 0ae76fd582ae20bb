//! Prompt-to-diagram generation. A prompt first runs through the template
//! matcher; only prompts with no confident template match go to a model.
//! Either way the result is a fully assembled diagram.

pub mod engine;
mod parse;
mod prompt;

use cirrus_core::settings::{ai_configured, AiSettings};
use cirrus_core::store::{DiagramRecord, DiagramStore, StoreError};
use cirrus_core::{assemble, matcher, Diagram};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error("prompt is empty")]
    EmptyPrompt,
    #[error("no template matched and AI is not configured")]
    NotConfigured,
    #[error("unknown provider: {0}")]
    UnknownProvider(String),
    #[error("model request failed: {0}")]
    Upstream(String),
    #[error("model returned unusable output: {0}")]
    MalformedResponse(String),
    #[error(transparent)]
    Store(#[from] StoreError),
}

const DEFAULT_TITLE: &str = "Cloud Architecture";

/// Produce a diagram for a natural-language prompt.
///
/// Template matches never touch the network, so they work without any AI
/// configuration. The model path requires configured settings and is
/// bounded by [`engine::LLM_TIMEOUT`].
pub async fn generate(prompt: &str, settings: &AiSettings) -> Result<Diagram, GenerateError> {
    let prompt = prompt.trim();
    if prompt.is_empty() {
        return Err(GenerateError::EmptyPrompt);
    }

    if let Some(template) = matcher::best_match(prompt) {
        tracing::info!(template = template.id, "serving template match");
        return Ok(template.diagram.clone());
    }

    if !ai_configured(settings) {
        return Err(GenerateError::NotConfigured);
    }

    let system = prompt::system_prompt();
    let user_msg = prompt::user_message(prompt);
    tracing::info!(provider = %settings.provider, model = %settings.model, "generating via model");

    let raw = engine::generate(settings, &system, &user_msg).await?;
    let draft = parse::parse_draft(&raw)?;

    let title = if draft.title.trim().is_empty() {
        DEFAULT_TITLE.to_string()
    } else {
        draft.title
    };
    let mut diagram = assemble(&title, draft.subtitle, &draft.nodes, &draft.edges);
    if diagram.subtitle.is_none() {
        diagram.subtitle = Some(format!(
            "{} products · {} connections",
            diagram.nodes.len(),
            diagram.edges.len()
        ));
    }
    Ok(diagram)
}

/// Generate a diagram and persist it in one step.
pub async fn generate_and_save(
    prompt: &str,
    owner: &str,
    settings: &AiSettings,
    store: &DiagramStore,
) -> Result<DiagramRecord, GenerateError> {
    let diagram = generate(prompt, settings).await?;
    Ok(store.save(owner, prompt.trim(), &diagram)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cirrus_core::store::DiagramStore;

    #[tokio::test]
    async fn empty_prompt_is_rejected() {
        let settings = AiSettings::default();
        assert!(matches!(
            generate("   ", &settings).await,
            Err(GenerateError::EmptyPrompt)
        ));
    }

    #[tokio::test]
    async fn template_match_needs_no_configuration() {
        let settings = AiSettings::default();
        let diagram = generate("stream kafka events into bigquery", &settings)
            .await
            .unwrap();
        assert!(diagram.nodes.iter().any(|n| n.id == "src_kafka"));
        assert!(!diagram.threats.is_empty());
    }

    #[tokio::test]
    async fn unmatched_prompt_without_settings_fails_fast() {
        let settings = AiSettings::default();
        assert!(matches!(
            generate("design a video transcoding farm", &settings).await,
            Err(GenerateError::NotConfigured)
        ));
    }

    #[tokio::test]
    async fn template_match_saves_a_record() {
        let dir = tempfile::tempdir().unwrap();
        let store = DiagramStore::new(dir.path());
        let settings = AiSettings::default();
        let record =
            generate_and_save("  kafka streaming into bigquery ", "local", &settings, &store)
                .await
                .unwrap();
        assert_eq!(record.prompt, "kafka streaming into bigquery");
        assert_eq!(store.list("local").unwrap().len(), 1);
    }
}
