use crate::error::Result;
use crate::models::question::Mcq;
use crate::services::{mcq_parser, question_bank};
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

/// Fewer parsed questions than this and the whole result is replaced by the
/// fallback bank; a shorter assessment is not meaningful signal.
pub const MIN_QUESTIONS: usize = 3;

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    response: String,
}

/// Client for the text-generation backend (Ollama's generate endpoint).
/// `base_url` is `None` when no backend was configured, which is a distinct
/// condition from the backend answering badly.
#[derive(Clone)]
pub struct AIService {
    client: Client,
    base_url: Option<String>,
    model: String,
}

impl AIService {
    pub fn new(base_url: Option<String>, model: String, client: Client) -> Self {
        Self {
            client,
            base_url,
            model,
        }
    }

    /// Produces the question set for one assessment run. Invocation failures
    /// and unusably sparse output both substitute the fallback bank; a
    /// missing backend yields an empty set with no substitution.
    pub async fn generate_mcqs(&self, tech_stack: &str) -> Vec<Mcq> {
        let Some(base_url) = &self.base_url else {
            tracing::error!("no text generation backend configured; cannot generate questions");
            return Vec::new();
        };

        let prompt = build_prompt(tech_stack);
        let raw = match self.complete(base_url, &prompt).await {
            Ok(raw) => raw,
            Err(e) => {
                tracing::error!(error = ?e, "question generation request failed; using the fallback set");
                return question_bank::fallback_mcqs();
            }
        };

        let mut mcqs = mcq_parser::parse_mcqs(&raw, tech_stack);
        if mcqs.len() < MIN_QUESTIONS {
            tracing::warn!(
                parsed = mcqs.len(),
                "not enough usable questions were generated; using the fallback set"
            );
            return question_bank::fallback_mcqs();
        }
        mcqs.truncate(mcq_parser::MAX_QUESTIONS);
        mcqs
    }

    async fn complete(&self, base_url: &str, prompt: &str) -> Result<String> {
        let payload = serde_json::json!({
            "model": self.model,
            "prompt": prompt,
            "stream": false,
            "options": { "temperature": 0.5 }
        });

        let res = self
            .client
            .post(format!("{}/api/generate", base_url.trim_end_matches('/')))
            .json(&payload)
            .timeout(Duration::from_secs(120))
            .send()
            .await?;

        if !res.status().is_success() {
            let status = res.status();
            let text = res.text().await.unwrap_or_default();
            return Err(anyhow::anyhow!("Generation API error {}: {}", status, text).into());
        }

        let body: GenerateResponse = res.json().await?;
        Ok(body.response)
    }
}

fn build_prompt(tech_stack: &str) -> String {
    format!(
        "Generate exactly 5 multiple-choice technical questions for a candidate with experience in: {tech_stack}\n\
         \n\
         Use this EXACT format for each question:\n\
         \n\
         Question 1: [Your question here]\n\
         A) Option A\n\
         B) Option B\n\
         C) Option C\n\
         D) Option D\n\
         Answer: A\n\
         \n\
         Question 2: [Your question here]\n\
         A) Option A\n\
         B) Option B\n\
         C) Option C\n\
         D) Option D\n\
         Answer: B\n\
         \n\
         Make questions practical and relevant to the technologies mentioned. \
         Ensure exactly one correct answer per question."
    )
}
