use tracing::info;

use crate::{
    client::{GenerationClient, GenerationParams},
    error::Result,
    parser::parse_script,
    prompt::{build_generation_prompt, build_transcreation_prompt},
    types::{GeneratedScript, ScriptRequest, TranscreatedScript, TranscreationRequest},
    words::evaluate,
};

/// Generate a new script for `request`
pub async fn generate_script(
    client: &dyn GenerationClient,
    request: &ScriptRequest,
) -> Result<GeneratedScript> {
    let category = request.category.category();
    let target = request.duration.profile();
    let prompt = build_generation_prompt(request, category, &target)?;

    info!(
        category = %request.category,
        duration = %request.duration,
        "generating script"
    );
    let raw = client.generate(&prompt, GenerationParams::SCRIPT).await?;

    let segments = parse_script(&raw);
    let word_counts = evaluate(&segments);
    info!(
        hook = word_counts.hook,
        body = word_counts.body,
        cta = word_counts.cta,
        total = word_counts.total,
        "script generated"
    );

    Ok(GeneratedScript {
        request: request.clone(),
        segments,
        word_counts,
        target,
    })
}

/// Transcreate the source script, keeping the hook/body/CTA split
pub async fn transcreate_script(
    client: &dyn GenerationClient,
    request: &TranscreationRequest,
) -> Result<TranscreatedScript> {
    let language = &request.language;
    let prompt = build_transcreation_prompt(&request.source, language);

    info!(language = language.code(), "transcreating script");
    let raw = client
        .generate(&prompt, GenerationParams::TRANSCREATION)
        .await?;

    Ok(TranscreatedScript {
        language: language.clone(),
        segments: parse_script(&raw),
    })
}

#[cfg(test)]
pub(crate) mod testing {
    use std::{collections::VecDeque, sync::Mutex};

    use async_trait::async_trait;

    use crate::{
        client::{GenerationClient, GenerationParams},
        error::{Result, ScriptError},
        prompt::Prompt,
    };

    /// Replays canned replies and records every call
    #[derive(Default)]
    pub struct FakeClient {
        replies: Mutex<VecDeque<Result<String>>>,
        pub calls: Mutex<Vec<(Prompt, GenerationParams)>>,
    }

    impl FakeClient {
        pub fn replying<S: Into<String>>(replies: impl IntoIterator<Item = S>) -> Self {
            Self {
                replies: Mutex::new(replies.into_iter().map(|r| Ok(r.into())).collect()),
                calls: Mutex::default(),
            }
        }

        pub fn failing(reason: &str) -> Self {
            let client = Self::default();
            client
                .replies
                .lock()
                .unwrap()
                .push_back(Err(ScriptError::GenerationFailed {
                    reason: reason.to_string(),
                }));
            client
        }

        pub fn call_count(&self) -> usize {
            self.calls.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl GenerationClient for FakeClient {
        async fn generate(&self, prompt: &Prompt, params: GenerationParams) -> Result<String> {
            self.calls.lock().unwrap().push((prompt.clone(), params));
            self.replies
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Ok(String::new()))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{testing::FakeClient, *};
    use crate::{
        duration::DurationLabel,
        error::ScriptError,
        taxonomy::CategoryId,
        types::{InputKind, Language, ScriptSegments},
    };

    const REPLY: &str = "**HOOK:**\nLost $500 in 4 seconds.\n\n**BODY:**\nHeld too long, panicked, sold low.\n\n**CTA:**\nComment your worst trade.";

    fn request() -> ScriptRequest {
        ScriptRequest {
            input_text: "How I lost $500 in 4 seconds".into(),
            input_kind: InputKind::Topic,
            category: CategoryId::RawStories,
            duration: DurationLabel::Short,
        }
    }

    #[tokio::test]
    async fn generate_parses_and_counts() {
        let client = FakeClient::replying([REPLY]);
        let script = generate_script(&client, &request()).await.unwrap();

        assert_eq!(script.segments.hook, "Lost $500 in 4 seconds.");
        assert_eq!(script.segments.cta, "Comment your worst trade.");
        assert_eq!(script.word_counts.total, 15);
        assert_eq!(script.target, DurationLabel::Short.profile());

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls.len(), 1);
        assert_eq!(calls[0].1, GenerationParams::SCRIPT);
        assert!(calls[0].0.system.contains("RAW STORY VOICE"));
    }

    #[tokio::test]
    async fn generate_never_retries_on_failure() {
        let client = FakeClient::failing("rate limited");
        let err = generate_script(&client, &request()).await.unwrap_err();
        assert!(matches!(err, ScriptError::GenerationFailed { ref reason } if reason == "rate limited"));
        assert_eq!(client.call_count(), 1);
    }

    #[tokio::test]
    async fn empty_input_makes_no_call() {
        let client = FakeClient::replying([REPLY]);
        let mut req = request();
        req.input_text = " ".into();
        let err = generate_script(&client, &req).await.unwrap_err();
        assert!(matches!(err, ScriptError::EmptyInput));
        assert_eq!(client.call_count(), 0);
    }

    #[tokio::test]
    async fn over_budget_script_is_still_returned() {
        let long_body = "word ".repeat(200);
        let client = FakeClient::replying([format!("**HOOK:** a\n**BODY:** {long_body}\n**CTA:** b")]);
        let script = generate_script(&client, &request()).await.unwrap();
        assert_eq!(script.word_counts.body, 200);
        assert!(script.word_counts.total > script.target.total);
    }

    #[tokio::test]
    async fn transcreate_reparses_reply() {
        let client = FakeClient::replying(["HOOK: ขาดทุน\n\nBODY: ถือนานเกินไป\n\nCTA: คอมเมนต์"]);
        let request = TranscreationRequest {
            source: crate::parser::parse_script(REPLY),
            language: Language::new("th"),
        };
        let result = transcreate_script(&client, &request).await.unwrap();

        assert_eq!(result.language.code(), "th");
        assert_eq!(result.segments.hook, "ขาดทุน");
        assert_eq!(result.segments.body, "ถือนานเกินไป");
        assert_eq!(result.segments.cta, "คอมเมนต์");

        let calls = client.calls.lock().unwrap();
        assert_eq!(calls[0].1, GenerationParams::TRANSCREATION);
        assert!(calls[0].0.user.contains("HOOK: Lost $500 in 4 seconds."));
    }

    #[tokio::test]
    async fn transcreate_unstructured_reply_lands_in_body() {
        let client = FakeClient::replying(["Một kịch bản không có nhãn."]);
        let request = TranscreationRequest {
            source: ScriptSegments::default(),
            language: Language::new("xx"),
        };
        let result = transcreate_script(&client, &request).await.unwrap();
        assert_eq!(result.language.display_name(), "xx");
        assert_eq!(result.segments.body, "Một kịch bản không có nhãn.");
        assert!(result.segments.hook.is_empty());
    }
}
