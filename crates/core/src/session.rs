//! Per-user working state: the last generated script and its transcreations.
//!
//! Every action goes through the session it belongs to, so separate sessions
//! never see each other's results. A failed action leaves the session exactly
//! as it was.

use std::collections::BTreeMap;

use tracing::warn;
use uuid::Uuid;

use crate::{
    client::GenerationClient,
    error::{Result, ScriptError},
    pipeline::{generate_script, transcreate_script},
    types::{
        GeneratedScript, Language, ScriptRequest, TranscreatedScript, TranscreationRequest,
    },
};

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    script: Option<GeneratedScript>,
    transcreations: BTreeMap<Language, TranscreatedScript>,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Self {
        Self {
            id: Uuid::new_v4(),
            script: None,
            transcreations: BTreeMap::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn script(&self) -> Option<&GeneratedScript> {
        self.script.as_ref()
    }

    pub fn transcreation(&self, language: &Language) -> Option<&TranscreatedScript> {
        self.transcreations.get(language)
    }

    pub fn transcreations(&self) -> impl Iterator<Item = &TranscreatedScript> {
        self.transcreations.values()
    }

    /// Generate a script and make it the session's current one.
    ///
    /// Stored transcreations are left in place; they are replaced only by
    /// transcreating again.
    pub async fn generate(
        &mut self,
        client: &dyn GenerationClient,
        request: &ScriptRequest,
    ) -> Result<&GeneratedScript> {
        let script = generate_script(client, request).await.inspect_err(|e| {
            warn!(session = %self.id, error = %e, "generation failed");
        })?;
        Ok(&*self.script.insert(script))
    }

    /// Transcreate the current script and store the result under `language`
    pub async fn transcreate(
        &mut self,
        client: &dyn GenerationClient,
        language: &Language,
    ) -> Result<&TranscreatedScript> {
        let script = self.script.as_ref().ok_or(ScriptError::NoScript)?;
        let request = TranscreationRequest {
            source: script.segments.clone(),
            language: language.clone(),
        };
        let result = transcreate_script(client, &request)
            .await
            .inspect_err(|e| {
                warn!(session = %self.id, language = language.code(), error = %e, "transcreation failed");
            })?;

        self.transcreations.insert(language.clone(), result);
        Ok(&self.transcreations[language])
    }
}
