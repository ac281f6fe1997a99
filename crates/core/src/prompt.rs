use crate::{
    duration::DurationProfile,
    error::{Result, ScriptError},
    taxonomy::{Category, CategoryId},
    types::{Language, ScriptRequest, ScriptSegments},
};

/// System and user messages for one chat completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

static RAW_STORIES_VOICE: &str = r#"
RAW STORY VOICE:
Write like telling a friend a real story that happened to you.
- Show the emotional journey: careful -> bored -> impulsive -> regret
- Use natural speech: "Spent 4 hours building position. Result? +$5. Cool. Whatever."
- Include internal dialogue in quotes: "Quick win," I told myself
- Be vulnerable about mistakes
"#;

/// Build the prompt that asks the model for a new script
pub fn build_generation_prompt(
    request: &ScriptRequest,
    category: &Category,
    profile: &DurationProfile,
) -> Result<Prompt> {
    let seed = request.input_text.trim();
    if seed.is_empty() {
        return Err(ScriptError::EmptyInput);
    }

    let mut system = format!(
        r#"You are a scriptwriter for short-form forex trading videos.
Create a forex video script.
Category: {name} ({description})
Tone: {tone}
CTA style: {cta_style}
Example topics: {examples}
"#,
        name = category.name,
        description = category.description,
        tone = category.tone,
        cta_style = category.cta_style,
        examples = category.examples.join(", "),
    );

    if category.id == CategoryId::RawStories {
        system.push_str(RAW_STORIES_VOICE);
    }

    system.push_str(&format!(
        "\nTarget words: Hook {}, Body {}, CTA {} (about {} total)\n",
        profile.hook, profile.body, profile.cta, profile.total
    ));

    let user = format!(
        r#"{prefix}: {seed}

Create a {length} video script.

Format:
**HOOK:**
[hook text]

**BODY:**
[body text]

**CTA:**
[cta text]"#,
        prefix = request.input_kind.prompt_prefix(),
        length = profile.label,
    );

    Ok(Prompt { system, user })
}

/// Render segments as the labeled block sent for transcreation
pub fn labeled_block(segments: &ScriptSegments) -> String {
    format!(
        "HOOK: {}\n\nBODY: {}\n\nCTA: {}",
        segments.hook, segments.body, segments.cta
    )
}

/// Build the prompt that asks the model to transcreate an existing script
pub fn build_transcreation_prompt(segments: &ScriptSegments, language: &Language) -> Prompt {
    let language_name = language.display_name();

    let system = format!("You transcreate forex content to {language_name} for video.");

    let user = format!(
        r#"Transcreate this English forex video script to {language_name}.

Requirements:
- Make it natural for spoken video content
- Adapt culturally for {language_name} audience
- Keep same emotional impact
- Maintain forex terms accurately

Original:
{original}

Transcreate maintaining HOOK/BODY/CTA structure."#,
        original = labeled_block(segments),
    );

    Prompt { system, user }
}
