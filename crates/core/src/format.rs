use chrono::{DateTime, Local};

use crate::{
    types::{GeneratedScript, Language, ScriptSegments},
    words::budget,
};

/// Plain-text export: each section under its own header, blank line after
pub fn format_script_export(segments: &ScriptSegments) -> String {
    format!(
        "HOOK:\n{}\n\nBODY:\n{}\n\nCTA:\n{}\n",
        segments.hook, segments.body, segments.cta
    )
}

/// `script_YYYYmmdd_HHMMSS.txt`, or `script_<lang>_YYYYmmdd_HHMMSS.txt`
pub fn export_file_name(language: Option<&Language>, at: DateTime<Local>) -> String {
    let stamp = at.format("%Y%m%d_%H%M%S");
    match language {
        Some(language) => format!("script_{}_{}.txt", language.code(), stamp),
        None => format!("script_{}.txt", stamp),
    }
}

/// Word counts against targets as a one-line summary
pub fn format_word_counts(script: &GeneratedScript) -> String {
    let report = budget(&script.word_counts, &script.target);
    format!(
        "Total {}/{} | Hook {}/{} | Body {}/{} | CTA {}/{}",
        report.total.actual,
        report.total.target,
        report.hook.actual,
        report.hook.target,
        report.body.actual,
        report.body.target,
        report.cta.actual,
        report.cta.target,
    )
}
