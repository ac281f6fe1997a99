use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::info;

use crate::{
    error::Result,
    format::{export_file_name, format_script_export},
    parser::parse_script,
    types::{Language, ScriptSegments},
};

/// Default place for exported scripts
pub fn get_export_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("forexscript")
        .join("scripts")
}

/// Write an exported script into `dir`, creating it if needed
pub async fn save_export(dir: &Path, file_name: &str, text: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir).await?;
    let path = dir.join(file_name);
    fs::write(&path, text).await?;
    info!(path = %path.display(), "script exported");
    Ok(path)
}

/// Export segments into `dir` under a timestamped file name
pub async fn save_script(
    dir: &Path,
    language: Option<&Language>,
    segments: &ScriptSegments,
) -> Result<PathBuf> {
    let file_name = export_file_name(language, chrono::Local::now());
    save_export(dir, &file_name, &format_script_export(segments)).await
}

/// Read an exported script back into segments
pub async fn load_export(path: &Path) -> Result<ScriptSegments> {
    let text = fs::read_to_string(path).await?;
    Ok(parse_script(&text))
}
