use crate::intake::types::CandidateFile;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

pub fn guess_media_type(path: &Path) -> String {
    mime_guess::from_path(path)
        .first_or_octet_stream()
        .essence_str()
        .to_string()
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

pub fn candidate_from_path(path: &Path) -> anyhow::Result<CandidateFile> {
    let metadata = fs::metadata(path)
        .with_context(|| format!("Failed to read metadata for {}", path.display()))?;

    // Directories fall through to application/octet-stream and get rejected.
    let media_type = if metadata.is_dir() {
        "application/octet-stream".to_string()
    } else {
        guess_media_type(path)
    };

    Ok(CandidateFile::new(
        display_name(path),
        metadata.len(),
        media_type,
    ))
}

/// Converts the paths returned by the file picker, keeping their order.
pub fn candidates_from_paths(paths: &[PathBuf]) -> anyhow::Result<Vec<CandidateFile>> {
    paths.iter().map(|p| candidate_from_path(p)).collect()
}

/// Converts files dropped onto the window.
///
/// Native drops carry a path; web drops carry the name and bytes in memory.
pub fn candidates_from_dropped(
    dropped: &[egui::DroppedFile],
) -> anyhow::Result<Vec<CandidateFile>> {
    dropped
        .iter()
        .map(|file| match &file.path {
            Some(path) => candidate_from_path(path),
            None => {
                let name = file.name.clone();
                let size = file.bytes.as_ref().map(|b| b.len() as u64).unwrap_or(0);
                Ok(CandidateFile::new(
                    name.clone(),
                    size,
                    guess_media_type(Path::new(&name)),
                ))
            }
        })
        .collect()
}
