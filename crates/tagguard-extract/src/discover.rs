use anyhow::Context;
use camino::Utf8PathBuf;
use std::path::PathBuf;
use walkdir::WalkDir;

/// Recursively discover `.tf` files under each root, in root order then
/// sorted walk order within a root. The resulting order governs downstream
/// resource order and violation tie-breaking, so it must be deterministic.
pub fn discover_tf_files(roots: &[Utf8PathBuf]) -> anyhow::Result<Vec<Utf8PathBuf>> {
    let mut out: Vec<Utf8PathBuf> = Vec::new();

    for root in roots {
        for entry in WalkDir::new(root).sort_by_file_name() {
            let entry = entry.with_context(|| format!("walk {root}"))?;
            if !entry.file_type().is_file() {
                continue;
            }
            let Some(path) = pathbuf_to_utf8(entry.path().to_path_buf()) else {
                continue;
            };
            if path.extension() == Some("tf") {
                out.push(path);
            }
        }
    }

    Ok(out)
}

fn pathbuf_to_utf8(path: PathBuf) -> Option<Utf8PathBuf> {
    Utf8PathBuf::from_path_buf(path).ok()
}
