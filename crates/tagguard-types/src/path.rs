use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};

/// Canonical source-file path used in locations and reports.
///
/// Normalization rules are intentionally simple and deterministic:
/// - always forward slashes (`/`)
/// - no leading `./`
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SrcPath(String);

impl SrcPath {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        let mut v = s.as_ref().replace('\\', "/");
        while v.starts_with("./") {
            v = v.trim_start_matches("./").to_string();
        }
        Self(v)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn to_utf8_pathbuf(&self) -> Utf8PathBuf {
        Utf8PathBuf::from(self.0.clone())
    }
}

impl std::fmt::Display for SrcPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&Utf8Path> for SrcPath {
    fn from(value: &Utf8Path) -> Self {
        SrcPath::new(value.as_str())
    }
}

impl From<Utf8PathBuf> for SrcPath {
    fn from(value: Utf8PathBuf) -> Self {
        SrcPath::new(value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_backslashes_and_dot_prefix() {
        assert_eq!(SrcPath::new("./modules\\vpc\\main.tf").as_str(), "modules/vpc/main.tf");
    }

    #[test]
    fn plain_paths_pass_through() {
        assert_eq!(SrcPath::new("main.tf").as_str(), "main.tf");
    }
}
