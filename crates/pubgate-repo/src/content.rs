use crate::source::PathSource;
use camino::Utf8Path;
use pubgate_types::RepoPath;
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Read the text of every content-checked file that is also a candidate path.
///
/// The index version is preferred since that is what a push publishes. When the
/// source cannot provide it the working copy is read instead. Files that are
/// missing or not valid UTF-8 are skipped: a content rule only applies to readable text.
pub fn load_contents(
    source: &dyn PathSource,
    repo_root: &Utf8Path,
    files: &[RepoPath],
    candidates: &[RepoPath],
) -> BTreeMap<RepoPath, String> {
    let candidates: BTreeSet<&RepoPath> = candidates.iter().collect();
    let mut out = BTreeMap::new();

    for file in files {
        if !candidates.contains(file) {
            continue;
        }
        let bytes = match source.read_indexed(file) {
            Ok(bytes) => bytes,
            Err(err) => {
                debug!(path = %file, error = %err, "no index content; reading working copy");
                match std::fs::read(repo_root.join(file.as_str())) {
                    Ok(bytes) => bytes,
                    Err(err) => {
                        debug!(path = %file, error = %err, "skipping unreadable content file");
                        continue;
                    }
                }
            }
        };
        match String::from_utf8(bytes) {
            Ok(text) => {
                out.insert(file.clone(), text);
            }
            Err(_) => debug!(path = %file, "skipping non-UTF-8 content file"),
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticPathSource;
    use camino::Utf8PathBuf;

    fn temp_root() -> (tempfile::TempDir, Utf8PathBuf) {
        let tmp = tempfile::tempdir().expect("temp dir");
        let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf8 path");
        (tmp, root)
    }

    #[test]
    fn falls_back_to_candidate_text_files_on_disk() {
        let (_tmp, root) = temp_root();
        std::fs::write(root.join("README.md"), "see src/engine.py\n").expect("write readme");
        std::fs::write(root.join("NOTES.md"), "untracked\n").expect("write notes");
        std::fs::write(root.join("blob.md"), [0xFFu8, 0xFE, 0x00]).expect("write blob");

        let files = vec![
            RepoPath::new("README.md"),
            RepoPath::new("NOTES.md"),
            RepoPath::new("blob.md"),
            RepoPath::new("missing.md"),
        ];
        let candidates = vec![
            RepoPath::new("README.md"),
            RepoPath::new("blob.md"),
            RepoPath::new("missing.md"),
        ];

        let contents = load_contents(&StaticPathSource::default(), &root, &files, &candidates);
        assert_eq!(contents.len(), 1);
        assert_eq!(
            contents.get(&RepoPath::new("README.md")).map(String::as_str),
            Some("see src/engine.py\n")
        );
    }

    #[test]
    fn index_content_wins_over_working_copy() {
        let (_tmp, root) = temp_root();
        std::fs::write(root.join("README.md"), "clean\n").expect("write readme");
        let source = StaticPathSource::new(&["README.md"], &[] as &[&str])
            .with_indexed("README.md", "model in src/lift.py\n");

        let readme = [RepoPath::new("README.md")];
        let contents = load_contents(&source, &root, &readme, &readme);
        assert_eq!(
            contents.get(&readme[0]).map(String::as_str),
            Some("model in src/lift.py\n")
        );
    }

    #[test]
    fn non_utf8_index_content_is_skipped() {
        let (_tmp, root) = temp_root();
        let source = StaticPathSource::default().with_indexed("README.md", vec![0xFFu8, 0xFE]);
        let readme = [RepoPath::new("README.md")];
        assert!(load_contents(&source, &root, &readme, &readme).is_empty());
    }
}
