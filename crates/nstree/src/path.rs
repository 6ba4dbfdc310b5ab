/// Splits a path into its non-empty `/`-delimited segments.
///
/// Leading, trailing and repeated slashes are collapsed. `.` and `..` are
/// ordinary names here; no normalization is performed.
#[must_use]
pub fn split(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Joins segments into the canonical absolute form, e.g. `/a/b`.
#[must_use]
pub fn join<S: AsRef<str>>(segments: &[S]) -> String {
    let mut out = String::new();
    for seg in segments {
        out.push('/');
        out.push_str(seg.as_ref());
    }
    if out.is_empty() {
        out.push('/');
    }
    out
}

/// Splits a file path into its containing folder segments and the filename.
///
/// Returns None when the path has fewer than two segments: a file always
/// lives below at least one top-level folder.
#[must_use]
pub fn split_file(path: &str) -> Option<(Vec<&str>, &str)> {
    let mut parts = split(path);
    if parts.len() < 2 {
        return None;
    }
    let filename = parts.pop()?;
    Some((parts, filename))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_split() {
        assert_eq!(split("/root/files/"), vec!["root", "files"]);
        assert_eq!(split("a/b"), vec!["a", "b"]);
        assert_eq!(split("//a///b//"), vec!["a", "b"]);

        // Nothing to address
        assert!(split("").is_empty());
        assert!(split("/").is_empty());
        assert!(split("////").is_empty());

        // Dots are names, not navigation
        assert_eq!(split("/a/../b/."), vec!["a", "..", "b", "."]);
    }

    #[test]
    fn test_join() {
        assert_eq!(join(&["root", "files"]), "/root/files");
        assert_eq!(join::<&str>(&[]), "/");
        assert_eq!(join(&split("//x//y/")), "/x/y");
    }

    #[test]
    fn test_split_file() {
        assert_eq!(
            split_file("/root/files/main.txt"),
            Some((vec!["root", "files"], "main.txt"))
        );
        assert_eq!(split_file("/top/f"), Some((vec!["top"], "f")));
        assert_eq!(split_file("/lonely"), None);
        assert_eq!(split_file("/"), None);
    }
}
