use super::{OptionMap, OptionValue};
use std::path::{Component, Path, PathBuf};

/// Joins a relative `path` onto `cwd` and collapses `.`, `..` and redundant
/// separators. Purely lexical; the filesystem is never consulted.
pub fn absolutize(path: &Path, cwd: &Path) -> PathBuf {
    let joined = if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    };

    let mut normalized = PathBuf::new();
    for component in joined.components() {
        match component {
            Component::Prefix(_) | Component::RootDir => normalized.push(component.as_os_str()),
            Component::CurDir => {}
            // `..` at the root stays at the root.
            Component::ParentDir => {
                normalized.pop();
            }
            Component::Normal(part) => normalized.push(part),
        }
    }
    normalized
}

/// Rewrites the text value under `name` into absolute form. Unset and blank
/// values are left alone so validation still sees them as missing.
pub fn sanitize_path_option(options: &mut OptionMap, name: &str, cwd: &Path) {
    let raw = match options.get(name) {
        Some(OptionValue::Text(value)) if !value.trim().is_empty() => value.clone(),
        Some(OptionValue::Integer(value)) => value.to_string(),
        _ => return,
    };
    let absolute = absolutize(Path::new(&raw), cwd);
    match absolute.into_os_string().into_string() {
        Ok(absolute) => {
            tracing::debug!(option = name, from = %raw, to = %absolute, "sanitized path option");
            options.insert(name, OptionValue::Text(absolute));
        }
        Err(absolute) => {
            tracing::warn!(
                option = name,
                cwd = %cwd.display(),
                path = ?absolute,
                "absolute path is not valid UTF-8; leaving option unchanged"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parent_segments_never_climb_above_root() {
        assert_eq!(
            absolutize(Path::new("../../../x"), Path::new("/a")),
            PathBuf::from("/x")
        );
    }

    #[test]
    fn redundant_separators_and_trailing_slash_are_removed() {
        assert_eq!(
            absolutize(Path::new("out//nested/./"), Path::new("/work")),
            PathBuf::from("/work/out/nested")
        );
    }
}
