use std::path::{Component, Path, PathBuf};

/// Context directory location relative to the executable's directory.
pub(crate) const DEFAULT_CONTEXT_DIR: &str = "../../context_files";

/// `<directory of the running executable>/../../context_files`, normalized.
pub(crate) fn default_context_dir() -> std::io::Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let exe_dir = exe.parent().unwrap_or_else(|| Path::new(""));
    Ok(normalize(&exe_dir.join(DEFAULT_CONTEXT_DIR)))
}

/// Resolve `.` and `..` components without touching the filesystem.
///
/// `..` at the root stays at the root; leading `..` of a relative path is kept.
pub(crate) fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                Some(Component::RootDir | Component::Prefix(_)) => {}
                Some(Component::ParentDir | Component::CurDir) | None => out.push(".."),
            },
            other => out.push(other.as_os_str()),
        }
    }
    out
}
