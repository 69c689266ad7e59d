//! Lookup for dedicated environments.

use std::path::{Path, PathBuf};

use super::CacheLookup;

/// Console entry point of the tool inside an environment.
pub fn entry_point(env_dir: &Path) -> PathBuf {
    env_dir.join("bin").join("virtualenv")
}

/// Directory of the dedicated environment for a runtime and unpacked release.
///
/// Keyed by `(runtime basename, unpacked basename)`, e.g.
/// `venvs/python3.9/virtualenv-20.14.1`.
pub fn environment_dir(venvs_dir: &Path, runtime: &Path, unpacked: &Path) -> PathBuf {
    venvs_dir
        .join(runtime.file_name().unwrap_or(runtime.as_os_str()))
        .join(unpacked.file_name().unwrap_or(unpacked.as_os_str()))
}

/// Decide whether the dedicated environment is already installed.
///
/// Hit when the entry point exists; the returned path is always the
/// environment directory.
pub fn lookup_environment(venvs_dir: &Path, runtime: &Path, unpacked: &Path) -> CacheLookup {
    let env_dir = environment_dir(venvs_dir, runtime, unpacked);
    if entry_point(&env_dir).exists() {
        CacheLookup::Hit(env_dir)
    } else {
        CacheLookup::Miss(env_dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn environment_dir_is_keyed_by_basenames() {
        let dir = environment_dir(
            Path::new("/work/venvs"),
            Path::new("/home/u/.pyenv/shims/python3.9"),
            Path::new("/work/virtualenv-20.14.1"),
        );
        assert_eq!(dir, PathBuf::from("/work/venvs/python3.9/virtualenv-20.14.1"));
    }

    #[test]
    fn entry_point_lives_in_bin() {
        assert_eq!(
            entry_point(Path::new("/e")),
            PathBuf::from("/e/bin/virtualenv")
        );
    }

    #[test]
    fn missing_entry_point_is_miss() {
        let temp = TempDir::new().unwrap();
        let env_dir = temp.path().join("python3.9/virtualenv-20.14.1");
        fs::create_dir_all(env_dir.join("bin")).unwrap();

        let lookup = lookup_environment(
            temp.path(),
            Path::new("/shims/python3.9"),
            Path::new("/w/virtualenv-20.14.1"),
        );

        assert_eq!(lookup, CacheLookup::Miss(env_dir));
    }

    #[test]
    fn present_entry_point_is_hit() {
        let temp = TempDir::new().unwrap();
        let env_dir = temp.path().join("pypy3/virtualenv-20.14.1");
        fs::create_dir_all(env_dir.join("bin")).unwrap();
        fs::write(env_dir.join("bin/virtualenv"), "").unwrap();

        let lookup = lookup_environment(
            temp.path(),
            Path::new("/shims/pypy3"),
            Path::new("/w/virtualenv-20.14.1"),
        );

        assert_eq!(lookup, CacheLookup::Hit(env_dir));
    }
}
