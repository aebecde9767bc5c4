use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// A fresh, unique temp path for a movie container.
///
/// Temp movies are the only artifact this crate ever writes to external
/// storage; everything else is in-memory and dies with the process.
pub fn temp_movie_path() -> PathBuf {
    std::env::temp_dir().join(format!("movie_{}.mov", uuid::Uuid::new_v4()))
}

/// Delete a previously delivered temp movie file.
///
/// A cleanup hint, not a correctness operation: a file that no longer
/// exists is logged and swallowed, as is any other filesystem refusal.
pub fn remove_temp_movie_file(path: &Path) {
    match fs::remove_file(path) {
        Ok(()) => log::debug!("removed temp movie {}", path.display()),
        Err(e) if e.kind() == ErrorKind::NotFound => {
            log::warn!("temp movie already gone: {}", path.display());
        }
        Err(e) => log::error!("failed to remove temp movie {}: {}", path.display(), e),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_unique_movie_containers() {
        let a = temp_movie_path();
        let b = temp_movie_path();

        assert_ne!(a, b);
        assert_eq!(a.extension().unwrap(), "mov");
        assert!(a.starts_with(std::env::temp_dir()));
    }

    #[test]
    fn remove_deletes_an_existing_file() {
        let path = temp_movie_path();
        fs::write(&path, b"container bytes").unwrap();

        remove_temp_movie_file(&path);

        assert!(!path.exists());
    }

    #[test]
    fn remove_of_a_missing_file_is_silent() {
        let path = temp_movie_path();
        assert!(!path.exists());

        // Must neither panic nor surface an error.
        remove_temp_movie_file(&path);
    }
}
