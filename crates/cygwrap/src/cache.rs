use std::io;
use std::path::Path;

/// Outcome of wiping the cache directory
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ClearStats {
    pub removed: usize,
    pub failed: usize,
}

/// Remove every entry under `cache_dir`, leaving the directory itself in place.
///
/// A missing directory is treated as already empty. Entries that cannot be
/// removed are logged and skipped; the rest are still removed.
pub async fn clear_cache_contents(cache_dir: &Path) -> ClearStats {
    let mut stats = ClearStats::default();

    let mut entries = match tokio::fs::read_dir(cache_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            tracing::debug!(cache_dir = %cache_dir.display(), "cache directory absent, nothing to clear");
            return stats;
        }
        Err(e) => {
            tracing::warn!(cache_dir = %cache_dir.display(), error = %e, "failed to read cache directory");
            stats.failed += 1;
            return stats;
        }
    };

    loop {
        let entry = match entries.next_entry().await {
            Ok(Some(entry)) => entry,
            Ok(None) => break,
            Err(e) => {
                tracing::warn!(cache_dir = %cache_dir.display(), error = %e, "failed to list cache entry");
                stats.failed += 1;
                break;
            }
        };

        let path = entry.path();
        match remove_entry(&path).await {
            Ok(()) => stats.removed += 1,
            // Already gone, e.g. a concurrent clean
            Err(e) if e.kind() == io::ErrorKind::NotFound => {}
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "failed to remove cache entry");
                stats.failed += 1;
            }
        }
    }

    tracing::debug!(
        cache_dir = %cache_dir.display(),
        removed = stats.removed,
        failed = stats.failed,
        "cache cleared"
    );
    stats
}

/// Symlinks are unlinked, never followed.
async fn remove_entry(path: &Path) -> io::Result<()> {
    let metadata = tokio::fs::symlink_metadata(path).await?;
    if metadata.is_dir() {
        tokio::fs::remove_dir_all(path).await
    } else {
        tokio::fs::remove_file(path).await
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use super::*;

    fn populate(root: &Path) {
        fs::write(root.join("setup.ini"), "setup").expect("Failed to write file");
        let nested = root.join("x86_64").join("release").join("gcc");
        fs::create_dir_all(&nested).expect("Failed to create dirs");
        fs::write(nested.join("gcc-core-11.4.0-1.tar.xz"), "pkg").expect("Failed to write file");
    }

    #[tokio::test]
    async fn test_clear_removes_contents_but_keeps_dir() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        populate(dir.path());

        let stats = clear_cache_contents(dir.path()).await;

        assert_eq!(stats, ClearStats { removed: 2, failed: 0 });
        assert!(dir.path().is_dir());
        assert_eq!(fs::read_dir(dir.path()).expect("read dir").count(), 0);
    }

    #[tokio::test]
    async fn test_clear_twice_is_harmless() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        populate(dir.path());

        clear_cache_contents(dir.path()).await;
        let stats = clear_cache_contents(dir.path()).await;

        assert_eq!(stats, ClearStats::default());
        assert!(dir.path().is_dir());
    }

    #[tokio::test]
    async fn test_clear_missing_dir_is_noop() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let missing = dir.path().join("packages");

        let stats = clear_cache_contents(&missing).await;

        assert_eq!(stats, ClearStats::default());
        assert!(!missing.exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_clear_does_not_follow_symlinks() {
        let outside = tempfile::tempdir().expect("Failed to create temp dir");
        fs::write(outside.path().join("keep.txt"), "keep").expect("Failed to write file");

        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        std::os::unix::fs::symlink(outside.path(), dir.path().join("link"))
            .expect("Failed to create symlink");

        let stats = clear_cache_contents(dir.path()).await;

        assert_eq!(stats.removed, 1);
        assert!(outside.path().join("keep.txt").exists());
    }
}
