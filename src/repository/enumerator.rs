// file: src/repository/enumerator.rs
// description: clone a repository into a scratch workspace and list its tracked files
// reference: https://git-scm.com/docs/git-ls-tree

use crate::config::{Config, GitConfig, ScratchConfig};
use crate::error::{JeloxError, Result};
use crate::models::PathCollection;
use crate::repository::scratch::ScratchWorkspace;
use std::path::Path;
use std::process::{Command, Output, Stdio};
use tracing::{debug, info, warn};

pub struct RepositoryEnumerator {
    git: GitConfig,
    scratch: ScratchConfig,
}

impl RepositoryEnumerator {
    pub fn new(config: &Config) -> Self {
        Self {
            git: config.git.clone(),
            scratch: config.scratch.clone(),
        }
    }

    /// Clone, list, clean up. The scratch directory is removed on every path out.
    pub fn enumerate(&self, url: &str) -> Result<PathCollection> {
        let scratch = ScratchWorkspace::create(&self.scratch)?;

        let listing = self
            .clone_repo(url, scratch.path())
            .and_then(|()| self.list_tracked_files(scratch.path()));

        settle(listing, scratch.remove())
    }

    fn clone_repo(&self, url: &str, dest: &Path) -> Result<()> {
        info!("Cloning repository from {}", url);

        let output = self.run(self.git().arg("clone").arg("--").arg(url).arg(dest))?;

        if !output.status.success() {
            return Err(JeloxError::Clone {
                url: url.to_string(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        debug!("Cloned {} into {}", url, dest.display());
        Ok(())
    }

    fn list_tracked_files(&self, repo: &Path) -> Result<PathCollection> {
        let output = self.run(
            self.git()
                .args(["ls-tree", "-r", "-z", "--name-only", "HEAD"])
                .current_dir(repo),
        )?;

        if !output.status.success() {
            return Err(JeloxError::Listing {
                path: repo.to_path_buf(),
                message: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        let files = PathCollection::from_nul_separated(&output.stdout);
        info!("Repository lists {} tracked files", files.len());
        Ok(files)
    }

    fn git(&self) -> Command {
        let mut cmd = Command::new(&self.git.program);
        cmd.env("GIT_TERMINAL_PROMPT", "0").stdin(Stdio::null());
        cmd
    }

    fn run(&self, cmd: &mut Command) -> Result<Output> {
        cmd.output().map_err(|source| JeloxError::Spawn {
            program: self.git.program.clone(),
            source,
        })
    }
}

/// A failed cleanup is reported but never discards a listing.
fn settle(listing: Result<PathCollection>, cleanup: Result<()>) -> Result<PathCollection> {
    if let Err(err) = cleanup {
        warn!("{}", err);
    }
    listing
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::fs;
    use tempfile::TempDir;

    pub(crate) fn git(dir: &Path, args: &[&str]) {
        let status = Command::new("git")
            .args([
                "-c",
                "user.name=jelox",
                "-c",
                "user.email=jelox@example.com",
                "-c",
                "commit.gpgsign=false",
            ])
            .args(args)
            .current_dir(dir)
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .unwrap();
        assert!(status.success(), "git {:?} failed", args);
    }

    /// Creates a repository with one commit holding `files`, plus one untracked file.
    pub(crate) fn init_repo(dir: &Path, files: &[&str]) {
        git(dir, &["init", "-q"]);
        for file in files {
            let path = dir.join(file);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(&path, file.as_bytes()).unwrap();
        }
        git(dir, &["add", "."]);
        git(dir, &["commit", "-q", "-m", "init"]);
        fs::write(dir.join("untracked.log"), "noise").unwrap();
    }

    fn test_config(scratch_base: &Path) -> Config {
        Config {
            scratch: ScratchConfig {
                base_dir: Some(scratch_base.to_path_buf()),
                ..Config::default_config().scratch
            },
            ..Config::default_config()
        }
    }

    fn leftover_scratch_dirs(scratch_base: &Path) -> usize {
        match fs::read_dir(scratch_base.join("jelox-repo")) {
            Ok(entries) => entries.count(),
            Err(_) => 0,
        }
    }

    #[test]
    fn test_enumerate_lists_tracked_files() {
        let origin = TempDir::new().unwrap();
        let scratch_base = TempDir::new().unwrap();
        init_repo(origin.path(), &["README.md", "src/main.rs", "docs/a b.txt"]);

        let enumerator = RepositoryEnumerator::new(&test_config(scratch_base.path()));
        let mut files = enumerator
            .enumerate(&origin.path().to_string_lossy())
            .unwrap()
            .into_vec();
        files.sort();

        assert_eq!(files, vec!["README.md", "docs/a b.txt", "src/main.rs"]);
        assert_eq!(leftover_scratch_dirs(scratch_base.path()), 0);
    }

    #[test]
    fn test_clone_failure_removes_scratch() {
        let missing = TempDir::new().unwrap();
        let scratch_base = TempDir::new().unwrap();

        let enumerator = RepositoryEnumerator::new(&test_config(scratch_base.path()));
        let url = missing.path().join("no-such-repo").to_string_lossy().to_string();
        let result = enumerator.enumerate(&url);

        match result {
            Err(JeloxError::Clone { url: failed, .. }) => assert_eq!(failed, url),
            other => panic!("expected clone error, got {:?}", other),
        }
        assert_eq!(leftover_scratch_dirs(scratch_base.path()), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_enumerate_keeps_unusual_names_verbatim() {
        let origin = TempDir::new().unwrap();
        let scratch_base = TempDir::new().unwrap();
        init_repo(origin.path(), &["say \"hi\".txt", "tab\there.txt", "back\\slash.txt"]);

        let enumerator = RepositoryEnumerator::new(&test_config(scratch_base.path()));
        let mut files = enumerator
            .enumerate(&origin.path().to_string_lossy())
            .unwrap()
            .into_vec();
        files.sort();

        assert_eq!(
            files,
            vec!["back\\slash.txt", "say \"hi\".txt", "tab\there.txt"]
        );
    }

    #[test]
    fn test_empty_repository_listing_fails() {
        let origin = TempDir::new().unwrap();
        let scratch_base = TempDir::new().unwrap();
        git(origin.path(), &["init", "-q"]);

        let enumerator = RepositoryEnumerator::new(&test_config(scratch_base.path()));
        let result = enumerator.enumerate(&origin.path().to_string_lossy());

        assert!(matches!(result, Err(JeloxError::Listing { .. })));
        assert_eq!(leftover_scratch_dirs(scratch_base.path()), 0);
    }

    #[test]
    fn test_missing_git_program() {
        let scratch_base = TempDir::new().unwrap();
        let mut config = test_config(scratch_base.path());
        config.git.program = "jelox-definitely-not-git".to_string();

        let result = RepositoryEnumerator::new(&config).enumerate("https://example.com/r.git");
        assert!(matches!(result, Err(JeloxError::Spawn { .. })));
        assert_eq!(leftover_scratch_dirs(scratch_base.path()), 0);
    }

    #[test]
    fn test_cleanup_failure_keeps_listing() {
        let listing = Ok(PathCollection::from_lines("a\nb\n"));
        let cleanup = Err(JeloxError::RemoveScratch {
            path: "/tmp/jelox-repo/jelo-x".into(),
            source: std::io::Error::other("busy"),
        });

        let files = settle(listing, cleanup).unwrap();
        assert_eq!(files.into_vec(), vec!["a", "b"]);
    }

    #[test]
    fn test_listing_error_wins_over_cleanup() {
        let listing = Err(JeloxError::Listing {
            path: "/tmp/x".into(),
            message: "bad HEAD".to_string(),
        });

        let result = settle(listing, Ok(()));
        assert!(matches!(result, Err(JeloxError::Listing { .. })));
    }
}
