// file: src/input/collector.rs
// description: processing mode selection and repository list reading
// reference: internal input handling

use crate::error::{JeloxError, Result};
use crate::utils::validation::Validator;
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Raw source flags as given on the command line.
#[derive(Debug, Clone, Default)]
pub struct SourceFlags {
    pub url: Option<String>,
    pub directory: Option<PathBuf>,
    pub list: Option<PathBuf>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ListSource {
    File(PathBuf),
    Stdin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Mode {
    SingleRepo(String),
    Directory(PathBuf),
    RepoList(ListSource),
}

impl Mode {
    /// Priority: single url, then directory, then list file or stdin.
    pub fn select(flags: &SourceFlags) -> Self {
        if let Some(url) = flags.url.as_deref().filter(|u| !u.is_empty()) {
            return Mode::SingleRepo(Validator::clean_url(url));
        }

        if let Some(dir) = flags
            .directory
            .as_ref()
            .filter(|d| !d.as_os_str().is_empty())
        {
            return Mode::Directory(dir.clone());
        }

        match flags.list.as_ref().filter(|l| !l.as_os_str().is_empty()) {
            Some(list) => Mode::RepoList(ListSource::File(list.clone())),
            None => Mode::RepoList(ListSource::Stdin),
        }
    }
}

pub fn read_repo_list(source: &ListSource) -> Result<Vec<String>> {
    match source {
        ListSource::File(path) => read_repo_list_file(path),
        ListSource::Stdin => {
            debug!("Reading repository URLs from stdin");
            read_repos(io::stdin().lock())
        }
    }
}

fn read_repo_list_file(path: &Path) -> Result<Vec<String>> {
    let file = File::open(path).map_err(|source| JeloxError::InputOpen {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Reading repository URLs from {}", path.display());
    read_repos(BufReader::new(file))
}

/// One trimmed URL per line. Blank lines stay in place.
pub fn read_repos<R: BufRead>(reader: R) -> Result<Vec<String>> {
    reader
        .lines()
        .map(|line| -> Result<String> { Ok(Validator::clean_url(&line?)) })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;
    use tempfile::TempDir;

    fn flags(url: Option<&str>, dir: Option<&str>, list: Option<&str>) -> SourceFlags {
        SourceFlags {
            url: url.map(String::from),
            directory: dir.map(PathBuf::from),
            list: list.map(PathBuf::from),
        }
    }

    #[test]
    fn test_url_has_priority() {
        let mode = Mode::select(&flags(Some(" https://x/r.git "), Some("/tmp"), Some("l.txt")));
        assert_eq!(mode, Mode::SingleRepo("https://x/r.git".to_string()));
    }

    #[test]
    fn test_directory_beats_list() {
        let mode = Mode::select(&flags(None, Some("/tmp"), Some("l.txt")));
        assert_eq!(mode, Mode::Directory(PathBuf::from("/tmp")));
    }

    #[test]
    fn test_list_file_and_stdin_fallback() {
        assert_eq!(
            Mode::select(&flags(None, None, Some("l.txt"))),
            Mode::RepoList(ListSource::File(PathBuf::from("l.txt")))
        );
        assert_eq!(
            Mode::select(&flags(None, None, None)),
            Mode::RepoList(ListSource::Stdin)
        );
    }

    #[test]
    fn test_empty_flags_count_as_absent() {
        assert_eq!(
            Mode::select(&flags(Some(""), Some(""), Some(""))),
            Mode::RepoList(ListSource::Stdin)
        );
    }

    #[test]
    fn test_read_repos_trims_and_keeps_blank_lines() {
        let input = Cursor::new("  https://a/one.git\n\n\thttps://b/two.git  \r\n");
        let repos = read_repos(input).unwrap();
        assert_eq!(repos, vec!["https://a/one.git", "", "https://b/two.git"]);
    }

    #[test]
    fn test_read_repo_list_file() {
        let temp = TempDir::new().unwrap();
        let list = temp.path().join("repos.txt");
        std::fs::write(&list, "https://a/one.git\nhttps://b/two.git\n").unwrap();

        let repos = read_repo_list(&ListSource::File(list)).unwrap();
        assert_eq!(repos.len(), 2);
    }

    #[test]
    fn test_missing_list_file() {
        let result = read_repo_list(&ListSource::File(PathBuf::from("/nonexistent/repos.txt")));
        assert!(matches!(result, Err(JeloxError::InputOpen { .. })));
    }
}
