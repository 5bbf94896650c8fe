// file: src/pipeline/orchestrator.rs
// description: dispatches the selected mode to the enumerators and applies list-mode error policy
// reference: sequential clone, list and collect workflow

use crate::config::Config;
use crate::directory::DirectoryEnumerator;
use crate::error::Result;
use crate::input::{Mode, read_repo_list};
use crate::models::PathCollection;
use crate::pipeline::progress::{ProgressTracker, RunStats};
use crate::repository::RepositoryEnumerator;
use crate::utils::logging::Notice;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct RunOutcome {
    pub files: PathCollection,
    pub stats: RunStats,
}

pub struct Orchestrator {
    repositories: RepositoryEnumerator,
    directories: DirectoryEnumerator,
    colored: bool,
}

impl Orchestrator {
    pub fn new(config: &Config) -> Self {
        Self {
            repositories: RepositoryEnumerator::new(config),
            directories: DirectoryEnumerator::new(config),
            colored: true,
        }
    }

    pub fn with_color(mut self, colored: bool) -> Self {
        self.colored = colored;
        self
    }

    /// Single repo and directory failures propagate; list failures are reported and skipped.
    pub fn run(&self, mode: &Mode) -> Result<RunOutcome> {
        debug!("Selected mode: {:?}", mode);

        match mode {
            Mode::SingleRepo(url) => {
                Notice::Processing.emit(&format!("Processing single repo: {}", url));
                let files = self.repositories.enumerate(url)?;
                Ok(single_outcome(files))
            }
            Mode::Directory(dir) => {
                Notice::Processing.emit(&format!("Processing directory: {}", dir.display()));
                let files = self.directories.enumerate(dir)?;
                Ok(single_outcome(files))
            }
            Mode::RepoList(source) => {
                let urls = read_repo_list(source)?;
                info!("Loaded {} repository URLs", urls.len());
                Ok(self.run_list(&urls))
            }
        }
    }

    pub fn run_list(&self, urls: &[String]) -> RunOutcome {
        let mut progress = ProgressTracker::with_color(urls.len(), self.colored);
        let mut files = PathCollection::new();

        for url in urls {
            progress.start_repo(url);
            progress.suspend(|| Notice::Processing.emit(&format!("Processing repo: {}", url)));

            match self.repositories.enumerate(url) {
                Ok(found) => {
                    progress.repo_succeeded(found.len());
                    files.extend(found.into_vec());
                }
                Err(err) => {
                    progress.repo_failed();
                    progress.suspend(|| Notice::Failed.emit(&format!("Error: {}", err)));
                }
            }
        }

        progress.finish();
        let stats = progress.get_stats();
        info!("{}", stats);

        RunOutcome { files, stats }
    }
}

fn single_outcome(files: PathCollection) -> RunOutcome {
    let stats = RunStats {
        repos_processed: 1,
        paths_collected: files.len(),
        ..RunStats::default()
    };
    RunOutcome { files, stats }
}
