use crate::error::{HotError, Result};
use gix::discover;
use std::path::{Path, PathBuf};

pub struct GitRepo {
    path: PathBuf,
}

impl GitRepo {
    /// Open a repository at `path`, or current dir if `None`
    pub fn open<P: AsRef<Path>>(path: Option<P>) -> Result<Self> {
        let repo_path = match path {
            Some(p) => p.as_ref().to_path_buf(),
            None => std::env::current_dir()?,
        };

        let repo = discover(&repo_path)?;
        let path = repo
            .workdir()
            .ok_or_else(|| {
                HotError::GitRepo(format!(
                    "{} is a bare repository without a working tree",
                    repo.path().display()
                ))
            })?
            .to_path_buf();

        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn open_outside_a_repository_fails() {
        let dir = tempfile::tempdir().unwrap();
        // a fresh temp dir may still sit under a checkout; only assert when it doesn't
        if discover(dir.path()).is_err() {
            assert!(matches!(GitRepo::open(Some(dir.path())), Err(HotError::Git(_))));
        }
    }
}
