//! Clone-or-update of a checkout.

use std::fs;

use crate::error::Result;
use crate::shell::CommandRunner;
use crate::ui::UserInterface;

use super::repo::RepoDescriptor;

/// What [`sync_repo`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncAction {
    /// The checkout did not exist and was cloned.
    Cloned,
    /// The checkout existed and was updated with `git pull`.
    Pulled,
}

/// Clone `repo` if its path does not exist, otherwise pull in place.
///
/// Any git failure is returned as-is; nothing is cleaned up.
pub fn sync_repo(
    repo: &RepoDescriptor,
    runner: &dyn CommandRunner,
    ui: &mut dyn UserInterface,
) -> Result<SyncAction> {
    if repo.path.exists() {
        ui.message(&format!(
            "Directory {} already exists. Pulling the latest changes.",
            repo.path.display()
        ));
        runner.run("git", &["pull"], Some(&repo.path))?;
        return Ok(SyncAction::Pulled);
    }

    if let Some(parent) = repo.path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }

    ui.message(&format!(
        "Cloning {} into {}",
        repo.name,
        repo.path.display()
    ));
    let path = repo.path.to_string_lossy();
    runner.run("git", &["clone", repo.url.as_str(), &*path], None)?;
    Ok(SyncAction::Cloned)
}
