use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, trace, warn};

use crate::editor::Editor;
use crate::progress::Progress;
use crate::scanner::list_names;
use crate::scratch::ScratchFile;
use crate::staging::{self, StagingDir};
use crate::validator::{validate, RenameMapping};

use super::types::{
    MovePhase, RenameOptions, RenameReport, TransactionError, TransactionFailure,
};

/// Bulk rename of every entry in one directory.
///
/// Entries are first moved into a fresh staging directory under their old
/// names, then moved back out under their new names, so no destination can
/// overwrite a source that is still needed. Failures are not rolled back:
/// whatever is left in the staging directory stays there for the user.
pub struct RenameTransaction<'a, E: Editor + ?Sized> {
    work_dir: PathBuf,
    scratch_dir: PathBuf,
    editor: &'a E,
    options: RenameOptions,
}

impl<'a, E: Editor + ?Sized> RenameTransaction<'a, E> {
    pub fn new(work_dir: impl Into<PathBuf>, editor: &'a E, options: RenameOptions) -> Self {
        Self {
            work_dir: work_dir.into(),
            scratch_dir: std::env::temp_dir(),
            editor,
            options,
        }
    }

    /// Put the scratch file somewhere other than the system temp dir
    pub fn with_scratch_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.scratch_dir = dir.into();
        self
    }

    pub fn work_dir(&self) -> &Path {
        &self.work_dir
    }

    /// Snapshot, edit, validate and apply.
    ///
    /// On success the scratch file is removed. On any failure it is kept and
    /// its path is returned with the error.
    pub fn run(&self, progress: &mut Progress) -> Result<RenameReport, TransactionFailure> {
        info!(path = ?self.work_dir, dry_run = self.options.dry_run, "Starting rename");

        let old_names =
            list_names(&self.work_dir).map_err(|e| TransactionFailure::new(e, None))?;
        debug!(count = old_names.len(), "Snapshot taken");

        let scratch = ScratchFile::create_in(&self.scratch_dir, &old_names)
            .map_err(|e| TransactionFailure::new(e, None))?;

        let mapping = self
            .edit_and_apply(&old_names, &scratch, progress)
            .map_err(|e| TransactionFailure::new(e, Some(scratch.path().to_path_buf())))?;

        if let Err(e) = scratch.remove() {
            warn!(error = %e, "Could not remove scratch file");
            progress.warn(&e.to_string());
        }

        Ok(RenameReport {
            mapping,
            dry_run: self.options.dry_run,
        })
    }

    fn edit_and_apply(
        &self,
        old_names: &[String],
        scratch: &ScratchFile,
        progress: &mut Progress,
    ) -> Result<RenameMapping, TransactionError> {
        progress.editor_start(old_names.len(), scratch.path());
        self.editor.edit(scratch.path())?;

        let new_names = scratch.read_names()?;
        let mapping = validate(old_names, &new_names)?;

        if self.options.dry_run {
            info!("Dry run, leaving directory untouched");
        } else {
            self.apply(&mapping, progress)?;
        }

        Ok(mapping)
    }

    /// Perform the two-phase move for an already validated mapping
    pub(crate) fn apply(
        &self,
        mapping: &RenameMapping,
        progress: &mut Progress,
    ) -> Result<(), TransactionError> {
        self.apply_with(mapping, progress, staging::random_candidate)
    }

    /// Like [`Self::apply`], drawing staging directory names from `next_candidate`.
    fn apply_with<F>(
        &self,
        mapping: &RenameMapping,
        progress: &mut Progress,
        next_candidate: F,
    ) -> Result<(), TransactionError>
    where
        F: FnMut() -> String,
    {
        if mapping.is_empty() {
            debug!("Nothing to rename");
            return Ok(());
        }

        let forbidden: HashSet<&str> = mapping.old_names().chain(mapping.new_names()).collect();
        let staging = staging::allocate_with(&self.work_dir, &forbidden, next_candidate)?;
        progress.staging_created(&staging.name);

        let total = mapping.len();

        progress.phase_start(MovePhase::StageOut, total);
        for (i, pair) in mapping.pairs.iter().enumerate() {
            let from = self.work_dir.join(&pair.old_name);
            let to = staging.entry(&pair.old_name);

            let label = staged_label(&staging, &pair.old_name);
            progress.move_progress(i + 1, total, &pair.old_name, &label);
            fs::rename(&from, &to)
                .map_err(|e| move_failed(MovePhase::StageOut, &pair.old_name, &staging, e))?;
            trace!(from = ?from, to = ?to, "Staged");
        }

        progress.phase_start(MovePhase::StageIn, total);
        for (i, pair) in mapping.pairs.iter().enumerate() {
            let from = staging.entry(&pair.old_name);
            let to = self.work_dir.join(&pair.new_name);

            progress.move_progress(i + 1, total, &pair.old_name, &pair.new_name);
            move_without_overwrite(&from, &to)
                .map_err(|e| move_failed(MovePhase::StageIn, &pair.old_name, &staging, e))?;
            trace!(from = ?from, to = ?to, "Restored");
        }

        staging.remove()?;

        info!(
            count = total,
            changed = mapping.changed_count(),
            "Rename complete"
        );

        Ok(())
    }
}

fn staged_label(staging: &StagingDir, name: &str) -> String {
    format!("{}/{}", staging.name, name)
}

fn move_without_overwrite(from: &Path, to: &Path) -> io::Result<()> {
    if to.symlink_metadata().is_ok() {
        return Err(io::Error::new(
            io::ErrorKind::AlreadyExists,
            format!("destination already exists: {}", to.display()),
        ));
    }
    fs::rename(from, to)
}

fn move_failed(
    phase: MovePhase,
    name: &str,
    staging: &StagingDir,
    source: io::Error,
) -> TransactionError {
    warn!(phase = %phase, name = %name, error = %source, "Move failed");
    TransactionError::MoveFailed {
        phase,
        name: name.to_string(),
        staging_dir: staging.path.clone(),
        source,
    }
}
