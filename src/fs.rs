use crate::consts::STEP;
use crate::name::{prefixed, split_prefix};
use crate::types::{PrefixRule, RenameStep};
use eyre::{Result, WrapErr, bail};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Resolve the target directory for a run. An explicit override wins,
/// otherwise the current working directory joined with `default_rel` (if
/// any). The directory must already exist.
pub fn resolve_target_dir(
    dir_override: Option<PathBuf>,
    default_rel: Option<&str>,
) -> Result<PathBuf> {
    let dir = match dir_override {
        Some(d) => d,
        None => {
            let cwd = std::env::current_dir()?;
            match default_rel {
                Some(rel) => cwd.join(rel),
                None => cwd,
            }
        }
    };
    if !dir.is_dir() {
        bail!("directory not found: {}", dir.display());
    }
    tracing::debug!(dir = %dir.display(), "target directory");
    Ok(dir)
}

/// List the direct file entries of `dir`, sorted by name. Subdirectories are
/// skipped; there is no recursion.
pub fn list_file_names(dir: &Path) -> Result<Vec<String>> {
    let entries = fs::read_dir(dir)
        .wrap_err_with(|| format!("failed to read directory {}", dir.display()))?;

    let mut names = Vec::new();
    for entry in entries {
        let entry = entry?;
        if !entry.path().is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            names.push(name.to_string());
        }
    }
    names.sort();
    Ok(names)
}

/// Build the rename plan for `names` (the sorted directory listing) under
/// `rule`. Eligible files are assigned prefixes 0010, 0020, ... in listing
/// order; files already carrying their assigned name become no-ops and are
/// dropped from the plan.
///
/// The plan is validated before anything touches the filesystem: a target
/// that lands on a file this run does not itself move is a collision, the
/// staging names used by [`apply_plan`] must be free, and no target may
/// equal another step's staging name.
pub fn build_plan(names: &[String], rule: PrefixRule) -> Result<Vec<RenameStep>> {
    let mut steps = Vec::new();
    let mut moved: HashSet<&str> = HashSet::new();
    let mut seq = STEP;

    for name in names {
        let Some((prefix, remainder)) = split_prefix(name, rule) else {
            tracing::trace!(file = %name, "no eligible prefix");
            continue;
        };
        let to = prefixed(seq, remainder);
        tracing::trace!(file = %name, old = prefix, new = %to);
        moved.insert(name.as_str());
        if to != *name {
            steps.push(RenameStep {
                from: name.clone(),
                to,
            });
        }
        seq += STEP;
    }

    let existing: HashSet<&str> = names.iter().map(String::as_str).collect();
    let staging: HashSet<String> = steps.iter().map(|s| temp_name(&s.from)).collect();
    for step in &steps {
        if existing.contains(step.to.as_str()) && !moved.contains(step.to.as_str()) {
            bail!(
                "refusing to rename {} -> {}: target already exists",
                step.from,
                step.to
            );
        }
        // a remainder ending in the staging suffix could land a final name
        // on another step's staged file
        if staging.contains(step.to.as_str()) {
            bail!(
                "refusing to rename {} -> {}: target collides with a staging name",
                step.from,
                step.to
            );
        }
        let tmp = temp_name(&step.from);
        if existing.contains(tmp.as_str()) {
            bail!("temporary name {tmp} already exists");
        }
    }

    tracing::debug!(eligible = moved.len(), renames = steps.len(), "computed rename plan");
    Ok(steps)
}

fn temp_name(from: &str) -> String {
    format!("{from}.renum-tmp")
}

/// Apply `plan` inside `dir` in two phases: every source is first moved to a
/// temporary name, then every temporary to its final name. This keeps a
/// target that overlaps a later source (`0005-a` -> `0010-a` while `0010-b`
/// still exists) from clobbering it.
///
/// Aborts on the first failed rename; the error reports how far the run got.
/// Completed renames are not rolled back.
pub fn apply_plan(dir: &Path, plan: &[RenameStep]) -> Result<usize> {
    let total = plan.len();

    for (staged, step) in plan.iter().enumerate() {
        fs::rename(dir.join(&step.from), dir.join(temp_name(&step.from))).wrap_err_with(|| {
            let left = plan[..staged]
                .iter()
                .map(|s| temp_name(&s.from))
                .collect::<Vec<_>>()
                .join(", ");
            if left.is_empty() {
                format!("failed to move {} aside (no renames completed)", step.from)
            } else {
                format!(
                    "failed to move {} aside (no renames completed; staged files left behind: {left})",
                    step.from
                )
            }
        })?;
    }

    let mut done = 0usize;
    for step in plan {
        fs::rename(dir.join(temp_name(&step.from)), dir.join(&step.to)).wrap_err_with(|| {
            format!(
                "failed to rename {} -> {} ({done} of {total} renames completed)",
                step.from, step.to
            )
        })?;
        tracing::info!("renamed {} -> {}", step.from, step.to);
        done += 1;
    }

    Ok(done)
}

/// Renumber every eligible file in `dir` under `rule`. Returns the number of
/// files actually renamed.
pub fn renumber(dir: &Path, rule: PrefixRule) -> Result<usize> {
    let names = list_file_names(dir)?;
    let plan = build_plan(&names, rule)?;
    apply_plan(dir, &plan)
}
