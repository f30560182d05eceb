use crate::ports::outbound::{PackageIndex, ProgressReporter};
use crate::shared::Result;
use crate::size_calculation::domain::{PackageMetadata, PackageName, Requirement, VisitedPackages};
use tracing::debug;

/// DependencyWalker service for measuring a package and its runtime dependencies
///
/// Walks the dependency graph depth-first with an explicit stack, fetching
/// each distinct package once per traversal. Dependencies declared behind an
/// `extra` marker are optional and are not followed.
pub struct DependencyWalker<'a, I, P> {
    index: &'a I,
    progress_reporter: &'a P,
    normalize_names: bool,
}

impl<'a, I, P> DependencyWalker<'a, I, P>
where
    I: PackageIndex,
    P: ProgressReporter,
{
    pub fn new(index: &'a I, progress_reporter: &'a P) -> Self {
        Self {
            index,
            progress_reporter,
            normalize_names: false,
        }
    }

    /// Folds dependency names to their PEP 503 form before lookup.
    /// Off by default: names are used exactly as the requirement declares them.
    pub fn with_normalized_names(mut self, normalize_names: bool) -> Self {
        self.normalize_names = normalize_names;
        self
    }

    /// Records `name` and every package it transitively requires into `visited`
    ///
    /// Names already present in `visited` are neither fetched nor descended
    /// into, which also breaks dependency cycles. Packages are recorded in the
    /// same order a recursive depth-first walk would reach them.
    ///
    /// # Errors
    /// Fails on the first package that cannot be fetched or whose metadata
    /// lacks a version or artifact size (`DepsizeError::CalculationFailed`).
    /// Packages recorded before the failure stay in `visited`.
    pub async fn compute_size(&self, name: &str, visited: &mut VisitedPackages) -> Result<()> {
        let mut pending = vec![name.to_string()];

        while let Some(current) = pending.pop() {
            if visited.contains(&current) {
                continue;
            }

            self.progress_reporter.report_progress(visited.len(), &current);

            let document = self.index.fetch_metadata(&current).await?;
            let metadata = PackageMetadata::from_document(&current, &document)?;

            debug!(
                package = %current,
                version = metadata.version(),
                size = metadata.artifact_size(),
                "recorded package"
            );

            let dependencies = self.runtime_dependencies(&current, &metadata);
            visited.insert(current, metadata.artifact_size());

            // Reversed so the first declared dependency is walked first
            pending.extend(dependencies.into_iter().rev());
        }

        Ok(())
    }

    /// Names of the declared dependencies that are not optional
    fn runtime_dependencies(&self, package: &str, metadata: &PackageMetadata) -> Vec<String> {
        metadata
            .requires_dist()
            .iter()
            .filter_map(|raw| {
                let Some(requirement) = Requirement::parse(raw) else {
                    debug!(package, requirement = %raw, "skipping unparseable requirement");
                    return None;
                };

                if requirement.is_extra() {
                    debug!(package, requirement = %raw, "skipping optional requirement");
                    return None;
                }

                Some(if self.normalize_names {
                    PackageName::normalize(requirement.package())
                } else {
                    requirement.package().to_string()
                })
            })
            .collect()
    }
}
