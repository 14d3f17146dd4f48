//! Fact collection: reuse the working directory's snapshot or extract every package.

use crate::config::{Config, DiscoveryConfig};
use crate::discovery::{PackageWalker, SkipPatterns};
use crate::error::Result;
use crate::extract::{CommandExtractor, FactExtractor, extract_all};
use crate::facts::PackageFacts;
use crate::reporter::progress::ExtractProgress;
use crate::snapshot::Workspace;
use std::io::IsTerminal;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone, Copy, Default)]
pub struct CollectOptions {
    /// Extract again even when a snapshot exists.
    pub rescan: bool,
    /// CI mode: never draw a progress bar.
    pub ci: bool,
}

/// Config from an explicit file, or the usual lookup rooted at `work_dir`.
pub fn load_config(work_dir: &Path, explicit: Option<&Path>) -> Result<Config> {
    match explicit {
        Some(path) => Ok(Config::from_file(path)?),
        None => Ok(Config::load(Some(work_dir))),
    }
}

/// Package files under the configured packages directory.
pub fn discover_packages(ws: &Workspace, discovery: &DiscoveryConfig) -> Result<Vec<PathBuf>> {
    let skip = SkipPatterns::new(&discovery.skip_patterns)?;
    PackageWalker::new(skip).discover(&ws.root().join(&discovery.packages_dir))
}

pub fn collect_facts(
    ws: &Workspace,
    config: &Config,
    options: CollectOptions,
) -> Result<Vec<PackageFacts>> {
    let extractor = CommandExtractor::from_config(&config.extractor);
    collect_facts_with(ws, config, &extractor, options)
}

/// Like [`collect_facts`] with a caller-supplied extractor.
///
/// A fresh extraction always rewrites the snapshot, even when every package
/// failed and the snapshot is empty.
pub fn collect_facts_with<E>(
    ws: &Workspace,
    config: &Config,
    extractor: &E,
    options: CollectOptions,
) -> Result<Vec<PackageFacts>>
where
    E: FactExtractor + Sync,
{
    if !options.rescan && ws.has_snapshot() {
        info!(path = %ws.snapshot_path().display(), "Reusing fact snapshot");
        return ws.load_snapshot();
    }

    let packages = discover_packages(ws, &config.discovery)?;
    debug!(count = packages.len(), "Discovered packages");

    let progress = ExtractProgress::new(packages.len(), std::io::stderr().is_terminal(), options.ci);
    let facts = match config.extractor.threads {
        Some(threads) => {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()?;
            pool.install(|| extract_all(extractor, &packages, &progress))
        }
        None => extract_all(extractor, &packages, &progress),
    };

    ws.save_snapshot(&facts)?;
    Ok(facts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AuditError;
    use crate::extract::ExtractionError;
    use crate::test_utils::fixtures::{activity, package};
    use std::fs;
    use tempfile::TempDir;

    /// Names each package after its file stem; `broken*.apk` fails.
    struct StemExtractor;

    impl FactExtractor for StemExtractor {
        fn extract(&self, path: &Path) -> std::result::Result<PackageFacts, ExtractionError> {
            let stem = path.file_stem().and_then(|s| s.to_str()).unwrap_or_default();
            if stem.starts_with("broken") {
                return Err(ExtractionError::MissingApplication {
                    package: stem.to_string(),
                });
            }
            let mut facts = package(stem);
            facts.filename = path.display().to_string();
            facts.components.push(activity(&format!("{stem}/.Main"), ""));
            Ok(facts)
        }
    }

    fn work_dir(apks: &[&str]) -> TempDir {
        let dir = TempDir::new().unwrap();
        let packages = dir.path().join("packages");
        fs::create_dir(&packages).unwrap();
        for apk in apks {
            let path = packages.join(apk);
            fs::create_dir_all(path.parent().unwrap()).unwrap();
            fs::write(path, b"PK").unwrap();
        }
        dir
    }

    #[test]
    fn test_extracts_and_writes_snapshot() {
        let dir = work_dir(&["a.apk", "Nested/b.apk", "broken.apk"]);
        let ws = Workspace::open(dir.path()).unwrap();

        let facts =
            collect_facts_with(&ws, &Config::default(), &StemExtractor, CollectOptions::default())
                .unwrap();

        let names: Vec<_> = facts.iter().map(|f| f.package.as_str()).collect();
        // Walk order: "Nested" sorts before "a.apk"; "broken" fails and is dropped.
        assert_eq!(names, vec!["b", "a"]);
        assert!(ws.has_snapshot());
        assert_eq!(ws.load_snapshot().unwrap(), facts);
    }

    #[test]
    fn test_skips_configured_patterns() {
        let dir = work_dir(&["a.apk", "x_auto_generated_rro_product__/rro.apk"]);
        let ws = Workspace::open(dir.path()).unwrap();

        let facts =
            collect_facts_with(&ws, &Config::default(), &StemExtractor, CollectOptions::default())
                .unwrap();

        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].package, "a");
    }

    #[test]
    fn test_reuses_existing_snapshot() {
        let dir = work_dir(&["a.apk"]);
        let ws = Workspace::open(dir.path()).unwrap();
        ws.save_snapshot(&[package("from.snapshot")]).unwrap();

        let facts =
            collect_facts_with(&ws, &Config::default(), &StemExtractor, CollectOptions::default())
                .unwrap();

        assert_eq!(facts.len(), 1);
        assert_eq!(facts[0].package, "from.snapshot");
    }

    #[test]
    fn test_rescan_ignores_snapshot() {
        let dir = work_dir(&["a.apk"]);
        let ws = Workspace::open(dir.path()).unwrap();
        ws.save_snapshot(&[package("from.snapshot")]).unwrap();

        let options = CollectOptions {
            rescan: true,
            ci: true,
        };
        let facts = collect_facts_with(&ws, &Config::default(), &StemExtractor, options).unwrap();

        assert_eq!(facts[0].package, "a");
        assert_eq!(ws.load_snapshot().unwrap()[0].package, "a");
    }

    #[test]
    fn test_fixed_thread_count() {
        let dir = work_dir(&["a.apk", "b.apk", "c.apk"]);
        let ws = Workspace::open(dir.path()).unwrap();
        let mut config = Config::default();
        config.extractor.threads = Some(2);

        let facts =
            collect_facts_with(&ws, &config, &StemExtractor, CollectOptions::default()).unwrap();

        let names: Vec<_> = facts.iter().map(|f| f.package.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_missing_packages_dir() {
        let dir = TempDir::new().unwrap();
        let ws = Workspace::open(dir.path()).unwrap();

        let err =
            collect_facts_with(&ws, &Config::default(), &StemExtractor, CollectOptions::default())
                .unwrap_err();
        assert!(matches!(err, AuditError::FileNotFound(_)));
    }

    #[test]
    fn test_load_config_explicit_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("custom.toml");
        fs::write(&path, "[discovery]\npackages_dir = \"apps\"\n").unwrap();

        let config = load_config(dir.path(), Some(&path)).unwrap();
        assert_eq!(config.discovery.packages_dir, "apps");
    }

    #[test]
    fn test_load_config_explicit_missing_is_error() {
        let dir = TempDir::new().unwrap();
        let err = load_config(dir.path(), Some(&dir.path().join("nope.yaml"))).unwrap_err();
        assert!(matches!(err, AuditError::Config(_)));
    }
}
