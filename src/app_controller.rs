use anyhow::{Result, anyhow};
use indicatif::{ProgressBar, ProgressStyle};
use log::{debug, error, info, warn};
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::app_config::Config;
use crate::document;
use crate::errors::ProviderError;
use crate::file_utils::FileManager;
use crate::language_utils;
use crate::pairs::{self, ContentScan, FilePair, PathClassifier};
use crate::providers::{CompletionRequest, OpenAI, Provider, prompt};
use crate::quality::{AuditReport, QualityChecker, QualitySummary};
use crate::report::{self, FileMetrics, ReportMetadata, RunStats, StatusReport, TranslationMap};
use crate::translation::{Translated, Translator, protect};

// @module: Application controller for documentation translation runs

/// What a `translate` run does after scanning
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RunMode {
    /// Translate every missing file
    #[default]
    Full,
    /// Translate missing priority files only
    PriorityOnly,
    /// Scan and write reports, nothing else
    ReportOnly,
    /// Scan, collect per-file metrics and write a translation map
    AnalyzeOnly,
}

impl RunMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            RunMode::Full => "full",
            RunMode::PriorityOnly => "priority-only",
            RunMode::ReportOnly => "report-only",
            RunMode::AnalyzeOnly => "analyze-only",
        }
    }
}

// @struct: Options for one translate run
#[derive(Debug, Clone, Default)]
pub struct RunOptions {
    pub mode: RunMode,
    /// Regenerate targets that already exist
    pub overwrite: bool,
    /// Do everything except writing target files
    pub dry_run: bool,
    /// Translate at most this many files
    pub sample_limit: Option<usize>,
    /// Enhanced rule-based output instead of stubs
    pub use_enhanced_rules: bool,
    pub aggressive: bool,
    pub target_only: bool,
    /// Use the translation provider when one is available
    pub ai: bool,
}

/// Which existing target files `enhance` regenerates
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnhanceSelection {
    /// One file, given as its source or target path
    File(PathBuf),
    Priority,
    All,
    /// The first N existing targets, priority first
    Sample(usize),
    /// Targets flagged as untranslated by an audit JSON report
    Flagged(PathBuf),
}

#[derive(Debug, Clone)]
pub struct EnhanceOptions {
    pub selection: EnhanceSelection,
    pub aggressive: bool,
    pub target_only: bool,
    pub dry_run: bool,
}

/// Outcome of a run
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    pub stats: RunStats,
    /// Report files written
    pub reports: Vec<PathBuf>,
    /// Per-file metrics, filled in analyze-only mode
    pub metrics: Vec<FileMetrics>,
}

/// Main application controller for documentation translation
pub struct Controller {
    // @field: App configuration
    config: Config,
    classifier: PathClassifier,
    // @field: Provider injected by the caller, takes precedence over the configured one
    provider: Option<Box<dyn Provider>>,
}

impl Controller {
    /// Create a new controller for test purposes with default configuration
    pub fn new_for_test() -> Result<Self> {
        Self::with_config(Config::default())
    }

    // @method: Create a new controller with the given configuration
    pub fn with_config(config: Config) -> Result<Self> {
        let classifier = PathClassifier::new(&config.scan, &config.target_language)?;
        if !language_utils::is_rule_target(&config.target_language) {
            warn!(
                "Built-in rules produce Arabic text; target language '{}' only gets file naming",
                config.target_language
            );
        }
        Ok(Self {
            config,
            classifier,
            provider: None,
        })
    }

    /// Use `provider` for `--ai` runs instead of the configured endpoint
    pub fn with_provider(mut self, provider: Box<dyn Provider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn content_root(&self) -> PathBuf {
        PathBuf::from(&self.config.content_root)
    }

    /// Scan the content root. A missing root is an error.
    pub fn scan(&self) -> Result<ContentScan> {
        pairs::scan_content(&self.content_root(), &self.classifier)
    }

    /// Run a translate pass and write reports
    pub async fn run(&self, options: &RunOptions) -> Result<RunSummary> {
        let start = Instant::now();
        let root = self.content_root();
        info!(
            "Starting {} run on {} (target: {})",
            options.mode.as_str(),
            root.display(),
            self.config.target_language
        );

        let scan = self.scan()?;
        let mut stats = RunStats::from_scan(&scan);
        stats.analysis_secs = start.elapsed().as_secs_f64();
        info!(
            "Found {} source files, {} target files, {} missing ({:.1}% coverage)",
            stats.total_source_files,
            stats.total_target_files,
            stats.missing_count,
            stats.coverage_percent
        );

        let mut metrics = Vec::new();
        let mut map = None;
        match options.mode {
            RunMode::ReportOnly => info!("Report-only mode: skipping translation"),
            RunMode::AnalyzeOnly => {
                metrics = self.analyze(&root, &scan, &mut stats);
                map = Some(TranslationMap::from_metrics(&metrics, &self.config.target_language));
            }
            RunMode::Full | RunMode::PriorityOnly => {
                let selected = select_for_translation(&scan, options);
                self.translate_pairs(&selected, options, &mut stats).await;
            }
        }

        let ai_enabled = options.ai || self.config.provider.enabled;
        let reports = self.write_reports(&scan, &stats, options.mode.as_str(), ai_enabled, options.dry_run, map.as_ref())?;
        info!("Run finished in {}", Self::format_duration(start.elapsed()));

        Ok(RunSummary {
            stats,
            reports,
            metrics,
        })
    }

    /// Regenerate existing target files with the enhanced rule-based pipeline
    pub async fn enhance(&self, options: &EnhanceOptions) -> Result<RunSummary> {
        let start = Instant::now();
        let scan = self.scan()?;
        let mut stats = RunStats::from_scan(&scan);
        stats.analysis_secs = start.elapsed().as_secs_f64();

        let selected = self.select_for_enhancement(&scan, &options.selection)?;
        stats.selected_count = selected.len();
        info!("Enhancing {} files", selected.len());

        let translator = Translator::new(&self.config.translation, options.aggressive, options.target_only);
        let translation_start = Instant::now();
        let progress = Self::progress_bar(selected.len() as u64);

        for (source, target) in &selected {
            let relative = FileManager::relative_path(self.content_root(), target);
            progress.set_message(relative.clone());
            let existing = if FileManager::file_exists(target) {
                FileManager::read_to_string(target).map(Some)
            } else {
                Ok(None)
            };
            let result = existing.and_then(|existing| {
                let text = FileManager::read_to_string(source)?;
                let out = translator.build_enhanced_from(&text, existing.as_deref());
                stats.translation += out.stats;
                if options.dry_run {
                    debug!("[dry run] Would enhance {}", relative);
                    stats.dry_run_count += 1;
                    return Ok(());
                }
                FileManager::write_to_file(target, &out.text)?;
                stats.enhanced_count += 1;
                Ok(())
            });
            if let Err(e) = result {
                progress.suspend(|| error!("Error enhancing {}: {}", relative, e));
                stats.error_count += 1;
            }
            progress.inc(1);
        }
        progress.finish_and_clear();
        stats.translation_secs = translation_start.elapsed().as_secs_f64();

        info!(
            "Enhanced {} files ({} errors) in {}",
            stats.enhanced_count,
            stats.error_count,
            Self::format_duration(start.elapsed())
        );

        let reports = self.write_reports(&scan, &stats, "enhance", false, options.dry_run, None)?;
        Ok(RunSummary {
            stats,
            reports,
            metrics: Vec::new(),
        })
    }

    /// Coverage/leakage/placeholder audit, written as JSON and Markdown
    pub fn audit(&self) -> Result<(AuditReport, Vec<PathBuf>)> {
        let scan = self.scan()?;
        let report = AuditReport::from_scan(&self.content_root(), &scan, &self.config.target_language);
        report.log_summary();
        let (json, markdown) = report.write(Path::new(&self.config.report.output_dir))?;
        Ok((report, vec![json, markdown]))
    }

    /// Per-pair quality scoring, written as JSON
    pub fn quality(&self, sample: Option<usize>) -> Result<(QualitySummary, PathBuf)> {
        let scan = self.scan()?;
        let checker = QualityChecker::new(&self.config.translation.translatable_fields);
        let summary = checker.run(&self.content_root(), &scan, sample);
        summary.log_summary();

        let dir = PathBuf::from(&self.config.report.output_dir);
        FileManager::ensure_dir(&dir)?;
        let path = dir.join(format!(
            "translation_quality_report_{}.json",
            chrono::Local::now().format("%Y%m%d_%H%M%S")
        ));
        report::write_json_report(&path, &summary)?;
        info!("Quality report saved to: {}", path.display());
        Ok((summary, path))
    }

    fn write_reports(
        &self,
        scan: &ContentScan,
        stats: &RunStats,
        mode: &str,
        ai_enabled: bool,
        dry_run: bool,
        map: Option<&TranslationMap>,
    ) -> Result<Vec<PathBuf>> {
        let meta = ReportMetadata::new(
            &self.content_root(),
            &self.config.target_language,
            mode,
            ai_enabled,
            dry_run,
        );
        let status = StatusReport::build(meta, scan, stats);
        report::write_reports(&self.config.report, &status, map)
    }

    /// Metrics for every source file; unreadable files count as errors
    fn analyze(&self, root: &Path, scan: &ContentScan, stats: &mut RunStats) -> Vec<FileMetrics> {
        let mut metrics = Vec::with_capacity(scan.pairs.len());
        for pair in &scan.pairs {
            match FileManager::read_to_string(&pair.source) {
                Ok(content) => metrics.push(FileMetrics::analyze(root, pair, &content)),
                Err(e) => {
                    error!("Error analyzing {}: {}", pair.relative, e);
                    stats.error_count += 1;
                }
            }
        }
        info!("Analyzed {} source files", metrics.len());
        metrics
    }

    /// Provider for an `--ai` run, if one can be used
    fn configured_provider(&self) -> Option<Box<dyn Provider>> {
        let key = self.config.provider.resolved_api_key();
        if key.is_empty() {
            warn!("AI translation requested but no API key is configured; using rule-based output");
            return None;
        }
        Some(Box::new(OpenAI::from_config(&self.config.provider)))
    }

    async fn translate_pairs(&self, selected: &[&FilePair], options: &RunOptions, stats: &mut RunStats) {
        stats.selected_count = selected.len();
        if selected.is_empty() {
            info!("No files to translate");
            return;
        }
        info!("Translating {} files", selected.len());

        let ai = options.ai || self.config.provider.enabled;
        let configured = if ai && self.provider.is_none() {
            self.configured_provider()
        } else {
            None
        };
        let provider = if ai {
            self.provider.as_deref().or(configured.as_deref())
        } else {
            None
        };
        if let Some(p) = provider {
            info!("Using provider: {}", p.name());
            if let Err(e) = p.test_connection().await {
                warn!(
                    "Provider connection check failed: {}; failed requests fall back to rule-based output",
                    e
                );
            }
        }

        let translator = Translator::new(&self.config.translation, options.aggressive, options.target_only);
        let start = Instant::now();
        let progress = Self::progress_bar(selected.len() as u64);

        for pair in selected {
            progress.set_message(pair.relative.clone());
            if let Err(e) = self.translate_pair(pair, &translator, provider, options, stats).await {
                progress.suspend(|| error!("Error translating {}: {}", pair.relative, e));
                stats.error_count += 1;
            }
            progress.inc(1);
        }
        progress.finish_and_clear();

        stats.translation_secs = start.elapsed().as_secs_f64();
        info!(
            "Created {} translation files ({} errors) in {}",
            stats.created_count,
            stats.error_count,
            Self::format_duration(start.elapsed())
        );
        if provider.is_some() {
            info!(
                "AI-translated: {}, fallbacks: {}",
                stats.ai_count, stats.fallback_count
            );
        }
    }

    async fn translate_pair(
        &self,
        pair: &FilePair,
        translator: &Translator,
        provider: Option<&dyn Provider>,
        options: &RunOptions,
        stats: &mut RunStats,
    ) -> Result<()> {
        let source = FileManager::read_to_string(&pair.source)?;

        let output = match provider {
            Some(p) => match self.translate_with_provider(p, translator, &source, &pair.relative).await {
                Ok((text, lost)) => {
                    stats.ai_count += 1;
                    stats.lost_tags += lost;
                    text
                }
                Err(e) => {
                    warn!(
                        "Provider failed for {}: {}; falling back to rule-based output",
                        pair.relative, e
                    );
                    stats.fallback_count += 1;
                    self.rule_based(translator, &source, options, stats)
                }
            },
            None => self.rule_based(translator, &source, options, stats),
        };

        if options.dry_run {
            debug!("[dry run] Would write {}", pair.target.display());
            stats.dry_run_count += 1;
            return Ok(());
        }

        FileManager::write_to_file(&pair.target, &output)?;
        stats.created_count += 1;
        if pair.is_priority {
            info!("Created: {} [PRIORITY]", pair.relative);
        } else {
            debug!("Created: {}", pair.relative);
        }
        Ok(())
    }

    fn rule_based(&self, translator: &Translator, source: &str, options: &RunOptions, stats: &mut RunStats) -> String {
        let Translated { text, stats: t } = if options.use_enhanced_rules {
            translator.build_enhanced(source)
        } else {
            translator.build_stub(source)
        };
        stats.translation += t;
        text
    }

    /// Translate a whole document through the provider.
    ///
    /// Returns the new document and the number of templating tags the
    /// provider dropped from the body.
    async fn translate_with_provider(
        &self,
        provider: &dyn Provider,
        translator: &Translator,
        source: &str,
        relative: &str,
    ) -> Result<(String, usize), ProviderError> {
        let (fm, body) = document::decode(source);
        let system = prompt::system_prompt(&self.config.source_language, &self.config.target_language);

        let mut out_fm = fm.clone();
        for field in translator.translatable_fields() {
            let Some(value) = fm.get(field).filter(|v| !v.trim().is_empty()) else {
                continue;
            };
            let context = format!("frontmatter {} for {}", field, relative);
            let text = self.complete(provider, &system, value, &context).await?;
            out_fm.insert(field.as_str(), text);
        }

        if body.trim().is_empty() {
            return Ok((document::encode(&out_fm, &body), 0));
        }

        let context = format!("documentation file: {}", relative);
        let translated = self.complete(provider, &system, &body, &context).await?;

        let lost = protect::missing_templating_tags(&body, &translated);
        for tag in &lost {
            warn!("Templating tag missing from provider output in {}: {}", relative, tag);
        }

        Ok((document::encode(&out_fm, &translated), lost.len()))
    }

    /// One provider call followed by the configured rate-limit pause
    async fn complete(
        &self,
        provider: &dyn Provider,
        system: &str,
        text: &str,
        context: &str,
    ) -> Result<String, ProviderError> {
        let request = CompletionRequest {
            system_prompt: system.to_string(),
            user_prompt: prompt::user_prompt(text, context),
        };
        let response = provider.complete(request).await?;
        tokio::time::sleep(Duration::from_millis(self.config.provider.rate_limit_delay_ms)).await;
        Ok(response.text)
    }

    /// (source, target) paths picked by an enhance selection
    fn select_for_enhancement(
        &self,
        scan: &ContentScan,
        selection: &EnhanceSelection,
    ) -> Result<Vec<(PathBuf, PathBuf)>> {
        let lang = self.classifier.target_language();
        let existing = || {
            let mut pairs: Vec<&FilePair> = scan.existing().collect();
            pairs.sort_by_key(|p| (!p.is_priority, p.size_bytes));
            pairs
        };
        let to_paths = |pairs: Vec<&FilePair>| {
            pairs
                .into_iter()
                .map(|p| (p.source.clone(), p.target.clone()))
                .collect::<Vec<_>>()
        };

        let selected = match selection {
            EnhanceSelection::File(path) => {
                let (source, target) = match pairs::source_path(path, lang) {
                    Some(source) => (source, path.clone()),
                    None => (path.clone(), self.classifier.target_for(path)),
                };
                if !FileManager::file_exists(&source) {
                    return Err(anyhow!("Source file not found: {}", source.display()));
                }
                vec![(source, target)]
            }
            EnhanceSelection::Priority => {
                to_paths(existing().into_iter().filter(|p| p.is_priority).collect())
            }
            EnhanceSelection::All => to_paths(existing()),
            EnhanceSelection::Sample(n) => to_paths(existing().into_iter().take(*n).collect()),
            EnhanceSelection::Flagged(audit_path) => {
                let audit = AuditReport::from_file(audit_path)?;
                let root = self.content_root();
                audit
                    .likely_untranslated
                    .iter()
                    .filter_map(|relative| {
                        let target = root.join(relative);
                        match pairs::source_path(&target, lang) {
                            Some(source) if FileManager::file_exists(&source) => Some((source, target)),
                            _ => {
                                warn!("Skip missing source for flagged file: {}", relative);
                                None
                            }
                        }
                    })
                    .collect()
            }
        };
        Ok(selected)
    }

    fn progress_bar(len: u64) -> ProgressBar {
        let progress_bar = ProgressBar::new(len);
        let style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files ({percent}%) {msg}")
            .or_else(|_| ProgressStyle::default_bar().template("{spinner} [{elapsed_precise}] [{bar:40}] {pos}/{len} ({percent}%) {msg}"))
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        progress_bar.set_style(style.progress_chars("█▓▒░"));
        progress_bar
    }

    // Format duration in a human-readable format
    fn format_duration(duration: Duration) -> String {
        let total_seconds = duration.as_secs();
        let hours = total_seconds / 3600;
        let minutes = (total_seconds % 3600) / 60;
        let seconds = total_seconds % 60;

        if hours > 0 {
            format!("{}h {}m {}s", hours, minutes, seconds)
        } else if minutes > 0 {
            format!("{}m {}s", minutes, seconds)
        } else {
            format!("{}.{:03}s", seconds, duration.subsec_millis())
        }
    }
}

/// Missing (or, with `overwrite`, all) pairs to translate: priority first,
/// then smallest first, cut to the sample limit
pub fn select_for_translation<'a>(scan: &'a ContentScan, options: &RunOptions) -> Vec<&'a FilePair> {
    let mut selected: Vec<&FilePair> = scan
        .pairs
        .iter()
        .filter(|p| options.overwrite || !p.exists)
        .filter(|p| options.mode != RunMode::PriorityOnly || p.is_priority)
        .collect();
    selected.sort_by_key(|p| (!p.is_priority, p.size_bytes));
    if let Some(limit) = options.sample_limit {
        selected.truncate(limit);
    }
    selected
}
