/*!
 * Common test utilities for the mdlingo test suite
 */

use anyhow::Result;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use mdlingo::Config;

/// Routes library logs through the test harness; `RUST_LOG` picks the level
pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Creates a temporary directory for test files, with test logging enabled
pub fn create_temp_dir() -> Result<TempDir> {
    init_logger();
    Ok(TempDir::new()?)
}

/// Creates a test file with the given content, creating parent directories as needed
pub fn create_test_file(dir: &Path, filename: &str, content: &str) -> Result<PathBuf> {
    let file_path = dir.join(filename);
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(&file_path, content)?;
    Ok(file_path)
}

/// A small documentation page with frontmatter, a code block and a templating tag
pub fn sample_page(title: &str) -> String {
    format!(
        r#"---
title: {title}
intro: Learn how to create a repository.
versions:
  fpt: '*'
---

## Prerequisites

You can create a repository on GitHub.

```shell
git clone https://github.com/octo/repo.git
```

{{% data reusables.repositories.create %}}
"#
    )
}

/// Content directory inside `temp`
pub fn content_dir(temp: &TempDir) -> PathBuf {
    temp.path().join("content")
}

/// Report directory inside `temp`
pub fn report_dir(temp: &TempDir) -> PathBuf {
    temp.path().join("reports")
}

/// Default configuration pointed at directories inside `temp`
pub fn test_config(temp: &TempDir) -> Config {
    let mut config = Config::default();
    config.content_root = content_dir(temp);
    config.report.output_dir = report_dir(temp);
    config.provider.rate_limit_delay_ms = 0;
    config
}

/// Builds a docs tree with two sources and one existing translation:
///
/// - `get-started/index.md` (priority, translated)
/// - `guides/setup.md` (missing)
pub fn create_docs_tree(temp: &TempDir) -> Result<PathBuf> {
    let root = content_dir(temp);
    create_test_file(&root, "get-started/index.md", &sample_page("Get started"))?;
    create_test_file(
        &root,
        "get-started/index-ar.md",
        concat!(
            "---\ntitle: ابدأ\nintro: تعرف على كيفية البدء\n---\n\n# ابدأ\n\n",
            "هذه صفحة مترجمة بالكامل إلى اللغة العربية.\n\n",
            "تشرح كيفية البدء في استخدام المنصة خطوة بخطوة.\n\n",
            "تحتوي على أمثلة واضحة ومفيدة لكل مستخدم جديد.\n",
        ),
    )?;
    create_test_file(&root, "guides/setup.md", &sample_page("About issues"))?;
    Ok(root)
}

/// Number of regular files under `dir`, recursively
pub fn count_files(dir: &Path) -> usize {
    walkdir::WalkDir::new(dir)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .count()
}
