//! Google Translate through the translate-shell `trans` program.

use anyhow::{Context, Result, bail};
use std::path::{Path, PathBuf};
use tokio::process::Command;

use super::Engine;
use super::language::TargetLanguage;
use super::mapping::{Translations, capitalize_first};
use crate::ui::{Spinner, Style};
use crate::{progress, warning};

/// Runs `trans` once for all target languages.
pub struct TransShell {
    command: String,
}

impl TransShell {
    pub const fn new(command: String) -> Self {
        Self { command }
    }

    /// Finds the executable, failing with an installation hint if it is absent.
    pub fn locate(&self) -> Result<PathBuf> {
        find_executable(&self.command).with_context(|| {
            format!(
                "'{}' program for Google Translate is not installed.\n\n{}",
                self.command,
                install_hint()
            )
        })
    }

    pub async fn translate_all(
        &self,
        text: &str,
        source_language: &str,
        targets: &[TargetLanguage],
    ) -> Result<Translations> {
        let program = self.locate()?;
        let spec = language_spec(source_language, targets);

        let spinner = Spinner::new("Translating with Google...");
        let output = Command::new(&program)
            .args(["-b", "-no-bidi", spec.as_str(), text])
            .output()
            .await
            .with_context(|| format!("Failed to run {}", program.display()))?;
        spinner.stop();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "Error running {} program ({}):\n{}",
                self.command,
                output.status,
                stderr.trim_end()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let translations = parse_output(&stdout, text, source_language, targets)?;

        progress!("\n{}", Style::header("Google translations:"));
        for (code, translated) in translations.iter().skip(1) {
            progress!("{code} = {translated}");
        }

        Ok(translations)
    }
}

/// Builds the `source:target1+target2+...` argument.
pub fn language_spec(source_language: &str, targets: &[TargetLanguage]) -> String {
    let codes: Vec<&str> = targets.iter().map(|t| t.code).collect();
    format!("{}:{}", source_language.to_lowercase(), codes.join("+"))
}

/// Zips `trans` output lines with `targets`, in order.
///
/// The source text is stored first under `source_language`; a line whose
/// target maps onto the source language is skipped so that entry stays
/// untranslated.
///
/// # Errors
///
/// Fails if there are more lines than targets.
pub fn parse_output(
    stdout: &str,
    text: &str,
    source_language: &str,
    targets: &[TargetLanguage],
) -> Result<Translations> {
    let lines: Vec<&str> = stdout.lines().collect();
    if lines.len() > targets.len() {
        bail!(
            "trans printed {} lines for {} target languages; cannot match lines to languages",
            lines.len(),
            targets.len()
        );
    }
    if lines.len() < targets.len() {
        let missing: Vec<&str> = targets[lines.len()..].iter().map(|t| t.code).collect();
        warning!(
            "{} trans printed {} lines for {} target languages; missing: {}",
            Style::warning("Warning:"),
            lines.len(),
            targets.len(),
            missing.join(", ")
        );
    }

    let mut translations = Translations::new();
    translations.insert(source_language, text);

    for (target, line) in targets.iter().zip(lines) {
        let code = Engine::Google.display_code(target.code);
        if code == source_language {
            continue;
        }
        translations.insert(code, capitalize_first(line));
    }

    Ok(translations)
}

/// Installation instructions for translate-shell on this platform.
pub fn install_hint() -> String {
    if cfg!(target_os = "macos") {
        "Install it using `brew install translate-shell`".to_string()
    } else {
        "See https://www.soimort.org/translate-shell/ for installation instructions".to_string()
    }
}

/// Looks `command` up on `PATH`, or checks it directly when it contains a path separator.
pub fn find_executable(command: &str) -> Option<PathBuf> {
    let direct = Path::new(command);
    if direct.components().count() > 1 {
        return is_executable(direct).then(|| direct.to_path_buf());
    }

    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .flat_map(|dir| candidates(&dir, command))
        .find(|candidate| is_executable(candidate))
}

#[cfg(windows)]
fn candidates(dir: &Path, command: &str) -> Vec<PathBuf> {
    vec![dir.join(command), dir.join(format!("{command}.exe"))]
}

#[cfg(not(windows))]
fn candidates(dir: &Path, command: &str) -> Vec<PathBuf> {
    vec![dir.join(command)]
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    path.metadata()
        .is_ok_and(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}
