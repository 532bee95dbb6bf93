//! metac: The metac source translator CLI.
//!
//! Usage:
//!   metac [options] [file...]

mod tracing_config;

use clap::Parser as ClapParser;
use metac_compiler::{Program, TranslationResult};
use metac_diagnostics::{Diagnostic, RenderedDiagnostic};
use metac_options::{MetacConfig, TranslatorOptions, CONFIG_FILE_NAME};
use std::io::{IsTerminal, Write};
use std::path::{Path, PathBuf};
use std::process;
use std::time::Instant;

#[derive(ClapParser, Debug)]
#[command(name = "metac", about = "metac - translates metac sources to Java-like text", disable_version_flag = true)]
struct Cli {
    /// Source files to translate.
    #[arg(value_name = "FILE")]
    files: Vec<PathBuf>,

    /// Path to metac.json.
    #[arg(short = 'p', long = "project")]
    project: Option<PathBuf>,

    /// Redirect output structure to the directory.
    #[arg(long = "outDir")]
    out_dir: Option<String>,

    /// Print translations to stdout instead of writing files.
    #[arg(long)]
    stdout: bool,

    /// Use the strict-compatibility grammar and emission.
    #[arg(long = "strictCompat")]
    strict_compat: bool,

    /// Do not emit else clauses.
    #[arg(long = "noElse")]
    no_else: bool,

    /// Parse only and report diagnostics.
    #[arg(long = "noEmit")]
    no_emit: bool,

    /// Do not emit outputs if any errors were reported.
    #[arg(long = "noEmitOnError")]
    no_emit_on_error: bool,

    /// List all files that are part of the translation.
    #[arg(long = "listFiles")]
    list_files: bool,

    /// Initialize a metac.json file.
    #[arg(long)]
    init: bool,

    /// Print the translator version.
    #[arg(short = 'v', long)]
    version: bool,
}

fn main() {
    tracing_config::init_tracing();
    let cli = Cli::parse();

    if cli.version {
        println!("metac Version {}", env!("CARGO_PKG_VERSION"));
        return;
    }

    if cli.init {
        process::exit(run_init(Path::new(CONFIG_FILE_NAME)));
    }

    process::exit(run_translate(&cli));
}

fn run_translate(cli: &Cli) -> i32 {
    let start = Instant::now();

    let (files, config) = match resolve_input_files(cli) {
        Ok(resolved) => resolved,
        Err(message) => {
            print_error(&message);
            return 1;
        }
    };

    if files.is_empty() {
        print_error("No input files found.");
        return 1;
    }

    if cli.list_files {
        for file in &files {
            println!("{}", file.display());
        }
    }

    let options = merge_options(cli, config.as_ref());
    let to_stdout = cli.stdout || options.out_dir.is_none();
    let mut program = Program::new(options).with_root_files(files);

    if let Err(e) = program.load_root_files() {
        print_error(&format!("Failed to load source files: {e}"));
        return 1;
    }

    let result = program.translate();
    report_diagnostics(&program, &result);

    if let Err(code) = write_outputs(&result, to_stdout) {
        return code;
    }

    tracing::debug!(elapsed_ms = start.elapsed().as_millis() as u64, "translation finished");

    if result.diagnostics.has_errors() {
        let count = result.diagnostics.error_count();
        eprintln!("\nFound {} error{}.", count, if count == 1 { "" } else { "s" });
        return 2;
    }
    0
}

/// Configuration values first, then command-line flags on top.
fn merge_options(cli: &Cli, config: Option<&MetacConfig>) -> TranslatorOptions {
    let mut options = config.map(MetacConfig::options).unwrap_or_default();

    if cli.out_dir.is_some() {
        options.out_dir = cli.out_dir.clone();
    }
    if cli.strict_compat {
        options.strict_compat = Some(true);
    }
    if cli.no_else {
        options.emit_else_clauses = Some(false);
    }
    if cli.no_emit {
        options.no_emit = Some(true);
    }
    if cli.no_emit_on_error {
        options.no_emit_on_error = Some(true);
    }
    options
}

fn write_outputs(result: &TranslationResult, to_stdout: bool) -> Result<(), i32> {
    if result.emit_skipped {
        return Ok(());
    }

    if to_stdout {
        let mut stdout = std::io::stdout().lock();
        for output in &result.outputs {
            if let Err(e) = stdout.write_all(output.text.as_bytes()) {
                print_error(&format!("Failed to write to stdout: {e}"));
                return Err(1);
            }
        }
        return Ok(());
    }

    metac_compiler::write_output_files(&result.outputs).map_err(|e| {
        print_error(&format!("Failed to write output files: {e}"));
        1
    })
}

fn run_init(path: &Path) -> i32 {
    if path.exists() {
        print_error("A metac.json file already exists in the current directory.");
        return 1;
    }

    let config = match metac_options::to_config_string(&MetacConfig::init_template()) {
        Ok(text) => text,
        Err(e) => {
            print_error(&format!("Failed to create metac.json: {e}"));
            return 1;
        }
    };

    match std::fs::write(path, config) {
        Ok(()) => {
            println!("Successfully created a metac.json file.");
            0
        }
        Err(e) => {
            print_error(&format!("Failed to create metac.json: {e}"));
            1
        }
    }
}

fn resolve_input_files(cli: &Cli) -> Result<(Vec<PathBuf>, Option<MetacConfig>), String> {
    if let Some(project) = &cli.project {
        let (files, config) = load_files_from_config(project)
            .map_err(|e| format!("Failed to read project '{}': {e}", project.display()))?;
        Ok((files, Some(config)))
    } else if !cli.files.is_empty() {
        Ok((cli.files.clone(), None))
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        let (files, config) = load_files_from_config(Path::new(CONFIG_FILE_NAME))
            .map_err(|e| format!("Failed to read {CONFIG_FILE_NAME}: {e}"))?;
        Ok((files, Some(config)))
    } else {
        Ok((Vec::new(), None))
    }
}

fn load_files_from_config(path: &Path) -> Result<(Vec<PathBuf>, MetacConfig), metac_options::ConfigError> {
    let config = metac_options::parse_config_file(path)?;
    let root_dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    };

    let files = config.source_files(&root_dir);
    Ok((files, config))
}

fn report_diagnostics(program: &Program, result: &TranslationResult) {
    let fancy = std::io::stderr().is_terminal();
    for diagnostic in result.diagnostics.diagnostics() {
        print_diagnostic(program, diagnostic, fancy);
    }
}

/// Render through miette when stderr is a terminal; otherwise one line per
/// diagnostic in `file(line,col): error MC1003: message` form.
fn print_diagnostic(program: &Program, diagnostic: &Diagnostic, fancy: bool) {
    let source = diagnostic
        .file
        .as_deref()
        .and_then(|file| program.sources().iter().find(|source| source.file_name() == file));

    match source {
        Some(source) if fancy => {
            let rendered = RenderedDiagnostic::new(diagnostic, source.file_name(), source.text());
            eprintln!("{:?}", miette::Report::new(rendered));
        }
        _ => eprintln!("{diagnostic}"),
    }
}

fn print_error(msg: &str) {
    eprintln!("error: {msg}");
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("metac").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_camel_case_flags() {
        let cli = cli(&["--outDir", "out", "--strictCompat", "--noElse", "--noEmitOnError", "a.mc", "b.mc"]);
        assert_eq!(cli.out_dir.as_deref(), Some("out"));
        assert!(cli.strict_compat);
        assert!(cli.no_else);
        assert!(cli.no_emit_on_error);
        assert_eq!(cli.files, vec![PathBuf::from("a.mc"), PathBuf::from("b.mc")]);
    }

    #[test]
    fn test_flags_override_config() {
        let config = metac_options::parse_config(
            r#"{ "translatorOptions": { "outDir": "build", "emitElseClauses": true, "outExtension": "txt" } }"#,
        )
        .unwrap();

        let options = merge_options(&cli(&["--outDir", "out", "--noElse"]), Some(&config));
        assert_eq!(options.out_dir.as_deref(), Some("out"));
        assert!(!options.emits_else_clauses());
        assert_eq!(options.out_extension(), "txt");

        let options = merge_options(&cli(&[]), Some(&config));
        assert_eq!(options.out_dir.as_deref(), Some("build"));
        assert!(options.emits_else_clauses());
    }

    #[test]
    fn test_strict_compat_flag_disables_else_by_default() {
        let options = merge_options(&cli(&["--strictCompat"]), None);
        assert!(options.is_strict_compat());
        assert!(!options.emits_else_clauses());
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let dir = std::env::temp_dir().join(format!("metac_cli_init_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join(CONFIG_FILE_NAME);
        let _ = std::fs::remove_file(&path);

        assert_eq!(run_init(&path), 0);
        let written = metac_options::parse_config_file(&path).unwrap();
        assert_eq!(written, MetacConfig::init_template());
        assert_eq!(run_init(&path), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_project_files_resolve_relative_to_config() {
        let dir = std::env::temp_dir().join(format!("metac_cli_project_{}", std::process::id()));
        std::fs::create_dir_all(dir.join("src")).unwrap();
        std::fs::write(dir.join("src/main.mc"), "x = 1").unwrap();
        let project = dir.join(CONFIG_FILE_NAME);
        std::fs::write(&project, r#"{ "include": ["src"] }"#).unwrap();

        let (files, config) = load_files_from_config(&project).unwrap();
        assert_eq!(files, vec![dir.join("src/main.mc")]);
        assert_eq!(config.include, Some(vec!["src".to_string()]));

        std::fs::remove_dir_all(&dir).unwrap();
    }
}
