//! metac_compiler: Translation orchestration.
//!
//! Owns the program's source files, then parses and emits each of them.
//! Files are independent, so every file gets its own arena and the work is
//! spread across the rayon pool.

use bumpalo::Bump;
use metac_core::SourceText;
use metac_diagnostics::{Diagnostic, DiagnosticCollection};
use metac_emitter::{common_source_directory, EmitOptions, Emitter, OutputLayout, TokenTranslator};
use metac_options::{ConfigError, MetacConfig, TranslatorOptions};
use metac_parser::{ParseOptions, Parser};
use rayon::prelude::*;
use std::path::{Path, PathBuf};
use std::time::Instant;

pub use metac_emitter::{write_output_files, OutputFile};

/// Host-level failures. Problems in the source text are diagnostics, never
/// errors.
#[derive(Debug, thiserror::Error)]
pub enum CompileError {
    #[error("cannot read '{}': {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Outputs and diagnostics of a translation run.
#[derive(Debug, Default)]
pub struct TranslationResult {
    /// One output per source file, in the order the sources were added.
    /// Empty when emission was skipped.
    pub outputs: Vec<OutputFile>,
    /// Lexer, parser and emitter diagnostics, sorted by file and position.
    pub diagnostics: DiagnosticCollection,
    /// Whether outputs were withheld by `noEmit` or `noEmitOnError`.
    pub emit_skipped: bool,
}

/// The set of files translated together under one set of options.
pub struct Program {
    /// Translator options.
    pub options: TranslatorOptions,
    /// Files read by `load_root_files`.
    pub root_files: Vec<PathBuf>,
    sources: Vec<SourceText>,
    translator: TokenTranslator,
}

impl Program {
    pub fn new(options: TranslatorOptions) -> Self {
        let translator = match &options.identifier_overrides {
            Some(overrides) => TokenTranslator::with_overrides(overrides.iter().map(|(k, v)| (k.as_str(), v.as_str()))),
            None => TokenTranslator::new(),
        };
        Self {
            options,
            root_files: Vec::new(),
            sources: Vec::new(),
            translator,
        }
    }

    pub fn with_root_files(mut self, root_files: Vec<PathBuf>) -> Self {
        self.root_files = root_files;
        self
    }

    /// A program for a project file: options from `translatorOptions` and
    /// root files discovered relative to `config_dir`.
    pub fn from_config(config: &MetacConfig, config_dir: &Path) -> Self {
        Self::new(config.options()).with_root_files(config.source_files(config_dir))
    }

    /// Read a metac.json and build its program. Entries in the file are
    /// relative to the file's directory.
    pub fn from_config_file(path: &Path) -> Result<Self, CompileError> {
        let config = metac_options::parse_config_file(path)?;
        let config_dir = match path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        Ok(Self::from_config(&config, config_dir))
    }

    /// Add an in-memory source file.
    pub fn add_source(&mut self, file_name: impl Into<String>, text: impl Into<String>) {
        self.sources.push(SourceText::new(file_name, text));
    }

    /// Read every root file from disk.
    pub fn load_root_files(&mut self) -> Result<(), CompileError> {
        for path in &self.root_files {
            let text = std::fs::read_to_string(path).map_err(|source| CompileError::Io {
                path: path.clone(),
                source,
            })?;
            self.sources.push(SourceText::new(path.to_string_lossy(), text));
        }
        tracing::debug!(files = self.root_files.len(), "loaded root files");
        Ok(())
    }

    pub fn sources(&self) -> &[SourceText] {
        &self.sources
    }

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions {
            strict_compat: self.options.is_strict_compat(),
        }
    }

    pub fn emit_options(&self) -> EmitOptions {
        EmitOptions {
            emit_else_clauses: self.options.emits_else_clauses(),
        }
    }

    /// Without a configured `rootDir`, outputs are laid out relative to the
    /// common directory of all sources.
    pub fn output_layout(&self) -> OutputLayout {
        let root_dir = match &self.options.root_dir {
            Some(root_dir) => Some(PathBuf::from(root_dir)),
            None => common_source_directory(self.sources.iter().map(|source| Path::new(source.file_name()))),
        };
        OutputLayout {
            out_dir: self.options.out_dir.as_ref().map(PathBuf::from),
            root_dir,
            out_extension: self.options.out_extension().to_string(),
        }
    }

    /// Parse and emit every source file.
    pub fn translate(&self) -> TranslationResult {
        let parse_options = self.parse_options();
        let emit_options = self.emit_options();
        let layout = self.output_layout();

        let translated: Vec<(OutputFile, Vec<Diagnostic>)> = self
            .sources
            .par_iter()
            .map(|source| self.translate_source(source, parse_options, emit_options, &layout))
            .collect();

        let mut diagnostics = DiagnosticCollection::new();
        let mut outputs = Vec::with_capacity(translated.len());
        for (output, file_diagnostics) in translated {
            diagnostics.extend(file_diagnostics);
            outputs.push(output);
        }
        diagnostics.sort();

        let emit_skipped =
            self.options.is_no_emit() || (self.options.is_no_emit_on_error() && diagnostics.has_errors());
        if emit_skipped {
            tracing::debug!(errors = diagnostics.error_count(), "skipping emit");
            outputs.clear();
        }

        TranslationResult {
            outputs,
            diagnostics,
            emit_skipped,
        }
    }

    fn translate_source(
        &self,
        source: &SourceText,
        parse_options: ParseOptions,
        emit_options: EmitOptions,
        layout: &OutputLayout,
    ) -> (OutputFile, Vec<Diagnostic>) {
        let start = Instant::now();
        let arena = Bump::new();
        let tree = Parser::new(&arena, source).with_options(parse_options).parse();
        let emitted = Emitter::with_options(&self.translator, emit_options).emit_compilation_unit(&tree);

        let mut diagnostics = tree.diagnostics;
        diagnostics.extend(emitted.diagnostics);

        tracing::debug!(
            file = source.file_name(),
            elapsed_us = start.elapsed().as_micros() as u64,
            arena_bytes = arena.allocated_bytes(),
            diagnostics = diagnostics.len(),
            "translated file"
        );

        let source_path = PathBuf::from(source.file_name());
        let output = OutputFile {
            path: layout.output_path(&source_path),
            text: emitted.text,
            source: source_path,
        };
        (output, diagnostics)
    }
}
