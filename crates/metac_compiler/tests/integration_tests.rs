//! Compiler integration tests.
//!
//! End-to-end tests for the translation pipeline: lex -> parse -> emit.

use indexmap::IndexMap;
use metac_compiler::{CompileError, Program, TranslationResult};
use metac_options::{parse_config, TranslatorOptions};
use std::path::{Path, PathBuf};

/// Helper: create a program with one source and translate it.
fn translate_source(source: &str, options: TranslatorOptions) -> TranslationResult {
    let mut program = Program::new(options);
    program.add_source("test.mc", source);
    program.translate()
}

fn temp_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("metac_compiler_{}_{}", name, std::process::id()));
    let _ = std::fs::remove_dir_all(&dir);
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

// ============================================================================
// Basic translation
// ============================================================================

#[test]
fn test_translate_empty_file() {
    let result = translate_source("", TranslatorOptions::default());
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.outputs.len(), 1);
    assert_eq!(result.outputs[0].text, "");
}

#[test]
fn test_translate_function() {
    let result = translate_source("int add(int x, int y) { return x + y }", TranslatorOptions::default());
    assert!(result.diagnostics.is_empty());
    assert_eq!(result.outputs[0].text, "public int add(int x, int y)\n{\nreturn x + y;\n\n}\n\n");
    assert_eq!(result.outputs[0].path, PathBuf::from("test.java"));
    assert_eq!(result.outputs[0].source, PathBuf::from("test.mc"));
}

#[test]
fn test_outputs_keep_source_order() {
    let mut program = Program::new(TranslatorOptions::default());
    for i in 0..16 {
        program.add_source(format!("file{i}.mc"), format!("x = {i}"));
    }
    let result = program.translate();
    assert_eq!(result.outputs.len(), 16);
    for (i, output) in result.outputs.iter().enumerate() {
        assert_eq!(output.path, PathBuf::from(format!("file{i}.java")));
        assert_eq!(output.text, format!("x = {i};\n\n"));
    }
}

// ============================================================================
// Options
// ============================================================================

#[test]
fn test_strict_compat_disables_else() {
    let source = "if (x > 5) { y = 1 } else { y = 2 }";
    let options = TranslatorOptions {
        strict_compat: Some(true),
        ..TranslatorOptions::default()
    };
    let result = translate_source(source, options);
    assert_eq!(result.outputs[0].text, "if(x > 5){\ny = 1;\n\n}\n\n");

    let result = translate_source(source, TranslatorOptions::default());
    assert!(result.outputs[0].text.contains("else"));
}

#[test]
fn test_identifier_overrides_from_options() {
    let mut overrides = IndexMap::new();
    overrides.insert("Count".to_string(), "size".to_string());
    let options = TranslatorOptions {
        identifier_overrides: Some(overrides),
        ..TranslatorOptions::default()
    };
    let result = translate_source("n = items.Count + Math.Max(a, b)", options);
    assert_eq!(result.outputs[0].text, "n = items.size + Math.max(a, b);\n\n");
}

#[test]
fn test_output_layout_from_options() {
    let options = TranslatorOptions {
        out_dir: Some("out".to_string()),
        root_dir: Some("src".to_string()),
        out_extension: Some("txt".to_string()),
        ..TranslatorOptions::default()
    };
    let mut program = Program::new(options);
    program.add_source("src/lib/util.mc", "x = 1");
    let result = program.translate();
    assert_eq!(result.outputs[0].path, PathBuf::from("out/lib/util.txt"));
}

#[test]
fn test_out_dir_without_root_dir_keeps_sibling_paths_apart() {
    let options = TranslatorOptions {
        out_dir: Some("out".to_string()),
        ..TranslatorOptions::default()
    };
    let mut program = Program::new(options);
    program.add_source("proj/a/main.mc", "x = 1");
    program.add_source("proj/b/main.mc", "x = 2");
    let result = program.translate();
    let paths: Vec<_> = result.outputs.iter().map(|o| o.path.clone()).collect();
    assert_eq!(paths, vec![PathBuf::from("out/a/main.java"), PathBuf::from("out/b/main.java")]);
}

#[test]
fn test_no_emit_on_error_withholds_outputs() {
    let options = TranslatorOptions {
        no_emit_on_error: Some(true),
        ..TranslatorOptions::default()
    };
    let result = translate_source("int add(int x { return x }", options.clone());
    assert!(result.diagnostics.has_errors());
    assert!(result.emit_skipped);
    assert!(result.outputs.is_empty());

    let result = translate_source("x = 1", options);
    assert!(!result.emit_skipped);
    assert_eq!(result.outputs.len(), 1);
}

#[test]
fn test_no_emit_reports_diagnostics_only() {
    let options = TranslatorOptions {
        no_emit: Some(true),
        ..TranslatorOptions::default()
    };
    let result = translate_source("x = 1 $", options);
    assert!(result.outputs.is_empty());
    assert_eq!(result.diagnostics.len(), 1);
}

// ============================================================================
// Diagnostics
// ============================================================================

#[test]
fn test_diagnostics_are_sorted_across_files() {
    let mut program = Program::new(TranslatorOptions::default());
    program.add_source("b.mc", "x = 1 $");
    program.add_source("a.mc", "y = 2 #\nz = 3 @");
    let result = program.translate();

    let files: Vec<_> = result.diagnostics.diagnostics().iter().map(|d| d.file.clone()).collect();
    assert_eq!(
        files,
        vec![Some("a.mc".to_string()), Some("a.mc".to_string()), Some("b.mc".to_string())]
    );
    let first = &result.diagnostics.diagnostics()[0];
    let second = &result.diagnostics.diagnostics()[1];
    assert!(first.span.unwrap().start < second.span.unwrap().start);
}

#[test]
fn test_emit_warnings_are_collected() {
    let result = translate_source("x = a.5", TranslatorOptions::default());
    assert_eq!(result.diagnostics.len(), 1);
    assert!(!result.diagnostics.has_errors());
    assert_eq!(result.diagnostics.warning_count(), 1);
}

// ============================================================================
// Files on disk
// ============================================================================

#[test]
fn test_load_root_files_and_write_outputs() {
    let dir = temp_dir("disk");
    let src = dir.join("src");
    std::fs::create_dir_all(src.join("nested")).unwrap();
    std::fs::write(src.join("main.mc"), "int main() { return 0 }").unwrap();
    std::fs::write(src.join("nested/util.mc"), "x = 1").unwrap();

    let config = parse_config(&format!(
        r#"{{
            "translatorOptions": {{ "outDir": "{out}", "rootDir": "{src}" }},
            "include": ["src"]
        }}"#,
        out = dir.join("out").display(),
        src = src.display(),
    ))
    .unwrap();

    let mut program = Program::from_config(&config, &dir);
    assert_eq!(program.root_files.len(), 2);
    program.load_root_files().unwrap();
    let result = program.translate();
    assert!(result.diagnostics.is_empty());

    metac_compiler::write_output_files(&result.outputs).unwrap();
    assert_eq!(
        std::fs::read_to_string(dir.join("out/main.java")).unwrap(),
        "public int main()\n{\nreturn 0;\n\n}\n\n"
    );
    assert_eq!(std::fs::read_to_string(dir.join("out/nested/util.java")).unwrap(), "x = 1;\n\n");

    std::fs::remove_dir_all(&dir).unwrap();
}

#[test]
fn test_missing_root_file_is_an_io_error() {
    let mut program =
        Program::new(TranslatorOptions::default()).with_root_files(vec![PathBuf::from("/nonexistent/a.mc")]);
    let err = program.load_root_files().unwrap_err();
    match err {
        CompileError::Io { path, .. } => assert_eq!(path, Path::new("/nonexistent/a.mc")),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_program_from_config_file() {
    let dir = temp_dir("config_file");
    std::fs::create_dir_all(dir.join("src")).unwrap();
    std::fs::write(dir.join("src/a.mc"), "x = 1").unwrap();
    std::fs::write(
        dir.join("metac.json"),
        r#"{ "translatorOptions": { "strictCompat": true }, "include": ["src"] }"#,
    )
    .unwrap();

    let program = Program::from_config_file(&dir.join("metac.json")).unwrap();
    assert!(program.options.is_strict_compat());
    assert_eq!(program.root_files, vec![dir.join("src/a.mc")]);

    std::fs::write(dir.join("metac.json"), "{ \"include\": 5 }").unwrap();
    let err = Program::from_config_file(&dir.join("metac.json")).err().unwrap();
    assert!(matches!(err, CompileError::Config(_)));

    std::fs::remove_dir_all(&dir).unwrap();
}
