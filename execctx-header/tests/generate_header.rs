//! Filesystem-level tests for the header generator
//!
//! The fixture pair under `tests/fixtures` is a full execution context header
//! and the 32-bit pointer header generated from it with the end year pinned.

use execctx_header::{generate, render_header, Banner, GenerateError, GenerateOptions, IncludeGuard};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn options(input: &Path, output: &Path) -> GenerateOptions {
    GenerateOptions {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        pointer_type: "uint32_t".to_string(),
        banner: Banner::new().with_year(2024),
    }
}

#[test]
fn full_header_matches_reference_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("execContextGenerated_32bitPointers.h");

    let written = generate(&options(&fixture_path("AICMetadataExecCtx.h"), &output)).unwrap();

    assert_eq!(written, output);
    let expected = fs::read_to_string(fixture_path("expected_32bitPointers.h")).unwrap();
    assert_eq!(fs::read_to_string(&output).unwrap(), expected);
}

#[test]
fn running_twice_is_byte_identical() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("ctx32.h");
    let opts = options(&fixture_path("AICMetadataExecCtx.h"), &output);

    generate(&opts).unwrap();
    let first = fs::read(&output).unwrap();
    generate(&opts).unwrap();
    let second = fs::read(&output).unwrap();

    assert_eq!(first, second);
}

#[test]
fn existing_output_is_overwritten() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("ctx32.h");
    fs::write(&output, "stale contents that are much longer than nothing".repeat(200)).unwrap();

    generate(&options(&fixture_path("AICMetadataExecCtx.h"), &output)).unwrap();

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("/*\n"));
    assert!(!text.contains("stale contents"));
}

#[test]
fn missing_input_fails_validation_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("does-not-exist.h");
    let output = dir.path().join("out.h");

    let err = generate(&options(&input, &output)).unwrap_err();

    assert!(matches!(err, GenerateError::PathValidation { ref path, .. } if *path == input));
    assert!(!output.exists());
}

#[test]
fn missing_output_directory_fails_validation_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("deps-generated").join("out.h");

    let err = generate(&options(&fixture_path("AICMetadataExecCtx.h"), &output)).unwrap_err();

    assert!(matches!(err, GenerateError::PathValidation { .. }));
    assert!(!output.exists());
    assert!(!output.parent().unwrap().exists());
}

#[test]
fn unreadable_input_is_load_error_and_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("AICMetadataExecCtx.h");
    fs::create_dir(&input).unwrap();
    let output = dir.path().join("out.h");

    let err = generate(&options(&input, &output)).unwrap_err();

    assert_eq!(err, GenerateError::Load { path: input });
    assert!(!output.exists());
}

#[test]
fn source_without_struct_writes_nothing() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("empty.h");
    let output = dir.path().join("out.h");
    fs::write(&input, "#pragma once\n").unwrap();

    let err = generate(&options(&input, &output)).unwrap_err();

    assert_eq!(
        err,
        GenerateError::MarkerNotFound {
            marker: "typedef struct AICExecContext_ {"
        }
    );
    assert!(!output.exists());
}

#[test]
fn documented_example_renders_completely() {
    let source = "typedef struct AICExecContext_ { uint32_t *a; nnc_log_fp log; } AICExecContext;";
    let guard = IncludeGuard::from_file_name("execContextGenerated_32bitPointers.h");
    let header = render_header(source, &guard, "uint32_t", &Banner::new().with_year(2024)).unwrap();

    insta::assert_snapshot!(header, @r###"
    /*
     * Copyright (c) 2021-2024 Qualcomm Innovation Center, Inc. All rights reserved.
     * SPDX-License-Identifier: BSD-3-Clause-Clear
     */

    #ifndef EXECCONTEXTGENERATED_32BITPOINTERS_H
    #define EXECCONTEXTGENERATED_32BITPOINTERS_H

    typedef struct AICExecContext_32bitPointers { uint32_t a; uint32_t log; } AICExecContext32bitPointers;

    #endif // EXECCONTEXTGENERATED_32BITPOINTERS_H
    "###);
}

#[test]
fn alternate_destination_type() {
    let source = fs::read_to_string(fixture_path("AICMetadataExecCtx.h")).unwrap();
    let guard = IncludeGuard::from_file_name("ctx64.h");
    let header = render_header(&source, &guard, "uint64_t", &Banner::new().with_year(2024)).unwrap();

    assert!(header.contains("  uint64_t logFuncPtr;\n"));
    assert!(header.contains("  uint64_t semaphoreListPtr;\n"));
    assert!(header.contains("  uint64_t networkHeapAddr;\n"));
    // Scalar fields keep their declared width
    assert!(header.contains("  uint16_t execContextMajorVersion;\n"));
    assert!(!header.contains("uint32_t logFuncPtr"));
}
