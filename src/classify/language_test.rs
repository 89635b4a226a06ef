use super::*;
use std::path::Path;

#[test]
fn detect_by_extension_go() {
    let spec = detect(Path::new("cmd/main.go")).unwrap();
    assert_eq!(spec.name, "Go");
}

#[test]
fn detect_by_extension_markdown() {
    assert_eq!(detect(Path::new("README.md")).unwrap().name, "Markdown");
}

#[test]
fn detect_by_filename_makefile() {
    assert_eq!(detect(Path::new("Makefile")).unwrap().name, "Makefile");
}

#[test]
fn detect_by_filename_dockerfile() {
    assert_eq!(detect(Path::new("build/Dockerfile")).unwrap().name, "Dockerfile");
}

#[test]
fn detect_unknown_extension() {
    assert!(detect(Path::new("file.xyz123")).is_none());
}

#[test]
fn detect_no_extension() {
    assert!(detect(Path::new("randomfile")).is_none());
}

#[test]
fn shebang_python_versioned() {
    assert_eq!(detect_by_shebang("#!/usr/bin/python3.11\n").unwrap().name, "Python");
}

#[test]
fn shebang_env_python() {
    assert_eq!(detect_by_shebang("#!/usr/bin/env python3\n").unwrap().name, "Python");
}

#[test]
fn shebang_bash() {
    assert_eq!(detect_by_shebang("#!/bin/bash\n").unwrap().name, "Shell");
}

#[test]
fn shebang_prefix_is_not_enough() {
    assert!(detect_by_shebang("#!/usr/bin/env shellcheck\n").is_none());
}

#[test]
fn not_a_shebang() {
    assert!(detect_by_shebang("print('hi')\n").is_none());
}

#[test]
fn language_names_are_unique() {
    let mut names: Vec<&str> = languages().iter().map(|l| l.name).collect();
    let total = names.len();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), total);
}
