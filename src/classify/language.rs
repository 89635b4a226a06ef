use std::path::Path;

/// How to recognise the files of one language.
#[derive(Debug)]
pub struct LanguageSpec {
    pub name: &'static str,
    pub extensions: &'static [&'static str],
    pub filenames: &'static [&'static str],
    pub shebangs: &'static [&'static str],
}

macro_rules! lang {
    ($name:expr, ext: [$($ext:expr),*]
     $(, files: [$($f:expr),*])?
     $(, shebangs: [$($sh:expr),*])?
    ) => {
        LanguageSpec {
            name: $name,
            extensions: &[$($ext),*],
            filenames: &[$($($f),*)?],
            shebangs: &[$($($sh),*)?],
        }
    };
}

pub fn languages() -> &'static [LanguageSpec] {
    static LANGUAGES: &[LanguageSpec] = &[
        lang!("Rust", ext: ["rs"]),
        lang!("Python", ext: ["py", "pyi"], shebangs: ["python", "python3"]),
        lang!("JavaScript", ext: ["js", "mjs", "cjs"], shebangs: ["node"]),
        lang!("TypeScript", ext: ["ts", "mts", "cts"]),
        lang!("JSX", ext: ["jsx"]),
        lang!("TSX", ext: ["tsx"]),
        lang!("Java", ext: ["java"]),
        lang!("C", ext: ["c", "h"]),
        lang!("C++", ext: ["cpp", "cxx", "cc", "hpp", "hxx"]),
        lang!("C#", ext: ["cs"]),
        lang!("Go", ext: ["go"]),
        lang!("Ruby", ext: ["rb"], files: ["Rakefile", "Gemfile"], shebangs: ["ruby"]),
        lang!("Shell", ext: ["sh", "bash", "zsh"], shebangs: ["sh", "bash", "zsh"]),
        lang!("HTML", ext: ["html", "htm"]),
        lang!("CSS", ext: ["css", "scss", "sass", "less"]),
        lang!("SQL", ext: ["sql"]),
        lang!("TOML", ext: ["toml"]),
        lang!("YAML", ext: ["yaml", "yml"]),
        lang!("JSON", ext: ["json"]),
        lang!("Markdown", ext: ["md", "markdown"]),
        lang!("Kotlin", ext: ["kt", "kts"]),
        lang!("Swift", ext: ["swift"]),
        lang!("PHP", ext: ["php"]),
        lang!("Dart", ext: ["dart"]),
        lang!("Haskell", ext: ["hs"]),
        lang!("Lua", ext: ["lua"], shebangs: ["lua"]),
        lang!("Perl", ext: ["pl", "pm"], shebangs: ["perl"]),
        lang!("R", ext: ["r", "R"], shebangs: ["Rscript"]),
        lang!("Scala", ext: ["scala", "sc", "sbt"]),
        lang!("XML", ext: ["xml", "xsl", "xslt", "svg", "plist", "xaml"]),
        lang!("Dockerfile", ext: [], files: ["Dockerfile"]),
        lang!("Makefile", ext: ["mk"], files: ["Makefile", "makefile", "GNUmakefile"]),
        lang!("Elixir", ext: ["ex", "exs"], shebangs: ["elixir"]),
        lang!("Clojure", ext: ["clj", "cljs", "cljc", "edn"]),
        lang!("Zig", ext: ["zig"]),
        lang!("Objective-C", ext: ["m", "mm"]),
        lang!("OCaml", ext: ["ml", "mli"]),
        lang!("F#", ext: ["fs", "fsi", "fsx"]),
        lang!("Nim", ext: ["nim"]),
        lang!("Julia", ext: ["jl"], shebangs: ["julia"]),
        lang!("HCL", ext: ["tf", "hcl"]),
        lang!("Groovy", ext: ["groovy", "gradle"]),
        lang!("Erlang", ext: ["erl", "hrl"]),
        lang!("Batchfile", ext: ["bat", "cmd"]),
        lang!("Protocol Buffer", ext: ["proto"]),
        lang!("Vue", ext: ["vue"]),
        lang!("Svelte", ext: ["svelte"]),
    ];
    LANGUAGES
}

/// Detect a language from the file name first, then the extension.
pub fn detect(path: &Path) -> Option<&'static LanguageSpec> {
    let file_name = path.file_name()?.to_str()?;

    if let Some(spec) = languages()
        .iter()
        .find(|spec| spec.filenames.contains(&file_name))
    {
        return Some(spec);
    }

    let ext = path.extension()?.to_str()?;
    languages()
        .iter()
        .find(|spec| spec.extensions.contains(&ext))
}

/// Detect a language from a `#!` line such as `#!/usr/bin/env python3`.
pub fn detect_by_shebang(first_line: &str) -> Option<&'static LanguageSpec> {
    let line = first_line.trim();
    if !line.starts_with("#!") {
        return None;
    }

    let interpreter = line
        .rsplit('/')
        .next()
        .unwrap_or("")
        .split_whitespace()
        .next()
        .unwrap_or("");

    // with `env` the real interpreter is the next argument
    let prog = if interpreter == "env" {
        line.split_whitespace().last().unwrap_or("")
    } else {
        interpreter
    };

    languages().iter().find(|spec| {
        spec.shebangs.iter().any(|shebang| {
            prog.strip_prefix(shebang)
                .is_some_and(|version| version.chars().all(|c| c.is_ascii_digit() || c == '.'))
        })
    })
}

#[cfg(test)]
#[path = "language_test.rs"]
mod tests;
