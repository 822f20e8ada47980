use grep::regex::RegexMatcher;
use grep::searcher::{Searcher, Sink, SinkMatch};
use std::error::Error;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

// Directories holding this crate's own Rust sources. Anything else in the
// checkout (build output, vendored material) is outside the policy.
const SOURCE_DIRS: [&str; 4] = ["trap", "cli", "tests", "benches"];

// One source hygiene rule, enforced by a regex over every source line.
#[derive(Clone, Copy)]
enum Rule {
    UnderscorePrefix,
    ChangelogComment,
    StarsInComment,
    UppercaseComment,
    AllowDeadCode,
}

impl Rule {
    fn pattern(self) -> &'static str {
        match self {
            Self::UnderscorePrefix => r"\b(_[a-zA-Z0-9_]+)\b",
            Self::ChangelogComment => {
                r"(//|/\*|///).*(?:FIXED|CORRECTED|FIX|FIXES|NEW|CHANGED|CHANGES|CHANGE|MODIFIED|MODIFIES|MODIFY|UPDATED|UPDATES|UPDATE)"
            }
            Self::StarsInComment => r"(//|/\*).*\*\*",
            Self::UppercaseComment => r"(//|/\*|///).*",
            Self::AllowDeadCode => r"#\s*\[\s*allow\s*\(\s*dead_code\s*\)\s*\]",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::UnderscorePrefix => "underscore-prefixed bindings",
            Self::ChangelogComment => "changelog-style comments",
            Self::StarsInComment => "'**' emphasis in comments",
            Self::UppercaseComment => "all-uppercase comments",
            Self::AllowDeadCode => "#[allow(dead_code)] attributes",
        }
    }

    fn advice(self) -> &'static str {
        match self {
            Self::UnderscorePrefix => {
                "Either use the variable or remove it completely. Underscore prefixes are not allowed."
            }
            Self::ChangelogComment => {
                "Comments describe the code as it is. History belongs in version control."
            }
            Self::StarsInComment => "Plain comments do not need markdown emphasis.",
            Self::UppercaseComment => "Strongly consider deleting the comment completely.",
            Self::AllowDeadCode => "Either use the code (removing the attribute) or remove it.",
        }
    }

    fn applies_to_build_script(self) -> bool {
        matches!(self, Self::UnderscorePrefix)
    }
}

// Collects matching lines of one file, after rule-specific filtering.
struct RuleCollector {
    rule: Rule,
    violations: Vec<String>,
    file_path: PathBuf,
}

impl RuleCollector {
    fn new(rule: Rule, file_path: &Path) -> Self {
        Self {
            rule,
            violations: Vec::new(),
            file_path: file_path.to_path_buf(),
        }
    }

    fn check_and_get_error_message(&self) -> Option<String> {
        if self.violations.is_empty() {
            return None;
        }

        let file_name = self.file_path.to_str().unwrap_or("?");
        let mut error_msg = format!(
            "\n❌ ERROR: Found {} {} in {}:\n",
            self.violations.len(),
            self.rule.description(),
            file_name
        );
        for violation in &self.violations {
            error_msg.push_str(&format!("   {violation}\n"));
        }
        error_msg.push_str(&format!(
            "\n⚠️ {} are forbidden in this project.\n   {}\n",
            self.rule.description(),
            self.rule.advice()
        ));
        Some(error_msg)
    }

    fn is_violation(&self, line_text: &str) -> bool {
        match self.rule {
            Rule::UnderscorePrefix => !is_comment(line_text) && !underscore_inside_string(line_text),
            Rule::StarsInComment => !is_doc_comment(line_text),
            Rule::UppercaseComment => comment_text(line_text).is_some_and(|text| {
                let letters: Vec<char> = text.chars().filter(|c| c.is_alphabetic()).collect();
                !letters.is_empty() && letters.iter().all(|c| c.is_uppercase())
            }),
            Rule::ChangelogComment | Rule::AllowDeadCode => true,
        }
    }
}

impl Sink for RuleCollector {
    type Error = std::io::Error;

    fn matched(&mut self, _: &Searcher, mat: &SinkMatch) -> Result<bool, Self::Error> {
        let line_number = mat.line_number().unwrap_or(0);
        let line_text = std::str::from_utf8(mat.bytes()).unwrap_or("").trim_end();

        if self.is_violation(line_text) {
            self.violations.push(format!("{line_number}:{line_text}"));
        }

        // Keep searching the rest of the file.
        Ok(true)
    }
}

fn is_comment(line: &str) -> bool {
    let trimmed = line.trim_start();
    trimmed.starts_with("//") || trimmed.starts_with("/*") || trimmed.starts_with('*')
}

fn is_doc_comment(line: &str) -> bool {
    line.trim_start().starts_with("///")
}

// True when an underscore sits between a pair of double quotes.
fn underscore_inside_string(line: &str) -> bool {
    line.split('"')
        .enumerate()
        .any(|(i, part)| i % 2 == 1 && part.contains('_'))
}

// The text of a line comment or single-line block comment, without its marker.
fn comment_text(line: &str) -> Option<&str> {
    let trimmed = line.trim_start();
    if let Some(rest) = trimmed.strip_prefix("//") {
        let rest = rest.trim_start_matches(['/', '!']);
        return Some(rest.trim());
    }
    let start = line.find("/*")?;
    let body = &line[start + 2..];
    Some(match body.find("*/") {
        Some(end) => body[..end].trim(),
        None => body.trim(),
    })
}

fn source_files() -> Vec<PathBuf> {
    SOURCE_DIRS
        .iter()
        .flat_map(|dir| WalkDir::new(dir).into_iter().filter_map(|e| e.ok()))
        .filter(|e| e.path().extension().is_some_and(|ext| ext == "rs"))
        .map(|e| e.into_path())
        .collect()
}

fn scan(rule: Rule, files: &[PathBuf]) -> Result<(), Box<dyn Error>> {
    let matcher = RegexMatcher::new_line_matcher(rule.pattern())?;
    let mut searcher = Searcher::new();

    let build_script = Path::new("build.rs");
    let targets = files
        .iter()
        .map(PathBuf::as_path)
        .chain(rule.applies_to_build_script().then_some(build_script));

    for path in targets {
        let mut collector = RuleCollector::new(rule, path);
        searcher.search_path(&matcher, path, &mut collector)?;

        if let Some(error_message) = collector.check_and_get_error_message() {
            return Err(error_message.into());
        }
    }

    Ok(())
}

fn main() {
    println!("cargo:rerun-if-changed=build.rs");
    for dir in SOURCE_DIRS {
        println!("cargo:rerun-if-changed={dir}");
    }

    let files = source_files();
    let rules = [
        Rule::UnderscorePrefix,
        Rule::ChangelogComment,
        Rule::StarsInComment,
        Rule::UppercaseComment,
        Rule::AllowDeadCode,
    ];

    for rule in rules {
        if let Err(e) = scan(rule, &files) {
            // Shown in cargo's output before the build fails.
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}
