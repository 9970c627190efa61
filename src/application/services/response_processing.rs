use std::sync::OnceLock;

use regex::Regex;

static REASONING_BLOCK: OnceLock<Regex> = OnceLock::new();
static FENCED_BLOCK: OnceLock<Regex> = OnceLock::new();
static LIST_MARKER: OnceLock<Regex> = OnceLock::new();

fn reasoning_block() -> &'static Regex {
    REASONING_BLOCK.get_or_init(|| {
        Regex::new(r"(?s)<think>.*?</think>").expect("reasoning block pattern is valid")
    })
}

fn fenced_block() -> &'static Regex {
    FENCED_BLOCK.get_or_init(|| {
        Regex::new(r"(?s)```[A-Za-z0-9_+-]*[ \t]*\r?\n(.*?)```")
            .expect("fenced block pattern is valid")
    })
}

fn list_marker() -> &'static Regex {
    LIST_MARKER.get_or_init(|| {
        Regex::new(r"^(?:\d+[.)]|[-*•])\s+").expect("list marker pattern is valid")
    })
}

/// Removes `<think>…</think>` blocks emitted by reasoning models.
pub fn strip_reasoning(text: &str) -> String {
    reasoning_block().replace_all(text, "").into_owned()
}

/// Strips reasoning and a wrapping code fence, then trims.
pub fn clean_output(text: &str) -> String {
    strip_reasoning(text)
        .trim()
        .trim_start_matches("```latex")
        .trim_start_matches("```tex")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim()
        .to_string()
}

/// Returns the body of the first fenced block, or the cleaned reply when
/// the model did not fence its answer.
pub fn extract_latex(text: &str) -> String {
    let stripped = strip_reasoning(text);

    match fenced_block().captures(&stripped).and_then(|caps| caps.get(1)) {
        Some(body) => body.as_str().trim().to_string(),
        None => clean_output(&stripped),
    }
}

/// A compile fix as returned for the fix-error prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixSuggestion {
    pub reasons: Vec<String>,
    pub fragment: String,
}

impl FixSuggestion {
    pub fn is_full_document(&self) -> bool {
        self.fragment.contains("\\documentclass")
    }

    /// Text posted to the assistant thread.
    pub fn summary(&self) -> String {
        if self.reasons.is_empty() {
            return self.fragment.clone();
        }

        let reasons = self
            .reasons
            .iter()
            .map(|reason| format!("- {reason}"))
            .collect::<Vec<_>>()
            .join("\n");
        format!("{reasons}\n---\n{}", self.fragment)
    }
}

/// Splits the reply at the first `---` line into reasons and fragment.
pub fn parse_fix_response(text: &str) -> FixSuggestion {
    let stripped = strip_reasoning(text);
    let lines: Vec<&str> = stripped.lines().collect();

    let Some(separator) = lines
        .iter()
        .position(|line| line.trim_start().starts_with("---"))
    else {
        return FixSuggestion {
            reasons: Vec::new(),
            fragment: extract_latex(&stripped),
        };
    };

    let reasons = lines[..separator]
        .iter()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .map(|line| list_marker().replace(line, "").trim().to_string())
        .filter(|line| !line.is_empty())
        .collect();

    FixSuggestion {
        reasons,
        fragment: extract_latex(&lines[separator + 1..].join("\n")),
    }
}
