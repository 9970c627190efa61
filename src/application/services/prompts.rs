//! Prompt templates for the assistant.
//!
//! Every system prompt constrains the model to raw LaTeX so replies can be
//! inserted into the document without further editing.

pub const FORMULA_SYSTEM_PROMPT: &str = r"You are a LaTeX expert. Convert the user's natural language or math description into a single LaTeX math expression.
Rules:
- Output ONLY the LaTeX code. No markdown, no \begin{...}, no explanation.
- Use inline math $...$ or display \[ ... \] only if one expression. Prefer raw LaTeX like \frac{a}{b}, \sum, etc. when the user will embed it in a larger document.
- No backticks or code fences.";

pub const FIX_ERROR_SYSTEM_PROMPT: &str = r#"You are a LaTeX expert. The user's document failed to compile. Analyze the compile log and provide a minimal fix.
Output format:
1. Optional: 1-3 short reasons (one line each).
2. Then a line starting with "---" (three dashes).
3. Then the fixed LaTeX fragment only (the corrected part, not the whole file). If the fix needs changes in several places, output the whole corrected document instead. No markdown, no backticks, no explanation after the fragment.
If the error is unclear, suggest the most likely fix."#;

pub const COMPLETE_SYSTEM_PROMPT: &str = r"You are a LaTeX expert. Continue the document from the cursor context. Write the next paragraph(s) or section in LaTeX.
Rules:
- Output ONLY LaTeX. No markdown, no explanation, no backticks.
- You may include \begin{...} ... \end{...} environments and \section{} etc. as appropriate.
- Match the style and structure of the context.";

pub const LATEX_ASSISTANT_SYSTEM_PROMPT: &str = "You are a LaTeX assistant. Output ONLY raw LaTeX. No markdown fences, no explanations unless asked.";

pub fn formula_user_prompt(selection: &str) -> String {
    format!("Convert to LaTeX:\n{selection}")
}

pub fn fix_error_user_prompt(log: &str, tex_snippet: Option<&str>) -> String {
    let snippet = tex_snippet
        .filter(|snippet| !snippet.trim().is_empty())
        .map(|snippet| format!("Relevant LaTeX:\n{snippet}"))
        .unwrap_or_default();

    format!("Compile log:\n{log}\n\n{snippet}")
}

pub fn complete_user_prompt(cursor_context: &str) -> String {
    format!(
        "Context around cursor:\n{cursor_context}\n\nContinue with the next LaTeX content (paragraph or block)."
    )
}

pub fn rewrite_prompt(instruction: &str, document: &str) -> String {
    format!(
        "You are a LaTeX expert. Instruction: \"{instruction}\"\nOutput ONLY the raw LaTeX code inside a markdown code block.\nCurrent Code:\n{document}"
    )
}

pub fn chat_fix_prompt(compile_log: &str) -> String {
    format!(
        "The LaTeX compilation failed with the following log:\n{compile_log}\n\nPlease fix the errors in my LaTeX code."
    )
}

pub fn quick_fix_prompt(snippet: &str, error_message: &str) -> String {
    format!(
        "Fix this LaTeX compile error.\nError: {error_message}\n\nCode:\n{snippet}\nOutput ONLY raw LaTeX. No markdown fences, no explanations unless asked."
    )
}

pub fn quick_formula_prompt(snippet: &str) -> String {
    format!("Convert the text into latex formula. Only output the latex expression. \n{snippet}")
}

pub fn autocomplete_prompt(prefix: &str) -> String {
    format!("Continue this LaTeX snippet. Output only the continuation, not the original:\n{prefix}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fix_prompt_omits_empty_snippet() {
        assert_eq!(
            fix_error_user_prompt("! Undefined control sequence.", None),
            "Compile log:\n! Undefined control sequence.\n\n"
        );
        assert_eq!(
            fix_error_user_prompt("log", Some("   ")),
            "Compile log:\nlog\n\n"
        );
    }

    #[test]
    fn fix_prompt_includes_snippet() {
        let prompt = fix_error_user_prompt("log", Some("\\frac{1}"));
        assert!(prompt.ends_with("Relevant LaTeX:\n\\frac{1}"));
    }

    #[test]
    fn rewrite_prompt_quotes_instruction_and_embeds_document() {
        let prompt = rewrite_prompt("make it formal", "\\section{Hi}");
        assert!(prompt.contains("Instruction: \"make it formal\""));
        assert!(prompt.ends_with("Current Code:\n\\section{Hi}"));
    }

    #[test]
    fn system_prompts_target_latex_output() {
        for prompt in [
            FORMULA_SYSTEM_PROMPT,
            COMPLETE_SYSTEM_PROMPT,
            LATEX_ASSISTANT_SYSTEM_PROMPT,
        ] {
            assert!(prompt.contains("LaTeX"));
        }
        assert!(FIX_ERROR_SYSTEM_PROMPT.contains("\"---\""));
    }
}
