//! Normalizes model-emitted "almost-code" text into runnable source.
//!
//! Models asked for plain code still wrap it in Markdown fences or prefix it
//! with a bare language tag often enough that every script goes through the
//! line classifier in [`sanitize`] before it reaches the interpreter. The
//! fence-edge helpers cover the cheaper case of prose-ish stage output where
//! only the outermost markers need to go.

/// Strips one leading ```` ```json ```` fence and one trailing ```` ``` ````.
/// Used by the formatting stage, whose output is prose, not code.
pub fn strip_json_fence(text: &str) -> String {
    let mut t = text.trim();
    if let Some(rest) = t.strip_prefix("```json") {
        t = rest;
    }
    if let Some(rest) = t.strip_suffix("```") {
        t = rest;
    }
    t.trim().to_string()
}

/// Strips one bare leading and one bare trailing ```` ``` ```` marker.
/// Interior fences are left alone; [`sanitize`] catches them later.
pub fn strip_outer_fences(text: &str) -> String {
    let mut t = text.trim();
    if let Some(rest) = t.strip_prefix("```") {
        t = rest;
    }
    if let Some(rest) = t.strip_suffix("```") {
        t = rest;
    }
    t.trim().to_string()
}

/// Line classifier applied to every script before execution.
///
/// Drops lines that are exactly a bare `python` token and lines whose
/// trimmed form starts with a fence marker; keeps every other line with its
/// order and indentation intact. Idempotent: sanitized text passes through
/// unchanged.
pub fn sanitize(source: &str) -> String {
    source
        .lines()
        .filter(|line| !is_noise_line(line))
        .collect::<Vec<_>>()
        .join("\n")
}

fn is_noise_line(line: &str) -> bool {
    let t = line.trim();
    t.eq_ignore_ascii_case("python") || t.starts_with("```")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_strips_fences_and_language_lines() {
        let raw = "```python\nimport pandas as pd\nPython\nprint('ok')\n```";
        let clean = sanitize(raw);
        assert_eq!(clean, "import pandas as pd\nprint('ok')");
    }

    #[test]
    fn test_sanitize_preserves_indentation_and_order() {
        let raw = "def f():\n    return 1\n\nprint(f())";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_sanitize_catches_interior_fences() {
        let raw = "a = 1\n```\nb = 2\n  ```python\nc = 3";
        assert_eq!(sanitize(raw), "a = 1\nb = 2\nc = 3");
    }

    #[test]
    fn test_sanitize_keeps_python_as_substring() {
        // Only lines that are exactly the language token go away.
        let raw = "# python helper\npython_version = 3";
        assert_eq!(sanitize(raw), raw);
    }

    #[test]
    fn test_sanitize_is_idempotent() {
        let raw = "```python\nx = 1\n```\nwhile True:\n    pass";
        let once = sanitize(raw);
        assert_eq!(sanitize(&once), once);
    }

    #[test]
    fn test_strip_json_fence() {
        let raw = "```json\n{\"rows\": 10}\n```";
        assert_eq!(strip_json_fence(raw), "{\"rows\": 10}");
        // No fences: unchanged apart from outer whitespace.
        assert_eq!(strip_json_fence("  plain text "), "plain text");
    }

    #[test]
    fn test_strip_outer_fences_ignores_interior() {
        let raw = "```\nx = 1\n```\ny = 2\n```";
        let stripped = strip_outer_fences(raw);
        assert!(stripped.starts_with("x = 1"));
        assert!(stripped.contains("```"));
    }
}
