use std::io::{self, BufRead, Write};

use crate::console::Terminal;

/// Separator between the query and the clarification context.
pub const CONTEXT_SEPARATOR: &str = "\n\nContext:\n";

/// Number of answer characters echoed back for confirmation.
pub const ECHO_LIMIT: usize = 50;

/// Ask each question in order and collect `"<question>: <answer>"` pairs.
///
/// Blank answers and end of input skip the question.
pub fn collect_answers<R: BufRead, W: Write>(
    terminal: &mut Terminal<R, W>,
    questions: &[String],
) -> io::Result<Vec<String>> {
    terminal.say("\n📋 Please provide context:")?;

    let mut answers = Vec::new();
    for (i, question) in questions.iter().enumerate() {
        terminal.say(format_args!("\n{}. {}", i + 1, question))?;

        match terminal.prompt("> ")? {
            Some(answer) if !answer.is_empty() => {
                terminal.say(answer_preview(&answer))?;
                answers.push(format!("{}: {}", question, answer));
            }
            _ => {}
        }
    }

    terminal.say(format_args!("✅ Got {} clarifications\n", answers.len()))?;
    Ok(answers)
}

/// Append the clarification context to `query`, or return it unchanged when
/// there is none.
pub fn enrich_query(query: &str, answers: &[String]) -> String {
    if answers.is_empty() {
        return query.to_string();
    }
    format!("{}{}{}", query, CONTEXT_SEPARATOR, answers.join("\n"))
}

/// Confirmation echo for an answer.
pub fn answer_preview(answer: &str) -> String {
    let head: String = answer.chars().take(ECHO_LIMIT).collect();
    format!("   ✓ {}...", head)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn questions(items: &[&str]) -> Vec<String> {
        items.iter().map(|q| q.to_string()).collect()
    }

    fn run(input: &str, qs: &[&str]) -> (Vec<String>, String) {
        let mut term = Terminal::new(Cursor::new(input.to_string()), Vec::new(), false);
        let answers = collect_answers(&mut term, &questions(qs)).unwrap();
        (answers, String::from_utf8(term.into_output()).unwrap())
    }

    #[test]
    fn test_all_answers_recorded_in_order() {
        let (answers, output) = run("EU\nlast 5 years\n", &["Which region?", "Which period?"]);

        assert_eq!(
            answers,
            vec!["Which region?: EU", "Which period?: last 5 years"]
        );
        assert!(output.contains("\n1. Which region?\n> "));
        assert!(output.contains("\n2. Which period?\n> "));
        assert!(output.contains("   ✓ EU..."));
        assert!(output.contains("✅ Got 2 clarifications"));
    }

    #[test]
    fn test_blank_answers_are_skipped() {
        let (answers, output) = run("\n  \nretail\n", &["Q1?", "Q2?", "Q3?"]);

        assert_eq!(answers, vec!["Q3?: retail"]);
        assert!(output.contains("✅ Got 1 clarifications"));
    }

    #[test]
    fn test_end_of_input_skips_remaining() {
        let (answers, _) = run("first\n", &["Q1?", "Q2?", "Q3?"]);
        assert_eq!(answers, vec!["Q1?: first"]);
    }

    #[test]
    fn test_enrich_query_with_answers() {
        let enriched = enrich_query(
            "market trends",
            &questions(&["Which market?: EV batteries", "Which region?: EU"]),
        );
        assert_eq!(
            enriched,
            "market trends\n\nContext:\nWhich market?: EV batteries\nWhich region?: EU"
        );
    }

    #[test]
    fn test_enrich_query_without_answers_is_verbatim() {
        assert_eq!(enrich_query("market trends", &[]), "market trends");
    }

    #[test]
    fn test_k_of_n_answers_yield_k_context_lines() {
        let qs = ["A?", "B?", "C?", "D?"];
        for (input, expected) in [
            ("\n\n\n\n", 0),
            ("x\n\n\n\n", 1),
            ("\ny\n\nz\n", 2),
            ("a\nb\nc\nd\n", 4),
        ] {
            let (answers, _) = run(input, &qs);
            let enriched = enrich_query("q", &answers);
            let context_lines = enriched
                .split_once(CONTEXT_SEPARATOR)
                .map(|(_, ctx)| ctx.lines().count())
                .unwrap_or(0);
            assert_eq!(context_lines, expected, "input {:?}", input);
        }
    }

    #[test]
    fn test_answer_preview_truncates_on_char_boundary() {
        let long = "é".repeat(80);
        let preview = answer_preview(&long);
        assert_eq!(preview, format!("   ✓ {}...", "é".repeat(50)));
        assert_eq!(answer_preview("short"), "   ✓ short...");
    }
}
