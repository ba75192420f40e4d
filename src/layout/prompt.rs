//! Interactive collection of layout parameters.

use std::io::{self, BufRead, Write};

use super::{
    LayoutInput, LayoutParams, DEFAULT_FONT_SIZE, DEFAULT_INSIDE_GUTTER, DEFAULT_TRIM_HEIGHT,
    DEFAULT_TRIM_WIDTH,
};
use crate::error::{Error, Result};

/// Asks for each missing layout value in turn.
///
/// Questions come in a fixed order: width, height, bleed, gutter, margin,
/// font size. An empty answer, or end of input, keeps the default.
pub struct LayoutPrompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> LayoutPrompter<R, W> {
    /// Create a prompter reading answers from `input` and writing questions to `output`.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Ask for every value not already set in `preset`, then resolve.
    pub fn collect(&mut self, preset: &LayoutInput) -> Result<LayoutParams> {
        let mut answers = *preset;

        if answers.trim_width.is_none() {
            answers.trim_width = self.ask_number(
                &format!("Trim Size Width in inches (default: {}): ", DEFAULT_TRIM_WIDTH),
                "trim width",
            )?;
        }
        if answers.trim_height.is_none() {
            answers.trim_height = self.ask_number(
                &format!("Trim Size Height in inches (default: {}): ", DEFAULT_TRIM_HEIGHT),
                "trim height",
            )?;
        }
        if answers.bleed.is_none() {
            let answer = self.ask("Enable Bleed (default: False)? (True/False): ")?;
            answers.bleed = Some(parse_bleed(&answer));
        }
        if answers.inside_gutter.is_none() {
            answers.inside_gutter = self.ask_number(
                &format!("Inside gutter size (default: {}): ", DEFAULT_INSIDE_GUTTER),
                "inside gutter",
            )?;
        }
        if answers.outside_margin.is_none() {
            let default = LayoutParams::default_outside_margin(answers.bleed.unwrap_or(false));
            answers.outside_margin = self.ask_number(
                &format!("Outside margin size (default: {}): ", default),
                "outside margin",
            )?;
        }
        if answers.font_size.is_none() {
            answers.font_size = self.ask_number(
                &format!("Font Size (default: {}): ", DEFAULT_FONT_SIZE),
                "font size",
            )?;
        }

        answers.resolve()
    }

    fn ask(&mut self, question: &str) -> Result<String> {
        write!(self.output, "{}", question)?;
        self.output.flush()?;

        let mut line = String::new();
        self.input.read_line(&mut line)?;
        Ok(line.trim().to_string())
    }

    fn ask_number(&mut self, question: &str, field: &str) -> Result<Option<f64>> {
        let answer = self.ask(question)?;
        if answer.is_empty() {
            return Ok(None);
        }
        answer
            .parse::<f64>()
            .map(Some)
            .map_err(|_| Error::InvalidLayout(format!("{}: {:?} is not a number", field, answer)))
    }
}

/// Interpret a bleed answer.
///
/// Only `true` (any case) enables bleed. Anything else disables it; answers
/// other than `false` or empty are logged since they are probably typos.
pub fn parse_bleed(answer: &str) -> bool {
    let answer = answer.trim();
    if answer.eq_ignore_ascii_case("true") {
        true
    } else {
        if !answer.is_empty() && !answer.eq_ignore_ascii_case("false") {
            log::warn!("bleed answer {:?} is not True/False; bleed disabled", answer);
        }
        false
    }
}

/// Prompt on the terminal for missing layout values.
pub fn prompt_stdin(preset: &LayoutInput) -> Result<LayoutParams> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    LayoutPrompter::new(stdin.lock(), stdout.lock()).collect(preset)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(answers: &str, preset: &LayoutInput) -> (Result<LayoutParams>, String) {
        let mut output = Vec::new();
        let result = LayoutPrompter::new(Cursor::new(answers.to_string()), &mut output).collect(preset);
        (result, String::from_utf8(output).unwrap())
    }

    #[test]
    fn test_empty_answers_give_defaults() {
        let (result, transcript) = run("\n\n\n\n\n\n", &LayoutInput::new());
        assert_eq!(result.unwrap(), LayoutParams::default());
        assert!(transcript.starts_with("Trim Size Width in inches (default: 6): "));
        assert!(transcript.contains("Outside margin size (default: 0.25): "));
    }

    #[test]
    fn test_eof_gives_defaults() {
        let (result, _) = run("", &LayoutInput::new());
        assert_eq!(result.unwrap(), LayoutParams::default());
    }

    #[test]
    fn test_bleed_shifts_margin_default() {
        let (result, transcript) = run("\n\nTRUE\n\n\n\n", &LayoutInput::new());
        let params = result.unwrap();
        assert!(params.bleed);
        assert_eq!(params.outside_margin, 0.375);
        assert!(transcript.contains("Outside margin size (default: 0.375): "));
    }

    #[test]
    fn test_answers_are_used() {
        let (result, _) = run("5.5\n8.5\nfalse\n0.5\n0.3\n12\n", &LayoutInput::new());
        let params = result.unwrap();
        assert_eq!(params.trim_width, 5.5);
        assert_eq!(params.trim_height, 8.5);
        assert_eq!(params.inside_gutter, 0.5);
        assert_eq!(params.outside_margin, 0.3);
        assert_eq!(params.font_size, 12.0);
    }

    #[test]
    fn test_preset_values_are_not_asked() {
        let preset = LayoutInput::new().with_trim_width(5.0).with_bleed(true);
        let (result, transcript) = run("\n\n\n\n", &preset);

        assert_eq!(result.unwrap().trim_width, 5.0);
        assert!(!transcript.contains("Trim Size Width"));
        assert!(!transcript.contains("Enable Bleed"));
        assert!(transcript.contains("Trim Size Height"));
    }

    #[test]
    fn test_non_numeric_answer_fails() {
        let (result, _) = run("six\n", &LayoutInput::new());
        assert!(matches!(result, Err(Error::InvalidLayout(_))));
    }

    #[test]
    fn test_parse_bleed() {
        assert!(parse_bleed("True"));
        assert!(parse_bleed(" true "));
        assert!(!parse_bleed("False"));
        assert!(!parse_bleed(""));
        assert!(!parse_bleed("yes"));
    }
}
