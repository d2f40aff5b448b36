//! Command implementations for the Wordscan CLI.

use crate::analysis::tokenizer::{SpaceTokenizer, Tokenizer};
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::Result;
use crate::grades::{self, Student};
use crate::numeric::{evens_iter, evens_loop, to_fahrenheit};

/// Execute a CLI command.
pub fn execute_command(args: WordscanArgs) -> Result<()> {
    match &args.command {
        Command::Tokenize(tokenize_args) => tokenize_text(tokenize_args.clone(), &args),
        Command::Evens(evens_args) => select_evens(evens_args.clone(), &args),
        Command::Temps(temps_args) => convert_temps(temps_args.clone(), &args),
        Command::Grades(grades_args) => summarize_grades(grades_args.clone(), &args),
    }
}

/// Tokenize text and report the words and the word count.
fn tokenize_text(args: TokenizeArgs, cli_args: &WordscanArgs) -> Result<()> {
    if cli_args.verbosity() > 1 {
        println!("Tokenizing: {:?}", args.text);
    }

    let tokenizer = SpaceTokenizer::new();
    let words: Vec<String> = tokenizer.tokenize(&args.text)?.map(|t| t.text).collect();
    let word_count = words.len();

    output_result(
        "Tokenization complete",
        &TokenizeReport {
            text: args.text,
            words,
            word_count,
        },
        cli_args,
    )
}

/// Select the even numbers from the input list.
fn select_evens(args: EvensArgs, cli_args: &WordscanArgs) -> Result<()> {
    let evens = match args.method {
        EvensMethod::Loop => evens_loop(&args.numbers),
        EvensMethod::Filter => evens_iter(&args.numbers),
    };

    output_result(
        "Even numbers selected",
        &EvensReport {
            input: args.numbers,
            method: args.method,
            evens,
        },
        cli_args,
    )
}

/// Convert the input temperatures to Fahrenheit.
fn convert_temps(args: TempsArgs, cli_args: &WordscanArgs) -> Result<()> {
    let fahrenheit = to_fahrenheit(&args.celsius);

    output_result(
        "Temperatures converted",
        &TempsReport {
            celsius: args.celsius,
            fahrenheit,
        },
        cli_args,
    )
}

/// Summarize a student grade record.
fn summarize_grades(args: GradesArgs, cli_args: &WordscanArgs) -> Result<()> {
    let student = match &args.student {
        Some(json) => serde_json::from_str::<Student>(json)?,
        None => Student::sample(),
    };

    if cli_args.verbosity() > 1 {
        println!("Summarizing grades for: {}", student.name);
    }

    let summary = grades::summarize(&student)?;

    output_result("Grade summary computed", &summary, cli_args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(argv: &[&str]) -> WordscanArgs {
        use clap::Parser;
        WordscanArgs::parse_from(argv)
    }

    #[test]
    fn test_execute_tokenize() {
        let args = parse(&["wordscan", "--quiet", "tokenize", "hola mundo"]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_evens_both_methods() {
        for method in ["loop", "filter"] {
            let args = parse(&["wordscan", "--quiet", "evens", "--method", method]);
            assert!(execute_command(args).is_ok());
        }
    }

    #[test]
    fn test_execute_temps_json_format() {
        let args = parse(&["wordscan", "--quiet", "--format", "json", "temps"]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_grades_with_inline_record() {
        let record = r#"{"name":"Ada","grades":[{"name":"math","grade":95.0}]}"#;
        let args = parse(&["wordscan", "--quiet", "grades", "--student", record]);
        assert!(execute_command(args).is_ok());
    }

    #[test]
    fn test_execute_grades_rejects_invalid_json() {
        let args = parse(&["wordscan", "--quiet", "grades", "--student", "not json"]);
        assert!(execute_command(args).is_err());
    }

    #[test]
    fn test_execute_grades_rejects_empty_record() {
        let record = r#"{"name":"Ada","grades":[]}"#;
        let args = parse(&["wordscan", "--quiet", "grades", "--student", record]);
        assert!(execute_command(args).is_err());
    }
}
