//! Output formatting for CLI commands.

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::cli::args::{EvensMethod, OutputFormat, WordscanArgs};
use crate::error::Result;

/// Result structure for tokenization.
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenizeReport {
    pub text: String,
    pub words: Vec<String>,
    pub word_count: usize,
}

/// Result structure for even-number selection.
#[derive(Debug, Serialize, Deserialize)]
pub struct EvensReport {
    pub input: Vec<i64>,
    pub method: EvensMethod,
    pub evens: Vec<i64>,
}

/// Result structure for temperature conversion.
#[derive(Debug, Serialize, Deserialize)]
pub struct TempsReport {
    pub celsius: Vec<f64>,
    pub fahrenheit: Vec<f64>,
}

/// Output a result in the specified format.
pub fn output_result<T: Serialize>(message: &str, result: &T, args: &WordscanArgs) -> Result<()> {
    match args.output_format {
        OutputFormat::Human => output_human(message, result, args),
        OutputFormat::Json => output_json(result, args),
    }
}

/// Output in human-readable format.
fn output_human<T: Serialize>(message: &str, result: &T, args: &WordscanArgs) -> Result<()> {
    if args.verbosity() > 0 {
        println!("{message}");
        println!();
    }

    // Convert to JSON value for easier manipulation
    let value = serde_json::to_value(result)?;

    match result {
        _ if std::any::type_name::<T>().contains("TokenizeReport") => {
            output_tokenize_human(&value)
        }
        _ if std::any::type_name::<T>().contains("EvensReport") => output_evens_human(&value),
        _ if std::any::type_name::<T>().contains("TempsReport") => output_temps_human(&value),
        _ if std::any::type_name::<T>().contains("GradeSummary") => output_grades_human(&value),
        _ => {
            println!("{}", serde_json::to_string_pretty(&value)?);
            Ok(())
        }
    }
}

/// Output in JSON format.
fn output_json<T: Serialize>(result: &T, args: &WordscanArgs) -> Result<()> {
    let json = if args.pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };
    println!("{json}");
    Ok(())
}

fn output_tokenize_human(value: &Value) -> Result<()> {
    println!("Text: {}", value["text"].as_str().unwrap_or_default());
    println!("Words: {}", join_array(&value["words"]));
    println!("Word count: {}", value["word_count"]);
    Ok(())
}

fn output_evens_human(value: &Value) -> Result<()> {
    println!("Input: {}", join_array(&value["input"]));
    println!(
        "Evens ({}): {}",
        value["method"].as_str().unwrap_or_default(),
        join_array(&value["evens"])
    );
    Ok(())
}

fn output_temps_human(value: &Value) -> Result<()> {
    println!("Celsius: {}", join_array(&value["celsius"]));
    println!("Fahrenheit: {}", join_array(&value["fahrenheit"]));
    Ok(())
}

fn output_grades_human(value: &Value) -> Result<()> {
    println!("Student: {}", value["name"].as_str().unwrap_or_default());
    println!("Grade average: {}", value["grade_avg"]);
    println!(
        "Highest grade: {}",
        value["highest_grade"].as_str().unwrap_or_default()
    );
    println!(
        "Lowest grade: {}",
        value["lowest_grade"].as_str().unwrap_or_default()
    );
    Ok(())
}

/// Render a JSON array as a comma-separated list.
fn join_array(value: &Value) -> String {
    match value.as_array() {
        Some(items) => items
            .iter()
            .map(|item| match item {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(", "),
        None => String::new(),
    }
}
