//! Sequential console entry for the manual front-end.
//!
//! Prompts for a measurement count, then each x value, then each y value.
//! Unparseable entries re-prompt instead of aborting; only a closed stdin
//! ends the session early.

use std::io::{self, Write};

use crate::error::AppError;

/// Prompt for a count and two value columns of exactly that length.
pub fn prompt_for_measurements() -> Result<(usize, Vec<f64>, Vec<f64>), AppError> {
    let count = prompt_count()?;
    let x = prompt_values("x", count)?;
    let y = prompt_values("y", count)?;
    Ok((count, x, y))
}

fn prompt_count() -> Result<usize, AppError> {
    loop {
        let input = read_prompt("Enter number of measurements: ")?;
        match input.parse::<usize>() {
            Ok(n) if n >= 2 => return Ok(n),
            Ok(n) => println!("Need at least 2 measurements (got {n})."),
            Err(_) => println!("Enter a whole number."),
        }
    }
}

fn prompt_values(name: &str, count: usize) -> Result<Vec<f64>, AppError> {
    println!("Enter {name} values:");
    let mut values = Vec::with_capacity(count);
    for i in 1..=count {
        loop {
            let input = read_prompt(&format!("{name}[{i}]: "))?;
            match input.parse::<f64>() {
                Ok(v) if v.is_finite() => {
                    values.push(v);
                    break;
                }
                _ => println!("Enter a finite number."),
            }
        }
    }
    Ok(values)
}

fn read_prompt(prompt: &str) -> Result<String, AppError> {
    print!("{prompt}");
    io::stdout()
        .flush()
        .map_err(|e| AppError::Io(format!("Failed to write prompt: {e}")))?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| AppError::Io(format!("Failed to read input: {e}")))?;

    if bytes == 0 {
        return Err(AppError::Io("No input received.".to_string()));
    }

    Ok(input.trim().to_string())
}
