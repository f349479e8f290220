use crate::dependency_analysis::domain::UsageMode;
use crate::shared::error::AnalyzerError;
use crate::shared::Result;
use std::io::{BufRead, Write};

/// Asks which usage report to produce
///
/// Accepts the option number or a mode name (`used`, `unused`, `both`).
///
/// # Errors
/// `AnalyzerError::NoOptionSelected` for an empty or unrecognised answer
pub fn prompt_usage_mode<R: BufRead, W: Write>(mut input: R, mut output: W) -> Result<UsageMode> {
    writeln!(output, "Select the type of dependencies to find:")?;
    for (index, mode) in UsageMode::ALL.iter().enumerate() {
        writeln!(output, "  {}) {}", index + 1, mode.label())?;
    }
    write!(output, "> ")?;
    output.flush()?;

    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();

    if let Ok(number) = answer.parse::<usize>() {
        return number
            .checked_sub(1)
            .and_then(|index| UsageMode::ALL.get(index).copied())
            .ok_or_else(|| AnalyzerError::NoOptionSelected.into());
    }

    if answer.is_empty() {
        return Err(AnalyzerError::NoOptionSelected.into());
    }

    answer
        .parse::<UsageMode>()
        .map_err(|_| AnalyzerError::NoOptionSelected.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn answer(text: &str) -> Result<UsageMode> {
        prompt_usage_mode(Cursor::new(text.to_string()), Vec::new())
    }

    #[test]
    fn test_prompt_lists_options() {
        let mut output = Vec::new();
        prompt_usage_mode(Cursor::new("1\n"), &mut output).unwrap();
        let shown = String::from_utf8(output).unwrap();
        assert!(shown.contains("1) Find Used Dependencies"));
        assert!(shown.contains("2) Find Unused Dependencies"));
        assert!(shown.contains("3) Find Both"));
    }

    #[test]
    fn test_prompt_accepts_number_or_name() {
        assert_eq!(answer("1\n").unwrap(), UsageMode::Used);
        assert_eq!(answer("3\n").unwrap(), UsageMode::Both);
        assert_eq!(answer("unused\n").unwrap(), UsageMode::Unused);
    }

    #[test]
    fn test_prompt_rejects_empty_or_invalid_answer() {
        for text in ["", "\n", "0\n", "4\n", "maybe\n"] {
            let err = answer(text).unwrap_err();
            assert_eq!(err.to_string(), "No option selected.");
        }
    }
}
