use anyhow::Context;
use clap::ValueEnum;
use serde::Serialize;
use std::{fmt::Display, io::Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain lines, as a person would read them.
    #[default]
    Text,
    /// The outcome as pretty-printed JSON.
    Json,
}

/// Write one command outcome to `out` in the requested format.
pub fn emit<W, T>(out: &mut W, format: OutputFormat, value: &T) -> anyhow::Result<()>
where
    W: Write + ?Sized,
    T: Display + Serialize + ?Sized,
{
    match format {
        OutputFormat::Text => writeln!(out, "{value}").context("Failed to write output")?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, value)
                .context("Failed to serialize output as JSON")?;
            writeln!(out).context("Failed to write output")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use toolkit_core::TodoOutcome;

    #[test]
    fn text_is_display_plus_newline() {
        let mut out = Vec::new();
        let outcome = TodoOutcome::Listed { items: vec!["a".into(), "b".into()] };

        emit(&mut out, OutputFormat::Text, &outcome).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "To-Do List:\n- a\n- b\n");
    }

    #[test]
    fn json_is_serialized_outcome() {
        let mut out = Vec::new();
        let outcome = TodoOutcome::Added { item: "a".into() };

        emit(&mut out, OutputFormat::Json, &outcome).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value, serde_json::json!({ "outcome": "added", "item": "a" }));
    }
}
