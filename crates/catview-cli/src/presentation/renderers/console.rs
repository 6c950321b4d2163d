use anyhow::Result;
use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use serde::Serialize;
use std::fmt::Display;
use std::io::{self, Write};

use super::traits::Renderer;
use crate::presentation::view_models::{CommandOutput, StatusBadge, StatusLevel};

pub struct ConsoleRenderer {
    json_mode: bool,
    color: bool,
}

impl ConsoleRenderer {
    pub fn new(json_mode: bool) -> Self {
        Self {
            json_mode,
            color: io::stdout().is_terminal(),
        }
    }

    /// Render into any writer; used by `render` with stdout.
    pub fn write_to<T, W>(&self, out: &mut W, result: &CommandOutput<T>) -> Result<()>
    where
        T: Serialize + Display,
        W: Write,
    {
        if self.json_mode {
            writeln!(out, "{}", serde_json::to_string_pretty(result)?)?;
            return Ok(());
        }

        if let Some(badge) = &result.badge {
            writeln!(out, "{} {}", badge.level.icon(), self.paint_badge(badge))?;
            writeln!(out)?;
        }

        write!(out, "{}", result.content)?;

        if !result.suggestions.is_empty() {
            let heading = "Try:";
            if self.color {
                writeln!(out, "\n{}", heading.yellow().bold())?;
            } else {
                writeln!(out, "\n{}", heading)?;
            }
            let width = result
                .suggestions
                .iter()
                .map(|s| s.command.chars().count())
                .max()
                .unwrap_or(0);
            for suggestion in &result.suggestions {
                let command = format!("{:<width$}", suggestion.command);
                if self.color {
                    writeln!(out, "  {}  {}", command.cyan(), suggestion.description)?;
                } else {
                    writeln!(out, "  {}  {}", command, suggestion.description)?;
                }
            }
        }

        Ok(())
    }

    fn paint_badge(&self, badge: &StatusBadge) -> String {
        if !self.color {
            return badge.label.clone();
        }
        match badge.level {
            StatusLevel::Success => badge.label.green().bold().to_string(),
            StatusLevel::Info => badge.label.cyan().bold().to_string(),
            StatusLevel::Warning => badge.label.yellow().bold().to_string(),
            StatusLevel::Error => badge.label.red().bold().to_string(),
        }
    }
}

impl Renderer for ConsoleRenderer {
    fn render<T>(&self, result: CommandOutput<T>) -> Result<()>
    where
        T: Serialize + Display,
    {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        self.write_to(&mut out, &result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presentation::view_models::Suggestion;

    #[derive(Serialize)]
    struct Greeting {
        text: String,
    }

    impl Display for Greeting {
        fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
            writeln!(f, "{}", self.text)
        }
    }

    fn result() -> CommandOutput<Greeting> {
        CommandOutput::new(Greeting {
            text: "hola".to_string(),
        })
        .with_badge(StatusBadge::new(StatusLevel::Success, "Loaded"))
        .with_suggestions([
            Suggestion::new("List the available categories", "catview categories"),
            Suggestion::new("Search every category", "catview list --query \"pan\""),
        ])
    }

    fn render(renderer: &ConsoleRenderer) -> String {
        let mut out = Vec::new();
        renderer.write_to(&mut out, &result()).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_plain_output() {
        let renderer = ConsoleRenderer {
            json_mode: false,
            color: false,
        };
        insta::assert_snapshot!(render(&renderer), @r#"
        ✅ Loaded

        hola

        Try:
          catview categories          List the available categories
          catview list --query "pan"  Search every category
        "#);
    }

    #[test]
    fn test_json_output() {
        let renderer = ConsoleRenderer {
            json_mode: true,
            color: false,
        };
        let json: serde_json::Value = serde_json::from_str(&render(&renderer)).unwrap();
        assert_eq!(json["badge"]["level"], "success");
        assert_eq!(json["content"]["text"], "hola");
        assert_eq!(json["suggestions"][0]["command"], "catview categories");
    }
}
