use crate::app::report::{render, OutputFormat};
use crate::core::form::RecipeForm;
use crate::core::{BrewRatio, RoastLevel, Unit};
use crate::utils::error::{RecipeError, Result};
use crate::utils::validation::parse_number;
use std::io::{BufRead, Write};

const HELP: &str = "\
Commands:
  bean <grams>     set the coffee bean weight (minimum 1)
  roast <level>    Light, Medium, Medium-Dark, Dark, Italian
  ratio <r>        1.5, 2 or 2.5
  unit <u>         ml or g
  format <f>       text, json or csv
  show             print the current recipe
  help             print this help
  quit             leave the calculator
";

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    BeanWeight(f64),
    Roast(RoastLevel),
    Ratio(BrewRatio),
    Unit(Unit),
    Format(OutputFormat),
    Show,
    Help,
    Quit,
}

impl Command {
    /// `Ok(None)` for blank lines.
    pub fn parse(line: &str) -> Result<Option<Self>> {
        let mut parts = line.split_whitespace();
        let Some(keyword) = parts.next() else {
            return Ok(None);
        };
        let argument = parts.collect::<Vec<_>>().join(" ");

        let command = match keyword.to_ascii_lowercase().as_str() {
            "bean" | "beans" | "weight" => {
                Command::BeanWeight(parse_number("bean weight", &argument)?)
            }
            "roast" => Command::Roast(argument.parse()?),
            "ratio" => Command::Ratio(argument.parse()?),
            "unit" => Command::Unit(argument.parse()?),
            "format" => Command::Format(argument.parse()?),
            "show" => Command::Show,
            "help" | "?" => Command::Help,
            "quit" | "exit" | "q" => Command::Quit,
            other => {
                return Err(RecipeError::invalid_input(
                    "command",
                    other,
                    "Type 'help' to list the available commands",
                ))
            }
        };

        Ok(Some(command))
    }
}

/// One user editing one form. Every accepted change re-renders the report.
pub struct Session<W: Write> {
    form: RecipeForm,
    format: OutputFormat,
    output: W,
}

impl<W: Write> Session<W> {
    pub fn new(form: RecipeForm, format: OutputFormat, output: W) -> Self {
        Self {
            form,
            format,
            output,
        }
    }

    pub fn form(&self) -> &RecipeForm {
        &self.form
    }

    /// Reads commands until `quit` or end of input and hands the form back.
    pub fn run<R: BufRead>(mut self, input: R) -> Result<RecipeForm> {
        tracing::info!("Interactive session started");
        self.show()?;

        for line in input.lines() {
            let line = line?;
            match Command::parse(&line) {
                Ok(Some(command)) => {
                    if !self.handle(command)? {
                        break;
                    }
                }
                Ok(None) => {}
                Err(e) => {
                    // 輸入錯誤不結束互動，保留先前狀態
                    tracing::debug!("Rejected input '{}': {}", line, e);
                    writeln!(self.output, "❌ {}", e.user_friendly_message())?;
                    writeln!(self.output, "💡 {}", e.recovery_suggestion())?;
                }
            }
        }

        tracing::info!("Interactive session finished");
        Ok(self.form)
    }

    /// `Ok(false)` once the user asks to leave.
    fn handle(&mut self, command: Command) -> Result<bool> {
        match command {
            Command::BeanWeight(grams) => self.form.set_bean_weight(grams),
            Command::Roast(roast_level) => self.form.set_roast_level(roast_level),
            Command::Ratio(ratio) => self.form.set_ratio(ratio),
            Command::Unit(unit) => self.form.set_unit(unit),
            Command::Format(format) => self.format = format,
            Command::Show => {}
            Command::Help => {
                self.output.write_all(HELP.as_bytes())?;
                return Ok(true);
            }
            Command::Quit => return Ok(false),
        }

        self.show()?;
        Ok(true)
    }

    fn show(&mut self) -> Result<()> {
        let report = render(&self.form, self.format)?;
        self.output.write_all(report.as_bytes())?;
        self.output.flush()?;
        Ok(())
    }
}
