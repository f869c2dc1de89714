//! Line-driven form session: set fields, calculate, reset.

use anyhow::Result;
use std::io::{BufRead, Write};

use speed_threshold_core::SpeedRules;

use crate::form::{FormState, result_message};
use crate::report::ERROR_TITLE;

const HELP: &str = "\
Commands:
  mode <name>          set the mode (Forgotten Hall, Anomaly Arbitration)
  turns <n>            set total turns
  actions <n>          set target actions
  triggers <n>         set recurring trigger count
  bonus on|off         toggle the one-time bonus
  custom <slot> <v>    set a custom advance (slot starts at 1)
  show                 print the current form
  calc                 calculate the required speed
  reset                restore defaults
  quit                 leave";

enum Command<'a> {
    Set(&'a str, &'a str),
    Custom(&'a str, &'a str),
    Show,
    Calc,
    Reset,
    Help,
    Quit,
    Unknown(&'a str),
}

fn parse_command(line: &str) -> Command<'_> {
    let (head, rest) = line
        .split_once(|c: char| c.is_whitespace() || c == '=')
        .map_or((line, ""), |(h, r)| (h, r.trim()));
    match head {
        "mode" | "turns" | "actions" | "triggers" | "wind" | "bonus" | "vonwacq" => {
            Command::Set(head, rest)
        }
        "custom" => {
            let (slot, value) = rest
                .split_once(|c: char| c.is_whitespace() || c == '=')
                .map_or((rest, ""), |(s, v)| (s, v.trim()));
            Command::Custom(slot, value)
        }
        "show" => Command::Show,
        "calc" | "calculate" => Command::Calc,
        "reset" => Command::Reset,
        "help" | "?" => Command::Help,
        "quit" | "exit" => Command::Quit,
        other => Command::Unknown(other),
    }
}

pub struct Session<'r> {
    form: FormState,
    rules: &'r SpeedRules,
}

impl<'r> Session<'r> {
    pub fn new(form: FormState, rules: &'r SpeedRules) -> Self {
        Self { form, rules }
    }

    /// Read commands until `quit` or end of input.
    pub fn run(&mut self, input: impl BufRead, out: &mut dyn Write) -> Result<()> {
        writeln!(out, "{HELP}")?;
        for line in input.lines() {
            let line = line?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            if !self.handle(line, out)? {
                break;
            }
        }
        out.flush()?;
        Ok(())
    }

    fn handle(&mut self, line: &str, out: &mut dyn Write) -> Result<bool> {
        match parse_command(line) {
            Command::Set(field, value) => self.set_field(field, value, out)?,
            Command::Custom(slot, value) => self.set_custom(slot, value, out)?,
            Command::Show => self.show(out)?,
            Command::Calc => match self.form.submit(self.rules) {
                Ok(breakdown) => writeln!(out, "{}", result_message(breakdown.threshold))?,
                Err(err) => writeln!(out, "{ERROR_TITLE}: {err}")?,
            },
            Command::Reset => {
                self.form.reset();
                writeln!(out, "Form reset.")?;
            }
            Command::Help => writeln!(out, "{HELP}")?,
            Command::Quit => return Ok(false),
            Command::Unknown(cmd) => writeln!(out, "Unknown command {cmd:?}; type help")?,
        }
        Ok(true)
    }

    fn set_field(&mut self, field: &str, value: &str, out: &mut dyn Write) -> Result<()> {
        match field {
            "mode" => value.clone_into(&mut self.form.mode),
            "turns" => value.clone_into(&mut self.form.turns),
            "actions" => value.clone_into(&mut self.form.actions),
            "triggers" | "wind" => value.clone_into(&mut self.form.triggers),
            _ => match value {
                "on" | "true" | "yes" | "1" => self.form.bonus = true,
                "off" | "false" | "no" | "0" => self.form.bonus = false,
                _ => {
                    writeln!(out, "bonus expects on or off (got {value:?})")?;
                    return Ok(());
                }
            },
        }
        Ok(())
    }

    fn set_custom(&mut self, slot: &str, value: &str, out: &mut dyn Write) -> Result<()> {
        let count = self.form.custom.len();
        let target = slot
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|idx| self.form.custom.get_mut(idx));
        match target {
            Some(entry) => value.clone_into(entry),
            None => writeln!(out, "custom slot must be between 1 and {count} (got {slot:?})")?,
        }
        Ok(())
    }

    fn show(&self, out: &mut dyn Write) -> Result<()> {
        let form = &self.form;
        writeln!(out, "mode: {}", form.mode)?;
        writeln!(out, "turns: {}", form.turns)?;
        writeln!(out, "actions: {}", form.actions)?;
        writeln!(out, "triggers: {}", form.triggers)?;
        writeln!(out, "bonus: {}", if form.bonus { "on" } else { "off" })?;
        for (idx, value) in form.custom.iter().enumerate() {
            writeln!(out, "custom {}: {value}", idx + 1)?;
        }
        Ok(())
    }

    #[cfg(test)]
    fn form(&self) -> &FormState {
        &self.form
    }
}
