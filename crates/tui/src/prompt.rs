//! Line prompts on top of rustyline. Invalid answers reprompt; Ctrl+C clears
//! the line and asks again; Ctrl+D returns `None` so menus can unwind.

use crate::color;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

pub struct Prompt {
    rl: DefaultEditor,
}

impl Prompt {
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self { rl: DefaultEditor::new()? })
    }

    /// Raw line, `default` when left blank. `None` on Ctrl+D.
    pub fn ask(&mut self, question: &str, default: Option<&str>) -> Option<String> {
        let label = match default {
            Some(d) if !d.is_empty() => format!("{}{}{} [{}]: ", color::GREEN, question, color::RESET, d),
            _ => format!("{}{}{}: ", color::GREEN, question, color::RESET),
        };

        loop {
            match self.rl.readline(&label) {
                Ok(line) => {
                    let line = line.trim().to_string();
                    if line.is_empty() {
                        if let Some(d) = default {
                            return Some(d.to_string());
                        }
                    } else {
                        let _ = self.rl.add_history_entry(&line);
                    }
                    return Some(line);
                }
                Err(ReadlineError::Interrupted) => {
                    println!("{}^C{}", color::DIM, color::RESET);
                    continue;
                }
                Err(ReadlineError::Eof) => return None,
                Err(err) => {
                    eprintln!("{}Error: {}{}", color::YELLOW, err, color::RESET);
                    return None;
                }
            }
        }
    }

    /// Keeps asking until a non-blank answer comes back.
    pub fn ask_required(&mut self, question: &str) -> Option<String> {
        loop {
            let answer = self.ask(question, None)?;
            if !answer.is_empty() {
                return Some(answer);
            }
            warn_user("A value is required.");
        }
    }

    pub fn choose(&mut self, question: &str, choices: &[&str], default: &str) -> Option<String> {
        loop {
            let answer = self.ask(question, Some(default))?;
            match parse_choice(&answer, choices) {
                Some(choice) => return Some(choice),
                None => warn_user(&format!("Invalid choice. Pick one of: {}", choices.join(", "))),
            }
        }
    }

    pub fn confirm(&mut self, question: &str, default: bool) -> Option<bool> {
        let default_str = if default { "y" } else { "n" };
        loop {
            let answer = self.ask(&format!("{} (y/n)", question), Some(default_str))?;
            match parse_yes_no(&answer) {
                Some(yes) => return Some(yes),
                None => warn_user("Please answer y or n."),
            }
        }
    }

    /// 0-based index into a list of `count` items shown to the user 1-based.
    pub fn pick_index(&mut self, question: &str, count: usize) -> Option<usize> {
        loop {
            let answer = self.ask(question, Some("1"))?;
            match parse_index(&answer, count) {
                Ok(idx) => return Some(idx),
                Err(msg) => warn_user(&msg),
            }
        }
    }

    pub fn pick_many(&mut self, question: &str, count: usize) -> Option<Vec<usize>> {
        loop {
            let answer = self.ask(question, None)?;
            match parse_indices(&answer, count) {
                Ok(indices) => return Some(indices),
                Err(msg) => warn_user(&msg),
            }
        }
    }
}

pub fn warn_user(msg: &str) {
    println!("{}{}{}", color::RED, msg, color::RESET);
}

pub fn parse_choice(answer: &str, choices: &[&str]) -> Option<String> {
    let answer = answer.trim();
    choices.iter().find(|c| **c == answer).map(|c| c.to_string())
}

pub fn parse_yes_no(answer: &str) -> Option<bool> {
    match answer.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

pub fn parse_index(answer: &str, count: usize) -> Result<usize, String> {
    let n: usize = answer
        .trim()
        .parse()
        .map_err(|_| "Please enter a valid number.".to_string())?;
    if (1..=count).contains(&n) {
        Ok(n - 1)
    } else {
        Err(format!("Invalid selection. Choose a number between 1 and {}.", count))
    }
}

/// Comma-separated 1-based numbers, e.g. "1,3,5".
pub fn parse_indices(answer: &str, count: usize) -> Result<Vec<usize>, String> {
    let parts: Vec<&str> = answer.split(',').map(str::trim).filter(|s| !s.is_empty()).collect();
    if parts.is_empty() {
        return Err("Please enter valid numbers separated by commas.".to_string());
    }

    let mut indices = Vec::with_capacity(parts.len());
    for part in parts {
        let n: usize = part
            .parse()
            .map_err(|_| "Please enter valid numbers separated by commas.".to_string())?;
        if !(1..=count).contains(&n) {
            return Err("One or more numbers are out of range. Please try again.".to_string());
        }
        indices.push(n - 1);
    }
    Ok(indices)
}
