//! Interactive numbered menu over line-oriented input.
//!
//! Generic over the reader and writer so sessions can be driven from
//! in-memory buffers. Engine errors are printed and the loop carries on;
//! only I/O failures end the session early.

use std::io::{BufRead, Write};

use waypost_core::WaypostConfig;

use crate::error::Result;
use crate::render;
use crate::PathfindEngine;

const CLEAR_SCREEN: &str = "\x1B[2J\x1B[H";

const MENU: &str = "\
1 - add client
2 - show client
3 - remove client
4 - add path
5 - remove path
6 - show weight table
7 - shortest paths from a client
8 - list clients
0 - exit
";

/// Display switches taken from the loaded configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuOptions {
    pub clear_screen: bool,
    pub show_table_after_edit: bool,
    pub json_output: bool,
}

impl From<&WaypostConfig> for MenuOptions {
    fn from(config: &WaypostConfig) -> Self {
        Self {
            clear_screen: config.clear_screen,
            show_table_after_edit: config.show_table_after_edit,
            json_output: config.json_output,
        }
    }
}

impl Default for MenuOptions {
    fn default() -> Self {
        Self::from(&WaypostConfig::default())
    }
}

enum Flow {
    Continue,
    Exit,
}

/// A menu session owning its engine.
pub struct Menu<R, W> {
    engine: PathfindEngine,
    input: R,
    output: W,
    options: MenuOptions,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub fn new(engine: PathfindEngine, input: R, output: W, options: MenuOptions) -> Self {
        Self {
            engine,
            input,
            output,
            options,
        }
    }

    /// Run until the user picks `0` or input ends.
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "\n{MENU}")?;
            let Some(choice) = self.prompt("Choice: ")? else {
                break;
            };

            let flow = match choice.trim().parse::<u8>() {
                Ok(0) => Flow::Exit,
                Ok(1) => self.add_client()?,
                Ok(2) => self.show_client()?,
                Ok(3) => self.remove_client()?,
                Ok(4) => self.add_path()?,
                Ok(5) => self.remove_path()?,
                Ok(6) => {
                    let table = render::weight_table(self.engine.graph());
                    write!(self.output, "{table}")?;
                    Flow::Continue
                }
                Ok(7) => self.shortest_paths()?,
                Ok(8) => {
                    let list = render::client_list(self.engine.graph());
                    write!(self.output, "{list}")?;
                    Flow::Continue
                }
                _ => {
                    writeln!(self.output, "Invalid option: {}", choice.trim())?;
                    Flow::Continue
                }
            };

            match flow {
                Flow::Exit => break,
                Flow::Continue => self.pause_and_clear()?,
            }
        }
        self.output.flush()?;
        Ok(())
    }

    /// Hand the engine back once the session is over.
    pub fn into_engine(self) -> PathfindEngine {
        self.engine
    }

    // ── Operations ───────────────────────────────────────────────

    fn add_client(&mut self) -> Result<Flow> {
        let Some((name, neighborhood)) = self.prompt_identity("")? else {
            return Ok(Flow::Exit);
        };
        match self.engine.graph_mut().add_client(&name, &neighborhood) {
            Ok(slot) => writeln!(self.output, "Client created in slot {slot}.")?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn show_client(&mut self) -> Result<Flow> {
        let Some((name, neighborhood)) = self.prompt_identity("")? else {
            return Ok(Flow::Exit);
        };
        let graph = self.engine.graph();
        match graph.find_by_identity(&name, &neighborhood) {
            Some(slot) => {
                let client = graph.describe(slot)?;
                writeln!(self.output, "{}", render::client_line(slot, client))?;
                for (to, weight) in graph.neighbors(slot) {
                    if let Some(target) = graph.client(to) {
                        writeln!(self.output, "  -> {target} (weight {weight})")?;
                    }
                }
            }
            None => writeln!(self.output, "Client not found.")?,
        }
        Ok(Flow::Continue)
    }

    fn remove_client(&mut self) -> Result<Flow> {
        let Some((name, neighborhood)) = self.prompt_identity("")? else {
            return Ok(Flow::Exit);
        };
        match self
            .engine
            .graph_mut()
            .remove_client_by_identity(&name, &neighborhood)
        {
            Ok((slot, client)) => {
                writeln!(self.output, "Removed {client} from slot {slot}.")?;
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn add_path(&mut self) -> Result<Flow> {
        let Some(from) = self.prompt_identity("origin ")? else {
            return Ok(Flow::Exit);
        };
        let Some(to) = self.prompt_identity("destination ")? else {
            return Ok(Flow::Exit);
        };
        let Some(raw_weight) = self.prompt("Path weight: ")? else {
            return Ok(Flow::Exit);
        };
        let Ok(weight) = raw_weight.trim().parse::<i64>() else {
            writeln!(self.output, "Error: weight must be a whole number")?;
            return Ok(Flow::Continue);
        };
        let Some(both) = self.prompt_yes_no("Both directions? (y/n): ")? else {
            return Ok(Flow::Exit);
        };

        let outcome = self.engine.graph_mut().add_path_between(
            (from.0.as_str(), from.1.as_str()),
            (to.0.as_str(), to.1.as_str()),
            weight,
            both,
        );
        match outcome {
            Ok((a, b)) => {
                let arrow = if both { "<->" } else { "->" };
                writeln!(self.output, "Path {a} {arrow} {b} created with weight {weight}.")?;
                self.show_table_if_enabled()?;
            }
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    fn remove_path(&mut self) -> Result<Flow> {
        let Some(from) = self.prompt_identity("origin ")? else {
            return Ok(Flow::Exit);
        };
        let Some(to) = self.prompt_identity("destination ")? else {
            return Ok(Flow::Exit);
        };
        let Some(both) = self.prompt_yes_no("Both directions? (y/n): ")? else {
            return Ok(Flow::Exit);
        };

        let mut directions = vec![(&from, &to)];
        if both {
            directions.push((&to, &from));
        }

        let mut changed = false;
        for (a, b) in directions {
            let outcome = self
                .engine
                .graph_mut()
                .remove_path_between((a.0.as_str(), a.1.as_str()), (b.0.as_str(), b.1.as_str()));
            match outcome {
                Ok((x, y)) => {
                    changed = true;
                    writeln!(self.output, "Path {x} -> {y} removed.")?;
                }
                Err(e) => writeln!(self.output, "Error: {e}")?,
            }
        }
        if changed {
            self.show_table_if_enabled()?;
        }
        Ok(Flow::Continue)
    }

    fn shortest_paths(&mut self) -> Result<Flow> {
        let Some((name, neighborhood)) = self.prompt_identity("start ")? else {
            return Ok(Flow::Exit);
        };
        match self.engine.report_from(&name, &neighborhood) {
            Ok(report) if self.options.json_output => {
                let json = serde_json::to_string_pretty(&report)
                    .map_err(|e| crate::PathfindError::Serialization(e.to_string()))?;
                writeln!(self.output, "{json}")?;
            }
            Ok(report) => write!(self.output, "{}", render::report_text(&report))?,
            Err(e) => writeln!(self.output, "Error: {e}")?,
        }
        Ok(Flow::Continue)
    }

    // ── Input helpers ────────────────────────────────────────────

    /// Print `label`, read one line, strip the line ending. `None` on EOF.
    fn prompt(&mut self, label: &str) -> Result<Option<String>> {
        write!(self.output, "{label}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        let trimmed = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(Some(trimmed))
    }

    fn prompt_identity(&mut self, role: &str) -> Result<Option<(String, String)>> {
        let Some(name) = self.prompt(&format!("Enter the {role}client name: "))? else {
            return Ok(None);
        };
        let Some(neighborhood) = self.prompt(&format!("Enter the {role}client neighborhood: "))?
        else {
            return Ok(None);
        };
        Ok(Some((name, neighborhood)))
    }

    fn prompt_yes_no(&mut self, label: &str) -> Result<Option<bool>> {
        let answer = self.prompt(label)?;
        Ok(answer.map(|a| matches!(a.trim().to_lowercase().as_str(), "y" | "yes")))
    }

    fn show_table_if_enabled(&mut self) -> Result<()> {
        if self.options.show_table_after_edit {
            let table = render::weight_table(self.engine.graph());
            write!(self.output, "{table}")?;
        }
        Ok(())
    }

    fn pause_and_clear(&mut self) -> Result<()> {
        if !self.options.clear_screen {
            return Ok(());
        }
        if self.prompt("\nPress Enter to continue...")?.is_some() {
            write!(self.output, "{CLEAR_SCREEN}")?;
        }
        Ok(())
    }
}
