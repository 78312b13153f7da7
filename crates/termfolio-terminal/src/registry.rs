//! Registry of available commands with lookup.

use std::collections::HashMap;

use crate::command::{Command, normalize};
use crate::effects::SideEffect;

/// Result of resolving input against the registry.
#[derive(Debug, Clone, Copy)]
pub enum Lookup<'a> {
    Found(&'a Command),
    /// Unknown command. Not an error: the session prints a shell-style
    /// message for it.
    NotFound,
}

impl Lookup<'_> {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found(_))
    }
}

/// The shell-style line printed for unknown input. `raw` is used verbatim.
pub fn not_found_message(raw: &str) -> String {
    format!("bash: {raw}: command not found")
}

/// Mapping from normalized command name to command.
#[derive(Debug, Clone, Default)]
pub struct CommandRegistry {
    commands: HashMap<String, Command>,
}

impl CommandRegistry {
    /// Create an empty command registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a command. Returns the command it replaced, if any.
    pub fn register(&mut self, cmd: Command) -> Option<Command> {
        let replaced = self.commands.insert(cmd.name().to_string(), cmd);
        if let Some(ref old) = replaced {
            log::debug!("command '{}' replaced", old.name());
        }
        replaced
    }

    /// Register from parts.
    pub fn register_lines<I, S>(
        &mut self,
        name: &str,
        output: I,
        effect: Option<SideEffect>,
    ) -> Option<Command>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut cmd = Command::new(name, output);
        if let Some(e) = effect {
            cmd = cmd.with_effect(e);
        }
        self.register(cmd)
    }

    /// Remove a command by (normalized) name.
    pub fn unregister(&mut self, name: &str) -> Option<Command> {
        self.commands.remove(&normalize(name))
    }

    /// Resolve raw user input. Exact match on the normalized string: no
    /// prefix or fuzzy matching.
    pub fn lookup(&self, raw: &str) -> Lookup<'_> {
        match self.commands.get(&normalize(raw)) {
            Some(cmd) => Lookup::Found(cmd),
            None => Lookup::NotFound,
        }
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.get(&normalize(name))
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(&normalize(name))
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Return a sorted list of (name, description) pairs.
    pub fn list_commands(&self) -> Vec<(&str, &str)> {
        let mut cmds: Vec<(&str, &str)> = self
            .commands
            .values()
            .map(|c| (c.name(), c.description()))
            .collect();
        cmds.sort_by_key(|(name, _)| *name);
        cmds
    }

    /// Sorted command names starting with the normalized `partial`.
    pub fn completions(&self, partial: &str) -> Vec<String> {
        let lower = partial.trim_start().to_lowercase();
        let mut names: Vec<String> = self
            .commands
            .keys()
            .filter(|name| name.starts_with(&lower))
            .cloned()
            .collect();
        names.sort();
        names
    }
}
