//! A named command: fixed output lines plus an optional side effect.

use crate::effects::SideEffect;

/// Normalize user input for lookup: trim surrounding whitespace and
/// lower-case. The whole result is the key; there is no argument parsing.
pub fn normalize(input: &str) -> String {
    input.trim().to_lowercase()
}

/// A named, invocable unit of the interpreter.
#[derive(Debug, Clone)]
pub struct Command {
    name: String,
    description: String,
    output: Vec<String>,
    effect: Option<SideEffect>,
}

impl Command {
    /// Create a command. The name is normalized, so `"Cat Skills.txt"`
    /// registers as `"cat skills.txt"`.
    pub fn new<I, S>(name: &str, output: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: normalize(name),
            description: String::new(),
            output: output.into_iter().map(Into::into).collect(),
            effect: None,
        }
    }

    /// One-line description for help listings.
    pub fn with_description(mut self, description: &str) -> Self {
        self.description = description.to_string();
        self
    }

    pub fn with_effect(mut self, effect: SideEffect) -> Self {
        self.effect = Some(effect);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Lines revealed, in order, when the command runs.
    pub fn output_lines(&self) -> &[String] {
        &self.output
    }

    pub fn side_effect(&self) -> Option<&SideEffect> {
        self.effect.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("  WhoAmI \t"), "whoami");
        assert_eq!(normalize("Cat Skills.TXT"), "cat skills.txt");
    }

    #[test]
    fn normalize_keeps_inner_spaces() {
        assert_eq!(normalize(" cat  skills.txt "), "cat  skills.txt");
    }

    #[test]
    fn name_is_normalized_on_construction() {
        let cmd = Command::new(" PWD ", ["/home"]);
        assert_eq!(cmd.name(), "pwd");
    }

    #[test]
    fn builder_sets_fields() {
        let cmd = Command::new("clear", Vec::<String>::new())
            .with_description("Clear the terminal")
            .with_effect(SideEffect::Clear);
        assert_eq!(cmd.description(), "Clear the terminal");
        assert!(cmd.output_lines().is_empty());
        assert!(matches!(cmd.side_effect(), Some(SideEffect::Clear)));
    }
}
