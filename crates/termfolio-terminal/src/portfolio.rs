//! The hero terminal's command table.

use termfolio_types::config::{CommandDef, ResumeConfig, TerminalConfig};

use crate::command::{Command, normalize};
use crate::effects::{Download, SideEffect};
use crate::registry::CommandRegistry;

/// Commands listed by `help`, in the order they are shown.
const HELP_ORDER: [&str; 6] = ["whoami", "pwd", "cat skills.txt", "resume", "clear", "connect"];

/// Register whoami, pwd, cat skills.txt, resume, clear and connect.
///
/// `help` is not included; [`build_hero_registry`] adds it once every other
/// command is known.
pub fn register_portfolio_commands(reg: &mut CommandRegistry, resume: &ResumeConfig) {
    reg.register(
        Command::new(
            "whoami",
            [
                "Ramish Bin Siddique",
                "Full-Stack Developer | Passionate about building scalable web solutions",
            ],
        )
        .with_description("Display my identity"),
    );
    reg.register(
        Command::new(
            "pwd",
            [
                "/home/ramish/portfolio",
                "Crafting innovative digital experiences",
            ],
        )
        .with_description("Show current project context"),
    );
    reg.register(
        Command::new(
            "cat skills.txt",
            [
                "Tech Stack:",
                "React.js, Node.js, MongoDB, Express.js, Tailwind CSS, Next.js, Three.js",
            ],
        )
        .with_description("List my tech stack"),
    );
    reg.register(
        Command::new("resume", ["Initiating resume download..."])
            .with_description("Download my resume")
            .with_effect(SideEffect::Download(Download::from(resume))),
    );
    reg.register(
        Command::new("clear", Vec::<String>::new())
            .with_description("Clear the terminal")
            .with_effect(SideEffect::Clear),
    );
    reg.register(
        Command::new(
            "connect",
            [
                "Connect with me:",
                "GitHub: https://github.com/ramishbinsiddique15",
                "LinkedIn: https://www.linkedin.com/in/ramish15/",
                "Twitter: https://twitter.com/ramishbinsiddique",
            ],
        )
        .with_description("Show social links"),
    );
}

/// `help` output: a header, then `"<name> - <description>"` for each of
/// `names` that is registered.
pub fn help_lines(reg: &CommandRegistry, names: &[&str]) -> Vec<String> {
    let mut lines = vec!["Available commands:".to_string()];
    lines.extend(
        names
            .iter()
            .filter_map(|n| reg.get(n))
            .map(|c| format!("{} - {}", c.name(), c.description())),
    );
    lines
}

/// Register commands declared in the config file. They may override the
/// built-in ones.
fn register_custom_commands(reg: &mut CommandRegistry, defs: &[CommandDef]) {
    for def in defs {
        if normalize(&def.name) == "help" {
            log::warn!("config command 'help' ignored, the listing is generated");
            continue;
        }
        let cmd = Command::new(&def.name, def.output.iter().cloned())
            .with_description(&def.description);
        if reg.register(cmd).is_some() {
            log::info!("config overrides built-in command '{}'", def.name.trim());
        }
    }
}

/// The full hero table: built-ins, config extras, and `help` listing both.
pub fn build_hero_registry(config: &TerminalConfig) -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    register_portfolio_commands(&mut reg, &config.resume);
    register_custom_commands(&mut reg, &config.commands);

    let mut custom: Vec<String> = Vec::new();
    for name in config.commands.iter().map(|d| normalize(&d.name)) {
        if name != "help" && !HELP_ORDER.contains(&name.as_str()) && !custom.contains(&name) {
            custom.push(name);
        }
    }
    let mut names: Vec<&str> = HELP_ORDER.to_vec();
    names.extend(custom.iter().map(String::as_str));

    let help = help_lines(&reg, &names);
    reg.register(Command::new("help", help).with_description("List available commands"));
    log::debug!("hero registry has {} commands", reg.len());
    reg
}
