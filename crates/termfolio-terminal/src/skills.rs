//! The skills terminal: one command per skill category.

use crate::command::Command;
use crate::effects::SideEffect;
use crate::portfolio::help_lines;
use crate::registry::CommandRegistry;

/// A titled group of skills and the command that lists it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SkillCategory {
    pub title: &'static str,
    pub command: &'static str,
    pub skills: &'static [&'static str],
}

pub const SKILL_CATEGORIES: [SkillCategory; 5] = [
    SkillCategory {
        title: "Languages",
        command: "ls languages/",
        skills: &["HTML5", "CSS3", "JavaScript"],
    },
    SkillCategory {
        title: "Frameworks",
        command: "cat frameworks.txt",
        skills: &["React.js", "Node.js", "Express.js", "Next.js", "Bootstrap"],
    },
    SkillCategory {
        title: "Tools",
        command: "which tools",
        skills: &["Git", "GitHub", "Postman", "Vite", "Canva"],
    },
    SkillCategory {
        title: "Databases",
        command: "show databases",
        skills: &["MongoDB", "Firebase"],
    },
    SkillCategory {
        title: "Other",
        command: "grep -r 'other'",
        skills: &["Tailwind CSS", "Three.js"],
    },
];

/// Register one command per category. Each prints the category's skills.
pub fn register_skill_commands(reg: &mut CommandRegistry) {
    for cat in &SKILL_CATEGORIES {
        reg.register(
            Command::new(cat.command, cat.skills.iter().copied()).with_description(cat.title),
        );
    }
}

/// Category commands plus `clear` and a `help` listing them.
pub fn build_skills_registry() -> CommandRegistry {
    let mut reg = CommandRegistry::new();
    register_skill_commands(&mut reg);
    reg.register(
        Command::new("clear", Vec::<String>::new())
            .with_description("Clear the terminal")
            .with_effect(SideEffect::Clear),
    );
    let mut names: Vec<&str> = SKILL_CATEGORIES.iter().map(|c| c.command).collect();
    names.push("clear");
    let help = help_lines(&reg, &names);
    reg.register(Command::new("help", help).with_description("List available commands"));
    reg
}
