//! The terminal's closed command vocabulary.

/// Every verb the interpreter recognizes, in `help` display order.
pub const VERBS: [&str; 10] = [
    "help",
    "about",
    "skills",
    "projects",
    "experience",
    "education",
    "contact",
    "resume",
    "game",
    "clear",
];

/// A recognized terminal command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    About,
    Skills,
    Projects,
    Experience,
    Education,
    Contact,
    Resume,
    Game,
    Clear,
}

impl Command {
    /// Exact, case-sensitive match against a trimmed input line. No argument
    /// parsing: `about me` is not a command.
    pub fn parse(input: &str) -> Option<Self> {
        match input {
            "help" => Some(Command::Help),
            "about" => Some(Command::About),
            "skills" => Some(Command::Skills),
            "projects" => Some(Command::Projects),
            "experience" => Some(Command::Experience),
            "education" => Some(Command::Education),
            "contact" => Some(Command::Contact),
            "resume" => Some(Command::Resume),
            "game" => Some(Command::Game),
            "clear" => Some(Command::Clear),
            _ => None,
        }
    }
}
