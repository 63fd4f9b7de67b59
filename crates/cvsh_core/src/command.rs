//! Command lexicon and input-line tokenization.
//!
//! Every input line resolves to at most one [`Command`] variant; the
//! dispatcher matches exhaustively over the enum instead of over raw
//! strings, so adding a command without a handler fails to compile.

use crate::suggest::{suggest, SUGGEST_THRESHOLD};

/// Every top-level command the terminal understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Help,
    Whoami,
    Summary,
    About,
    Contact,
    Socials,
    Experience,
    Education,
    Languages,
    Skills,
    Download,
    Upload,
    Set,
    Customize,
    Admin,
    Save,
    Card,
    Invite,
    Clear,
    Exit,
    Echo,
    Date,
    Hostname,
    Ipconfig,
    Ping,
    Ls,
    Cat,
    Neofetch,
}

impl Command {
    /// The command lexicon, in the fixed order used for suggestions
    /// and for the `help` listing.
    pub const NAMES: &'static [&'static str] = &[
        "help",
        "whoami",
        "summary",
        "about",
        "contact",
        "socials",
        "experience",
        "education",
        "languages",
        "skills",
        "download",
        "upload",
        "set",
        "customize",
        "admin",
        "save",
        "card",
        "invite",
        "clear",
        "exit",
        "echo",
        "date",
        "hostname",
        "ipconfig",
        "ping",
        "ls",
        "cat",
        "neofetch",
    ];

    /// Case-insensitive lookup of a command word. `exp` is accepted as
    /// an alias of `experience`.
    pub fn parse(word: &str) -> Option<Self> {
        match word.to_lowercase().as_str() {
            "help" => Some(Self::Help),
            "whoami" => Some(Self::Whoami),
            "summary" => Some(Self::Summary),
            "about" => Some(Self::About),
            "contact" => Some(Self::Contact),
            "socials" => Some(Self::Socials),
            "experience" | "exp" => Some(Self::Experience),
            "education" => Some(Self::Education),
            "languages" => Some(Self::Languages),
            "skills" => Some(Self::Skills),
            "download" => Some(Self::Download),
            "upload" => Some(Self::Upload),
            "set" => Some(Self::Set),
            "customize" => Some(Self::Customize),
            "admin" => Some(Self::Admin),
            "save" => Some(Self::Save),
            "card" => Some(Self::Card),
            "invite" => Some(Self::Invite),
            "clear" => Some(Self::Clear),
            "exit" => Some(Self::Exit),
            "echo" => Some(Self::Echo),
            "date" => Some(Self::Date),
            "hostname" => Some(Self::Hostname),
            "ipconfig" => Some(Self::Ipconfig),
            "ping" => Some(Self::Ping),
            "ls" => Some(Self::Ls),
            "cat" => Some(Self::Cat),
            "neofetch" => Some(Self::Neofetch),
            _ => None,
        }
    }

    /// Closest valid command name to a misspelled one, if any.
    pub fn closest(word: &str) -> Option<&'static str> {
        suggest(word, Self::NAMES, SUGGEST_THRESHOLD)
    }

    /// One-line description for the `help` listing.
    pub fn describe(&self) -> &'static str {
        match self {
            Self::Help => "List available commands.",
            Self::Whoami => "Welcome message.",
            Self::Summary => "Brief summary.",
            Self::About => "Personal details.",
            Self::Contact => "Contact info.",
            Self::Socials => "Social media links.",
            Self::Experience => "Work experience.",
            Self::Education => "Education history.",
            Self::Languages => "Spoken languages.",
            Self::Skills => "Technical skills.",
            Self::Download => "Download resume.",
            Self::Upload => "Upload a picture or resume (admin).",
            Self::Set => "Edit a profile field (admin).",
            Self::Customize => "Change a theme color (admin).",
            Self::Admin => "Toggle admin mode.",
            Self::Save => "Persist profile and palette (admin).",
            Self::Card => "Flip the ID card.",
            Self::Invite => "Send an interview invitation.",
            Self::Clear => "Clear screen.",
            Self::Exit => "Close terminal.",
            Self::Echo => "Print arguments.",
            Self::Date => "Show current date.",
            Self::Hostname => "Display hostname.",
            Self::Ipconfig => "Show network info.",
            Self::Ping => "Ping a host.",
            Self::Ls => "List files.",
            Self::Cat => "View file contents.",
            Self::Neofetch => "System info.",
        }
    }
}

/// Split a raw input line into its lower-cased command word and the
/// remaining argument words. `None` for blank lines.
pub fn tokenize(line: &str) -> Option<(String, Vec<String>)> {
    let mut words = line.split_whitespace();
    let command = words.next()?.to_lowercase();
    let args = words.map(str::to_string).collect();
    Some((command, args))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_lexicon_entry_parses() {
        for name in Command::NAMES {
            assert!(Command::parse(name).is_some(), "unparsable lexicon entry {name}");
        }
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Command::parse("HELP"), Some(Command::Help));
        assert_eq!(Command::parse("Skills"), Some(Command::Skills));
    }

    #[test]
    fn exp_aliases_experience() {
        assert_eq!(Command::parse("exp"), Some(Command::Experience));
    }

    #[test]
    fn unknown_words_do_not_parse() {
        assert_eq!(Command::parse("sudo"), None);
    }

    #[test]
    fn closest_suggests_within_threshold() {
        assert_eq!(Command::closest("hepl"), Some("help"));
        assert_eq!(Command::closest("sumary"), Some("summary"));
        assert_eq!(Command::closest("xyz123"), None);
    }

    #[test]
    fn tokenize_splits_and_lowercases_the_command_word() {
        let (word, args) = tokenize("  SET title Lead Engineer ").unwrap();
        assert_eq!(word, "set");
        assert_eq!(args, vec!["title", "Lead", "Engineer"]);
        assert!(tokenize("   ").is_none());
    }
}
