//! Command execution engine.
//!
//! Each input line is processed independently: tokenize, resolve the
//! command word against the [`Command`] enum, run the matching handler
//! against the shared [`AppContext`]. Unknown words go through the
//! suggestion engine. Handlers return transcript lines plus an
//! [`Effect`] the UI interprets; user-input problems are rendered as
//! warning lines, never as `Err`.

use std::path::{Path, PathBuf};

use tracing::{debug, warn};

use crate::command::{tokenize, Command};
use crate::context::AppContext;
use crate::invite::Invitation;
use crate::media::{self, MediaSlot};
use crate::palette::{PaletteSlot, RgbColor};
use crate::profile::ProfileField;
use crate::transcript::Line;

/// Side effect a command asks the UI to perform.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Effect {
    #[default]
    None,
    /// Wipe the transcript (and the screen).
    ClearTranscript,
    /// Flip the ID card to its other face.
    FlipCard,
    /// Run the four-field interview-invitation form.
    OpenInviteForm,
    /// End the session.
    Exit,
}

/// Result of executing one input line.
#[derive(Debug, Clone, Default)]
pub struct CommandOutput {
    pub lines: Vec<Line>,
    pub effect: Effect,
}

impl CommandOutput {
    fn lines(lines: Vec<Line>) -> Self {
        Self { lines, effect: Effect::None }
    }

    fn effect(effect: Effect, lines: Vec<Line>) -> Self {
        Self { lines, effect }
    }
}

/// Executes input lines against an [`AppContext`].
#[derive(Debug, Default)]
pub struct Executor {
    /// Where `download` writes the resume; `None` means the current
    /// working directory.
    pub download_dir: Option<PathBuf>,
}

impl Executor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Process one raw input line: echo it into the transcript, run
    /// the command, append the output. Blank lines are ignored.
    pub fn run(&self, ctx: &mut AppContext, line: &str) -> CommandOutput {
        let Some((word, args)) = tokenize(line) else {
            return CommandOutput::default();
        };

        let prompt = ctx.prompt();
        ctx.transcript.push_input(&prompt, line.trim());

        let output = match Command::parse(&word) {
            Some(command) => self.dispatch(ctx, command, &args),
            None => Self::not_found(&word),
        };

        if output.effect == Effect::ClearTranscript {
            ctx.transcript.clear();
        } else {
            ctx.transcript.push_output(&output.lines);
        }
        output
    }

    fn not_found(word: &str) -> CommandOutput {
        debug!(word, "unrecognized command");
        let mut lines = vec![Line::warning(format!("Error: command not found: {word}."))];
        match Command::closest(word) {
            Some(candidate) => lines.push(Line::text(format!("Did you mean '{candidate}'?"))),
            None => lines.push(Line::text("Type 'help' for a list of commands.")),
        }
        CommandOutput::lines(lines)
    }

    /// Run a resolved command. Exhaustive over [`Command`].
    fn dispatch(&self, ctx: &mut AppContext, command: Command, args: &[String]) -> CommandOutput {
        match command {
            Command::Help => Self::help(),
            Command::Whoami => Self::welcome(ctx),
            Command::Summary => Self::summary(ctx),
            Command::About => Self::about(ctx),
            Command::Contact => Self::contact(ctx),
            Command::Socials => Self::socials(ctx),
            Command::Experience => Self::bullets(&ctx.profile.experience),
            Command::Education => Self::bullets(&ctx.profile.education),
            Command::Languages => Self::bullets(&ctx.profile.languages),
            Command::Skills => Self::skills(ctx),
            Command::Download => self.download(ctx),
            Command::Upload => Self::upload(ctx, args),
            Command::Set => Self::set(ctx, args),
            Command::Customize => Self::customize(ctx, args),
            Command::Admin => Self::admin(ctx),
            Command::Save => Self::save(ctx),
            Command::Card => CommandOutput::effect(Effect::FlipCard, Vec::new()),
            Command::Invite => CommandOutput::effect(
                Effect::OpenInviteForm,
                vec![Line::text("Opening the interview invitation form...")],
            ),
            Command::Clear => CommandOutput::effect(Effect::ClearTranscript, Vec::new()),
            Command::Exit => CommandOutput::effect(
                Effect::Exit,
                vec![Line::text("Thank you for visiting. Have a great day!")],
            ),
            Command::Echo => CommandOutput::lines(vec![Line::text(args.join(" "))]),
            Command::Date => Self::date(),
            Command::Hostname => Self::hostname(),
            Command::Ipconfig => Self::ipconfig(),
            Command::Ping => Self::ping(args),
            Command::Ls => Self::ls(),
            Command::Cat => self.cat(ctx, args),
            Command::Neofetch => Self::neofetch(ctx),
        }
    }

    fn help() -> CommandOutput {
        let mut lines = vec![Line::accent("Available commands:")];
        for name in Command::NAMES {
            // NAMES and parse cover the same lexicon.
            if let Some(command) = Command::parse(name) {
                lines.push(Line::text(format!("  {name:<12}- {}", command.describe())));
            }
        }
        CommandOutput::lines(lines)
    }

    fn welcome(ctx: &AppContext) -> CommandOutput {
        CommandOutput::lines(vec![
            Line::text(format!(
                "Welcome! This is the interactive portfolio of {}.",
                ctx.profile.personal.name
            )),
            Line::text("To start, try 'summary'. For all options, type 'help'."),
        ])
    }

    fn summary(ctx: &AppContext) -> CommandOutput {
        CommandOutput::lines(vec![
            Line::text(format!("  * Email: {}", ctx.profile.contact.email)),
            Line::text(format!("  * Location: {}", ctx.profile.contact.location)),
            Line::text(format!("  * Role: {}", ctx.profile.personal.title)),
            Line::text("  * Type 'download' to get my full resume."),
        ])
    }

    fn about(ctx: &AppContext) -> CommandOutput {
        let p = &ctx.profile.personal;
        CommandOutput::lines(vec![
            Line::text(format!("  {:<16}{}", "Name:", p.name)),
            Line::text(format!("  {:<16}{}", "Title:", p.title)),
            Line::text(format!("  {:<16}{}", "Nationality:", p.nationality)),
            Line::text(format!("  {:<16}{}", "Date of Birth:", p.date_of_birth)),
            Line::text(format!("  {:<16}{}", "Gender:", p.gender)),
            Line::text(format!("  {:<16}{}", "Marital Status:", p.marital_status)),
        ])
    }

    fn contact(ctx: &AppContext) -> CommandOutput {
        let c = &ctx.profile.contact;
        CommandOutput::lines(vec![
            Line::text(format!("  {:<10}{}", "Mobile:", c.mobile)),
            Line::text(format!("  {:<10}{}", "Email:", c.email)),
            Line::text(format!("  {:<10}{}", "Location:", c.location)),
        ])
    }

    fn socials(ctx: &AppContext) -> CommandOutput {
        let lines = ctx
            .profile
            .socials
            .iter()
            .map(|s| Line::link(format!("  {:<10}{}", format!("{}:", s.label), s.url)))
            .collect();
        CommandOutput::lines(lines)
    }

    fn bullets(items: &[String]) -> CommandOutput {
        let lines = items.iter().map(|item| Line::text(format!("  {item}"))).collect();
        CommandOutput::lines(lines)
    }

    fn skills(ctx: &AppContext) -> CommandOutput {
        let mut lines = Vec::new();
        for category in &ctx.profile.skills {
            lines.push(Line::accent(format!("{}:", category.name)));
            lines.push(Line::text(format!("   * {}", category.items.join(", "))));
        }
        CommandOutput::lines(lines)
    }

    fn download(&self, ctx: &AppContext) -> CommandOutput {
        let Some(uri) = &ctx.profile.resume_data_uri else {
            return CommandOutput::lines(vec![Line::text(
                "No resume has been uploaded yet.",
            )]);
        };
        let file_name = ctx.profile.resume_file_name();
        let dir = self
            .download_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from("."));
        match media::from_data_uri(uri).and_then(|bytes| {
            std::fs::write(dir.join(&file_name), bytes).map_err(Into::into)
        }) {
            Ok(()) => CommandOutput::lines(vec![Line::text(format!(
                "Success: Download initiated for {file_name}..."
            ))]),
            Err(e) => {
                warn!(error = %e, "resume download failed");
                CommandOutput::lines(vec![Line::warning(format!(
                    "Error: could not write {file_name}."
                ))])
            }
        }
    }

    fn require_admin(ctx: &AppContext, name: &str) -> Option<CommandOutput> {
        if ctx.admin {
            None
        } else {
            Some(CommandOutput::lines(vec![Line::warning(format!(
                "Permission denied: '{name}' requires admin mode. Type 'admin' first."
            ))]))
        }
    }

    fn admin(ctx: &mut AppContext) -> CommandOutput {
        ctx.admin = !ctx.admin;
        let message = if ctx.admin {
            "Admin mode enabled. 'set', 'customize', 'upload' and 'save' are unlocked."
        } else {
            "Admin mode disabled."
        };
        CommandOutput::lines(vec![Line::accent(message)])
    }

    fn save(ctx: &mut AppContext) -> CommandOutput {
        if let Some(denied) = Self::require_admin(ctx, "save") {
            return denied;
        }
        let mut lines = Vec::new();
        match ctx.persist_profile().and_then(|()| ctx.persist_palette()) {
            Ok(()) => lines.push(Line::text("Success: profile and palette saved.")),
            Err(e) => {
                warn!(error = %e, "explicit save failed");
                lines.push(Line::warning("Error: could not persist changes."));
            }
        }
        CommandOutput::lines(lines)
    }

    fn set(ctx: &mut AppContext, args: &[String]) -> CommandOutput {
        if let Some(denied) = Self::require_admin(ctx, "set") {
            return denied;
        }
        if args.len() < 2 {
            return CommandOutput::lines(vec![Line::text("Usage: set <field> <value...>")]);
        }
        let field_name = &args[0];

        let Some(field) = ProfileField::parse(field_name) else {
            return Self::unknown_name(
                "field",
                field_name,
                ProfileField::closest(field_name),
                ProfileField::NAMES,
            );
        };

        let value = args[1..].join(" ");
        field.apply(&mut ctx.profile, &value);
        let mut lines = vec![Line::text(format!("Updated {}.", field.name()))];
        if let Some(note) = ctx.persist_profile_noting() {
            lines.push(Line::warning(note));
        }
        CommandOutput::lines(lines)
    }

    fn customize(ctx: &mut AppContext, args: &[String]) -> CommandOutput {
        if let Some(denied) = Self::require_admin(ctx, "customize") {
            return denied;
        }
        if args.len() < 2 {
            return CommandOutput::lines(vec![Line::text("Usage: customize <slot> <#rrggbb>")]);
        }
        let (slot_name, color) = (&args[0], &args[1]);

        let Some(slot) = PaletteSlot::parse(slot_name) else {
            return Self::unknown_name(
                "target",
                slot_name,
                PaletteSlot::closest(slot_name),
                PaletteSlot::NAMES,
            );
        };

        if RgbColor::from_hex(color).is_none() {
            return CommandOutput::lines(vec![Line::warning(format!(
                "Error: '{color}' is not a color; expected #rrggbb."
            ))]);
        }

        ctx.palette.set(slot, color.clone());
        let mut lines = vec![Line::text(format!("Updated {} to {color}.", slot.name()))];
        if let Some(note) = ctx.persist_palette_noting() {
            lines.push(Line::warning(note));
        }
        CommandOutput::lines(lines)
    }

    fn upload(ctx: &mut AppContext, args: &[String]) -> CommandOutput {
        if let Some(denied) = Self::require_admin(ctx, "upload") {
            return denied;
        }
        if args.len() < 2 {
            return CommandOutput::lines(vec![Line::text(
                "Usage: upload picture <path> | upload resume <path>",
            )]);
        }
        let (slot_name, path) = (&args[0], &args[1]);

        let slot = match slot_name.to_lowercase().as_str() {
            "picture" => MediaSlot::Picture,
            "resume" => MediaSlot::Resume,
            other => {
                return CommandOutput::lines(vec![Line::warning(format!(
                    "Error: unknown upload slot '{other}'; expected 'picture' or 'resume'."
                ))]);
            }
        };

        // On failure the previous value is retained unchanged.
        match media::import_file(slot, Path::new(path)) {
            Ok(uri) => {
                match slot {
                    MediaSlot::Picture => ctx.profile.personal.photo_data_uri = Some(uri),
                    MediaSlot::Resume => ctx.profile.resume_data_uri = Some(uri),
                }
                let what = match slot {
                    MediaSlot::Picture => "Profile picture",
                    MediaSlot::Resume => "Resume",
                };
                let mut lines = vec![Line::text(format!("Success: {what} updated."))];
                if let Some(note) = ctx.persist_profile_noting() {
                    lines.push(Line::warning(note));
                }
                CommandOutput::lines(lines)
            }
            Err(e) => {
                warn!(error = %e, "upload rejected");
                CommandOutput::lines(vec![Line::warning(format!(
                    "Error: please select a valid {} file.",
                    slot.describe()
                ))])
            }
        }
    }

    fn unknown_name(
        what: &str,
        given: &str,
        suggestion: Option<&str>,
        valid: &[&str],
    ) -> CommandOutput {
        let mut lines = vec![Line::warning(format!("Error: unknown {what}: '{given}'."))];
        match suggestion {
            Some(candidate) => lines.push(Line::text(format!("Did you mean '{candidate}'?"))),
            None => lines.push(Line::text(format!("Valid {what}s: {}.", valid.join(", ")))),
        }
        CommandOutput::lines(lines)
    }

    fn date() -> CommandOutput {
        let now = chrono::Local::now();
        CommandOutput::lines(vec![Line::text(now.format("%a %b %e %H:%M:%S %Y").to_string())])
    }

    fn hostname() -> CommandOutput {
        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "portfolio-server-01".to_string());
        CommandOutput::lines(vec![Line::text(host)])
    }

    fn ipconfig() -> CommandOutput {
        CommandOutput::lines(vec![
            Line::accent("Network Interface Card:"),
            Line::text("    IPv4 Address: 192.168.1.101"),
            Line::text("    Subnet Mask: 255.255.255.0"),
            Line::text("    Default Gateway: 192.168.1.1"),
        ])
    }

    fn ping(args: &[String]) -> CommandOutput {
        let host = args.first().map(String::as_str).unwrap_or("localhost");
        let mut lines = vec![Line::text(format!("Pinging {host} with 32 bytes of data:"))];
        for _ in 0..3 {
            lines.push(Line::text(format!(
                "Reply from {host}: bytes=32 time=1ms TTL=128"
            )));
        }
        CommandOutput::lines(lines)
    }

    fn ls() -> CommandOutput {
        CommandOutput::lines(vec![
            Line::link("projects/"),
            Line::text("about.txt    contact.txt    resume.pdf    skills.json"),
        ])
    }

    fn cat(&self, ctx: &mut AppContext, args: &[String]) -> CommandOutput {
        match args.first().map(String::as_str) {
            None => CommandOutput::lines(vec![Line::text(
                "Usage: cat <filename>. Try 'cat about.txt'.",
            )]),
            Some("about.txt") => self.dispatch(ctx, Command::About, &[]),
            Some("contact.txt") => self.dispatch(ctx, Command::Contact, &[]),
            Some(other) => CommandOutput::lines(vec![Line::warning(format!(
                "cat: {other}: No such file or directory"
            ))]),
        }
    }

    fn neofetch(ctx: &AppContext) -> CommandOutput {
        let host = hostname::get()
            .ok()
            .and_then(|h| h.into_string().ok())
            .unwrap_or_else(|| "portfolio".to_string());
        CommandOutput::lines(vec![
            Line::accent(format!("{}@{host}", whoami::username())),
            Line::text("-----------------"),
            Line::text(format!("  OS:      {}", std::env::consts::OS)),
            Line::text(format!("  Host:    {host}")),
            Line::text("  Shell:   /bin/cvsh"),
            Line::text("  Uptime:  Online"),
            Line::text(format!("  Owner:   {}", ctx.profile.personal.name)),
            Line::text("  CPU:     Your Brain"),
            Line::text("  GPU:     Your Eyes"),
            Line::text("  Memory:  System RAM"),
        ])
    }

    /// Build the mailto link for a completed invitation form against
    /// the profile's contact address.
    pub fn invitation_link(ctx: &AppContext, invitation: &Invitation) -> String {
        invitation.mailto_link(&ctx.profile.contact.email, ctx.profile.first_name())
    }
}
