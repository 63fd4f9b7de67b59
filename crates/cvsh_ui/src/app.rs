//! The interactive session loop.
//!
//! Synchronous and line-oriented: render the ID card, seed the
//! transcript with the welcome banner, then read a line, execute it
//! and print the styled output until `exit` or end of input. All
//! command semantics live in `cvsh_core`; this module only draws.

use std::io::{self, BufRead, Write};

use anyhow::Result;
use crossterm::{
    execute,
    style::{Print, PrintStyledContent},
    terminal::{Clear, ClearType},
};
use cvsh_core::{AppContext, Effect, Executor, Invitation, Line};
use tracing::info;

use crate::card::{self, CardFace};
use crate::config::UiConfig;
use crate::themes::StyleSet;

/// Interactive session state.
pub struct App {
    executor: Executor,
    config: UiConfig,
    face: CardFace,
    color: bool,
}

impl App {
    pub fn new(config: UiConfig) -> Self {
        use is_terminal::IsTerminal;
        let color = config.color.unwrap_or_else(|| io::stdout().is_terminal());
        Self {
            executor: Executor::new(),
            config,
            face: CardFace::default(),
            color,
        }
    }

    /// Run the session until `exit` or end of input.
    pub fn run(&mut self, ctx: &mut AppContext) -> Result<()> {
        info!(color = self.color, "interactive session started");
        self.render_card(ctx)?;

        // The original site greets every visitor before the first input.
        let banner = self.executor.run(ctx, "whoami");
        self.print_lines(ctx, &banner.lines)?;

        let stdin = io::stdin();
        let mut input = String::new();
        loop {
            self.print_prompt(ctx)?;
            input.clear();
            if stdin.lock().read_line(&mut input)? == 0 {
                // End of input counts as exit.
                break;
            }

            let output = self.executor.run(ctx, &input);
            self.print_lines(ctx, &output.lines)?;

            match output.effect {
                Effect::None => {}
                Effect::ClearTranscript => self.clear_screen(ctx)?,
                Effect::FlipCard => {
                    self.face = self.face.flipped();
                    self.render_card(ctx)?;
                }
                Effect::OpenInviteForm => self.run_invite_form(ctx)?,
                Effect::Exit => break,
            }
        }
        info!("interactive session ended");
        Ok(())
    }

    fn styles(&self, ctx: &AppContext) -> StyleSet {
        // Rebuilt per render so `customize` takes effect immediately.
        StyleSet::from_palette(&ctx.palette, self.color)
    }

    fn print_prompt(&self, ctx: &AppContext) -> Result<()> {
        let styles = self.styles(ctx);
        let mut stdout = io::stdout();
        execute!(stdout, PrintStyledContent(styles.accent.apply(ctx.prompt())))?;
        stdout.flush()?;
        Ok(())
    }

    fn print_lines(&self, ctx: &AppContext, lines: &[Line]) -> Result<()> {
        let styles = self.styles(ctx);
        let mut stdout = io::stdout();
        for line in lines {
            let style = styles.for_kind(line.kind);
            execute!(
                stdout,
                PrintStyledContent(style.apply(line.text.clone())),
                Print("\n")
            )?;
        }
        Ok(())
    }

    fn render_card(&self, ctx: &AppContext) -> Result<()> {
        if !self.config.show_card {
            return Ok(());
        }
        let styles = self.styles(ctx);
        let lines = card::render(&ctx.profile, self.face, self.config.card_width);
        let mut stdout = io::stdout();
        for line in lines {
            // Card borders take the outline color; accent rows keep theirs.
            let style = match line.kind {
                cvsh_core::LineKind::Accent => styles.for_kind(line.kind),
                _ => {
                    if self.color {
                        styles.outline
                    } else {
                        Default::default()
                    }
                }
            };
            execute!(
                stdout,
                PrintStyledContent(style.apply(line.text)),
                Print("\n")
            )?;
        }
        Ok(())
    }

    fn clear_screen(&self, ctx: &AppContext) -> Result<()> {
        let mut stdout = io::stdout();
        execute!(stdout, Clear(ClearType::All), crossterm::cursor::MoveTo(0, 0))?;
        self.render_card(ctx)?;
        Ok(())
    }

    /// Four sequential line prompts, then the mailto link into the
    /// transcript.
    fn run_invite_form(&self, ctx: &mut AppContext) -> Result<()> {
        let recruiter = self.read_field(ctx, "Your name: ")?;
        let company = self.read_field(ctx, "Company: ")?;
        let location = self.read_field(ctx, "Location: ")?;
        let date = self.read_field(ctx, "Proposed date: ")?;

        let lines = match (recruiter, company, location, date) {
            (Some(recruiter), Some(company), Some(location), Some(date)) => {
                let invitation = Invitation { recruiter, company, location, date };
                let link = Executor::invitation_link(ctx, &invitation);
                vec![
                    Line::text("Open this link to send the invitation:"),
                    Line::link(link),
                ]
            }
            _ => vec![Line::warning("Invitation cancelled: all fields are required.")],
        };
        ctx.transcript.push_output(&lines);
        self.print_lines(ctx, &lines)?;
        Ok(())
    }

    fn read_field(&self, ctx: &AppContext, label: &str) -> Result<Option<String>> {
        let styles = self.styles(ctx);
        let mut stdout = io::stdout();
        execute!(stdout, PrintStyledContent(styles.link.apply(label.to_string())))?;
        stdout.flush()?;

        let mut value = String::new();
        io::stdin().lock().read_line(&mut value)?;
        let value = value.trim().to_string();
        Ok(if value.is_empty() { None } else { Some(value) })
    }
}
