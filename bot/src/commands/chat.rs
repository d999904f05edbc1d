//! # PrognozRS Console Chat
//!
//! File: bot/src/commands/chat.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! `prognoz chat` runs the bot's conversation logic in the terminal, without
//! Telegram. Each line read from stdin is treated like an incoming message:
//! slash commands (`/start`, `/ping`, `/help`) get their command reply,
//! everything else goes through the same router the bot uses.
//!
//! When a reply would carry the menu keyboard, the button labels are printed
//! underneath it so they can be typed back in.
//!
//! The session ends at end of input or on `/quit`.
//!
//! ```bash
//! prognoz chat
//! echo "Vitality vs FaZe" | prognoz chat
//! ```
//!
use crate::chat::menu;
use crate::chat::router::{self, Reply};
use crate::commands::run::bot_logic::{command_reply, Command};
use crate::core::error::Result;
use anyhow::Context;
use clap::Parser;
use std::io::{self, BufRead, Write};
use teloxide::utils::command::BotCommands;
use tracing::debug;

/// Username used to resolve `/command@name` mentions in the console.
const CONSOLE_BOT_NAME: &str = "prognoz";

/// # Chat Command Arguments (`ChatArgs`)
#[derive(Parser, Debug)]
pub struct ChatArgs {}

pub async fn handle_chat(_args: ChatArgs) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_session(stdin.lock(), &mut stdout.lock())
}

fn run_session<R: BufRead, W: Write>(input: R, output: &mut W) -> Result<()> {
    write_reply(output, &command_reply(&Command::Start))?;

    for line in input.lines() {
        let line = line.context("Failed to read from stdin")?;
        let text = line.trim();
        if text.is_empty() {
            continue;
        }
        if text.eq_ignore_ascii_case("/quit") {
            debug!("Console session ended by /quit");
            break;
        }
        write_reply(output, &reply_for(text))?;
    }
    Ok(())
}

fn reply_for(text: &str) -> Reply {
    if text.starts_with('/') {
        if let Ok(cmd) = Command::parse(text, CONSOLE_BOT_NAME) {
            return command_reply(&cmd);
        }
    }
    router::route(text)
}

fn write_reply<W: Write>(output: &mut W, reply: &Reply) -> Result<()> {
    writeln!(output, "{}", reply.text).context("Failed to write reply")?;
    if reply.show_menu {
        for row in menu::keyboard_rows() {
            let buttons: Vec<String> = row.iter().map(|label| format!("[{label}]")).collect();
            writeln!(output, "{}", buttons.join(" ")).context("Failed to write menu")?;
        }
    }
    writeln!(output).context("Failed to write reply")?;
    output.flush().context("Failed to flush stdout")?;
    Ok(())
}
