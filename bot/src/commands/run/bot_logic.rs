//! # PrognozRS Telegram Bot Logic
//!
//! File: bot/src/commands/run/bot_logic.rs
//! Author: Christi Mahu
//!
//! ## Overview
//!
//! The Telegram side of the bot, built on `teloxide`:
//! - `/start`, `/ping`, `/help` commands (registered with Telegram at startup)
//! - every other plain text message goes through `chat::router::route`
//! - replies optionally carry the main-menu reply keyboard
//!
//! Updates arrive by long polling. The dispatcher may run handlers for
//! different chats concurrently; handlers hold no state of their own.
//! Handler errors are logged and never stop the bot. Ctrl-C shuts the
//! dispatcher down gracefully.
//!
use super::config::BotSettings;
use crate::chat::menu;
use crate::chat::replies;
use crate::chat::router::{self, Reply};
use crate::core::error::{PrognozError, Result};
use std::time::Duration;
use teloxide::{
    dispatching::UpdateHandler,
    prelude::*,
    types::{ChatId, KeyboardButton, KeyboardMarkup},
    update_listeners::Polling,
    utils::command::BotCommands,
};
use tracing::{debug, info, trace};

/// Slash commands understood by the bot.
#[derive(BotCommands, Clone, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "главное меню")]
    Start,
    #[command(description = "проверка связи")]
    Ping,
    #[command(description = "как пользоваться ботом")]
    Help,
}

/// Reply for a slash command.
pub fn command_reply(cmd: &Command) -> Reply {
    match cmd {
        Command::Start => Reply::with_menu(replies::greeting()),
        Command::Ping => Reply::plain(replies::PONG),
        Command::Help => Reply::plain(replies::help()),
    }
}

/// The main-menu reply keyboard, one button per row, sized to its content.
pub fn main_menu_keyboard() -> KeyboardMarkup {
    let rows = menu::keyboard_rows()
        .into_iter()
        .map(|row| row.into_iter().map(KeyboardButton::new).collect::<Vec<_>>())
        .collect::<Vec<_>>();
    KeyboardMarkup::new(rows).resize_keyboard()
}

async fn send_reply(bot: &Bot, chat_id: ChatId, reply: Reply) -> ResponseResult<()> {
    let request = bot.send_message(chat_id, reply.text);
    if reply.show_menu {
        request.reply_markup(main_menu_keyboard()).await?;
    } else {
        request.await?;
    }
    Ok(())
}

async fn handle_command(bot: Bot, msg: Message, cmd: Command) -> ResponseResult<()> {
    debug!(chat_id = msg.chat.id.0, "Command {:?}", cmd);
    send_reply(&bot, msg.chat.id, command_reply(&cmd)).await
}

async fn handle_text(bot: Bot, msg: Message) -> ResponseResult<()> {
    let text = msg.text().unwrap_or_default();
    debug!(chat_id = msg.chat.id.0, "Text message {:?}", text);
    send_reply(&bot, msg.chat.id, router::route(text)).await
}

/// Plain text that is not a slash command. Unknown commands are ignored.
fn is_plain_text(msg: &Message) -> bool {
    msg.text().is_some_and(|text| !text.starts_with('/'))
}

fn schema() -> UpdateHandler<teloxide::RequestError> {
    Update::filter_message()
        .branch(
            dptree::entry()
                .filter_command::<Command>()
                .endpoint(handle_command),
        )
        .branch(dptree::filter(|msg: Message| is_plain_text(&msg)).endpoint(handle_text))
}

/// Connects to Telegram and serves updates until Ctrl-C.
pub async fn run_bot(settings: BotSettings) -> Result<()> {
    let bot = Bot::new(settings.token);

    let me = bot.get_me().await.map_err(PrognozError::from)?;
    info!("Authorized as @{}", me.username());

    bot.set_my_commands(Command::bot_commands())
        .await
        .map_err(PrognozError::from)?;
    debug!("Registered bot commands");

    let mut polling = Polling::builder(bot.clone())
        .timeout(Duration::from_secs(settings.polling.timeout_secs.into()))
        .limit(settings.polling.limit);
    if settings.polling.drop_pending_updates {
        polling = polling.drop_pending_updates();
    }
    let listener = polling.delete_webhook().await.build();

    info!(
        "Polling for updates (timeout {}s, limit {}, drop pending: {})",
        settings.polling.timeout_secs,
        settings.polling.limit,
        settings.polling.drop_pending_updates
    );
    println!("Bot @{} is running. Press Ctrl-C to stop.", me.username());

    Dispatcher::builder(bot, schema())
        .default_handler(|upd| async move {
            trace!("Unhandled update: {:?}", upd.id);
        })
        .error_handler(LoggingErrorHandler::with_custom_text(
            "An error has occurred in the dispatcher",
        ))
        .enable_ctrlc_handler()
        .build()
        .dispatch_with_listener(
            listener,
            LoggingErrorHandler::with_custom_text("An error from the update listener"),
        )
        .await;

    info!("Dispatcher stopped.");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commands_parse() {
        assert_eq!(Command::parse("/start", "prognoz_bot").unwrap(), Command::Start);
        assert_eq!(Command::parse("/ping", "prognoz_bot").unwrap(), Command::Ping);
        assert_eq!(
            Command::parse("/help@prognoz_bot", "prognoz_bot").unwrap(),
            Command::Help
        );
        assert!(Command::parse("/predict", "prognoz_bot").is_err());
    }

    #[test]
    fn test_command_replies() {
        let start = command_reply(&Command::Start);
        assert!(start.show_menu);
        assert!(start.text.starts_with("Привет!"));

        assert_eq!(command_reply(&Command::Ping), Reply::plain("pong"));
        assert_eq!(command_reply(&Command::Help).text, replies::help());
    }

    #[test]
    fn test_command_descriptions_cover_all_commands() {
        let names: Vec<String> = Command::bot_commands()
            .into_iter()
            .map(|c| c.command.trim_start_matches('/').to_string())
            .collect();
        assert_eq!(names, vec!["start", "ping", "help"]);
    }

    #[test]
    fn test_main_menu_keyboard_layout() {
        let keyboard = main_menu_keyboard();
        assert_eq!(keyboard.keyboard.len(), 4);
        assert_eq!(keyboard.keyboard[1][0].text, "📊 Прогноз по матчу");
    }
}
