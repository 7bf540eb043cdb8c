use std::time::Duration;

use chrono::Utc;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::api::{ApiClient, FeedConnection, NotificationStream};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::ack_store::AckStore;
use crate::core::feed::FeedState;
use crate::errors::AppResult;
use crate::ui::messages;
use crate::utils::colors;
use crate::utils::time::format_time;

/// Follow the live announcement feed, or mark one announcement as read.
pub async fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Feed { ack } = cmd {
        let store = AckStore::open_default();

        if let Some(id) = ack {
            let mut feed = FeedState::new(store.load(), cfg.feed_highlight_secs);
            feed.acknowledge(id);
            store.save(feed.acknowledged())?;
            messages::success(format!("Marked '{}' as read.", id));
            return Ok(());
        }

        run_live(cfg, &store).await?;
    }
    Ok(())
}

async fn run_live(cfg: &Config, store: &AckStore) -> AppResult<()> {
    let client = ApiClient::new(cfg)?;
    let mut feed = FeedState::new(store.load(), cfg.feed_highlight_secs);
    let mut stream = NotificationStream::subscribe(&client).await?;

    messages::info("Following announcements. Type 'read <id>' to dismiss, 'q' to quit.");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut tick = tokio::time::interval(Duration::from_secs(1));

    let mut was_connecting = true;
    loop {
        tokio::select! {
            batch = stream.next_batch() => match batch {
                Some(batch) => {
                    if was_connecting && stream.state() == FeedConnection::Connected {
                        messages::success("Connected.");
                        was_connecting = false;
                    }
                    if feed.on_batch(Utc::now(), batch) > 0 {
                        render(&feed);
                    }
                }
                None => {
                    // The feed goes static on a transport error; a new
                    // subscription means re-running the command.
                    messages::warning(
                        "Announcement stream disconnected. Re-run 'emstrack feed' to re-subscribe.",
                    );
                    break;
                }
            },

            _ = tick.tick() => {
                feed.expire_recent(Utc::now());
            }

            line = lines.next_line() => {
                match line? {
                    Some(input) => {
                        if !handle_input(input.trim(), &mut feed, store)? {
                            break;
                        }
                    }
                    None => break, // stdin closed
                }
            }
        }
    }

    Ok(())
}

/// Returns false when the user asked to quit.
fn handle_input(input: &str, feed: &mut FeedState, store: &AckStore) -> AppResult<bool> {
    match input {
        "q" | "quit" => return Ok(false),
        "" => {}
        _ => {
            if let Some(id) = input.strip_prefix("read ") {
                let id = id.trim();
                if feed.acknowledge(id) {
                    // Persist the full set immediately so a reload does
                    // not resurface the message.
                    store.save(feed.acknowledged())?;
                    render(feed);
                } else {
                    messages::warning(format!("No visible announcement with id '{}'.", id));
                }
            } else {
                messages::warning("Commands: read <id>, q");
            }
        }
    }
    Ok(true)
}

fn render(feed: &FeedState) {
    println!();
    messages::header("Announcements");
    let visible = feed.visible();
    if visible.is_empty() {
        println!("No announcements yet.");
        return;
    }
    for note in visible {
        let (mark, reset) = if feed.is_recent(&note.id) {
            (colors::HIGHLIGHT, colors::RESET)
        } else {
            ("", "")
        };
        println!(
            "{}[{}]{} {} {}{}{}",
            colors::GREY,
            note.id,
            colors::RESET,
            format_time(&note.created_at),
            mark,
            note.message,
            reset
        );
    }
}
