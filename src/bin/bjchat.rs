//! Line-oriented transport for the blackjack bot.
//!
//! Each stdin line is one inbound message:
//!
//! - `@alice 50` is the text `50` from `alice`
//! - `!image cat.png` is a non-text message of type `image` from the default sender
//! - anything else is text from the default sender
//!
//! Replies are printed as `[address] reply`.

use core::time::Duration;
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};

use anyhow::Error;
use bjchat::config::{ChatConfig, ConfigOverrides};
use bjchat::{BackgroundTask, Game, InboundEvent, MemorySessions, ReplySink, Router, SendError};
use log::{info, warn};
use pico_args::Arguments;

const HELP: &str = "\
Play blackjack over a line-oriented chat transport

USAGE:
  bjchat [OPTIONS]

OPTIONS:
  --balance    N           Starting balance            [default: env BJ_STARTING_BALANCE or 1000]
  --seed       N           Card RNG seed               [default: env BJ_SEED or current time]
  --sender     ADDRESS     Default sender address      [default: env BJ_SENDER or local]

FLAGS:
  -h, --help               Print help information

INPUT:
  @ADDRESS TEXT            Message TEXT from ADDRESS
  !TYPE TEXT               Non-text message of content type TYPE (ignored by the bot)
  TEXT                     Message TEXT from the default sender

ENVIRONMENT:
  BJ_STORE_URL             Key-value store handle for the background task [default: memory://]
  BJ_TICK_SECS             Background task period in seconds [default: 60]
  RUST_LOG                 Log filter [default: info]
";

/// Writes replies to stdout.
#[derive(Clone, Copy)]
struct StdoutSink;

impl ReplySink for StdoutSink {
    fn send(&self, address: &str, text: &str) -> Result<(), SendError> {
        let mut out = io::stdout().lock();
        writeln!(out, "[{address}] {text}")
            .and_then(|()| out.flush())
            .map_err(|err| SendError::Delivery(err.to_string()))
    }
}

/// Logs a heartbeat against the store on a fixed period.
struct Heartbeat {
    tick: Duration,
}

impl BackgroundTask for Heartbeat {
    type Store = str;
    type Messaging = StdoutSink;

    fn start(&self, store: &str, _messaging: &StdoutSink) {
        let tick = self.tick;
        let store = store.to_string();
        info!("heartbeat every {}s against {store}", tick.as_secs());
        thread::spawn(move || {
            loop {
                thread::sleep(tick);
                info!("heartbeat: {store}");
            }
        });
    }
}

/// Turns one stdin line into an event.
fn parse_line(line: &str, default_sender: &str) -> Option<InboundEvent> {
    let line = line.trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return None;
    }

    if let Some(rest) = line.strip_prefix('@') {
        let (sender, text) = rest.split_once(' ').unwrap_or((rest, ""));
        return Some(InboundEvent::text(sender, text));
    }

    if let Some(rest) = line.strip_prefix('!') {
        let (tag, text) = rest.split_once(' ').unwrap_or((rest, ""));
        return Some(InboundEvent::new(default_sender, text, tag));
    }

    Some(InboundEvent::text(default_sender, line))
}

fn main() -> Result<(), Error> {
    // Load .env file if it exists
    let _ = dotenvy::dotenv();

    let mut pargs = Arguments::from_env();

    // Help has a higher priority and should be handled separately.
    if pargs.contains(["-h", "--help"]) {
        print!("{HELP}");
        return Ok(());
    }

    let overrides = ConfigOverrides {
        starting_balance: pargs.opt_value_from_str("--balance")?,
        seed: pargs.opt_value_from_str("--seed")?,
        sender: pargs.opt_value_from_str("--sender")?,
    };
    let remaining = pargs.finish();
    if !remaining.is_empty() {
        anyhow::bail!("unexpected arguments: {remaining:?}");
    }

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_target(false)
        .init();

    let config = ChatConfig::from_env(overrides)?;
    let seed = config.seed.unwrap_or_else(|| {
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_secs()
    });
    info!(
        "starting blackjack bot: balance {}, seed {seed}, sender {}",
        config.starting_balance, config.sender
    );

    let router = Router::new(
        Game::new(config.game_options(), seed),
        MemorySessions::new(),
    );
    let heartbeat = Heartbeat { tick: config.tick };
    let sink = StdoutSink;

    for line in io::stdin().lock().lines() {
        let line = line?;
        let Some(event) = parse_line(&line, &config.sender) else {
            continue;
        };

        router.ensure_started(&heartbeat, config.store_url.as_str(), &sink);
        if router.handle(&event, &sink).is_none() {
            warn!("ignored {:?} message from {}", event.content_type, event.sender);
        }
    }

    info!("input closed, {} session(s) dropped", router.sessions().len());
    Ok(())
}
