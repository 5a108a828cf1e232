use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::Local;
use clap::Parser;
use sentence_core::{update, AppState, AutoAdvance, Effect, Msg, NewItem, SentenceStore};
use sentence_source::{load_path, SourceRecord};
use viewer_logging::{viewer_error, viewer_info};

use super::cli::Cli;
use super::config::ViewerConfig;
use super::logging;
use super::ui::commands::{parse_command, Command, HELP};
use super::ui::render::{format_clock, render};

const TICK_INTERVAL: Duration = Duration::from_millis(250);

pub fn run_app() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = ViewerConfig::resolve(&cli)?;
    logging::initialize(config.log);
    viewer_info!("Starting sentence viewer with {:?}", config.data_path);

    let store = match config.seed {
        Some(seed) => SentenceStore::with_seed(seed),
        None => SentenceStore::new(),
    };
    let state = AppState::with_store(
        store,
        AutoAdvance::new(config.auto_advance()),
        config.batch_size,
    );

    let (cmd_tx, cmd_rx) = mpsc::channel::<Command>();
    spawn_input_reader(cmd_tx.clone());

    // Background tick driving the auto-advance countdown.
    thread::spawn(move || {
        while cmd_tx
            .send(Command::Dispatch(Msg::Tick(TICK_INTERVAL)))
            .is_ok()
        {
            thread::sleep(TICK_INTERVAL);
        }
    });

    let mut session = Session::new(state);
    print!("{HELP}");
    session.dispatch(load_msg(&config));

    for command in cmd_rx {
        match command {
            Command::Quit => break,
            Command::Help => print!("{HELP}"),
            Command::Dispatch(msg) => session.dispatch(msg),
        }
    }
    viewer_info!("Sentence viewer exiting");
    Ok(())
}

fn load_msg(config: &ViewerConfig) -> Msg {
    match load_path(&config.data_path, config.source_format()) {
        Ok(records) => Msg::Loaded(records.into_iter().map(to_new_item).collect()),
        Err(err) => {
            viewer_error!("Failed to load {:?}: {}", config.data_path, err);
            Msg::LoadFailed(err.to_string())
        }
    }
}

fn to_new_item(record: SourceRecord) -> NewItem {
    NewItem {
        content: record.content,
        favorite: record.favorite,
    }
}

fn spawn_input_reader(cmd_tx: mpsc::Sender<Command>) {
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if let Some(command) = parse_command(&line) {
                if cmd_tx.send(command).is_err() {
                    return;
                }
            }
        }
        let _ = cmd_tx.send(Command::Quit);
    });
}

struct Session {
    state: AppState,
}

impl Session {
    fn new(state: AppState) -> Self {
        Self { state }
    }

    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        for effect in effects {
            match effect {
                Effect::Notify(notice) => viewer_info!("Notice: {}", notice),
            }
        }
        let was_dirty = state.consume_dirty();
        self.state = state;
        if was_dirty {
            self.render();
        }
    }

    fn render(&self) {
        let text = render(&self.state.view(), &format_clock(&Local::now()));
        let mut out = io::stdout().lock();
        let _ = out.write_all(text.as_bytes());
        let _ = out.flush();
    }
}
