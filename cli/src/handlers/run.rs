use std::{
    sync::{Arc, Mutex},
    time::{Duration, Instant},
};

use chatgate::{ChatMessage, ChatRequest, ChatResponse};
use console::Style;
use indicatif::{ProgressBar, ProgressStyle};
use inquire::Text;
use tokio::{runtime::Runtime, sync::Notify};

use crate::{
    error::CliError,
    server::{BackendSettings, connect_gateway},
};

fn format_reply(
    reply: &ChatResponse,
    elapsed: Duration,
) -> String {
    let style_stats = Style::new().bold();
    let stats_info = style_stats
        .apply_to(format!("{}, {:.3}s", reply.model, elapsed.as_secs_f64()));

    format!("{}\n\n{}", reply.response, stats_info)
}

/// Ctrl-C target for the reply currently being awaited. Every turn gets its
/// own `Notify`, so an interrupt that arrives between turns is dropped
/// instead of cancelling the next one.
#[derive(Clone, Default)]
pub struct TurnInterrupt {
    current: Arc<Mutex<Option<Arc<Notify>>>>,
}

impl TurnInterrupt {
    pub fn begin(&self) -> Arc<Notify> {
        let notify = Arc::new(Notify::new());
        if let Ok(mut current) = self.current.lock() {
            *current = Some(notify.clone());
        }
        notify
    }

    pub fn finish(&self) {
        if let Ok(mut current) = self.current.lock() {
            current.take();
        }
    }

    pub fn interrupt(&self) {
        let pending = self.current.lock().ok().and_then(|mut current| current.take());
        if let Some(notify) = pending {
            notify.notify_one();
        }
    }
}

/// Terminal chat. History lives only for the lifetime of the process and is
/// sent along with every turn.
pub fn handle_run(
    model: String,
    settings: BackendSettings,
    system_prompt: Option<String>,
) -> Result<(), CliError> {
    let runtime = Runtime::new().map_err(CliError::Runtime)?;
    let gateway = runtime.block_on(connect_gateway(&settings))?;

    let turn_interrupt = TurnInterrupt::default();
    let turn_interrupt_for_ctrlc = turn_interrupt.clone();
    ctrlc::set_handler(move || turn_interrupt_for_ctrlc.interrupt())?;

    let style_dim = Style::new().dim();
    let style_error = Style::new().red();
    let mut history: Vec<ChatMessage> =
        system_prompt.map(ChatMessage::system).into_iter().collect();

    loop {
        let input =
            match Text::new("").with_placeholder("Send a message").prompt() {
                Ok(input) => input,
                Err(_) => {
                    break;
                },
            };
        if input.trim().is_empty() {
            continue;
        }

        let request =
            ChatRequest::new(model.clone(), input.clone(), Some(history.clone()));

        let progress_bar = ProgressBar::new_spinner();
        progress_bar.enable_steady_tick(Duration::from_millis(100));
        progress_bar.set_style(
            ProgressStyle::default_spinner()
                .template("{spinner:.green} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        progress_bar.set_message("Waiting for reply");

        let start_time = Instant::now();
        let interrupt = turn_interrupt.begin();
        let outcome = runtime.block_on(async {
            tokio::select! {
                result = gateway.chat(request) => Some(result),
                _ = interrupt.notified() => None,
            }
        });
        turn_interrupt.finish();
        progress_bar.finish_and_clear();

        match outcome {
            Some(Ok(reply)) => {
                println!("{}\n", format_reply(&reply, start_time.elapsed()));
                history.push(ChatMessage::user(input));
                history.push(ChatMessage::assistant(reply.response));
            },
            Some(Err(error)) => {
                println!("{}\n", style_error.apply_to(error.detail()));
            },
            None => {
                println!("{}\n", style_dim.apply_to("Interrupted"));
            },
        }
    }

    Ok(())
}
