use std::collections::VecDeque;

use dioxus::prelude::*;
use rand::Rng;

use crate::core::audio::SoundCue;
use crate::core::storage::{flush_banner, CsvLog};
use crate::core::timing::{self, Tick};
use crate::views::ExitHandler;

use super::config::ALIEN_LOG_FILE;
use super::engine::{AlienCommand, AlienEffect, AlienGame, AlienKind, AlienPhase};

const TICK_MS: u64 = 16;
const STAR_COUNT: usize = 80;

#[component]
pub fn AlienView() -> Element {
    let game = use_signal(AlienGame::default);
    let frame = use_signal(Tick::capture);
    let last_error = use_signal(|| Option::<String>::None);
    let exit = try_use_context::<ExitHandler>();
    let laser = try_use_context::<SoundCue>().unwrap_or_default();
    let stars = use_hook(|| {
        let mut rng = rand::thread_rng();
        (0..STAR_COUNT)
            .map(|_| (rng.gen_range(0.0..100.0), rng.gen_range(0.0..100.0)))
            .collect::<Vec<(f64, f64)>>()
    });

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<AlienCommand>| {
        let mut game = game;
        let mut frame = frame;
        let mut last_error = last_error;
        let laser = laser.clone();

        async move {
            let mut sink = match CsvLog::in_log_dir(ALIEN_LOG_FILE) {
                Ok(log) => Some(log),
                Err(err) => {
                    tracing::error!(error = %err, "alien log unavailable");
                    last_error.set(Some(format!("Responses will not be saved: {err}")));
                    None
                }
            };
            let mut queued: VecDeque<AlienCommand> = VecDeque::new();

            loop {
                timing::sleep_ms(TICK_MS).await;
                while let Ok(Some(command)) = rx.try_next() {
                    queued.push_back(command);
                }

                let tick = Tick::capture();
                let input = queued.pop_front();
                let step = game.with_mut(|g| g.advance(tick, input));

                if let Some(log) = sink.as_mut() {
                    let banner = flush_banner(&step.flush(log), "response");
                    if *last_error.peek() != banner {
                        last_error.set(banner);
                    }
                }
                if step.effects.contains(&AlienEffect::Shot) {
                    laser.play();
                }
                if step.wants_exit() {
                    match exit {
                        Some(handler) => handler.0.call(()),
                        None => tracing::info!("exit requested with no handler installed"),
                    }
                }

                frame.set(tick);
            }
        }
    });

    let snapshot = game();
    let now = frame().now;
    let error_message = last_error();
    let size = snapshot.config.alien_size;
    let width = snapshot.config.field_width;
    let height = snapshot.config.field_height;
    let seconds_left = (snapshot.remaining_ms(now) / 1000.0).ceil();

    rsx! {
        article {
            class: "task task-alien",
            tabindex: 0,
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| {
                let key = evt.key().to_string().to_lowercase();
                match key.as_str() {
                    "enter" | " " => coroutine.send(AlienCommand::Start),
                    "escape" => coroutine.send(AlienCommand::Exit),
                    _ => {}
                }
            },

            div { class: "alien-scoreboard",
                "Score: {snapshot.score} | Hits: {snapshot.hits} | Misses: {snapshot.misses}"
                span { class: "alien-scoreboard__clock", "{seconds_left}s" }
            }

            div {
                class: "alien-field",
                style: "width: {width}px; height: {height}px",
                onmousedown: move |evt| {
                    let point = evt.element_coordinates();
                    coroutine.send(AlienCommand::Shoot { x: point.x, y: point.y });
                },

                for (i, (sx, sy)) in stars.iter().copied().enumerate() {
                    div { key: "star-{i}", class: "alien-field__star", style: "left: {sx}%; top: {sy}%" }
                }

                for alien in snapshot.aliens.iter() {
                    div {
                        key: "{alien.id}",
                        class: match (alien.exploding_since.is_some(), alien.kind) {
                            (true, _) => "alien alien--exploding",
                            (false, AlienKind::Go) => "alien alien--go",
                            (false, AlienKind::NoGo) => "alien alien--nogo",
                        },
                        style: "left: {alien.x}px; top: {alien.y}px; width: {size}px; height: {size}px",
                    }
                }

                match snapshot.phase {
                    AlienPhase::Ready => rsx! {
                        div { class: "alien-overlay",
                            h2 { "Alien Defense" }
                            p { "Shoot the RED aliens. Let the GREEN aliens pass." }
                            button {
                                r#type: "button",
                                class: "button button--primary",
                                onmousedown: move |evt| evt.stop_propagation(),
                                onclick: move |_| coroutine.send(AlienCommand::Start),
                                "Start"
                            }
                        }
                    },
                    AlienPhase::Finished => rsx! {
                        div { class: "alien-overlay",
                            h2 { "Game Over! Final Score: {snapshot.score}" }
                            button {
                                r#type: "button",
                                class: "button button--primary",
                                onmousedown: move |evt| evt.stop_propagation(),
                                onclick: move |_| coroutine.send(AlienCommand::Start),
                                "Play again"
                            }
                        }
                    },
                    AlienPhase::Playing => rsx! {},
                }
            }

            if let Some(err) = error_message {
                div { class: "task__error", "⚠️ {err}" }
            }
        }
    }
}
