use std::collections::VecDeque;

use dioxus::prelude::*;

use crate::core::format::{self, format_percent};
use crate::core::storage::{flush_banner, CsvLog};
use crate::core::timing::{self, Tick};
use crate::views::ExitHandler;

use super::config::NBACK_LOG_FILE;
use super::engine::{Command, NBackSession, Phase, Scoreboard};
use super::metrics::BehaviorCounters;
use super::stimulus::{GridPos, Stimulus};
use super::summary::SessionSummary;

/// Frame period of the session loop (~60 Hz).
const TICK_MS: u64 = 16;
/// How long a feedback bubble stays up.
const FEEDBACK_MS: f64 = 1_200.0;

#[component]
pub fn NBackView() -> Element {
    let session = use_signal(NBackSession::default);
    let frame = use_signal(Tick::capture);
    let last_error = use_signal(|| Option::<String>::None);
    let exit = try_use_context::<ExitHandler>();

    let coroutine = use_coroutine(move |mut rx: UnboundedReceiver<Command>| {
        let mut session = session;
        let mut frame = frame;
        let mut last_error = last_error;

        async move {
            let mut sink = match CsvLog::in_log_dir(NBACK_LOG_FILE) {
                Ok(log) => {
                    tracing::info!(path = %log.path().display(), "n-back log ready");
                    Some(log)
                }
                Err(err) => {
                    tracing::error!(error = %err, "n-back log unavailable");
                    last_error.set(Some(format!("Trials will not be saved: {err}")));
                    None
                }
            };
            let mut queued: VecDeque<Command> = VecDeque::new();

            loop {
                timing::sleep_ms(TICK_MS).await;
                while let Ok(Some(command)) = rx.try_next() {
                    queued.push_back(command);
                }

                let tick = Tick::capture();
                let input = queued.pop_front();
                let step = session.with_mut(|s| s.advance(tick, input));

                if let Some(log) = sink.as_mut() {
                    let banner = flush_banner(&step.flush(log), "trial");
                    if *last_error.peek() != banner {
                        last_error.set(banner);
                    }
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

    let send = move |command: Command| coroutine.send(command);

    let snapshot = session();
    let now = frame().now;
    let error_message = last_error();

    let feedback = snapshot
        .feedback
        .as_ref()
        .filter(|f| now.since(f.at) < FEEDBACK_MS)
        .cloned();

    let body = match snapshot.phase {
        Phase::Instructions => rsx! { Instructions { on_command: send } },
        Phase::Practice => rsx! {
            PracticePanel {
                trials: snapshot.practice_trials.clone(),
                index: snapshot.practice_index,
                on_command: send,
            }
        },
        Phase::Playing | Phase::Break => {
            let in_break = snapshot.phase == Phase::Break;
            let duration = if in_break {
                snapshot.config.inter_stimulus_interval_ms
            } else {
                snapshot.config.stimulus_duration_ms
            } as f64;
            let remaining = snapshot.remaining_ms(now);
            let progress = if duration > 0.0 { remaining / duration } else { 0.0 };
            let reference = snapshot.reference_stimulus().cloned();
            rsx! {
                div { class: "nback-board",
                    ReferenceCard { stimulus: reference, n_back: snapshot.config.n_back }
                    div { class: "nback-board__center",
                        StimulusGrid {
                            stimulus: snapshot.current_stimulus().cloned(),
                            highlight: in_break,
                        }
                        TimerBar { progress, remaining_ms: remaining }
                    }
                    InfoPanel { board: snapshot.scoreboard() }
                }
            }
        }
        Phase::Finished => rsx! {
            FinalSummary {
                board: snapshot.scoreboard(),
                stimuli: snapshot.stimuli.clone(),
                counters: snapshot.counters.clone(),
                session_id: snapshot.session_id.clone(),
            }
        },
    };

    rsx! {
        article {
            class: "task task-nback",
            tabindex: 0,
            autofocus: true,
            onmounted: move |evt| async move {
                let _ = evt.set_focus(true).await;
            },
            onkeydown: move |evt| {
                let key = evt.key().to_string();
                evt.prevent_default();
                send(command_for_key(&key));
            },

            {body}

            if let Some(feedback) = feedback {
                div {
                    class: if feedback.positive { "nback-feedback nback-feedback--good" } else { "nback-feedback nback-feedback--bad" },
                    "{feedback.text}"
                }
            }

            if let Some(err) = error_message {
                div { class: "task__error", "⚠️ {err}" }
            }
        }
    }
}

/// Keyboard layout: Space claims a match, Enter starts, P opens practice, Escape exits.
pub(crate) fn command_for_key(key: &str) -> Command {
    match key.to_lowercase().as_str() {
        " " | "space" | "spacebar" => Command::Press,
        "enter" => Command::Start,
        "p" => Command::Practice,
        "escape" | "esc" => Command::Exit,
        _ => Command::OtherKey,
    }
}

#[component]
fn Instructions(on_command: EventHandler<Command>) -> Element {
    let examples = [
        ("Trial 1: 'A' in top-left", "First trial, do nothing", false),
        ("Trial 2: 'B' in center", "Do nothing (doesn't match trial 1)", false),
        ("Trial 3: 'B' in center", "PRESS SPACE! (matches trial 2 exactly)", true),
        ("Trial 4: 'B' in top-right", "Do nothing (same letter, wrong position)", false),
        ("Trial 5: 'C' in center", "Do nothing (wrong letter, even if same position)", false),
    ];

    rsx! {
        section { class: "nback-instructions",
            h2 { "N-Back Challenge" }
            p { class: "nback-instructions__rule",
                "Press SPACE when BOTH the letter AND the position match the previous trial."
            }
            ul { class: "nback-instructions__examples",
                for (trial, action, press) in examples {
                    li {
                        span { class: "nback-instructions__trial", "{trial}" }
                        span {
                            class: if press { "nback-instructions__action nback-instructions__action--press" } else { "nback-instructions__action" },
                            " → {action}"
                        }
                    }
                }
            }
            p { class: "nback-instructions__hint",
                "Same letter in a different position, or a different letter in the same position, is NOT a match."
            }
            div { class: "task__controls",
                button {
                    r#type: "button",
                    class: "button",
                    onclick: move |_| on_command.call(Command::Practice),
                    "Practice (P)"
                }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| on_command.call(Command::Start),
                    "Start (Enter)"
                }
            }
        }
    }
}

#[component]
fn PracticePanel(trials: Vec<Stimulus>, index: usize, on_command: EventHandler<Command>) -> Element {
    let total = trials.len();

    let Some(current) = trials.get(index).cloned() else {
        return rsx! {
            section { class: "nback-practice nback-practice--done",
                h2 { "Practice complete!" }
                p { "Press ENTER to start the real game." }
                button {
                    r#type: "button",
                    class: "button button--primary",
                    onclick: move |_| on_command.call(Command::Start),
                    "Start"
                }
            }
        };
    };

    let previous = index.checked_sub(1).and_then(|i| trials.get(i)).cloned();
    let step = index + 1;
    let current_label = describe(&current);
    let previous_label = previous.as_ref().map(describe);

    rsx! {
        section { class: "nback-practice",
            h2 { "Practice {step}/{total}" }
            StimulusGrid { stimulus: Some(current.clone()), highlight: false }
            div { class: "nback-practice__explanation",
                p { class: "nback-practice__context", "Current: {current_label}" }
                if let Some(prev) = previous_label {
                    p { class: "nback-practice__context", "Previous: {prev}" }
                }
                p {
                    class: if current.is_match { "nback-practice__tip nback-practice__tip--press" } else { "nback-practice__tip" },
                    "{current.explanation}"
                }
            }
            p { class: "task__note",
                "Press SPACE if you think this is a match, or any other key to continue."
            }
        }
    }
}

fn describe(stimulus: &Stimulus) -> String {
    format!(
        "'{}' at position ({}, {})",
        stimulus.letter, stimulus.position.col, stimulus.position.row
    )
}

#[component]
fn StimulusGrid(stimulus: Option<Stimulus>, highlight: bool) -> Element {
    let cells = GridPos::all().map(|pos| {
        let here = stimulus.as_ref().filter(|s| s.position == pos);
        let class = match here {
            Some(s) if highlight && s.is_correct() => "nback-grid__cell nback-grid__cell--correct",
            Some(_) if highlight => "nback-grid__cell nback-grid__cell--wrong",
            Some(_) => "nback-grid__cell nback-grid__cell--active",
            None => "nback-grid__cell",
        };
        let letter = here.map(|s| s.letter.to_string()).unwrap_or_default();
        (pos, class, letter)
    });

    rsx! {
        div { class: "nback-grid",
            for (pos, class, letter) in cells {
                div { key: "{pos.col}-{pos.row}", class: "{class}", "{letter}" }
            }
        }
    }
}

#[component]
fn TimerBar(progress: f64, remaining_ms: f64) -> Element {
    let tone = if progress > 0.6 {
        "timer-bar__fill--calm"
    } else if progress > 0.3 {
        "timer-bar__fill--warn"
    } else {
        "timer-bar__fill--urgent"
    };
    let width = (progress.clamp(0.0, 1.0) * 100.0).round();
    let seconds = remaining_ms / 1000.0;

    rsx! {
        div { class: "timer-bar",
            div { class: "timer-bar__fill {tone}", style: "width: {width}%" }
            span { class: "timer-bar__label", "{seconds:.1}s" }
        }
    }
}

#[component]
fn ReferenceCard(stimulus: Option<Stimulus>, n_back: usize) -> Element {
    let heading = if n_back == 1 {
        "Previous trial".to_string()
    } else {
        format!("{n_back} trials back")
    };

    rsx! {
        aside { class: "nback-reference",
            h3 { class: "nback-reference__header", "{heading}" }
            if let Some(reference) = stimulus {
                p { class: "nback-reference__letter", "{reference.letter}" }
                p { class: "nback-reference__pos", {reference.position.label()} }
                div { class: "nback-reference__mini",
                    for pos in GridPos::all() {
                        div {
                            key: "{pos.col}-{pos.row}",
                            class: if pos == reference.position { "nback-reference__dot nback-reference__dot--on" } else { "nback-reference__dot" },
                        }
                    }
                }
            } else {
                p { class: "task__note", "Nothing to compare yet." }
            }
        }
    }
}

#[component]
fn InfoPanel(board: Scoreboard) -> Element {
    let fill = if board.trial_count > 0 {
        (board.trial_number as f64 / board.trial_count as f64 * 100.0).round()
    } else {
        0.0
    };
    let score_class = if board.score >= 0 {
        "nback-info__score"
    } else {
        "nback-info__score nback-info__score--negative"
    };

    rsx! {
        aside { class: "nback-info",
            h3 { class: "nback-info__title", "{board.n_back}-Back" }
            p { "Trial {board.trial_number}/{board.trial_count}" }
            div { class: "nback-info__progress",
                div { class: "nback-info__progress-fill", style: "width: {fill}%" }
            }
            div { class: "{score_class}", "Score: {board.score}" }
            ul { class: "nback-info__stats",
                li { class: "stat stat--good", "Hits: {board.hits}" }
                li { class: "stat stat--bad", "Misses: {board.misses}" }
                li { class: "stat stat--bad", "False Alarms: {board.false_alarms}" }
                li { class: "stat stat--good", "Correct Rejections: {board.correct_rejections}" }
            }
            ul { class: "nback-info__rules",
                li { "Press SPACE for match" }
                li { "Both letter & position must match" }
                li { "+{board.hit_points} hit, -{board.error_penalty} miss/alarm" }
            }
        }
    }
}

#[component]
fn FinalSummary(
    board: Scoreboard,
    stimuli: Vec<Stimulus>,
    counters: BehaviorCounters,
    session_id: String,
) -> Element {
    let summary = SessionSummary::from_stimuli(&stimuli);
    let accuracy = format_percent(board.accuracy());
    let accuracy_class = if summary.is_strong() {
        "nback-final__accuracy nback-final__accuracy--good"
    } else {
        "nback-final__accuracy nback-final__accuracy--low"
    };
    let d_prime = format!("{:.2}", summary.d_prime);
    let criterion = format!("{:.2}", summary.criterion);
    let median_rt = format::format_ms(summary.median_hit_rt_ms);

    rsx! {
        section { class: "nback-final",
            h2 { "Session Complete!" }
            p { class: "nback-final__score", "Final Score: {board.score}" }
            p { class: "{accuracy_class}", "Accuracy: {accuracy}" }
            ul { class: "nback-final__counts",
                li { "Hits: {board.hits}" }
                li { "Misses: {board.misses}" }
                li { "False Alarms: {board.false_alarms}" }
                li { "Correct Rejections: {board.correct_rejections}" }
            }
            ul { class: "nback-final__indices",
                li { "d′: {d_prime}" }
                li { "Criterion: {criterion}" }
                li { "Median hit RT: {median_rt}" }
                li { "Attention lapses: {counters.attention_lapses}" }
                li { "Premature responses: {counters.premature_responses}" }
            }
            p { class: "task__note", "Session {session_id}. Press ESC to exit." }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_map_to_commands() {
        assert_eq!(command_for_key(" "), Command::Press);
        assert_eq!(command_for_key("Enter"), Command::Start);
        assert_eq!(command_for_key("P"), Command::Practice);
        assert_eq!(command_for_key("p"), Command::Practice);
        assert_eq!(command_for_key("Escape"), Command::Exit);
        assert_eq!(command_for_key("x"), Command::OtherKey);
        assert_eq!(command_for_key("ArrowLeft"), Command::OtherKey);
    }
}
