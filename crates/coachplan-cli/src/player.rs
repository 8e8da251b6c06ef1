//! Interactive playback loop.

use anyhow::Result;
use coachplan_core::{
    display::{StepContent, TimerLine},
    session::{Outcome, Playback, Session, TimerState},
};
use log::{debug, info};

use crate::{keyboard::KeyboardScope, renderer::TerminalRenderer};

const KEY_HELP: &str = "←/→ step · 1-9 jump · space start/pause · r reset · m minimize · esc close";

/// Runs a session until it is closed from the keyboard.
///
/// Key presses and timer ticks are the only two event sources; the screen
/// is redrawn after each one that changes something.
pub async fn run(mut playback: Playback, renderer: &TerminalRenderer) -> Result<()> {
    let (keyboard, mut keys) = KeyboardScope::start()?;
    renderer.render_frame(&frame(playback.session()))?;

    loop {
        tokio::select! {
            command = keys.recv() => {
                let Some(command) = command else {
                    debug!("Keyboard closed");
                    break;
                };
                match playback.dispatch(command) {
                    Outcome::Closed => break,
                    Outcome::Unchanged => {}
                    Outcome::Moved | Outcome::TimerChanged => {
                        renderer.render_frame(&frame(playback.session()))?;
                    }
                }
            }
            state = playback.next_tick() => {
                if state == TimerState::Expired {
                    info!("Timer expired on step {}", playback.session().current_step().id);
                }
                renderer.render_frame(&frame(playback.session()))?;
            }
        }
    }

    playback.close();
    drop(keyboard);
    renderer.render_frame("")?;
    Ok(())
}

/// Full screen for the current step: progress, content, timer and key help.
fn frame(session: &Session) -> String {
    let step = session.current_step();
    let mut screen = format!(
        "*{} · step {} of {}*\n\n{}\n",
        session.plan().display_title(),
        session.index() + 1,
        session.steps().len(),
        StepContent::new(session.plan(), step)
    );

    if session.current_activity().is_some() {
        screen.push_str(&format!("**{}**\n\n", TimerLine(session.timer())));
    }
    screen.push_str(KEY_HELP);
    screen
}

#[cfg(test)]
mod tests {
    use coachplan_core::{
        models::{Activity, DetailedActivity, Plan},
        session::Command,
    };

    use super::*;

    fn session() -> Session {
        Session::open(Plan {
            title: Some("Agility".to_string()),
            warm_up: Some(vec![Activity::Detailed(DetailedActivity {
                name: "Ladder".to_string(),
                duration: "2 minutes".to_string(),
                ..Default::default()
            })]),
            ..Default::default()
        })
    }

    #[test]
    fn test_overview_frame_has_no_timer() {
        let output = frame(&session());
        assert!(output.starts_with("*Agility · step 1 of 3*"));
        assert!(output.contains("# Session Overview"));
        assert!(!output.contains("⏱"));
        assert!(output.ends_with(KEY_HELP));
    }

    #[test]
    fn test_activity_frame_shows_timer() {
        let mut session = session();
        session.apply(Command::Next);
        let output = frame(&session);
        assert!(output.contains("step 2 of 3"));
        assert!(output.contains("### Ladder (2 minutes)"));
        assert!(output.contains("**⏱ 02:00 / 02:00 (ready)**"));
    }
}
