// File: src/commands/replay.rs
// Purpose: `daan replay`: drive a page's form with a scripted event list

use std::fs;
use std::path::Path;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde_json::json;
use tracing::{info, warn};

use daan_client::{DaanClient, FileSessionStore, Outcome, SubmissionHandler};
use daan_forms::{render_page, Effect, FormController, FormEvent, Navigator, PageKind, Route, Submission};

use crate::config::Config;

/// Prints requested page transitions instead of performing them
struct TerminalNavigator;

impl Navigator for TerminalNavigator {
    fn navigate(&self, route: Route) {
        info!(route = %route, "navigate");
    }
}

/// Form after the script ran, plus the last submission it produced
pub struct Replay {
    pub form: FormController,
    pub submission: Option<Submission>,
}

pub fn replay(
    page: PageKind,
    events: Vec<FormEvent>,
    navigator: &dyn Navigator,
) -> Result<Replay> {
    let mut form = FormController::new(page);
    let mut submission = None;

    for (index, event) in events.into_iter().enumerate() {
        let effect = form
            .dispatch(event)
            .with_context(|| format!("event #{} rejected", index + 1))?;
        match effect {
            Some(Effect::Submit(accepted)) => submission = Some(accepted),
            Some(Effect::Navigate(route)) => navigator.navigate(route),
            None => {}
        }
    }

    Ok(Replay { form, submission })
}

pub fn load_events(path: &Path) -> Result<Vec<FormEvent>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read event script: {:?}", path))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse event script: {:?}", path))
}

pub async fn run(
    config: &Config,
    page: PageKind,
    events: &Path,
    html: bool,
    submit: bool,
) -> Result<()> {
    let navigator = TerminalNavigator;
    let Replay { form, submission } = replay(page, load_events(events)?, &navigator)?;

    if html {
        println!("{}", render_page(form.schema(), form.state()).into_string());
    } else {
        let report = json!({
            "page": page,
            "formValid": form.compute_form_valid(),
            "state": form.state(),
            "submitted": submission.is_some(),
        });
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    let Some(submission) = submission.filter(|_| submit) else {
        if submit {
            warn!(page = %page, "script did not produce an accepted submission");
        }
        return Ok(());
    };

    let client = DaanClient::new(&config.api.client_settings())?;
    let sessions = Arc::new(FileSessionStore::new(config.session.path.clone()));
    let handler = SubmissionHandler::new(client, sessions);

    match handler.handle(&submission, &navigator).await {
        Ok(Outcome::SignedUp(session)) => {
            info!(saved_at = %session.saved_at, "signed up");
            Ok(())
        }
        Ok(Outcome::Logged) => Ok(()),
        Err(err) => {
            eprintln!("{}", err.user_message());
            Err(err.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Spy(Mutex<Vec<Route>>);

    impl Navigator for Spy {
        fn navigate(&self, route: Route) {
            self.0.lock().unwrap().push(route);
        }
    }

    #[test]
    fn test_replay_admin_script() {
        let script = r#"[
            {"type": "set_value", "field": "accessCode", "value": "letmein"},
            {"type": "set_value", "field": "email", "value": "ops@daan.org"},
            {"type": "set_value", "field": "password", "value": "Str0ng!Pass"},
            {"type": "set_value", "field": "confirmPassword", "value": "Str0ng!Pass"},
            {"type": "set_value", "field": "enable2FA", "value": true},
            {"type": "submit"}
        ]"#;
        let events: Vec<FormEvent> = serde_json::from_str(script).unwrap();

        let replay = replay(PageKind::Admin, events, &Spy::default()).unwrap();
        let submission = replay.submission.expect("accepted");
        assert!(submission.flag("enable2FA"));
    }

    #[test]
    fn test_replay_reports_event_index() {
        let events = vec![
            FormEvent::set_value("email", "a@b.co"),
            FormEvent::blur("nickname"),
        ];
        let err = replay(PageKind::Donor, events, &Spy::default())
            .err()
            .expect("unknown field");
        assert_eq!(err.to_string(), "event #2 rejected");
    }

    #[test]
    fn test_replay_forwards_navigation() {
        let spy = Spy::default();
        replay(PageKind::Ngo, vec![FormEvent::Back], &spy).unwrap();
        assert_eq!(*spy.0.lock().unwrap(), vec![Route::Home]);
    }

    #[test]
    fn test_load_events_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("events.json");
        fs::write(&path, r#"[{"type":"blur","field":"email"},{"type":"back"}]"#).unwrap();

        let events = load_events(&path).unwrap();
        assert_eq!(events, vec![FormEvent::blur("email"), FormEvent::Back]);
    }
}
