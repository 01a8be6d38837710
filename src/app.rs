//! Application state and core logic

use crate::config::TuiConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{validate, AppState, FieldKind, SplashState, SubmissionState, View};
use crate::webhook::{to_pairs, SheetsClient, WebhookClient};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Client for the Sheets webhook
    pub webhook: SheetsClient,
    /// Whether the app should quit
    quit: bool,
    /// Splash screen animation state
    pub splash_state: Option<SplashState>,
}

impl App {
    /// Create a new App instance
    pub fn new() -> Result<Self> {
        let config = match TuiConfig::load() {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!("Failed to load config, using defaults: {err}");
                TuiConfig::default()
            }
        };

        let webhook = SheetsClient::new(config.webhook_url.clone());
        let mut state = AppState::default();

        let splash_state = if config.skip_splash.unwrap_or(false) {
            None
        } else {
            state.current_view = View::Splash;
            Some(SplashState::new())
        };

        Ok(Self {
            state,
            webhook,
            quit: false,
            splash_state,
        })
    }

    /// Update splash animation state
    /// Returns true if animation is complete and we should transition
    pub fn update_splash(&mut self, terminal_height: u16) -> bool {
        if let Some(ref mut splash) = self.splash_state {
            splash.update(terminal_height);
            if splash.is_complete() {
                self.splash_state = None;
                self.state.go_to(View::Landing);
                return true;
            }
        }
        false
    }

    /// Check if in splash screen
    pub fn in_splash(&self) -> bool {
        matches!(self.state.current_view, View::Splash)
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// True when submissions will reach a real webhook endpoint
    pub fn webhook_configured(&self) -> bool {
        self.webhook.is_configured()
    }

    pub async fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        // Ctrl+C quits from anywhere
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.quit = true;
            return Ok(());
        }

        match self.state.current_view {
            View::Splash => self.handle_splash_key(key)?,
            View::Landing => self.handle_landing_key(key)?,
            View::Signup => self.handle_signup_key(key).await?,
            View::Privacy => self.handle_privacy_key(key)?,
        }

        Ok(())
    }

    /// Any key skips the splash; the next tick completes the transition
    fn handle_splash_key(&mut self, _key: KeyEvent) -> Result<()> {
        if let Some(ref mut splash) = self.splash_state {
            splash.skip();
        }
        Ok(())
    }

    /// Handle keys in the landing view
    fn handle_landing_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Enter => self.state.go_to(View::Signup),
            KeyCode::Char('1') => self.state.go_to(View::Landing),
            KeyCode::Char('2') => self.state.go_to(View::Signup),
            KeyCode::Char('3') => self.state.go_to(View::Privacy),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Char('d') => self.state.scroll_down_page(),
            KeyCode::Char('u') => self.state.scroll_up_page(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the privacy notice view
    fn handle_privacy_key(&mut self, key: KeyEvent) -> Result<()> {
        match key.code {
            KeyCode::Esc => self.state.go_to(View::Landing),
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('1') => self.state.go_to(View::Landing),
            KeyCode::Char('2') => self.state.go_to(View::Signup),
            KeyCode::Char('3') => self.state.go_to(View::Privacy),
            KeyCode::Down | KeyCode::Char('j') => self.state.scroll_down(),
            KeyCode::Up | KeyCode::Char('k') => self.state.scroll_up(),
            KeyCode::Char('d') => self.state.scroll_down_page(),
            KeyCode::Char('u') => self.state.scroll_up_page(),
            _ => {}
        }
        Ok(())
    }

    /// Handle keys in the sign-up view. Field values survive leaving the
    /// view; only a successful submission resets them.
    async fn handle_signup_key(&mut self, key: KeyEvent) -> Result<()> {
        let field = self.state.form.active_field();

        match key.code {
            KeyCode::Esc => self.state.go_to(View::Landing),
            KeyCode::Tab => self.state.form.next_field(),
            KeyCode::BackTab => self.state.form.prev_field(),

            // Submit shortcut works from any field
            KeyCode::Char('s') if key.modifiers.contains(SUBMIT_MODIFIER) => {
                self.submit().await;
            }

            // Up/Down move the option cursor inside a multi-select,
            // otherwise they move between fields
            KeyCode::Down => match field.kind() {
                FieldKind::MultiSelect => self.state.form.option_down(),
                _ => self.state.form.next_field(),
            },
            KeyCode::Up => match field.kind() {
                FieldKind::MultiSelect => self.state.form.option_up(),
                _ => self.state.form.prev_field(),
            },

            KeyCode::Left if field.kind() == FieldKind::Select => {
                self.state.form.cycle_prev();
                self.state.clear_field_error(field);
            }
            KeyCode::Right if field.kind() == FieldKind::Select => {
                self.state.form.cycle_next();
                self.state.clear_field_error(field);
            }

            KeyCode::Enter => match field.kind() {
                FieldKind::Button => self.submit().await,
                FieldKind::TextArea => self.state.form.push_newline(),
                FieldKind::Checkbox => {
                    self.state.form.toggle_active_option();
                    self.state.clear_field_error(field);
                }
                _ => self.state.form.next_field(),
            },

            KeyCode::Backspace => {
                if matches!(field.kind(), FieldKind::Text | FieldKind::TextArea) {
                    self.state.form.backspace();
                    self.state.clear_field_error(field);
                }
            }

            KeyCode::Char(c) => match (field.kind(), c) {
                (FieldKind::MultiSelect | FieldKind::Checkbox, ' ') => {
                    self.state.form.toggle_active_option();
                    self.state.clear_field_error(field);
                }
                (FieldKind::Select, ' ') => {
                    self.state.form.cycle_next();
                    self.state.clear_field_error(field);
                }
                (FieldKind::Text | FieldKind::TextArea, _) => {
                    self.state.form.push_char(c);
                    self.state.clear_field_error(field);
                }
                _ => {}
            },

            _ => {}
        }

        Ok(())
    }

    async fn submit(&mut self) {
        run_submission(&mut self.state, &self.webhook).await;
    }
}

/// Run the submission pipeline: validate, flatten, POST, settle the state.
///
/// At most one attempt is in flight at a time; the guard clears on every
/// exit path. Validation failure fills the per-field error map and never
/// touches the network. A failed POST keeps the form contents so the user
/// can retry; success resets the form to its defaults.
pub async fn run_submission(state: &mut AppState, client: &dyn WebhookClient) {
    if state.submission.is_submitting() {
        return;
    }

    if let Err(errors) = validate(&state.form) {
        tracing::debug!(fields = errors.len(), "Validation rejected the form");
        state.field_errors = errors;
        return;
    }

    state.field_errors.clear();
    state.submission = SubmissionState::Submitting;

    let pairs = to_pairs(&state.form);
    match client.submit(&pairs).await {
        Ok(()) => {
            state.form.reset();
            state.submission = SubmissionState::Submitted;
        }
        Err(err) => {
            state.submission = SubmissionState::Error(err.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::FieldId;
    use crate::webhook::{MockWebhookClient, WebhookError};

    fn valid_state() -> AppState {
        let mut state = AppState::default();
        state.form.name = "Ana Silva".to_string();
        state.form.email = "ana@exemplo.com".to_string();
        state.form.org_size = "Média (300–1000)".to_string();
        state.form.sector = "Grãos".to_string();
        state.form.timeline = "1–3 meses".to_string();
        state.form.accepts_beta = "Sim".to_string();
        state.form.price_range = "R$ 100–199/mês".to_string();
        state.form.goals = vec!["Relatórios automáticos".to_string()];
        state.form.pain_points = vec!["Retrabalho e planilhas paralelas".to_string()];
        state.form.modules = vec!["Fiscal & Financeiro".to_string()];
        state.form.previous_attempts = "Usamos planilhas e deu erro.".to_string();
        state.form.consent = true;
        state
    }

    mod submission_pipeline {
        use super::*;
        use pretty_assertions::assert_eq;

        #[tokio::test]
        async fn test_valid_form_posts_once_and_resets() {
            let mut state = valid_state();
            let mut client = MockWebhookClient::new();
            client
                .expect_submit()
                .withf(|pairs: &[(String, String)]| {
                    pairs.iter().any(|(k, v)| k == "nome" && v == "Ana Silva")
                        && pairs.iter().any(|(k, v)| k == "consent" && v == "true")
                })
                .times(1)
                .returning(|_| Ok(()));

            run_submission(&mut state, &client).await;

            assert_eq!(state.submission, SubmissionState::Submitted);
            assert_eq!(state.form.name, "");
            assert!(state.form.goals.is_empty());
            assert!(state.field_errors.is_empty());
        }

        #[tokio::test]
        async fn test_invalid_form_never_touches_the_network() {
            let mut state = AppState::default();
            let mut client = MockWebhookClient::new();
            client.expect_submit().times(0);

            run_submission(&mut state, &client).await;

            assert_eq!(state.submission, SubmissionState::Idle);
            assert!(!state.field_errors.is_empty());
        }

        #[tokio::test]
        async fn test_in_flight_guard_blocks_a_second_attempt() {
            let mut state = valid_state();
            state.submission = SubmissionState::Submitting;
            let mut client = MockWebhookClient::new();
            client.expect_submit().times(0);

            run_submission(&mut state, &client).await;

            assert_eq!(state.submission, SubmissionState::Submitting);
        }

        #[tokio::test]
        async fn test_webhook_failure_keeps_the_form_contents() {
            let mut state = valid_state();
            let mut client = MockWebhookClient::new();
            client
                .expect_submit()
                .times(1)
                .returning(|_| Err(WebhookError::status(500)));

            run_submission(&mut state, &client).await;

            assert_eq!(
                state.submission,
                SubmissionState::Error("Falha no webhook do Sheets".to_string())
            );
            assert_eq!(state.form.name, "Ana Silva");
            assert_eq!(state.form.goals.len(), 1);
        }

        #[tokio::test]
        async fn test_transport_failure_surfaces_its_message() {
            let mut state = valid_state();
            let mut client = MockWebhookClient::new();
            client
                .expect_submit()
                .times(1)
                .returning(|_| Err(WebhookError::transport("connection refused")));

            run_submission(&mut state, &client).await;

            assert_eq!(
                state.submission,
                SubmissionState::Error("connection refused".to_string())
            );
        }

        #[tokio::test]
        async fn test_retry_after_failure_can_succeed() {
            let mut state = valid_state();
            let mut failing = MockWebhookClient::new();
            failing
                .expect_submit()
                .times(1)
                .returning(|_| Err(WebhookError::status(502)));
            run_submission(&mut state, &failing).await;
            assert!(matches!(state.submission, SubmissionState::Error(_)));

            let mut succeeding = MockWebhookClient::new();
            succeeding.expect_submit().times(1).returning(|_| Ok(()));
            run_submission(&mut state, &succeeding).await;
            assert_eq!(state.submission, SubmissionState::Submitted);
        }
    }

    mod key_handling {
        use super::*;
        use pretty_assertions::assert_eq;

        fn plain(code: KeyCode) -> KeyEvent {
            KeyEvent::new(code, KeyModifiers::NONE)
        }

        fn app() -> App {
            let mut app = App::new().unwrap();
            app.splash_state = None;
            app.state.go_to(View::Landing);
            app
        }

        #[tokio::test]
        async fn test_ctrl_c_quits_from_any_view() {
            let mut app = app();
            app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))
                .await
                .unwrap();
            assert!(app.should_quit());
        }

        #[tokio::test]
        async fn test_digit_navigation_from_landing() {
            let mut app = app();
            app.handle_key(plain(KeyCode::Char('2'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Signup);

            app.handle_key(plain(KeyCode::Esc)).await.unwrap();
            assert_eq!(app.state.current_view, View::Landing);

            app.handle_key(plain(KeyCode::Char('3'))).await.unwrap();
            assert_eq!(app.state.current_view, View::Privacy);
        }

        #[tokio::test]
        async fn test_typing_lands_in_the_active_field() {
            let mut app = app();
            app.state.go_to(View::Signup);

            for c in ['A', 'n', 'a'] {
                app.handle_key(plain(KeyCode::Char(c))).await.unwrap();
            }

            assert_eq!(app.state.form.name, "Ana");
        }

        #[tokio::test]
        async fn test_digits_type_into_text_fields_instead_of_navigating() {
            let mut app = app();
            app.state.go_to(View::Signup);

            app.handle_key(plain(KeyCode::Char('3'))).await.unwrap();

            assert_eq!(app.state.current_view, View::Signup);
            assert_eq!(app.state.form.name, "3");
        }

        #[tokio::test]
        async fn test_editing_a_field_clears_only_its_error() {
            let mut app = app();
            app.state.go_to(View::Signup);
            app.state.field_errors.insert(FieldId::Name, "Informe seu nome");
            app.state
                .field_errors
                .insert(FieldId::Email, "E-mail inválido");

            app.handle_key(plain(KeyCode::Char('A'))).await.unwrap();

            assert!(!app.state.field_errors.contains_key(&FieldId::Name));
            assert!(app.state.field_errors.contains_key(&FieldId::Email));
        }

        #[tokio::test]
        async fn test_leaving_the_form_keeps_typed_values() {
            let mut app = app();
            app.state.go_to(View::Signup);
            app.handle_key(plain(KeyCode::Char('A'))).await.unwrap();

            app.handle_key(plain(KeyCode::Esc)).await.unwrap();
            app.handle_key(plain(KeyCode::Char('2'))).await.unwrap();

            assert_eq!(app.state.form.name, "A");
        }

        #[tokio::test]
        async fn test_space_toggles_an_option_in_a_multi_select() {
            let mut app = app();
            app.state.go_to(View::Signup);
            while app.state.form.active_field() != FieldId::Goals {
                app.state.form.next_field();
            }

            app.handle_key(plain(KeyCode::Char(' '))).await.unwrap();
            assert_eq!(app.state.form.goals.len(), 1);

            app.handle_key(plain(KeyCode::Char(' '))).await.unwrap();
            assert!(app.state.form.goals.is_empty());
        }

        #[tokio::test]
        async fn test_arrows_cycle_a_select_field() {
            let mut app = app();
            app.state.go_to(View::Signup);
            while app.state.form.active_field() != FieldId::OrgSize {
                app.state.form.next_field();
            }

            app.handle_key(plain(KeyCode::Right)).await.unwrap();
            assert_eq!(app.state.form.org_size, "Pequena (até 300)");

            app.handle_key(plain(KeyCode::Left)).await.unwrap();
            assert_eq!(app.state.form.org_size, "Grande (1000+)");
        }

        #[tokio::test]
        async fn test_splash_key_skips_the_animation() {
            let mut app = App::new().unwrap();
            app.splash_state = Some(SplashState::new());
            app.state.current_view = View::Splash;

            app.handle_key(plain(KeyCode::Enter)).await.unwrap();

            assert!(app.splash_state.as_ref().unwrap().is_complete());
            assert!(app.update_splash(24));
            assert_eq!(app.state.current_view, View::Landing);
        }
    }
}
