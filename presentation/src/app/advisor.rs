//! Advisor reactor
//!
//! [`AdvisorApp`] owns the selection, the query, the results view and the
//! theme. Events are handled one at a time; the network call and the
//! redirect delays run as tasks that post their completion back as events.

use super::event::AppEvent;
use super::repl::HELP_TEXT;
use crate::html::{DocumentParts, render_document};
use crate::notify::{ConsoleNotifier, NotificationLevel, Notifier};
use crate::output::console::ConsoleFormatter;
use crate::view::{ConcernSelector, ResultsView};
use millet_application::{
    FetchError, FetchInput, FetchOutcome, FetchProgress, FetchRecommendationsUseCase,
    MemoryThemeStore, NoProgress, REDIRECTING_LABEL, RecommendationGateway,
    RedirectProductUseCase, ThemeStore,
};
use millet_domain::ThemePreference;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender};
use tracing::{debug, error, info};

/// Interactive (or one-shot) advisor session
pub struct AdvisorApp<G: RecommendationGateway + 'static> {
    selector: ConcernSelector,
    query: String,
    results: ResultsView,
    theme: ThemePreference,
    fetch: Arc<FetchRecommendationsUseCase<G>>,
    redirect: Arc<RedirectProductUseCase>,
    gateway: Arc<G>,
    theme_store: Arc<dyn ThemeStore>,
    notifier: Arc<dyn Notifier>,
    progress: Arc<dyn FetchProgress>,
    events: UnboundedSender<AppEvent>,
    /// Print views to stdout after they change
    echo: bool,
    /// Stop after the first completed fetch, optionally exporting HTML
    one_shot: Option<Option<PathBuf>>,
    last_error: Option<FetchError>,
}

impl<G: RecommendationGateway + 'static> AdvisorApp<G> {
    pub fn new(
        fetch: FetchRecommendationsUseCase<G>,
        redirect: RedirectProductUseCase,
        gateway: Arc<G>,
        events: UnboundedSender<AppEvent>,
    ) -> Self {
        Self {
            selector: ConcernSelector::new(),
            query: String::new(),
            results: ResultsView::new(),
            theme: ThemePreference::default(),
            fetch: Arc::new(fetch),
            redirect: Arc::new(redirect),
            gateway,
            theme_store: Arc::new(MemoryThemeStore::default()),
            notifier: Arc::new(ConsoleNotifier),
            progress: Arc::new(NoProgress),
            events,
            echo: true,
            one_shot: None,
            last_error: None,
        }
    }

    /// Use `store` for the theme, loading the saved preference now
    pub fn with_theme_store(mut self, store: Arc<dyn ThemeStore>) -> Self {
        self.theme = store.load();
        self.theme_store = store;
        self
    }

    pub fn with_notifier(mut self, notifier: Arc<dyn Notifier>) -> Self {
        self.notifier = notifier;
        self
    }

    pub fn with_progress(mut self, progress: Arc<dyn FetchProgress>) -> Self {
        self.progress = progress;
        self
    }

    pub fn with_echo(mut self, echo: bool) -> Self {
        self.echo = echo;
        self
    }

    /// Exit after the first fetch completes; write the page to `html` if set
    pub fn one_shot(mut self, html: Option<PathBuf>) -> Self {
        self.one_shot = Some(html);
        self
    }

    // ==================== Accessors ====================

    pub fn selector(&self) -> &ConcernSelector {
        &self.selector
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &ResultsView {
        &self.results
    }

    pub fn theme(&self) -> ThemePreference {
        self.theme
    }

    pub fn is_loading(&self) -> bool {
        self.fetch.is_loading()
    }

    // ==================== Reactor ====================

    /// Handle events until `Quit` (or, in one-shot mode, the first completed
    /// fetch). Returns the error of the last failed fetch, if the most recent
    /// one failed.
    pub async fn run(mut self, mut events: UnboundedReceiver<AppEvent>) -> Option<FetchError> {
        if self.one_shot.is_none() && self.echo {
            self.print_welcome();
        }
        while let Some(event) = events.recv().await {
            if !self.handle(event) {
                break;
            }
        }
        info!("Advisor session finished");
        self.last_error
    }

    /// Handle one event. Returns `false` when the session should end.
    pub fn handle(&mut self, event: AppEvent) -> bool {
        debug!("Dispatching {:?}", event);
        match event {
            AppEvent::Toggle(tag) => {
                self.selector.toggle(tag);
                self.echo_tags();
            }
            AppEvent::Remove(tag) => {
                self.selector.remove(tag);
                self.echo_tags();
            }
            AppEvent::ShowConcerns => {
                if self.echo {
                    println!("{}", ConsoleFormatter::format_board(&self.selector));
                }
            }
            AppEvent::Fetch { query } => {
                if let Some(query) = query {
                    self.query = query;
                }
                self.spawn_fetch();
            }
            AppEvent::FetchFinished(result) => return self.on_fetch_finished(result),
            AppEvent::OpenProduct(index) => self.open_product(index),
            AppEvent::RedirectFinished { index, link } => {
                debug!("Redirect for card {} finished: {}", index, link.url);
            }
            AppEvent::ListMillets => self.spawn_list_millets(),
            AppEvent::MilletsListed(Ok(millets)) => {
                if self.echo {
                    println!("Millets known to the advisor:");
                    for millet in &millets {
                        println!("  - {}", millet);
                    }
                }
            }
            AppEvent::MilletsListed(Err(e)) => {
                error!("Error listing millets: {}", e);
                self.notifier.notify(
                    NotificationLevel::Error,
                    "Unable to list millets at the moment. Please try again later.",
                );
            }
            AppEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                self.theme_store.save(self.theme);
                self.notifier.notify(
                    NotificationLevel::Info,
                    &ConsoleFormatter::format_theme(self.theme),
                );
            }
            AppEvent::Save(path) => self.save_and_report(&path),
            AppEvent::Help => {
                if self.echo {
                    println!("{}", HELP_TEXT);
                }
            }
            AppEvent::Invalid(message) => {
                self.notifier.notify(NotificationLevel::Warning, &message);
            }
            AppEvent::Quit => {
                if self.echo {
                    println!("Bye!");
                }
                return false;
            }
        }
        true
    }

    fn spawn_fetch(&self) {
        let fetch = Arc::clone(&self.fetch);
        let progress = Arc::clone(&self.progress);
        let events = self.events.clone();
        let input = FetchInput::new(self.selector.state().clone(), self.query.clone());

        tokio::spawn(async move {
            let result = fetch.execute_with_progress(input, progress.as_ref()).await;
            let _ = events.send(AppEvent::FetchFinished(result));
        });
    }

    fn on_fetch_finished(&mut self, result: Result<FetchOutcome, FetchError>) -> bool {
        match result {
            Ok(FetchOutcome::Delivered(response)) => {
                self.last_error = None;
                self.results.render(&response);
                if self.echo {
                    println!("{}", ConsoleFormatter::format_results(&self.results));
                }
            }
            Ok(FetchOutcome::Skipped) => {
                debug!("Fetch skipped, another request is outstanding");
                return true;
            }
            Err(e) => {
                let level = if e.is_validation() {
                    NotificationLevel::Warning
                } else {
                    NotificationLevel::Error
                };
                self.notifier.notify(level, e.user_message());
                self.last_error = Some(e);
            }
        }

        match self.one_shot.take() {
            Some(html) => {
                if let Some(path) = html
                    && self.last_error.is_none()
                {
                    self.save_and_report(&path);
                }
                false
            }
            None => true,
        }
    }

    fn open_product(&mut self, index: usize) {
        let Some(binding) = self.results.binding(index) else {
            self.notifier.notify(
                NotificationLevel::Warning,
                &format!("There is no recommendation #{}", index + 1),
            );
            return;
        };
        if binding.control.is_disabled() {
            debug!("Product control {} is disabled, ignoring click", index);
            return;
        }

        if self.echo {
            println!("{} {}", binding.name, REDIRECTING_LABEL);
        }

        let redirect = Arc::clone(&self.redirect);
        let control = Arc::clone(&binding.control);
        let key = binding.key.clone();
        let events = self.events.clone();

        tokio::spawn(async move {
            let link = redirect.redirect(&key, control.as_ref()).await;
            let _ = events.send(AppEvent::RedirectFinished { index, link });
        });
    }

    fn spawn_list_millets(&self) {
        let gateway = Arc::clone(&self.gateway);
        let events = self.events.clone();
        tokio::spawn(async move {
            let result = gateway.list_millets().await;
            let _ = events.send(AppEvent::MilletsListed(result));
        });
    }

    /// Full page for the current state
    pub fn render_page(&self) -> String {
        let concerns = self.selector.board_html();
        let tags = self.selector.tags().to_html();
        let results = self.results.to_html();
        render_document(&DocumentParts {
            theme: self.theme,
            concerns: &concerns,
            tags: &tags,
            results: &results,
        })
    }

    pub fn save_page(&self, path: &Path) -> std::io::Result<()> {
        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, self.render_page())
    }

    fn save_and_report(&self, path: &Path) {
        match self.save_page(path) {
            Ok(()) => {
                info!("Saved page to {}", path.display());
                self.notifier.notify(
                    NotificationLevel::Success,
                    &format!("Saved to {}", path.display()),
                );
            }
            Err(e) => {
                error!("Failed to save page to {}: {}", path.display(), e);
                self.notifier.notify(
                    NotificationLevel::Error,
                    &format!("Could not save {}: {}", path.display(), e),
                );
            }
        }
    }

    fn echo_tags(&self) {
        if self.echo {
            println!(
                "Selected: {}",
                ConsoleFormatter::format_tags(self.selector.tags())
            );
        }
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Millet Advisor - Interactive         │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        println!("{}", ConsoleFormatter::format_board(&self.selector));
        println!("{}", HELP_TEXT);
        println!();
    }
}
