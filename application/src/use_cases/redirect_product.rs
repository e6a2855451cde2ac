//! Redirect Product use case
//!
//! Resolves a recommended millet to its storefront page and opens it after
//! a short delay, keeping the triggering control disabled meanwhile.

use crate::config::RedirectParams;
use crate::ports::interaction_logger::{InteractionEvent, InteractionLogger, NoInteractionLogger};
use crate::ports::navigator::{Navigator, RedirectControl};
use millet_domain::{LinkMatch, ProductCatalog, ProductLink};
use std::sync::Arc;
use tracing::info;

/// Caption shown on a control while its redirect is pending
pub const REDIRECTING_LABEL: &str = "Redirecting...";

/// Restores a disabled control when dropped
struct ControlGuard<'a> {
    control: &'a dyn RedirectControl,
}

impl<'a> ControlGuard<'a> {
    fn engage(control: &'a dyn RedirectControl) -> Self {
        control.disable(REDIRECTING_LABEL);
        Self { control }
    }
}

impl Drop for ControlGuard<'_> {
    fn drop(&mut self) {
        self.control.restore();
    }
}

/// Use case for redirecting to a product page
pub struct RedirectProductUseCase {
    catalog: ProductCatalog,
    navigator: Arc<dyn Navigator>,
    logger: Arc<dyn InteractionLogger>,
    params: RedirectParams,
}

impl RedirectProductUseCase {
    pub fn new(catalog: ProductCatalog, navigator: Arc<dyn Navigator>) -> Self {
        Self {
            catalog,
            navigator,
            logger: Arc::new(NoInteractionLogger),
            params: RedirectParams::default(),
        }
    }

    pub fn with_logger(mut self, logger: Arc<dyn InteractionLogger>) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_params(mut self, params: RedirectParams) -> Self {
        self.params = params;
        self
    }

    pub fn catalog(&self) -> &ProductCatalog {
        &self.catalog
    }

    /// Resolve a millet name without navigating.
    pub fn resolve(&self, name: &str) -> ProductLink {
        self.catalog.resolve(name)
    }

    /// Resolve `name`, then open its page after the configured delay.
    ///
    /// `control` is disabled for the whole delay window and restored on
    /// every path, including when the returned future is dropped early.
    pub async fn redirect(&self, name: &str, control: &dyn RedirectControl) -> ProductLink {
        let link = self.catalog.resolve(name);
        self.track(name, &link);

        let _restore = ControlGuard::engage(control);

        tokio::time::sleep(self.params.open_delay).await;
        self.navigator.open(&link.url);

        tokio::time::sleep(self.params.restore_delay).await;
        link
    }

    fn track(&self, name: &str, link: &ProductLink) {
        let matched = match &link.matched {
            LinkMatch::Exact => "exact".to_string(),
            LinkMatch::Partial(key) => format!("partial:{}", key),
            LinkMatch::Fallback => "fallback".to_string(),
        };
        info!(
            "User clicked to view {} products: {} ({})",
            name, link.url, matched
        );
        self.logger.log(InteractionEvent::new(
            "product_click",
            serde_json::json!({
                "millet": name,
                "key": link.key,
                "url": link.url,
                "match": matched,
            }),
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;
    use std::time::Duration;

    #[derive(Default)]
    struct RecordingNavigator {
        opened: Mutex<Vec<String>>,
    }

    impl Navigator for RecordingNavigator {
        fn open(&self, url: &str) {
            self.opened.lock().unwrap().push(url.to_string());
        }
    }

    #[derive(Default)]
    struct RecordingControl {
        events: Mutex<Vec<String>>,
    }

    impl RedirectControl for RecordingControl {
        fn disable(&self, label: &str) {
            self.events.lock().unwrap().push(format!("disable:{}", label));
        }
        fn restore(&self) {
            self.events.lock().unwrap().push("restore".to_string());
        }
    }

    #[derive(Default)]
    struct RecordingLogger {
        events: Mutex<Vec<(&'static str, serde_json::Value)>>,
    }

    impl InteractionLogger for RecordingLogger {
        fn log(&self, event: InteractionEvent) {
            self.events
                .lock()
                .unwrap()
                .push((event.event_type, event.payload));
        }
    }

    fn use_case(navigator: Arc<RecordingNavigator>) -> RedirectProductUseCase {
        RedirectProductUseCase::new(ProductCatalog::default(), navigator)
    }

    #[tokio::test]
    async fn test_redirect_opens_resolved_url_and_restores_control() {
        let navigator = Arc::new(RecordingNavigator::default());
        let control = RecordingControl::default();
        let use_case = use_case(navigator.clone()).with_params(RedirectParams::immediate());

        let link = use_case.redirect("ragi", &control).await;

        assert_eq!(
            link.url,
            "https://milletamma.com/products/ragi-finger-millet-flour-organic-500gm"
        );
        assert_eq!(*navigator.opened.lock().unwrap(), vec![link.url.clone()]);
        assert_eq!(
            *control.events.lock().unwrap(),
            vec!["disable:Redirecting...".to_string(), "restore".to_string()]
        );
    }

    #[tokio::test(start_paused = true)]
    async fn test_navigation_waits_for_open_delay() {
        let navigator = Arc::new(RecordingNavigator::default());
        let control = Arc::new(RecordingControl::default());
        let use_case = Arc::new(use_case(navigator.clone()));

        let task = {
            let use_case = use_case.clone();
            let control = control.clone();
            tokio::spawn(async move { use_case.redirect("kodo", control.as_ref()).await })
        };

        tokio::time::sleep(Duration::from_millis(100)).await;
        assert!(navigator.opened.lock().unwrap().is_empty());
        assert_eq!(control.events.lock().unwrap().len(), 1);

        tokio::time::sleep(Duration::from_millis(500)).await;
        assert_eq!(navigator.opened.lock().unwrap().len(), 1);
        assert_eq!(control.events.lock().unwrap().len(), 1);

        task.await.unwrap();
        assert_eq!(control.events.lock().unwrap().last().unwrap(), "restore");
    }

    #[tokio::test(start_paused = true)]
    async fn test_control_restored_when_redirect_is_dropped() {
        let navigator = Arc::new(RecordingNavigator::default());
        let control = RecordingControl::default();
        let use_case = use_case(navigator.clone());

        let result =
            tokio::time::timeout(Duration::from_millis(100), use_case.redirect("sama", &control)).await;

        assert!(result.is_err());
        assert!(navigator.opened.lock().unwrap().is_empty());
        assert_eq!(control.events.lock().unwrap().last().unwrap(), "restore");
    }

    #[tokio::test]
    async fn test_every_click_is_tracked_once() {
        let navigator = Arc::new(RecordingNavigator::default());
        let logger = Arc::new(RecordingLogger::default());
        let control = RecordingControl::default();
        let use_case = use_case(navigator)
            .with_params(RedirectParams::immediate())
            .with_logger(logger.clone());

        use_case.redirect("Unknown Grain", &control).await;
        use_case.redirect("bajra", &control).await;

        let events = logger.events.lock().unwrap();
        assert_eq!(events.len(), 2);
        assert_eq!(events[0].0, "product_click");
        assert_eq!(events[0].1["match"], "fallback");
        assert_eq!(events[1].1["match"], "exact");
        assert_eq!(events[1].1["key"], "bajra");
    }

    #[test]
    fn test_resolve_does_not_navigate() {
        let navigator = Arc::new(RecordingNavigator::default());
        let use_case = use_case(navigator.clone());
        let link = use_case.resolve("Pearl Millet");
        assert_eq!(link.key, "pearl");
        assert!(navigator.opened.lock().unwrap().is_empty());
    }
}
