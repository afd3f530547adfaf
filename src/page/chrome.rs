//! Chrome DevTools Protocol session

use super::{PuzzlePage, SessionError, WordSubmitter};
use crate::config::{RunConfig, Selectors};
use crate::sync::ProgressSnapshot;
use crate::sync::script::{bridge_script, observer_script, visibility_script};
use async_trait::async_trait;
use chromiumoxide::cdp::browser_protocol::input::{DispatchKeyEventParams, DispatchKeyEventType};
use chromiumoxide::cdp::js_protocol::runtime::{EvaluateParams, EventConsoleApiCalled};
use chromiumoxide::error::CdpError;
use chromiumoxide::handler::viewport::Viewport;
use chromiumoxide::{Browser, BrowserConfig, Page};
use futures::StreamExt;
use futures::stream::BoxStream;
use serde_json::Value;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, info, warn};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// A browser with the puzzle page open
pub struct ChromeSession {
    browser: Browser,
    page: Page,
    selectors: Selectors,
    setup_timeout: Duration,
    settle_delay: Duration,
    closed: Arc<AtomicBool>,
    handler: JoinHandle<()>,
}

impl ChromeSession {
    /// Launch a browser and open the puzzle page
    ///
    /// # Errors
    /// `SessionError::Launch` if the browser cannot be started, or a CDP error
    /// if the page cannot be opened.
    pub async fn launch(config: &RunConfig) -> Result<Self, SessionError> {
        let viewport = Viewport {
            width: config.viewport.width,
            height: config.viewport.height,
            device_scale_factor: Some(config.viewport.device_scale_factor),
            emulating_mobile: true,
            is_landscape: false,
            has_touch: true,
        };

        let mut builder = BrowserConfig::builder()
            .window_size(config.viewport.width, config.viewport.height)
            .viewport(viewport)
            .arg(format!("--user-agent={}", config.user_agent));
        if !config.headless {
            builder = builder.with_head();
        }
        let browser_config = builder.build().map_err(SessionError::Launch)?;

        let (browser, mut handler) = Browser::launch(browser_config).await?;
        let closed = Arc::new(AtomicBool::new(false));

        // The handler drives the websocket; it ends when the browser goes away
        let flag = Arc::clone(&closed);
        let handler = tokio::spawn(async move {
            while let Some(event) = handler.next().await {
                if let Err(err) = event {
                    debug!(error = %err, "browser handler error");
                }
            }
            flag.store(true, Ordering::SeqCst);
            debug!("browser connection closed");
        });

        info!(url = %config.url, headless = config.headless, "opening puzzle page");
        let page = browser.new_page(config.url.as_str()).await?;

        Ok(Self {
            browser,
            page,
            selectors: config.selectors.clone(),
            setup_timeout: config.setup_timeout,
            settle_delay: config.settle_delay,
            closed,
            handler,
        })
    }

    /// Whether the browser connection has gone away
    #[must_use]
    pub fn is_closed(&self) -> bool {
        self.closed.load(Ordering::SeqCst)
    }

    /// Wait for `selector` to be visible, for at most `timeout`
    ///
    /// # Errors
    /// `SessionError::SetupTimeout` if it never shows, `SessionError::Closed` if
    /// the browser goes away while waiting.
    pub async fn wait_for_visible(&self, selector: &str, timeout: Duration) -> Result<(), SessionError> {
        let poll = async {
            loop {
                if self.is_visible(selector).await? {
                    return Ok::<(), SessionError>(());
                }
                tokio::time::sleep(POLL_INTERVAL).await;
            }
        };

        tokio::time::timeout(timeout, poll)
            .await
            .map_err(|_| SessionError::SetupTimeout {
                selector: selector.to_string(),
                waited: timeout,
            })?
    }

    /// Close the browser
    ///
    /// A browser that is already gone is not an error.
    ///
    /// # Errors
    /// Returns the CDP error if an open browser refuses to close.
    pub async fn close(mut self) -> Result<(), SessionError> {
        if !self.is_closed() {
            match self.browser.close().await {
                Ok(_) => {
                    let _ = self.browser.wait().await;
                }
                Err(err) => {
                    let err = self.classify(err);
                    if !err.is_closed() {
                        return Err(err);
                    }
                }
            }
        }
        self.handler.abort();
        Ok(())
    }

    /// Map a CDP failure, recognizing a dropped connection as `Closed`
    fn classify(&self, err: CdpError) -> SessionError {
        let disconnected = matches!(
            err,
            CdpError::Ws(_) | CdpError::ChannelSendError(_) | CdpError::NoResponse
        );
        if disconnected || self.is_closed() {
            SessionError::Closed
        } else {
            SessionError::Cdp(err)
        }
    }

    async fn evaluate(&self, script: String) -> Result<Value, SessionError> {
        let mut params = EvaluateParams::new(script);
        params.return_by_value = Some(true);

        let result = self
            .page
            .evaluate_expression(params)
            .await
            .map_err(|err| self.classify(err))?;

        Ok(result.value().cloned().unwrap_or(Value::Null))
    }

    async fn is_visible(&self, selector: &str) -> Result<bool, SessionError> {
        let value = self.evaluate(visibility_script(selector)).await?;
        Ok(value.as_bool().unwrap_or(false))
    }

    async fn text_of(&self, selector: &str) -> Result<String, SessionError> {
        let element = self
            .page
            .find_element(selector)
            .await
            .map_err(|err| match self.classify(err) {
                SessionError::Closed => SessionError::Closed,
                _ => SessionError::MissingElement(selector.to_string()),
            })?;

        let text = element
            .inner_text()
            .await
            .map_err(|err| self.classify(err))?;
        Ok(text.unwrap_or_default())
    }

    async fn dispatch_key(&self, params: Result<DispatchKeyEventParams, String>) -> Result<(), SessionError> {
        let params = params.map_err(SessionError::Script)?;
        self.page
            .execute(params)
            .await
            .map_err(|err| self.classify(err))?;
        Ok(())
    }

    async fn press_letter(&self, letter: char) -> Result<(), SessionError> {
        let text = letter.to_string();
        let upper = letter.to_ascii_uppercase();
        let code = format!("Key{upper}");

        self.dispatch_key(
            DispatchKeyEventParams::builder()
                .r#type(DispatchKeyEventType::KeyDown)
                .key(text.clone())
                .code(code.clone())
                .text(text.clone())
                .windows_virtual_key_code(i64::from(u32::from(upper)))
                .build(),
        )
        .await?;

        self.dispatch_key(
            DispatchKeyEventParams::builder()
                .r#type(DispatchKeyEventType::KeyUp)
                .key(text)
                .code(code)
                .windows_virtual_key_code(i64::from(u32::from(upper)))
                .build(),
        )
        .await
    }

    async fn press_backspace(&self) -> Result<(), SessionError> {
        for kind in [DispatchKeyEventType::RawKeyDown, DispatchKeyEventType::KeyUp] {
            self.dispatch_key(
                DispatchKeyEventParams::builder()
                    .r#type(kind)
                    .key("Backspace")
                    .code("Backspace")
                    .windows_virtual_key_code(8)
                    .native_virtual_key_code(8)
                    .build(),
            )
            .await?;
        }
        Ok(())
    }
}

/// Flatten a console call into one line of text
fn console_text(event: &EventConsoleApiCalled) -> String {
    event
        .args
        .iter()
        .filter_map(|arg| match &arg.value {
            Some(Value::String(text)) => Some(text.clone()),
            Some(other) => Some(other.to_string()),
            None => arg.description.clone(),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[async_trait]
impl PuzzlePage for ChromeSession {
    async fn wait_until_ready(&self) -> Result<(), SessionError> {
        self.wait_for_visible(&self.selectors.grid, self.setup_timeout)
            .await?;
        tokio::time::sleep(self.settle_delay).await;
        Ok(())
    }

    async fn read_puzzle_text(&self) -> Result<(String, Vec<String>), SessionError> {
        let center = self.text_of(&self.selectors.center_letter).await?;

        let tiles = self
            .page
            .find_elements(self.selectors.letters.as_str())
            .await
            .map_err(|err| self.classify(err))?;

        let mut letters = Vec::with_capacity(tiles.len());
        for tile in tiles {
            let text = tile.inner_text().await.map_err(|err| self.classify(err))?;
            letters.push(text.unwrap_or_default());
        }

        Ok((center, letters))
    }

    async fn read_progress(&self) -> Result<ProgressSnapshot, SessionError> {
        Ok(ProgressSnapshot::new(
            self.text_of(&self.selectors.current_title).await?,
            self.text_of(&self.selectors.next_left).await?,
            self.text_of(&self.selectors.next_title).await?,
        ))
    }

    async fn install_progress_bridge(&self) -> Result<(), SessionError> {
        let installed = self.evaluate(observer_script(&self.selectors)).await?;
        if installed.as_bool() != Some(true) {
            warn!(panel = %self.selectors.progress_panel, "progress panel not found; live status disabled");
        }
        self.evaluate(bridge_script()).await?;
        Ok(())
    }

    async fn console_lines(&self) -> Result<BoxStream<'static, String>, SessionError> {
        let events = self
            .page
            .event_listener::<EventConsoleApiCalled>()
            .await
            .map_err(|err| self.classify(err))?;

        Ok(events.map(|event| console_text(&event)).boxed())
    }
}

#[async_trait]
impl WordSubmitter for ChromeSession {
    async fn type_word(&self, word: &str) -> Result<(), SessionError> {
        for letter in word.chars() {
            self.press_letter(letter).await?;
        }
        Ok(())
    }

    async fn submit_visible(&self) -> Result<bool, SessionError> {
        self.is_visible(&self.selectors.submit).await
    }

    async fn click_submit(&self) -> Result<(), SessionError> {
        let button = self
            .page
            .find_element(self.selectors.submit.as_str())
            .await
            .map_err(|err| self.classify(err))?;
        button.click().await.map_err(|err| self.classify(err))?;
        Ok(())
    }

    async fn erase(&self, count: usize) -> Result<(), SessionError> {
        for _ in 0..count {
            self.press_backspace().await?;
        }
        Ok(())
    }
}
