//! WebDriver session configuration and setup.

use std::fmt;
use std::time::Duration;

use thirtyfour::prelude::*;

use super::error::ScrapeError;

/// Booking site home page, where the search form lives.
const DEFAULT_HOME_URL: &str = "https://www.renfe.com/es/es";

/// Default endpoints of locally running driver binaries
/// (`geckodriver` / `chromedriver --port=9515`).
const GECKODRIVER_URL: &str = "http://localhost:4444";
const CHROMEDRIVER_URL: &str = "http://localhost:9515";

/// How long the session keeps retrying element lookups before reporting
/// them missing.
const IMPLICIT_WAIT: Duration = Duration::from_secs(10);

/// Which browser drives the search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum BrowserKind {
    Firefox,
    Chrome,
}

impl BrowserKind {
    /// WebDriver endpoint used when the config gives no explicit URL.
    pub fn default_webdriver_url(self) -> &'static str {
        match self {
            BrowserKind::Firefox => GECKODRIVER_URL,
            BrowserKind::Chrome => CHROMEDRIVER_URL,
        }
    }
}

impl fmt::Display for BrowserKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BrowserKind::Firefox => "firefox",
            BrowserKind::Chrome => "chrome",
        })
    }
}

/// Configuration for the scrape pipeline.
#[derive(Debug, Clone)]
pub struct ScrapeConfig {
    /// Browser to drive (headless).
    pub browser: BrowserKind,
    /// WebDriver endpoint; `None` means the browser's default local port.
    pub webdriver_url: Option<String>,
    /// Home page the search sequence starts from.
    pub home_url: String,
}

impl ScrapeConfig {
    /// Create a config for the given browser against the live site.
    pub fn new(browser: BrowserKind) -> Self {
        Self {
            browser,
            webdriver_url: None,
            home_url: DEFAULT_HOME_URL.to_string(),
        }
    }

    /// Point at a non-default WebDriver endpoint.
    pub fn with_webdriver_url(mut self, url: impl Into<String>) -> Self {
        self.webdriver_url = Some(url.into());
        self
    }

    /// Set a custom home page URL (for testing).
    pub fn with_home_url(mut self, url: impl Into<String>) -> Self {
        self.home_url = url.into();
        self
    }

    /// The WebDriver endpoint this config resolves to.
    pub fn webdriver_url(&self) -> &str {
        self.webdriver_url
            .as_deref()
            .unwrap_or_else(|| self.browser.default_webdriver_url())
    }
}

/// Start a headless session against the configured WebDriver endpoint.
pub(super) async fn connect(config: &ScrapeConfig) -> Result<WebDriver, ScrapeError> {
    let url = config.webdriver_url();

    let driver = match config.browser {
        BrowserKind::Firefox => {
            let mut caps = DesiredCapabilities::firefox();
            caps.set_headless()?;
            WebDriver::new(url, caps).await?
        }
        BrowserKind::Chrome => {
            let mut caps = DesiredCapabilities::chrome();
            caps.set_headless()?;
            WebDriver::new(url, caps).await?
        }
    };

    driver.set_implicit_wait_timeout(IMPLICIT_WAIT).await?;

    Ok(driver)
}
