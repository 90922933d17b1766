//! The fixed search-form interaction sequence.
//!
//! One capture is one browser session: open the home page, fill both
//! station autocompletes, advance the date control, submit, wait for the
//! results to render, return the page source. The sequence has no branches
//! beyond error propagation and no retries; the settle waits are fixed
//! because the page gives nothing to poll on.

use std::time::Duration;

use thirtyfour::error::WebDriverError;
use thirtyfour::prelude::*;
use tokio::time::sleep;
use tracing::{debug, info, warn};

use super::browser::{ScrapeConfig, connect};
use super::error::ScrapeError;

/// Wait for the home page's client-side rendering.
const PAGE_RENDER_DELAY: Duration = Duration::from_secs(3);
/// Wait for an autocomplete to populate its suggestion list.
const SUGGESTION_DELAY: Duration = Duration::from_millis(50);

/// CSS selectors for the search form controls.
///
/// These address generated markup (`rf-*` web components, awesomplete
/// lists) by position, so any redesign of the home page breaks them; the
/// sequence reports that as [`ScrapeError::SiteStructureChanged`].
mod selectors {
    pub const ORIGIN_INPUT: &str = "rf-awesomplete.rf-input-autocomplete:nth-child(1) > div:nth-child(1) > div:nth-child(2) > input:nth-child(1)";
    pub const ORIGIN_SUGGESTION: &str = "#awesomplete_list_1_item_0";
    pub const DESTINATION_INPUT: &str = "rf-awesomplete.rf-input-autocomplete:nth-child(2) > div:nth-child(1) > div:nth-child(2) > input:nth-child(1)";
    pub const DESTINATION_SUGGESTION: &str = "#awesomplete_list_2_item_0";
    pub const DATE_ADVANCE: &str = "div.rf-daterange__container-ipt:nth-child(2) > div:nth-child(2) > button:nth-child(2) > i:nth-child(1)";
    pub const SEARCH_SUBMIT: &str = "#contentPage > div > div > div:nth-child(1) > div > div > div > div > div > div > rf-header > rf-header-top > div > div.rf-header__wrap-search.grid.sc-rf-header-top > rf-search > div > div.rf-search__filters.rf-search__filters--open > div.rf-search__wrapper-button > div.rf-search__button > form > rf-button > div > div > button > div.mdc-button__touch.sc-rf-button";
}

/// One timetable search.
///
/// `origin` and `destination` are station display names, which is what the
/// autocomplete inputs expect. A non-positive `days_from_today` searches
/// for today.
#[derive(Debug, Clone)]
pub struct SearchRequest {
    pub origin: String,
    pub destination: String,
    pub days_from_today: i64,
    /// How long to let the results render after submitting.
    pub settle_timeout: Duration,
}

/// Drive one search and return the rendered results page source.
///
/// The WebDriver session is scoped to this call: it is closed whether the
/// sequence succeeded or failed. A close failure after a successful capture
/// is logged rather than returned.
pub async fn capture_search_page(
    config: &ScrapeConfig,
    request: &SearchRequest,
) -> Result<String, ScrapeError> {
    info!(
        browser = %config.browser,
        origin = %request.origin,
        destination = %request.destination,
        days_from_today = request.days_from_today,
        "starting timetable search"
    );

    let driver = connect(config).await?;
    let outcome = drive_search(&driver, config, request).await;

    if let Err(e) = driver.quit().await {
        warn!(error = %e, "failed to close webdriver session");
    }

    outcome
}

async fn drive_search(
    driver: &WebDriver,
    config: &ScrapeConfig,
    request: &SearchRequest,
) -> Result<String, ScrapeError> {
    driver.goto(&config.home_url).await?;
    sleep(PAGE_RENDER_DELAY).await;

    debug!("selecting origin");
    let origin_input = find(driver, selectors::ORIGIN_INPUT, "origin input").await?;
    origin_input.send_keys(request.origin.as_str()).await?;
    sleep(SUGGESTION_DELAY).await;
    find(driver, selectors::ORIGIN_SUGGESTION, "origin suggestion")
        .await?
        .click()
        .await?;

    debug!("selecting destination");
    let destination_input =
        find(driver, selectors::DESTINATION_INPUT, "destination input").await?;
    destination_input
        .send_keys(request.destination.as_str())
        .await?;
    sleep(SUGGESTION_DELAY).await;
    find(
        driver,
        selectors::DESTINATION_SUGGESTION,
        "destination suggestion",
    )
    .await?
    .click()
    .await?;

    debug!(days = request.days_from_today, "advancing travel date");
    let advance = find(driver, selectors::DATE_ADVANCE, "date advance control").await?;
    for _ in 0..request.days_from_today {
        advance.click().await?;
    }

    find(driver, selectors::SEARCH_SUBMIT, "search button")
        .await?
        .click()
        .await?;

    info!(
        settle_secs = request.settle_timeout.as_secs(),
        "search submitted, waiting for results to render"
    );
    sleep(request.settle_timeout).await;

    Ok(driver.source().await?)
}

/// Locate one form control, distinguishing "the page changed" from other
/// session failures.
async fn find(
    driver: &WebDriver,
    selector: &'static str,
    element: &'static str,
) -> Result<WebElement, ScrapeError> {
    match driver.find(By::Css(selector)).await {
        Ok(el) => Ok(el),
        Err(WebDriverError::NoSuchElement(_)) => {
            Err(ScrapeError::SiteStructureChanged { element, selector })
        }
        Err(e) => Err(ScrapeError::Automation(e)),
    }
}
