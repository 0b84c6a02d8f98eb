use std::time::Duration;

use thirtyfour::{error::WebDriverError, ChromiumLikeCapabilities, DesiredCapabilities, WebDriver};

// http://chrome:4444/wd/hub when driving a selenium container
const WEBDRIVER_URL: &str = "http://localhost:9515";

// The homepage fills in fare data client-side with no ready signal to key
// off, so capture waits out a fixed settle period after navigation.
const SETTLE_PERIOD: Duration = Duration::from_secs(5);

pub struct Droid {
    pub driver: WebDriver,
}

impl Droid {
    pub async fn new() -> Result<Self, WebDriverError> {
        let mut caps = DesiredCapabilities::chrome();
        caps.set_headless()?;
        caps.set_disable_gpu()?;

        let driver = WebDriver::new(WEBDRIVER_URL, caps).await?;

        Ok(Droid { driver })
    }

    /// Navigates to `url`, waits out the settle period and returns the fully
    /// rendered page source. The session is quit on every exit path; a
    /// session left behind keeps a live browser process around.
    pub async fn fetch_page_source(self, url: &str) -> Result<String, WebDriverError> {
        let capture_result = self.navigate_and_capture(url).await;
        let quit_result = self.driver.quit().await;

        let page_source = capture_result?;
        quit_result?;

        Ok(page_source)
    }

    async fn navigate_and_capture(&self, url: &str) -> Result<String, WebDriverError> {
        self.driver.goto(url).await?;
        tokio::time::sleep(SETTLE_PERIOD).await;
        self.driver.source().await
    }
}
