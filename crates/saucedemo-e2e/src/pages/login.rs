// Login page object

use crate::error::Result;
use crate::pages::PageHandle;
use crate::selectors::login as selectors;

pub struct LoginPage {
    page: PageHandle,
}

impl LoginPage {
    pub fn new(page: PageHandle) -> Self {
        Self { page }
    }

    /// Fills both credential fields and submits.
    ///
    /// No return value: the caller decides whether to expect the inventory
    /// page or an error banner, and queries for that separately.
    pub async fn login(&self, username: &str, password: &str) -> Result<()> {
        tracing::info!(%username, "logging in");
        self.page.fill_input(selectors::USERNAME, username).await?;
        self.page.fill_input(selectors::PASSWORD, password).await?;
        self.page.click(selectors::LOGIN_BUTTON).await
    }

    /// The error banner text if one is shown, `None` otherwise.
    ///
    /// Probe accessor: "no error" is an expected outcome, not a failure.
    pub async fn error_message(&self) -> Option<String> {
        if self.page.is_visible(selectors::ERROR_MESSAGE).await {
            self.page.get_text(selectors::ERROR_MESSAGE).await.ok()
        } else {
            None
        }
    }
}
