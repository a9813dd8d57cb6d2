//! Win32 app listing.

use inv_core::Win32App;

use crate::{GraphClient, error::GraphError};

const WIN32_APP_FILTER: &str = "isof('microsoft.graph.win32LobApp')";

/// One page of an OData collection.
#[derive(serde::Deserialize)]
pub(crate) struct Page<T> {
    #[serde(default = "Vec::new")]
    value: Vec<T>,
    #[serde(rename = "@odata.nextLink")]
    next_link: Option<String>,
}

impl GraphClient {
    /// URL of the first page of Win32 apps, assignments expanded.
    #[must_use]
    pub fn win32_apps_url(&self) -> String {
        format!(
            "{}/beta/deviceAppManagement/mobileApps?$filter={}&$expand=assignments",
            self.base_url,
            urlencoding::encode(WIN32_APP_FILTER)
        )
    }

    /// Fetch every Win32 app, following `@odata.nextLink` until exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError`] on the first page that fails to load or parse.
    /// No partial result is returned.
    pub async fn list_win32_apps(&self) -> Result<Vec<Win32App>, GraphError> {
        let mut apps = Vec::new();
        let mut next = Some(self.win32_apps_url());
        let mut page_number = 0_usize;

        while let Some(url) = next {
            page_number += 1;
            let body = self.get(&url).await?.text().await?;
            let page: Page<Win32App> = parse_page(&body)?;
            tracing::debug!(page = page_number, apps = page.value.len(), "fetched app page");
            apps.extend(page.value);
            next = page.next_link;
        }

        Ok(apps)
    }
}

pub(crate) fn parse_page<T>(body: &str) -> Result<Page<T>, GraphError>
where
    T: serde::de::DeserializeOwned,
{
    serde_json::from_str(body).map_err(|e| GraphError::Parse(e.to_string()))
}
