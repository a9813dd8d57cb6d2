//! Group display-name lookup.

use inv_core::GroupDirectory;

use crate::{GraphClient, error::GraphError};

#[derive(serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct GroupResponse {
    display_name: Option<String>,
}

impl GraphClient {
    #[must_use]
    pub fn group_url(&self, group_id: &str) -> String {
        format!(
            "{}/v1.0/groups/{}?$select=displayName",
            self.base_url,
            urlencoding::encode(group_id)
        )
    }

    /// Look up the display name of one group.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::NotFound`] for a deleted group, [`GraphError::Parse`]
    /// if the response carries no display name, or any transport error.
    pub async fn fetch_group_name(&self, group_id: &str) -> Result<String, GraphError> {
        let resp = self.get(&self.group_url(group_id)).await?;
        let body = resp.text().await?;
        parse_group(&body, group_id)
    }
}

impl GroupDirectory for GraphClient {
    type Error = GraphError;

    async fn group_display_name(&self, group_id: &str) -> Result<String, GraphError> {
        self.fetch_group_name(group_id).await
    }
}

fn parse_group(body: &str, group_id: &str) -> Result<String, GraphError> {
    let group: GroupResponse =
        serde_json::from_str(body).map_err(|e| GraphError::Parse(e.to_string()))?;
    group
        .display_name
        .ok_or_else(|| GraphError::Parse(format!("group {group_id} has no displayName")))
}
