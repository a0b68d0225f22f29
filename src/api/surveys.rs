//! Survey catalog listing

use serde::Deserialize;
use serde_json::Value;
use tracing::debug;

use super::QualtricsClient;
use crate::errors::ApiResult;

#[derive(Debug, Deserialize)]
struct SurveyList {
    elements: Vec<Value>,
}

impl QualtricsClient {
    /// Lists the surveys visible to the API token
    ///
    /// Returns the `result.elements` array of the response verbatim: order and
    /// length preserved, records untouched. Only the first page of the
    /// collection is returned; the API paginates but this client does not
    /// follow `nextPage`.
    ///
    /// # Errors
    ///
    /// Returns `ApiError` on transport failure, non-2xx response, or a body
    /// without the expected `result.elements` field.
    pub async fn list_surveys(&self) -> ApiResult<Vec<Value>> {
        let url = self.endpoint(&["surveys"])?;
        let list: SurveyList = self.get_result(url).await?;
        debug!("Listed {} surveys", list.elements.len());
        Ok(list.elements)
    }
}
