//! Webhook response checks.

use crate::error::SubmitError;

/// Return the response unchanged on 2xx, otherwise [`SubmitError::Rejected`]
/// with the status code and response body.
pub async fn check_response(resp: reqwest::Response) -> Result<reqwest::Response, SubmitError> {
    let status = resp.status();
    if !status.is_success() {
        return Err(SubmitError::Rejected {
            status: status.as_u16(),
            message: resp.text().await.unwrap_or_default(),
        });
    }
    Ok(resp)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mock_response(status: u16, body: &'static str) -> reqwest::Response {
        reqwest::Response::from(
            ::http::Response::builder()
                .status(status)
                .body(body)
                .unwrap(),
        )
    }

    #[tokio::test]
    async fn success_passes_through() {
        let resp = mock_response(200, "");
        assert!(check_response(resp).await.is_ok());
    }

    #[tokio::test]
    async fn accepted_and_no_content_count_as_success() {
        assert!(check_response(mock_response(202, "")).await.is_ok());
        assert!(check_response(mock_response(204, "")).await.is_ok());
    }

    #[tokio::test]
    async fn server_error_is_rejected_with_body() {
        let err = check_response(mock_response(500, "boom")).await.unwrap_err();
        assert!(matches!(
            err,
            SubmitError::Rejected { status: 500, ref message } if message == "boom"
        ));
    }

    #[tokio::test]
    async fn redirect_status_is_not_success() {
        let err = check_response(mock_response(302, "")).await.unwrap_err();
        assert!(matches!(err, SubmitError::Rejected { status: 302, .. }));
    }
}
