use log::{debug, error, info, warn};
use reqwest::{
    Client,
    multipart::{Form, Part},
};

use crate::{
    config::ClientConfig,
    error::{ClientError, ClientResult},
    helpers::{
        dto::{Endpoints, ErrorDetail, HealthStatus, ModerationResult},
        utils::mask_token,
    },
    image::ImageFile,
};

#[derive(Clone)]
pub struct ModerationService {
    client: Client,
    config: ClientConfig,
}

impl ModerationService {
    pub fn new(config: ClientConfig) -> Self {
        let client = Client::new();

        Self { client, config }
    }

    /// Uploads one image and returns the service's classification.
    pub async fn moderate(&self, token: &str, image: &ImageFile) -> ClientResult<ModerationResult> {
        let url = Endpoints::Moderate(&self.config).to_string();
        debug!(
            "Submitting {} ({} bytes) to {} with token {}",
            image.name(),
            image.bytes().len(),
            url,
            mask_token(token)
        );

        let part = Part::bytes(image.bytes().to_vec())
            .file_name(image.name().to_string())
            .mime_str(image.mime_type())?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .multipart(form)
            .send()
            .await;

        match response {
            Ok(resp) => {
                let status = resp.status();
                debug!("Moderation response status: {}", status);

                if status.is_success() {
                    let result: ModerationResult = resp.json().await.map_err(|e| {
                        error!("Moderation response body could not be decoded: {}", e);
                        e
                    })?;
                    info!(
                        "Moderation succeeded for {}: safe={} confidence={:.3}",
                        image.name(),
                        result.safe,
                        result.confidence
                    );
                    Ok(result)
                } else {
                    let body = resp.text().await.unwrap_or_default();
                    let detail = ErrorDetail::from_body(&body);

                    error!("Moderation service responded with status {}", status);
                    debug!("Moderation error body: {}", body);
                    if detail.is_none() {
                        warn!("No detail in error response, falling back to generic message");
                    }

                    Err(ClientError::Server {
                        status: status.as_u16(),
                        detail,
                    })
                }
            }
            Err(network_error) => {
                error!("Network error during moderation call to {}: {}", url, network_error);
                if network_error.is_timeout() {
                    error!("Request timed out");
                } else if network_error.is_connect() {
                    error!("Connection failed - server may be down");
                }

                Err(ClientError::Http(network_error))
            }
        }
    }

    pub async fn health(&self) -> ClientResult<HealthStatus> {
        let url = Endpoints::Health(&self.config).to_string();
        debug!("Checking service health at {}", url);

        let resp = self.client.get(&url).send().await?;
        let status = resp.status();

        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            return Err(ClientError::Server {
                status: status.as_u16(),
                detail: ErrorDetail::from_body(&body),
            });
        }

        let health: HealthStatus = resp.json().await?;
        info!("Service health: {} at {}", health.status, health.timestamp);
        Ok(health)
    }
}
