//! dog.ceo implementation of the breed provider port

use super::error::{DogApiError, Result};
use super::transport::{HttpTransport, ReqwestTransport};
use super::types::{BreedImageResponse, BreedsListResponse, STATUS_SUCCESS};
use async_trait::async_trait;
use guess_breed_application::{BreedProvider, ProviderError};
use guess_breed_domain::{Breed, ImageUrl};
use serde::de::DeserializeOwned;
use std::time::Duration;
use tracing::{debug, info};

/// Public dog.ceo host
pub const DEFAULT_BASE_URL: &str = "https://dog.ceo";

/// Breed provider backed by the dog.ceo REST API
pub struct DogApiBreedProvider<T: HttpTransport = ReqwestTransport> {
    transport: T,
    base_url: String,
}

impl DogApiBreedProvider<ReqwestTransport> {
    /// Create a provider that talks to `base_url` over HTTP
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let transport = ReqwestTransport::new(timeout)?;
        info!("DogApiBreedProvider initialized");
        Ok(Self::with_transport(transport, base_url))
    }
}

impl<T: HttpTransport> DogApiBreedProvider<T> {
    /// Create a provider with an existing transport
    pub fn with_transport(transport: T, base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            transport,
            base_url,
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// URL listing every breed with its sub-breeds
    pub fn breeds_list_url(&self) -> String {
        format!("{}/api/breeds/list/all", self.base_url)
    }

    /// URL returning a random image of `breed`
    ///
    /// A one-word breed maps to `/api/breed/<breed>/images/random`, a
    /// two-word breed to `/api/breed/<breed>/<sub>/images/random`.
    pub fn random_image_url(&self, breed: &Breed) -> Result<String> {
        let tokens: Vec<&str> = breed.tokens().collect();
        match tokens.as_slice() {
            [base] => Ok(format!("{}/api/breed/{}/images/random", self.base_url, base)),
            [base, sub] => Ok(format!(
                "{}/api/breed/{}/{}/images/random",
                self.base_url, base, sub
            )),
            _ => Err(DogApiError::InvalidBreedFormat(breed.to_string())),
        }
    }

    /// Fetch the breed list, fanning sub-breeds out into separate entries
    pub async fn list_breeds(&self) -> Result<Vec<Breed>> {
        let body: BreedsListResponse = self.get_json(&self.breeds_list_url()).await?;
        ensure_success(&body.status)?;

        let mut breeds = Vec::new();
        for (base, sub_breeds) in &body.message {
            if sub_breeds.is_empty() {
                breeds.push(
                    Breed::new(base).map_err(|_| DogApiError::InvalidBreedName(base.clone()))?,
                );
            } else {
                for sub in sub_breeds {
                    let breed = Breed::with_sub_breed(base, sub)
                        .map_err(|_| DogApiError::InvalidBreedName(format!("{} {}", base, sub)))?;
                    breeds.push(breed);
                }
            }
        }

        debug!("dog.ceo listed {} breeds", breeds.len());
        Ok(breeds)
    }

    /// Fetch the URL of one random image of `breed`
    pub async fn random_image(&self, breed: &Breed) -> Result<ImageUrl> {
        let url = self.random_image_url(breed)?;
        let body: BreedImageResponse = self.get_json(&url).await?;
        ensure_success(&body.status)?;

        if let Err(e) = reqwest::Url::parse(&body.message) {
            return Err(DogApiError::InvalidImageUrl {
                url: body.message,
                reason: e.to_string(),
            });
        }

        ImageUrl::new(body.message.clone()).map_err(|e| DogApiError::InvalidImageUrl {
            url: body.message,
            reason: e.to_string(),
        })
    }

    async fn get_json<R: DeserializeOwned>(&self, url: &str) -> Result<R> {
        let text = self.transport.get_text(url).await?;
        Ok(serde_json::from_str(&text)?)
    }
}

fn ensure_success(status: &str) -> Result<()> {
    if status == STATUS_SUCCESS {
        Ok(())
    } else {
        Err(DogApiError::ApiStatus(status.to_string()))
    }
}

#[async_trait]
impl<T: HttpTransport> BreedProvider for DogApiBreedProvider<T> {
    async fn fetch_catalog(&self) -> std::result::Result<Vec<Breed>, ProviderError> {
        Ok(self.list_breeds().await?)
    }

    async fn fetch_image(&self, breed: &Breed) -> std::result::Result<ImageUrl, ProviderError> {
        Ok(self.random_image(breed).await?)
    }
}
