//! Simulated remote services.
//!
//! Generation and export each sleep for a configured delay and then
//! resolve exactly once. Results are delivered to the UI loop as
//! [`AppEvent`]s over an unbounded channel.

use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::mpsc::UnboundedSender;

use crate::error::ServiceError;
use crate::generator::generate_listing;
use crate::models::{ProductListing, SocialPost};
use crate::wizard::ExportRequest;

/// Latency and failure knobs for the simulated calls
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    pub generate_delay: Duration,
    pub export_delay: Duration,
    pub fail_generation: bool,
    pub fail_export: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            generate_delay: Duration::from_millis(1500),
            export_delay: Duration::from_millis(2000),
            fail_generation: false,
            fail_export: false,
        }
    }
}

/// Completion of a background operation
#[derive(Debug)]
pub enum AppEvent {
    ListingGenerated(Result<ProductListing, ServiceError>),
    ExportFinished(Result<(), ServiceError>),
}

/// Analyze a post after the configured delay
pub async fn simulate_generation(
    post: SocialPost,
    config: &ServiceConfig,
) -> Result<ProductListing, ServiceError> {
    tokio::time::sleep(config.generate_delay).await;
    if config.fail_generation {
        return Err(ServiceError::Generation("analysis backend unavailable".to_string()));
    }
    Ok(generate_listing(&post))
}

/// Submit a listing to the (simulated) marketplace
pub async fn simulate_export(request: ExportRequest, config: &ServiceConfig) -> Result<(), ServiceError> {
    let body = serde_json::to_string(&request).map_err(|e| ServiceError::Encode(e.to_string()))?;
    tracing::debug!(bytes = body.len(), %body, "export request body");

    tokio::time::sleep(config.export_delay).await;
    if config.fail_export {
        return Err(ServiceError::Export("simulated upstream error".to_string()));
    }
    Ok(())
}

/// Run generation on the runtime and report back through `tx`
pub fn spawn_generation(
    handle: &Handle,
    post: SocialPost,
    config: ServiceConfig,
    tx: UnboundedSender<AppEvent>,
) {
    tracing::info!(platform = post.platform.label(), chars = post.content.chars().count(), "generating listing");
    handle.spawn(async move {
        let result = simulate_generation(post, &config).await;
        if tx.send(AppEvent::ListingGenerated(result)).is_err() {
            tracing::debug!("ui loop gone before generation finished");
        }
    });
}

/// Run the export on the runtime and report back through `tx`
pub fn spawn_export(
    handle: &Handle,
    request: ExportRequest,
    config: ServiceConfig,
    tx: UnboundedSender<AppEvent>,
) {
    handle.spawn(async move {
        let result = simulate_export(request, &config).await;
        if tx.send(AppEvent::ExportFinished(result)).is_err() {
            tracing::debug!("ui loop gone before export finished");
        }
    });
}
