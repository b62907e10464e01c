//! `copysmith generate` -- the form client.
//!
//! Collects the form fields as flags, POSTs them to a running server and
//! prints the copy. `--local` skips the server and runs the copy service
//! in-process with the same configuration `serve` would use.

use std::str::FromStr;
use std::time::Duration;

use anyhow::{bail, Result};
use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use copysmith_types::config::CopysmithConfig;
use copysmith_types::copy::{CopyRequest, CopyResult, CopyType, Tone};

use crate::state::AppState;

#[derive(Debug, Args)]
pub struct GenerateArgs {
    /// Copy type (website-headline, product-description, email-campaign,
    /// social-media-post, ad-copy, blog-intro, sales-letter, tagline).
    #[arg(long = "type", default_value = "website-headline", value_parser = CopyType::from_str)]
    pub copy_type: CopyType,

    /// Product or service name.
    #[arg(long)]
    pub product: String,

    /// Target audience.
    #[arg(long, default_value = "")]
    pub audience: String,

    /// Key benefits.
    #[arg(long, default_value = "")]
    pub benefits: String,

    /// Tone of voice (professional, casual, friendly, authoritative,
    /// playful, urgent, inspirational).
    #[arg(long, default_value = "professional", value_parser = Tone::from_str)]
    pub tone: Tone,

    /// Additional context for the writer.
    #[arg(long)]
    pub info: Option<String>,

    /// Server base URL.
    #[arg(long, env = "COPYSMITH_SERVER", default_value = "http://127.0.0.1:3000")]
    pub server: String,

    /// Generate in-process instead of calling a server.
    #[arg(long)]
    pub local: bool,
}

impl GenerateArgs {
    pub fn to_request(&self) -> CopyRequest {
        CopyRequest {
            copy_type: self.copy_type,
            product: self.product.clone(),
            target_audience: self.audience.clone(),
            key_benefits: self.benefits.clone(),
            tone: self.tone.clone(),
            additional_info: self.info.clone().filter(|info| !info.is_empty()),
        }
    }
}

/// POST a request to `{server}/api/generate` and return the copy.
///
/// Any non-success status, transport failure or unexpected body collapses
/// into the generic error message.
pub async fn request_copy(
    client: &reqwest::Client,
    server: &str,
    request: &CopyRequest,
) -> Result<String> {
    let url = format!("{}/api/generate", server.trim_end_matches('/'));

    let response = match client.post(&url).json(request).send().await {
        Ok(response) => response,
        Err(e) => {
            tracing::debug!(url = %url, error = %e, "copy request failed");
            bail!(CopyResult::GENERIC_ERROR);
        }
    };

    if !response.status().is_success() {
        tracing::debug!(status = %response.status(), "copy server returned an error");
        bail!(CopyResult::GENERIC_ERROR);
    }

    match response.json::<CopyResult>().await {
        Ok(CopyResult::Copy { copy }) => Ok(copy),
        Ok(CopyResult::Error { error }) => bail!(error),
        Err(e) => {
            tracing::debug!(error = %e, "unreadable copy response");
            bail!(CopyResult::GENERIC_ERROR)
        }
    }
}

pub async fn generate(args: GenerateArgs, config: CopysmithConfig, json: bool) -> Result<()> {
    let request = args.to_request();

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}")?);
    spinner.set_message(format!("Writing {}...", request.copy_type.label().to_lowercase()));
    if !json {
        spinner.enable_steady_tick(Duration::from_millis(80));
    }

    let outcome = if args.local {
        let state = AppState::init(config)?;
        Ok(state.copy_service.generate(&request).await.text)
    } else {
        request_copy(&reqwest::Client::new(), &args.server, &request).await
    };

    spinner.finish_and_clear();

    match outcome {
        Ok(copy) => {
            if json {
                println!("{}", serde_json::to_string_pretty(&CopyResult::copy(copy))?);
            } else {
                println!();
                println!(
                    "  {} {}",
                    style("✓").green().bold(),
                    style(request.copy_type.label()).bold()
                );
                println!();
                println!("{copy}");
                println!();
            }
            Ok(())
        }
        Err(e) => {
            if json {
                let result = CopyResult::Error {
                    error: e.to_string(),
                };
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Err(e)
        }
    }
}
