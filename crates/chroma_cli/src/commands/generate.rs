//! `chroma generate`

use std::fs;
use std::path::Path;

use anyhow::{anyhow, Context, Result};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chroma_core::Palette;
use chroma_llms::{Error as LlmError, PNG_DATA_URI_PREFIX};
use chroma_view::render_palette_showcase;
use tokio_util::sync::CancellationToken;
use tracing::debug;

use crate::cli::GenerateArgs;
use crate::config::ChromaConfig;
use crate::output;
use crate::render;

pub async fn handle(args: GenerateArgs, cancel: CancellationToken) -> Result<()> {
    let config = ChromaConfig::from_env()?.with_overrides(
        args.provider,
        args.model.clone(),
        args.timeout,
    )?;
    run(&config, &args, cancel).await
}

async fn run(config: &ChromaConfig, args: &GenerateArgs, cancel: CancellationToken) -> Result<()> {
    let client = config.palette_client()?;
    debug!(provider = client.provider_id(), model = client.model(), "Palette client ready");

    let spinner = output::spinner(&format!(
        "Generating palette with {} ({})",
        client.provider_id(),
        client.model()
    ));
    let mut palette = match client.generate(&args.seeds, Some(cancel.clone())).await {
        Ok(palette) => {
            output::spinner_success(&spinner, "Palette generated");
            palette
        }
        Err(e) => {
            spinner.finish_and_clear();
            return Err(anyhow!(e).context("Palette generation failed"));
        }
    };

    if let Some(path) = &args.hero {
        attach_hero(config, &mut palette, path, &cancel).await?;
    }

    render::print_palette(&palette)?;

    if let Some(path) = &args.svg {
        fs::write(path, render_palette_showcase(&palette))
            .with_context(|| format!("Writing showcase to {}", path.display()))?;
        output::success(&format!("Showcase written to {}", path.display()));
    }

    if let Some(path) = &args.save {
        save_palette(&palette, path)?;
        output::success(&format!("Palette saved to {}", path.display()));
    }

    Ok(())
}

/// A failed hero image is reported and the palette is kept. Only a user
/// interrupt aborts the command.
async fn attach_hero(
    config: &ChromaConfig,
    palette: &mut Palette,
    path: &Path,
    cancel: &CancellationToken,
) -> Result<()> {
    let client = match config.hero_client() {
        Ok(client) => client,
        Err(e) => {
            output::warning(&format!("Skipping hero image: {e}"));
            return Ok(());
        }
    };

    let spinner = output::spinner(&format!("Generating hero image with {}", client.model()));
    match client.attach(palette, Some(cancel.clone())).await {
        Ok(()) => {}
        Err(LlmError::Cancelled) => {
            spinner.finish_and_clear();
            return Err(anyhow!(LlmError::Cancelled));
        }
        Err(e) => {
            debug!(recoverable = e.is_recoverable(), status = ?e.status(), "Hero image failed");
            output::spinner_warning(&spinner, &format!("Hero image failed, palette kept: {e}"));
            return Ok(());
        }
    }

    let Some(data_uri) = palette.hero_image() else {
        spinner.finish_and_clear();
        return Ok(());
    };
    let png = match decode_png_data_uri(data_uri) {
        Ok(png) => png,
        Err(e) => {
            palette.clear_hero_image();
            output::spinner_warning(&spinner, &format!("Hero image unreadable, palette kept: {e:#}"));
            return Ok(());
        }
    };
    match fs::write(path, &png) {
        Ok(()) => output::spinner_success(&spinner, &format!("Hero image written to {}", path.display())),
        Err(e) => output::spinner_warning(
            &spinner,
            &format!("Could not write hero image to {}: {e}", path.display()),
        ),
    }
    Ok(())
}

/// Bytes of a `data:image/png;base64,...` URI.
pub fn decode_png_data_uri(data_uri: &str) -> Result<Vec<u8>> {
    let payload = data_uri
        .strip_prefix(PNG_DATA_URI_PREFIX)
        .ok_or_else(|| anyhow!("hero image is not a PNG data URI"))?;
    STANDARD
        .decode(payload.trim())
        .context("hero image payload is not valid base64")
}

pub fn save_palette(palette: &Palette, path: &Path) -> Result<()> {
    let json = serde_json::to_string_pretty(palette)?;
    fs::write(path, json).with_context(|| format!("Writing palette to {}", path.display()))
}
