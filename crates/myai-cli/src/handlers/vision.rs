//! `myai vision` and the Vision screen.

use std::path::Path;

use myai_core::{ImageInput, VisionPort, VisionResult};

use crate::bootstrap::CliContext;
use crate::error::{CliError, VISION_FAILED_MESSAGE};

/// Analyze the image at `path` and print the description.
pub async fn execute(ctx: &CliContext, path: &Path, prompt: &str) -> Result<(), CliError> {
    let image = ImageInput::load(path).await?;
    let result = analyze(ctx.vision(), &image, prompt).await?;
    print!("{}", render(&result));
    Ok(())
}

/// Run the analysis, folding any failure into the user-facing message.
pub async fn analyze(
    port: &dyn VisionPort,
    image: &ImageInput,
    prompt: &str,
) -> Result<VisionResult, CliError> {
    port.analyze(image, prompt).await.map_err(|e| {
        tracing::debug!(error = %e, "Image analysis failed");
        CliError::Service(VISION_FAILED_MESSAGE.to_string())
    })
}

/// Description followed by any related links.
pub fn render(result: &VisionResult) -> String {
    let mut out = format!("{}\n", result.text);
    if !result.related_links.is_empty() {
        out.push_str("\nRelated:\n");
        for link in &result.related_links {
            out.push_str(&format!("  - {} <{}>\n", link.title, link.uri));
        }
    }
    out
}
