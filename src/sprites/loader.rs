/// Sprite loading
///
/// Downloads one candidate and makes sure it actually decodes before the
/// rendering site accepts it. A 200 response carrying HTML is as useless
/// as a 404, so both count as a tier failure.

use std::sync::Arc;

use thiserror::Error;
use tokio::task;

use crate::catalog::client::CatalogSource;
use crate::catalog::error::SourceError;

/// A verified, displayable image
#[derive(Debug, Clone)]
pub struct SpriteBytes {
    pub bytes: Vec<u8>,
    pub width: u32,
    pub height: u32,
}

/// Failure of one tier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SpriteLoadError {
    #[error("fetch failed: {0}")]
    Fetch(#[from] SourceError),
    #[error("not a decodable image: {0}")]
    Decode(String),
}

/// Fetch `url` and verify it decodes
pub async fn load_sprite(
    source: Arc<dyn CatalogSource>,
    url: String,
) -> Result<SpriteBytes, SpriteLoadError> {
    let bytes = source.fetch_bytes(&url).await?;

    // Spawn blocking because decoding is CPU-bound
    task::spawn_blocking(move || decode(bytes))
        .await
        .map_err(|e| SpriteLoadError::Decode(format!("Task join error: {}", e)))?
}

fn decode(bytes: Vec<u8>) -> Result<SpriteBytes, SpriteLoadError> {
    let img = image::load_from_memory(&bytes).map_err(|e| SpriteLoadError::Decode(e.to_string()))?;

    Ok(SpriteBytes {
        width: img.width(),
        height: img.height(),
        bytes,
    })
}

#[cfg(test)]
pub(crate) fn tiny_png() -> Vec<u8> {
    let mut buffer = std::io::Cursor::new(Vec::new());
    image::RgbaImage::new(2, 2)
        .write_to(&mut buffer, image::ImageFormat::Png)
        .unwrap();
    buffer.into_inner()
}
