// File: crates/tally-core/src/frame.rs
// Summary: Per-render drawing context: a private raster surface plus text shaper.
// Notes:
// - A Frame is created for exactly one render call and dropped on every exit
//   path, so no drawing state outlives or is shared between renders.

use skia_safe as skia;

use crate::error::{Result, TallyError};
use crate::text::TextShaper;

pub(crate) struct Frame {
    surface: skia::Surface,
    text: Option<TextShaper>,
    width: i32,
    height: i32,
}

impl Frame {
    /// Allocate a CPU raster surface of `width` x `height`; text shaping is
    /// only set up when labels will be drawn.
    pub(crate) fn acquire(width: i32, height: i32, with_text: bool) -> Result<Self> {
        let surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or(TallyError::Surface { width, height })?;
        let text = with_text.then(TextShaper::new);
        tracing::trace!(width, height, with_text, "frame acquired");
        Ok(Self { surface, text, width, height })
    }

    /// Canvas and (optional) shaper, borrowed together for one drawing pass.
    pub(crate) fn parts(&mut self) -> (&skia::Canvas, Option<&TextShaper>) {
        (self.surface.canvas(), self.text.as_ref())
    }

    /// Snapshot the surface and encode it as PNG.
    pub(crate) fn encode_png(&mut self) -> Result<Vec<u8>> {
        let image = self.surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or(TallyError::Encode)?;
        Ok(data.as_bytes().to_vec())
    }
}

impl Drop for Frame {
    fn drop(&mut self) {
        tracing::trace!(width = self.width, height = self.height, "frame released");
    }
}
