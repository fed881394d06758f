//! Image asset state.

/// The image the effect slides across the surface.
///
/// The asset is considered loaded once the host reports a non-zero
/// natural width; until then the trigger is a no-op.
#[derive(Debug, Clone)]
pub struct ImageAsset {
    source: Option<String>,
    natural_width: u32,
    display_size: u32,
}

impl ImageAsset {
    /// An asset that is still loading (natural width unknown).
    pub fn pending(display_size: u32) -> Self {
        Self {
            source: None,
            natural_width: 0,
            display_size,
        }
    }

    /// A fully loaded asset.
    pub fn loaded(natural_width: u32, display_size: u32) -> Self {
        Self {
            source: None,
            natural_width,
            display_size,
        }
    }

    /// Record the asset reference (path or URL) for logging.
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Host callback once the image has decoded.
    pub fn mark_loaded(&mut self, natural_width: u32) {
        self.natural_width = natural_width;
    }

    /// Whether the image has finished loading.
    pub fn is_loaded(&self) -> bool {
        self.natural_width > 0
    }

    /// Display size in pixels; also the slide distance.
    pub fn display_size(&self) -> u32 {
        self.display_size
    }

    pub fn natural_width(&self) -> u32 {
        self.natural_width
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pending_asset_is_not_loaded() {
        let asset = ImageAsset::pending(150);
        assert!(!asset.is_loaded());
        assert_eq!(asset.display_size(), 150);
    }

    #[test]
    fn test_mark_loaded() {
        let mut asset = ImageAsset::pending(150).with_source("toasty.png");
        asset.mark_loaded(169);
        assert!(asset.is_loaded());
        assert_eq!(asset.natural_width(), 169);
        assert_eq!(asset.source(), Some("toasty.png"));
    }
}
