//! Screen-size based selection of resolution variants.

/// Current size of the game window in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Parse "WIDTHxHEIGHT", e.g. "1024x768".
    pub fn parse(s: &str) -> Option<Self> {
        let (w, h) = s.trim().split_once(['x', 'X'])?;
        Some(Self::new(w.trim().parse().ok()?, h.trim().parse().ok()?))
    }
}

/// Something that can report the size of the game window.
pub trait ScreenSizeProvider: Send + Sync {
    fn screen_size(&self) -> ScreenSize;
}

/// Provider returning a size fixed at construction.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedScreen(pub ScreenSize);

impl ScreenSizeProvider for FixedScreen {
    fn screen_size(&self) -> ScreenSize {
        self.0
    }
}

/// The size thresholds a variant was authored for.
pub trait ResolutionBounds {
    fn window_width(&self) -> u32;
    fn window_height(&self) -> u32;

    /// True when the screen fits within this variant's thresholds.
    fn fits(&self, screen: ScreenSize) -> bool {
        screen.width <= self.window_width() && screen.height <= self.window_height()
    }
}

/// Pick the first variant the screen fits in, falling back to the last one.
///
/// Variants are expected smallest-threshold first. `None` only for an empty
/// slice, which the loaders never produce.
pub fn select_resolution<T: ResolutionBounds>(variants: &[T], screen: ScreenSize) -> Option<&T> {
    variants
        .iter()
        .find(|v| v.fits(screen))
        .or_else(|| variants.last())
}
