//! Design tokens
//!
//! Spacing, radius, typography and opacity values shared by the demo screen
//! and its components.

// =============================================================================
// Spacing Tokens
// =============================================================================

/// Spacing scale in pixels, on a 4px base unit
pub mod spacing {
    /// 8px - Small
    pub const SPACE_SM: f32 = 8.0;
    /// 16px - Large
    pub const SPACE_LG: f32 = 16.0;
    /// 20px - Extra large
    pub const SPACE_XL: f32 = 20.0;
    /// 24px - 2x large
    pub const SPACE_2XL: f32 = 24.0;
    /// 32px - 3x large
    pub const SPACE_3XL: f32 = 32.0;
    /// 40px - 4x large
    pub const SPACE_4XL: f32 = 40.0;
    /// 60px - header top inset
    pub const SPACE_HEADER_TOP: f32 = 60.0;
}

// =============================================================================
// Radius Tokens
// =============================================================================

/// Border radius values
pub mod radius {
    /// Code blocks
    pub const MD: f32 = 12.0;
    /// Theme display card
    pub const LG: f32 = 16.0;
    /// Example cards
    pub const XL: f32 = 20.0;
    /// Header bottom corners
    pub const HEADER: f32 = 30.0;
}

// =============================================================================
// Typography Tokens
// =============================================================================

/// Font sizes in pixels
pub mod font_size {
    /// Descriptions and code
    pub const SM: f32 = 14.0;
    /// Header subtitle
    pub const MD: f32 = 16.0;
    /// Theme display
    pub const LG: f32 = 18.0;
    /// Section titles
    pub const XL: f32 = 20.0;
    /// Header example title
    pub const XXL: f32 = 24.0;
    /// Screen title
    pub const DISPLAY: f32 = 32.0;
}

/// Font weights
pub mod font_weight {
    /// Regular text
    pub const REGULAR: u16 = 400;
    /// Medium emphasis
    pub const MEDIUM: u16 = 500;
    /// Section titles
    pub const SEMIBOLD: u16 = 600;
    /// Headings
    pub const BOLD: u16 = 700;
}

// =============================================================================
// Opacity Tokens
// =============================================================================

/// Opacity values
pub mod opacity {
    /// Pressed-state opacity for touchable controls
    pub const PRESSED: f32 = 0.7;
}

/// Translucent white used on top of brand gradients
pub const OVERLAY_WHITE: &str = "rgba(255, 255, 255, 0.2)";

/// Slightly transparent white for subtitles on gradients
pub const SUBTITLE_WHITE: &str = "rgba(255, 255, 255, 0.9)";
