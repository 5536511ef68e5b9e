//! Centralized color theme for the application.
//!
//! This module provides all colors used by the decal panel and its overlays.
//! Modify values here to change the application's color scheme.

use bevy::prelude::Color;

// ============================================================================
// Panel Colors
// ============================================================================

/// Background of the tool strip that hosts the decal controls
pub const PANEL_BACKGROUND: Color = Color::srgba(0.12, 0.12, 0.14, 0.95);

/// Background behind each control's image
pub const CONTROL_BACKGROUND: Color = Color::srgb(0.22, 0.22, 0.25);

/// Thin frame drawn around decal controls
pub const CONTROL_FRAME: Color = Color::srgba(1.0, 1.0, 1.0, 0.15);

/// Control label text
pub const CONTROL_LABEL: Color = Color::srgb(0.85, 0.85, 0.85);

/// Border of the selected-decal preview
pub const PREVIEW_BORDER: Color = Color::srgb(0.2, 0.6, 1.0);

// ============================================================================
// Reload Control Colors
// ============================================================================

/// Flat tint used when the reload icon could not be resolved
pub const RELOAD_ERROR_TINT: Color = Color::srgb(1.0, 0.0, 0.0);

// ============================================================================
// Tooltip Colors
// ============================================================================

/// Dark translucent tooltip background
pub const TOOLTIP_BACKGROUND: Color = Color::srgba(0.1, 0.1, 0.1, 0.9);

/// Tooltip text
pub const TOOLTIP_TEXT: Color = Color::WHITE;
