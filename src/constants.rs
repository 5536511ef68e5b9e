//! Centralized constants used across the application.
//!
//! This module contains file names, sizes and labels that are shared between
//! the decal loader and the host panel.

/// Default window width in pixels
pub const DEFAULT_WINDOW_WIDTH: f32 = 1280.0;

/// Default window height in pixels
pub const DEFAULT_WINDOW_HEIGHT: f32 = 720.0;

/// Name of the asset directory created under the config directory
pub const DECALS_DIR_NAME: &str = "decals";

/// Extension (without dot) of files picked up as decals
pub const DECAL_EXTENSION: &str = "png";

/// Reserved file name of the reload icon. Never listed as a decal.
pub const RELOAD_ICON_NAME: &str = "reload_icon.png";

/// Prefix for the entity name of every generated decal control
pub const DECAL_CONTROL_PREFIX: &str = "CustomDecal_";

/// Entity name of the reload control
pub const RELOAD_CONTROL_NAME: &str = "ReloadDecalsButton";

/// Label shown on the reload control
pub const RELOAD_LABEL: &str = "Reload";

/// Tooltip shown when hovering the reload control
pub const RELOAD_TOOLTIP_TEXT: &str = "Reload Decals";

/// Side length of a panel control in pixels
pub const CONTROL_SIZE: f32 = 72.0;

/// Offset of the tooltip's top-left corner from the pointer (y grows downward)
pub const TOOLTIP_OFFSET: (f32, f32) = (15.0, 15.0);

/// Tooltip box width in pixels
pub const TOOLTIP_WIDTH: f32 = 200.0;

/// Tooltip box height in pixels
pub const TOOLTIP_HEIGHT: f32 = 40.0;

/// Tooltip font size
pub const TOOLTIP_FONT_SIZE: f32 = 16.0;
