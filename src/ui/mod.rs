//! User interface rendering layer with component-based architecture.
//!
//! # Modules
//!
//! - [`viewmodel`]: view model types representing renderable UI state
//! - [`renderer`]: top-level rendering coordinator
//! - [`components`]: composable UI component renderers
//! - [`helpers`]: shared text utilities (truncation, wrapping, highlighting)
//! - [`theme`]: color schemes and ANSI escape sequences

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::render;
pub use theme::Theme;
pub use viewmodel::{
    DetailView, DisplayItem, EmptyState, FooterInfo, HeaderInfo, PagerInfo, SearchBarInfo,
    StatusKind, StatusLine, UIViewModel,
};
