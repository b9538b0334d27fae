//! Terminal UI layer for portfolio sessions.
//!
//! The UI module owns rendering, layout, per-record formatting and the
//! session loop that feeds terminal input into [`crate::core::app`].
//!
//! Key submodules include:
//! - [`session`]: terminal lifecycle, event pump and the draw-after-every-event loop.
//! - [`renderer`] and [`layout`]: frame composition and the vertical partition.
//! - [`list_browser`], [`scroll_viewport`] and [`static_block`]: the content
//!   components a tab can show.
//! - [`delegate`]: how each record variant is formatted.
//! - [`theme`] and [`spinner`]: style policy and the splash animation.
//!
//! Ownership boundary: this layer presents state, while [`crate::core`] owns
//! the content and the navigation state machine.

pub mod delegate;
pub mod layout;
pub mod list_browser;
pub mod renderer;
pub mod scroll_viewport;
pub mod session;
pub mod spinner;
pub mod static_block;
pub mod theme;
