//! Component trait system for the TUI
//!
//! Components own their UI state and declare their capabilities through
//! traits. `App` routes input to the focused component and hands every
//! component the same immutable `RenderContext` when drawing.
//!
//! ```text
//!                 App (focus, routing)
//!                         │
//!     ┌───────────────┬───┴───────────┬──────────────┐
//!     ▼               ▼               ▼              ▼
//! CategorySelect  FetchButton     JokeList       LogsPanel
//! ```
//!
//! - [`Component`] - render + identity
//! - [`Interactive`] - keyboard handling

mod component;
mod interactive;

pub use component::{Component, ComponentId, RenderContext};
pub use interactive::{Handled, Interactive};
