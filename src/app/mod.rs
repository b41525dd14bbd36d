//! Application layer coordinating state, events, and actions.
//!
//! Sits between the plugin runtime (main.rs) and the domain/service layers.
//!
//! # Architecture
//!
//! ```text
//! Key Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                           ↑                                         ↓
//!                           └──────── Search Completions ◄────────────┘
//! ```
//!
//! # Modules
//!
//! - [`query`]: query text, result list and load state lifecycle
//! - [`pagination`]: fixed-size page windowing over the results
//! - [`selection`]: the detail overlay's selected item
//! - [`state`]: composition of the above plus view model computation
//! - [`handler`]: event processing
//! - [`keys`]: key bindings per focus
//! - [`actions`]: side effect commands emitted by the handler
//! - [`modes`]: input focus

pub mod actions;
pub mod handler;
pub mod keys;
pub mod modes;
pub mod pagination;
pub mod query;
pub mod selection;
pub mod state;

pub use actions::Action;
pub use handler::{handle_event, Event};
pub use keys::map_key;
pub use modes::Focus;
pub use pagination::{Paginator, DEFAULT_PAGE_SIZE};
pub use query::{
    Completion, LoadState, QueryController, SearchOutcome, SEARCH_FAILED_MESSAGE,
};
pub use selection::SelectionOverlay;
pub use state::AppState;
