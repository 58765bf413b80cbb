//! Model-View-Intent (MVI) primitives.
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: everything a view needs to render
//! - **Intent**: user actions or delivered data (a fetched list, a prompt answer)
//! - **Reducer**: pure `(State, Intent) -> State`
//!
//! Validation and side effects (prompting, network calls) stay with the
//! caller that dispatches the intent.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
