//! Filter and pagination state of the board view.

mod controller;
mod intent;
mod reducer;
mod state;

pub use controller::BoardController;
pub use intent::BoardIntent;
pub use reducer::BoardReducer;
pub use state::BoardState;
