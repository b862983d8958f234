//! Input controller: keypad buttons and the state they drive.

mod button;
mod state;

pub use button::{Button, UnknownButton};
pub use state::{CalcState, reduce, reduce_all};
