//! Selection model
//!
//! Pure data and transitions, no platform dependencies:
//! - `state`: annotated option list and its id projection
//! - `reduce`: `next = reduce(current, action)`

pub mod reduce;
pub mod state;

pub use reduce::{Action, Origin, initial_ids, load, reduce};
pub use state::{Selection, SelectionState};
