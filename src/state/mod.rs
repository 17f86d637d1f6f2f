pub mod gesture;
pub mod vote;

pub use gesture::{Direction, GestureState, GestureVoteController, SwipeConfig};
pub use vote::{GestureOutcome, VoteNotice, VoteState};
