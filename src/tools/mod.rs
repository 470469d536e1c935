//! Tool interface for host orchestrators.
//!
//! Hosts that expose the referee as callable tools (an agent runtime, an
//! RPC layer) only need three entry points. Responses are `Serialize` so
//! a host can hand them back as JSON unchanged.

mod referee;

pub use referee::{Referee, RefereeTools, RoundReport};
