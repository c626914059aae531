//! `cabin-agent` — passenger state and arena storage.
//!
//! # Crate layout
//!
//! | Module          | Contents                                                  |
//! |-----------------|-----------------------------------------------------------|
//! | [`agent`]       | `Agent`, `Trip`, `Infection`, `InfectionRoute`            |
//! | [`store`]       | `AgentStore` (arena indexed by `AgentId`)                 |
//! | [`builder`]     | `PopulationConfig`, `PopulationBuilder`                   |
//! | [`error`]       | `AgentError`, `AgentResult<T>`                            |

pub mod agent;
pub mod builder;
pub mod error;
pub mod store;


pub use agent::{Agent, Infection, InfectionRoute, Trip};
pub use builder::{PopulationBuilder, PopulationConfig};
pub use error::{AgentError, AgentResult};
pub use store::AgentStore;
