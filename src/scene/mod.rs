//! Host scene graph: node model, the host interface, and an in-memory host
//!
//! The documentation pipeline never talks to a design tool directly. It reads
//! templates through [`SceneLookup`] and performs side effects through
//! [`Host`]; [`MemoryHost`] implements both over a JSON snapshot.

pub mod host;
pub mod instance;
pub mod memory;
pub mod types;

pub use host::{Host, HostError, Notice, NoticeLevel, SceneLookup};
pub use instance::{Instance, InstanceError, PropertyValue};
pub use memory::{MemoryHost, SceneError, Snapshot};
pub use types::*;
