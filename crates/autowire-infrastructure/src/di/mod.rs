//! Dependency Injection
//!
//! The autowiring [`Injector`] and the pieces it is assembled from.
//!
//! ```text
//! Injector
//! ├── registries   aliases, shares, delegates, definitions, prepare hooks
//! ├── provision    constructor and invokable argument resolution
//! ├── executable   invokable classification
//! ├── chain        cycle detection
//! ├── resolver     chain-aware handle given to prepare hooks
//! └── inspect      registry snapshots
//! ```

pub mod chain;
pub mod executable;
pub mod injector;
pub mod inspect;
mod provision;
pub mod registries;
pub mod resolver;

pub use chain::ResolutionChain;
pub use executable::{BoundExecutable, Executable, describe_invokable};
pub use injector::Injector;
pub use inspect::{
    I_ALIASES, I_ALL, I_BINDINGS, I_DELEGATES, I_PREPARES, I_SHARES, InspectFlags, Inspection,
};
pub use registries::{PrepareHook, PrepareRegistry, ShareRegistry};
pub use resolver::Resolver;
