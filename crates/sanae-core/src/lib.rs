pub mod constants;
pub mod discovery;
pub mod dom;
pub mod error;
#[cfg(feature = "test-support")]
pub mod memdom;
pub mod overlay;
#[cfg(feature = "test-support")]
pub mod selector;
pub mod toggle;
pub mod typewriter;

pub use constants::*;
pub use discovery::*;
pub use dom::DomTree;
pub use error::{Error, Result};
pub use toggle::*;
