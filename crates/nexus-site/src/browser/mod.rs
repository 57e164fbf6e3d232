//! Browser-only bindings: Stacks Connect and `localStorage`.

mod stacks;
mod storage;

pub use stacks::StacksConnect;
pub use storage::BrowserStorage;
