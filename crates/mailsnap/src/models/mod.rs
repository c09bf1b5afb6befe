//! Domain models for snapshot entities

mod folder;
mod message;
mod profile;
mod snapshot;
mod timestamp;

pub use folder::{Folder, FolderId};
pub use message::{DRAFT_SENDER, EMPTY_FIELD, Message, MessageBuilder};
pub use profile::Profile;
pub use snapshot::{MAX_MESSAGES, Snapshot};
pub use timestamp::Timestamp;
