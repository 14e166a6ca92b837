//! Local persistence for the session snapshot

mod file;

pub use file::FileSessionStore;
