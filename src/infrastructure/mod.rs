mod store;

pub use store::FileSystemStore;
