pub mod files;
pub mod store;

pub use files::{
    atomic_write, ensure_data_dir, get_data_dir, init_local_dir, report_file, state_file,
};
pub use store::{StorageError, Store};
