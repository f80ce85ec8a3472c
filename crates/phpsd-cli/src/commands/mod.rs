//! Command implementations

mod show;
mod sync;

pub use show::run_show_canonical;
pub use sync::run_sync;
