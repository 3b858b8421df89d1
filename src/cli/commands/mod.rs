mod config;
mod scan;
mod sift;
mod status;

pub use config::ConfigCommand;
pub use scan::ScanArgs;
pub use sift::SiftArgs;

pub use config::handle_config;
pub use scan::handle_scan;
pub use sift::handle_sift;
pub use status::handle_status;
