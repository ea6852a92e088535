pub mod logging;
pub mod privilege;
