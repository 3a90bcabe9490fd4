mod commands;
mod errors;
mod ids;
mod render;
mod session;
mod state;
#[cfg(test)]
mod tests;

pub use commands::Command;
pub use errors::{CommandError, DashboardError};
pub use ids::IdGenerator;
pub use session::run;
pub use state::Dashboard;
