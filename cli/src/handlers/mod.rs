pub mod models;
pub mod run;
pub mod serve;
pub use models::handle_models;
pub use run::handle_run;
pub use serve::handle_serve;
