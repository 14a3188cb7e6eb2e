pub mod error;
pub mod materializer;
pub mod render;

pub use error::MaterializeError;
pub use materializer::Materializer;
pub use render::render_credential_file;
