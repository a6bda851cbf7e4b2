mod loader;

pub use loader::{LoaderError, load_profiles_from};
