use std::path::PathBuf;

pub struct AppConfig {
    pub inputs: Vec<PathBuf>,
    /// `None` selects the bundled property table.
    pub lookup_path: Option<PathBuf>,
    pub probe_radius: f64,
    pub extensions: Vec<String>,
    pub dump: bool,
}
