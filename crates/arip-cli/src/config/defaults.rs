use arip::core::lookup::defaults::DEFAULT_PROBE_RADIUS;

pub struct DefaultsConfig {
    pub probe_radius: f64,
    pub extensions: Vec<String>,
    pub dump: bool,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            probe_radius: DEFAULT_PROBE_RADIUS,
            extensions: ["pdb", "ent", "pdb.gz", "ent.gz"]
                .into_iter()
                .map(String::from)
                .collect(),
            dump: false,
        }
    }
}
