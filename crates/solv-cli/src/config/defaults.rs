use solvsieve::curation::classify::Category;
use solvsieve::estimation::options::DEFAULT_N_MOLECULES;

pub struct DefaultsConfig {
    pub target_category: Category,
    pub n_molecules: usize,
}

impl Default for DefaultsConfig {
    fn default() -> Self {
        Self {
            target_category: Category::TerminalAlkynes,
            n_molecules: DEFAULT_N_MOLECULES,
        }
    }
}
