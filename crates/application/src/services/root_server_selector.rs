use dnstrace_domain::{DomainError, NameServer, RootHint};
use tracing::debug;

use crate::ports::RandomSource;

/// Uniform pick among the configured root hints.
pub struct RootServerSelector {
    roots: Vec<NameServer>,
}

impl RootServerSelector {
    pub fn new(hints: &[RootHint]) -> Result<Self, DomainError> {
        if hints.is_empty() {
            return Err(DomainError::NoRootServers);
        }

        Ok(Self {
            roots: hints.iter().map(RootHint::to_name_server).collect(),
        })
    }

    pub fn pick(&self, random: &mut dyn RandomSource) -> NameServer {
        let index = random.pick_index(self.roots.len()) % self.roots.len();
        let root = self.roots[index].clone();
        debug!(root = %root, "Selected root server");
        root
    }
}
