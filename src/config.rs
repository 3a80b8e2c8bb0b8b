use crate::topology::Adjacency;
use crate::universe::Universe;

/// Edge handling for one run: `neighbors` drives generation advance,
/// `communities` drives community detection. The two are independent.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Config {
  pub neighbors: Adjacency,
  pub communities: Adjacency,
}

impl Config {
  pub fn new(neighbors: Adjacency, communities: Adjacency) -> Self {
    Self { neighbors, communities }
  }

  pub fn apply(&self, universe: &mut Universe) {
    universe.set_adjacency(self.neighbors);
  }

  pub fn num_of_communities(&self, universe: &Universe) -> usize {
    universe.num_of_communities(self.communities)
  }
}
