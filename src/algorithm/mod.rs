/// Worker-thread generation reporting through a channel
pub mod background;
/// Completed boards and answer checking
pub mod board;
/// Decoy letter pools and the fill pass
pub mod filler;
/// Board generation state machine and retry ladders
pub mod generator;
/// Randomized depth-first path search for one word
pub mod pathfinder;
/// Word placement and the substitution ladder
pub mod placer;
/// Seeded random source shared by every draw
pub mod random;
/// Complexity heuristics for candidate paths
pub mod scoring;
/// Target word selection by length distribution
pub mod selection;
/// Per-search visited cell set
pub mod visited;
