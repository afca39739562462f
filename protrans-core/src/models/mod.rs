pub mod chunk;
pub mod protein;
pub mod sequence;
pub mod symbol;

// re-export for cleaner imports
pub use self::chunk::{Chunk, ChunkSet};
pub use self::protein::{Protein, StopReason};
pub use self::sequence::Sequence;
pub use self::symbol::Symbol;
