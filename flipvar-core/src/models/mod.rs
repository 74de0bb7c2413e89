pub mod sequence;
pub mod variant;

// re-export for cleaner imports
pub use self::sequence::SequenceRecord;
pub use self::variant::{Variant, VariantSet};
