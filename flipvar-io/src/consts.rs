pub const FASTA_FILE_EXTENSION: &str = "fasta";
pub const VARIANT_FILE_EXTENSION: &str = "var";
