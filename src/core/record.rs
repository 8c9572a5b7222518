/// A single input sequence from the assembly
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SequenceRecord {
    /// Sequence identifier (first word of the FASTA definition line)
    pub id: String,

    /// Sequence length in bases
    pub length: u64,

    /// Residues, kept so a selected contig can be staged for the aligner
    pub sequence: Vec<u8>,
}

impl SequenceRecord {
    pub fn new(id: impl Into<String>, sequence: Vec<u8>) -> Self {
        Self {
            id: id.into(),
            length: sequence.len() as u64,
            sequence,
        }
    }
}
