pub mod cigar;
pub mod recommendation;
pub mod session;
pub mod summary;
pub mod tasting;
