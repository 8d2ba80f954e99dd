// Domain layer - Report shaping pipeline, free of I/O
pub mod date;
pub mod document;
pub mod equipment;
pub mod operational;
pub mod pagination;
pub mod reading;
pub mod report;
pub mod sequence;
pub mod statistics;
pub mod status;
pub mod value;
