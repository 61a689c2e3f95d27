pub mod document_types;
pub mod environments;
pub mod page;
pub mod search;
