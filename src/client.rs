pub mod addi;
pub mod search;
