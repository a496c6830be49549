// Library entry exposing generator modules.
pub mod error;
pub mod generator;
pub mod instructions;
pub mod opcode_table;
pub mod random;
pub mod sink;
