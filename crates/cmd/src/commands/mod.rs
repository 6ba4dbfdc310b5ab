pub mod cat;
pub mod demo;
pub mod ls;
pub mod tree;
