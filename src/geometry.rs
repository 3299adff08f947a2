pub mod distances3;
