pub mod taginfo;
