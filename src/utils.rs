pub mod bitfield;
pub mod clonecell;
pub mod copyhashmap;
pub mod errorfmt;
pub mod numcell;
pub mod on_change;
pub mod smallmap;
pub mod syncqueue;
