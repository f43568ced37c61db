mod area;

pub use area::Area;
