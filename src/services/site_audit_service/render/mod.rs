pub mod printer;

pub use printer::render;
