pub mod countdown;
pub mod display;
pub mod normalize;
pub mod rerank;
