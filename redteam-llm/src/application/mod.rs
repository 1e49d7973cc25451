pub mod normalize;
pub mod use_cases;
