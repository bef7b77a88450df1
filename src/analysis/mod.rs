pub mod profit;
pub mod similarity;
