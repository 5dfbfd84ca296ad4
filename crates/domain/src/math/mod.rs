/// Constant product (x * y = k) quote math.
pub mod constant_product;
