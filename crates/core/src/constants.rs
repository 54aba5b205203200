/// Quantity threshold below which a position counts as closed
pub const QUANTITY_THRESHOLD: &str = "0.000000001";
