/// A validated conversion: amount, normalized source code, and normalized targets.
///
/// An empty `targets` list means every code in the rate table.
#[derive(Debug, Clone, PartialEq)]
pub struct ConversionRequest {
    pub amount: f64,
    pub from: String,
    pub targets: Vec<String>,
}
