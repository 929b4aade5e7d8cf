/// The outcome of converting a document between type systems.
///
/// Every top-level declaration of the input ends up in exactly one of
/// `converted_types` or `not_converted_types`.
#[derive(Clone, Debug, PartialEq, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConversionResult<T> {
    pub data: T,
    pub converted_types: Vec<String>,
    pub not_converted_types: Vec<String>,
}
impl<T> ConversionResult<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> ConversionResult<U> {
        ConversionResult {
            data: f(self.data),
            converted_types: self.converted_types,
            not_converted_types: self.not_converted_types,
        }
    }
}
