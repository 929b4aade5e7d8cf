/// Picks names for the types GraphQL needs declared at the top level but the
/// core-types document left anonymous (nested objects).
///
/// `is_available` reports whether a candidate name is still unused in the
/// conversion's name registry; implementations must return a name it
/// accepts.
pub trait NameGenerator {
    fn generate_name(
        &self,
        base_name: &str,
        name_hint: &str,
        is_available: &dyn Fn(&str) -> bool,
    ) -> String;
}
impl<F> NameGenerator for F
where
    F: Fn(&str, &str, &dyn Fn(&str) -> bool) -> String,
{
    fn generate_name(
        &self,
        base_name: &str,
        name_hint: &str,
        is_available: &dyn Fn(&str) -> bool,
    ) -> String {
        self(base_name, name_hint, is_available)
    }
}

/// Generates `{base}_{hint}`, falling back to `{base}_{hint}_2`,
/// `{base}_{hint}_3`, ... until an available name is found.
#[derive(Clone, Copy, Debug, Default)]
pub struct DefaultNameGenerator;
impl NameGenerator for DefaultNameGenerator {
    fn generate_name(
        &self,
        base_name: &str,
        name_hint: &str,
        is_available: &dyn Fn(&str) -> bool,
    ) -> String {
        let mut name = format!("{base_name}_{name_hint}");
        let mut suffix = 1;
        while !is_available(&name) {
            suffix += 1;
            name = format!("{base_name}_{name_hint}_{suffix}");
        }
        name
    }
}
