use crate::loc;

/// A custom (non-builtin)
/// [scalar type](https://spec.graphql.org/October2021/#sec-Scalars).
#[derive(Clone, Debug)]
pub struct ScalarType {
    pub(crate) def_location: loc::SourceLocation,
    pub(crate) name: String,
}
impl ScalarType {
    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn name(&self) -> &str {
        self.name.as_str()
    }
}
