use crate::cost::CostError;
use crate::operation::Document;
use crate::operation::FragmentDefinition;
use std::collections::HashMap;

/// Read-only index of a document's fragment definitions by name.
#[derive(Debug)]
pub(crate) struct FragmentTable<'doc> {
    fragments: HashMap<&'doc str, &'doc FragmentDefinition>,
}
impl<'doc> FragmentTable<'doc> {
    pub fn get(&self, fragment_name: &str) -> Option<&'doc FragmentDefinition> {
        self.fragments.get(fragment_name).copied()
    }

    /// Index every fragment in `document`, failing eagerly on the first
    /// name defined twice.
    pub fn index(document: &'doc Document) -> Result<Self, CostError> {
        let mut fragments = HashMap::new();
        for frag_def in document.fragments() {
            if let Some(existing) = fragments.insert(frag_def.name(), frag_def) {
                return Err(CostError::DuplicateFragmentName {
                    fragment_name: frag_def.name().to_string(),
                    def1: existing.def_location().clone(),
                    def2: frag_def.def_location().clone(),
                });
            }
        }
        Ok(Self { fragments })
    }

    pub fn len(&self) -> usize {
        self.fragments.len()
    }
}
