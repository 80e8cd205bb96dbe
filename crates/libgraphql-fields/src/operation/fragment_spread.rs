use crate::DirectiveAnnotation;
use crate::loc;

#[derive(Clone, Debug, PartialEq)]
pub struct FragmentSpread {
    pub(super) def_location: loc::SourceLocation,
    pub(super) directives: Vec<DirectiveAnnotation>,
    pub(super) fragment_name: String,
}
impl FragmentSpread {
    pub fn new(fragment_name: impl Into<String>) -> Self {
        Self {
            def_location: loc::SourceLocation::Unspecified,
            directives: vec![],
            fragment_name: fragment_name.into(),
        }
    }

    pub fn with_directive(mut self, directive: DirectiveAnnotation) -> Self {
        self.directives.push(directive);
        self
    }

    pub fn def_location(&self) -> &loc::SourceLocation {
        &self.def_location
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        &self.directives
    }

    pub fn fragment_name(&self) -> &str {
        self.fragment_name.as_str()
    }
}
