use crate::DirectiveAnnotation;
use crate::loc;
use crate::operation::FieldSelection;
use crate::operation::FragmentSpread;
use crate::operation::InlineFragment;

/// One entry in a [`SelectionSet`](crate::operation::SelectionSet).
#[derive(Clone, Debug, PartialEq)]
pub enum Selection {
    Field(FieldSelection),
    FragmentSpread(FragmentSpread),
    InlineFragment(InlineFragment),
}
impl Selection {
    pub fn def_location(&self) -> &loc::SourceLocation {
        match self {
            Self::Field(field) => field.def_location(),
            Self::FragmentSpread(spread) => spread.def_location(),
            Self::InlineFragment(inline) => inline.def_location(),
        }
    }

    pub fn directives(&self) -> &Vec<DirectiveAnnotation> {
        match self {
            Self::Field(field) => field.directives(),
            Self::FragmentSpread(spread) => spread.directives(),
            Self::InlineFragment(inline) => inline.directives(),
        }
    }
}
impl From<FieldSelection> for Selection {
    fn from(field: FieldSelection) -> Self {
        Self::Field(field)
    }
}
impl From<FragmentSpread> for Selection {
    fn from(spread: FragmentSpread) -> Self {
        Self::FragmentSpread(spread)
    }
}
impl From<InlineFragment> for Selection {
    fn from(inline: InlineFragment) -> Self {
        Self::InlineFragment(inline)
    }
}
