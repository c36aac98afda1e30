use crate::display_prop::DisplayProp;

/// A connection point of a symbol, with its attached display properties.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Port {
    pub name: String,
    pub display_props: Vec<DisplayProp>,
}
