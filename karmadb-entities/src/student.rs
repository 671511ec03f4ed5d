use crate::id::Id;

#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub id        : Id,
    /// Unique identifier assigned by the school
    pub school_id : String,
    pub name      : String,
    pub faculty   : String,
    pub programme : String,
}
