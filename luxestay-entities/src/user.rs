use crate::id::Id;

/// The member that is currently signed in.
///
/// There are no credentials attached: authentication
/// only decides about the display name.
#[rustfmt::skip]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id    : Id,
    pub email : String,
    pub name  : String,
}
