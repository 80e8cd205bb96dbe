/// Which root type an [`Operation`](crate::operation::Operation) was declared
/// against.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationKind {
    Mutation,
    Query,
    Subscription,
}
