pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The value was taken out of an absent `Optional`
    #[error("no value present")]
    NoValuePresent,
}
