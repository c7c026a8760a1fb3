/// Coarse classification of a [`ReportError`](super::ReportError).
///
/// The presentation layer uses this to pick its messaging without matching
/// on every variant.
///
/// | Kind | Source | Typical reaction |
/// |------|--------|------------------|
/// | `Network` | timeout, transport failure, non-2xx status | show error, offer reload |
/// | `MalformedResponse` | body that does not decode into the expected shape, or amounts whose total overflows | show error, report upstream |
/// | `InvalidInput` | bad period, reversed range, bad configuration | fix the selection |
/// | `Superseded` | a newer request for the same view was started | drop silently |
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ErrorKind {
    Network,
    MalformedResponse,
    InvalidInput,
    Superseded,
}

impl ErrorKind {
    /// Whether the failure should be surfaced to the user at all.
    pub fn is_user_visible(&self) -> bool {
        !matches!(self, Self::Superseded)
    }
}
