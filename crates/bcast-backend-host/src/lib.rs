//! Row-major host-memory reference backend for `bcast`.
//!
//! [`HostTensor`] is the concrete array used by integration tests and
//! examples; the broadcasting core itself only ever sees it through the
//! [`ArrayLike`](bcast::ArrayLike) capability trait.

pub mod host;

pub use host::HostTensor;
