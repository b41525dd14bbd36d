//! Web access permission gate.
//!
//! Zellij answers the plugin's permission request asynchronously, and a user
//! can search before the answer arrives. [`PermissionGate`] wraps a
//! [`SearchService`] and holds the latest request back until access is
//! granted. Older held requests are dropped: their responses would be
//! superseded anyway.

use super::{RequestSeq, SearchRequest, SearchService};
use crate::domain::error::{Result, StargazerError};

/// State of the host's web access permission.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum WebAccess {
    #[default]
    Pending,
    Granted,
    Denied,
}

#[derive(Debug)]
pub struct PermissionGate<S> {
    inner: S,
    access: WebAccess,
    held: Option<SearchRequest>,
}

impl<S: SearchService> PermissionGate<S> {
    pub const fn new(inner: S) -> Self {
        Self {
            inner,
            access: WebAccess::Pending,
            held: None,
        }
    }

    #[must_use]
    pub const fn access(&self) -> WebAccess {
        self.access
    }

    /// The wrapped service.
    #[must_use]
    pub const fn inner(&self) -> &S {
        &self.inner
    }

    /// Records that access was granted and returns the held request, which
    /// the caller must now dispatch.
    pub fn grant(&mut self) -> Option<SearchRequest> {
        self.access = WebAccess::Granted;
        let held = self.held.take();
        tracing::info!(released = held.is_some(), "web access granted");
        held
    }

    /// Records that access was denied and returns the sequence number of the
    /// held request, which the caller must fail.
    pub fn deny(&mut self) -> Option<RequestSeq> {
        self.access = WebAccess::Denied;
        let held = self.held.take().map(|request| request.seq);
        tracing::warn!(failed = ?held, "web access denied");
        held
    }
}

impl<S: SearchService> SearchService for PermissionGate<S> {
    fn dispatch(&mut self, request: &SearchRequest) -> Result<()> {
        match self.access {
            WebAccess::Granted => self.inner.dispatch(request),
            WebAccess::Pending => {
                if let Some(dropped) = self.held.replace(request.clone()) {
                    tracing::debug!(dropped = %dropped.seq, held = %request.seq, "replacing held request");
                } else {
                    tracing::debug!(held = %request.seq, "holding request until web access is granted");
                }
                Ok(())
            }
            WebAccess::Denied => Err(StargazerError::Transport(
                "web access permission denied".to_string(),
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Default)]
    struct Recorder(Vec<RequestSeq>);

    impl SearchService for Recorder {
        fn dispatch(&mut self, request: &SearchRequest) -> Result<()> {
            self.0.push(request.seq);
            Ok(())
        }
    }

    fn request(seq: u64) -> SearchRequest {
        SearchRequest::new(RequestSeq(seq), "pluto")
    }

    #[test]
    fn holds_latest_request_until_granted() {
        let mut gate = PermissionGate::new(Recorder::default());
        gate.dispatch(&request(1)).unwrap();
        gate.dispatch(&request(2)).unwrap();
        assert!(gate.inner().0.is_empty());

        let released = gate.grant().expect("held request");
        assert_eq!(released.seq, RequestSeq(2));
        gate.dispatch(&released).unwrap();
        gate.dispatch(&request(3)).unwrap();
        assert_eq!(gate.inner().0, vec![RequestSeq(2), RequestSeq(3)]);
    }

    #[test]
    fn denial_fails_held_and_future_requests() {
        let mut gate = PermissionGate::new(Recorder::default());
        gate.dispatch(&request(1)).unwrap();

        assert_eq!(gate.deny(), Some(RequestSeq(1)));
        assert_eq!(gate.access(), WebAccess::Denied);
        assert!(matches!(
            gate.dispatch(&request(2)),
            Err(StargazerError::Transport(_))
        ));
        assert!(gate.inner().0.is_empty());
    }

    #[test]
    fn grant_without_held_request() {
        let mut gate = PermissionGate::new(Recorder::default());
        assert!(gate.grant().is_none());
        gate.dispatch(&request(1)).unwrap();
        assert_eq!(gate.inner().0, vec![RequestSeq(1)]);
    }
}
