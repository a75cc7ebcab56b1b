// ============================================================================
// RESOURCE - lifecycle of one remote operation as renderable state
// ============================================================================
// Idle -> Pending -> (Fulfilled | Rejected), re-entered on every dispatch.
// Every dispatch carries a RequestId; only the newest one may settle, so a
// slow stale response can never overwrite a newer one.
// ============================================================================

/// Tag of one dispatch, issued in increasing order by the store
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

#[derive(Clone, Debug, PartialEq)]
pub enum Lifecycle<T> {
    Pending(RequestId),
    Fulfilled(RequestId, T),
    Rejected(RequestId, String),
}

impl<T> Lifecycle<T> {
    pub fn request_id(&self) -> RequestId {
        match self {
            Lifecycle::Pending(id) | Lifecycle::Fulfilled(id, _) | Lifecycle::Rejected(id, _) => {
                *id
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    Idle,
    Pending,
    Fulfilled,
    Rejected,
}

/// What a view should render for a resource
#[derive(Debug, PartialEq)]
pub enum ResourceView<'a, T> {
    Idle,
    Loading,
    Failed(&'a str),
    Ready(&'a T),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Resource<T> {
    data: Option<T>,
    loading: bool,
    error: Option<String>,
    status: Status,
    in_flight: Option<RequestId>,
}

impl<T> Default for Resource<T> {
    fn default() -> Self {
        Self {
            data: None,
            loading: false,
            error: None,
            status: Status::Idle,
            in_flight: None,
        }
    }
}

impl<T> Resource<T> {
    pub fn data(&self) -> Option<&T> {
        self.data.as_ref()
    }

    /// Explicit reducer writes into already loaded data
    pub fn data_mut(&mut self) -> Option<&mut T> {
        self.data.as_mut()
    }

    pub fn loading(&self) -> bool {
        self.loading
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn status(&self) -> Status {
        self.status
    }

    pub fn in_flight(&self) -> Option<RequestId> {
        self.in_flight
    }

    /// Applies one lifecycle step. Returns false when the step was stale
    /// and therefore ignored.
    pub fn apply(&mut self, step: Lifecycle<T>) -> bool {
        match step {
            Lifecycle::Pending(id) => {
                if matches!(self.in_flight, Some(current) if current > id) {
                    return false;
                }
                self.in_flight = Some(id);
                self.loading = true;
                self.error = None;
                self.status = Status::Pending;
                true
            }
            Lifecycle::Fulfilled(id, data) => {
                if self.in_flight != Some(id) {
                    return false;
                }
                self.in_flight = None;
                self.data = Some(data);
                self.loading = false;
                self.error = None;
                self.status = Status::Fulfilled;
                true
            }
            Lifecycle::Rejected(id, message) => {
                if self.in_flight != Some(id) {
                    return false;
                }
                self.in_flight = None;
                self.loading = false;
                self.error = Some(if message.trim().is_empty() {
                    "Something went wrong".to_string()
                } else {
                    message
                });
                self.status = Status::Rejected;
                true
            }
        }
    }

    pub fn view(&self) -> ResourceView<'_, T> {
        if self.loading {
            return ResourceView::Loading;
        }
        if let Some(error) = &self.error {
            return ResourceView::Failed(error);
        }
        match &self.data {
            Some(data) => ResourceView::Ready(data),
            None => ResourceView::Idle,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn resource_with(data: Vec<u8>) -> Resource<Vec<u8>> {
        let mut resource = Resource::default();
        resource.apply(Lifecycle::Pending(RequestId(1)));
        resource.apply(Lifecycle::Fulfilled(RequestId(1), data));
        resource
    }

    #[test]
    fn starts_idle() {
        let resource: Resource<u8> = Resource::default();
        assert_eq!(resource.status(), Status::Idle);
        assert_eq!(resource.view(), ResourceView::Idle);
        assert!(!resource.loading());
        assert!(resource.error().is_none());
    }

    #[test]
    fn pending_clears_error_but_keeps_data() {
        let mut resource = resource_with(vec![1]);
        resource.apply(Lifecycle::Pending(RequestId(2)));
        resource.apply(Lifecycle::Rejected(RequestId(2), "boom".to_string()));

        resource.apply(Lifecycle::Pending(RequestId(3)));
        assert!(resource.loading());
        assert_eq!(resource.error(), None);
        assert_eq!(resource.data(), Some(&vec![1]));
        assert_eq!(resource.view(), ResourceView::Loading);
    }

    #[test]
    fn rejection_keeps_previous_data() {
        let mut resource = resource_with(vec![7, 8]);
        resource.apply(Lifecycle::Pending(RequestId(2)));
        assert!(resource.apply(Lifecycle::Rejected(RequestId(2), "offline".to_string())));

        assert!(!resource.loading());
        assert_eq!(resource.error(), Some("offline"));
        assert_eq!(resource.data(), Some(&vec![7, 8]));
        assert_eq!(resource.status(), Status::Rejected);
    }

    #[test]
    fn blank_rejection_gets_generic_message() {
        let mut resource: Resource<u8> = Resource::default();
        resource.apply(Lifecycle::Pending(RequestId(1)));
        resource.apply(Lifecycle::Rejected(RequestId(1), "  ".to_string()));
        assert_eq!(resource.error(), Some("Something went wrong"));
    }

    #[test]
    fn superseded_settlements_are_ignored() {
        let mut resource: Resource<&str> = Resource::default();
        resource.apply(Lifecycle::Pending(RequestId(1)));
        resource.apply(Lifecycle::Pending(RequestId(2)));

        assert!(resource.apply(Lifecycle::Fulfilled(RequestId(2), "new")));
        assert!(!resource.apply(Lifecycle::Fulfilled(RequestId(1), "old")));
        assert!(!resource.apply(Lifecycle::Rejected(RequestId(1), "late".to_string())));

        assert_eq!(resource.data(), Some(&"new"));
        assert_eq!(resource.error(), None);
        assert_eq!(resource.status(), Status::Fulfilled);
    }

    #[test]
    fn older_pending_does_not_hijack_newer_request() {
        let mut resource: Resource<u8> = Resource::default();
        resource.apply(Lifecycle::Pending(RequestId(5)));
        assert!(!resource.apply(Lifecycle::Pending(RequestId(4))));
        assert_eq!(resource.in_flight(), Some(RequestId(5)));
    }

    #[test]
    fn loading_and_error_never_coexist() {
        let mut resource: Resource<u8> = Resource::default();
        let steps = vec![
            Lifecycle::Pending(RequestId(1)),
            Lifecycle::Rejected(RequestId(1), "x".to_string()),
            Lifecycle::Pending(RequestId(2)),
            Lifecycle::Fulfilled(RequestId(2), 3),
            Lifecycle::Pending(RequestId(3)),
        ];
        for step in steps {
            resource.apply(step);
            assert!(!(resource.loading() && resource.error().is_some()));
        }
    }
}
