//! In-memory transport for host-side tests.
//!
//! Records every request and answers from a queue of scripted replies.
//! A reply can be gated behind a oneshot channel so a test decides when,
//! and in which order, in-flight requests settle.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use futures::channel::oneshot;

use crate::services::error::ApiError;
use crate::services::transport::{HttpRequest, HttpResponse, Transport, TransportFuture};

type Reply = Result<HttpResponse, ApiError>;

enum Scripted {
    Ready(Reply),
    Gated(oneshot::Receiver<Reply>),
}

#[derive(Default)]
pub struct LoopbackTransport {
    requests: RefCell<Vec<HttpRequest>>,
    replies: RefCell<VecDeque<Scripted>>,
}

impl LoopbackTransport {
    pub fn new() -> Rc<Self> {
        Rc::new(Self::default())
    }

    pub fn reply(&self, response: HttpResponse) {
        self.replies
            .borrow_mut()
            .push_back(Scripted::Ready(Ok(response)));
    }

    pub fn reply_json(&self, status: u16, body: serde_json::Value) {
        self.reply(json_response(status, body));
    }

    pub fn fail(&self, err: ApiError) {
        self.replies.borrow_mut().push_back(Scripted::Ready(Err(err)));
    }

    /// Queues a reply that stays pending until the returned sender fires
    pub fn gate(&self) -> oneshot::Sender<Reply> {
        let (tx, rx) = oneshot::channel();
        self.replies.borrow_mut().push_back(Scripted::Gated(rx));
        tx
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.borrow().clone()
    }
}

impl Transport for LoopbackTransport {
    fn send(&self, request: HttpRequest) -> TransportFuture<'_> {
        self.requests.borrow_mut().push(request);
        let scripted = self.replies.borrow_mut().pop_front();
        Box::pin(async move {
            match scripted {
                Some(Scripted::Ready(reply)) => reply,
                Some(Scripted::Gated(rx)) => rx
                    .await
                    .unwrap_or_else(|_| Err(ApiError::Network("gate dropped".to_string()))),
                None => Err(ApiError::Network("no scripted reply".to_string())),
            }
        })
    }
}

pub fn json_response(status: u16, body: serde_json::Value) -> HttpResponse {
    HttpResponse {
        status,
        status_text: String::new(),
        headers: vec![("content-type".to_string(), "application/json".to_string())],
        body: serde_json::to_vec(&body).unwrap_or_default(),
    }
}
